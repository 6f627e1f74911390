pub mod data;
pub mod dto;
pub mod ranking;
pub mod selection;

pub use data::{all_branches, default_branch, find_branch};
pub use dto::{BranchMetrics, BranchSummary, PaymentMix, RankedBranch};
pub use ranking::{bar_width_percent, rank_by_sales};
pub use selection::BranchSelection;

/// Key of the dashboard in the navigation
pub const DASHBOARD_KEY: &str = "d410_branch_analytics";

/// Title of the dashboard
pub const DASHBOARD_TITLE: &str = "Analítica por sede";
