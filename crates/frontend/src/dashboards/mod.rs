pub mod d410_branch_analytics;

pub use d410_branch_analytics::ui::BranchAnalyticsDashboard;
