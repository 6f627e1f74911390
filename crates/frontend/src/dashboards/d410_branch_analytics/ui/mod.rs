mod dashboard;

pub use dashboard::BranchAnalyticsDashboard;
