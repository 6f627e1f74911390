pub mod d410_branch_analytics;
