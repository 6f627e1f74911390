use super::data::{default_branch, find_branch};
use super::dto::{BranchMetrics, BranchSummary};

/// Branch currently selected on a dashboard instance.
///
/// Owned per component; there is no process-wide selection.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchSelection {
    current: &'static BranchMetrics,
}

impl Default for BranchSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl BranchSelection {
    pub fn new() -> Self {
        Self {
            current: default_branch(),
        }
    }

    /// Switches to the branch called `name`.
    ///
    /// Unknown names leave the selection untouched. Returns `true` when the
    /// selected branch actually changed.
    pub fn select(&mut self, name: &str) -> bool {
        match find_branch(name) {
            Some(branch) if branch.name != self.current.name => {
                log::debug!("Branch selected: {} -> {}", self.current.name, branch.name);
                self.current = branch;
                true
            }
            Some(_) => false,
            None => {
                log::warn!("Unknown branch requested: {}", name);
                false
            }
        }
    }

    pub fn current(&self) -> &'static BranchMetrics {
        self.current
    }

    pub fn summary(&self) -> BranchSummary {
        self.current.summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_branch_analytics::data::all_branches;

    #[test]
    fn test_starts_on_default_branch() {
        assert_eq!(BranchSelection::new().current().name, default_branch().name);
    }

    #[test]
    fn test_switch_replaces_all_summary_stats() {
        let mut selection = BranchSelection::new();
        for branch in all_branches() {
            selection.select(branch.name);
            let summary = selection.summary();
            assert_eq!(summary.sales, branch.sales);
            assert_eq!(summary.average_ticket, branch.average_ticket);
            assert_eq!(summary.order_count, branch.order_count);
            assert_eq!(summary.average_prep_minutes, branch.average_prep_minutes);
        }
    }

    #[test]
    fn test_select_reports_change() {
        let mut selection = BranchSelection::new();
        let other = all_branches()[1].name;
        assert!(selection.select(other));
        assert!(!selection.select(other));
        assert_eq!(selection.current().name, other);
    }

    #[test]
    fn test_unknown_branch_keeps_selection() {
        let mut selection = BranchSelection::new();
        let before = selection.current().name;
        assert!(!selection.select("Atlántida"));
        assert_eq!(selection.current().name, before);
    }
}
