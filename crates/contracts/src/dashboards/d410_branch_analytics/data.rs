//! Static branch table. Constant for the lifetime of the app.

use super::dto::BranchMetrics;

static BRANCHES: &[BranchMetrics] = &[
    BranchMetrics {
        name: "Centro",
        sales: 450_000.0,
        average_ticket: 285.0,
        order_count: 1_579,
        average_prep_minutes: 14,
        cash_total: 162_000.0,
        digital_total: 288_000.0,
        top_register: "Caja 2",
        transaction_count: 1_612,
        color: "#2563eb",
    },
    BranchMetrics {
        name: "Norte",
        sales: 380_000.0,
        average_ticket: 240.0,
        order_count: 1_583,
        average_prep_minutes: 12,
        cash_total: 133_000.0,
        digital_total: 247_000.0,
        top_register: "Caja 3",
        transaction_count: 1_597,
        color: "#f59e0b",
    },
    BranchMetrics {
        name: "Sur",
        sales: 420_000.0,
        average_ticket: 265.0,
        order_count: 1_585,
        average_prep_minutes: 16,
        cash_total: 151_200.0,
        digital_total: 268_800.0,
        top_register: "Caja 1",
        transaction_count: 1_601,
        color: "#16a34a",
    },
    BranchMetrics {
        name: "Poniente",
        sales: 295_000.0,
        average_ticket: 220.0,
        order_count: 1_341,
        average_prep_minutes: 18,
        cash_total: 118_000.0,
        digital_total: 177_000.0,
        top_register: "Caja 1",
        transaction_count: 1_360,
        color: "#db2777",
    },
];

/// All branches in declaration order
pub fn all_branches() -> &'static [BranchMetrics] {
    BRANCHES
}

pub fn find_branch(name: &str) -> Option<&'static BranchMetrics> {
    BRANCHES.iter().find(|b| b.name == name)
}

/// Branch selected when the dashboard opens
pub fn default_branch() -> &'static BranchMetrics {
    &BRANCHES[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_branch_names_unique() {
        let names: HashSet<_> = all_branches().iter().map(|b| b.name).collect();
        assert_eq!(names.len(), all_branches().len());
    }

    #[test]
    fn test_find_branch() {
        assert_eq!(find_branch("Sur").map(|b| b.sales), Some(420_000.0));
        assert!(find_branch("Inexistente").is_none());
        assert!(find_branch("sur").is_none());
    }

    #[test]
    fn test_default_branch_is_first() {
        assert_eq!(default_branch().name, all_branches()[0].name);
    }
}
