use super::dto::{BranchMetrics, RankedBranch};

/// Width of a ranking bar relative to the best branch, in percent.
///
/// Returns 0 when `max_sales` is not positive.
pub fn bar_width_percent(sales: f64, max_sales: f64) -> f64 {
    if max_sales <= 0.0 {
        return 0.0;
    }
    sales / max_sales * 100.0
}

/// Orders branches by descending sales.
///
/// The sort is stable: branches with equal sales keep their table order.
pub fn rank_by_sales(branches: &[BranchMetrics]) -> Vec<RankedBranch<'_>> {
    let max_sales = branches.iter().map(|b| b.sales).fold(0.0_f64, f64::max);

    let mut ordered: Vec<&BranchMetrics> = branches.iter().collect();
    ordered.sort_by(|a, b| b.sales.total_cmp(&a.sales));

    ordered
        .into_iter()
        .enumerate()
        .map(|(idx, branch)| RankedBranch {
            position: idx + 1,
            branch,
            bar_width_percent: bar_width_percent(branch.sales, max_sales),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(name: &'static str, sales: f64) -> BranchMetrics {
        BranchMetrics {
            name,
            sales,
            average_ticket: 0.0,
            order_count: 0,
            average_prep_minutes: 0,
            cash_total: 0.0,
            digital_total: 0.0,
            top_register: "",
            transaction_count: 0,
            color: "",
        }
    }

    #[test]
    fn test_rank_by_sales_order() {
        let branches = vec![
            branch("A", 450_000.0),
            branch("B", 380_000.0),
            branch("C", 420_000.0),
        ];
        let ranked = rank_by_sales(&branches);
        let names: Vec<_> = ranked.iter().map(|r| r.branch.name).collect();
        assert_eq!(names, vec!["A", "C", "B"]);
        assert_eq!(
            ranked.iter().map(|r| r.position).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_bar_width_relative_to_max() {
        let branches = vec![
            branch("A", 450_000.0),
            branch("B", 380_000.0),
            branch("C", 420_000.0),
        ];
        let ranked = rank_by_sales(&branches);
        assert_eq!(ranked[0].bar_width_percent, 100.0);

        let b = ranked.iter().find(|r| r.branch.name == "B").unwrap();
        assert!((b.bar_width_percent - 84.444_444).abs() < 1e-4);
    }

    #[test]
    fn test_ties_keep_table_order() {
        let branches = vec![
            branch("X", 100.0),
            branch("Y", 200.0),
            branch("Z", 100.0),
        ];
        let names: Vec<_> = rank_by_sales(&branches)
            .iter()
            .map(|r| r.branch.name)
            .collect();
        assert_eq!(names, vec!["Y", "X", "Z"]);
    }

    #[test]
    fn test_empty_and_zero_sales() {
        assert!(rank_by_sales(&[]).is_empty());

        let branches = vec![branch("A", 0.0), branch("B", 0.0)];
        assert!(rank_by_sales(&branches)
            .iter()
            .all(|r| r.bar_width_percent == 0.0));
        assert_eq!(bar_width_percent(10.0, 0.0), 0.0);
    }
}
