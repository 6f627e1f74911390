use crate::shared::export::CsvExportable;
use crate::shared::number_format::format_number_with_decimals;
use contracts::dashboards::d410_branch_analytics::RankedBranch;

pub const RANKING_FILE_NAME: &str = "ranking-sedes.csv";

impl CsvExportable for RankedBranch<'_> {
    fn headers() -> Vec<&'static str> {
        vec![
            "Posición",
            "Sede",
            "Ventas",
            "Pedidos",
            "Ticket promedio",
            "% del líder",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.position.to_string(),
            self.branch.name.to_string(),
            format!("{:.2}", self.branch.sales),
            self.branch.order_count.to_string(),
            format!("{:.2}", self.branch.average_ticket),
            format_number_with_decimals(self.bar_width_percent, 2),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;
    use contracts::dashboards::d410_branch_analytics::{all_branches, rank_by_sales};

    #[test]
    fn test_ranking_csv_follows_ranking_order() {
        let ranked = rank_by_sales(all_branches());
        let csv = build_csv(&ranked);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), all_branches().len() + 1);
        assert!(lines[0].ends_with("Posición;Sede;Ventas;Pedidos;Ticket promedio;% del líder"));
        assert!(lines[1].starts_with("1;Centro;450000.00;"));
        assert!(lines[1].ends_with(";100.00"));
    }
}
