use serde::Serialize;

/// Static sales metrics of a single branch (sede).
///
/// `cash_total` and `digital_total` are independent display figures and are
/// not reconciled against `sales`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchMetrics {
    /// Branch name, also the lookup key
    pub name: &'static str,
    /// Sales amount for the period
    pub sales: f64,
    /// Average ticket
    pub average_ticket: f64,
    pub order_count: u32,
    /// Average preparation time in minutes
    pub average_prep_minutes: u32,
    pub cash_total: f64,
    pub digital_total: f64,
    /// Register with the highest turnover
    pub top_register: &'static str,
    pub transaction_count: u32,
    /// CSS color used for the branch accents
    pub color: &'static str,
}

/// The four headline figures shown for the selected branch
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BranchSummary {
    pub sales: f64,
    pub average_ticket: f64,
    pub order_count: u32,
    pub average_prep_minutes: u32,
}

/// Split between cash and digital payments
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentMix {
    pub cash_total: f64,
    pub digital_total: f64,
    /// Share of cash in `cash_total + digital_total`, percent
    pub cash_percent: f64,
    /// Share of digital payments in `cash_total + digital_total`, percent
    pub digital_percent: f64,
}

/// One line of the sales ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedBranch<'a> {
    /// 1-based position in the ranking
    pub position: usize,
    pub branch: &'a BranchMetrics,
    /// Bar width relative to the best branch, 0..=100
    pub bar_width_percent: f64,
}

impl BranchMetrics {
    pub fn summary(&self) -> BranchSummary {
        BranchSummary {
            sales: self.sales,
            average_ticket: self.average_ticket,
            order_count: self.order_count,
            average_prep_minutes: self.average_prep_minutes,
        }
    }

    pub fn payment_mix(&self) -> PaymentMix {
        let total = self.cash_total + self.digital_total;
        let (cash_percent, digital_percent) = if total > 0.0 {
            (
                self.cash_total / total * 100.0,
                self.digital_total / total * 100.0,
            )
        } else {
            (0.0, 0.0)
        };

        PaymentMix {
            cash_total: self.cash_total,
            digital_total: self.digital_total,
            cash_percent,
            digital_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(cash_total: f64, digital_total: f64) -> BranchMetrics {
        BranchMetrics {
            name: "Prueba",
            sales: 1000.0,
            average_ticket: 100.0,
            order_count: 10,
            average_prep_minutes: 12,
            cash_total,
            digital_total,
            top_register: "Caja 1",
            transaction_count: 11,
            color: "#000000",
        }
    }

    #[test]
    fn test_summary_copies_record() {
        let b = branch(400.0, 600.0);
        let s = b.summary();
        assert_eq!(s.sales, 1000.0);
        assert_eq!(s.average_ticket, 100.0);
        assert_eq!(s.order_count, 10);
        assert_eq!(s.average_prep_minutes, 12);
    }

    #[test]
    fn test_payment_mix_percentages() {
        let mix = branch(400.0, 600.0).payment_mix();
        assert!((mix.cash_percent - 40.0).abs() < 1e-9);
        assert!((mix.digital_percent - 60.0).abs() < 1e-9);
        assert!((mix.cash_percent + mix.digital_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_payment_mix_not_reconciled_with_sales() {
        // totals deliberately differ from sales
        let mix = branch(10.0, 30.0).payment_mix();
        assert_eq!(mix.cash_total, 10.0);
        assert!((mix.digital_percent - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_payment_mix_zero_totals() {
        let mix = branch(0.0, 0.0).payment_mix();
        assert_eq!(mix.cash_percent, 0.0);
        assert_eq!(mix.digital_percent, 0.0);
    }
}
