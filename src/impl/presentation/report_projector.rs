use crate::entities::{
    AccountSummary, AccumulatedReport, AccumulatedRow, MonthlyReport, MonthlyRow, ReportTotals,
    ReportingContext,
};

/// Shapes engine output into the two report views. Amounts stay numeric;
/// formatting belongs to whoever renders or exports the rows.
pub struct ReportProjector;

impl ReportProjector {
    pub fn monthly(ctx: &ReportingContext, summaries: &[AccountSummary]) -> MonthlyReport {
        let rows: Vec<MonthlyRow> = summaries
            .iter()
            .map(|s| MonthlyRow {
                account: s.account.clone(),
                budget: s.budget_for_period,
                actual: s.actual_for_period,
                balance: s.balance,
                fixed_informational: s.fixed_informational,
                planned_informational: s.planned_informational,
            })
            .collect();
        MonthlyReport {
            context: ctx.clone(),
            rows,
            totals: totals(summaries),
        }
    }

    pub fn accumulated(ctx: &ReportingContext, summaries: &[AccountSummary]) -> AccumulatedReport {
        let rows: Vec<AccumulatedRow> = summaries
            .iter()
            .map(|s| AccumulatedRow {
                account: s.account.clone(),
                budget: s.budget_for_period,
                actual: s.actual_for_period,
                adjustments: s.adjustments,
                balance: s.balance,
            })
            .collect();
        AccumulatedReport {
            context: ctx.clone(),
            rows,
            totals: totals(summaries),
        }
    }
}

fn totals(summaries: &[AccountSummary]) -> ReportTotals {
    let mut t = summaries.iter().fold(ReportTotals::default(), |acc, s| ReportTotals {
        budget: acc.budget + s.budget_for_period,
        actual: acc.actual + s.actual_for_period,
        adjustments: acc.adjustments + s.adjustments,
        balance: 0.0,
    });
    t.balance = t.budget - t.actual;
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Account, Vessel};

    fn summary(account: Account, budget: f64, actual: f64, adjustments: f64) -> AccountSummary {
        AccountSummary {
            account,
            budget_for_period: budget,
            actual_for_period: actual,
            fixed_informational: 10.0,
            planned_informational: 5.0,
            adjustments,
            balance: budget - actual,
        }
    }

    #[test]
    fn monthly_projection_keeps_order_and_sums_totals() {
        let ctx = ReportingContext::monthly(Vessel::new("V1", "Aurora", "North"), 2025, 3);
        let summaries = vec![
            summary(Account::Hull, 1000.0, 300.0, 0.0),
            summary(Account::Machinery, 500.0, 650.0, 0.0),
        ];
        let report = ReportProjector::monthly(&ctx, &summaries);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].account, Account::Hull);
        assert_eq!(report.rows[1].balance, -150.0);
        assert_eq!(report.rows[1].fixed_informational, 10.0);
        assert_eq!(report.totals.budget, 1500.0);
        assert_eq!(report.totals.actual, 950.0);
        assert_eq!(report.totals.balance, 550.0);
    }

    #[test]
    fn accumulated_projection_carries_adjustments() {
        let ctx = ReportingContext::accumulated(Vessel::new("V1", "Aurora", "North"), 2025, 6);
        let summaries = vec![summary(Account::Lubricants, 200.0, 260.0, 60.0)];
        let report = ReportProjector::accumulated(&ctx, &summaries);
        assert_eq!(report.rows[0].adjustments, 60.0);
        assert_eq!(report.totals.adjustments, 60.0);
        assert_eq!(report.totals.balance, -60.0);
    }

    #[test]
    fn empty_summaries_project_to_zero_totals() {
        let ctx = ReportingContext::monthly(Vessel::new("V1", "Aurora", "North"), 2025, 1);
        let report = ReportProjector::monthly(&ctx, &[]);
        assert!(report.rows.is_empty());
        assert_eq!(report.totals, ReportTotals::default());
    }
}
