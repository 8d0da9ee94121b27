use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::{
    domain::{
        entities::snapshot::ReconciliationSnapshot,
        logic::{account_catalog::AccountCatalog, period_resolver::PeriodResolver, quote_join},
    },
    entities::{
        Account, AccountSummary, AdjustmentPolicy, ChargeKind, ReconciliationConfig,
        ReportingContext,
    },
};

#[derive(Default)]
struct AccountTotals {
    budget: f64,
    quotes: f64,
    fixed: f64,
    planned: f64,
    adjustments: f64,
    adjustment_rows: usize,
}

/// Pure projection of a snapshot into per-account summaries.
pub(crate) struct ReconciliationEngine<'a> {
    snapshot: &'a ReconciliationSnapshot,
    ctx: &'a ReportingContext,
    config: &'a ReconciliationConfig,
}

impl<'a> ReconciliationEngine<'a> {
    pub(crate) fn new(
        snapshot: &'a ReconciliationSnapshot,
        ctx: &'a ReportingContext,
        config: &'a ReconciliationConfig,
    ) -> Self {
        Self {
            snapshot,
            ctx,
            config,
        }
    }

    pub(crate) fn process(&self) -> Vec<AccountSummary> {
        let keys = self.account_keys();
        let mut totals: HashMap<&Account, AccountTotals> = keys
            .iter()
            .map(|account| (account, AccountTotals::default()))
            .collect();

        // Budget.
        for entry in &self.snapshot.budget_entries {
            if !self.month_in_window(entry.month) {
                continue;
            }
            if let Some(t) = totals.get_mut(&entry.account) {
                t.budget += entry.amount;
            }
        }

        // Actual spend from accepted quotes.
        let precedence = self.config.precedence_for(self.ctx.mode);
        for c in quote_join::contributions(self.snapshot, self.ctx, precedence) {
            if let Some(t) = totals.get_mut(&c.request.account) {
                t.quotes += c.value;
            }
        }

        // Informational fixed / planned charges.
        let months = PeriodResolver::window_months(self.ctx.boundary_month, self.ctx.mode);
        for charge in &self.snapshot.fixed_charges {
            let Some(t) = totals.get_mut(&charge.account) else {
                continue;
            };
            let amount: f64 = months.clone().map(|m| charge.amount_for(m)).sum();
            debug!(
                label = charge.label.as_str(),
                kind = ?charge.kind,
                origin = ?charge.origin,
                amount,
                "informational charge"
            );
            match charge.kind {
                ChargeKind::Fixed => t.fixed += amount,
                ChargeKind::Planned => t.planned += amount,
            }
        }

        // Manual adjustments (accumulated reports only).
        let accumulated = self.ctx.is_accumulated();
        for adjustment in self.snapshot.adjustments.iter().filter(|_| accumulated) {
            if !self.month_in_window(adjustment.month) {
                continue;
            }
            match totals.get_mut(&adjustment.account) {
                Some(t) => {
                    t.adjustments += adjustment.value;
                    t.adjustment_rows += 1;
                }
                None => debug!(
                    account = %adjustment.account,
                    month = adjustment.month,
                    "ignoring adjustment for account outside the report"
                ),
            }
        }

        let mut summaries: Vec<AccountSummary> = totals
            .into_iter()
            .map(|(account, t)| {
                let actual = self.combine_actual(&t);
                AccountSummary {
                    account: account.clone(),
                    budget_for_period: t.budget,
                    actual_for_period: actual,
                    fixed_informational: t.fixed,
                    planned_informational: t.planned,
                    adjustments: t.adjustments,
                    balance: t.budget - actual,
                }
            })
            .collect();
        summaries.sort_by(|a, b| AccountCatalog::compare(&a.account, &b.account));
        summaries
    }

    /// Union of accounts seen in budgets, fixed charges, orders and assistance
    /// requests, minus the accounts excluded for this mode.
    fn account_keys(&self) -> HashSet<Account> {
        let excluded = self.config.excluded_accounts(self.ctx.mode);
        let s = self.snapshot;
        s.budget_entries
            .iter()
            .map(|e| &e.account)
            .chain(s.fixed_charges.iter().map(|e| &e.account))
            .chain(s.orders.iter().map(|r| &r.account))
            .chain(s.assistance.iter().map(|r| &r.account))
            .filter(|a| !excluded.contains(a))
            .cloned()
            .collect()
    }

    fn combine_actual(&self, t: &AccountTotals) -> f64 {
        if !self.ctx.is_accumulated() {
            return t.quotes;
        }
        match self.config.adjustment_policy {
            AdjustmentPolicy::Additive => t.quotes + t.adjustments,
            AdjustmentPolicy::Override if t.adjustment_rows > 0 => t.adjustments,
            AdjustmentPolicy::Override => t.quotes,
            AdjustmentPolicy::Subtractive => t.adjustments - t.quotes,
        }
    }

    fn month_in_window(&self, month: u32) -> bool {
        PeriodResolver::month_in_window(month, self.ctx.boundary_month, self.ctx.mode)
    }
}
