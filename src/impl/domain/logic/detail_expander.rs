use std::cmp::Ordering;

use crate::{
    domain::{entities::snapshot::ReconciliationSnapshot, logic::quote_join},
    entities::{
        Account, DetailQuery, DetailSortKey, LineItem, ReconciliationConfig, ReportingContext,
        SortDirection,
    },
};

/// Re-derives the quotes behind one account's actual spend, using the same
/// join and window as the engine.
pub(crate) struct DetailExpander<'a> {
    snapshot: &'a ReconciliationSnapshot,
    ctx: &'a ReportingContext,
    config: &'a ReconciliationConfig,
}

impl<'a> DetailExpander<'a> {
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

    pub(crate) fn expand(&self, account: &Account, query: &DetailQuery) -> Vec<LineItem> {
        if self.config.excluded_accounts(self.ctx.mode).contains(account) {
            return Vec::new();
        }
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let precedence = self.config.precedence_for(self.ctx.mode);
        let mut items: Vec<LineItem> =
            quote_join::contributions(self.snapshot, self.ctx, precedence)
                .into_iter()
                .filter(|c| &c.request.account == account)
                .map(|c| LineItem {
                    kind: c.request.kind,
                    reference_id: c.request.reference_id.clone(),
                    title: c.request.title.clone(),
                    vendor: c.quote.vendor.clone(),
                    quote_value: c.quote.value,
                    invoice_value: c.quote.invoice_value,
                    value: c.value,
                    date: c.date,
                })
                .filter(|item| needle.as_deref().map_or(true, |n| matches_search(item, n)))
                .collect();

        items.sort_by(|a, b| compare(a, b, query));
        items
    }
}

fn matches_search(item: &LineItem, needle: &str) -> bool {
    [&item.vendor, &item.reference_id, &item.title]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn compare(a: &LineItem, b: &LineItem, query: &DetailQuery) -> Ordering {
    let primary = match query.sort {
        DetailSortKey::Value => a.value.total_cmp(&b.value),
        DetailSortKey::Date => a.date.cmp(&b.date),
        DetailSortKey::ReferenceId => a.reference_id.cmp(&b.reference_id),
        DetailSortKey::Vendor => a.vendor.to_lowercase().cmp(&b.vendor.to_lowercase()),
        DetailSortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    };
    let primary = match query.direction {
        SortDirection::Ascending => primary,
        SortDirection::Descending => primary.reverse(),
    };
    // Secondary keys stay ascending whatever the direction.
    primary
        .then_with(|| a.reference_id.cmp(&b.reference_id))
        .then_with(|| a.kind.cmp(&b.kind))
        .then_with(|| a.date.cmp(&b.date))
        .then_with(|| a.vendor.cmp(&b.vendor))
}
