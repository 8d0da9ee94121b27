use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{
    domain::{
        entities::{
            procurement::{ProcurementRequest, VendorQuote},
            snapshot::ReconciliationSnapshot,
        },
        logic::period_resolver::PeriodResolver,
    },
    entities::{ReportingContext, ValuePrecedence},
};

/// An accepted quote inside the reporting window, joined to its parent
/// request.
pub(crate) struct Contribution<'a> {
    pub(crate) request: &'a ProcurementRequest,
    pub(crate) quote: &'a VendorQuote,
    pub(crate) date: NaiveDate,
    pub(crate) value: f64,
}

/// Joins order and assistance quotes to their parents by reference id.
/// Quotes outside the window, not accepted, or whose parent is not in the
/// snapshot (another vessel, deleted request) are dropped.
pub(crate) fn contributions<'a>(
    snapshot: &'a ReconciliationSnapshot,
    ctx: &ReportingContext,
    precedence: ValuePrecedence,
) -> Vec<Contribution<'a>> {
    let mut out = Vec::new();
    join_into(&mut out, &snapshot.orders, &snapshot.order_quotes, ctx, precedence);
    join_into(
        &mut out,
        &snapshot.assistance,
        &snapshot.assistance_quotes,
        ctx,
        precedence,
    );
    out
}

fn join_into<'a>(
    out: &mut Vec<Contribution<'a>>,
    requests: &'a [ProcurementRequest],
    quotes: &'a [VendorQuote],
    ctx: &ReportingContext,
    precedence: ValuePrecedence,
) {
    let mut by_reference: HashMap<&str, &ProcurementRequest> = HashMap::new();
    for request in requests {
        by_reference
            .entry(request.reference_id.as_str())
            .or_insert(request);
    }

    out.extend(quotes.iter().filter_map(|quote| {
        let date = quote.accepted_on()?;
        if !PeriodResolver::in_window(date, ctx.year, ctx.boundary_month, ctx.mode) {
            return None;
        }
        let request = by_reference
            .get(quote.parent_reference_id.as_str())
            .copied()?;
        Some(Contribution {
            request,
            quote,
            date,
            value: precedence.pick(quote.value, quote.invoice_value),
        })
    }));
}
