use std::{future::Future, time::Duration};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::warn;

use crate::{
    data::models::{amount_model::AmountModel, month_model::MonthModel},
    domain::{
        entities::{
            budget::{BudgetEntry, FixedChargeEntry, ManualAdjustment},
            procurement::{ProcurementRequest, VendorQuote},
            snapshot::ReconciliationSnapshot,
        },
        logic::account_catalog::AccountCatalog,
        repositories::snapshot_repository::SnapshotRepository,
    },
    entities::{
        AdjustmentRecord, AdjustmentSource, AssistanceSource, BudgetRecord, BudgetSource,
        ChargeOrigin, FixedChargeRecord, FixedChargeSource, OrderSource, QuoteRecord, QuoteSource,
        ReportingContext, RequestKind, RequestRecord, Sources, VesselId,
    },
    errors::{SourceTimeout, SourceUnavailable},
};

pub(crate) struct SnapshotRepositoryImpl<S: Sources> {
    sources: S,
    timeout: Option<Duration>,
}

impl<S: Sources> SnapshotRepositoryImpl<S> {
    pub(crate) fn new(sources: S, timeout_ms: Option<u64>) -> Self {
        Self {
            sources,
            timeout: timeout_ms.map(Duration::from_millis),
        }
    }
}

#[async_trait]
impl<S: Sources> SnapshotRepository for SnapshotRepositoryImpl<S> {
    async fn snapshot(
        &self,
        ctx: &ReportingContext,
    ) -> Result<ReconciliationSnapshot, ServerError> {
        let s = &self.sources;
        let t = self.timeout;
        let vessel = &ctx.vessel.id;
        let year = ctx.year;

        let adjustments = async {
            if ctx.is_accumulated() {
                AdjustmentSource::list(s.adjustments(), &ctx.vessel.name, year, ctx.boundary_month)
                    .await
            } else {
                Ok(Vec::new())
            }
        };

        // Independent reads; no ordering between them is assumed.
        let (
            budgets,
            orders,
            assistance,
            order_quotes,
            assistance_quotes,
            fixed_from_orders,
            fixed_from_assistance,
            adjustments,
        ) = futures::try_join!(
            guarded("budgets", t, BudgetSource::list(s.budgets(), vessel, year)),
            guarded("orders", t, OrderSource::list(s.orders())),
            guarded("assistance", t, AssistanceSource::list(s.assistance())),
            guarded("order_quotes", t, s.quotes().list_accepted_for_orders()),
            guarded(
                "assistance_quotes",
                t,
                s.quotes().list_accepted_for_assistance()
            ),
            guarded(
                "fixed_charges_orders",
                t,
                FixedChargeSource::list(s.fixed_charges(), vessel, year, ChargeOrigin::Orders)
            ),
            guarded(
                "fixed_charges_assistance",
                t,
                FixedChargeSource::list(s.fixed_charges(), vessel, year, ChargeOrigin::Assistance)
            ),
            guarded("adjustments", t, adjustments),
        )?;

        Ok(ReconciliationSnapshot {
            budget_entries: normalize_budgets(budgets, vessel, year),
            orders: normalize_requests(orders, RequestKind::Order, vessel),
            order_quotes: normalize_quotes(order_quotes),
            assistance: normalize_requests(assistance, RequestKind::Assistance, vessel),
            assistance_quotes: normalize_quotes(assistance_quotes),
            fixed_charges: normalize_fixed_charges(
                fixed_from_orders.into_iter().chain(fixed_from_assistance),
                vessel,
                year,
            ),
            adjustments: normalize_adjustments(adjustments, year),
        })
    }
}

/// Runs one source read under the optional time limit, tagging any failure
/// with the source it came from.
async fn guarded<T, F>(
    source_name: &'static str,
    timeout: Option<Duration>,
    read: F,
) -> Result<T, ServerError>
where
    F: Future<Output = Result<T, ServerError>>,
{
    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, read).await {
            Ok(r) => r,
            Err(_) => {
                let timeout_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
                warn!(source = source_name, timeout_ms, "source read timed out");
                return Err(SourceTimeout::new(source_name, timeout_ms));
            }
        },
        None => read.await,
    };
    result.map_err(|e| {
        warn!(source = source_name, error = ?e, "source read failed");
        SourceUnavailable::with_debug(source_name, &e)
    })
}

// Normalization.
// ---

fn normalize_budgets(
    records: Vec<BudgetRecord>,
    vessel: &VesselId,
    year: i32,
) -> Vec<BudgetEntry> {
    records
        .into_iter()
        .filter(|r| &r.vessel == vessel && r.year == year)
        .filter_map(|r| {
            let MonthModel(month) = MonthModel::normalize(&r.month, "budget")?;
            Some(BudgetEntry {
                account: AccountCatalog::resolve(r.account.as_deref()),
                month,
                amount: AmountModel::coerce(&r.amount, "budget.amount"),
            })
        })
        .collect()
}

fn normalize_requests(
    records: Vec<RequestRecord>,
    kind: RequestKind,
    vessel: &VesselId,
) -> Vec<ProcurementRequest> {
    records
        .into_iter()
        .filter(|r| &r.vessel == vessel)
        .map(|r| ProcurementRequest {
            kind,
            account: AccountCatalog::resolve(r.account.as_deref()),
            reference_id: r.reference_id,
            title: r.title,
        })
        .collect()
}

fn normalize_quotes(records: Vec<QuoteRecord>) -> Vec<VendorQuote> {
    records
        .into_iter()
        .map(|r| VendorQuote {
            value: AmountModel::coerce(&r.value, "quote.value"),
            invoice_value: AmountModel::coerce_optional(&r.invoice_value, "quote.invoice_value"),
            parent_reference_id: r.parent_reference_id,
            vendor: r.vendor,
            status: r.status,
            acceptance_date: r.acceptance_date,
        })
        .collect()
}

fn normalize_fixed_charges(
    records: impl Iterator<Item = FixedChargeRecord>,
    vessel: &VesselId,
    year: i32,
) -> Vec<FixedChargeEntry> {
    records
        .filter(|r| &r.vessel == vessel && r.year == year)
        .map(|r| {
            let mut monthly_amounts = [0.0; 12];
            for (month, amount) in &r.monthly_amounts {
                let Some(MonthModel(m)) = MonthModel::normalize(month, "fixed_charge") else {
                    continue;
                };
                // Repeated month columns add up.
                monthly_amounts[(m - 1) as usize] +=
                    AmountModel::coerce(amount, "fixed_charge.amount");
            }
            FixedChargeEntry {
                account: AccountCatalog::resolve(r.account.as_deref()),
                label: r.label,
                kind: r.kind,
                origin: r.origin,
                monthly_amounts,
            }
        })
        .collect()
}

fn normalize_adjustments(records: Vec<AdjustmentRecord>, year: i32) -> Vec<ManualAdjustment> {
    records
        .into_iter()
        .filter(|r| r.year == year)
        .filter_map(|r| {
            let MonthModel(month) = MonthModel::normalize(&r.month, "adjustment")?;
            Some(ManualAdjustment {
                account: AccountCatalog::resolve(r.account.as_deref()),
                month,
                value: AmountModel::coerce(&r.value, "adjustment.value"),
            })
        })
        .collect()
}
