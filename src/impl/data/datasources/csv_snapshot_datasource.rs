use std::{path::Path, str::FromStr as _};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use ron::from_str;
use tracing::warn;

use crate::{
    data::models::{iso_date_model::ISODateModel, quote_status_model::QuoteStatusModel},
    domain::logic::period_resolver::PeriodResolver,
    entities::{
        AdjustmentRecord, AdjustmentSource, AssistanceSource, BudgetRecord, BudgetSource,
        ChargeKind, ChargeOrigin, FixedChargeRecord, FixedChargeSource, MonetaryField, MonthField,
        OrderSource, QuoteRecord, QuoteSource, QuoteStatus, RequestRecord, VesselId,
    },
    errors::{InvalidCsv, InvalidCsvContent, InvalidRon, ReadError},
};

/// Raw CSV text for each exported table.
#[derive(Debug, Clone, Default)]
pub struct CsvTables {
    pub budgets: String,
    pub orders: String,
    pub assistance: String,
    pub order_quotes: String,
    pub assistance_quotes: String,
    pub fixed_charges: String,
    pub adjustments: String,
}

/// Serves every source from CSV exports of the procurement database.
#[derive(Debug, Clone)]
pub struct CsvSnapshotDatasource {
    budgets: Vec<BudgetRecord>,
    orders: Vec<RequestRecord>,
    assistance: Vec<RequestRecord>,
    order_quotes: Vec<QuoteRecord>,
    assistance_quotes: Vec<QuoteRecord>,
    fixed_charges: Vec<FixedChargeRecord>,
    adjustments: Vec<AdjustmentRecord>,
}

const FIXED_CHARGE_LEADING_COLUMNS: usize = 6;

impl CsvSnapshotDatasource {
    pub fn from_tables(tables: &CsvTables) -> Result<Self, ServerError> {
        Ok(Self {
            budgets: parse_budgets(&tables.budgets)?,
            orders: parse_requests(&tables.orders)?,
            assistance: parse_requests(&tables.assistance)?,
            order_quotes: parse_quotes(&tables.order_quotes)?,
            assistance_quotes: parse_quotes(&tables.assistance_quotes)?,
            fixed_charges: parse_fixed_charges(&tables.fixed_charges)?,
            adjustments: parse_adjustments(&tables.adjustments)?,
        })
    }

    /// Reads `budgets.csv`, `orders.csv`, `assistance.csv`,
    /// `order_quotes.csv`, `assistance_quotes.csv`, `fixed_charges.csv` and
    /// `adjustments.csv` from the given directory.
    pub async fn from_dir<P>(dir: P) -> Result<Self, ServerError>
    where
        P: AsRef<Path> + Send,
    {
        let dir = dir.as_ref();
        let read = |name: &'static str| {
            let path = dir.join(name);
            async move {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| ReadError::with_debug(&e))
            }
        };
        let (
            budgets,
            orders,
            assistance,
            order_quotes,
            assistance_quotes,
            fixed_charges,
            adjustments,
        ) = futures::try_join!(
            read("budgets.csv"),
            read("orders.csv"),
            read("assistance.csv"),
            read("order_quotes.csv"),
            read("assistance_quotes.csv"),
            read("fixed_charges.csv"),
            read("adjustments.csv"),
        )?;
        Self::from_tables(&CsvTables {
            budgets,
            orders,
            assistance,
            order_quotes,
            assistance_quotes,
            fixed_charges,
            adjustments,
        })
    }
}

// Sources.
// ---

#[async_trait]
impl BudgetSource for CsvSnapshotDatasource {
    async fn list(&self, vessel: &VesselId, year: i32) -> Result<Vec<BudgetRecord>, ServerError> {
        Ok(self
            .budgets
            .iter()
            .filter(|r| &r.vessel == vessel && r.year == year)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl OrderSource for CsvSnapshotDatasource {
    async fn list(&self) -> Result<Vec<RequestRecord>, ServerError> {
        Ok(self.orders.clone())
    }
}

#[async_trait]
impl AssistanceSource for CsvSnapshotDatasource {
    async fn list(&self) -> Result<Vec<RequestRecord>, ServerError> {
        Ok(self.assistance.clone())
    }
}

#[async_trait]
impl QuoteSource for CsvSnapshotDatasource {
    async fn list_accepted_for_orders(&self) -> Result<Vec<QuoteRecord>, ServerError> {
        Ok(accepted(&self.order_quotes))
    }

    async fn list_accepted_for_assistance(&self) -> Result<Vec<QuoteRecord>, ServerError> {
        Ok(accepted(&self.assistance_quotes))
    }
}

#[async_trait]
impl FixedChargeSource for CsvSnapshotDatasource {
    async fn list(
        &self,
        vessel: &VesselId,
        year: i32,
        origin: ChargeOrigin,
    ) -> Result<Vec<FixedChargeRecord>, ServerError> {
        Ok(self
            .fixed_charges
            .iter()
            .filter(|r| &r.vessel == vessel && r.year == year && r.origin == origin)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AdjustmentSource for CsvSnapshotDatasource {
    async fn list(
        &self,
        vessel_name: &str,
        year: i32,
        through_month: u32,
    ) -> Result<Vec<AdjustmentRecord>, ServerError> {
        Ok(self
            .adjustments
            .iter()
            .filter(|r| r.vessel_name == vessel_name && r.year == year)
            // Unreadable months are passed through; normalization drops them.
            .filter(|r| PeriodResolver::resolve(&r.month).map_or(true, |m| m <= through_month))
            .cloned()
            .collect())
    }
}

fn accepted(quotes: &[QuoteRecord]) -> Vec<QuoteRecord> {
    quotes
        .iter()
        .filter(|q| q.status == QuoteStatus::Accepted)
        .cloned()
        .collect()
}

// Parsing.
// ---

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn monetary(raw: &str) -> MonetaryField {
    if raw.trim().is_empty() {
        MonetaryField::Missing
    } else {
        MonetaryField::Text(raw.to_string())
    }
}

fn year(raw: &str, table: &str) -> Option<i32> {
    let parsed = raw.trim().parse::<i32>().ok();
    if parsed.is_none() {
        warn!(table, year = raw, "unreadable year; row skipped");
    }
    parsed
}

/// Parses every record, keeping rows the row parser accepts.
fn parse_rows<T>(
    s: &str,
    f: impl Fn(&csv::StringRecord) -> Result<Option<T>, ServerError>,
) -> Result<Vec<T>, ServerError> {
    csv::Reader::from_reader(s.as_bytes())
        .records()
        .map(|r| r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| f(&r)))
        .filter_map(Result::transpose)
        .collect()
}

fn parse_budgets(s: &str) -> Result<Vec<BudgetRecord>, ServerError> {
    parse_rows(s, |r| {
        // Extract from CSV record.
        let raw_vessel = r.get(0).unwrap_or("");
        let raw_year = r.get(1).unwrap_or("");
        let raw_account = r.get(2).unwrap_or("");
        let raw_month = r.get(3).unwrap_or("");
        let raw_amount = r.get(4).unwrap_or("");

        // Build.
        Ok(year(raw_year, "budgets").map(|year| BudgetRecord {
            vessel: VesselId::from(raw_vessel.trim()),
            year,
            account: optional(raw_account),
            month: MonthField::from(raw_month),
            amount: monetary(raw_amount),
        }))
    })
}

fn parse_requests(s: &str) -> Result<Vec<RequestRecord>, ServerError> {
    parse_rows(s, |r| {
        let raw_reference_id = r.get(0).unwrap_or("");
        let raw_vessel = r.get(1).unwrap_or("");
        let raw_account = r.get(2).unwrap_or("");
        let raw_title = r.get(3).unwrap_or("");

        Ok(Some(RequestRecord {
            reference_id: raw_reference_id.trim().to_string(),
            vessel: VesselId::from(raw_vessel.trim()),
            account: optional(raw_account),
            title: raw_title.to_string(),
        }))
    })
}

fn parse_quotes(s: &str) -> Result<Vec<QuoteRecord>, ServerError> {
    parse_rows(s, |r| {
        // Extract from CSV record.
        let raw_parent = r.get(0).unwrap_or("");
        let raw_vendor = r.get(1).unwrap_or("");
        let raw_value = r.get(2).unwrap_or("");
        let raw_invoice_value = r.get(3).unwrap_or("");
        let raw_status = r.get(4).unwrap_or("");
        let raw_acceptance_date = r.get(5).unwrap_or("");

        // Parse.
        let status = QuoteStatusModel::from_str(raw_status)?;
        let acceptance_date = match optional(raw_acceptance_date) {
            Some(raw) => match ISODateModel::from_str(&raw) {
                Ok(d) => Some(d.into()),
                Err(_) => {
                    warn!(
                        parent = raw_parent,
                        date = raw.as_str(),
                        "unreadable acceptance date; quote treated as undated"
                    );
                    None
                }
            },
            None => None,
        };

        // Build.
        Ok(Some(QuoteRecord {
            parent_reference_id: raw_parent.trim().to_string(),
            vendor: raw_vendor.trim().to_string(),
            value: monetary(raw_value),
            invoice_value: monetary(raw_invoice_value),
            status: status.into(),
            acceptance_date,
        }))
    })
}

fn parse_fixed_charges(s: &str) -> Result<Vec<FixedChargeRecord>, ServerError> {
    let mut reader = csv::Reader::from_reader(s.as_bytes());
    let headers = reader.headers().map_err(|e| InvalidCsv::with_debug(&e))?;
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    if headers.len() < FIXED_CHARGE_LEADING_COLUMNS {
        return Err(InvalidCsvContent::new(
            "fixed charges need vessel, year, account, label, kind and origin columns",
        ));
    }
    // Month columns are identified by their header label ("Ene", "Feb", ...).
    let month_columns: Vec<MonthField> = headers
        .iter()
        .skip(FIXED_CHARGE_LEADING_COLUMNS)
        .map(MonthField::from)
        .collect();

    parse_rows(s, |r| {
        // Extract from CSV record.
        let raw_vessel = r.get(0).unwrap_or("");
        let raw_year = r.get(1).unwrap_or("");
        let raw_account = r.get(2).unwrap_or("");
        let raw_label = r.get(3).unwrap_or("");
        let raw_kind = r.get(4).unwrap_or("");
        let raw_origin = r.get(5).unwrap_or("");

        // Parse.
        let Some(year) = year(raw_year, "fixed_charges") else {
            return Ok(None);
        };
        let kind: ChargeKind =
            from_str(raw_kind.trim()).map_err(|e| InvalidRon::with_debug("ChargeKind", &e))?;
        let origin: ChargeOrigin =
            from_str(raw_origin.trim()).map_err(|e| InvalidRon::with_debug("ChargeOrigin", &e))?;
        let monthly_amounts = month_columns
            .iter()
            .zip(r.iter().skip(FIXED_CHARGE_LEADING_COLUMNS))
            .map(|(month, raw)| (month.clone(), monetary(raw)))
            .collect();

        // Build.
        Ok(Some(FixedChargeRecord {
            vessel: VesselId::from(raw_vessel.trim()),
            year,
            account: optional(raw_account),
            label: raw_label.trim().to_string(),
            kind,
            origin,
            monthly_amounts,
        }))
    })
}

fn parse_adjustments(s: &str) -> Result<Vec<AdjustmentRecord>, ServerError> {
    parse_rows(s, |r| {
        let raw_vessel_name = r.get(0).unwrap_or("");
        let raw_year = r.get(1).unwrap_or("");
        let raw_account = r.get(2).unwrap_or("");
        let raw_month = r.get(3).unwrap_or("");
        let raw_value = r.get(4).unwrap_or("");

        Ok(year(raw_year, "adjustments").map(|year| AdjustmentRecord {
            vessel_name: raw_vessel_name.trim().to_string(),
            year,
            account: optional(raw_account),
            month: MonthField::from(raw_month),
            value: monetary(raw_value),
        }))
    })
}
