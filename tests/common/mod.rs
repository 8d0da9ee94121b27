#![allow(dead_code)]

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use fleet_budget_reconciliation::{
    entities::{
        AdjustmentRecord, AdjustmentSource, AssistanceSource, BudgetRecord, BudgetSource,
        ChargeKind, ChargeOrigin, FixedChargeRecord, FixedChargeSource, MonetaryField, MonthField,
        OrderSource, QuoteRecord, QuoteSource, QuoteStatus, RequestRecord, Vessel, VesselId,
    },
    errors::SourceReadFailed,
};
use fractic_server_error::ServerError;

pub fn vessel() -> Vessel {
    Vessel::new("V1", "Aurora", "North")
}

pub fn other_vessel() -> Vessel {
    Vessel::new("V2", "Borealis", "North")
}

/// In-memory stand-in for every source. Filters the way a real adapter would
/// (vessel, year, origin) but hands back quotes of every status.
#[derive(Debug, Clone, Default)]
pub struct Fixture {
    pub budgets: Vec<BudgetRecord>,
    pub orders: Vec<RequestRecord>,
    pub assistance: Vec<RequestRecord>,
    pub order_quotes: Vec<QuoteRecord>,
    pub assistance_quotes: Vec<QuoteRecord>,
    pub fixed_charges: Vec<FixedChargeRecord>,
    pub adjustments: Vec<AdjustmentRecord>,
    /// Name of a source that should fail ("budgets", "orders", ...).
    pub failing: Option<&'static str>,
    /// Artificial latency applied to the budget read.
    pub budget_delay: Option<Duration>,
    /// Budgets and fixed charges come back for every vessel, like a
    /// fleet-wide export.
    pub fleet_wide: bool,
}

impl Fixture {
    pub fn budget(mut self, account: &str, month: impl Into<MonthField>, amount: f64) -> Self {
        self.budgets.push(BudgetRecord {
            vessel: vessel().id,
            year: 2025,
            account: Some(account.to_string()),
            month: month.into(),
            amount: amount.into(),
        });
        self
    }

    pub fn order(mut self, reference_id: &str, account: &str, title: &str) -> Self {
        self.orders.push(request(reference_id, &vessel().id, account, title));
        self
    }

    pub fn assistance(mut self, reference_id: &str, account: &str, title: &str) -> Self {
        self.assistance
            .push(request(reference_id, &vessel().id, account, title));
        self
    }

    pub fn order_quote(
        mut self,
        parent: &str,
        vendor: &str,
        value: f64,
        status: QuoteStatus,
        date: (i32, u32, u32),
    ) -> Self {
        self.order_quotes
            .push(quote(parent, vendor, value, MonetaryField::Missing, status, date));
        self
    }

    pub fn invoiced_order_quote(
        mut self,
        parent: &str,
        vendor: &str,
        value: f64,
        invoice_value: f64,
        date: (i32, u32, u32),
    ) -> Self {
        self.order_quotes.push(quote(
            parent,
            vendor,
            value,
            invoice_value.into(),
            QuoteStatus::Accepted,
            date,
        ));
        self
    }

    pub fn assistance_quote(
        mut self,
        parent: &str,
        vendor: &str,
        value: f64,
        date: (i32, u32, u32),
    ) -> Self {
        self.assistance_quotes.push(quote(
            parent,
            vendor,
            value,
            MonetaryField::Missing,
            QuoteStatus::Accepted,
            date,
        ));
        self
    }

    pub fn fixed_charge(self, account: &str, kind: ChargeKind, month: &str, amount: f64) -> Self {
        self.fixed_charge_columns(account, kind, vec![(month.into(), amount.into())])
    }

    /// One charge row with arbitrary month columns, as a spreadsheet export
    /// would carry them.
    pub fn fixed_charge_columns(
        mut self,
        account: &str,
        kind: ChargeKind,
        monthly_amounts: Vec<(MonthField, MonetaryField)>,
    ) -> Self {
        self.fixed_charges.push(FixedChargeRecord {
            vessel: vessel().id,
            year: 2025,
            account: Some(account.to_string()),
            label: format!("{account} charge"),
            kind,
            origin: ChargeOrigin::Orders,
            monthly_amounts,
        });
        self
    }

    pub fn adjustment(mut self, account: &str, month: u32, value: f64) -> Self {
        self.adjustments.push(AdjustmentRecord {
            vessel_name: vessel().name,
            year: 2025,
            account: Some(account.to_string()),
            month: month.into(),
            value: value.into(),
        });
        self
    }

    pub fn failing(mut self, source_name: &'static str) -> Self {
        self.failing = Some(source_name);
        self
    }

    pub fn slow_budgets(mut self, delay: Duration) -> Self {
        self.budget_delay = Some(delay);
        self
    }

    pub fn fleet_wide(mut self) -> Self {
        self.fleet_wide = true;
        self
    }

    fn check(&self, source_name: &str) -> Result<(), ServerError> {
        match self.failing {
            Some(f) if f == source_name => Err(SourceReadFailed::new("connection reset")),
            _ => Ok(()),
        }
    }
}

/// Scenario 1 data: one Hull budget in March and one accepted March quote.
pub fn hull_march() -> Fixture {
    Fixture::default()
        .budget("Hull", "Mar", 1000.0)
        .order("OC-1", "Hull", "Antifouling paint")
        .order_quote("OC-1", "Marine Coatings", 300.0, QuoteStatus::Accepted, (2025, 3, 15))
}

pub fn request(reference_id: &str, vessel: &VesselId, account: &str, title: &str) -> RequestRecord {
    RequestRecord {
        reference_id: reference_id.to_string(),
        vessel: vessel.clone(),
        account: Some(account.to_string()),
        title: title.to_string(),
    }
}

pub fn quote(
    parent: &str,
    vendor: &str,
    value: f64,
    invoice_value: MonetaryField,
    status: QuoteStatus,
    (y, m, d): (i32, u32, u32),
) -> QuoteRecord {
    QuoteRecord {
        parent_reference_id: parent.to_string(),
        vendor: vendor.to_string(),
        value: value.into(),
        invoice_value,
        status,
        acceptance_date: NaiveDate::from_ymd_opt(y, m, d),
    }
}

#[async_trait]
impl BudgetSource for Fixture {
    async fn list(&self, vessel: &VesselId, year: i32) -> Result<Vec<BudgetRecord>, ServerError> {
        if let Some(delay) = self.budget_delay {
            tokio::time::sleep(delay).await;
        }
        self.check("budgets")?;
        Ok(self
            .budgets
            .iter()
            .filter(|r| self.fleet_wide || (&r.vessel == vessel && r.year == year))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl OrderSource for Fixture {
    async fn list(&self) -> Result<Vec<RequestRecord>, ServerError> {
        self.check("orders")?;
        Ok(self.orders.clone())
    }
}

#[async_trait]
impl AssistanceSource for Fixture {
    async fn list(&self) -> Result<Vec<RequestRecord>, ServerError> {
        self.check("assistance")?;
        Ok(self.assistance.clone())
    }
}

#[async_trait]
impl QuoteSource for Fixture {
    async fn list_accepted_for_orders(&self) -> Result<Vec<QuoteRecord>, ServerError> {
        self.check("order_quotes")?;
        Ok(self.order_quotes.clone())
    }

    async fn list_accepted_for_assistance(&self) -> Result<Vec<QuoteRecord>, ServerError> {
        self.check("assistance_quotes")?;
        Ok(self.assistance_quotes.clone())
    }
}

#[async_trait]
impl FixedChargeSource for Fixture {
    async fn list(
        &self,
        vessel: &VesselId,
        year: i32,
        origin: ChargeOrigin,
    ) -> Result<Vec<FixedChargeRecord>, ServerError> {
        self.check("fixed_charges")?;
        Ok(self
            .fixed_charges
            .iter()
            .filter(|r| r.origin == origin)
            .filter(|r| self.fleet_wide || (&r.vessel == vessel && r.year == year))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AdjustmentSource for Fixture {
    async fn list(
        &self,
        vessel_name: &str,
        year: i32,
        _through_month: u32,
    ) -> Result<Vec<AdjustmentRecord>, ServerError> {
        self.check("adjustments")?;
        Ok(self
            .adjustments
            .iter()
            .filter(|r| r.vessel_name == vessel_name && r.year == year)
            .cloned()
            .collect())
    }
}
