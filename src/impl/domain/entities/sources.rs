use async_trait::async_trait;
use fractic_server_error::ServerError;

use super::{
    records::{
        AdjustmentRecord, BudgetRecord, ChargeOrigin, FixedChargeRecord, QuoteRecord,
        RequestRecord,
    },
    vessel::VesselId,
};

// Source adapters.
// ---
//
// Implemented outside the engine (database gateways, CSV snapshots, test
// fixtures). Each call returns a snapshot; the engine never writes back.

#[async_trait]
pub trait BudgetSource: Send + Sync {
    async fn list(&self, vessel: &VesselId, year: i32) -> Result<Vec<BudgetRecord>, ServerError>;
}

#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Every order, for every vessel.
    async fn list(&self) -> Result<Vec<RequestRecord>, ServerError>;
}

#[async_trait]
pub trait AssistanceSource: Send + Sync {
    /// Every assistance request, for every vessel.
    async fn list(&self) -> Result<Vec<RequestRecord>, ServerError>;
}

#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn list_accepted_for_orders(&self) -> Result<Vec<QuoteRecord>, ServerError>;
    async fn list_accepted_for_assistance(&self) -> Result<Vec<QuoteRecord>, ServerError>;
}

#[async_trait]
pub trait FixedChargeSource: Send + Sync {
    async fn list(
        &self,
        vessel: &VesselId,
        year: i32,
        origin: ChargeOrigin,
    ) -> Result<Vec<FixedChargeRecord>, ServerError>;
}

#[async_trait]
pub trait AdjustmentSource: Send + Sync {
    /// Adjustments are keyed by the vessel's display name, not its id.
    async fn list(
        &self,
        vessel_name: &str,
        year: i32,
        through_month: u32,
    ) -> Result<Vec<AdjustmentRecord>, ServerError>;
}

// Bundle.
// ---

pub trait Sources: Send + Sync {
    type B: BudgetSource;
    type O: OrderSource;
    type A: AssistanceSource;
    type Q: QuoteSource;
    type F: FixedChargeSource;
    type J: AdjustmentSource;

    fn budgets(&self) -> &Self::B;
    fn orders(&self) -> &Self::O;
    fn assistance(&self) -> &Self::A;
    fn quotes(&self) -> &Self::Q;
    fn fixed_charges(&self) -> &Self::F;
    fn adjustments(&self) -> &Self::J;
}

/// Any single type implementing every source is its own bundle.
impl<T> Sources for T
where
    T: BudgetSource
        + OrderSource
        + AssistanceSource
        + QuoteSource
        + FixedChargeSource
        + AdjustmentSource,
{
    type B = T;
    type O = T;
    type A = T;
    type Q = T;
    type F = T;
    type J = T;

    fn budgets(&self) -> &Self::B {
        self
    }
    fn orders(&self) -> &Self::O {
        self
    }
    fn assistance(&self) -> &Self::A {
        self
    }
    fn quotes(&self) -> &Self::Q {
        self
    }
    fn fixed_charges(&self) -> &Self::F {
        self
    }
    fn adjustments(&self) -> &Self::J {
        self
    }
}
