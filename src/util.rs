use fractic_server_error::ServerError;

use crate::{
    domain::usecases::reconciliation_usecase::{
        ReconciliationUsecase as _, ReconciliationUsecaseImpl,
    },
    entities::{
        Account, AccountSummary, AccumulatedReport, DetailQuery, LineItem, MonthlyReport,
        ReconciliationConfig, ReportingContext, Sources, Vessel,
    },
    presentation::report_projector::ReportProjector,
};

pub struct BudgetReconciliationUtil<S: Sources> {
    reconciliation_usecase: ReconciliationUsecaseImpl<S>,
}

impl<S: Sources> BudgetReconciliationUtil<S> {
    pub fn new(sources: S) -> Self {
        Self::with_config(sources, ReconciliationConfig::default())
    }

    pub fn with_config(sources: S, config: ReconciliationConfig) -> Self {
        Self {
            reconciliation_usecase: ReconciliationUsecaseImpl::new(sources, config),
        }
    }

    pub async fn compute_summary(
        &self,
        ctx: &ReportingContext,
    ) -> Result<Vec<AccountSummary>, ServerError> {
        self.reconciliation_usecase.compute_summary(ctx).await
    }

    pub async fn compute_monthly(
        &self,
        vessel: &Vessel,
        year: i32,
        month: u32,
    ) -> Result<MonthlyReport, ServerError> {
        let ctx = ReportingContext::monthly(vessel.clone(), year, month);
        let summaries = self.reconciliation_usecase.compute_summary(&ctx).await?;
        Ok(ReportProjector::monthly(&ctx, &summaries))
    }

    pub async fn compute_accumulated(
        &self,
        vessel: &Vessel,
        year: i32,
        through_month: u32,
    ) -> Result<AccumulatedReport, ServerError> {
        let ctx = ReportingContext::accumulated(vessel.clone(), year, through_month);
        let summaries = self.reconciliation_usecase.compute_summary(&ctx).await?;
        Ok(ReportProjector::accumulated(&ctx, &summaries))
    }

    pub async fn expand(
        &self,
        ctx: &ReportingContext,
        account: &Account,
        query: &DetailQuery,
    ) -> Result<Vec<LineItem>, ServerError> {
        self.reconciliation_usecase.expand(ctx, account, query).await
    }
}
