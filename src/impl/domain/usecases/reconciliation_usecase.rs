use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::repositories::snapshot_repository_impl::SnapshotRepositoryImpl,
    domain::{
        logic::{detail_expander::DetailExpander, reconciliation_engine::ReconciliationEngine},
        repositories::snapshot_repository::SnapshotRepository,
    },
    entities::{
        Account, AccountSummary, DetailQuery, LineItem, ReconciliationConfig, ReportingContext,
        Sources,
    },
    errors::InvalidBoundaryMonth,
};

#[async_trait]
pub trait ReconciliationUsecase: Send + Sync {
    async fn compute_summary(
        &self,
        ctx: &ReportingContext,
    ) -> Result<Vec<AccountSummary>, ServerError>;

    async fn expand(
        &self,
        ctx: &ReportingContext,
        account: &Account,
        query: &DetailQuery,
    ) -> Result<Vec<LineItem>, ServerError>;
}

pub(crate) struct ReconciliationUsecaseImpl<
    S,
    R1 = SnapshotRepositoryImpl<S>, // Default.
> where
    S: Sources,
    R1: SnapshotRepository,
{
    snapshot_repository: R1,
    config: ReconciliationConfig,
    _phantom: std::marker::PhantomData<S>,
}

#[async_trait]
impl<S, R1> ReconciliationUsecase for ReconciliationUsecaseImpl<S, R1>
where
    S: Sources,
    R1: SnapshotRepository,
{
    async fn compute_summary(
        &self,
        ctx: &ReportingContext,
    ) -> Result<Vec<AccountSummary>, ServerError> {
        validate(ctx)?;
        debug!(
            vessel = %ctx.vessel.id,
            year = ctx.year,
            month = ctx.boundary_month,
            mode = ?ctx.mode,
            "computing account summary"
        );
        let snapshot = self.snapshot_repository.snapshot(ctx).await?;
        let summaries = ReconciliationEngine::new(&snapshot, ctx, &self.config).process();
        debug!(accounts = summaries.len(), "account summary computed");
        Ok(summaries)
    }

    async fn expand(
        &self,
        ctx: &ReportingContext,
        account: &Account,
        query: &DetailQuery,
    ) -> Result<Vec<LineItem>, ServerError> {
        validate(ctx)?;
        debug!(
            vessel = %ctx.vessel.id,
            year = ctx.year,
            month = ctx.boundary_month,
            mode = ?ctx.mode,
            %account,
            "expanding account detail"
        );
        let snapshot = self.snapshot_repository.snapshot(ctx).await?;
        let items = DetailExpander::new(&snapshot, ctx, &self.config).expand(account, query);
        debug!(items = items.len(), "account detail expanded");
        Ok(items)
    }
}

fn validate(ctx: &ReportingContext) -> Result<(), ServerError> {
    if !(1..=12).contains(&ctx.boundary_month) {
        return Err(InvalidBoundaryMonth::new(ctx.boundary_month));
    }
    Ok(())
}

impl<S: Sources> ReconciliationUsecaseImpl<S> {
    pub(crate) fn new(sources: S, config: ReconciliationConfig) -> Self {
        ReconciliationUsecaseImpl {
            snapshot_repository: SnapshotRepositoryImpl::new(sources, config.source_timeout_ms),
            config,
            _phantom: std::marker::PhantomData,
        }
    }
}
