use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{domain::entities::snapshot::ReconciliationSnapshot, entities::ReportingContext};

#[async_trait]
pub(crate) trait SnapshotRepository: Send + Sync {
    /// Reads every source the context needs and normalizes the result. Fails
    /// as a whole if any single read fails.
    async fn snapshot(&self, ctx: &ReportingContext)
        -> Result<ReconciliationSnapshot, ServerError>;
}
