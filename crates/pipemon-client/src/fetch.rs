//! Concurrent dual fetch for pipeline comparison.

use pipemon_types::PipelineDefinition;

use crate::error::{ClientError, ClientResult};
use crate::transport::PipelineService;

/// Fetch two pipeline definitions concurrently.
///
/// Results come back in argument order regardless of which fetch completes
/// first, so the first name is always the comparison's left side. The first
/// error aborts the join and drops the other in-flight request; no partial
/// result is ever returned.
pub async fn fetch_pair(
    service: &dyn PipelineService,
    name1: &str,
    name2: &str,
) -> ClientResult<(PipelineDefinition, PipelineDefinition)> {
    if name1.trim().is_empty() || name2.trim().is_empty() {
        return Err(ClientError::EmptyPipelineName);
    }

    tracing::debug!(left = name1, right = name2, "fetching pipeline pair");
    tokio::try_join!(service.get_pipeline(name1), service.get_pipeline(name2))
}
