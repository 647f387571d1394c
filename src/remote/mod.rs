mod http;

pub use http::HttpRemoteAnalyzer;

use crate::error::RemoteError;
use crate::model::AnalyzeResult;
use async_trait::async_trait;

/// External analysis service tried before the local pipeline
#[async_trait]
pub trait RemoteAnalyzer: Send + Sync {
    /// Service name used in log output
    fn name(&self) -> &str;

    /// Analyzes recipe text, returning the same result shape as the local
    /// pipeline.
    async fn analyze(
        &self,
        text: &str,
        context_id: Option<&str>,
    ) -> Result<AnalyzeResult, RemoteError>;
}
