//! Remote-first analysis with a local fallback.

use crate::config::AnalyzerConfig;
use crate::error::{AnalyzeError, RemoteError};
use crate::model::AnalyzeResult;
use crate::pipelines::local::LocalPipeline;
use crate::reference::ReferenceData;
use crate::remote::{HttpRemoteAnalyzer, RemoteAnalyzer};
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Which path produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    RemoteAttempt,
    LocalFallback,
}

/// Tries the remote collaborator once, then the local pipeline.
///
/// There are no retries. Every remote failure (transport, status, bad body,
/// timeout) leads to the same local fallback, and the local pipeline always
/// produces a result, so [`Analyzer::analyze`] cannot fail.
#[derive(Clone)]
pub struct Analyzer {
    local: LocalPipeline,
    remote: Option<Arc<dyn RemoteAnalyzer>>,
    timeout: Duration,
}

impl Analyzer {
    /// Local-only analyzer
    pub fn new(local: LocalPipeline) -> Self {
        Analyzer {
            local,
            remote: None,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_remote(mut self, remote: Arc<dyn RemoteAnalyzer>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create an analyzer from configuration
    ///
    /// Reference data files are loaded here; the remote collaborator is only
    /// built when `remote.enabled` is set.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, AnalyzeError> {
        let reference = ReferenceData::load(&config.reference)?;
        Self::from_config_with_reference(config, Arc::new(reference))
    }

    /// Like [`Analyzer::from_config`] but with reference data supplied by the
    /// caller instead of `config.reference`.
    pub fn from_config_with_reference(
        config: &AnalyzerConfig,
        reference: Arc<ReferenceData>,
    ) -> Result<Self, AnalyzeError> {
        let local = LocalPipeline::new(reference).with_thresholds(config.suggestions.clone());
        let mut analyzer = Analyzer::new(local).with_timeout(config.remote.timeout());

        if config.remote.enabled {
            let remote = HttpRemoteAnalyzer::from_config(&config.remote)?;
            info!(
                "Remote analysis enabled at {}",
                config.remote.endpoint.as_deref().unwrap_or_default()
            );
            analyzer = analyzer.with_remote(Arc::new(remote));
        }

        Ok(analyzer)
    }

    pub fn local(&self) -> &LocalPipeline {
        &self.local
    }

    /// Analyze recipe text, returning the result and the stage that produced it
    pub async fn analyze_with_stage(
        &self,
        text: &str,
        context_id: Option<&str>,
    ) -> (AnalyzeResult, Stage) {
        if let Some(remote) = &self.remote {
            match self.try_remote(remote.as_ref(), text, context_id).await {
                Ok(result) => {
                    info!("Recipe analyzed by remote '{}'", remote.name());
                    return (result, Stage::RemoteAttempt);
                }
                Err(e) => {
                    warn!(
                        "Remote '{}' unavailable, falling back to local analysis: {}",
                        remote.name(),
                        e
                    );
                }
            }
        } else {
            debug!("No remote analyzer configured");
        }

        let result = self.local.analyze(text);
        info!(
            "Recipe '{}' analyzed locally ({} ingredients)",
            result.title,
            result.ingredients.len()
        );
        (result, Stage::LocalFallback)
    }

    /// Analyze recipe text; the remote result is returned verbatim when it
    /// succeeds.
    pub async fn analyze(&self, text: &str, context_id: Option<&str>) -> AnalyzeResult {
        self.analyze_with_stage(text, context_id).await.0
    }

    async fn try_remote(
        &self,
        remote: &dyn RemoteAnalyzer,
        text: &str,
        context_id: Option<&str>,
    ) -> Result<AnalyzeResult, RemoteError> {
        match timeout(self.timeout, remote.analyze(text, context_id)).await {
            Ok(result) => result,
            Err(_) => Err(RemoteError::Timeout(self.timeout)),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new(LocalPipeline::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingRemote {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RemoteAnalyzer for FailingRemote {
        fn name(&self) -> &str {
            "failing"
        }

        async fn analyze(
            &self,
            _text: &str,
            _context_id: Option<&str>,
        ) -> Result<AnalyzeResult, RemoteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(RemoteError::Status(500))
        }
    }

    struct CannedRemote(AnalyzeResult);

    #[async_trait]
    impl RemoteAnalyzer for CannedRemote {
        fn name(&self) -> &str {
            "canned"
        }

        async fn analyze(
            &self,
            _text: &str,
            _context_id: Option<&str>,
        ) -> Result<AnalyzeResult, RemoteError> {
            Ok(self.0.clone())
        }
    }

    const TEXT: &str = "Toast\nIngredients\n2 slices bread\n1 tbsp butter";

    #[tokio::test]
    async fn test_local_only() {
        let analyzer = Analyzer::default();
        let (result, stage) = analyzer.analyze_with_stage(TEXT, None).await;
        assert_eq!(stage, Stage::LocalFallback);
        assert_eq!(result, LocalPipeline::default().analyze(TEXT));
    }

    #[tokio::test]
    async fn test_single_remote_attempt_then_fallback() {
        let remote = Arc::new(FailingRemote {
            calls: AtomicUsize::new(0),
        });
        let analyzer = Analyzer::default().with_remote(remote.clone());

        let (result, stage) = analyzer.analyze_with_stage(TEXT, Some("ctx")).await;
        assert_eq!(stage, Stage::LocalFallback);
        assert_eq!(remote.calls.load(Ordering::SeqCst), 1);
        assert_eq!(result.title, "Toast");
    }

    #[tokio::test]
    async fn test_remote_result_is_verbatim() {
        let mut canned = LocalPipeline::default().analyze("Something else\n1 cup rice");
        canned.summary = "From the service".to_string();
        let analyzer = Analyzer::default().with_remote(Arc::new(CannedRemote(canned.clone())));

        let (result, stage) = analyzer.analyze_with_stage(TEXT, None).await;
        assert_eq!(stage, Stage::RemoteAttempt);
        assert_eq!(result, canned);
    }

    #[test]
    fn test_from_config_defaults_to_local() {
        let analyzer = Analyzer::from_config(&AnalyzerConfig::default()).unwrap();
        assert!(analyzer.remote.is_none());
        assert_eq!(analyzer.timeout, Duration::from_secs(10));
    }
}
