use std::sync::Arc;
use std::time::Duration;

use crate::analyzer::Analyzer;
use crate::config::AnalyzerConfig;
use crate::pipelines;
use crate::reference::ReferenceData;
use crate::remote::RemoteAnalyzer;
use crate::{AnalyzeError, AnalyzeResult};

/// Represents the input source for a recipe
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Fetch a recipe page and analyze its recipe
    Url(String),
    /// Analyze recipe text as typed or pasted
    Text(String),
    /// Analyze a bare list of ingredient lines
    Ingredients(Vec<String>),
}

/// Builder for configuring and executing a recipe analysis
#[derive(Default)]
pub struct RecipeAnalyzerBuilder {
    source: Option<InputSource>,
    context_id: Option<String>,
    config: Option<AnalyzerConfig>,
    remote: Option<Arc<dyn RemoteAnalyzer>>,
    remote_endpoint: Option<String>,
    reference: Option<Arc<ReferenceData>>,
    timeout: Option<Duration>,
    local_only: bool,
}

impl RecipeAnalyzerBuilder {
    /// Set the input source to a URL
    ///
    /// # Example
    /// ```
    /// use recipe_analyzer::RecipeAnalyzer;
    ///
    /// let builder = RecipeAnalyzer::builder()
    ///     .url("https://example.com/recipe");
    /// ```
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.source = Some(InputSource::Url(url.into()));
        self
    }

    /// Set the input source to plain recipe text
    ///
    /// # Example
    /// ```
    /// use recipe_analyzer::RecipeAnalyzer;
    ///
    /// let builder = RecipeAnalyzer::builder()
    ///     .text("Pancakes\nServings: 4\nIngredients\n1 cup flour\n2 eggs");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Set the input source to a list of ingredient lines
    pub fn ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source = Some(InputSource::Ingredients(
            ingredients.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Identifier forwarded to the remote analysis service
    pub fn context_id(mut self, context_id: impl Into<String>) -> Self {
        self.context_id = Some(context_id.into());
        self
    }

    /// Use an explicit configuration instead of `analyzer.toml` and the
    /// environment
    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a custom remote analyzer
    pub fn remote(mut self, remote: Arc<dyn RemoteAnalyzer>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Use the HTTP remote analyzer at `endpoint`
    ///
    /// # Example
    /// ```
    /// use recipe_analyzer::RecipeAnalyzer;
    ///
    /// let builder = RecipeAnalyzer::builder()
    ///     .text("Toast\n2 slices bread")
    ///     .remote_endpoint("http://localhost:8080");
    /// ```
    pub fn remote_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.remote_endpoint = Some(endpoint.into());
        self
    }

    /// Replace the reference data (knowledge base and inference tables)
    pub fn reference(mut self, reference: Arc<ReferenceData>) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Set a timeout for the remote call and for fetching pages
    ///
    /// # Example
    /// ```
    /// use recipe_analyzer::RecipeAnalyzer;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeAnalyzer::builder()
    ///     .url("https://example.com/recipe")
    ///     .timeout(Duration::from_secs(5));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Skip the remote service entirely
    pub fn local_only(mut self) -> Self {
        self.local_only = true;
        self
    }

    /// Build and execute the analysis
    ///
    /// # Errors
    /// Returns `AnalyzeError` if:
    /// - No input source was specified
    /// - Configuration or reference data cannot be loaded
    /// - A URL cannot be fetched or has no recipe text
    ///
    /// Remote failures are not errors; the local pipeline answers instead.
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_analyzer::RecipeAnalyzer;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = RecipeAnalyzer::builder()
    ///     .url("https://example.com/recipe")
    ///     .build()
    ///     .await?;
    /// println!("{}", result.summary);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<AnalyzeResult, AnalyzeError> {
        let source = self.source.ok_or_else(|| {
            AnalyzeError::BuilderError(
                "No input source specified. Use .text(), .url() or .ingredients()".to_string(),
            )
        })?;

        let mut config = match self.config {
            Some(config) => config,
            None => AnalyzerConfig::load(None)?,
        };

        let text = match source {
            InputSource::Text(text) => text,
            InputSource::Ingredients(list) => pipelines::ingredient_list_text(list.as_slice()),
            InputSource::Url(url) => {
                let timeout = self.timeout.or(Some(config.fetch_timeout()));
                pipelines::url::process(&url, timeout).await?
            }
        };

        // Builder options take precedence over the configured remote
        if self.local_only || self.remote.is_some() {
            config.remote.enabled = false;
        } else if let Some(endpoint) = self.remote_endpoint {
            config.remote.enabled = true;
            config.remote.endpoint = Some(endpoint);
        }

        let mut analyzer = match self.reference {
            Some(reference) => Analyzer::from_config_with_reference(&config, reference)?,
            None => Analyzer::from_config(&config)?,
        };
        if let Some(timeout) = self.timeout {
            analyzer = analyzer.with_timeout(timeout);
        }
        if let (Some(remote), false) = (self.remote, self.local_only) {
            analyzer = analyzer.with_remote(remote);
        }

        Ok(analyzer.analyze(&text, self.context_id.as_deref()).await)
    }
}

/// Main entry point for the builder API
pub struct RecipeAnalyzer;

impl RecipeAnalyzer {
    /// Creates a new builder for analyzing recipes
    ///
    /// # Example
    /// ```
    /// use recipe_analyzer::RecipeAnalyzer;
    ///
    /// let builder = RecipeAnalyzer::builder();
    /// ```
    pub fn builder() -> RecipeAnalyzerBuilder {
        RecipeAnalyzerBuilder::default()
    }
}
