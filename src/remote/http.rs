use crate::config::RemoteConfig;
use crate::error::{AnalyzeError, RemoteError};
use crate::model::AnalyzeResult;
use crate::remote::RemoteAnalyzer;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Serialize;

pub struct HttpRemoteAnalyzer {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context_id: Option<&'a str>,
}

impl HttpRemoteAnalyzer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpRemoteAnalyzer {
            client: Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Create a remote analyzer from configuration
    ///
    /// The API key falls back to the `RECIPE_ANALYZER_API_KEY` environment
    /// variable.
    pub fn from_config(config: &RemoteConfig) -> Result<Self, AnalyzeError> {
        let endpoint = config.endpoint.clone().ok_or_else(|| {
            AnalyzeError::BuilderError("Remote analysis enabled without an endpoint".to_string())
        })?;
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("RECIPE_ANALYZER_API_KEY").ok());

        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(HttpRemoteAnalyzer {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl RemoteAnalyzer for HttpRemoteAnalyzer {
    fn name(&self) -> &str {
        "http"
    }

    async fn analyze(
        &self,
        text: &str,
        context_id: Option<&str>,
    ) -> Result<AnalyzeResult, RemoteError> {
        let mut request = self
            .client
            .post(format!("{}/analyze", self.endpoint))
            .json(&AnalyzeRequest { text, context_id });
        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Remote analysis response: {}", body);
        let result: AnalyzeResult =
            serde_json::from_str(&body).map_err(|e| RemoteError::Malformed(e.to_string()))?;
        if result.servings < 1 {
            return Err(RemoteError::Malformed("servings must be at least 1".to_string()));
        }

        Ok(result)
    }
}
