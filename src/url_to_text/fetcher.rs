use crate::error::AnalyzeError;
use reqwest::Client;
use std::time::Duration;

/// Plain HTTP GET of recipe pages.
///
/// Non-success statuses are errors, so a 404 page never reaches the
/// extractors.
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, AnalyzeError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; RecipeAnalyzer/1.0)")
            .build()?;

        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str) -> Result<String, AnalyzeError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;
        Ok(html)
    }
}
