use crate::utils::error::Result;
use crate::utils::validation::validate_url;
use reqwest::Client;
use std::time::Duration;

/// Single-shot HTTP GET for one blocklist source.
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    client: Client,
}

impl SourceFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("nginx-blocklist/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str, timeout_secs: u64) -> Result<String> {
        let url = url.trim();
        validate_url("sources", url)?;

        tracing::debug!("GET {} (timeout {}s)", url, timeout_secs);
        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(timeout_secs))
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Response status for {}: {}", url, response.status());
        Ok(response.text().await?)
    }
}
