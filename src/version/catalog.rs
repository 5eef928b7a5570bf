//! Catalog trait and HTTP implementation for the App Store lookup API

use std::time::Duration;

#[cfg(test)]
use mockall::automock;
use reqwest::Url;
use tracing::warn;

use crate::config::CheckerConfig;
use crate::version::error::CatalogError;

/// Trait for fetching raw lookup responses from the catalog
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// Performs a GET on the lookup endpoint
    ///
    /// # Returns
    /// * `Ok(String)` - Response body of a 2xx response
    /// * `Err(CatalogError)` - Transport failure or non-2xx status
    async fn fetch(&self, endpoint: &Url) -> Result<String, CatalogError>;
}

/// Catalog implementation backed by a reqwest client
pub struct HttpCatalog {
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(config: &CheckerConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Catalog for HttpCatalog {
    async fn fetch(&self, endpoint: &Url) -> Result<String, CatalogError> {
        let response = self.client.get(endpoint.clone()).send().await?;

        let status = response.status();

        if !status.is_success() {
            warn!("App Store lookup returned status {}: {}", status, endpoint);
            return Err(CatalogError::Status(status));
        }

        Ok(response.text().await?)
    }
}
