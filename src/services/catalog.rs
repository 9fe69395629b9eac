use anyhow::Context;
use async_trait::async_trait;

use crate::models::Catalog;

#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_catalog(&self) -> anyhow::Result<Catalog>;
}

/// Catalog served by the marketplace platform API.
pub struct HttpCatalogProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalogProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalogProvider {
    async fn fetch_catalog(&self) -> anyhow::Result<Catalog> {
        let url = format!("{}/catalog", self.base_url);

        let catalog = self
            .client
            .get(&url)
            .send()
            .await
            .context("failed to fetch service catalog")?
            .error_for_status()
            .context("catalog endpoint returned error")?
            .json::<Catalog>()
            .await
            .context("failed to parse catalog response")?;

        Ok(catalog)
    }
}
