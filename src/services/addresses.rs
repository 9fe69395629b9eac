use anyhow::Context;
use async_trait::async_trait;

use crate::models::{NewAddress, SavedAddress};

#[async_trait]
pub trait AddressProvider: Send + Sync {
    /// Saved addresses for the given customer reference. Guests have none.
    async fn list_addresses(&self, customer_ref: &str) -> anyhow::Result<Vec<SavedAddress>>;

    async fn create_address(
        &self,
        customer_ref: &str,
        address: &NewAddress,
    ) -> anyhow::Result<SavedAddress>;
}

pub struct HttpAddressProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAddressProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AddressProvider for HttpAddressProvider {
    async fn list_addresses(&self, customer_ref: &str) -> anyhow::Result<Vec<SavedAddress>> {
        if customer_ref.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/customers/{}/addresses", self.base_url, customer_ref);

        let addresses = self
            .client
            .get(&url)
            .send()
            .await
            .context("failed to fetch saved addresses")?
            .error_for_status()
            .context("address endpoint returned error")?
            .json::<Vec<SavedAddress>>()
            .await
            .context("failed to parse address response")?;

        Ok(addresses)
    }

    async fn create_address(
        &self,
        customer_ref: &str,
        address: &NewAddress,
    ) -> anyhow::Result<SavedAddress> {
        anyhow::ensure!(
            !customer_ref.is_empty(),
            "cannot save an address without a customer reference"
        );

        let url = format!("{}/customers/{}/addresses", self.base_url, customer_ref);

        let saved = self
            .client
            .post(&url)
            .json(address)
            .send()
            .await
            .context("failed to save address")?
            .error_for_status()
            .context("address endpoint rejected creation")?
            .json::<SavedAddress>()
            .await
            .context("failed to parse created address")?;

        Ok(saved)
    }
}
