use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

#[async_trait]
pub trait AvailabilityProvider: Send + Sync {
    /// Slots from the fixed grid that cannot be booked on `date`.
    async fn unavailable_slots(&self, date: NaiveDate) -> anyhow::Result<Vec<String>>;
}

pub struct HttpAvailabilityProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAvailabilityProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Deserialize)]
struct AvailabilityResponse {
    unavailable: Vec<String>,
}

#[async_trait]
impl AvailabilityProvider for HttpAvailabilityProvider {
    async fn unavailable_slots(&self, date: NaiveDate) -> anyhow::Result<Vec<String>> {
        let url = format!(
            "{}/availability?date={}",
            self.base_url,
            date.format("%Y-%m-%d")
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("failed to fetch availability")?
            .error_for_status()
            .context("availability endpoint returned error")?
            .json::<AvailabilityResponse>()
            .await
            .context("failed to parse availability response")?;

        Ok(response.unavailable)
    }
}
