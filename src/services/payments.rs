use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Serialize)]
pub struct ChargeRequest {
    pub amount_minor_units: i64,
    pub payer_email: String,
    /// Gateway reference issued at booking creation; charging the same
    /// reference again resumes that transaction instead of opening a new one.
    pub reference: String,
    pub metadata: serde_json::Value,
}

/// The gateway's callback triple (success / closed / error) rendered as a
/// single discriminated outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    Confirmed,
    /// Payer dismissed the gateway UI without paying.
    Cancelled,
    Declined { message: String },
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, request: &ChargeRequest) -> anyhow::Result<PaymentOutcome>;
}

pub struct PaystackGateway {
    secret_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl PaystackGateway {
    pub fn new(secret_key: String, base_url: String) -> Self {
        Self {
            secret_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PaymentGateway for PaystackGateway {
    async fn charge(&self, request: &ChargeRequest) -> anyhow::Result<PaymentOutcome> {
        let url = format!("{}/charge", self.base_url);
        let body = json!({
            "amount": request.amount_minor_units,
            "email": request.payer_email,
            "reference": request.reference,
            "metadata": request.metadata,
        });

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .json(&body)
            .send()
            .await
            .context("failed to reach payment gateway")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse payment gateway response")?;

        if !status.is_success() {
            anyhow::bail!("payment gateway error ({}): {}", status, data);
        }

        let transaction_status = data["data"]["status"].as_str().unwrap_or("");
        match transaction_status {
            "success" => Ok(PaymentOutcome::Confirmed),
            "abandoned" => Ok(PaymentOutcome::Cancelled),
            other => {
                let message = data["data"]["gateway_response"]
                    .as_str()
                    .filter(|s| !s.is_empty())
                    .unwrap_or("payment was not completed")
                    .to_string();
                tracing::warn!(status = other, "charge did not succeed");
                Ok(PaymentOutcome::Declined { message })
            }
        }
    }
}
