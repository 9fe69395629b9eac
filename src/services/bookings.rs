use async_trait::async_trait;
use serde_json::json;

use crate::models::{BookingDraft, BookingReceipt};

/// Failures from the booking-creation endpoint. Only transport-level
/// failures are retryable; a rejection means the endpoint looked at the
/// draft and said no, so retrying the same payload is pointless.
#[derive(Debug, thiserror::Error)]
pub enum CreateBookingError {
    #[error("{0}")]
    Rejected(String),

    #[error("booking endpoint unreachable: {0}")]
    Transient(#[source] anyhow::Error),
}

#[async_trait]
pub trait BookingEndpoint: Send + Sync {
    async fn create_booking(
        &self,
        draft: &BookingDraft,
    ) -> Result<BookingReceipt, CreateBookingError>;
}

pub struct HttpBookingEndpoint {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBookingEndpoint {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl BookingEndpoint for HttpBookingEndpoint {
    async fn create_booking(
        &self,
        draft: &BookingDraft,
    ) -> Result<BookingReceipt, CreateBookingError> {
        let url = format!("{}/bookings", self.base_url);
        let body = json!({
            "draft": draft,
            "is_guest": draft.is_guest,
        });

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| CreateBookingError::Transient(e.into()))?;

        let status = resp.status();

        if status.is_client_error() {
            // Validation payload: {"error": "..."} when the endpoint explains
            // itself, generic otherwise.
            let message = resp
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v["error"].as_str().map(|s| s.to_string()))
                .unwrap_or_else(|| "booking was rejected".to_string());
            return Err(CreateBookingError::Rejected(message));
        }

        if !status.is_success() {
            return Err(CreateBookingError::Transient(anyhow::anyhow!(
                "booking endpoint returned {status}"
            )));
        }

        resp.json::<BookingReceipt>()
            .await
            .map_err(|e| CreateBookingError::Transient(e.into()))
    }
}
