use serde::{Deserialize, Serialize};

/// Identifiers handed back by the booking-creation endpoint. Kept for the
/// whole checkout so payment retries reuse the same booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingReceipt {
    pub booking_id: String,
    pub payment_reference: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Booking,
    Payment,
}

/// Client-observed checkout progression:
/// idle → creating_booking → processing_payment → {success | error},
/// with error → idle on retry and success terminal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum CheckoutPhase {
    #[default]
    Idle,
    CreatingBooking,
    ProcessingPayment,
    Success {
        booking_id: String,
    },
    Error {
        stage: FailureStage,
        message: String,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutState {
    #[serde(flatten)]
    pub phase: CheckoutPhase,
    pub receipt: Option<BookingReceipt>,
}

impl CheckoutState {
    pub fn is_settled(&self) -> bool {
        matches!(self.phase, CheckoutPhase::Success { .. })
    }
}
