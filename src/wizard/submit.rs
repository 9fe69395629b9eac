use serde_json::json;

use crate::models::{BookingDraft, BookingReceipt, CheckoutPhase, CheckoutState, FailureStage};
use crate::services::{
    BookingEndpoint, ChargeRequest, CreateBookingError, PaymentGateway, PaymentOutcome,
};

// Transient booking-creation failures are retried this many times in total
// before the checkout reports an error.
const MAX_CREATE_ATTEMPTS: u32 = 3;

/// Drives one checkout pass: ensure the booking exists, then take payment.
/// Never fails outward — every collaborator failure lands in the returned
/// state's phase, with the draft untouched. A retained receipt means payment
/// retries resume the same booking instead of creating a duplicate.
pub async fn process_checkout(
    bookings: &dyn BookingEndpoint,
    payments: &dyn PaymentGateway,
    draft: &BookingDraft,
    checkout: CheckoutState,
    amount_minor_units: i64,
    payer_email: &str,
) -> CheckoutState {
    if checkout.is_settled() {
        return checkout;
    }

    let receipt = match checkout.receipt {
        Some(receipt) => receipt,
        None => match create_with_retry(bookings, draft).await {
            Ok(receipt) => receipt,
            Err(state) => return state,
        },
    };

    let charge = ChargeRequest {
        amount_minor_units,
        payer_email: payer_email.to_string(),
        reference: receipt.payment_reference.clone(),
        metadata: json!({
            "booking_id": receipt.booking_id,
            "service_date": draft.service_date,
            "service_time": draft.service_time,
        }),
    };

    let phase = match payments.charge(&charge).await {
        Ok(PaymentOutcome::Confirmed) => {
            tracing::info!(booking_id = %receipt.booking_id, "payment confirmed");
            CheckoutPhase::Success {
                booking_id: receipt.booking_id.clone(),
            }
        }
        Ok(PaymentOutcome::Cancelled) => {
            // Booking stays pending; the payer can come back to it.
            tracing::info!(booking_id = %receipt.booking_id, "payment window closed by payer");
            CheckoutPhase::Idle
        }
        Ok(PaymentOutcome::Declined { message }) => CheckoutPhase::Error {
            stage: FailureStage::Payment,
            message,
        },
        Err(err) => {
            tracing::warn!(booking_id = %receipt.booking_id, error = %err, "payment attempt failed");
            CheckoutPhase::Error {
                stage: FailureStage::Payment,
                message: "payment could not be processed".to_string(),
            }
        }
    };

    CheckoutState {
        phase,
        receipt: Some(receipt),
    }
}

async fn create_with_retry(
    bookings: &dyn BookingEndpoint,
    draft: &BookingDraft,
) -> Result<BookingReceipt, CheckoutState> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        match bookings.create_booking(draft).await {
            Ok(receipt) => {
                tracing::info!(booking_id = %receipt.booking_id, "booking created");
                return Ok(receipt);
            }
            Err(CreateBookingError::Rejected(message)) => {
                tracing::warn!(message = %message, "booking rejected by endpoint");
                return Err(CheckoutState {
                    phase: CheckoutPhase::Error {
                        stage: FailureStage::Booking,
                        message,
                    },
                    receipt: None,
                });
            }
            Err(CreateBookingError::Transient(err)) => {
                if attempt >= MAX_CREATE_ATTEMPTS {
                    tracing::warn!(attempt, error = %err, "giving up on booking creation");
                    return Err(CheckoutState {
                        phase: CheckoutPhase::Error {
                            stage: FailureStage::Booking,
                            message: "could not reach the booking service".to_string(),
                        },
                        receipt: None,
                    });
                }
                tracing::warn!(attempt, error = %err, "retrying booking creation");
            }
        }
    }
}
