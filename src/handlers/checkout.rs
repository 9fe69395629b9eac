use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{CheckoutPhase, CheckoutState, FailureStage, WizardStep};
use crate::state::AppState;
use crate::wizard::{price_draft, store, submit};

#[derive(Deserialize)]
pub struct CheckoutRequest {
    pub payer_email: String,
}

// POST /api/wizard/:session/checkout
//
// Also the retry entry point: a persisted receipt from an earlier pass is
// reused, so retrying a failed or cancelled payment never creates a second
// booking.
pub async fn run_checkout(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
    Json(req): Json<CheckoutRequest>,
) -> Result<Json<CheckoutState>, AppError> {
    if req.payer_email.trim().is_empty() {
        return Err(AppError::BadRequest("payer email is required".to_string()));
    }

    let (draft, checkout) = {
        let db = state.db.lock().unwrap();
        let draft = store::load(&db, &session)?
            .ok_or_else(|| AppError::NotFound(format!("session {session}")))?;
        let checkout = store::load_checkout(&db, &session)?;
        (draft, checkout)
    };

    if draft.current_step != WizardStep::Payment {
        return Err(AppError::BadRequest(
            "checkout is only available from the payment step".to_string(),
        ));
    }

    // Amount is always priced fresh from the current catalog.
    let catalog = state
        .catalog
        .fetch_catalog()
        .await
        .map_err(|e| AppError::Collaborator(e.to_string()))?;
    let amount_minor_units = price_draft(&catalog, &draft).total_minor;

    let outcome = submit::process_checkout(
        state.bookings.as_ref(),
        state.payments.as_ref(),
        &draft,
        checkout,
        amount_minor_units,
        req.payer_email.trim(),
    )
    .await;

    {
        let db = state.db.lock().unwrap();
        if outcome.is_settled() {
            // Paid; the draft's job is done.
            store::clear(&db, &session)?;
        } else {
            store::save_checkout(&db, &session, &outcome)?;
        }
    }

    match &outcome.phase {
        CheckoutPhase::Error {
            stage: FailureStage::Booking,
            message,
        } => Err(AppError::Submission(message.clone())),
        CheckoutPhase::Error {
            stage: FailureStage::Payment,
            message,
        } => Err(AppError::Payment(message.clone())),
        _ => Ok(Json(outcome)),
    }
}

// GET /api/wizard/:session/checkout
pub async fn get_checkout(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
) -> Result<Json<CheckoutState>, AppError> {
    let db = state.db.lock().unwrap();
    store::load(&db, &session)?
        .ok_or_else(|| AppError::NotFound(format!("session {session}")))?;
    let checkout = store::load_checkout(&db, &session)?;

    Ok(Json(checkout))
}
