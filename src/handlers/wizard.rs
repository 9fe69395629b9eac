use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{BookingDraft, CheckoutState, DraftPatch, NewAddress, SavedAddress, WizardStep};
use crate::state::AppState;
use crate::wizard::panels::{load_reference_data, PanelData};
use crate::wizard::{store, WizardController};

fn customer_ref(headers: &HeaderMap) -> String {
    headers
        .get("x-customer-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

fn load_draft(state: &AppState, session: &str) -> Result<BookingDraft, AppError> {
    let db = state.db.lock().unwrap();
    store::load(&db, session)?.ok_or_else(|| AppError::NotFound(format!("session {session}")))
}

#[derive(Deserialize)]
pub struct StartWizardRequest {
    #[serde(default)]
    pub is_guest: bool,
}

#[derive(Serialize)]
pub struct StartWizardResponse {
    pub session_id: String,
    pub draft: BookingDraft,
}

// POST /api/wizard
pub async fn start_wizard(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StartWizardRequest>,
) -> Result<Json<StartWizardResponse>, AppError> {
    let session_id = uuid::Uuid::new_v4().to_string();
    let draft = BookingDraft::new(req.is_guest);

    {
        let db = state.db.lock().unwrap();
        store::save(&db, &session_id, &draft)?;
    }

    tracing::info!(session = %session_id, is_guest = req.is_guest, "booking flow entered");

    Ok(Json(StartWizardResponse { session_id, draft }))
}

#[derive(Serialize)]
pub struct WizardView {
    pub draft: BookingDraft,
    pub checkout: CheckoutState,
}

// GET /api/wizard/:session
pub async fn get_wizard(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
) -> Result<Json<WizardView>, AppError> {
    let db = state.db.lock().unwrap();
    let draft = store::load(&db, &session)?
        .ok_or_else(|| AppError::NotFound(format!("session {session}")))?;
    let checkout = store::load_checkout(&db, &session)?;

    Ok(Json(WizardView { draft, checkout }))
}

// POST /api/wizard/:session/form
pub async fn update_form(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
    Json(patch): Json<DraftPatch>,
) -> Result<Json<BookingDraft>, AppError> {
    let draft = load_draft(&state, &session)?;

    let mut controller = WizardController::new(draft);
    controller.update_form_data(patch);
    let draft = controller.into_draft();

    let db = state.db.lock().unwrap();
    store::save(&db, &session, &draft)?;

    Ok(Json(draft))
}

// POST /api/wizard/:session/next
pub async fn next_step(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
) -> Result<Json<BookingDraft>, AppError> {
    let draft = load_draft(&state, &session)?;

    let mut controller = WizardController::new(draft);
    controller.next_step();
    let draft = controller.into_draft();

    let db = state.db.lock().unwrap();
    store::save(&db, &session, &draft)?;

    Ok(Json(draft))
}

// POST /api/wizard/:session/prev
pub async fn prev_step(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
) -> Result<Json<BookingDraft>, AppError> {
    let draft = load_draft(&state, &session)?;

    let mut controller = WizardController::new(draft);
    controller.prev_step();
    let draft = controller.into_draft();

    let db = state.db.lock().unwrap();
    store::save(&db, &session, &draft)?;

    Ok(Json(draft))
}

#[derive(Deserialize)]
pub struct GoToStepRequest {
    pub step: String,
}

// POST /api/wizard/:session/goto
pub async fn go_to_step(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
    Json(req): Json<GoToStepRequest>,
) -> Result<Json<BookingDraft>, AppError> {
    let target = WizardStep::parse(&req.step)
        .ok_or_else(|| AppError::BadRequest(format!("unknown step: {}", req.step)))?;

    let draft = load_draft(&state, &session)?;

    let mut controller = WizardController::new(draft);
    controller.go_to_step(target);
    let draft = controller.into_draft();

    let db = state.db.lock().unwrap();
    store::save(&db, &session, &draft)?;

    Ok(Json(draft))
}

// GET /api/wizard/:session/panel
pub async fn panel(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
    headers: HeaderMap,
) -> Result<Json<PanelData>, AppError> {
    let draft = load_draft(&state, &session)?;
    let customer = customer_ref(&headers);

    let panel = load_reference_data(
        state.catalog.as_ref(),
        state.addresses.as_ref(),
        state.availability.as_ref(),
        &draft,
        &customer,
        Utc::now().date_naive(),
    )
    .await
    .map_err(|e| {
        tracing::warn!(session = %session, step = draft.current_step.as_str(), error = %e, "panel data fetch failed");
        AppError::Collaborator(e.to_string())
    })?;

    Ok(Json(panel))
}

// POST /api/wizard/:session/addresses
pub async fn create_address(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
    headers: HeaderMap,
    Json(address): Json<NewAddress>,
) -> Result<Json<SavedAddress>, AppError> {
    let draft = load_draft(&state, &session)?;
    if draft.is_guest {
        return Err(AppError::BadRequest(
            "guests cannot save addresses".to_string(),
        ));
    }

    let customer = customer_ref(&headers);
    if customer.is_empty() {
        return Err(AppError::BadRequest(
            "missing customer reference".to_string(),
        ));
    }

    let saved = state
        .addresses
        .create_address(&customer, &address)
        .await
        .map_err(|e| AppError::Collaborator(e.to_string()))?;

    Ok(Json(saved))
}

// DELETE /api/wizard/:session
pub async fn abandon(
    State(state): State<Arc<AppState>>,
    Path(session): Path<String>,
) -> Result<StatusCode, AppError> {
    let db = state.db.lock().unwrap();
    store::clear(&db, &session)?;

    tracing::info!(session = %session, "booking flow abandoned");

    Ok(StatusCode::NO_CONTENT)
}
