use rusqlite::Connection;

use crate::db::queries;
use crate::models::{BookingDraft, CheckoutState};

/// Persisted drafts survive page reloads; each browser session owns one row
/// under its session key. Stored data never crashes the flow: anything that
/// fails to deserialize is discarded and replaced with a fresh draft.
pub fn load(conn: &Connection, session_key: &str) -> anyhow::Result<Option<BookingDraft>> {
    let Some(blob) = queries::get_draft_json(conn, session_key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&blob) {
        Ok(draft) => Ok(Some(draft)),
        Err(err) => {
            tracing::warn!(
                session = session_key,
                error = %err,
                "discarding malformed persisted draft"
            );
            Ok(Some(BookingDraft::new(false)))
        }
    }
}

pub fn save(conn: &Connection, session_key: &str, draft: &BookingDraft) -> anyhow::Result<()> {
    let blob = serde_json::to_string(draft)?;
    queries::upsert_draft_json(conn, session_key, &blob)
}

pub fn clear(conn: &Connection, session_key: &str) -> anyhow::Result<()> {
    queries::delete_session(conn, session_key)
}

pub fn load_checkout(conn: &Connection, session_key: &str) -> anyhow::Result<CheckoutState> {
    let Some(blob) = queries::get_checkout_json(conn, session_key)? else {
        return Ok(CheckoutState::default());
    };

    match serde_json::from_str(&blob) {
        Ok(state) => Ok(state),
        Err(err) => {
            tracing::warn!(
                session = session_key,
                error = %err,
                "discarding malformed persisted checkout state"
            );
            Ok(CheckoutState::default())
        }
    }
}

pub fn save_checkout(
    conn: &Connection,
    session_key: &str,
    state: &CheckoutState,
) -> anyhow::Result<()> {
    let blob = serde_json::to_string(state)?;
    queries::set_checkout_json(conn, session_key, Some(&blob))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::models::{BookingReceipt, CheckoutPhase, ServiceLine, WizardStep};

    fn setup_db() -> Connection {
        db::init_db(":memory:").unwrap()
    }

    #[test]
    fn test_load_absent_session_is_none() {
        let conn = setup_db();
        assert!(load(&conn, "sess-1").unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips_all_fields() {
        let conn = setup_db();

        let mut draft = BookingDraft::new(true);
        draft.services.push(ServiceLine {
            service_item_id: "svc-1".to_string(),
            quantity: 2,
        });
        draft.service_date = "2025-07-01".to_string();
        draft.service_time = "08:30".to_string();
        draft.address_id = Some("addr-1".to_string());
        draft.notes = Some("ring twice".to_string());
        draft.current_step = WizardStep::Review;

        save(&conn, "sess-1", &draft).unwrap();
        let loaded = load(&conn, "sess-1").unwrap().unwrap();
        assert_eq!(loaded, draft);
    }

    #[test]
    fn test_malformed_draft_is_discarded_for_fresh_one() {
        let conn = setup_db();
        queries::upsert_draft_json(&conn, "sess-1", "{not json").unwrap();

        let loaded = load(&conn, "sess-1").unwrap().unwrap();
        assert_eq!(loaded, BookingDraft::new(false));
        assert_eq!(loaded.current_step, WizardStep::Services);
    }

    #[test]
    fn test_clear_removes_draft_and_checkout() {
        let conn = setup_db();
        save(&conn, "sess-1", &BookingDraft::new(false)).unwrap();
        save_checkout(
            &conn,
            "sess-1",
            &CheckoutState {
                phase: CheckoutPhase::Idle,
                receipt: Some(BookingReceipt {
                    booking_id: "bk-1".to_string(),
                    payment_reference: "ref-1".to_string(),
                }),
            },
        )
        .unwrap();

        clear(&conn, "sess-1").unwrap();
        assert!(load(&conn, "sess-1").unwrap().is_none());
        assert_eq!(
            load_checkout(&conn, "sess-1").unwrap(),
            CheckoutState::default()
        );
    }

    #[test]
    fn test_checkout_round_trip() {
        let conn = setup_db();
        save(&conn, "sess-1", &BookingDraft::new(false)).unwrap();

        let state = CheckoutState {
            phase: CheckoutPhase::Success {
                booking_id: "bk-1".to_string(),
            },
            receipt: Some(BookingReceipt {
                booking_id: "bk-1".to_string(),
                payment_reference: "ref-1".to_string(),
            }),
        };
        save_checkout(&conn, "sess-1", &state).unwrap();
        assert_eq!(load_checkout(&conn, "sess-1").unwrap(), state);
    }
}
