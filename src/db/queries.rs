use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

fn now_string() -> String {
    Utc::now().naive_utc().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn get_draft_json(conn: &Connection, session_key: &str) -> anyhow::Result<Option<String>> {
    let blob = conn
        .query_row(
            "SELECT draft FROM wizard_sessions WHERE session_key = ?1",
            [session_key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(blob)
}

pub fn upsert_draft_json(conn: &Connection, session_key: &str, draft: &str) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO wizard_sessions (session_key, draft, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(session_key)
         DO UPDATE SET draft = excluded.draft, updated_at = excluded.updated_at",
        params![session_key, draft, now_string()],
    )?;
    Ok(())
}

pub fn get_checkout_json(conn: &Connection, session_key: &str) -> anyhow::Result<Option<String>> {
    let blob = conn
        .query_row(
            "SELECT checkout FROM wizard_sessions WHERE session_key = ?1",
            [session_key],
            |row| row.get::<_, Option<String>>(0),
        )
        .optional()?;
    Ok(blob.flatten())
}

/// No-op when the session row does not exist; checkout state only ever
/// accompanies a persisted draft.
pub fn set_checkout_json(
    conn: &Connection,
    session_key: &str,
    checkout: Option<&str>,
) -> anyhow::Result<()> {
    conn.execute(
        "UPDATE wizard_sessions SET checkout = ?2, updated_at = ?3 WHERE session_key = ?1",
        params![session_key, checkout, now_string()],
    )?;
    Ok(())
}

pub fn delete_session(conn: &Connection, session_key: &str) -> anyhow::Result<()> {
    conn.execute(
        "DELETE FROM wizard_sessions WHERE session_key = ?1",
        [session_key],
    )?;
    Ok(())
}
