use crate::errors::AppResult;
use chrono::{DateTime, Local, Utc};
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table, dated `at` (local time).
pub fn ttlog(
    conn: &Connection,
    at: DateTime<Utc>,
    operation: &str,
    target: &str,
    message: &str,
) -> AppResult<()> {
    let date = at.with_timezone(&Local).to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![date, operation, target, message])?;

    Ok(())
}

/// Same as `ttlog`, but a failure only produces a warning: the audit log
/// must never block a streak operation.
pub fn ttlog_or_warn(
    conn: &Connection,
    at: DateTime<Utc>,
    operation: &str,
    target: &str,
    message: &str,
) {
    if let Err(e) = ttlog(conn, at, operation, target, message) {
        crate::ui::messages::warning(format!("Failed to write internal log: {}", e));
    }
}
