use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migrations are recorded in it, so it
/// is created before anything else.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn create_kv_store(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key    TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        );
        "#,
    )
}

fn add_updated_at_to_kv_store(conn: &Connection) -> Result<()> {
    if table_has_column(conn, "kv_store", "updated_at")? {
        return Ok(());
    }
    conn.execute_batch("ALTER TABLE kv_store ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';")
}

struct Migration {
    version: &'static str,
    message: &'static str,
    apply: fn(&Connection) -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20251001_0001_create_kv_store",
        message: "Created kv_store table",
        apply: create_kv_store,
    },
    Migration {
        version: "20251012_0002_kv_store_updated_at",
        message: "Added updated_at to kv_store",
        apply: add_updated_at_to_kv_store,
    },
];

/// Public entry point: run all pending migrations, in order, each inside its
/// own transaction. Returns the versions applied by this call.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        conn.execute_batch("BEGIN;")?;
        let outcome = (m.apply)(conn).and_then(|_| mark_applied(conn, m.version, m.message));

        match outcome {
            Ok(()) => {
                conn.execute_batch("COMMIT;")?;
                applied.push(m.version);
            }
            Err(e) => {
                let _ = conn.execute_batch("ROLLBACK;");
                return Err(AppError::Migration(format!("{}: {}", m.version, e)));
            }
        }
    }

    Ok(applied)
}
