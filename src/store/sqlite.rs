//! Key-value store persisted in the application SQLite database
//! (`kv_store` table, created by the migrations).

use super::KeyValueStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::clock::Clock;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// `updated_at` is stamped with `clock`, so runs pinned with `--at` write
/// the pinned time.
pub struct SqliteStore<'c> {
    pool: DbPool,
    clock: &'c dyn Clock,
}

impl<'c> SqliteStore<'c> {
    /// Wrap an already-migrated connection.
    pub fn new(pool: DbPool, clock: &'c dyn Clock) -> Self {
        Self { pool, clock }
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl KeyValueStore for SqliteStore<'_> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
        let value = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = self.clock.now().with_timezone(&Local).to_rfc3339();
        self.pool.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::models::streak_state::StreakState;
    use crate::store::StreakStore;
    use crate::utils::clock::{FixedClock, SystemClock};
    use chrono::{DateTime, TimeZone, Utc};

    fn store() -> SqliteStore<'static> {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        SqliteStore::new(pool, &SystemClock)
    }

    fn key_count(s: &SqliteStore) -> i64 {
        s.conn()
            .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut s = store();
        s.set("k", "one").unwrap();
        s.set("k", "two").unwrap();
        assert_eq!(s.get("k").unwrap().as_deref(), Some("two"));
        assert_eq!(key_count(&s), 1);
    }

    #[test]
    fn missing_key_is_none() {
        let s = store();
        assert_eq!(s.get("nothing").unwrap(), None);
    }

    #[test]
    fn streak_round_trip() {
        let mut s = store();
        let start = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let state = StreakState::new(start, Some("Sam".into()));

        s.save(&state).unwrap();
        let loaded = s.load().unwrap();
        assert_eq!(loaded.start_date, Some(start));
        assert_eq!(loaded.user_name.as_deref(), Some("Sam"));

        s.save_user_name(None).unwrap();
        assert_eq!(s.load().unwrap().user_name, None);
    }

    #[test]
    fn updated_at_follows_the_clock() {
        let pinned = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let clock = FixedClock::new(pinned);
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        let mut s = SqliteStore::new(pool, &clock);

        s.set("k", "v").unwrap();
        let stamp: String = s
            .conn()
            .query_row("SELECT updated_at FROM kv_store WHERE key = 'k'", [], |row| {
                row.get(0)
            })
            .unwrap();
        let stamp = DateTime::parse_from_rfc3339(&stamp).unwrap();
        assert_eq!(stamp.with_timezone(&Utc), pinned);
    }
}
