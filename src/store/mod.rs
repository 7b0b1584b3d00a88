//! Persistence of the streak record behind a small key-value interface.
//!
//! The tracker only ever talks to `StreakStore` (load/save); any
//! `KeyValueStore` gets that capability for free, so the SQLite store used by
//! the CLI and the in-memory store used by tests are interchangeable.

pub mod memory;
pub mod sqlite;

use crate::errors::AppResult;
use crate::models::streak_state::{StreakState, from_iso_string, to_iso_string};
use chrono::{DateTime, Utc};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub const KEY_START_DATE: &str = "noContactStartDate";
pub const KEY_USER_NAME: &str = "noContactUserName";
pub const KEY_FIRST_LOAD: &str = "firstLoad";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// What was found in the store, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedState {
    pub start_date: Option<DateTime<Utc>>,
    pub user_name: Option<String>,
    /// Raw value of a start date that could not be parsed.
    pub unreadable_start_date: Option<String>,
}

pub trait StreakStore {
    fn load(&self) -> AppResult<LoadedState>;
    fn save_start_date(&mut self, start_date: &DateTime<Utc>) -> AppResult<()>;
    fn save_user_name(&mut self, user_name: Option<&str>) -> AppResult<()>;

    fn save(&mut self, state: &StreakState) -> AppResult<()> {
        self.save_start_date(&state.start_date)?;
        self.save_user_name(state.user_name.as_deref())
    }
}

impl<T: KeyValueStore + ?Sized> StreakStore for T {
    fn load(&self) -> AppResult<LoadedState> {
        let mut loaded = LoadedState::default();

        if let Some(raw) = self.get(KEY_START_DATE)? {
            match from_iso_string(&raw) {
                Ok(ts) => loaded.start_date = Some(ts),
                Err(_) => loaded.unreadable_start_date = Some(raw),
            }
        }

        loaded.user_name = self
            .get(KEY_USER_NAME)?
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(loaded)
    }

    fn save_start_date(&mut self, start_date: &DateTime<Utc>) -> AppResult<()> {
        self.set(KEY_START_DATE, &to_iso_string(start_date))
    }

    fn save_user_name(&mut self, user_name: Option<&str>) -> AppResult<()> {
        match user_name {
            Some(name) => self.set(KEY_USER_NAME, name),
            None => self.remove(KEY_USER_NAME),
        }
    }
}

/// True until `mark_first_load_done` has been called on this store.
pub fn is_first_load<S: KeyValueStore + ?Sized>(store: &S) -> AppResult<bool> {
    Ok(store.get(KEY_FIRST_LOAD)?.as_deref() != Some("false"))
}

pub fn mark_first_load_done<S: KeyValueStore + ?Sized>(store: &mut S) -> AppResult<()> {
    store.set(KEY_FIRST_LOAD, "false")
}
