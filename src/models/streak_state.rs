use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::errors::{AppError, AppResult};

/// The single streak record: when the streak started and who it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakState {
    pub start_date: DateTime<Utc>, // ⇔ noContactStartDate (ISO-8601, millis)
    pub user_name: Option<String>, // ⇔ noContactUserName ("" = not personalized)
}

impl StreakState {
    /// Build a state, normalizing the start date to millisecond precision
    /// and an empty name to `None`.
    pub fn new(start_date: DateTime<Utc>, user_name: Option<String>) -> Self {
        Self {
            start_date: truncate_to_millis(start_date),
            user_name: normalize_name(user_name),
        }
    }

    /// A fresh, non-personalized streak starting at `now` (day 0).
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self::new(now, None)
    }

    /// Card title, e.g. "Alex's Streak" or "No Contact Streak".
    pub fn title(&self) -> String {
        match &self.user_name {
            Some(name) => format!("{}'s Streak", name),
            None => "No Contact Streak".to_string(),
        }
    }
}

/// Convert the start date → stored string (`2025-03-01T08:30:00.000Z`).
pub fn to_iso_string(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Convert stored string → start date. Any RFC 3339 offset is accepted.
pub fn from_iso_string(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| truncate_to_millis(dt.with_timezone(&Utc)))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Drop sub-millisecond precision so the value survives a round-trip through
/// the ISO-8601 representation unchanged.
pub fn truncate_to_millis(ts: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ts.timestamp_millis()).unwrap_or(ts)
}

fn normalize_name(name: Option<String>) -> Option<String> {
    name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}
