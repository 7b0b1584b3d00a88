//! Day-count derivation: everything here is a pure function of the start
//! date and a reference "now".

use chrono::{DateTime, Utc};

pub const MS_PER_DAY: i64 = 86_400_000;

/// Default size of the progress ring: full circle at 30 days.
pub const DEFAULT_PROGRESS_TARGET_DAYS: u32 = 30;

/// Whole days elapsed since `start`, floored and clamped to 0.
pub fn elapsed_days(start: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let diff_ms = now.timestamp_millis() - start.timestamp_millis();
    if diff_ms <= 0 {
        return 0;
    }
    (diff_ms / MS_PER_DAY) as u64
}

/// Fill ratio of the progress ring in `[0.0, 1.0]`.
pub fn progress_ratio(days: u64, target_days: u32) -> f64 {
    if target_days == 0 {
        return 1.0;
    }
    (days as f64 / target_days as f64).min(1.0)
}

pub fn day_label(days: u64) -> &'static str {
    if days == 1 { "Day" } else { "Days" }
}
