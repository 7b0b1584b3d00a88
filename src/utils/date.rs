use crate::errors::{AppError, AppResult};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Long, human date used on the status card ("March 1, 2025" by default).
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse an RFC 3339 timestamp (used by `--at`).
pub fn parse_timestamp(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Parse a user-supplied start date: either `YYYY-MM-DD` (local midnight,
/// like picking a day in a calendar) or a full RFC 3339 timestamp.
pub fn parse_start_date(s: &str) -> AppResult<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let d = parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
    local_midnight(d).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Start of the given day in the local timezone, as UTC.
pub fn local_midnight(d: NaiveDate) -> Option<DateTime<Utc>> {
    let naive = d.and_hms_opt(0, 0, 0)?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// False when `fmt` contains an unknown or malformed strftime specifier.
pub fn is_valid_date_format(fmt: &str) -> bool {
    StrftimeItems::new(fmt).all(|item| !matches!(item, Item::Error))
}

/// Format `ts` in local time. An invalid `fmt` (it comes from the user's
/// config file) falls back to `DEFAULT_DATE_FORMAT`.
pub fn format_long_date(ts: &DateTime<Utc>, fmt: &str) -> String {
    let fmt = if is_valid_date_format(fmt) {
        fmt
    } else {
        DEFAULT_DATE_FORMAT
    };
    ts.with_timezone(&Local).format(fmt).to_string()
}
