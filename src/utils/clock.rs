use crate::errors::AppResult;
use crate::utils::date::parse_timestamp;
use chrono::{DateTime, Utc};
use std::cell::Cell;

/// Source of "now" for the tracker. Swappable so tests (and the hidden
/// `--at` flag) can pin the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant; `advance` moves it forward.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Clock for a CLI invocation: pinned when `--at` was given.
pub fn clock_from_override(at: Option<&str>) -> AppResult<Box<dyn Clock>> {
    match at {
        Some(ts) => Ok(Box::new(FixedClock::new(parse_timestamp(ts)?))),
        None => Ok(Box::new(SystemClock)),
    }
}
