use crate::db::log::ttlog_or_warn;
use crate::models::notice::{Notifier, StreakEvent};
use crate::ui::messages::{notice, warning};
use chrono::{DateTime, Utc};
use rusqlite::Connection;

/// Prints tracker notifications to the terminal and remembers them so the
/// command can record them in the internal log afterwards.
#[derive(Debug, Default)]
pub struct CliNotifier {
    /// Suppress printing (e.g. `status --json`); events are still recorded.
    pub quiet: bool,
    emitted: Vec<StreakEvent>,
}

impl CliNotifier {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            emitted: Vec::new(),
        }
    }

    pub fn emitted(&self) -> &[StreakEvent] {
        &self.emitted
    }

    /// Write every state-changing event to the `log` table, dated `at`.
    pub fn flush_to_log(&mut self, conn: &Connection, at: DateTime<Utc>) {
        for ev in self.emitted.drain(..) {
            let target = match &ev {
                StreakEvent::Reset { start_date } => {
                    crate::models::streak_state::to_iso_string(start_date)
                }
                StreakEvent::Personalized { name } => name.clone(),
                StreakEvent::StartDateRecovered { raw } => raw.clone(),
                _ => String::new(),
            };

            match ev {
                StreakEvent::Encouragement | StreakEvent::Welcome => {}
                _ => ttlog_or_warn(conn, at, ev.operation(), &target, &ev.title()),
            }
        }
    }
}

impl Notifier for CliNotifier {
    fn notify(&mut self, event: &StreakEvent) {
        if !self.quiet {
            match event {
                StreakEvent::StorageUnavailable { .. } | StreakEvent::StartDateRecovered { .. } => {
                    warning(format!("{}: {}", event.title(), event.description()));
                }
                _ => notice(event.title(), event.description()),
            }
        }
        self.emitted.push(event.clone());
    }
}
