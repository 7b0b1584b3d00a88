//! The streak tracker: owns the single `StreakState`, the store it is
//! persisted to and the clock used for "now".
//!
//! States are `Uninitialized` (before `load`) and `Active`; every operation
//! after `load` keeps the tracker active. All mutations are synchronous and
//! have written the store by the time they return.

use crate::core::milestones::{badge_tier, days_to_next_tier, motivational_message};
use crate::core::streak::{day_label, elapsed_days, progress_ratio};
use crate::errors::{AppError, AppResult, ValidationError};
use crate::models::badge::{BadgeColor, BadgeTier};
use crate::models::notice::{Notifier, StreakEvent};
use crate::models::streak_state::{StreakState, truncate_to_millis};
use crate::store::{KeyValueStore, StreakStore};
use crate::utils::clock::Clock;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything the status card displays, derived from the state and "now".
#[derive(Debug, Clone, Serialize)]
pub struct StreakSummary {
    pub title: String,
    pub user_name: Option<String>,
    pub start_date: DateTime<Utc>,
    pub days: u64,
    pub day_label: &'static str,
    pub message: &'static str,
    pub badge: BadgeTier,
    pub badge_label: &'static str,
    pub badge_color: BadgeColor,
    pub days_to_next_badge: Option<u64>,
    pub progress: f64,
}

/// Result of a successful edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditOutcome {
    pub start_date_changed: bool,
}

pub struct StreakTracker<S: KeyValueStore, C: Clock> {
    state: StreakState,
    store: S,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> StreakTracker<S, C> {
    /// Read the persisted state. A missing (or unreadable) start date
    /// defaults to "now" and is written back right away; a persisted start
    /// date is never replaced by that default.
    pub fn load(store: S, clock: C, notifier: &mut dyn Notifier) -> AppResult<Self> {
        let loaded = store.load()?;
        let now = clock.now();

        let missing_start = loaded.start_date.is_none();
        let state = StreakState::new(loaded.start_date.unwrap_or(now), loaded.user_name);

        let mut tracker = Self {
            state,
            store,
            clock,
        };

        if let Some(raw) = loaded.unreadable_start_date {
            notifier.notify(&StreakEvent::StartDateRecovered { raw });
        }

        if missing_start {
            let start = tracker.state.start_date;
            // fail open: the tracker still works in memory for this session
            if let Err(e) = tracker.store.save_start_date(&start) {
                notifier.notify(&StreakEvent::StorageUnavailable {
                    detail: e.to_string(),
                });
            }
        }

        Ok(tracker)
    }

    pub fn state(&self) -> &StreakState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn elapsed_days(&self) -> u64 {
        elapsed_days(self.state.start_date, self.clock.now())
    }

    pub fn summary(&self, progress_target_days: u32) -> StreakSummary {
        let days = self.elapsed_days();
        let badge = badge_tier(days);

        StreakSummary {
            title: self.state.title(),
            user_name: self.state.user_name.clone(),
            start_date: self.state.start_date,
            days,
            day_label: day_label(days),
            message: motivational_message(days),
            badge,
            badge_label: badge.label(),
            badge_color: badge.color(),
            days_to_next_badge: days_to_next_tier(days),
            progress: progress_ratio(days, progress_target_days),
        }
    }

    /// Restart the streak now.
    pub fn reset(&mut self, notifier: &mut dyn Notifier) -> AppResult<()> {
        let now = self.clock.now();
        self.apply_reset(now);

        let start = self.state.start_date;
        self.persist(notifier, |store| store.save_start_date(&start))?;

        notifier.notify(&StreakEvent::Reset { start_date: start });
        Ok(())
    }

    /// Personalize the streak: set the name and, when it differs from the
    /// current one, restart the streak from `start_date`.
    ///
    /// Both inputs are validated before anything changes, so a rejected edit
    /// leaves state and store untouched.
    pub fn edit(
        &mut self,
        name: &str,
        start_date: DateTime<Utc>,
        notifier: &mut dyn Notifier,
    ) -> AppResult<EditOutcome> {
        let now = self.clock.now();
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        let candidate = truncate_to_millis(start_date);
        if candidate > now {
            return Err(ValidationError::FutureStartDate(candidate).into());
        }

        let start_date_changed = candidate != self.state.start_date;

        self.state.user_name = Some(name.to_string());
        if start_date_changed {
            self.apply_reset(now);
            self.apply_date_override(candidate);
        }

        self.persist(notifier, |store| {
            store.save_user_name(Some(name))?;
            if start_date_changed {
                store.save_start_date(&candidate)?;
            }
            Ok(())
        })?;

        if start_date_changed {
            notifier.notify(&StreakEvent::Reset {
                start_date: candidate,
            });
        }
        notifier.notify(&StreakEvent::Personalized {
            name: name.to_string(),
        });

        Ok(EditOutcome { start_date_changed })
    }

    /// "Motivate me": no state change.
    pub fn encourage(&self, notifier: &mut dyn Notifier) {
        notifier.notify(&StreakEvent::Encouragement);
    }

    fn apply_reset(&mut self, now: DateTime<Utc>) {
        self.state.start_date = truncate_to_millis(now);
    }

    fn apply_date_override(&mut self, start_date: DateTime<Utc>) {
        self.state.start_date = truncate_to_millis(start_date);
    }

    /// Run a write against the store. On failure the in-memory state is kept,
    /// the notifier is told and the error is returned as `AppError::Storage`.
    fn persist<F>(&mut self, notifier: &mut dyn Notifier, write: F) -> AppResult<()>
    where
        F: FnOnce(&mut S) -> AppResult<()>,
    {
        write(&mut self.store).map_err(|e| {
            let detail = e.to_string();
            notifier.notify(&StreakEvent::StorageUnavailable {
                detail: detail.clone(),
            });
            match e {
                AppError::Storage(_) => e,
                _ => AppError::Storage(detail),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notice::RecordingNotifier;
    use crate::models::streak_state::to_iso_string;
    use crate::store::{KEY_START_DATE, KEY_USER_NAME, MemoryStore};
    use crate::utils::clock::FixedClock;
    use chrono::{Duration, TimeZone};

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap())
    }

    fn store_with_start(start: DateTime<Utc>) -> MemoryStore {
        let mut store = MemoryStore::default();
        store.set(KEY_START_DATE, &to_iso_string(&start)).unwrap();
        store
    }

    #[test]
    fn first_load_defaults_to_now_and_persists_it() {
        let clock = clock();
        let mut n = RecordingNotifier::default();
        let t = StreakTracker::load(MemoryStore::default(), &clock, &mut n).unwrap();

        assert_eq!(t.elapsed_days(), 0);
        assert_eq!(t.state().start_date, clock.now());
        assert_eq!(t.state().user_name, None);
        assert_eq!(
            t.store().get(KEY_START_DATE).unwrap(),
            Some(to_iso_string(&clock.now()))
        );
        assert!(n.events.is_empty());
    }

    #[test]
    fn load_keeps_persisted_values() {
        let clock = clock();
        let start = clock.now() - Duration::days(40);
        let mut store = store_with_start(start);
        store.set(KEY_USER_NAME, "Alex").unwrap();

        let mut n = RecordingNotifier::default();
        let t = StreakTracker::load(store, &clock, &mut n).unwrap();

        assert_eq!(t.elapsed_days(), 40);
        assert_eq!(t.state().user_name.as_deref(), Some("Alex"));

        let s = t.summary(30);
        assert_eq!(s.title, "Alex's Streak");
        assert_eq!(s.badge, BadgeTier::Resilient);
        assert_eq!(s.message, "A month of growth! You're reclaiming your power.");
        assert_eq!(s.progress, 1.0);
        assert_eq!(s.days_to_next_badge, Some(50));
    }

    #[test]
    fn unreadable_start_date_is_recovered() {
        let clock = clock();
        let mut store = MemoryStore::default();
        store.set(KEY_START_DATE, "Invalid Date").unwrap();

        let mut n = RecordingNotifier::default();
        let t = StreakTracker::load(store, &clock, &mut n).unwrap();

        assert_eq!(t.elapsed_days(), 0);
        assert_eq!(
            n.events,
            vec![StreakEvent::StartDateRecovered {
                raw: "Invalid Date".into()
            }]
        );
        assert_eq!(
            t.store().get(KEY_START_DATE).unwrap(),
            Some(to_iso_string(&clock.now()))
        );
    }

    #[test]
    fn reset_brings_days_back_to_zero() {
        let clock = clock();
        let store = store_with_start(clock.now() - Duration::days(12));
        let mut n = RecordingNotifier::default();
        let mut t = StreakTracker::load(store, &clock, &mut n).unwrap();
        assert_eq!(t.elapsed_days(), 12);

        t.reset(&mut n).unwrap();

        assert_eq!(t.elapsed_days(), 0);
        assert_eq!(
            n.events,
            vec![StreakEvent::Reset {
                start_date: clock.now()
            }]
        );
        // durable: a fresh load sees the reset
        let reloaded = StreakTracker::load(t.into_store(), &clock, &mut n).unwrap();
        assert_eq!(reloaded.state().start_date, clock.now());
    }

    #[test]
    fn empty_name_is_rejected_and_nothing_changes() {
        let clock = clock();
        let start = clock.now() - Duration::days(5);
        let mut n = RecordingNotifier::default();
        let mut t = StreakTracker::load(store_with_start(start), &clock, &mut n).unwrap();

        let err = t
            .edit("", clock.now() - Duration::days(1), &mut n)
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::EmptyName)
        ));

        let err = t.edit("   ", start, &mut n).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::EmptyName)
        ));

        assert_eq!(t.state().start_date, start);
        assert_eq!(t.state().user_name, None);
        assert_eq!(t.store().get(KEY_USER_NAME).unwrap(), None);
        assert!(n.events.is_empty());
    }

    #[test]
    fn future_start_date_is_rejected_and_nothing_changes() {
        let clock = clock();
        let start = clock.now() - Duration::days(5);
        let mut n = RecordingNotifier::default();
        let mut t = StreakTracker::load(store_with_start(start), &clock, &mut n).unwrap();

        let tomorrow = clock.now() + Duration::days(1);
        let err = t.edit("Alex", tomorrow, &mut n).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::FutureStartDate(d)) if d == tomorrow
        ));

        assert_eq!(t.state().start_date, start);
        assert_eq!(t.state().user_name, None);
        assert_eq!(t.elapsed_days(), 5);
        assert!(n.events.is_empty());
    }

    #[test]
    fn start_date_equal_to_now_is_accepted() {
        let clock = clock();
        let mut n = RecordingNotifier::default();
        let mut t = StreakTracker::load(
            store_with_start(clock.now() - Duration::days(3)),
            &clock,
            &mut n,
        )
        .unwrap();

        let outcome = t.edit("Alex", clock.now(), &mut n).unwrap();
        assert!(outcome.start_date_changed);
        assert_eq!(t.elapsed_days(), 0);
    }

    #[test]
    fn name_only_edit_keeps_the_streak() {
        let clock = clock();
        let start = clock.now() - Duration::days(8);
        let mut n = RecordingNotifier::default();
        let mut t = StreakTracker::load(store_with_start(start), &clock, &mut n).unwrap();

        let outcome = t.edit("Alex", start, &mut n).unwrap();

        assert!(!outcome.start_date_changed);
        assert_eq!(t.state().user_name.as_deref(), Some("Alex"));
        assert_eq!(t.state().start_date, start);
        assert_eq!(t.elapsed_days(), 8);
        assert_eq!(
            t.store().get(KEY_USER_NAME).unwrap().as_deref(),
            Some("Alex")
        );
        assert_eq!(
            n.events,
            vec![StreakEvent::Personalized {
                name: "Alex".into()
            }]
        );
    }

    #[test]
    fn new_past_start_date_overrides_the_streak() {
        let clock = clock();
        let mut n = RecordingNotifier::default();
        let mut t = StreakTracker::load(MemoryStore::default(), &clock, &mut n).unwrap();

        let ten_days_ago = clock.now() - Duration::days(10);
        let outcome = t.edit("Alex", ten_days_ago, &mut n).unwrap();

        assert!(outcome.start_date_changed);
        assert_eq!(t.elapsed_days(), 10);
        assert_eq!(
            n.events,
            vec![
                StreakEvent::Reset {
                    start_date: ten_days_ago
                },
                StreakEvent::Personalized {
                    name: "Alex".into()
                },
            ]
        );

        // the override survives a reload instead of being replaced by "now"
        clock.advance(Duration::hours(1));
        let reloaded = StreakTracker::load(t.into_store(), &clock, &mut n).unwrap();
        assert_eq!(reloaded.state().start_date, ten_days_ago);
        assert_eq!(reloaded.elapsed_days(), 10);
        assert_eq!(reloaded.state().user_name.as_deref(), Some("Alex"));
    }

    #[test]
    fn days_grow_with_the_clock() {
        let clock = clock();
        let mut n = RecordingNotifier::default();
        let t = StreakTracker::load(MemoryStore::default(), &clock, &mut n).unwrap();

        clock.advance(Duration::hours(25));
        assert_eq!(t.elapsed_days(), 1);
        assert_eq!(t.summary(30).day_label, "Day");

        clock.advance(Duration::days(400));
        assert_eq!(t.summary(30).badge, BadgeTier::FreedomMaster);
    }

    #[test]
    fn storage_failure_keeps_memory_state_and_reports() {
        let clock = clock();
        let start = clock.now() - Duration::days(20);
        let mut n = RecordingNotifier::default();
        let mut t = StreakTracker::load(store_with_start(start), &clock, &mut n).unwrap();

        t.store_mut().fail_writes(true);
        let err = t.reset(&mut n).unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(t.elapsed_days(), 0);
        assert!(matches!(
            n.events.as_slice(),
            [StreakEvent::StorageUnavailable { .. }]
        ));
        assert_eq!(
            t.store().get(KEY_START_DATE).unwrap(),
            Some(to_iso_string(&start))
        );
    }

    #[test]
    fn load_fails_open_when_default_cannot_be_saved() {
        let clock = clock();
        let mut store = MemoryStore::default();
        store.fail_writes(true);

        let mut n = RecordingNotifier::default();
        let t = StreakTracker::load(store, &clock, &mut n).unwrap();

        assert_eq!(t.state().start_date, clock.now());
        assert_eq!(t.elapsed_days(), 0);
        assert!(matches!(
            n.events.as_slice(),
            [StreakEvent::StorageUnavailable { .. }]
        ));
        assert_eq!(t.store().get(KEY_START_DATE).unwrap(), None);
    }

    #[test]
    fn edit_storage_failure_keeps_memory_state_without_success_events() {
        let clock = clock();
        let start = clock.now() - Duration::days(20);
        let mut n = RecordingNotifier::default();
        let mut t = StreakTracker::load(store_with_start(start), &clock, &mut n).unwrap();

        t.store_mut().fail_writes(true);
        let three_days_ago = clock.now() - Duration::days(3);
        let err = t.edit("Alex", three_days_ago, &mut n).unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(t.state().user_name.as_deref(), Some("Alex"));
        assert_eq!(t.state().start_date, three_days_ago);
        assert_eq!(t.elapsed_days(), 3);
        assert!(matches!(
            n.events.as_slice(),
            [StreakEvent::StorageUnavailable { .. }]
        ));

        // the store still holds the old values
        assert_eq!(t.store().get(KEY_USER_NAME).unwrap(), None);
        assert_eq!(
            t.store().get(KEY_START_DATE).unwrap(),
            Some(to_iso_string(&start))
        );
    }

    #[test]
    fn encourage_only_notifies() {
        let clock = clock();
        let mut n = RecordingNotifier::default();
        let t = StreakTracker::load(MemoryStore::default(), &clock, &mut n).unwrap();

        t.encourage(&mut n);
        assert_eq!(n.events, vec![StreakEvent::Encouragement]);
        assert_eq!(n.events[0].title(), "You've got this!");
    }
}
