use chrono::{DateTime, Utc};

/// Semantic notifications emitted by the tracker and the CLI.
/// Delivery (printing, toasts, ...) is up to the `Notifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreakEvent {
    /// First run of the application.
    Welcome,
    /// The streak restarted, either now or from a user-supplied date.
    Reset { start_date: DateTime<Utc> },
    /// Name (and possibly start date) saved.
    Personalized { name: String },
    /// "Motivate me".
    Encouragement,
    /// A write to the store failed; in-memory state was kept.
    StorageUnavailable { detail: String },
    /// The stored start date could not be read and was replaced by "now".
    StartDateRecovered { raw: String },
}

impl StreakEvent {
    pub fn title(&self) -> String {
        match self {
            StreakEvent::Welcome => "Welcome to Your No Contact Tracker".to_string(),
            StreakEvent::Reset { .. } => "Streak Reset".to_string(),
            StreakEvent::Personalized { name } => format!("Welcome, {}!", name),
            StreakEvent::Encouragement => "You've got this!".to_string(),
            StreakEvent::StorageUnavailable { .. } => "Progress not saved".to_string(),
            StreakEvent::StartDateRecovered { .. } => "Start date unreadable".to_string(),
        }
    }

    pub fn description(&self) -> String {
        match self {
            StreakEvent::Welcome => {
                "Track your progress and stay strong. You've got this!".to_string()
            }
            StreakEvent::Reset { .. } => {
                "Your journey is about progress, not perfection. Start again.".to_string()
            }
            StreakEvent::Personalized { .. } => "Your journey has been personalized.".to_string(),
            StreakEvent::Encouragement => {
                "Every day is a step toward your brighter future.".to_string()
            }
            StreakEvent::StorageUnavailable { detail } => {
                format!("Changes are kept for now but could not be stored: {}", detail)
            }
            StreakEvent::StartDateRecovered { raw } => format!(
                "The stored value '{}' could not be read, your streak starts again today.",
                raw
            ),
        }
    }

    /// Short operation name used for the internal audit log.
    pub fn operation(&self) -> &'static str {
        match self {
            StreakEvent::Welcome => "welcome",
            StreakEvent::Reset { .. } => "reset",
            StreakEvent::Personalized { .. } => "edit",
            StreakEvent::Encouragement => "motivate",
            StreakEvent::StorageUnavailable { .. } => "storage_error",
            StreakEvent::StartDateRecovered { .. } => "recover",
        }
    }
}

/// Receiver of `StreakEvent`s.
pub trait Notifier {
    fn notify(&mut self, event: &StreakEvent);
}

/// Notifier that keeps every event, used by tests and by callers that want
/// to inspect what happened after an operation.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub events: Vec<StreakEvent>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, event: &StreakEvent) {
        self.events.push(event.clone());
    }
}
