use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::ui::notifier::CliNotifier;
use crate::utils::clock::Clock;
use crate::utils::date::{format_long_date, parse_start_date};

/// Personalize the streak: name, and optionally a new last-contact date.
/// Without `--since` the current start date is kept.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Edit { name, since } = cmd {
        // parse before touching the database, like the dialog validates
        // its fields before submitting
        let candidate = since.as_deref().map(parse_start_date).transpose()?;

        let mut notifier = CliNotifier::new(false);
        let mut tracker = open_tracker(cfg, clock, &mut notifier)?;

        let start = candidate.unwrap_or(tracker.state().start_date);
        let outcome = tracker.edit(name, start, &mut notifier);
        notifier.flush_to_log(tracker.store().conn(), tracker.now());
        let outcome = outcome?;

        if outcome.start_date_changed {
            success(format!(
                "Streak now counts from {}: day {}.",
                format_long_date(&tracker.state().start_date, &cfg.date_format),
                tracker.elapsed_days()
            ));
        } else {
            success("Name saved, your streak is unchanged.");
        }
    }

    Ok(())
}
