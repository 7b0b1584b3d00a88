use crate::cli::commands::{ask_confirmation, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::streak::day_label;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::notifier::CliNotifier;
use crate::utils::clock::Clock;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let mut notifier = CliNotifier::new(false);
        let mut tracker = open_tracker(cfg, clock, &mut notifier)?;

        let days = tracker.elapsed_days();
        let unit = day_label(days).to_lowercase();
        if !*yes
            && !ask_confirmation(&format!(
                "Reset your streak of {} {}? The count starts again from today.",
                days, unit
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let outcome = tracker.reset(&mut notifier);
        notifier.flush_to_log(tracker.store().conn(), tracker.now());
        outcome?;

        success(format!("Streak reset (was {} {}). Day 0 starts now.", days, unit));
    }

    Ok(())
}
