use crate::cli::commands::open_tracker;
use crate::config::Config;
use crate::core::milestones::motivational_message;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::notifier::CliNotifier;
use crate::utils::clock::Clock;

/// "Motivate me": an encouragement notice plus today's milestone message.
pub fn handle(cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    let mut notifier = CliNotifier::new(false);
    let tracker = open_tracker(cfg, clock, &mut notifier)?;

    tracker.encourage(&mut notifier);
    info(motivational_message(tracker.elapsed_days()));

    notifier.flush_to_log(tracker.store().conn(), tracker.now());
    Ok(())
}
