pub mod config;
pub mod db;
pub mod edit;
pub mod init;
pub mod log;
pub mod motivate;
pub mod quote;
pub mod reset;
pub mod status;

use crate::config::Config;
use crate::core::tracker::StreakTracker;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::models::notice::{Notifier, StreakEvent};
use crate::store::{SqliteStore, is_first_load, mark_first_load_done};
use crate::ui::messages::warning;
use crate::ui::notifier::CliNotifier;
use crate::utils::clock::Clock;

use std::io::{self, Write};

pub type CliTracker<'c> = StreakTracker<SqliteStore<'c>, &'c dyn Clock>;

/// Open the configured database and load the streak.
///
/// The first time a database is used, a welcome notice is shown and the
/// `firstLoad` flag is cleared. A quiet notifier (`status --json`) leaves
/// the flag set so the welcome is still shown on the next interactive run.
pub fn open_tracker<'c>(
    cfg: &Config,
    clock: &'c dyn Clock,
    notifier: &mut CliNotifier,
) -> AppResult<CliTracker<'c>> {
    let pool = open_db(&cfg.database)?;
    let mut store = SqliteStore::new(pool, clock);

    if !notifier.quiet && is_first_load(&store)? {
        notifier.notify(&StreakEvent::Welcome);
        mark_first_load_done(&mut store)?;
    }

    StreakTracker::load(store, clock, notifier)
}

/// Ask a yes/no confirmation from the user
pub fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
