use crate::cli::commands::open_tracker;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::notifier::CliNotifier;
use crate::utils::clock::Clock;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - the streak itself (day 0, unless one is already stored)
pub fn handle(cli: &Cli, clock: &dyn Clock) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing rStreak…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", cfg.database);

    let pool = open_db(&cfg.database)?;
    let applied: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
        [],
        |row| row.get(0),
    )?;
    info(format!("Schema up to date ({} migrations applied)", applied));

    log::ttlog_or_warn(
        &pool.conn,
        clock.now(),
        "init",
        &cfg.database,
        &format!("Database initialized at {}", cfg.database),
    );
    drop(pool);

    let mut notifier = CliNotifier::new(false);
    let tracker = open_tracker(&cfg, clock, &mut notifier)?;
    notifier.flush_to_log(tracker.store().conn(), tracker.now());

    let days = tracker.elapsed_days();
    success(format!(
        "Tracking since {} (day {})",
        crate::utils::date::format_long_date(&tracker.state().start_date, &cfg.date_format),
        days
    ));

    println!("🎉 rStreak initialization completed!");
    Ok(())
}
