//! rStreak main entrypoint.

use rstreak::run;

fn main() {
    if let Err(e) = run() {
        rstreak::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
