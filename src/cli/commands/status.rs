use crate::cli::commands::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::quotes::QuoteCarousel;
use crate::core::tracker::StreakSummary;
use crate::errors::{AppError, AppResult};
use crate::ui::notifier::CliNotifier;
use crate::utils::clock::Clock;
use crate::utils::colors::{BOLD, GREY, RESET, color_for_progress, paint_badge};
use crate::utils::date::format_long_date;
use crate::utils::formatting::{italic, pad_center, separator, wrap_centered};
use crate::utils::progress_bar;

const CARD_WIDTH: usize = 46;
const BAR_WIDTH: usize = 24;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Status { json } = cmd {
        let mut notifier = CliNotifier::new(*json);
        let tracker = open_tracker(cfg, clock, &mut notifier)?;
        notifier.flush_to_log(tracker.store().conn(), tracker.now());

        let summary = tracker.summary(cfg.progress_target_days);

        if *json {
            let out = serde_json::to_string_pretty(&summary)
                .map_err(|e| AppError::Other(format!("JSON serialization failed: {}", e)))?;
            println!("{}", out);
            return Ok(());
        }

        print_card(&summary, cfg);

        if cfg.show_quote {
            let carousel = QuoteCarousel::default();
            let q = carousel.current();
            println!();
            for line in wrap_centered(&format!("\"{}\"", q.quote), CARD_WIDTH) {
                println!("{}", italic(&line));
            }
            println!("{}{}{}", GREY, pad_center(&format!("— {}", q.author), CARD_WIDTH), RESET);
        }
    }

    Ok(())
}

fn print_card(s: &StreakSummary, cfg: &Config) {
    let rule = separator('─', CARD_WIDTH);

    println!("{}", rule);
    println!("{}{}{}", BOLD, pad_center(&s.title, CARD_WIDTH), RESET);
    println!(
        "{}{}{}",
        GREY,
        pad_center(
            &format!("Started on {}", format_long_date(&s.start_date, &cfg.date_format)),
            CARD_WIDTH
        ),
        RESET
    );
    println!();

    println!("{}{}{}", BOLD, pad_center(&s.days.to_string(), CARD_WIDTH), RESET);
    println!("{}", pad_center(s.day_label, CARD_WIDTH));

    let bar = format!(
        "{} {:>3}%",
        progress_bar(s.progress, BAR_WIDTH),
        (s.progress * 100.0).round() as u32
    );
    println!(
        "{}{}{}",
        color_for_progress(s.progress),
        pad_center(&bar, CARD_WIDTH),
        RESET
    );
    println!();

    // the badge is colored, so pad on its plain label
    let badge_pad = CARD_WIDTH.saturating_sub(s.badge_label.len() + 2) / 2;
    println!(
        "{}{}",
        " ".repeat(badge_pad),
        paint_badge(s.badge_label, s.badge_color)
    );

    for line in wrap_centered(s.message, CARD_WIDTH) {
        println!("{}", line);
    }

    if let Some(left) = s.days_to_next_badge {
        let unit = if left == 1 { "day" } else { "days" };
        println!(
            "{}{}{}",
            GREY,
            pad_center(&format!("{} {} to the next badge", left, unit), CARD_WIDTH),
            RESET
        );
    }

    println!("{}", rule);
}
