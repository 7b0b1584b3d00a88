use crate::cli::parser::Commands;
use crate::core::quotes::{QUOTES, Quote, QuoteCarousel};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::italic;

const WRAP_WIDTH: usize = 60;

fn print_quote(index: usize, total: usize, q: &Quote) {
    println!("{}[{}/{}]{}", GREY, index + 1, total, RESET);
    for line in textwrap::wrap(&format!("\"{}\"", q.quote), WRAP_WIDTH) {
        println!("  {}", italic(&line));
    }
    println!("  {}— {}{}", GREY, q.author, RESET);
}

/// Quotes are not persisted: every invocation starts from the first one
/// and applies `--next`/`--prev` steps from there.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Quote { next, prev, all } = cmd {
        if *all {
            header("Motivation Corner");
            for (i, q) in QUOTES.iter().enumerate() {
                print_quote(i, QUOTES.len(), q);
                println!();
            }
            return Ok(());
        }

        let mut carousel = QuoteCarousel::default();
        carousel.skip_forward(*next);
        carousel.skip_back(*prev);

        print_quote(carousel.index(), carousel.len(), carousel.current());
    }

    Ok(())
}
