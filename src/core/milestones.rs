//! Threshold tables mapping an elapsed-day count to a message and a badge.
//!
//! Each table is a list of `(exclusive_upper_bound, value)` pairs in
//! ascending order plus a catch-all; the first entry whose bound is greater
//! than the input wins.

use crate::models::badge::BadgeTier;

const MESSAGES: &[(u64, &str)] = &[
    (1, "Today is the first day of your new journey!"),
    (2, "Congratulations on your first day!"),
    (7, "Keep going! The beginning is always the hardest."),
    (14, "A week down! You're building strength every day."),
    (30, "Look at you go! Your resilience is impressive."),
    (60, "A month of growth! You're reclaiming your power."),
    (90, "Amazing progress! You're creating new patterns."),
    (180, "You're transforming! Feel proud of your journey."),
    (365, "Look how far you've come! You're an inspiration."),
];
const FINAL_MESSAGE: &str = "Incredible milestone! You've completely transformed your life!";

const BADGES: &[(u64, BadgeTier)] = &[
    (7, BadgeTier::StartingOut),
    (30, BadgeTier::Determined),
    (90, BadgeTier::Resilient),
    (180, BadgeTier::Warrior),
    (365, BadgeTier::Transformed),
];
const FINAL_BADGE: BadgeTier = BadgeTier::FreedomMaster;

fn lookup<T: Copy>(table: &[(u64, T)], fallback: T, days: u64) -> T {
    table
        .iter()
        .find(|(bound, _)| days < *bound)
        .map(|(_, value)| *value)
        .unwrap_or(fallback)
}

pub fn motivational_message(days: u64) -> &'static str {
    lookup(MESSAGES, FINAL_MESSAGE, days)
}

pub fn badge_tier(days: u64) -> BadgeTier {
    lookup(BADGES, FINAL_BADGE, days)
}

/// Days left before the next tier, `None` once the final tier is reached.
pub fn days_to_next_tier(days: u64) -> Option<u64> {
    BADGES
        .iter()
        .find(|(bound, _)| days < *bound)
        .map(|(bound, _)| bound - days)
}

/// All distinct messages, in ladder order.
pub fn all_messages() -> Vec<&'static str> {
    MESSAGES
        .iter()
        .map(|(_, m)| *m)
        .chain(std::iter::once(FINAL_MESSAGE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_days_have_their_own_messages() {
        assert_eq!(
            motivational_message(0),
            "Today is the first day of your new journey!"
        );
        assert_eq!(motivational_message(1), "Congratulations on your first day!");
        assert_eq!(
            motivational_message(2),
            "Keep going! The beginning is always the hardest."
        );
    }

    #[test]
    fn message_band_edges() {
        assert_eq!(motivational_message(6), motivational_message(2));
        assert_eq!(
            motivational_message(7),
            "A week down! You're building strength every day."
        );
        assert_eq!(
            motivational_message(29),
            "Look at you go! Your resilience is impressive."
        );
        assert_eq!(
            motivational_message(364),
            "Look how far you've come! You're an inspiration."
        );
        assert_eq!(motivational_message(365), FINAL_MESSAGE);
        assert_eq!(motivational_message(10_000), FINAL_MESSAGE);
    }

    #[test]
    fn there_are_ten_messages_each_reached_once() {
        let all = all_messages();
        assert_eq!(all.len(), 10);

        // walking the days visits every band exactly once and in order
        let mut seen: Vec<&str> = Vec::new();
        for d in 0..=400 {
            let m = motivational_message(d);
            if seen.last() != Some(&m) {
                assert!(!seen.contains(&m), "band {m:?} appears twice");
                seen.push(m);
            }
        }
        assert_eq!(seen, all);
    }

    #[test]
    fn badge_band_edges() {
        assert_eq!(badge_tier(0), BadgeTier::StartingOut);
        assert_eq!(badge_tier(6), BadgeTier::StartingOut);
        assert_eq!(badge_tier(7), BadgeTier::Determined);
        assert_eq!(badge_tier(29), BadgeTier::Determined);
        assert_eq!(badge_tier(30), BadgeTier::Resilient);
        assert_eq!(badge_tier(89), BadgeTier::Resilient);
        assert_eq!(badge_tier(90), BadgeTier::Warrior);
        assert_eq!(badge_tier(179), BadgeTier::Warrior);
        assert_eq!(badge_tier(180), BadgeTier::Transformed);
        assert_eq!(badge_tier(364), BadgeTier::Transformed);
        assert_eq!(badge_tier(365), BadgeTier::FreedomMaster);
        assert_eq!(badge_tier(u64::MAX), BadgeTier::FreedomMaster);
    }

    #[test]
    fn badges_never_regress() {
        let mut prev = badge_tier(0);
        for d in 1..=1_000 {
            let tier = badge_tier(d);
            assert!(tier.rank() >= prev.rank(), "regressed at day {d}");
            assert!(BadgeTier::ALL.contains(&tier));
            prev = tier;
        }
    }

    #[test]
    fn colors_follow_tiers() {
        let tokens: Vec<&str> = BadgeTier::ALL
            .iter()
            .map(|t| t.color().as_token())
            .collect();
        assert_eq!(
            tokens,
            ["blue", "green", "purple", "indigo", "pink", "gradient"]
        );
        assert_eq!(badge_tier(45).label(), "Resilient");
    }

    #[test]
    fn next_tier_countdown() {
        assert_eq!(days_to_next_tier(0), Some(7));
        assert_eq!(days_to_next_tier(7), Some(23));
        assert_eq!(days_to_next_tier(364), Some(1));
        assert_eq!(days_to_next_tier(365), None);
    }
}
