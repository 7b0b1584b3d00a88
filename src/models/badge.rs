use serde::Serialize;

/// Milestone category derived from the elapsed-day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum BadgeTier {
    StartingOut,   // < 7
    Determined,    // < 30
    Resilient,     // < 90
    Warrior,       // < 180
    Transformed,   // < 365
    FreedomMaster, // >= 365
}

/// Opaque styling token attached to each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Blue,
    Green,
    Purple,
    Indigo,
    Pink,
    Gradient,
}

impl BadgeTier {
    pub const ALL: [BadgeTier; 6] = [
        BadgeTier::StartingOut,
        BadgeTier::Determined,
        BadgeTier::Resilient,
        BadgeTier::Warrior,
        BadgeTier::Transformed,
        BadgeTier::FreedomMaster,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BadgeTier::StartingOut => "Starting Out",
            BadgeTier::Determined => "Determined",
            BadgeTier::Resilient => "Resilient",
            BadgeTier::Warrior => "Warrior",
            BadgeTier::Transformed => "Transformed",
            BadgeTier::FreedomMaster => "Freedom Master",
        }
    }

    pub fn color(&self) -> BadgeColor {
        match self {
            BadgeTier::StartingOut => BadgeColor::Blue,
            BadgeTier::Determined => BadgeColor::Green,
            BadgeTier::Resilient => BadgeColor::Purple,
            BadgeTier::Warrior => BadgeColor::Indigo,
            BadgeTier::Transformed => BadgeColor::Pink,
            BadgeTier::FreedomMaster => BadgeColor::Gradient,
        }
    }

    /// Position in the ladder, 0 for "Starting Out" up to 5.
    pub fn rank(&self) -> usize {
        *self as usize
    }
}

impl BadgeColor {
    pub fn as_token(&self) -> &'static str {
        match self {
            BadgeColor::Blue => "blue",
            BadgeColor::Green => "green",
            BadgeColor::Purple => "purple",
            BadgeColor::Indigo => "indigo",
            BadgeColor::Pink => "pink",
            BadgeColor::Gradient => "gradient",
        }
    }
}
