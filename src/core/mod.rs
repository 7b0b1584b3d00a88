pub mod log;
pub mod milestones;
pub mod quotes;
pub mod streak;
pub mod tracker;
