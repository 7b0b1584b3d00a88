pub mod badge;
pub mod notice;
pub mod streak_state;
