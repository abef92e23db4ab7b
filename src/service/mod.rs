pub mod chat_controller;
pub mod stats_panel;

pub use chat_controller::{ChatController, TurnOutcome, TurnState};
pub use stats_panel::{StatsNotice, StatsPanel, StatsView};
