//! State-change notifications.
//!
//! The game never draws anything. It emits these events, and presentation
//! layers subscribe to them through [`GameObserver`](super::GameObserver).

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::ConfigWarning;

/// Final numbers surfaced when the last pair is matched.
///
/// `score` and `elapsed_secs` come from the same clock read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: u32,
    pub moves: u32,
    /// Whole seconds from timer start to the winning match.
    pub elapsed_secs: u64,
}

/// Something observable happened in the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A configuration value was corrected at construction.
    ConfigWarning(ConfigWarning),

    /// The board was (re)shuffled and must be redrawn.
    BoardLaidOut { columns: usize, generation: u64 },

    /// A card turned face-up.
    CardFlipped { card: CardId },

    /// A mismatched pair turned back face-down.
    CardsHidden { first: CardId, second: CardId },

    /// A pair joined the matched set.
    PairMatched { first: CardId, second: CardId },

    /// Move counter changed.
    MovesChanged { moves: u32 },

    /// Periodic elapsed-time update.
    TimerTick { elapsed_secs: u64 },

    /// All pairs matched. The timer has stopped.
    Won(GameSummary),

    /// Session state was cleared for a new round.
    Reset,
}

impl GameEvent {
    /// Short name for log lines.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ConfigWarning(_) => "config_warning",
            Self::BoardLaidOut { .. } => "board_laid_out",
            Self::CardFlipped { .. } => "card_flipped",
            Self::CardsHidden { .. } => "cards_hidden",
            Self::PairMatched { .. } => "pair_matched",
            Self::MovesChanged { .. } => "moves_changed",
            Self::TimerTick { .. } => "timer_tick",
            Self::Won(_) => "won",
            Self::Reset => "reset",
        }
    }
}
