//! Error and warning types.
//!
//! Nothing a player does at the table is an error: ignored clicks are
//! simply ignored. Errors only come from building a session out of bad
//! inputs, and even the flip delay is corrected rather than rejected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::CardId;

/// A configuration value was corrected. Non-fatal.
#[derive(Clone, Debug, PartialEq, Error, Serialize, Deserialize)]
pub enum ConfigWarning {
    #[error("flip delay must be between 350 and 3000 ms, got {requested}; using 350 ms")]
    FlipDelayOutOfRange { requested: f64 },

    #[error("flip delay `{input}` is not a number; using 350 ms")]
    FlipDelayNotNumeric { input: String },
}

/// A configuration document could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,
}

/// The deck source cannot produce a well-formed board.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck has no entries")]
    Empty,

    #[error("identity `{0}` appears more than once in the deck")]
    DuplicateIdentity(String),

    #[error("deck has {0} entries, more than a board can hold")]
    TooLarge(usize),

    #[error("board has {0} cards; cards must come in pairs")]
    OddCardCount(usize),

    #[error("identity `{identity}` appears on {count} cards; expected exactly 2")]
    UnpairedIdentity { identity: String, count: usize },

    #[error("{0} is used by more than one card")]
    DuplicateCardId(CardId),
}
