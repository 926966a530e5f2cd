//! # memory-match
//!
//! A headless memory-matching card game engine.
//!
//! ## Design Principles
//!
//! 1. **No UI coupling**: The game emits `GameEvent`s; presentation layers
//!    subscribe via `GameObserver` and draw however they like.
//!
//! 2. **Injected time**: All delays and the elapsed-time tick run off a
//!    `Clock` and a `Scheduler`, so tests advance time by hand.
//!
//! 3. **Deterministic deals**: Shuffles draw from a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: RNG, clock, scheduler, configuration, errors
//! - `cards`: Cards and the deck they are dealt from
//! - `board`: Card layout, shuffling, click routing
//! - `game`: Turn state machine, scoring, events
//! - `render`: Plain-text presentation
//! - `session`: Composition root

pub mod core;
pub mod cards;
pub mod board;
pub mod game;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Clock, ManualClock, Millis, SystemClock,
    GameRng, Scheduler, Task, TaskId,
    FlipDelay, FlipDelayInput, GameConfig,
    ConfigError, ConfigWarning, DeckError,
};

pub use crate::cards::{Card, CardId, Deck, DeckEntry};

pub use crate::board::{column_count, Board};

pub use crate::game::{
    score, event_log, EventLog,
    Game, GamePhase, GameEvent, GameSummary, GameObserver,
    CardView, GameSnapshot,
};

pub use crate::render::{draw_board, Hud};
pub use crate::session::Session;
