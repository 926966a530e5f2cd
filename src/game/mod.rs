//! The game: turn state machine, scoring, events, and observers.
//!
//! ## Key Types
//!
//! - `Game`: Owns the board, consumes its click notifications, and drives
//!   the flip/match/win cycle from an injected clock
//! - `GameEvent`: Notifications presentation layers subscribe to
//! - `GameObserver`: Subscriber trait
//! - `GameSnapshot`: Serializable table view

pub mod engine;
pub mod event;
pub mod observer;
pub mod score;
pub mod snapshot;

pub use engine::{Game, GamePhase};
pub use event::{GameEvent, GameSummary};
pub use observer::{event_log, EventLog, GameObserver};
pub use score::score;
pub use snapshot::{CardView, GameSnapshot};
