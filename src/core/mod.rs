//! Core engine types: RNG, clock, scheduler, configuration, errors.
//!
//! Nothing in here knows about cards. The game layers pairs, boards and
//! turns on top of these.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;
pub mod scheduler;

pub use clock::{Clock, ManualClock, Millis, SystemClock};
pub use config::{FlipDelay, FlipDelayInput, GameConfig};
pub use error::{ConfigError, ConfigWarning, DeckError};
pub use rng::GameRng;
pub use scheduler::{ScheduledTask, Scheduler, Task, TaskId};
