//! Game configuration.
//!
//! `GameConfig` carries raw, unvalidated settings. Validation happens when
//! a game is constructed: an unusable flip delay is replaced by the
//! fallback and reported as a [`ConfigWarning`], never as a failure.

use serde::{Deserialize, Serialize};

use super::clock::Millis;
use super::error::{ConfigError, ConfigWarning};

/// Pause between the second flip of a turn and match evaluation.
///
/// Always within `[FlipDelay::MIN_MS, FlipDelay::MAX_MS]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FlipDelay(Millis);

impl FlipDelay {
    pub const MIN_MS: Millis = 350;
    pub const MAX_MS: Millis = 3000;
    /// Used whenever the requested delay is unusable.
    pub const FALLBACK_MS: Millis = 350;

    /// Validate a requested delay, correcting it to the fallback if needed.
    ///
    /// ```
    /// use memory_match::core::FlipDelay;
    ///
    /// let (delay, warning) = FlipDelay::sanitize(500.0);
    /// assert_eq!(delay.as_millis(), 500);
    /// assert!(warning.is_none());
    ///
    /// let (delay, warning) = FlipDelay::sanitize(100.0);
    /// assert_eq!(delay.as_millis(), 350);
    /// assert!(warning.is_some());
    /// ```
    #[must_use]
    pub fn sanitize(requested_ms: f64) -> (Self, Option<ConfigWarning>) {
        if requested_ms.is_nan() {
            return (
                Self::fallback(),
                Some(ConfigWarning::FlipDelayNotNumeric {
                    input: requested_ms.to_string(),
                }),
            );
        }
        if requested_ms < Self::MIN_MS as f64 || requested_ms > Self::MAX_MS as f64 {
            return (
                Self::fallback(),
                Some(ConfigWarning::FlipDelayOutOfRange {
                    requested: requested_ms,
                }),
            );
        }
        (Self(requested_ms as Millis), None)
    }

    /// Validate a delay typed by a user.
    ///
    /// ```
    /// use memory_match::core::{ConfigWarning, FlipDelay};
    ///
    /// assert_eq!(FlipDelay::parse(" 750 ").0.as_millis(), 750);
    ///
    /// let (delay, warning) = FlipDelay::parse("soon");
    /// assert_eq!(delay.as_millis(), 350);
    /// assert_eq!(warning, Some(ConfigWarning::FlipDelayNotNumeric { input: "soon".into() }));
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> (Self, Option<ConfigWarning>) {
        let trimmed = text.trim();
        match trimmed.parse::<f64>() {
            Ok(ms) if !ms.is_nan() => Self::sanitize(ms),
            _ => (
                Self::fallback(),
                Some(ConfigWarning::FlipDelayNotNumeric {
                    input: trimmed.to_string(),
                }),
            ),
        }
    }

    /// Validate a configured delay, whichever form it was given in.
    #[must_use]
    pub fn resolve(input: &FlipDelayInput) -> (Self, Option<ConfigWarning>) {
        match input {
            FlipDelayInput::Ms(ms) => Self::sanitize(*ms),
            FlipDelayInput::Text(text) => Self::parse(text),
        }
    }

    #[must_use]
    pub const fn fallback() -> Self {
        Self(Self::FALLBACK_MS)
    }

    #[must_use]
    pub const fn as_millis(self) -> Millis {
        self.0
    }
}

impl std::fmt::Display for FlipDelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Flip delay as the user supplied it: a number of milliseconds, or text
/// still to be parsed. In JSON this is a bare number or a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlipDelayInput {
    Ms(f64),
    Text(String),
}

/// Settings for one game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Requested flip delay, validated at game construction.
    pub flip_delay_ms: FlipDelayInput,

    /// Period of the elapsed-time display tick.
    pub tick_interval_ms: Millis,

    /// Seed for board shuffles.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            flip_delay_ms: FlipDelayInput::Ms(500.0),
            tick_interval_ms: 1000,
            seed: 42,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(config)
    }

    /// Serialize to JSON that [`GameConfig::from_json`] reads back.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the flip delay in milliseconds. Non-finite values are kept as
    /// text, which JSON can carry.
    #[must_use]
    pub fn with_flip_delay(mut self, ms: f64) -> Self {
        self.flip_delay_ms = if ms.is_finite() {
            FlipDelayInput::Ms(ms)
        } else {
            FlipDelayInput::Text(ms.to_string())
        };
        self
    }

    /// Set the flip delay from user text. It is parsed, and reported if
    /// unusable, when the game starts.
    #[must_use]
    pub fn with_flip_delay_text(mut self, text: &str) -> Self {
        self.flip_delay_ms = FlipDelayInput::Text(text.trim().to_string());
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the tick period. Zero is clamped to 1 ms.
    #[must_use]
    pub fn with_tick_interval(mut self, ms: Millis) -> Self {
        self.tick_interval_ms = ms.max(1);
        self
    }
}
