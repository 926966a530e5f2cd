//! Scoring.

use crate::core::Millis;

pub const BASE_SCORE: f64 = 10_000.0;
pub const PENALTY_PER_MOVE: f64 = 10.0;
pub const PENALTY_PER_SECOND: f64 = 5.0;

/// `max(0, 10000 - (moves * 10 + seconds * 5))`, floored.
///
/// Seconds are fractional here; only the displayed time is truncated.
///
/// ```
/// use memory_match::game::score;
///
/// assert_eq!(score(4, 2_000), 9_950);
/// assert_eq!(score(3, 1_500), 9_962);
/// ```
#[must_use]
pub fn score(moves: u32, elapsed_ms: Millis) -> u32 {
    let elapsed_secs = elapsed_ms as f64 / 1000.0;
    let raw = BASE_SCORE - (f64::from(moves) * PENALTY_PER_MOVE + elapsed_secs * PENALTY_PER_SECOND);
    raw.max(0.0).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_instant_game() {
        assert_eq!(score(0, 0), 10_000);
    }

    #[test]
    fn test_penalties() {
        assert_eq!(score(12, 0), 9_880);
        assert_eq!(score(0, 60_000), 9_700);
        assert_eq!(score(12, 60_000), 9_580);
    }

    #[test]
    fn test_fractional_seconds_floor() {
        // 10000 - (20 + 1.234 * 5) = 9973.83
        assert_eq!(score(2, 1_234), 9_973);
    }

    #[test]
    fn test_never_negative() {
        assert_eq!(score(1_000, 0), 0);
        assert_eq!(score(500, 10_000_000), 0);
    }
}
