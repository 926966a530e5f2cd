//! Grid sizing for a board.

/// Fewest columns a board is laid out in.
pub const MIN_COLUMNS: usize = 2;
/// Most columns a board is laid out in.
pub const MAX_COLUMNS: usize = 12;

/// Column count for a board of `card_count` cards.
///
/// Half the card count, clamped to `[MIN_COLUMNS, MAX_COLUMNS]`, then
/// forced even: 11 rounds up to 12, any other odd count rounds down.
///
/// ```
/// use memory_match::board::column_count;
///
/// assert_eq!(column_count(4), 2);
/// assert_eq!(column_count(12), 6);
/// assert_eq!(column_count(14), 6);
/// assert_eq!(column_count(22), 12);
/// ```
#[must_use]
pub fn column_count(card_count: usize) -> usize {
    let cols = (card_count / 2).clamp(MIN_COLUMNS, MAX_COLUMNS);
    if cols % 2 == 0 {
        cols
    } else if cols == 11 {
        12
    } else {
        cols - 1
    }
}
