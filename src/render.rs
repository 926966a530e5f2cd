//! Plain-text presentation.
//!
//! `Hud` subscribes to game events and keeps the display sinks (moves,
//! timer, win banner, notices). `draw_board` renders the card grid.

use crate::board::Board;
use crate::game::{GameEvent, GameObserver, GameSummary};

/// Display state fed by game events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hud {
    pub moves: u32,
    pub elapsed_secs: u64,
    pub summary: Option<GameSummary>,
    pub notices: Vec<String>,
    /// Layout generation last announced; the board needs redrawing when it
    /// changes.
    pub layout_generation: u64,
}

impl Hud {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status_line(&self) -> String {
        format!("Moves: {}   Time: {}s", self.moves, self.elapsed_secs)
    }

    /// Win summary, once the round is won.
    #[must_use]
    pub fn win_banner(&self) -> Option<String> {
        self.summary.map(|s| {
            format!(
                "You won! Score: {}   Moves: {}   Time: {}s",
                s.score, s.moves, s.elapsed_secs
            )
        })
    }

    /// Take pending notices, oldest first.
    pub fn drain_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}

impl GameObserver for Hud {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ConfigWarning(warning) => self.notices.push(warning.to_string()),
            GameEvent::BoardLaidOut { generation, .. } => self.layout_generation = *generation,
            GameEvent::MovesChanged { moves } => self.moves = *moves,
            GameEvent::TimerTick { elapsed_secs } => self.elapsed_secs = *elapsed_secs,
            GameEvent::Won(summary) => {
                self.elapsed_secs = summary.elapsed_secs;
                self.summary = Some(*summary);
            }
            GameEvent::Reset => {
                self.elapsed_secs = 0;
                self.summary = None;
            }
            GameEvent::CardFlipped { .. }
            | GameEvent::CardsHidden { .. }
            | GameEvent::PairMatched { .. } => {}
        }
    }
}

/// Render the board as a grid, one row per `column_count` cards.
///
/// Face-up cards show their identity; face-down cards show their layout
/// position so a player can pick them.
#[must_use]
pub fn draw_board(board: &Board) -> String {
    let width = board
        .cards()
        .iter()
        .map(|c| c.identity.chars().count())
        .chain(std::iter::once(board.len().to_string().len() + 1))
        .max()
        .unwrap_or(1);

    let columns = board.column_count();
    let mut out = String::new();
    for (row_index, row) in board.rows().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, card)| {
                let label = if card.face_up {
                    card.identity.clone()
                } else {
                    format!("#{}", row_index * columns + col)
                };
                format!("[{label:^width$}]")
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Deck};
    use crate::core::ConfigWarning;

    #[test]
    fn test_hud_tracks_sinks() {
        let mut hud = Hud::new();
        hud.on_event(&GameEvent::MovesChanged { moves: 3 });
        hud.on_event(&GameEvent::TimerTick { elapsed_secs: 7 });
        assert_eq!(hud.status_line(), "Moves: 3   Time: 7s");
        assert_eq!(hud.win_banner(), None);

        hud.on_event(&GameEvent::Won(GameSummary {
            score: 9_935,
            moves: 4,
            elapsed_secs: 5,
        }));
        assert_eq!(
            hud.win_banner().unwrap(),
            "You won! Score: 9935   Moves: 4   Time: 5s"
        );

        hud.on_event(&GameEvent::Reset);
        assert_eq!(hud.win_banner(), None);
        assert_eq!(hud.elapsed_secs, 0);
    }

    #[test]
    fn test_hud_collects_warnings() {
        let mut hud = Hud::new();
        hud.on_event(&GameEvent::ConfigWarning(ConfigWarning::FlipDelayNotNumeric {
            input: "fast".into(),
        }));
        let notices = hud.drain_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0], "flip delay `fast` is not a number; using 350 ms");
        assert!(hud.notices.is_empty());
    }

    #[test]
    fn test_draw_board() {
        let mut board = Board::from_deck(&Deck::from_identities(["A", "B"]).unwrap());
        board.card_mut(CardId::new(2)).unwrap().flip();

        let drawn = draw_board(&board);
        let lines: Vec<_> = drawn.lines().collect();
        assert_eq!(lines, vec!["[#0] [#1]", "[B ] [#3]"]);
    }
}
