//! Serializable views of a running game.
//!
//! A snapshot shows what a player could see: face-down cards carry no
//! identity or artwork.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

use super::engine::GamePhase;
use super::event::GameSummary;

/// One card as seen from the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    /// `None` while face-down.
    pub identity: Option<String>,
    /// `None` while face-down.
    pub artwork: Option<String>,
    pub face_up: bool,
    pub matched: bool,
}

impl CardView {
    #[must_use]
    pub fn of(card: &Card, matched: bool) -> Self {
        let shown = card.face_up || matched;
        Self {
            id: card.id,
            identity: shown.then(|| card.identity.clone()),
            artwork: shown.then(|| card.artwork.clone()),
            face_up: card.face_up,
            matched,
        }
    }
}

/// Point-in-time view of a session, in board order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub moves: u32,
    pub matched: usize,
    pub flipped: Vec<CardId>,
    pub elapsed_secs: u64,
    pub columns: usize,
    pub cards: Vec<CardView>,
    pub summary: Option<GameSummary>,
}
