//! Cards and their flip state.

use serde::{Deserialize, Serialize};

/// Board-unique card handle.
///
/// Two cards of a pair share an identity but never a `CardId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single card on the board.
///
/// Cards with equal `identity` form a matching pair. `artwork` is an
/// opaque reference the presentation layer resolves (a path, a glyph).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub identity: String,
    pub artwork: String,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    pub fn new(id: CardId, identity: impl Into<String>, artwork: impl Into<String>) -> Self {
        Self {
            id,
            identity: identity.into(),
            artwork: artwork.into(),
            face_up: false,
        }
    }

    pub fn flip(&mut self) {
        self.face_up = true;
    }

    pub fn unflip(&mut self) {
        self.face_up = false;
    }

    pub fn toggle_flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Two cards match when they share an identity.
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.identity == other.identity
    }
}
