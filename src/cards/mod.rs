//! Cards and the deck they are dealt from.
//!
//! ## Key Types
//!
//! - `CardId`: Board-unique handle for one card
//! - `Card`: Identity, artwork reference, and flip state
//! - `DeckEntry` / `Deck`: The distinct symbols a board is dealt from
//!
//! Every deck entry becomes exactly two cards, so a dealt board always
//! holds an even number of cards made of identity pairs.

pub mod card;
pub mod deck;

pub use card::{Card, CardId};
pub use deck::{Deck, DeckEntry};
