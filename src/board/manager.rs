//! The board: ordered cards, shuffling, and click routing.
//!
//! Position on the board only matters for layout. Game logic refers to
//! cards by `CardId`, so shuffling never invalidates a handle.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::cards::{Card, CardId, Deck};
use crate::core::{DeckError, GameRng};

use super::layout::column_count;

/// Callback receiving card selections from the presentation layer.
pub type ClickHandler = Box<dyn FnMut(CardId)>;

/// Ordered collection of cards.
///
/// ## Usage
///
/// ```
/// use memory_match::board::Board;
/// use memory_match::cards::Deck;
/// use memory_match::core::GameRng;
///
/// let mut board = Board::from_deck(&Deck::languages());
/// let mut rng = GameRng::new(42);
/// board.reset_layout(&mut rng);
///
/// assert_eq!(board.len(), 12);
/// assert_eq!(board.column_count(), 6);
/// assert_eq!(board.layout_generation(), 1);
/// ```
pub struct Board {
    cards: Vec<Card>,
    /// Bumped on every `reset_layout` so renderers know to rebuild.
    layout_generation: u64,
    on_click: Option<ClickHandler>,
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("cards", &self.cards)
            .field("layout_generation", &self.layout_generation)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl Board {
    /// Board over the given cards, in the given order.
    ///
    /// Every identity must appear on exactly two cards and every `CardId`
    /// must be unique, otherwise the board could never be won.
    pub fn new(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }
        if cards.len() % 2 != 0 {
            return Err(DeckError::OddCardCount(cards.len()));
        }

        let mut ids = FxHashSet::default();
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for card in &cards {
            if !ids.insert(card.id) {
                return Err(DeckError::DuplicateCardId(card.id));
            }
            *counts.entry(card.identity.as_str()).or_default() += 1;
        }
        if let Some((identity, count)) = counts.into_iter().find(|&(_, count)| count != 2) {
            return Err(DeckError::UnpairedIdentity {
                identity: identity.to_string(),
                count,
            });
        }

        Ok(Self::from_dealt(cards))
    }

    /// Board holding two cards per deck entry, unshuffled.
    pub fn from_deck(deck: &Deck) -> Self {
        Self::from_dealt(deck.deal())
    }

    /// A validated `Deck` always deals well-formed pairs.
    fn from_dealt(cards: Vec<Card>) -> Self {
        Self {
            cards,
            layout_generation: 0,
            on_click: None,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// Card at a layout position.
    #[must_use]
    pub fn card_at(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        column_count(self.cards.len())
    }

    /// Cards split into rows of `column_count` cards.
    pub fn rows(&self) -> impl Iterator<Item = &[Card]> {
        self.cards.chunks(self.column_count())
    }

    #[must_use]
    pub fn all_face_down(&self) -> bool {
        self.cards.iter().all(|c| !c.face_up)
    }

    #[must_use]
    pub fn layout_generation(&self) -> u64 {
        self.layout_generation
    }

    /// Fisher–Yates shuffle in place. Each step swaps position `i` with a
    /// position drawn uniformly from `0..=i`, the swap target included.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_index(i + 1);
            self.cards.swap(i, j);
        }
    }

    /// Reshuffle and signal renderers to rebuild.
    pub fn reset_layout(&mut self, rng: &mut GameRng) {
        self.shuffle(rng);
        self.layout_generation += 1;
    }

    pub fn flip_down_all(&mut self) {
        for card in self.cards.iter_mut().filter(|c| c.face_up) {
            card.toggle_flip();
        }
    }

    /// Register the one callback card selections are forwarded to.
    /// Replaces any earlier handler.
    pub fn set_click_handler(&mut self, handler: ClickHandler) {
        self.on_click = Some(handler);
    }

    /// Forward a card selection to the registered handler, if any.
    pub fn notify_click(&mut self, card: CardId) {
        if let Some(handler) = self.on_click.as_mut() {
            handler(card);
        }
    }
}
