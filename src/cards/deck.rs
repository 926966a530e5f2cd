//! Deck source: the distinct `(identity, artwork)` entries a board is
//! dealt from.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use crate::core::DeckError;

/// One symbol of the deck. Dealt as two cards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckEntry {
    pub identity: String,
    pub artwork: String,
}

impl DeckEntry {
    pub fn new(identity: impl Into<String>, artwork: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            artwork: artwork.into(),
        }
    }
}

/// A validated list of distinct deck entries.
///
/// ```
/// use memory_match::cards::{Deck, DeckEntry};
///
/// let deck = Deck::new(vec![DeckEntry::new("A", "a.svg"), DeckEntry::new("B", "b.svg")]).unwrap();
/// let cards = deck.deal();
/// assert_eq!(cards.len(), 4);
/// assert!(cards[0].matches(&cards[1]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Deck {
    entries: Vec<DeckEntry>,
}

impl Deck {
    /// Largest number of entries whose dealt cards still fit `CardId`.
    pub const MAX_ENTRIES: usize = (u16::MAX / 2) as usize;

    /// Validate entries: non-empty, no repeated identity.
    pub fn new(entries: Vec<DeckEntry>) -> Result<Self, DeckError> {
        if entries.is_empty() {
            return Err(DeckError::Empty);
        }
        if entries.len() > Self::MAX_ENTRIES {
            return Err(DeckError::TooLarge(entries.len()));
        }
        let mut seen = FxHashSet::default();
        for entry in &entries {
            if !seen.insert(entry.identity.as_str()) {
                return Err(DeckError::DuplicateIdentity(entry.identity.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Deck built from bare identities, using each identity as its artwork.
    pub fn from_identities<I, S>(identities: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            identities
                .into_iter()
                .map(|s| {
                    let identity = s.into();
                    DeckEntry::new(identity.clone(), identity)
                })
                .collect(),
        )
    }

    /// The six-language deck the classroom board ships with.
    #[must_use]
    pub fn languages() -> Self {
        let entries = [
            ("Python", "./img/Python.svg"),
            ("JavaScript", "./img/JS.svg"),
            ("Java", "./img/Java.svg"),
            ("CSharp", "./img/CSharp.svg"),
            ("Go", "./img/Go.svg"),
            ("Ruby", "./img/Ruby.svg"),
        ]
        .into_iter()
        .map(|(identity, artwork)| DeckEntry::new(identity, artwork))
        .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.entries.len()
    }

    /// Two face-down cards per entry, in deck order, with sequential ids.
    #[must_use]
    pub fn deal(&self) -> Vec<Card> {
        self.entries
            .iter()
            .flat_map(|entry| [entry, entry])
            .enumerate()
            .map(|(i, entry)| {
                // MAX_ENTRIES keeps i within u16
                Card::new(CardId::new(i as u16), entry.identity.clone(), entry.artwork.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_doubles_entries() {
        let deck = Deck::from_identities(["A", "B", "C"]).unwrap();
        let cards = deck.deal();

        assert_eq!(cards.len(), 6);
        for pair in cards.chunks(2) {
            assert!(pair[0].matches(&pair[1]));
            assert_ne!(pair[0].id, pair[1].id);
        }
        assert!(cards.iter().all(|c| !c.face_up));
    }

    #[test]
    fn test_ids_are_unique() {
        let cards = Deck::languages().deal();
        let ids: FxHashSet<_> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert_eq!(Deck::new(Vec::new()), Err(DeckError::Empty));
    }

    #[test]
    fn test_duplicate_identity_rejected() {
        let result = Deck::new(vec![
            DeckEntry::new("Go", "a.svg"),
            DeckEntry::new("Rust", "b.svg"),
            DeckEntry::new("Go", "c.svg"),
        ]);
        assert_eq!(result, Err(DeckError::DuplicateIdentity("Go".to_string())));
    }

    #[test]
    fn test_languages_deck() {
        let deck = Deck::languages();
        assert_eq!(deck.pair_count(), 6);
        assert_eq!(deck.entries()[1].identity, "JavaScript");
        assert_eq!(deck.entries()[1].artwork, "./img/JS.svg");
        assert_eq!(deck.deal().len(), 12);
    }
}
