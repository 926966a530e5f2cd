//! Composition root.
//!
//! Builds the board from a deck, starts the game on a clock, and wires the
//! text `Hud` in as a subscriber. Tests and the CLI both start here.
//!
//! ```
//! use memory_match::cards::Deck;
//! use memory_match::core::{GameConfig, ManualClock};
//! use memory_match::session::Session;
//!
//! let session = Session::start(&Deck::languages(), &GameConfig::default(), ManualClock::new());
//! assert_eq!(session.game().board().len(), 12);
//! assert_eq!(session.hud().layout_generation, 1);
//! ```

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::board::Board;
use crate::cards::Deck;
use crate::core::{Clock, GameConfig};
use crate::game::{Game, GameObserver};
use crate::render::{draw_board, Hud};

/// A game plus the display state its events feed.
pub struct Session<C: Clock> {
    game: Game<C>,
    hud: Rc<RefCell<Hud>>,
}

impl<C: Clock> Session<C> {
    /// Start a session with only the `Hud` subscribed.
    pub fn start(deck: &Deck, config: &GameConfig, clock: C) -> Self {
        Self::start_with(deck, config, clock, Vec::new())
    }

    /// Start a session with extra subscribers after the `Hud`.
    pub fn start_with(
        deck: &Deck,
        config: &GameConfig,
        clock: C,
        extra: Vec<Box<dyn GameObserver>>,
    ) -> Self {
        let hud = Rc::new(RefCell::new(Hud::new()));
        let mut observers: Vec<Box<dyn GameObserver>> = vec![Box::new(Rc::clone(&hud))];
        observers.extend(extra);

        let game = Game::with_observers(Board::from_deck(deck), config, clock, observers);
        Self { game, hud }
    }

    #[must_use]
    pub fn game(&self) -> &Game<C> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<C> {
        &mut self.game
    }

    #[must_use]
    pub fn hud(&self) -> Ref<'_, Hud> {
        self.hud.borrow()
    }

    /// Warnings and other notices not yet shown.
    pub fn take_notices(&mut self) -> Vec<String> {
        self.hud.borrow_mut().drain_notices()
    }

    /// Board grid followed by the status line and, once won, the banner.
    #[must_use]
    pub fn render(&self) -> String {
        let hud = self.hud.borrow();
        let mut out = draw_board(self.game.board());
        out.push_str(&hud.status_line());
        out.push('\n');
        if let Some(banner) = hud.win_banner() {
            out.push_str(&banner);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;
    use crate::game::event_log;

    #[test]
    fn test_hud_sees_construction_warning() {
        let config = GameConfig::default().with_flip_delay(100.0);
        let mut session = Session::start(&Deck::languages(), &config, ManualClock::new());

        let notices = session.take_notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].contains("got 100"));
        assert_eq!(session.game().flip_delay().as_millis(), 350);
    }

    #[test]
    fn test_extra_observers_are_wired() {
        let log = event_log();
        let session = Session::start_with(
            &Deck::languages(),
            &GameConfig::default(),
            ManualClock::new(),
            vec![Box::new(Rc::clone(&log))],
        );
        drop(session);
        assert!(!log.borrow().is_empty());
    }

    #[test]
    fn test_render_includes_status() {
        let mut session = Session::start(
            &Deck::from_identities(["A", "B"]).unwrap(),
            &GameConfig::default(),
            ManualClock::new(),
        );
        session.game_mut().click_position(0);

        let rendered = session.render();
        assert!(rendered.ends_with("Moves: 1   Time: 0s\n"));
        assert_eq!(rendered.lines().count(), 3);
    }
}
