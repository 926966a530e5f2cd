//! Property tests for board sizing, shuffling, and the click guard.

use proptest::prelude::*;

use memory_match::board::{Board, MAX_COLUMNS, MIN_COLUMNS};
use memory_match::cards::Deck;
use memory_match::core::{GameConfig, GameRng, ManualClock};
use memory_match::game::{Game, GamePhase};

fn deck_of(pairs: usize) -> Deck {
    Deck::from_identities((0..pairs).map(|i| format!("sym-{i}"))).unwrap()
}

fn sorted_identities(board: &Board) -> Vec<String> {
    let mut ids: Vec<_> = board.cards().iter().map(|c| c.identity.clone()).collect();
    ids.sort();
    ids
}

/// One player action in a generated session.
#[derive(Clone, Debug)]
enum Step {
    Click(usize),
    Wait(u64),
    Reset,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => (0usize..16).prop_map(Step::Click),
        3 => (0u64..1_500).prop_map(Step::Wait),
        1 => Just(Step::Reset),
    ]
}

proptest! {
    #[test]
    fn board_holds_two_cards_per_entry(pairs in 1usize..64) {
        let board = Board::from_deck(&deck_of(pairs));
        prop_assert_eq!(board.len(), pairs * 2);

        let cols = board.column_count();
        prop_assert_eq!(cols % 2, 0);
        prop_assert!((MIN_COLUMNS..=MAX_COLUMNS).contains(&cols));
    }

    #[test]
    fn shuffle_is_a_permutation(pairs in 1usize..32, seed in any::<u64>()) {
        let mut board = Board::from_deck(&deck_of(pairs));
        let before = sorted_identities(&board);

        board.shuffle(&mut GameRng::new(seed));

        prop_assert_eq!(sorted_identities(&board), before);
    }

    #[test]
    fn session_invariants_hold(
        pairs in 1usize..8,
        seed in any::<u64>(),
        steps in prop::collection::vec(step(), 0..80),
    ) {
        let clock = ManualClock::new();
        let config = GameConfig::default().with_flip_delay(400.0).with_seed(seed);
        let mut game = Game::new(Board::from_deck(&deck_of(pairs)), &config, clock.clone());

        for step in steps {
            let moves_before = game.moves();
            let flipped_before = game.flipped().len();
            match step {
                Step::Click(position) => game.click_position(position),
                Step::Wait(ms) => {
                    clock.advance(ms);
                    game.poll();
                }
                Step::Reset => game.reset(),
            }

            prop_assert!(game.flipped().len() <= 2);
            if flipped_before == 2 && matches!(step, Step::Click(_)) {
                prop_assert_eq!(game.moves(), moves_before);
            }

            prop_assert_eq!(game.matched_count() % 2, 0);
            for card in game.board().cards() {
                if game.is_matched(card.id) || game.flipped().contains(&card.id) {
                    prop_assert!(card.face_up);
                } else {
                    prop_assert!(!card.face_up);
                }
            }

            let won = game.matched_count() == game.board().len();
            prop_assert_eq!(game.phase() == GamePhase::Won, won);
            prop_assert_eq!(game.timer_running(), !won);
            if let Some(summary) = game.summary() {
                prop_assert!(summary.score <= 10_000);
                prop_assert_eq!(summary.moves, game.moves());
            }
        }
    }
}
