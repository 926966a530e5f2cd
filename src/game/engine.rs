//! The memory game state machine.
//!
//! ## Turn flow
//!
//! ```text
//! Idle --click--> Idle (1 up) --click--> AwaitingSecondFlip
//!   ^                                          |
//!   |                                 flip delay elapses
//!   |                                          v
//!   +------ match (more left) / mismatch --- Resolving --- last match ---> Won
//! ```
//!
//! Clicks arrive through [`Board::notify_click`] and are queued until the
//! game drains them. Deferred work (the flip delay and the one-second
//! display tick) lives in a [`Scheduler`] that [`Game::poll`] drives from
//! the injected [`Clock`]. Nothing here sleeps or spawns.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, trace, warn};

use crate::board::Board;
use crate::cards::CardId;
use crate::core::{
    Clock, ConfigWarning, FlipDelay, GameConfig, GameRng, Millis, ScheduledTask, Scheduler, Task,
    TaskId,
};

use super::event::{GameEvent, GameSummary};
use super::observer::GameObserver;
use super::score::score;
use super::snapshot::{CardView, GameSnapshot};

/// Where the game is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Zero or one card face-up this turn.
    Idle,
    /// Two cards face-up, waiting for the flip delay.
    AwaitingSecondFlip,
    /// Comparing the two face-up cards.
    Resolving,
    /// Every card matched.
    Won,
}

type ClickInbox = Rc<RefCell<VecDeque<CardId>>>;

/// A memory game session over one board.
///
/// ```
/// use memory_match::board::Board;
/// use memory_match::cards::Deck;
/// use memory_match::core::{GameConfig, ManualClock};
/// use memory_match::game::{Game, GamePhase};
///
/// let deck = Deck::from_identities(["A", "B"]).unwrap();
/// let clock = ManualClock::new();
/// let mut game = Game::new(Board::from_deck(&deck), &GameConfig::default(), clock.clone());
///
/// let first = game.board().cards()[0].id;
/// game.click(first);
/// assert_eq!(game.moves(), 1);
/// assert_eq!(game.phase(), GamePhase::Idle);
/// ```
pub struct Game<C: Clock> {
    board: Board,
    rng: GameRng,
    clock: C,
    scheduler: Scheduler,
    flip_delay: FlipDelay,
    tick_interval: Millis,
    config_warning: Option<ConfigWarning>,

    phase: GamePhase,
    flipped: SmallVec<[CardId; 2]>,
    matched: FxHashSet<CardId>,
    moves: u32,
    started_at: Millis,
    tick_task: Option<TaskId>,
    resolve_task: Option<TaskId>,
    summary: Option<GameSummary>,

    inbox: ClickInbox,
    observers: Vec<Box<dyn GameObserver>>,
}

impl<C: Clock> Game<C> {
    /// Start a game with no observers.
    pub fn new(board: Board, config: &GameConfig, clock: C) -> Self {
        Self::with_observers(board, config, clock, Vec::new())
    }

    /// Start a game: validate the flip delay, take over the board's click
    /// handler, shuffle, and start the timer.
    ///
    /// Observers see every event from construction on, including any
    /// config warning.
    pub fn with_observers(
        mut board: Board,
        config: &GameConfig,
        clock: C,
        observers: Vec<Box<dyn GameObserver>>,
    ) -> Self {
        let (flip_delay, config_warning) = FlipDelay::resolve(&config.flip_delay_ms);

        let inbox: ClickInbox = Rc::new(RefCell::new(VecDeque::new()));
        let sink = Rc::clone(&inbox);
        board.set_click_handler(Box::new(move |card| sink.borrow_mut().push_back(card)));

        let mut game = Self {
            board,
            rng: GameRng::new(config.seed),
            clock,
            scheduler: Scheduler::new(),
            flip_delay,
            tick_interval: config.tick_interval_ms.max(1),
            config_warning: config_warning.clone(),
            phase: GamePhase::Idle,
            flipped: SmallVec::new(),
            matched: FxHashSet::default(),
            moves: 0,
            started_at: 0,
            tick_task: None,
            resolve_task: None,
            summary: None,
            inbox,
            observers,
        };

        if let Some(warning) = config_warning {
            warn!(%warning, "flip delay corrected");
            game.emit(GameEvent::ConfigWarning(warning));
        }

        game.board.reset_layout(&mut game.rng);
        game.emit_layout();
        game.start_timer();
        debug!(
            cards = game.board.len(),
            flip_delay = %game.flip_delay,
            seed = config.seed,
            "game started"
        );
        game
    }

    /// Subscribe another observer.
    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board access for the presentation layer, which routes user
    /// activations through [`Board::notify_click`].
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Face-up cards of the current turn, in click order.
    #[must_use]
    pub fn flipped(&self) -> &[CardId] {
        &self.flipped
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    #[must_use]
    pub fn is_matched(&self, card: CardId) -> bool {
        self.matched.contains(&card)
    }

    #[must_use]
    pub fn flip_delay(&self) -> FlipDelay {
        self.flip_delay
    }

    /// Warning raised when the configured flip delay was corrected.
    #[must_use]
    pub fn config_warning(&self) -> Option<&ConfigWarning> {
        self.config_warning.as_ref()
    }

    /// Result of the round, once won.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        self.summary
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Whole seconds since the timer started, frozen once won.
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        match self.summary {
            Some(summary) => summary.elapsed_secs,
            None => self.clock.now().saturating_sub(self.started_at) / 1000,
        }
    }

    /// Current time on the game's clock.
    #[must_use]
    pub fn now(&self) -> Millis {
        self.clock.now()
    }

    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.tick_task.is_some()
    }

    /// When the pending pair comparison fires, if one is pending.
    #[must_use]
    pub fn resolution_due(&self) -> Option<Millis> {
        self.resolve_task?;
        self.scheduler.next_due_of(Task::ResolveFlip)
    }

    /// Live scheduled tasks of one kind.
    #[must_use]
    pub fn pending_tasks(&self, kind: Task) -> usize {
        self.scheduler.pending_of(kind)
    }

    // === Input ===

    /// Route a card selection through the board and process it.
    pub fn click(&mut self, card: CardId) {
        self.board.notify_click(card);
        self.drain_clicks();
    }

    /// Select the card at a layout position. Out-of-range positions are
    /// ignored.
    pub fn click_position(&mut self, position: usize) {
        if let Some(id) = self.board.card_at(position).map(|c| c.id) {
            self.click(id);
        }
    }

    /// Process selections queued on the board's click handler.
    pub fn drain_clicks(&mut self) {
        loop {
            let next = self.inbox.borrow_mut().pop_front();
            match next {
                Some(card) => self.handle_card_click(card),
                None => break,
            }
        }
    }

    fn handle_card_click(&mut self, id: CardId) {
        if self.flipped.len() >= 2 {
            trace!(card = %id, "click ignored: pair awaiting resolution");
            return;
        }
        let Some(card) = self.board.card_mut(id) else {
            trace!(card = %id, "click ignored: unknown card");
            return;
        };
        if card.face_up {
            trace!(card = %id, "click ignored: already face-up");
            return;
        }

        card.flip();
        self.flipped.push(id);
        self.moves += 1;
        debug!(card = %id, moves = self.moves, "card flipped");
        self.emit(GameEvent::CardFlipped { card: id });
        self.emit(GameEvent::MovesChanged { moves: self.moves });

        if self.flipped.len() == 2 {
            let due = self.clock.now() + self.flip_delay.as_millis();
            self.resolve_task = Some(self.scheduler.schedule(due, Task::ResolveFlip));
            self.phase = GamePhase::AwaitingSecondFlip;
        }
    }

    // === Time ===

    /// Fire every scheduled task that is due. Returns how many fired.
    ///
    /// The clock is read once, so every task fired by one call sees the
    /// same instant.
    pub fn poll(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some(task) = self.scheduler.pop_due(now) {
            fired += 1;
            self.run_task(task, now);
        }
        fired
    }

    fn run_task(&mut self, scheduled: ScheduledTask, now: Millis) {
        match scheduled.task {
            Task::Tick => {
                let elapsed_secs = scheduled.due.saturating_sub(self.started_at) / 1000;
                self.tick_task = Some(
                    self.scheduler
                        .schedule(scheduled.due + self.tick_interval, Task::Tick),
                );
                self.emit(GameEvent::TimerTick { elapsed_secs });
            }
            Task::ResolveFlip => {
                self.resolve_task = None;
                self.resolve_flip(now);
            }
        }
    }

    fn resolve_flip(&mut self, now: Millis) {
        let (first, second) = match self.flipped.as_slice() {
            &[first, second] => (first, second),
            _ => return,
        };
        self.phase = GamePhase::Resolving;

        let is_match = match (self.board.card(first), self.board.card(second)) {
            (Some(a), Some(b)) => a.matches(b),
            _ => false,
        };
        self.flipped.clear();

        if is_match {
            self.matched.insert(first);
            self.matched.insert(second);
            debug!(%first, %second, matched = self.matched.len(), "pair matched");
            self.emit(GameEvent::PairMatched { first, second });

            if self.matched.len() == self.board.len() {
                self.finish(now);
                return;
            }
        } else {
            for id in [first, second] {
                if let Some(card) = self.board.card_mut(id) {
                    card.unflip();
                }
            }
            debug!(%first, %second, "pair mismatched");
            self.emit(GameEvent::CardsHidden { first, second });
        }
        self.phase = GamePhase::Idle;
    }

    fn finish(&mut self, now: Millis) {
        self.stop_timer();
        let elapsed_ms = now.saturating_sub(self.started_at);
        let summary = GameSummary {
            score: score(self.moves, elapsed_ms),
            moves: self.moves,
            elapsed_secs: elapsed_ms / 1000,
        };
        self.summary = Some(summary);
        self.phase = GamePhase::Won;
        info!(
            score = summary.score,
            moves = summary.moves,
            elapsed_secs = summary.elapsed_secs,
            "game won"
        );
        self.emit(GameEvent::Won(summary));
    }

    fn start_timer(&mut self) {
        self.started_at = self.clock.now();
        let due = self.started_at + self.tick_interval;
        self.tick_task = Some(self.scheduler.schedule(due, Task::Tick));
    }

    fn stop_timer(&mut self) {
        if let Some(id) = self.tick_task.take() {
            self.scheduler.cancel(id);
        }
    }

    // === Reset ===

    /// Start a new round over the same cards.
    ///
    /// Clears matched, flipped, and move state, drops any pending pair
    /// comparison, turns every card face-down, reshuffles, and restarts
    /// the timer.
    pub fn reset(&mut self) {
        if let Some(id) = self.resolve_task.take() {
            self.scheduler.cancel(id);
        }
        self.stop_timer();
        self.inbox.borrow_mut().clear();

        self.matched.clear();
        self.flipped.clear();
        self.moves = 0;
        self.summary = None;
        self.phase = GamePhase::Idle;

        self.board.flip_down_all();
        self.board.reset_layout(&mut self.rng);
        self.start_timer();

        info!(generation = self.board.layout_generation(), "game reset");
        self.emit(GameEvent::Reset);
        self.emit(GameEvent::MovesChanged { moves: 0 });
        self.emit_layout();
    }

    // === Views ===

    /// Serializable view of the session. Face-down identities are hidden.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            moves: self.moves,
            matched: self.matched.len(),
            flipped: self.flipped.to_vec(),
            elapsed_secs: self.elapsed_secs(),
            columns: self.board.column_count(),
            cards: self
                .board
                .cards()
                .iter()
                .map(|card| CardView::of(card, self.matched.contains(&card.id)))
                .collect(),
            summary: self.summary,
        }
    }

    fn emit_layout(&mut self) {
        self.emit(GameEvent::BoardLaidOut {
            columns: self.board.column_count(),
            generation: self.board.layout_generation(),
        });
    }

    fn emit(&mut self, event: GameEvent) {
        trace!(event = event.name(), "emit");
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

impl<C: Clock> std::fmt::Debug for Game<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("moves", &self.moves)
            .field("flipped", &self.flipped)
            .field("matched", &self.matched.len())
            .field("flip_delay", &self.flip_delay)
            .field("board", &self.board)
            .finish_non_exhaustive()
    }
}
