//! Subscribers to game events.

use std::cell::RefCell;
use std::rc::Rc;

use super::event::GameEvent;

/// Receives every event the game emits, in emission order.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Records events. Handy in tests and for replaying a session.
impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

/// Shared observers: the game holds one handle, the caller keeps another
/// to read what was observed.
impl<T: GameObserver + ?Sized> GameObserver for Rc<RefCell<T>> {
    fn on_event(&mut self, event: &GameEvent) {
        self.borrow_mut().on_event(event);
    }
}

/// Shared event recorder.
pub type EventLog = Rc<RefCell<Vec<GameEvent>>>;

/// Fresh, empty event log.
#[must_use]
pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}
