use std::cell::RefCell;
use std::rc::Rc;

use dragpanel_ui::DraggableListener;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerEvent {
    Maximized,
    Minimized,
    ClosedToLeft,
    ClosedToRight,
}

/// Listener that records notifications. Clones share the same log, so a test
/// can keep one handle after registering another with the panel.
#[derive(Clone, Debug, Default)]
pub struct RecordingListener {
    events: Rc<RefCell<Vec<ListenerEvent>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ListenerEvent> {
        self.events.borrow().clone()
    }

    pub fn count(&self, event: ListenerEvent) -> usize {
        self.events.borrow().iter().filter(|e| **e == event).count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, event: ListenerEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl DraggableListener for RecordingListener {
    fn on_maximized(&mut self) {
        self.record(ListenerEvent::Maximized);
    }

    fn on_minimized(&mut self) {
        self.record(ListenerEvent::Minimized);
    }

    fn on_closed_to_left(&mut self) {
        self.record(ListenerEvent::ClosedToLeft);
    }

    fn on_closed_to_right(&mut self) {
        self.record(ListenerEvent::ClosedToRight);
    }
}
