use crate::core::event::Action;
use crate::terminal::KeyEvent;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Key(KeyEvent),
    Action(Action),
    Submitted,
}

pub struct EventQueue {
    queue: VecDeque<AppEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn emit(&mut self, event: AppEvent) {
        self.queue.push_back(event);
    }

    pub fn next(&mut self) -> Option<AppEvent> {
        self.queue.pop_front()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{AppEvent, EventQueue};
    use crate::core::event::Action;

    #[test]
    fn drains_in_fifo_order() {
        let mut queue = EventQueue::new();
        queue.emit(AppEvent::Action(Action::NextInput));
        queue.emit(AppEvent::Submitted);

        assert!(matches!(
            queue.next(),
            Some(AppEvent::Action(Action::NextInput))
        ));
        assert!(matches!(queue.next(), Some(AppEvent::Submitted)));
        assert!(queue.next().is_none());
    }
}
