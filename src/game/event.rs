//! Contact events
//!
//! The collision resolver does not act on overlaps itself; it queues
//! contact events that the session controller consumes within the same
//! tick. Keeping detection and outcome separate keeps the scoring and
//! life-loss policy in one place.

use super::entity::Entity;

/// A queue for events of a single type, collected during the tick and
/// drained by the session controller.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue).
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events in send order.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Discard all events without processing.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for the per-tick event queues.
pub struct Events {
    /// Player overlapped an enemy, coin or goal
    pub contacts: EventQueue<ContactEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self {
            contacts: EventQueue::new(),
        }
    }

    /// Discard everything. Called at end of tick and on scene teardown.
    pub fn clear_all(&mut self) {
        self.contacts.clear();
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}

/// What the player ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Enemy,
    Coin,
    Goal,
}

/// One detected overlap between the player and another entity. Emitted
/// at most once per pair per tick.
#[derive(Debug, Clone, Copy)]
pub struct ContactEvent {
    /// The player
    pub subject: Entity,
    /// What it overlapped
    pub other: Entity,
    pub kind: ContactKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue_drains_in_order() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);
        assert_eq!(queue.len(), 3);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear_all() {
        let mut events = Events::new();
        events.contacts.send(ContactEvent {
            subject: Entity::default(),
            other: Entity::default(),
            kind: ContactKind::Coin,
        });

        events.clear_all();
        assert!(events.contacts.is_empty());
    }
}
