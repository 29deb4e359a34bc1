use crate::{City, SortType, Transition, WeatherTag};

/// Which remote resource a fetch notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    Position,
    Catalog,
}

/// Semantic notifications for presentation layers.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SortChanged(SortType),
    /// Carries the text exactly as entered.
    SearchChanged(String),
    FilterChanged { tag: WeatherTag, active: bool },
    CardMoved { city: City, transition: Transition },
    FilterWeatherReset,
    SortReset,
    CatalogLoaded { count: usize },
    PositionLoaded { city: String },
    FetchFailed { target: FetchTarget, message: String },
    CardHovered(String),
    CardUnhovered(String),
    CardClicked(String),
    MarkerHovered(String),
    MarkerUnhovered(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Event)>;

/// Synchronous observer registry. Listeners run in registration order.
#[derive(Default)]
pub struct EventEmitter {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&Event) + 'static) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, event: &Event) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn dispatches_in_registration_order_until_unsubscribed() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut emitter = EventEmitter::new();

        let first_log = log.clone();
        let first = emitter.subscribe(move |_| first_log.borrow_mut().push("first"));
        let second_log = log.clone();
        emitter.subscribe(move |_| second_log.borrow_mut().push("second"));

        emitter.emit(&Event::SortReset);
        assert!(emitter.unsubscribe(first));
        assert!(!emitter.unsubscribe(first));
        emitter.emit(&Event::SortReset);

        assert_eq!(*log.borrow(), vec!["first", "second", "second"]);
        assert_eq!(emitter.listener_count(), 1);
    }
}
