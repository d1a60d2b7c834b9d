//! Change notification.
//!
//! A progression owns its listeners and calls them synchronously, in
//! subscription order, on the stack of the mutating call.

use core::fmt;

/// Observable properties of a progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// First attainable value.
    FromValue,
    /// Last attainable value.
    ToValue,
    /// Step size.
    Increment,
    /// Whether the progression is active during a test.
    Selected,
}

impl Property {
    /// All observable properties, in the order `end_edit` reports them.
    pub const ALL: [Property; 4] = [
        Property::FromValue,
        Property::ToValue,
        Property::Increment,
        Property::Selected,
    ];

    /// Property name as used by bindings and attribute sets.
    pub const fn name(self) -> &'static str {
        match self {
            Property::FromValue => "FromValue",
            Property::ToValue => "ToValue",
            Property::Increment => "Increment",
            Property::Selected => "Selected",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(Property)>;

/// Ordered collection of change listeners.
#[derive(Default)]
pub struct ChangeListeners {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl ChangeListeners {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It is called after every registered before it.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(Property) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the id is unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Deliver one notification to every listener.
    pub fn notify(&mut self, property: Property) {
        tracing::trace!(property = property.name(), listeners = self.listeners.len(), "property changed");
        for (_, listener) in self.listeners.iter_mut() {
            listener(property);
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("len", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_delivery_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = ChangeListeners::new();

        let first = Rc::clone(&log);
        listeners.subscribe(move |p| first.borrow_mut().push((1, p)));
        let second = Rc::clone(&log);
        listeners.subscribe(move |p| second.borrow_mut().push((2, p)));

        assert_eq!(listeners.len(), 2);
        listeners.notify(Property::ToValue);

        assert_eq!(
            *log.borrow(),
            vec![(1, Property::ToValue), (2, Property::ToValue)]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut listeners = ChangeListeners::new();

        let counter = Rc::clone(&count);
        let id = listeners.subscribe(move |_| *counter.borrow_mut() += 1);

        listeners.notify(Property::Selected);
        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.notify(Property::Selected);

        assert_eq!(*count.borrow(), 1);
        assert!(listeners.is_empty());
    }
}
