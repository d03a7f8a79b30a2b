//! Listener registration for model-change notification.
//!
//! Controllers keep a `ListenerRegistry` of boxed callbacks and hand out a
//! `ListenerHandle` per registration so callers can unsubscribe later.

use std::fmt;
use uuid::Uuid;

use crate::model::{Design, Furniture, Room};

/// Handle for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(Uuid);

impl ListenerHandle {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({})", &self.0.to_string()[..8])
    }
}

/// Callback receiving the current design and the selected furniture.
pub type DesignChangedFn = dyn Fn(Option<&Design>, Option<&Furniture>);

/// Callback receiving the updated room.
pub type RoomChangedFn = dyn Fn(&Room);

/// Callback for catalog changes.
pub type CatalogChangedFn = dyn Fn();

/// Ordered set of listeners of one callback type.
pub struct ListenerRegistry<F: ?Sized> {
    entries: Vec<(ListenerHandle, Box<F>)>,
}

impl<F: ?Sized> ListenerRegistry<F> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a listener. Listeners are notified in registration order.
    pub fn add(&mut self, listener: Box<F>) -> ListenerHandle {
        let handle = ListenerHandle::new();
        self.entries.push((handle, listener));
        handle
    }

    /// Unregister a listener. Returns false if the handle was unknown.
    pub fn remove(&mut self, handle: ListenerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(h, _)| *h != handle);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invoke `call` once per listener.
    pub fn notify(&self, mut call: impl FnMut(&F)) {
        for (_, listener) in &self.entries {
            call(listener);
        }
    }
}

impl<F: ?Sized> Default for ListenerRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ?Sized> fmt::Debug for ListenerRegistry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.entries.len())
            .finish()
    }
}
