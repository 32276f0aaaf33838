use super::AsyncResource;
use asynczone_core::{AsyncId, ResourceKind};
use std::cell::RefCell;
use std::fmt::{Debug, Formatter, Result};

type Listener<T> = Box<dyn FnMut(&T)>;

/// Delivers events to listeners in the zone the emitter was created in.
///
/// Models a request or socket object: its events arrive later, from
/// whatever code feeds it, yet listeners see the zone of the code that
/// opened it. Listeners must not register further listeners while an event
/// is being delivered.
pub struct EventEmitter<T> {
    resource: AsyncResource,
    listeners: RefCell<Vec<Listener<T>>>,
}

impl<T> EventEmitter<T> {
    pub fn new() -> Self {
        Self {
            resource: AsyncResource::new(ResourceKind::Other("EventEmitter".to_string())),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn async_id(&self) -> AsyncId {
        self.resource.async_id()
    }

    pub fn on(&self, listener: impl FnMut(&T) + 'static) -> &Self {
        self.listeners.borrow_mut().push(Box::new(listener));
        self
    }

    /// Deliver `event` to every listener. Returns how many were called.
    pub fn emit(&self, event: &T) -> usize {
        self.resource.run_in_scope(|| {
            let mut listeners = self.listeners.borrow_mut();
            for listener in listeners.iter_mut() {
                listener(event);
            }
            listeners.len()
        })
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for EventEmitter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("EventEmitter")
            .field("resource", &self.resource)
            .field("listeners", &self.listener_count())
            .finish()
    }
}
