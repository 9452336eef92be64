use std::rc::Rc;

use smallvec::SmallVec;

/// Event handler; return values are not observed.
pub type Handler<E> = Rc<dyn Fn(&E)>;

/// Ordered list of handlers invoked as one.
///
/// Lets a caller observe an event without replacing the built-in reaction
/// to it. Absent handlers are skipped.
pub struct Multiplexer<E: 'static> {
    handlers: SmallVec<[Handler<E>; 2]>,
}

impl<E: 'static> Multiplexer<E> {
    pub fn new() -> Self {
        Self {
            handlers: SmallVec::new(),
        }
    }

    pub fn with(mut self, handler: Option<Handler<E>>) -> Self {
        self.push(handler);
        self
    }

    pub fn push(&mut self, handler: Option<Handler<E>>) {
        if let Some(h) = handler {
            self.handlers.push(h);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn call(&self, event: &E) {
        for h in &self.handlers {
            h(event);
        }
    }

    pub fn into_handler(self) -> Handler<E> {
        Rc::new(move |event: &E| self.call(event))
    }
}

impl<E: 'static> Default for Multiplexer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> Clone for Multiplexer<E> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<E: 'static> FromIterator<Option<Handler<E>>> for Multiplexer<E> {
    fn from_iter<I: IntoIterator<Item = Option<Handler<E>>>>(iter: I) -> Self {
        let mut m = Self::new();
        for h in iter {
            m.push(h);
        }
        m
    }
}

/// Composes `handlers` into one, calling each present handler in order with
/// the same event.
pub fn call_all<E: 'static>(handlers: impl IntoIterator<Item = Option<Handler<E>>>) -> Handler<E> {
    handlers.into_iter().collect::<Multiplexer<E>>().into_handler()
}
