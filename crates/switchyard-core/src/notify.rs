use std::rc::Rc;

use crate::changes::Changes;

/// `on_state_change(changes, helpers)`.
pub type StateChangeFn<P, H> = Rc<dyn Fn(&Changes<P>, &H)>;

/// Single-value lifecycle callback, e.g. `on_toggle(on)`.
pub type ValueFn<T> = Rc<dyn Fn(T)>;

/// Fires `on_state_change` once per commit, whether or not anything was
/// written to internal storage.
pub struct EventNotifier<P: 'static, H: 'static> {
    on_state_change: Option<StateChangeFn<P, H>>,
}

impl<P: 'static, H: 'static> EventNotifier<P, H> {
    pub fn new(on_state_change: Option<StateChangeFn<P, H>>) -> Self {
        Self { on_state_change }
    }

    pub fn state_changed(&self, changes: &Changes<P>, helpers: &H) {
        if let Some(f) = &self.on_state_change {
            f(changes, helpers);
        }
    }
}

impl<P: 'static, H: 'static> Default for EventNotifier<P, H> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<P: 'static, H: 'static> Clone for EventNotifier<P, H> {
    fn clone(&self) -> Self {
        Self::new(self.on_state_change.clone())
    }
}

/// Invokes an optional value callback.
pub fn emit<T>(callback: Option<&ValueFn<T>>, value: T) {
    if let Some(f) = callback {
        f(value);
    }
}
