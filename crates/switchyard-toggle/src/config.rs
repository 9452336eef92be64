use std::fmt;
use std::rc::Rc;

use switchyard_core::{StateChangeFn, StateReducer, ValueFn};

use crate::state::{ToggleChanges, ToggleOverrides, TogglePatch, ToggleSchema, ToggleState};
use crate::toggle::ToggleValue;

/// Construction-time options for a [`Toggle`](crate::Toggle). Every field is
/// optional; the defaults give an uncontrolled toggle that starts off and
/// reports to no one.
///
/// ```rust,ignore
/// let toggle = Toggle::new(
///     ToggleConfig::new()
///         .initial_on(true)
///         .on_toggle(|on| log::info!("now {on}")),
/// );
/// ```
#[derive(Clone, Default)]
pub struct ToggleConfig {
    /// Seed for internal storage; also what `reset` returns to.
    pub initial_on: bool,
    /// Controlled value for `on`. Can be changed later with `set_on`.
    pub on: Option<bool>,
    pub on_reset: Option<ValueFn<bool>>,
    pub on_state_change: Option<StateChangeFn<TogglePatch, ToggleValue>>,
    pub on_toggle: Option<ValueFn<bool>>,
    pub state_reducer: Option<StateReducer<ToggleSchema>>,
}

impl ToggleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A toggle whose `on` is owned by the caller from the start.
    pub fn controlled(on: bool) -> Self {
        Self::new().on(Some(on))
    }

    pub fn initial_on(mut self, on: bool) -> Self {
        self.initial_on = on;
        self
    }

    pub fn on(mut self, on: Option<bool>) -> Self {
        self.on = on;
        self
    }

    pub fn on_reset(mut self, f: impl Fn(bool) + 'static) -> Self {
        self.on_reset = Some(Rc::new(f));
        self
    }

    pub fn on_toggle(mut self, f: impl Fn(bool) + 'static) -> Self {
        self.on_toggle = Some(Rc::new(f));
        self
    }

    pub fn on_state_change(mut self, f: impl Fn(&ToggleChanges, &ToggleValue) + 'static) -> Self {
        self.on_state_change = Some(Rc::new(f));
        self
    }

    pub fn state_reducer(
        mut self,
        f: impl Fn(&ToggleState, ToggleChanges) -> ToggleChanges + 'static,
    ) -> Self {
        self.state_reducer = Some(Rc::new(f));
        self
    }

    pub(crate) fn initial_state(&self) -> ToggleState {
        ToggleState {
            on: self.initial_on,
        }
    }

    pub(crate) fn overrides(&self) -> ToggleOverrides {
        ToggleOverrides { on: self.on }
    }
}

impl fmt::Debug for ToggleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleConfig")
            .field("initial_on", &self.initial_on)
            .field("on", &self.on)
            .field("on_reset", &self.on_reset.is_some())
            .field("on_state_change", &self.on_state_change.is_some())
            .field("on_toggle", &self.on_toggle.is_some())
            .field("state_reducer", &self.state_reducer.is_some())
            .finish()
    }
}
