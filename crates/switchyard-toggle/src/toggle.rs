use std::fmt;
use std::rc::{Rc, Weak};

use switchyard_core::resolver::field_named;
use switchyard_core::{
    Broadcast, ChangeType, Changes, ControlledStore, EventNotifier, FieldSet, Handler, Proposal,
    Reducer, Result, SubscriberId, ValueFn, emit,
};

use crate::config::ToggleConfig;
use crate::input::ClickEvent;
use crate::props::{PropOverrides, TogglerProps};
use crate::state::{ToggleOverrides, TogglePatch, ToggleSchema, ToggleState};

/// Options for [`Toggle::toggle_with`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleOptions {
    pub kind: ChangeType,
}

impl Default for ToggleOptions {
    fn default() -> Self {
        Self {
            kind: ChangeType::Toggle,
        }
    }
}

impl From<ChangeType> for ToggleOptions {
    fn from(kind: ChangeType) -> Self {
        Self { kind }
    }
}

/// A two-state control whose `on` field may be owned by the caller.
///
/// `Toggle` is a cheap handle; clones refer to the same instance. All
/// transitions run synchronously through one pipeline:
///
/// 1. the proposal is resolved against the merged state,
/// 2. the state reducer runs once,
/// 3. uncontrolled fields are committed,
/// 4. the new value object is published to subscribers (if it changed),
/// 5. `on_state_change` fires,
/// 6. `on_toggle` / `on_reset` fire.
#[derive(Clone)]
pub struct Toggle {
    inner: Rc<ToggleInner>,
}

struct ToggleInner {
    store: ControlledStore<ToggleSchema>,
    initial: ToggleState,
    notifier: EventNotifier<TogglePatch, ToggleValue>,
    on_toggle: Option<ValueFn<bool>>,
    on_reset: Option<ValueFn<bool>>,
    channel: Broadcast<ToggleValue>,
    api: ToggleApi,
}

impl Toggle {
    pub fn new(config: ToggleConfig) -> Self {
        let initial = config.initial_state();
        let overrides = config.overrides();
        let ToggleConfig {
            on_reset,
            on_state_change,
            on_toggle,
            state_reducer,
            ..
        } = config;

        let inner = Rc::new_cyclic(|weak: &Weak<ToggleInner>| {
            let api = ToggleApi {
                inner: weak.clone(),
            };
            let store = ControlledStore::<ToggleSchema>::new(
                initial,
                overrides,
                Reducer::from(state_reducer),
            );
            let channel = Broadcast::new(ToggleValue {
                state: store.state(),
                api: api.clone(),
            });
            ToggleInner {
                store,
                initial,
                notifier: EventNotifier::new(on_state_change),
                on_toggle,
                on_reset,
                channel,
                api,
            }
        });
        log::debug!(
            "toggle created: initial_on={} controlled={}",
            initial.on,
            overrides.on.is_some()
        );
        Self { inner }
    }

    /// Weak handle suitable for storing in callbacks and published values.
    pub fn api(&self) -> ToggleApi {
        self.inner.api.clone()
    }

    /// Merged state: overrides for controlled fields, internal values for
    /// the rest.
    pub fn state(&self) -> ToggleState {
        self.inner.store.state()
    }

    pub fn on(&self) -> bool {
        self.state().on
    }

    pub fn initial_state(&self) -> ToggleState {
        self.inner.initial
    }

    /// Raw internal storage, ignoring overrides.
    pub fn internal_state(&self) -> ToggleState {
        self.inner.store.internal_state()
    }

    pub fn overrides(&self) -> ToggleOverrides {
        self.inner.store.overrides()
    }

    pub fn is_controlled(&self, field: FieldSet) -> bool {
        self.inner.store.is_controlled(field)
    }

    pub fn is_controlled_named(&self, name: &str) -> Result<bool> {
        let descriptor = field_named::<ToggleSchema>(name)?;
        Ok(self.is_controlled(descriptor.field))
    }

    /// Supplies the controlled values for the next cycles. Subscribers are
    /// notified if the merged state changed.
    pub fn set_overrides(&self, overrides: ToggleOverrides) {
        if self.inner.store.set_overrides(overrides) {
            self.publish();
        } else {
            log::trace!("overrides replaced; merged state unchanged");
        }
    }

    pub fn set_on(&self, on: Option<bool>) {
        self.set_overrides(ToggleOverrides { on });
    }

    pub fn toggle(&self) {
        self.toggle_with(ToggleOptions::default());
    }

    pub fn toggle_with(&self, options: ToggleOptions) {
        let ToggleOptions { kind } = options;
        self.internal_set_state(
            Proposal::derive(move |merged: &ToggleState| {
                Changes::new(kind, TogglePatch::on(!merged.on))
            }),
            |state| emit(self.inner.on_toggle.as_ref(), state.on),
        );
    }

    pub fn reset(&self) {
        self.internal_set_state(
            Proposal::Literal(Changes::new(
                ChangeType::Reset,
                TogglePatch::from(self.inner.initial),
            )),
            |state| emit(self.inner.on_reset.as_ref(), state.on),
        );
    }

    /// Props for the element that toggles. The caller's `on_click` runs
    /// first, then the toggle.
    pub fn toggler_props(&self, overrides: PropOverrides) -> TogglerProps {
        let api = self.api();
        let toggle: Handler<ClickEvent> = Rc::new(move |_: &ClickEvent| api.toggle());
        TogglerProps::build(self.on(), overrides, toggle)
    }

    /// The value object published for the latest commit.
    pub fn value(&self) -> Rc<ToggleValue> {
        self.inner.channel.current()
    }

    /// Render-prop entry point: `f` sees the current state and helpers.
    pub fn render<R>(&self, f: impl FnOnce(&ToggleValue) -> R) -> R {
        f(&self.value())
    }

    /// Called with each newly published value. All subscribers of one
    /// commit receive the same `Rc`.
    pub fn subscribe(&self, f: impl Fn(&Rc<ToggleValue>) + 'static) -> SubscriberId {
        self.inner.channel.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.inner.channel.unsubscribe(id)
    }

    fn publish(&self) -> bool {
        self.inner.channel.publish(ToggleValue {
            state: self.state(),
            api: self.api(),
        })
    }

    fn internal_set_state(&self, proposal: Proposal<ToggleSchema>, done: impl FnOnce(ToggleState)) {
        let commit = self.inner.store.commit(proposal);
        self.publish();
        let helpers = self.value();
        self.inner.notifier.state_changed(&commit.changes, &helpers);
        done(self.inner.store.projected_state(&commit));
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new(ToggleConfig::default())
    }
}

impl fmt::Debug for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toggle")
            .field("state", &self.state())
            .field("initial", &self.inner.initial)
            .field("overrides", &self.overrides())
            .finish()
    }
}

/// Weak handle to a [`Toggle`]. Calls made after the toggle was dropped are
/// ignored.
#[derive(Clone)]
pub struct ToggleApi {
    inner: Weak<ToggleInner>,
}

impl ToggleApi {
    pub fn upgrade(&self) -> Option<Toggle> {
        self.inner.upgrade().map(|inner| Toggle { inner })
    }

    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn same_toggle(&self, other: &ToggleApi) -> bool {
        Weak::ptr_eq(&self.inner, &other.inner)
    }

    pub fn toggle(&self) {
        self.toggle_with(ToggleOptions::default());
    }

    pub fn toggle_with(&self, options: ToggleOptions) {
        match self.upgrade() {
            Some(t) => t.toggle_with(options),
            None => log::warn!("toggle on a dropped toggle; ignored"),
        }
    }

    pub fn reset(&self) {
        match self.upgrade() {
            Some(t) => t.reset(),
            None => log::warn!("reset on a dropped toggle; ignored"),
        }
    }

    pub fn toggler_props(&self, overrides: PropOverrides) -> Option<TogglerProps> {
        self.upgrade().map(|t| t.toggler_props(overrides))
    }
}

impl fmt::Debug for ToggleApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleApi")
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// Immutable state-and-helpers object: what subscribers, render props and
/// `on_state_change` receive.
#[derive(Clone)]
pub struct ToggleValue {
    pub state: ToggleState,
    api: ToggleApi,
}

impl ToggleValue {
    pub fn on(&self) -> bool {
        self.state.on
    }

    pub fn api(&self) -> &ToggleApi {
        &self.api
    }

    pub fn toggle(&self) {
        self.api.toggle();
    }

    pub fn toggle_with(&self, options: ToggleOptions) {
        self.api.toggle_with(options);
    }

    pub fn reset(&self) {
        self.api.reset();
    }

    /// Falls back to this snapshot's state, with only the caller's handler,
    /// once the toggle is gone.
    pub fn toggler_props(&self, overrides: PropOverrides) -> TogglerProps {
        match self.api.upgrade() {
            Some(t) => t.toggler_props(overrides),
            None => TogglerProps::build(self.state.on, overrides, Rc::new(|_: &ClickEvent| {})),
        }
    }
}

/// Values from the same toggle with the same state are equal.
impl PartialEq for ToggleValue {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.api.same_toggle(&other.api)
    }
}

impl fmt::Debug for ToggleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleValue")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
