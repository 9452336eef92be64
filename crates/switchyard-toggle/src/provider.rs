use std::rc::Rc;

use switchyard_core::provider::{consume, provide};
use switchyard_core::{Result, SubscriberId};

use crate::config::ToggleConfig;
use crate::toggle::{Toggle, ToggleValue};

/// Hands one toggle's published value to code that has no direct reference
/// to the toggle: subscribers, and anything run inside [`provide`](Self::provide).
///
/// Each commit that changes the merged state publishes exactly one
/// `Rc<ToggleValue>`; every subscriber and every `use_toggle` caller for that
/// commit sees the same reference. Commits that leave the merged state as it
/// was (e.g. a controlled-only toggle) publish nothing.
#[derive(Clone, Debug)]
pub struct ToggleProvider {
    toggle: Toggle,
}

impl ToggleProvider {
    pub fn new(config: ToggleConfig) -> Self {
        Self {
            toggle: Toggle::new(config),
        }
    }

    pub fn toggle(&self) -> &Toggle {
        &self.toggle
    }

    pub fn value(&self) -> Rc<ToggleValue> {
        self.toggle.value()
    }

    pub fn subscribe(&self, f: impl Fn(&Rc<ToggleValue>) + 'static) -> SubscriberId {
        self.toggle.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.toggle.unsubscribe(id)
    }

    /// Runs `f` with this toggle reachable through [`use_toggle`].
    pub fn provide<R>(&self, f: impl FnOnce() -> R) -> R {
        provide(Rc::new(self.toggle.clone()), f)
    }
}

impl From<Toggle> for ToggleProvider {
    fn from(toggle: Toggle) -> Self {
        Self { toggle }
    }
}

/// The innermost provided toggle's current value.
///
/// Fails with `Error::MissingProvider` outside every `ToggleProvider::provide`.
pub fn use_toggle() -> Result<Rc<ToggleValue>> {
    Ok(consume::<Toggle>()?.value())
}

/// The innermost provided toggle itself.
pub fn use_toggle_handle() -> Result<Toggle> {
    Ok(consume::<Toggle>()?.as_ref().clone())
}
