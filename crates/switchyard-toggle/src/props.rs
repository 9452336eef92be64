use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use switchyard_core::{Handler, call_all};

use crate::input::ClickEvent;
use crate::semantics::{Role, Semantics};

/// Opaque prop value. Never interpreted by the toggle itself.
pub type PropValue = serde_json::Value;

pub const ARIA_PRESSED: &str = "aria-pressed";
pub const ARIA_LABEL: &str = "aria-label";
pub const ROLE: &str = "role";

/// Caller-supplied props for `toggler_props`.
///
/// Typed fields win over what the toggle computes, except `on_click`, which
/// is combined with the toggle's own handler rather than replacing it.
#[derive(Clone, Default)]
pub struct PropOverrides {
    pub on_click: Option<Handler<ClickEvent>>,
    pub aria_pressed: Option<bool>,
    pub extra: BTreeMap<String, PropValue>,
}

impl PropOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_click(mut self, f: impl Fn(&ClickEvent) + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }

    pub fn aria_pressed(mut self, pressed: bool) -> Self {
        self.aria_pressed = Some(pressed);
        self
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl fmt::Debug for PropOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropOverrides")
            .field("on_click", &self.on_click.is_some())
            .field("aria_pressed", &self.aria_pressed)
            .field("extra", &self.extra)
            .finish()
    }
}

/// Prop bag for whatever renders the toggler.
#[derive(Clone)]
pub struct TogglerProps {
    pub on_click: Handler<ClickEvent>,
    pub aria_pressed: bool,
    pub extra: BTreeMap<String, PropValue>,
}

impl TogglerProps {
    /// `toggle` runs after the caller's `on_click`, if any.
    ///
    /// `aria-pressed` is never kept as an opaque prop: a boolean passed
    /// through `extra` counts as the caller's pressed value unless the typed
    /// field is also set. Non-boolean values are discarded.
    pub(crate) fn build(on: bool, overrides: PropOverrides, toggle: Handler<ClickEvent>) -> Self {
        let PropOverrides {
            on_click,
            aria_pressed,
            mut extra,
        } = overrides;
        let loose = match extra.remove(ARIA_PRESSED) {
            Some(PropValue::Bool(pressed)) => Some(pressed),
            Some(other) => {
                log::warn!("ignoring non-boolean {ARIA_PRESSED} prop: {other}");
                None
            }
            None => None,
        };
        Self {
            on_click: call_all([on_click, Some(toggle)]),
            aria_pressed: aria_pressed.or(loose).unwrap_or(on),
            extra,
        }
    }

    pub fn click(&self, event: &ClickEvent) {
        (self.on_click)(event)
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.extra.get(key)
    }

    pub fn semantics(&self) -> Semantics {
        let role = match self.get(ROLE).and_then(PropValue::as_str) {
            Some("button") => Role::Button,
            Some("checkbox") => Role::Checkbox,
            _ => Role::Switch,
        };
        Semantics {
            label: self
                .get(ARIA_LABEL)
                .and_then(PropValue::as_str)
                .map(str::to_string),
            pressed: Some(self.aria_pressed),
            ..Semantics::new(role)
        }
    }

    /// Serialisable props, handlers omitted.
    pub fn to_json(&self) -> PropValue {
        let mut map = serde_json::Map::new();
        map.insert(ARIA_PRESSED.to_string(), PropValue::Bool(self.aria_pressed));
        for (k, v) in &self.extra {
            map.insert(k.clone(), v.clone());
        }
        PropValue::Object(map)
    }
}

impl fmt::Debug for TogglerProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TogglerProps")
            .field("aria_pressed", &self.aria_pressed)
            .field("extra", &self.extra)
            .finish_non_exhaustive()
    }
}
