use serde::{Deserialize, Serialize};
use switchyard_core::{Changes, FieldDescriptor, FieldKind, FieldSet, Schema};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToggleState {
    pub on: bool,
}

/// Partial toggle state; `None` leaves the field as it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TogglePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
}

impl TogglePatch {
    pub fn on(on: bool) -> Self {
        Self { on: Some(on) }
    }
}

impl From<ToggleState> for TogglePatch {
    fn from(state: ToggleState) -> Self {
        Self { on: Some(state.on) }
    }
}

/// Values the owner of a toggle supplies each cycle. A `Some` field is
/// controlled: its value wins over internal storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleOverrides {
    pub on: Option<bool>,
}

impl ToggleOverrides {
    pub fn controlled(on: bool) -> Self {
        Self { on: Some(on) }
    }
}

pub type ToggleChanges = Changes<TogglePatch>;

pub struct ToggleSchema;

impl ToggleSchema {
    pub const ON: FieldSet = FieldSet::of(0);
}

impl Schema for ToggleSchema {
    type State = ToggleState;
    type Patch = TogglePatch;
    type Overrides = ToggleOverrides;

    const FIELDS: &'static [FieldDescriptor] = &[FieldDescriptor::new("on", 0, FieldKind::Bool)];

    fn supplied(overrides: &ToggleOverrides) -> FieldSet {
        if overrides.on.is_some() {
            Self::ON
        } else {
            FieldSet::empty()
        }
    }

    fn touched(patch: &TogglePatch) -> FieldSet {
        if patch.on.is_some() {
            Self::ON
        } else {
            FieldSet::empty()
        }
    }

    fn write_overrides(state: &mut ToggleState, overrides: &ToggleOverrides, fields: FieldSet) {
        if fields.contains(Self::ON)
            && let Some(on) = overrides.on
        {
            state.on = on;
        }
    }

    fn write_patch(state: &mut ToggleState, patch: &TogglePatch, fields: FieldSet) {
        if fields.contains(Self::ON)
            && let Some(on) = patch.on
        {
            state.on = on;
        }
    }
}
