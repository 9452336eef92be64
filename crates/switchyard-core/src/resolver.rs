//! Per-field authority: override when controlled, internal storage otherwise.

use std::any::type_name;

use crate::error::{Error, Result};
use crate::field::{FieldDescriptor, FieldSet};
use crate::schema::Schema;

/// Fields whose override is present and allowed to take effect.
pub fn controlled_fields<S: Schema>(overrides: &S::Overrides) -> FieldSet {
    S::supplied(overrides) & S::controllable_fields()
}

/// True iff every field in `field` is currently controlled.
pub fn is_controlled<S: Schema>(overrides: &S::Overrides, field: FieldSet) -> bool {
    !field.is_empty() && controlled_fields::<S>(overrides).contains(field)
}

/// The full merged view: overrides for controlled fields, internal values
/// for the rest.
pub fn merged_state<S: Schema>(internal: &S::State, overrides: &S::Overrides) -> S::State {
    let mut merged = internal.clone();
    S::write_overrides(&mut merged, overrides, controlled_fields::<S>(overrides));
    merged
}

pub fn field_named<S: Schema>(name: &str) -> Result<&'static FieldDescriptor> {
    S::FIELDS
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| Error::UnknownField {
            schema: type_name::<S>(),
            name: name.to_string(),
        })
}
