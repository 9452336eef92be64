use std::fmt::Debug;

use smallvec::SmallVec;

use crate::field::{FieldDescriptor, FieldSet};

/// Static description of a controllable state shape.
///
/// A schema ties together three views of the same fields:
///
/// - `State`: one concrete value per field.
/// - `Patch`: one `Option` per field; `Some` means "this field changes".
/// - `Overrides`: one `Option` per field; `Some` means "the caller owns
///   this field for the current cycle".
///
/// Implementations copy fields by name, one at a time. Nothing is discovered
/// at runtime beyond what `FIELDS` declares.
pub trait Schema: 'static {
    type State: Clone + PartialEq + Debug + 'static;
    type Patch: Clone + Default + PartialEq + Debug + 'static;
    type Overrides: Clone + Default + PartialEq + Debug + 'static;

    const FIELDS: &'static [FieldDescriptor];

    /// Fields that carry an override value, controllable or not.
    fn supplied(overrides: &Self::Overrides) -> FieldSet;

    /// Fields that carry a value in `patch`.
    fn touched(patch: &Self::Patch) -> FieldSet;

    /// Copies the override value of every field in `fields` into `state`.
    fn write_overrides(state: &mut Self::State, overrides: &Self::Overrides, fields: FieldSet);

    /// Copies the patch value of every field in `fields` into `state`.
    /// Fields absent from the patch are left as they are.
    fn write_patch(state: &mut Self::State, patch: &Self::Patch, fields: FieldSet);

    fn all_fields() -> FieldSet {
        Self::FIELDS
            .iter()
            .fold(FieldSet::empty(), |acc, d| acc | d.field)
    }

    fn controllable_fields() -> FieldSet {
        Self::FIELDS
            .iter()
            .filter(|d| d.controllable)
            .fold(FieldSet::empty(), |acc, d| acc | d.field)
    }

    /// Declared names of the fields in `fields`, in declaration order.
    fn names(fields: FieldSet) -> SmallVec<[&'static str; 4]> {
        Self::FIELDS
            .iter()
            .filter(|d| fields.contains(d.field))
            .map(|d| d.name)
            .collect()
    }
}
