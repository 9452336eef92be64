bitflags::bitflags! {
    /// A set of schema fields. Bit `i` is the field declared with index `i`.
    ///
    /// Schemas name their own fields as constants, e.g.
    /// `const ON: FieldSet = FieldSet::of(0);`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FieldSet: u32 {
        const _ = !0;
    }
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl FieldSet {
    /// Maximum number of fields a schema can declare.
    pub const CAPACITY: u32 = u32::BITS;

    /// The single-field set for the field declared at `index`.
    pub const fn of(index: u32) -> Self {
        assert!(index < Self::CAPACITY, "field index out of range");
        Self::from_bits_retain(1 << index)
    }

    pub fn len(self) -> usize {
        self.bits().count_ones() as usize
    }
}

/// Value type of a field; informational, used for diagnostics and tooling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Integer,
}

/// Static description of one state field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub field: FieldSet,
    pub kind: FieldKind,
    /// Whether an override may take authority over this field. Overrides
    /// supplied for a non-controllable field are ignored.
    pub controllable: bool,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, index: u32, kind: FieldKind) -> Self {
        Self {
            name,
            field: FieldSet::of(index),
            kind,
            controllable: true,
        }
    }

    /// Marks the field as always owned by internal storage.
    pub const fn internal_only(mut self) -> Self {
        self.controllable = false;
        self
    }
}
