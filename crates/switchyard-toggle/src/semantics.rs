/// High-level semantic role of a toggler, similar to ARIA roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Button,
    Checkbox,
    Switch,
}

/// Accessibility description derived from a prop bag.
#[derive(Clone, Debug, PartialEq)]
pub struct Semantics {
    pub role: Role,
    /// Human-readable label for screen readers.
    pub label: Option<String>,
    /// Pressed/checked state announced for two-state controls.
    pub pressed: Option<bool>,
}

impl Semantics {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            label: None,
            pressed: None,
        }
    }
}
