use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// Which operation produced a change. Carried into every notification,
/// never into internal storage.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChangeType {
    Toggle,
    Reset,
    /// Caller-defined tag, e.g. passed through `toggle_with`.
    Custom(String),
}

impl ChangeType {
    pub fn custom(tag: impl Into<String>) -> Self {
        let tag: String = tag.into();
        Self::from(tag)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Toggle => "toggle",
            Self::Reset => "reset",
            Self::Custom(tag) => tag,
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ChangeType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "toggle" => Self::Toggle,
            "reset" => Self::Reset,
            _ => Self::Custom(tag),
        }
    }
}

impl From<&str> for ChangeType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<ChangeType> for String {
    fn from(kind: ChangeType) -> Self {
        match kind {
            ChangeType::Custom(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

/// A partial state plus the tag of the operation that proposed it.
///
/// Serialises flat: `{"type": "toggle", "on": true}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Changes<P> {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChangeType>,
    #[serde(flatten)]
    pub patch: P,
}

impl<P> Changes<P> {
    pub fn new(kind: impl Into<ChangeType>, patch: P) -> Self {
        Self {
            kind: Some(kind.into()),
            patch,
        }
    }

    pub fn untyped(patch: P) -> Self {
        Self { kind: None, patch }
    }

    pub fn with_kind(mut self, kind: impl Into<ChangeType>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn is(&self, kind: &ChangeType) -> bool {
        self.kind.as_ref() == Some(kind)
    }

    pub(crate) fn kind_label(&self) -> &str {
        self.kind.as_ref().map_or("untyped", ChangeType::as_str)
    }
}

/// A proposed transition: either literal changes, or a function of the
/// merged (override-substituted) state evaluated at commit time.
pub enum Proposal<S: Schema> {
    Literal(Changes<S::Patch>),
    Derive(Box<dyn FnOnce(&S::State) -> Changes<S::Patch>>),
}

impl<S: Schema> Proposal<S> {
    pub fn derive(f: impl FnOnce(&S::State) -> Changes<S::Patch> + 'static) -> Self {
        Self::Derive(Box::new(f))
    }

    pub fn resolve(self, merged: &S::State) -> Changes<S::Patch> {
        match self {
            Self::Literal(changes) => changes,
            Self::Derive(f) => f(merged),
        }
    }
}

impl<S: Schema> From<Changes<S::Patch>> for Proposal<S> {
    fn from(changes: Changes<S::Patch>) -> Self {
        Self::Literal(changes)
    }
}

impl<S: Schema> fmt::Debug for Proposal<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(changes) => f.debug_tuple("Literal").field(changes).finish(),
            Self::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}
