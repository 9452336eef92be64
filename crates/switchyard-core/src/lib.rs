//! # Controllable state
//!
//! Switchyard's core is a state container that is *uncontrolled by default
//! and controllable on demand*: an instance owns its state, but a caller may
//! take authority over any field by supplying an override for it.
//!
//! The pieces, leaf to root:
//!
//! - [`Schema`]: the fixed set of fields, declared once with
//!   [`FieldDescriptor`]s, and the per-field copy between `State`, `Patch`
//!   and `Overrides`.
//! - [`resolver`]: for each field, override if controlled, internal value
//!   otherwise.
//! - [`Reducer`]: identity unless the caller installs a [`StateReducer`]
//!   that may rewrite any proposed change.
//! - [`ControlledStore`]: runs a transition. It merges, resolves the
//!   [`Proposal`], reduces, partitions, and commits only uncontrolled fields.
//! - [`EventNotifier`]: `on_state_change` with a stable payload shape.
//! - [`Multiplexer`] / [`call_all`]: many handlers as one.
//! - [`Broadcast`] and [`provider`]: publish one shared value per commit and
//!   make it reachable from nested code.
//!
//! ## A transition
//!
//! ```rust,ignore
//! let store = ControlledStore::<ToggleSchema>::new(
//!     ToggleState { on: false },
//!     ToggleOverrides { on: Some(true) },
//!     Reducer::identity(),
//! );
//!
//! let commit = store.commit(Proposal::derive(|merged: &ToggleState| {
//!     Changes::new(ChangeType::Toggle, TogglePatch { on: Some(!merged.on) })
//! }));
//!
//! // `on` is controlled: the change is reported but not stored.
//! assert!(commit.is_controlled_only());
//! assert_eq!(commit.changes.patch.on, Some(false));
//! assert!(store.state().on);
//! ```
//!
//! Controlled fields are excluded from the write yet always present in what
//! observers receive, so the owner of a controlled field can decide whether
//! to adopt the would-be value.

pub mod broadcast;
pub mod changes;
pub mod error;
pub mod field;
pub mod multiplex;
pub mod notify;
pub mod provider;
pub mod reducer;
pub mod resolver;
pub mod schema;
pub mod store;

pub use broadcast::{Broadcast, SubscriberId};
pub use changes::{ChangeType, Changes, Proposal};
pub use error::{Error, Result};
pub use field::{FieldDescriptor, FieldKind, FieldSet};
pub use multiplex::{Handler, Multiplexer, call_all};
pub use notify::{EventNotifier, StateChangeFn, ValueFn, emit};
pub use reducer::{Reducer, StateReducer};
pub use schema::Schema;
pub use store::{Commit, ControlledStore};
