//! # Toggle
//!
//! A two-state control built on `switchyard-core`. Uncontrolled by default:
//!
//! ```rust,ignore
//! use switchyard_toggle::*;
//!
//! let toggle = Toggle::new(ToggleConfig::new().on_toggle(|on| log::info!("on = {on}")));
//! toggle.toggle();
//! assert!(toggle.state().on);
//! ```
//!
//! ## Controlled
//!
//! Supplying `on` hands authority over the field to the caller. The toggle
//! still runs the full pipeline and reports the would-be value, but only the
//! owner can change what `state()` returns:
//!
//! ```rust,ignore
//! let toggle = Toggle::new(ToggleConfig::controlled(true).on_toggle(|next| {
//!     // `next` is false: adopt it with `set_on(Some(next))`, or don't.
//! }));
//! toggle.toggle();
//! assert!(toggle.state().on);
//! ```
//!
//! ## Governing transitions
//!
//! A state reducer sees every proposed change, with the merged state, and
//! returns what actually happens:
//!
//! ```rust,ignore
//! let always_on = Toggle::new(ToggleConfig::new().state_reducer(|_state, mut changes| {
//!     changes.patch.on = Some(true);
//!     changes
//! }));
//! ```
//!
//! ## Props and distribution
//!
//! - [`Toggle::toggler_props`] builds a prop bag for whatever renders the
//!   toggler; a caller `on_click` is run before the toggle, never instead of it.
//! - [`Toggle::subscribe`], [`Toggle::render`] and [`ToggleProvider`] hand out
//!   the published [`ToggleValue`].

pub mod config;
pub mod input;
pub mod props;
pub mod provider;
pub mod semantics;
pub mod state;
mod tests;
pub mod toggle;

pub use config::ToggleConfig;
pub use input::{ClickEvent, PointerKind};
pub use props::{PropOverrides, PropValue, TogglerProps};
pub use provider::{ToggleProvider, use_toggle, use_toggle_handle};
pub use semantics::{Role, Semantics};
pub use state::{ToggleChanges, ToggleOverrides, TogglePatch, ToggleSchema, ToggleState};
pub use toggle::{Toggle, ToggleApi, ToggleOptions, ToggleValue};

pub use switchyard_core::{ChangeType, Error, Result};
