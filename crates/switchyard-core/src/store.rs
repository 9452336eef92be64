use std::cell::RefCell;
use std::fmt;

use crate::changes::{Changes, Proposal};
use crate::field::FieldSet;
use crate::reducer::Reducer;
use crate::resolver::{controlled_fields, is_controlled, merged_state};
use crate::schema::Schema;

/// Outcome of one `ControlledStore::commit`.
pub struct Commit<S: Schema> {
    /// What the reducer returned. This, tag included, is what observers see.
    pub changes: Changes<S::Patch>,
    /// Fields the proposal carried before the reducer ran.
    pub proposed: FieldSet,
    /// Fields that were controlled when the commit started.
    pub controlled: FieldSet,
    /// Fields written to internal storage.
    pub committed: FieldSet,
}

impl<S: Schema> Commit<S> {
    /// Nothing reached internal storage.
    pub fn is_controlled_only(&self) -> bool {
        self.committed.is_empty()
    }

    /// Proposed fields the reducer left out of its result.
    pub fn dropped(&self) -> FieldSet {
        self.proposed - S::touched(&self.changes.patch)
    }
}

impl<S: Schema> Clone for Commit<S> {
    fn clone(&self) -> Self {
        Self {
            changes: self.changes.clone(),
            proposed: self.proposed,
            controlled: self.controlled,
            committed: self.committed,
        }
    }
}

impl<S: Schema> fmt::Debug for Commit<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commit")
            .field("changes", &self.changes)
            .field("controlled", &S::names(self.controlled))
            .field("committed", &S::names(self.committed))
            .finish()
    }
}

/// Internal state for one instance plus the caller's current overrides.
///
/// Every mutation goes through [`ControlledStore::commit`]. No borrow is held
/// while caller code (a derive proposal or the reducer) runs, so that code may
/// read the store or trigger a nested commit.
pub struct ControlledStore<S: Schema> {
    internal: RefCell<S::State>,
    overrides: RefCell<S::Overrides>,
    reducer: Reducer<S>,
}

impl<S: Schema> ControlledStore<S> {
    pub fn new(initial: S::State, overrides: S::Overrides, reducer: Reducer<S>) -> Self {
        Self {
            internal: RefCell::new(initial),
            overrides: RefCell::new(overrides),
            reducer,
        }
    }

    /// Merged view of every field.
    pub fn state(&self) -> S::State {
        merged_state::<S>(&self.internal.borrow(), &self.overrides.borrow())
    }

    /// Raw internal storage. Controlled fields hold whatever was last
    /// committed while they were uncontrolled.
    pub fn internal_state(&self) -> S::State {
        self.internal.borrow().clone()
    }

    pub fn overrides(&self) -> S::Overrides {
        self.overrides.borrow().clone()
    }

    /// Replaces the overrides for subsequent cycles. Returns whether the
    /// merged state changed as a result.
    pub fn set_overrides(&self, overrides: S::Overrides) -> bool {
        let before = self.state();
        *self.overrides.borrow_mut() = overrides;
        self.state() != before
    }

    pub fn controlled(&self) -> FieldSet {
        controlled_fields::<S>(&self.overrides.borrow())
    }

    pub fn is_controlled(&self, field: FieldSet) -> bool {
        is_controlled::<S>(&self.overrides.borrow(), field)
    }

    /// Runs one transition: resolve, reduce, partition, commit.
    ///
    /// Controlled fields are never written, even when the reduced changes
    /// carry a value for them; the changes are still returned in full so
    /// observers can react to the would-be transition.
    pub fn commit(&self, proposal: Proposal<S>) -> Commit<S> {
        let (merged, controlled) = {
            let overrides = self.overrides.borrow();
            (
                merged_state::<S>(&self.internal.borrow(), &overrides),
                controlled_fields::<S>(&overrides),
            )
        };

        let proposed = proposal.resolve(&merged);
        let proposed_fields = S::touched(&proposed.patch);
        let changes = self.reducer.reduce(&merged, proposed);
        let touched = S::touched(&changes.patch);

        let dropped = proposed_fields - touched;
        if !dropped.is_empty() {
            log::debug!(
                "state reducer left {:?} out of the {} change",
                S::names(dropped),
                changes.kind_label()
            );
        }

        let committed = touched - controlled;
        if committed.is_empty() {
            log::trace!(
                "{} change touches no uncontrolled field; internal state untouched",
                changes.kind_label()
            );
        } else {
            S::write_patch(&mut self.internal.borrow_mut(), &changes.patch, committed);
        }

        log::debug!(
            "commit {}: committed={:?} controlled={:?}",
            changes.kind_label(),
            S::names(committed),
            S::names(controlled)
        );

        Commit {
            changes,
            proposed: proposed_fields,
            controlled,
            committed,
        }
    }

    /// Merged state with the commit's values substituted for the fields that
    /// were controlled: what the owner of those fields would adopt if it
    /// accepted the transition.
    pub fn projected_state(&self, commit: &Commit<S>) -> S::State {
        let mut state = self.state();
        let fields = commit.controlled & S::touched(&commit.changes.patch);
        S::write_patch(&mut state, &commit.changes.patch, fields);
        state
    }
}

impl<S: Schema> fmt::Debug for ControlledStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControlledStore")
            .field("internal", &*self.internal.borrow())
            .field("overrides", &*self.overrides.borrow())
            .field("identity_reducer", &self.reducer.is_identity())
            .finish()
    }
}
