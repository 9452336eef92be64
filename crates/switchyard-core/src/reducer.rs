use std::rc::Rc;

use crate::changes::Changes;
use crate::schema::Schema;

/// Caller-supplied transition governor: `(merged, proposed) -> changes`.
///
/// It should return a value for every field present in `proposed`. A field
/// left out is reported as absent and is not committed.
pub type StateReducer<S> = Rc<
    dyn Fn(&<S as Schema>::State, Changes<<S as Schema>::Patch>) -> Changes<<S as Schema>::Patch>,
>;

/// Identity unless a custom reducer was installed.
pub struct Reducer<S: Schema> {
    custom: Option<StateReducer<S>>,
}

impl<S: Schema> Reducer<S> {
    pub fn identity() -> Self {
        Self { custom: None }
    }

    pub fn new(
        f: impl Fn(&S::State, Changes<S::Patch>) -> Changes<S::Patch> + 'static,
    ) -> Self {
        Self {
            custom: Some(Rc::new(f)),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.custom.is_none()
    }

    pub fn reduce(&self, merged: &S::State, proposed: Changes<S::Patch>) -> Changes<S::Patch> {
        match &self.custom {
            Some(f) => f(merged, proposed),
            None => proposed,
        }
    }
}

impl<S: Schema> From<Option<StateReducer<S>>> for Reducer<S> {
    fn from(custom: Option<StateReducer<S>>) -> Self {
        Self { custom }
    }
}

impl<S: Schema> Default for Reducer<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Schema> Clone for Reducer<S> {
    fn clone(&self) -> Self {
        Self {
            custom: self.custom.clone(),
        }
    }
}
