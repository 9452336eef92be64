//! # Scoped provision
//!
//! A value can be made available to everything that runs inside a closure,
//! without threading it through each call:
//!
//! ```rust,ignore
//! use switchyard_core::provider::{consume, provide};
//!
//! provide(Rc::new(toggle.clone()), || {
//!     // anywhere below, however deep
//!     let toggle = consume::<Toggle>()?;
//! });
//! ```
//!
//! Frames nest; the innermost provided value of a type wins. Frames are
//! per-thread and popped on unwind.

use std::any::{Any, TypeId, type_name};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{Error, Result};

thread_local! {
    static PROVIDER_STACK: RefCell<Vec<HashMap<TypeId, Rc<dyn Any>>>> = const { RefCell::new(Vec::new()) };
}

/// Runs `f` with `value` provided to every `consume::<T>()` inside it.
pub fn provide<T: 'static, R>(value: Rc<T>, f: impl FnOnce() -> R) -> R {
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            PROVIDER_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }

    let mut frame: HashMap<TypeId, Rc<dyn Any>> = HashMap::new();
    frame.insert(TypeId::of::<T>(), value);
    PROVIDER_STACK.with(|st| st.borrow_mut().push(frame));
    let _guard = Guard;
    f()
}

/// The innermost provided `T`, or `Error::MissingProvider`.
pub fn consume<T: 'static>() -> Result<Rc<T>> {
    try_consume::<T>().ok_or(Error::MissingProvider {
        type_name: type_name::<T>(),
    })
}

pub fn try_consume<T: 'static>() -> Option<Rc<T>> {
    PROVIDER_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Ok(t) = v.clone().downcast::<T>()
            {
                return Some(t);
            }
        }
        None
    })
}

pub fn is_provided<T: 'static>() -> bool {
    try_consume::<T>().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Marker(u8);

    #[test]
    fn consume_outside_provider_fails() {
        let err = consume::<Marker>().unwrap_err();
        assert!(matches!(err, Error::MissingProvider { .. }));
        assert!(err.to_string().contains("Marker"));
    }

    #[test]
    fn innermost_frame_wins_and_pops() {
        provide(Rc::new(Marker(1)), || {
            assert_eq!(*consume::<Marker>().unwrap(), Marker(1));
            provide(Rc::new(Marker(2)), || {
                assert_eq!(*consume::<Marker>().unwrap(), Marker(2));
            });
            assert_eq!(*consume::<Marker>().unwrap(), Marker(1));
        });
        assert!(!is_provided::<Marker>());
    }

    #[test]
    fn other_types_fall_through_frames() {
        provide(Rc::new(Marker(9)), || {
            provide(Rc::new(5u32), || {
                assert_eq!(*consume::<Marker>().unwrap(), Marker(9));
                assert_eq!(*consume::<u32>().unwrap(), 5);
            });
        });
    }
}
