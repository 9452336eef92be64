use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    pub struct SubscriberId;
}

type Subscriber<T> = Rc<dyn Fn(&Rc<T>)>;

/// Observer list over one shared, immutable value.
///
/// Each accepted `publish` stores a single `Rc<T>` and hands that same
/// reference to every subscriber. Publishing a value equal to the current
/// one is dropped, so equality-based consumers never see a spurious update.
pub struct Broadcast<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: Rc<T>,
    subs: SlotMap<SubscriberId, Subscriber<T>>,
}

impl<T: 'static> Broadcast<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value: Rc::new(value),
            subs: SlotMap::with_key(),
        })))
    }

    pub fn current(&self) -> Rc<T> {
        self.0.borrow().value.clone()
    }

    /// Publishes `value` unless it equals the current one. Returns whether
    /// subscribers were notified.
    pub fn publish(&self, value: T) -> bool
    where
        T: PartialEq,
    {
        let (value, subs) = {
            let mut inner = self.0.borrow_mut();
            if *inner.value == value {
                log::trace!("broadcast: value unchanged, publish skipped");
                return false;
            }
            inner.value = Rc::new(value);
            let subs: Vec<Subscriber<T>> = inner.subs.values().cloned().collect();
            (inner.value.clone(), subs)
        };
        for s in &subs {
            s(&value);
        }
        true
    }

    pub fn subscribe(&self, f: impl Fn(&Rc<T>) + 'static) -> SubscriberId {
        self.0.borrow_mut().subs.insert(Rc::new(f))
    }

    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.0.borrow_mut().subs.remove(id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().subs.len()
    }
}

impl<T: 'static> Clone for Broadcast<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_share_one_reference() {
        let b = Broadcast::new(0);
        let seen: Rc<RefCell<Vec<Rc<i32>>>> = Rc::new(RefCell::new(Vec::new()));
        for _ in 0..2 {
            let seen = seen.clone();
            b.subscribe(move |v| seen.borrow_mut().push(v.clone()));
        }

        assert!(b.publish(1));
        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(Rc::ptr_eq(&seen[0], &seen[1]));
        assert!(Rc::ptr_eq(&seen[0], &b.current()));
    }

    #[test]
    fn equal_value_is_not_republished() {
        let b = Broadcast::new(String::from("a"));
        let before = b.current();
        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        b.subscribe(move |_| *h.borrow_mut() += 1);

        assert!(!b.publish(String::from("a")));
        assert_eq!(*hits.borrow(), 0);
        assert!(Rc::ptr_eq(&before, &b.current()));
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let b = Broadcast::new(0u8);
        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        let id = b.subscribe(move |_| *h.borrow_mut() += 1);

        b.publish(1);
        assert!(b.unsubscribe(id));
        assert!(!b.unsubscribe(id));
        b.publish(2);
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(b.subscriber_count(), 0);
    }

    #[test]
    fn subscriber_may_publish_again() {
        let b = Broadcast::new(0u32);
        let b2 = b.clone();
        b.subscribe(move |v| {
            if **v < 3 {
                b2.publish(**v + 1);
            }
        });

        b.publish(1);
        assert_eq!(*b.current(), 3);
    }
}
