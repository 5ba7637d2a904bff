//! Observable State
//!
//! Single-threaded state cell that notifies subscribers after each update.
//! View models own one; components subscribe and mirror it into Leptos.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Subscriber<S> = Rc<dyn Fn(&S)>;
type Subscribers<S> = RefCell<Vec<(u64, Subscriber<S>)>>;

pub struct Observable<S> {
    state: Rc<RefCell<S>>,
    subscribers: Rc<Subscribers<S>>,
    next_id: Rc<Cell<u64>>,
}

impl<S> Clone for Observable<S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            subscribers: Rc::clone(&self.subscribers),
            next_id: Rc::clone(&self.next_id),
        }
    }
}

impl<S: Clone + 'static> Observable<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: Rc::new(RefCell::new(initial)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    pub fn snapshot(&self) -> S {
        self.state.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Mutate and notify. The borrow ends before subscribers run, so they may
    /// read or update again.
    pub fn update(&self, f: impl FnOnce(&mut S)) {
        f(&mut self.state.borrow_mut());
        self.notify();
    }

    pub fn subscribe(&self, subscriber: impl Fn(&S) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(subscriber)));

        let subscribers: Weak<Subscribers<S>> = Rc::downgrade(&self.subscribers);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(subscribers) = subscribers.upgrade() {
                    subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    fn notify(&self) {
        let subscribers: Vec<Subscriber<S>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, s)| Rc::clone(s))
            .collect();
        if subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }
}

/// Unsubscribes on drop
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_notifies_with_new_state() {
        let observable = Observable::new(0u32);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _sub = observable.subscribe(move |v| sink.borrow_mut().push(*v));

        observable.update(|v| *v += 1);
        observable.update(|v| *v += 2);

        assert_eq!(*seen.borrow(), vec![1, 3]);
        assert_eq!(observable.snapshot(), 3);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let observable = Observable::new(0u32);
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let sub = observable.subscribe(move |_| counter.set(counter.get() + 1));

        observable.update(|v| *v = 1);
        drop(sub);
        observable.update(|v| *v = 2);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_subscriber_may_read_state() {
        let observable = Observable::new(String::new());
        let reader = observable.clone();
        let lengths = Rc::new(RefCell::new(Vec::new()));
        let sink = lengths.clone();
        let _sub = observable.subscribe(move |_| sink.borrow_mut().push(reader.with(|s| s.len())));

        observable.update(|s| s.push_str("abc"));
        assert_eq!(*lengths.borrow(), vec![3]);
    }
}
