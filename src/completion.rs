//! Single-resolution completion handles.
//!
//! A [`Completion`] is a value that transitions from pending to fulfilled
//! at most once. Continuations can be attached at any time: while pending
//! they are queued, and after fulfillment they fire immediately. The first
//! fulfillment wins; every later attempt is a no-op.
//!
//! The model is single-threaded by contract, so the shared state lives in
//! an `Rc<RefCell<..>>` rather than behind a lock. No rejection path is
//! modeled: the producers in this crate never fail.

use std::cell::RefCell;
use std::rc::Rc;

type Continuation<T> = Box<dyn FnOnce(&T)>;

enum State<T> {
    Pending(Vec<Continuation<T>>),
    Fulfilled(T),
}

/// A clonable handle to an at-most-once asynchronous result.
///
/// Clones share the same underlying state: fulfilling through one clone is
/// observed by all of them.
///
/// ```
/// use etude::completion::Completion;
///
/// let completion: Completion<u32> = Completion::pending();
/// assert!(!completion.is_fulfilled());
///
/// assert!(completion.fulfill(1));
/// assert!(!completion.fulfill(2)); // first fulfillment wins
/// assert_eq!(completion.value(), Some(1));
/// ```
pub struct Completion<T> {
    shared: Rc<RefCell<State<T>>>,
}

impl<T> Clone for Completion<T> {
    fn clone(&self) -> Completion<T> {
        return Completion {
            shared: Rc::clone(&self.shared),
        };
    }
}

impl<T> Completion<T> {
    /// Create a completion that has not yet been fulfilled.
    pub fn pending() -> Completion<T> {
        return Completion {
            shared: Rc::new(RefCell::new(State::Pending(Vec::new()))),
        };
    }

    /// Create a completion that is already fulfilled with `value`.
    pub fn fulfilled(value: T) -> Completion<T> {
        return Completion {
            shared: Rc::new(RefCell::new(State::Fulfilled(value))),
        };
    }

    /// True once the completion has been fulfilled.
    pub fn is_fulfilled(&self) -> bool {
        return matches!(&*self.shared.borrow(), State::Fulfilled(_));
    }

    /// Fulfill the completion, running queued continuations in the order
    /// they were attached.
    ///
    /// Only the first fulfillment has any effect. Returns `true` if this
    /// call performed the transition, `false` if the completion was already
    /// fulfilled (the value is dropped in that case).
    pub fn fulfill(&self, value: T) -> bool {
        let continuations = {
            // A fulfill attempt from inside a running continuation finds the
            // state borrowed; the completion is already fulfilled then, so
            // the attempt is a no-op.
            let Ok(mut state) = self.shared.try_borrow_mut() else {
                return false;
            };
            if matches!(&*state, State::Fulfilled(_)) {
                return false;
            }
            match std::mem::replace(&mut *state, State::Fulfilled(value)) {
                State::Pending(continuations) => continuations,
                State::Fulfilled(_) => Vec::new(),
            }
        };

        let state = self.shared.borrow();
        if let State::Fulfilled(value) = &*state {
            for continuation in continuations {
                continuation(value);
            }
        }
        return true;
    }

    /// Attach a continuation.
    ///
    /// While the completion is pending the continuation is queued; once it
    /// is fulfilled the continuation fires immediately, including when
    /// attached after fulfillment or from inside another continuation.
    pub fn then<F>(&self, continuation: F)
    where
        F: FnOnce(&T) + 'static,
    {
        {
            let state = self.shared.borrow();
            if let State::Fulfilled(value) = &*state {
                continuation(value);
                return;
            }
        }

        let mut state = self.shared.borrow_mut();
        if let State::Pending(continuations) = &mut *state {
            continuations.push(Box::new(continuation));
        }
    }
}

impl<T: Clone> Completion<T> {
    /// Return a copy of the fulfilled value, or `None` while pending.
    pub fn value(&self) -> Option<T> {
        return match &*self.shared.borrow() {
            State::Fulfilled(value) => Some(value.clone()),
            State::Pending(_) => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pending() {
        let completion: Completion<u32> = Completion::pending();
        assert!(!completion.is_fulfilled());
        assert_eq!(completion.value(), None);
    }

    #[test]
    fn fulfill_transitions_to_fulfilled() {
        let completion = Completion::pending();
        assert!(completion.fulfill(7));
        assert!(completion.is_fulfilled());
        assert_eq!(completion.value(), Some(7));
    }

    #[test]
    fn first_fulfillment_wins() {
        // The re-resolve exercise: resolve(1) then a later resolve(2).
        let completion = Completion::pending();
        assert!(completion.fulfill(1));
        assert!(!completion.fulfill(2));
        assert_eq!(completion.value(), Some(1));
    }

    #[test]
    fn queued_continuation_fires_on_fulfill() {
        let completion = Completion::pending();
        let observed = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&observed);
        completion.then(move |value: &u32| sink.borrow_mut().push(*value));
        assert!(observed.borrow().is_empty());

        completion.fulfill(5);
        assert_eq!(*observed.borrow(), [5]);
    }

    #[test]
    fn continuations_run_in_attachment_order() {
        let completion = Completion::pending();
        let observed = Rc::new(RefCell::new(Vec::new()));

        for tag in 0..3 {
            let sink = Rc::clone(&observed);
            completion.then(move |_: &()| sink.borrow_mut().push(tag));
        }
        completion.fulfill(());
        assert_eq!(*observed.borrow(), [0, 1, 2]);
    }

    #[test]
    fn continuation_attached_after_fulfillment_fires_immediately() {
        let completion = Completion::fulfilled(9);
        let observed = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&observed);
        completion.then(move |value: &u32| *sink.borrow_mut() = Some(*value));
        assert_eq!(*observed.borrow(), Some(9));
    }

    #[test]
    fn continuation_runs_exactly_once() {
        let completion = Completion::pending();
        let count = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&count);
        completion.then(move |_: &u32| *sink.borrow_mut() += 1);

        completion.fulfill(1);
        completion.fulfill(2);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn clones_share_state() {
        let completion = Completion::pending();
        let other = completion.clone();
        completion.fulfill(3);
        assert_eq!(other.value(), Some(3));
    }

    #[test]
    fn then_inside_a_continuation_fires_immediately() {
        let completion: Completion<u32> = Completion::pending();
        let observed = Rc::new(RefCell::new(Vec::new()));

        let inner_handle = completion.clone();
        let sink = Rc::clone(&observed);
        completion.then(move |value: &u32| {
            let first = *value;
            let sink_inner = Rc::clone(&sink);
            inner_handle.then(move |value: &u32| {
                sink_inner.borrow_mut().push((first, *value));
            });
        });

        completion.fulfill(4);
        assert_eq!(*observed.borrow(), [(4, 4)]);
    }

    #[test]
    fn fulfill_inside_a_continuation_is_a_no_op() {
        let completion: Completion<u32> = Completion::pending();
        let inner_handle = completion.clone();
        let outcome = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&outcome);
        completion.then(move |_: &u32| {
            *sink.borrow_mut() = Some(inner_handle.fulfill(99));
        });

        completion.fulfill(1);
        assert_eq!(*outcome.borrow(), Some(false));
        assert_eq!(completion.value(), Some(1));
    }
}
