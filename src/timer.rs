//! Deferred execution: a clock abstraction and a single-threaded timer
//! queue that fulfills [`Completion`] handles.
//!
//! Time is measured in abstract units. Tests drive a [`SimClock`] by hand,
//! so timer behavior is deterministic; [`SystemClock`] reads a monotonic
//! wall clock in milliseconds for real use. There is no cancellation: a
//! scheduled timer always runs to completion.

use crate::completion::Completion;

/// A source of the current time, in abstract units.
pub trait Clock {
    /// The current time. Must never decrease.
    fn now(&self) -> u64;
}

/// A deterministic clock that advances only when told to.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    now: u64,
}

impl SimClock {
    /// Create a clock at time zero.
    pub fn new() -> SimClock {
        return SimClock { now: 0 };
    }

    /// Advance the clock by a delta.
    pub fn advance_by(&mut self, delta: u64) {
        self.now += delta;
    }

    /// Advance the clock to an absolute time.
    pub fn advance_to(&mut self, time: u64) {
        debug_assert!(
            time >= self.now,
            "time cannot go backwards: current={}, target={}",
            self.now,
            time,
        );
        self.now = time;
    }
}

impl Clock for SimClock {
    fn now(&self) -> u64 {
        return self.now;
    }
}

/// A monotonic wall clock, in milliseconds since creation.
pub struct SystemClock {
    start: std::time::Instant,
}

impl SystemClock {
    /// Create a clock anchored to the current instant.
    pub fn new() -> SystemClock {
        return SystemClock {
            start: std::time::Instant::now(),
        };
    }
}

impl Default for SystemClock {
    fn default() -> SystemClock {
        return SystemClock::new();
    }
}

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        return self.start.elapsed().as_millis() as u64;
    }
}

struct Entry {
    deadline: u64,
    seq: u64,
    fire: Box<dyn FnOnce()>,
}

/// A single-threaded timer queue over a [`Clock`].
///
/// Timers fire when [`Timers::tick`] runs after their deadline has passed,
/// never before.
///
/// ```
/// use etude::timer::SimClock;
/// use etude::timer::Timers;
///
/// let mut timers = Timers::new(SimClock::new());
/// let done = timers.delay(3);
///
/// timers.clock_mut().advance_by(2);
/// timers.tick();
/// assert!(!done.is_fulfilled());
///
/// timers.clock_mut().advance_by(1);
/// timers.tick();
/// assert!(done.is_fulfilled());
/// ```
pub struct Timers<C: Clock> {
    clock: C,
    pending: Vec<Entry>,
    next_seq: u64,
}

impl<C: Clock> Timers<C> {
    /// Create an empty timer queue over the given clock.
    pub fn new(clock: C) -> Timers<C> {
        return Timers {
            clock,
            pending: Vec::new(),
            next_seq: 0,
        };
    }

    /// The underlying clock.
    pub fn clock(&self) -> &C {
        return &self.clock;
    }

    /// Mutable access to the underlying clock, for advancing a [`SimClock`].
    pub fn clock_mut(&mut self) -> &mut C {
        return &mut self.clock;
    }

    /// The number of timers that have not fired yet.
    pub fn pending(&self) -> usize {
        return self.pending.len();
    }

    /// Return a completion that fulfills (with no payload) once `duration`
    /// time units have elapsed and [`Timers::tick`] runs.
    pub fn delay(&mut self, duration: u64) -> Completion<()> {
        return self.after(duration, || ());
    }

    /// Run `action` once `duration` time units have elapsed, fulfilling the
    /// returned completion with its result.
    pub fn after<T, F>(&mut self, duration: u64, action: F) -> Completion<T>
    where
        T: 'static,
        F: FnOnce() -> T + 'static,
    {
        let completion = Completion::pending();
        let handle = completion.clone();
        let deadline = self.clock.now() + duration;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Entry {
            deadline,
            seq,
            fire: Box::new(move || {
                handle.fulfill(action());
            }),
        });
        return completion;
    }

    /// Fire every timer whose deadline has passed, in deadline order
    /// (scheduling order for equal deadlines). Returns the number fired.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let (mut due, rest): (Vec<Entry>, Vec<Entry>) = self
            .pending
            .drain(..)
            .partition(|entry| entry.deadline <= now);
        self.pending = rest;

        due.sort_by_key(|entry| (entry.deadline, entry.seq));
        let fired = due.len();
        for entry in due {
            (entry.fire)();
        }
        return fired;
    }
}
