//! A step counter with chainable calls.

use crate::io::Notify;

/// A ladder you can walk up and down, one call at a time.
///
/// Every method returns the ladder again, so calls chain:
///
/// ```
/// use etude::io::BufferNotify;
/// use etude::ladder::Ladder;
///
/// let mut out = BufferNotify::new();
/// let mut ladder = Ladder::new();
/// ladder.up().up().down().show_step(&mut out);
/// assert_eq!(out.messages, ["1"]);
/// ```
#[derive(Debug, Default)]
pub struct Ladder {
    step: i64,
}

impl Ladder {
    /// Create a ladder at step zero.
    pub fn new() -> Ladder {
        return Ladder { step: 0 };
    }

    /// The current step.
    pub fn step(&self) -> i64 {
        return self.step;
    }

    /// Go up one step.
    pub fn up(&mut self) -> &mut Ladder {
        self.step += 1;
        return self;
    }

    /// Go down one step.
    pub fn down(&mut self) -> &mut Ladder {
        self.step -= 1;
        return self;
    }

    /// Surface the current step through `out`, keeping the chain alive.
    pub fn show_step<N: Notify>(&mut self, out: &mut N) -> &mut Ladder {
        out.notify(&self.step.to_string());
        return self;
    }
}
