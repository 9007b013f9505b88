use jiff::{SignedDuration, Timestamp};
use std::sync::{Arc, Mutex};

/// Source of the current time for expiry math.
///
/// Nothing in the registry ever waits on a clock; implementations only need
/// to answer "what time is it".
pub trait Clock: Send + Sync {
    /// Returns the current time of the clock.
    fn now(&self) -> Timestamp;
}

/// Clock backed by the real system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A manually controlled clock.
///
/// Stands still until [`advance`](FixedClock::advance) is called, which
/// makes expiry math exact in tests and scripted runs. Clones share the
/// same underlying time.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<Mutex<Timestamp>>,
}

impl FixedClock {
    /// Creates a clock frozen at the given time.
    pub fn new(now: Timestamp) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// Moves the clock forward by the given duration.
    pub fn advance(&self, by: SignedDuration) {
        let mut now = self
            .now
            .lock()
            .expect("fixed clock lock should not be poisoned");
        *now = now
            .checked_add(by)
            .expect("advanced time stays in timestamp range");
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self
            .now
            .lock()
            .expect("fixed clock lock should not be poisoned")
    }
}
