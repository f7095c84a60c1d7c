use chrono::{DateTime, Local};

/// Source of "now" for commands. Injected so that durations and calendar
/// windows can be tested against a fixed point in time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub use fixtures::FixedClock;

#[cfg(any(test, feature = "test_utils"))]
mod fixtures {
    use super::Clock;
    use chrono::{DateTime, Local, TimeDelta};
    use std::cell::Cell;

    /// A clock that only moves when told to.
    pub struct FixedClock {
        now: Cell<DateTime<Local>>,
    }

    impl FixedClock {
        pub fn new(now: DateTime<Local>) -> Self {
            Self {
                now: Cell::new(now),
            }
        }

        pub fn set(&self, now: DateTime<Local>) {
            self.now.set(now);
        }

        pub fn advance(&self, by: TimeDelta) {
            self.now.set(self.now.get() + by);
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.now.get()
        }
    }
}
