//! Time source for fortune timestamps.

use chrono::{DateTime, Utc};

/// Supplies the timestamp stamped onto each generated fortune.
pub trait Clock {
    /// The current instant.
    fn now(&mut self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&mut self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> Clock for F
where
    F: FnMut() -> DateTime<Utc>,
{
    fn now(&mut self) -> DateTime<Utc> {
        self()
    }
}
