use chrono::{DateTime, Utc};

use crate::domain::invoice::ports::Clock;

/// Wall-clock time source used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}
