use std::{
    fmt::{Debug, Display, Formatter},
    time::Duration,
};

use chrono::TimeDelta;
use humantime::format_duration;

use crate::quantity::Quantity;

/// Cycle times, simulation durations and their deviations.
pub type Seconds = Quantity<1, 0>;

impl From<TimeDelta> for Seconds {
    fn from(time_delta: TimeDelta) -> Self {
        Self::from(time_delta.as_seconds_f64())
    }
}

impl Display for Seconds {
    /// Whole seconds in the human-readable form, for example `1day 2h 3m 4s`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.is_finite() {
            return write!(f, "{}", self.0);
        }
        let seconds = self.0.0.round();
        if seconds < 0.0 {
            write!(f, "-")?;
        }
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let duration = Duration::from_secs(seconds.abs() as u64);
        write!(f, "{}", format_duration(duration))
    }
}

impl Debug for Seconds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}s", self.0.0)
    }
}
