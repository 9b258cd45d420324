//! Day counter for the simulation loop.
//!
//! The clock is the only temporal state in the simulation. Drugs carry their
//! own `expires_in` countdown; the clock just numbers the days the runner has
//! executed so summaries and logs can refer to them.

/// Errors that can occur during clock operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Day counter would overflow.
    #[error("day counter overflow: cannot advance beyond u64::MAX")]
    DayOverflow,
}

/// Counts elapsed simulation days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayClock {
    /// Number of days executed so far (0 before the first day).
    day: u64,
}

impl DayClock {
    /// Create a clock at day 0.
    pub const fn new() -> Self {
        Self { day: 0 }
    }

    /// Create a clock at an arbitrary day (used to resume a run).
    pub const fn from_day(day: u64) -> Self {
        Self { day }
    }

    /// Advance the clock by one day. Returns the new day number.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::DayOverflow`] if the counter would exceed
    /// `u64::MAX`.
    pub fn advance(&mut self) -> Result<u64, ClockError> {
        self.day = self.day.checked_add(1).ok_or(ClockError::DayOverflow)?;
        Ok(self.day)
    }

    /// Return the current day number.
    pub const fn day(&self) -> u64 {
        self.day
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_day_zero() {
        assert_eq!(DayClock::new().day(), 0);
        assert_eq!(DayClock::default(), DayClock::new());
    }

    #[test]
    fn clock_advances() {
        let mut clock = DayClock::new();
        assert_eq!(clock.advance().unwrap(), 1);
        assert_eq!(clock.advance().unwrap(), 2);
        assert_eq!(clock.day(), 2);
    }

    #[test]
    fn clock_overflow_is_an_error() {
        let mut clock = DayClock::from_day(u64::MAX);
        assert!(matches!(clock.advance(), Err(ClockError::DayOverflow)));
        assert_eq!(clock.day(), u64::MAX);
    }
}
