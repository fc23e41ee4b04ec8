//! Shared clock and date helpers for integration tests.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use mockable::Clock;
use std::sync::{Mutex, PoisonError};

/// Builds a calendar date for test inputs.
///
/// # Errors
///
/// Returns an error when the components do not form a valid date.
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| eyre::eyre!("invalid test date {year}-{month}-{day}"))
}

/// Clock pinned to a settable calendar date.
#[derive(Debug)]
pub struct SettableClock {
    now: Mutex<DateTime<Utc>>,
}

impl SettableClock {
    /// Creates a clock reading the start of `today`.
    #[must_use]
    pub fn on(today: NaiveDate) -> Self {
        Self {
            now: Mutex::new(start_of(today)),
        }
    }

    /// Moves the clock to the start of `today`.
    pub fn set(&self, today: NaiveDate) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = start_of(today);
    }
}

impl Clock for SettableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn start_of(today: NaiveDate) -> DateTime<Utc> {
    today.and_time(NaiveTime::MIN).and_utc()
}
