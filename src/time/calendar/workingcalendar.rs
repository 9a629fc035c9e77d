use chrono::{
    Days,
    NaiveDateTime
};
use thiserror::Error;

use crate::time::rangeofdates::RangeOfDates;

const ONE_DAY: Days = Days::new(1);

#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum CalendarError {
    #[error("the weekly pattern has no working weekday")]
    NoWorkingWeekday
}

/// A calendar that splits days into working and non-working ones.
///
/// Implementors provide the weekly pattern and the holiday test; the
/// counting and stepping operations are derived from those two predicates.
pub trait WorkingCalendar: Send + Sync {
    /// Weekly pattern only.
    fn is_working_day(&self, d: NaiveDateTime) -> bool;

    fn is_holiday(&self, d: NaiveDateTime) -> bool;

    /// `true` when at least one weekday of the pattern is working.
    fn has_working_weekday(&self) -> bool;

    /// A holiday overrides an otherwise working weekday.
    fn is_non_working_day(&self, d: NaiveDateTime) -> bool {
        !self.is_working_day(d) || self.is_holiday(d)
    }

    /// Non-working days in `[start_date, end_date)`.
    fn count_non_working_days(&self, start_date: NaiveDateTime, end_date: NaiveDateTime) -> u32 {
        RangeOfDates::half_open(start_date, end_date)
            .iter()
            .filter(|&d| self.is_non_working_day(d))
            .count() as u32
    }

    /// Working days in `[start_date, end_date]`.
    fn count_working_days_in_period(&self, start_date: NaiveDateTime, end_date: NaiveDateTime) -> u32 {
        RangeOfDates::inclusive(start_date, end_date)
            .iter()
            .filter(|&d| !self.is_non_working_day(d))
            .count() as u32
    }

    /// Steps forward one calendar day at a time, strictly after `start_date`,
    /// until `n` working days have been passed, and returns the day the n-th
    /// one was reached. `n <= 0` returns `start_date`.
    ///
    /// With no working weekday and `n > 0` this only stops once the
    /// representable date range is exhausted; see `try_add_working_days`.
    fn add_working_days(&self, start_date: NaiveDateTime, n: i32) -> NaiveDateTime {
        let mut d = start_date;
        let mut added = 0;
        while added < n {
            match d.checked_add_days(ONE_DAY) {
                Some(next) => d = next,
                None => break
            }
            added += !self.is_non_working_day(d) as i32;
        }
        tracing::trace!(start = %start_date, n, result = %d, "added working days");
        d
    }

    fn try_add_working_days(&self, start_date: NaiveDateTime, n: i32) -> Result<NaiveDateTime, CalendarError> {
        if n > 0 && !self.has_working_weekday() {
            return Err(CalendarError::NoWorkingWeekday);
        }
        Ok(self.add_working_days(start_date, n))
    }
}
