use chrono::NaiveDateTime;

use crate::time::calendar::projectcalendar::ProjectCalendar;
use crate::time::calendar::workingcalendar::WorkingCalendar;
use crate::time::holiday::Holiday;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::workingdays::WorkingDaysConfig;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Days walked from `start_date` to cover `original_end_date`: the elapsed
/// time rounded up to whole days, plus one. An end later in the day than the
/// start reaches into one more day.
fn inclusive_day_span(start_date: NaiveDateTime, original_end_date: NaiveDateTime) -> i64 {
    let millis = (original_end_date - start_date).num_milliseconds();
    let whole_days = millis.div_euclid(MILLIS_PER_DAY);
    let partial_day = if millis.rem_euclid(MILLIS_PER_DAY) > 0 { 1 } else { 0 };
    whole_days + partial_day + 1
}

/// Working days `[start_date, original_end_date]` would span if there were
/// no holidays: the weekly pattern is applied to each day walked from
/// `start_date`.
pub fn expected_working_days<C>(calendar: &C,
                                start_date: NaiveDateTime,
                                original_end_date: NaiveDateTime) -> i32
    where C: WorkingCalendar + ?Sized {
    let span = inclusive_day_span(start_date, original_end_date);
    RangeOfDates::inclusive(start_date, NaiveDateTime::MAX)
        .iter()
        .take(span.max(0) as usize)
        .filter(|&d| calendar.is_working_day(d))
        .count() as i32
}

/// Re-derives a task's end date so that it keeps the same number of working
/// days once holidays are taken into account. A task without any working
/// day keeps its original end.
pub fn adjust_end_date<C>(calendar: &C,
                          start_date: NaiveDateTime,
                          original_end_date: NaiveDateTime) -> NaiveDateTime
    where C: WorkingCalendar + ?Sized {
    let expected = expected_working_days(calendar, start_date, original_end_date);
    if expected <= 0 {
        return original_end_date;
    }
    let adjusted = calendar.add_working_days(start_date, expected - 1);
    tracing::debug!(start = %start_date,
                    original_end = %original_end_date,
                    adjusted_end = %adjusted,
                    expected,
                    "adjusted task end date");
    adjusted
}

pub fn calculate_adjusted_end_date(start_date: NaiveDateTime,
                                   original_end_date: NaiveDateTime,
                                   working_days: &WorkingDaysConfig,
                                   holidays: &[Holiday]) -> NaiveDateTime {
    adjust_end_date(&ProjectCalendar::new(working_days, holidays), start_date, original_end_date)
}
