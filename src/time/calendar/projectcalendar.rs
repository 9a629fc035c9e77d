use chrono::NaiveDateTime;

use crate::time::calendar::workingcalendar::WorkingCalendar;
use crate::time::holiday::{
    self,
    Holiday
};
use crate::time::workingdays::WorkingDaysConfig;

/// Working calendar of a project: a weekly pattern plus a list of holidays,
/// both borrowed from the caller.
#[derive(Clone, Copy)]
pub struct ProjectCalendar<'a> {
    working_days: &'a WorkingDaysConfig,
    holidays: &'a [Holiday]
}

impl<'a> ProjectCalendar<'a> {
    pub fn new(working_days: &'a WorkingDaysConfig, holidays: &'a [Holiday]) -> ProjectCalendar<'a> {
        ProjectCalendar { working_days, holidays }
    }

    pub fn working_days(&self) -> &'a WorkingDaysConfig {
        self.working_days
    }

    pub fn holidays(&self) -> &'a [Holiday] {
        self.holidays
    }
}

impl WorkingCalendar for ProjectCalendar<'_> {
    #[inline]
    fn is_working_day(&self, d: NaiveDateTime) -> bool {
        self.working_days.is_working_day(d)
    }

    fn is_holiday(&self, d: NaiveDateTime) -> bool {
        holiday::is_holiday(d, self.holidays)
    }

    fn has_working_weekday(&self) -> bool {
        self.working_days.has_working_weekday()
    }
}

pub fn is_non_working_day(d: NaiveDateTime,
                          working_days: &WorkingDaysConfig,
                          holidays: &[Holiday]) -> bool {
    ProjectCalendar::new(working_days, holidays).is_non_working_day(d)
}

pub fn count_non_working_days(start_date: NaiveDateTime,
                              end_date: NaiveDateTime,
                              working_days: &WorkingDaysConfig,
                              holidays: &[Holiday]) -> u32 {
    ProjectCalendar::new(working_days, holidays).count_non_working_days(start_date, end_date)
}

pub fn add_working_days(start_date: NaiveDateTime,
                        n: i32,
                        working_days: &WorkingDaysConfig,
                        holidays: &[Holiday]) -> NaiveDateTime {
    ProjectCalendar::new(working_days, holidays).add_working_days(start_date, n)
}

pub fn count_working_days_in_period(start_date: NaiveDateTime,
                                    end_date: NaiveDateTime,
                                    working_days: &WorkingDaysConfig,
                                    holidays: &[Holiday]) -> u32 {
    ProjectCalendar::new(working_days, holidays).count_working_days_in_period(start_date, end_date)
}
