use chrono::{
    Datelike,
    NaiveDateTime,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

/// Weekly working pattern, one independent flag per weekday.
///
/// No flag is required to be set: an all-`false` pattern is legal and makes
/// every day non-working.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct WorkingDaysConfig {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool
}

/// Monday to Friday.
pub const DEFAULT_WORKING_DAYS: WorkingDaysConfig = WorkingDaysConfig {
    monday: true,
    tuesday: true,
    wednesday: true,
    thursday: true,
    friday: true,
    saturday: false,
    sunday: false
};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun
];

impl WorkingDaysConfig {
    pub const fn new(monday: bool,
                     tuesday: bool,
                     wednesday: bool,
                     thursday: bool,
                     friday: bool,
                     saturday: bool,
                     sunday: bool) -> WorkingDaysConfig {
        WorkingDaysConfig { monday, tuesday, wednesday, thursday, friday, saturday, sunday }
    }

    #[inline]
    pub fn is_working_weekday(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Sun => self.sunday,
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday
        }
    }

    /// Weekly pattern only; holidays are not consulted.
    #[inline]
    pub fn is_working_day(&self, d: NaiveDateTime) -> bool {
        self.is_working_weekday(d.weekday())
    }

    pub fn has_working_weekday(&self) -> bool {
        WEEK.iter().any(|&weekday| self.is_working_weekday(weekday))
    }

    /// Working weekdays, Monday first.
    pub fn working_weekdays(&self) -> Vec<Weekday> {
        WEEK.iter()
            .copied()
            .filter(|&weekday| self.is_working_weekday(weekday))
            .collect()
    }
}

impl Default for WorkingDaysConfig {
    fn default() -> Self {
        DEFAULT_WORKING_DAYS
    }
}

pub fn is_working_day(d: NaiveDateTime, working_days: &WorkingDaysConfig) -> bool {
    working_days.is_working_day(d)
}
