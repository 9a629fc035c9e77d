use chrono::{
    Days,
    NaiveDateTime
};

const ONE_DAY: Days = Days::new(1);

/// Calendar days from `start_date` towards `end_date`, one day apart,
/// keeping the time of day of `start_date`.
#[derive(Clone, Copy)]
pub struct RangeOfDates {
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    inclusive: bool
}

impl RangeOfDates {
    /// `[start_date, end_date]`
    pub fn inclusive(start_date: NaiveDateTime, end_date: NaiveDateTime) -> RangeOfDates {
        RangeOfDates { start_date, end_date, inclusive: true }
    }

    /// `[start_date, end_date)`
    pub fn half_open(start_date: NaiveDateTime, end_date: NaiveDateTime) -> RangeOfDates {
        RangeOfDates { start_date, end_date, inclusive: false }
    }

    pub fn start_date(&self) -> NaiveDateTime {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDateTime {
        self.end_date
    }

    pub fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    pub fn contain(&self, d: NaiveDateTime) -> bool {
        if self.inclusive {
            (d >= self.start_date) && (d <= self.end_date)
        } else {
            (d >= self.start_date) && (d < self.end_date)
        }
    }

    pub fn iter(&self) -> RangeOfDatesIterator {
        RangeOfDatesIterator {
            range_of_dates: *self,
            current: Some(self.start_date)
        }
    }
}

impl IntoIterator for RangeOfDates {
    type Item = NaiveDateTime;
    type IntoIter = RangeOfDatesIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct RangeOfDatesIterator {
    range_of_dates: RangeOfDates,
    current: Option<NaiveDateTime>
}

impl Iterator for RangeOfDatesIterator {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        let d = self.current?;
        if self.range_of_dates.contain(d) {
            self.current = d.checked_add_days(ONE_DAY);
            Some(d)
        } else {
            self.current = None;
            None
        }
    }
}
