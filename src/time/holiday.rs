use chrono::{
    Datelike,
    Days,
    NaiveDate,
    NaiveDateTime,
    NaiveTime
};
use serde::Serialize;

/// A closed interval `[start_date, end_date]` of non-working time.
///
/// Containment is tested at full timestamp resolution, so day-level
/// holidays should be built from midnight-normalised values. A recurring
/// holiday keeps only its month/day: both bounds are re-anchored to
/// midnight in the year of the date under test.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Holiday {
    id: Option<String>,
    name: String,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    recurring: bool,
    description: Option<String>
}

/// Moves the month/day of `d` into `year` at midnight. A day that does not
/// exist in `year` (29 February) rolls over into the following month.
fn anchor_to_year(d: NaiveDateTime, year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, d.month(), 1)?
        .checked_add_days(Days::new((d.day() - 1) as u64))
        .map(|anchored| anchored.and_time(NaiveTime::MIN))
}

impl Holiday {
    pub fn new(name: impl Into<String>, start_date: NaiveDateTime, end_date: NaiveDateTime) -> Holiday {
        Holiday {
            id: None,
            name: name.into(),
            start_date,
            end_date,
            recurring: false,
            description: None
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Holiday {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Holiday {
        self.description = Some(description.into());
        self
    }

    /// Marks the holiday as repeating every year.
    pub fn recurring(mut self) -> Holiday {
        self.recurring = true;
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_date(&self) -> NaiveDateTime {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDateTime {
        self.end_date
    }

    pub fn is_recurring(&self) -> bool {
        self.recurring
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The interval this holiday covers in the year of `d`.
    fn interval_for(&self, d: NaiveDateTime) -> Option<(NaiveDateTime, NaiveDateTime)> {
        if self.recurring {
            let year = d.year();
            Some((anchor_to_year(self.start_date, year)?, anchor_to_year(self.end_date, year)?))
        } else {
            Some((self.start_date, self.end_date))
        }
    }

    pub fn contains(&self, d: NaiveDateTime) -> bool {
        self.interval_for(d)
            .is_some_and(|(start, end)| (d >= start) && (d <= end))
    }
}

pub fn is_holiday(d: NaiveDateTime, holidays: &[Holiday]) -> bool {
    holidays.iter().any(|holiday| holiday.contains(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn test_holidays() -> Vec<Holiday> {
        vec![
            Holiday::new("Christmas", at_midnight(2024, 12, 25), at_midnight(2024, 12, 25))
                .with_id("christmas")
                .recurring(),
            Holiday::new("New Year", at_midnight(2024, 1, 1), at_midnight(2024, 1, 1))
                .with_id("new-year")
                .recurring(),
            Holiday::new("Summer break", at_midnight(2024, 8, 10), at_midnight(2024, 8, 20))
                .with_id("summer-break")
        ]
    }

    #[test]
    fn single_day_holidays() {
        let holidays = test_holidays();
        assert!(is_holiday(at_midnight(2024, 12, 25), &holidays));
        assert!(is_holiday(at_midnight(2024, 1, 1), &holidays));
        assert!(!is_holiday(at_midnight(2024, 4, 25), &holidays));
    }

    #[test]
    fn multi_day_holiday_is_inclusive() {
        let holidays = test_holidays();
        for day in 10..=20 {
            assert!(is_holiday(at_midnight(2024, 8, day), &holidays), "day {}", day);
        }
        assert!(!is_holiday(at_midnight(2024, 8, 9), &holidays));
        assert!(!is_holiday(at_midnight(2024, 8, 21), &holidays));
    }

    #[test]
    fn non_recurring_holiday_is_fixed_to_its_year() {
        let holidays = test_holidays();
        assert!(!is_holiday(at_midnight(2025, 8, 15), &holidays));
    }

    #[test]
    fn recurring_holiday_is_re_anchored() {
        let holidays = vec![
            Holiday::new("Christmas", at_midnight(2023, 12, 25), at_midnight(2023, 12, 25)).recurring()
        ];
        assert!(is_holiday(at_midnight(2024, 12, 25), &holidays));
        assert!(is_holiday(at_midnight(2025, 12, 25), &holidays));
        assert!(!is_holiday(at_midnight(2025, 12, 26), &holidays));
    }

    #[test]
    fn comparison_uses_full_timestamp() {
        let holidays = test_holidays();
        let after_midnight = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap().and_hms_opt(9, 0, 0).unwrap();
        assert!(!is_holiday(after_midnight, &holidays));
        let inside_break = NaiveDate::from_ymd_opt(2024, 8, 20).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert!(is_holiday(inside_break, &holidays));
    }

    #[test]
    fn leap_day_recurring_holiday_rolls_to_march() {
        let holidays = vec![
            Holiday::new("Leap day", at_midnight(2024, 2, 29), at_midnight(2024, 2, 29)).recurring()
        ];
        assert!(is_holiday(at_midnight(2028, 2, 29), &holidays));
        assert!(is_holiday(at_midnight(2025, 3, 1), &holidays));
        assert!(!is_holiday(at_midnight(2025, 2, 28), &holidays));
    }

    #[test]
    fn empty_list_has_no_holidays() {
        assert!(!is_holiday(at_midnight(2024, 12, 25), &[]));
    }

    #[test]
    fn accessors_expose_the_fields() {
        let holiday = Holiday::new("Audit", at_midnight(2024, 3, 4), at_midnight(2024, 3, 5))
            .with_id("audit")
            .with_description("yearly audit");
        assert_eq!(holiday.id(), Some("audit"));
        assert_eq!(holiday.name(), "Audit");
        assert_eq!(holiday.description(), Some("yearly audit"));
        assert!(!holiday.is_recurring());
        assert_eq!(holiday.end_date(), at_midnight(2024, 3, 5));
    }
}
