use chrono::{
    Datelike,
    Days,
    Local,
    NaiveDate,
    NaiveDateTime,
    NaiveTime,
    TimeDelta,
    Timelike,
    Weekday
};

use crate::time::displayrange::granularity::Granularity;
use crate::time::displayrange::scheduleditem::ScheduledItem;
use crate::time::utility::days_in_month;

const ONE_DAY: Days = Days::new(1);
const HOURS_PER_BLOCK: u32 = 6;

fn one_hour() -> TimeDelta {
    TimeDelta::hours(1)
}

fn at_midnight(d: NaiveDate) -> NaiveDateTime {
    d.and_time(NaiveTime::MIN)
}

fn quarter_start_month0(d: NaiveDate) -> u32 {
    (d.month0() / 3) * 3
}

fn previous_weekday(d: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let mut current = d.checked_sub_days(ONE_DAY)?;
    while current.weekday() != weekday {
        current = current.checked_sub_days(ONE_DAY)?;
    }
    Some(current)
}

fn next_weekday(d: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let mut current = d.checked_add_days(ONE_DAY)?;
    while current.weekday() != weekday {
        current = current.checked_add_days(ONE_DAY)?;
    }
    Some(current)
}

fn end_of_month(year: i32, month0: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month0 + 1, days_in_month(month0, year)?)
}

fn snap_down(d: NaiveDateTime, granularity: Granularity) -> Option<NaiveDateTime> {
    let date = d.date();
    match granularity {
        Granularity::Day | Granularity::Week => {
            previous_weekday(date, Weekday::Mon).map(at_midnight)
        },
        Granularity::Month => {
            date.with_day(1).map(at_midnight)
        },
        Granularity::Quarter => {
            NaiveDate::from_ymd_opt(date.year(), quarter_start_month0(date) + 1, 1).map(at_midnight)
        },
        Granularity::Hour => {
            let mut current = d.checked_sub_signed(one_hour())?;
            while current.hour() % HOURS_PER_BLOCK != 0 {
                current = current.checked_sub_signed(one_hour())?;
            }
            current.date().and_hms_opt(current.hour(), 0, 0)
        }
    }
}

fn snap_up(d: NaiveDateTime, granularity: Granularity) -> Option<NaiveDateTime> {
    let date = d.date();
    match granularity {
        Granularity::Day | Granularity::Week => {
            next_weekday(date, Weekday::Sun).map(at_midnight)
        },
        Granularity::Month => {
            end_of_month(date.year(), date.month0()).map(at_midnight)
        },
        Granularity::Quarter => {
            end_of_month(date.year(), quarter_start_month0(date) + 2).map(at_midnight)
        },
        Granularity::Hour => {
            let mut current = d.checked_add_signed(one_hour())?;
            while current.hour() % HOURS_PER_BLOCK != HOURS_PER_BLOCK - 1 {
                current = current.checked_add_signed(one_hour())?;
            }
            Some(current)
        }
    }
}

/// Earliest start (or planned start) of `items`, snapped down to the
/// previous boundary of `granularity`.
///
/// `floor` seeds the search instead of the first item. Without items the
/// result is `floor` as given, or the current local time.
pub fn get_min_date<T>(items: &[T],
                       granularity: Granularity,
                       floor: Option<NaiveDateTime>) -> NaiveDateTime
    where T: ScheduledItem {
    let Some(first) = items.first() else {
        tracing::debug!(%granularity, "no items for min date, using fallback");
        return floor.unwrap_or_else(|| Local::now().naive_local());
    };

    let mut min_date = floor.unwrap_or_else(|| first.start());
    for item in items.iter() {
        min_date = min_date.min(item.start());
        if let Some(plan_start) = item.plan_start() {
            min_date = min_date.min(plan_start);
        }
    }

    snap_down(min_date, granularity).unwrap_or(min_date)
}

/// Latest end (or planned end) of `items`, snapped up to the next boundary
/// of `granularity`.
///
/// `ceiling` seeds the search instead of the first item. Without items the
/// result is `ceiling` as given, or the current local time.
pub fn get_max_date<T>(items: &[T],
                       granularity: Granularity,
                       ceiling: Option<NaiveDateTime>) -> NaiveDateTime
    where T: ScheduledItem {
    let Some(first) = items.first() else {
        tracing::debug!(%granularity, "no items for max date, using fallback");
        return ceiling.unwrap_or_else(|| Local::now().naive_local());
    };

    let mut max_date = ceiling.unwrap_or_else(|| first.end());
    for item in items.iter() {
        max_date = max_date.max(item.end());
        if let Some(plan_end) = item.plan_end() {
            max_date = max_date.max(plan_end);
        }
    }

    snap_up(max_date, granularity).unwrap_or(max_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Task {
        start: NaiveDateTime,
        end: NaiveDateTime,
        plan_start: Option<NaiveDateTime>,
        plan_end: Option<NaiveDateTime>
    }

    impl ScheduledItem for Task {
        fn start(&self) -> NaiveDateTime {
            self.start
        }

        fn end(&self) -> NaiveDateTime {
            self.end
        }

        fn plan_start(&self) -> Option<NaiveDateTime> {
            self.plan_start
        }

        fn plan_end(&self) -> Option<NaiveDateTime> {
            self.plan_end
        }
    }

    fn dt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn task(start: NaiveDateTime, end: NaiveDateTime) -> Task {
        Task { start, end, plan_start: None, plan_end: None }
    }

    #[test]
    fn day_and_week_snap_to_monday_and_sunday() {
        let items = vec![task(dt(2024, 4, 24, 10, 0), dt(2024, 4, 25, 16, 0))];
        for granularity in [Granularity::Day, Granularity::Week] {
            assert_eq!(get_min_date(&items, granularity, None), dt(2024, 4, 22, 0, 0));
            assert_eq!(get_max_date(&items, granularity, None), dt(2024, 4, 28, 0, 0));
        }
    }

    #[test]
    fn day_snap_always_moves_outward() {
        // Monday start, Sunday end
        let items = vec![task(dt(2024, 4, 22, 0, 0), dt(2024, 4, 28, 0, 0))];
        assert_eq!(get_min_date(&items, Granularity::Day, None), dt(2024, 4, 15, 0, 0));
        assert_eq!(get_max_date(&items, Granularity::Day, None), dt(2024, 5, 5, 0, 0));
    }

    #[test]
    fn month_snaps_to_month_bounds() {
        let items = vec![task(dt(2024, 3, 10, 9, 0), dt(2024, 2, 10, 9, 0))];
        assert_eq!(get_min_date(&items, Granularity::Month, None), dt(2024, 3, 1, 0, 0));
        assert_eq!(get_max_date(&items, Granularity::Month, None), dt(2024, 2, 29, 0, 0));
    }

    #[test]
    fn quarter_snaps_to_quarter_bounds() {
        let items = vec![
            task(dt(2024, 5, 20, 0, 0), dt(2024, 5, 21, 0, 0)),
            task(dt(2024, 8, 1, 0, 0), dt(2024, 11, 2, 0, 0))
        ];
        assert_eq!(get_min_date(&items, Granularity::Quarter, None), dt(2024, 4, 1, 0, 0));
        assert_eq!(get_max_date(&items, Granularity::Quarter, None), dt(2024, 12, 31, 0, 0));
        assert_eq!(get_max_date(&items[..1], Granularity::Quarter, None), dt(2024, 6, 30, 0, 0));
    }

    #[test]
    fn hour_snaps_to_six_hour_blocks() {
        let items = vec![task(dt(2024, 4, 24, 10, 25), dt(2024, 4, 24, 11, 25))];
        assert_eq!(get_min_date(&items, Granularity::Hour, None), dt(2024, 4, 24, 6, 0));
        assert_eq!(get_max_date(&items, Granularity::Hour, None), dt(2024, 4, 24, 17, 25));

        let items = vec![task(dt(2024, 4, 24, 12, 0), dt(2024, 4, 24, 23, 10))];
        assert_eq!(get_min_date(&items, Granularity::Hour, None), dt(2024, 4, 24, 6, 0));
        assert_eq!(get_max_date(&items, Granularity::Hour, None), dt(2024, 4, 25, 5, 10));
    }

    #[test]
    fn planned_dates_widen_the_range() {
        let items = vec![
            Task {
                start: dt(2024, 4, 24, 0, 0),
                end: dt(2024, 4, 25, 0, 0),
                plan_start: Some(dt(2024, 4, 10, 0, 0)),
                plan_end: Some(dt(2024, 5, 8, 0, 0))
            },
            task(dt(2024, 4, 20, 0, 0), dt(2024, 4, 30, 0, 0))
        ];
        assert_eq!(get_min_date(&items, Granularity::Week, None), dt(2024, 4, 8, 0, 0));
        assert_eq!(get_max_date(&items, Granularity::Week, None), dt(2024, 5, 12, 0, 0));
    }

    #[test]
    fn floor_and_ceiling_seed_the_search() {
        let items = vec![task(dt(2024, 4, 24, 0, 0), dt(2024, 4, 25, 0, 0))];
        let floor = Some(dt(2024, 3, 15, 0, 0));
        let ceiling = Some(dt(2024, 7, 15, 0, 0));
        assert_eq!(get_min_date(&items, Granularity::Month, floor), dt(2024, 3, 1, 0, 0));
        assert_eq!(get_max_date(&items, Granularity::Month, ceiling), dt(2024, 7, 31, 0, 0));
        // a seed inside the range is passed by the items
        let late_floor = Some(dt(2024, 6, 1, 0, 0));
        assert_eq!(get_min_date(&items, Granularity::Month, late_floor), dt(2024, 4, 1, 0, 0));
    }

    #[test]
    fn empty_items_fall_back_to_seed_unchanged() {
        let items: Vec<Task> = Vec::new();
        let floor = dt(2024, 4, 24, 10, 25);
        assert_eq!(get_min_date(&items, Granularity::Week, Some(floor)), floor);
        assert_eq!(get_max_date(&items, Granularity::Week, Some(floor)), floor);
    }

    #[test]
    fn empty_items_without_seed_use_now() {
        let items: Vec<Task> = Vec::new();
        let before = Local::now().naive_local();
        let min_date = get_min_date(&items, Granularity::Day, None);
        let after = Local::now().naive_local();
        assert!(min_date >= before && min_date <= after);
    }

    #[test]
    fn accepts_borrowed_items() {
        let a = task(dt(2024, 1, 10, 0, 0), dt(2024, 1, 11, 0, 0));
        let b = task(dt(2024, 2, 10, 0, 0), dt(2024, 2, 11, 0, 0));
        let items = vec![&a, &b];
        assert_eq!(get_min_date(&items, Granularity::Month, None), dt(2024, 1, 1, 0, 0));
        assert_eq!(get_max_date(&items, Granularity::Month, None), dt(2024, 2, 29, 0, 0));
    }
}
