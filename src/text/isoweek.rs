use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

const DAYS_PER_WEEK: i64 = 7;

/// Week number counted from the Monday of the week holding 4 January,
/// which is always in week 1.
fn iso_week_of(date: NaiveDate) -> Option<u32> {
    let year = date.year();
    let key_day = NaiveDate::from_ymd_opt(year, 1, 4)?;
    let first_monday = key_day.checked_sub_days(Days::new(key_day.weekday().num_days_from_monday() as u64))?;
    let days_from_first_monday = (date - first_monday).num_days();
    let week = (days_from_first_monday + 1 + DAYS_PER_WEEK - 1).div_euclid(DAYS_PER_WEEK);

    if week <= 0 {
        // belongs to the last week of the previous year
        return iso_week_of(NaiveDate::from_ymd_opt(year - 1, 12, 31)?);
    }

    if week == 53 {
        let jan_1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let dec_31 = NaiveDate::from_ymd_opt(year, 12, 31)?;
        if jan_1.weekday() != Weekday::Thu && dec_31.weekday() != Weekday::Thu {
            return Some(1);
        }
    }
    Some(week as u32)
}

/// ISO-8601 week number of `d`.
pub fn get_iso_week<D>(d: D) -> u32
    where D: Datelike {
    iso_week_number(&d)
}

fn iso_week_number<D>(d: &D) -> u32
    where D: Datelike {
    NaiveDate::from_ymd_opt(d.year(), d.month(), d.day())
        .and_then(iso_week_of)
        .unwrap_or_else(|| d.iso_week().week())
}

/// `(iso_year, week, iso_weekday)` of `d`, with Monday = 1 … Sunday = 7.
///
/// The year is the calendar year corrected at the boundaries: early January
/// days in week 52/53 belong to the previous year, late December days in
/// week 1 to the next.
pub fn iso_week_date<D>(d: D) -> (i32, u32, u32)
    where D: Datelike {
    let week = iso_week_number(&d);
    let mut year = d.year();
    if week >= 52 && d.month() == 1 {
        year -= 1;
    }
    if week == 1 && d.month() == 12 {
        year += 1;
    }
    (year, week, d.weekday().number_from_monday())
}
