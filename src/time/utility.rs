
const NO_LEAP_MONTH_DAYS: [u32; 12] = [
    31, 28, 31, 30, 31, 30,
    31, 31, 30, 31, 30, 31
];

#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

/// Number of days in `month0` (0 = January … 11 = December) of `year`,
/// `None` for a month index past December.
pub const fn days_in_month(month0: u32, year: i32) -> Option<u32> {
    if month0 >= 12 {
        None
    } else if month0 == 1 && is_leap_year(year) {
        Some(29)
    } else {
        Some(NO_LEAP_MONTH_DAYS[month0 as usize])
    }
}

/// The twelve month lengths of `year`, January first.
/// Every call hands out its own copy.
pub const fn month_days_array(year: i32) -> [u32; 12] {
    let mut month_days = NO_LEAP_MONTH_DAYS;
    if is_leap_year(year) {
        month_days[1] = 29;
    }
    month_days
}
