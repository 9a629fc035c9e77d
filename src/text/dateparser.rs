use chrono::{
    DateTime,
    Local,
    NaiveDate,
    NaiveDateTime,
    NaiveTime,
    TimeDelta
};

const MIN_DATE_STR_LEN: usize = 10;
const MIN_DATE_PARTS: usize = 3;

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M"
];

const DATE_FORMATS: [&str; 3] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y"
];

/// A value that may be turned into a date.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum DateValue {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Text(String),
    /// Milliseconds since 1970-01-01T00:00:00.
    Timestamp(i64)
}

impl From<NaiveDateTime> for DateValue {
    fn from(d: NaiveDateTime) -> Self {
        DateValue::DateTime(d)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(d: NaiveDate) -> Self {
        DateValue::Date(d)
    }
}

impl From<&str> for DateValue {
    fn from(text: &str) -> Self {
        DateValue::Text(text.to_owned())
    }
}

impl From<String> for DateValue {
    fn from(text: String) -> Self {
        DateValue::Text(text)
    }
}

impl From<i64> for DateValue {
    fn from(millis: i64) -> Self {
        DateValue::Timestamp(millis)
    }
}

fn parse_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(d) = DateTime::parse_from_rfc3339(text) {
        return Some(d.naive_local());
    }
    DATE_TIME_FORMATS.iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS.iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

/// Turns `value` into a date. A date-time is returned as is, a date lands on
/// midnight; text and timestamps that do not describe a valid date give
/// `None`.
pub fn coerce_date(value: impl Into<DateValue>) -> Option<NaiveDateTime> {
    let coerced = match value.into() {
        DateValue::DateTime(d) => return Some(d),
        DateValue::Date(d) => return Some(d.and_time(NaiveTime::MIN)),
        DateValue::Text(text) => parse_text(&text),
        DateValue::Timestamp(millis) => DateTime::from_timestamp_millis(millis).map(|d| d.naive_utc())
    };
    if coerced.is_none() {
        tracing::debug!("value does not coerce to a date");
    }
    coerced
}

/// Field order of the numeric date strings `parse_date_str` understands.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DateOrder {
    /// `mm/dd/yyyy`
    MonthDayYear,
    /// `dd/mm/yyyy`
    DayMonthYear,
    /// `yyyy-mm-dd`
    YearMonthDay,
    /// `yyyy-mm-dd HH:MI:SS`
    YearMonthDayTime
}

impl DateOrder {
    pub fn from_name(name: &str) -> Option<DateOrder> {
        match name {
            "mm/dd/yyyy" => Some(DateOrder::MonthDayYear),
            "dd/mm/yyyy" => Some(DateOrder::DayMonthYear),
            "yyyy-mm-dd" => Some(DateOrder::YearMonthDay),
            "yyyy-mm-dd HH:MI:SS" => Some(DateOrder::YearMonthDayTime),
            _ => None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DateOrder::MonthDayYear => "mm/dd/yyyy",
            DateOrder::DayMonthYear => "dd/mm/yyyy",
            DateOrder::YearMonthDay => "yyyy-mm-dd",
            DateOrder::YearMonthDayTime => "yyyy-mm-dd HH:MI:SS"
        }
    }
}

/// Builds a date-time from possibly overflowing fields: month 13 is January
/// of the next year, day 0 the last day of the previous month, and so on.
fn normalized_date_time(year: i64,
                        month: i64,
                        day: i64,
                        hour: i64,
                        minute: i64,
                        second: i64) -> Option<NaiveDateTime> {
    let total_months = year.checked_mul(12)?.checked_add(month - 1)?;
    let first_of_month = NaiveDate::from_ymd_opt(
        i32::try_from(total_months.div_euclid(12)).ok()?,
        total_months.rem_euclid(12) as u32 + 1,
        1
    )?;
    let offset = TimeDelta::try_days(day - 1)?
        .checked_add(&TimeDelta::try_hours(hour)?)?
        .checked_add(&TimeDelta::try_minutes(minute)?)?
        .checked_add(&TimeDelta::try_seconds(second)?)?;
    first_of_month.and_time(NaiveTime::MIN).checked_add_signed(offset)
}

fn split_numeric_parts(text: &str) -> Option<Vec<i64>> {
    text.split(|c: char| !c.is_ascii_digit())
        .map(|part| if part.is_empty() { Some(0) } else { part.parse::<i64>().ok() })
        .collect()
}

fn parse_with_order(text: &str, order: DateOrder) -> Option<NaiveDateTime> {
    let mut parts = split_numeric_parts(text)?;
    if text.chars().count() < MIN_DATE_STR_LEN || parts.len() < MIN_DATE_PARTS {
        return None;
    }
    if parts.len() < 6 {
        parts.resize(6, 0);
    }

    match order {
        DateOrder::MonthDayYear => normalized_date_time(parts[2], parts[0], parts[1], parts[3], parts[4], 0),
        DateOrder::DayMonthYear => normalized_date_time(parts[2], parts[1], parts[0], parts[3], parts[4], 0),
        DateOrder::YearMonthDay => normalized_date_time(parts[0], parts[1], parts[2], parts[3], parts[4], 0),
        DateOrder::YearMonthDayTime => normalized_date_time(parts[0], parts[1], parts[2], parts[3], parts[4], parts[5])
    }
}

/// Reads a numeric date string under one of the format names of
/// `DateOrder`. Hours and minutes are taken when present; seconds only for
/// `yyyy-mm-dd HH:MI:SS`.
///
/// Text shorter than ten characters, fewer than three numeric parts, an
/// unknown format name or a date out of range all give the current local
/// time.
pub fn parse_date_str(text: &str, format_name: &str) -> NaiveDateTime {
    let parsed = DateOrder::from_name(format_name)
        .and_then(|order| parse_with_order(text, order));
    match parsed {
        Some(d) => d,
        None => {
            tracing::debug!(text, format_name, "date string not parsed, using current time");
            Local::now().naive_local()
        }
    }
}
