use std::fmt::Write;

use chrono::{
    Datelike,
    NaiveDateTime,
    Timelike
};

use crate::text::isoweek::{
    get_iso_week,
    iso_week_date
};
use crate::text::localetable::{
    LocaleKey,
    LocaleTable
};

/// Component tokens of the format pattern mini-language.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormatField {
    /// `d`
    Day,
    /// `dd`
    DayPadded,
    /// `day`, abbreviated weekday name
    ShortWeekday,
    /// `DAY`, full weekday name
    FullWeekday,
    /// `m`
    Month,
    /// `mm`
    MonthPadded,
    /// `mon`
    ShortMonth,
    /// `month`
    FullMonth,
    /// `yyyy`
    Year,
    /// `yy`
    ShortYear,
    /// `q`
    Quarter,
    /// `qq`, quarter prefixed by the localised `qtr`
    QuarterLabel,
    /// `h`, 12-hour clock
    Hour12,
    /// `hh`
    Hour12Padded,
    /// `H`, 24-hour clock
    Hour24,
    /// `HH`
    Hour24Padded,
    /// `mi`
    Minute,
    /// `MI`
    MinutePadded,
    /// `ss`
    Second,
    /// `SS`
    SecondPadded,
    /// `pm`
    Meridiem,
    /// `PM`
    MeridiemUpper,
    /// `w`
    IsoWeek,
    /// `ww`
    IsoWeekPadded,
    /// `week`, `{iso_year}-W{week}-{iso_weekday}`
    IsoWeekDate
}

impl FormatField {
    /// Case-sensitive: `MI` and `mi`, `DAY` and `day` are different fields.
    pub fn from_token(token: &str) -> Option<FormatField> {
        match token {
            "d" => Some(FormatField::Day),
            "dd" => Some(FormatField::DayPadded),
            "day" => Some(FormatField::ShortWeekday),
            "DAY" => Some(FormatField::FullWeekday),
            "m" => Some(FormatField::Month),
            "mm" => Some(FormatField::MonthPadded),
            "mon" => Some(FormatField::ShortMonth),
            "month" => Some(FormatField::FullMonth),
            "yyyy" => Some(FormatField::Year),
            "yy" => Some(FormatField::ShortYear),
            "q" => Some(FormatField::Quarter),
            "qq" => Some(FormatField::QuarterLabel),
            "h" => Some(FormatField::Hour12),
            "hh" => Some(FormatField::Hour12Padded),
            "H" => Some(FormatField::Hour24),
            "HH" => Some(FormatField::Hour24Padded),
            "mi" => Some(FormatField::Minute),
            "MI" => Some(FormatField::MinutePadded),
            "ss" => Some(FormatField::Second),
            "SS" => Some(FormatField::SecondPadded),
            "pm" => Some(FormatField::Meridiem),
            "PM" => Some(FormatField::MeridiemUpper),
            "w" => Some(FormatField::IsoWeek),
            "ww" => Some(FormatField::IsoWeekPadded),
            "week" => Some(FormatField::IsoWeekDate),
            _ => None
        }
    }
}

fn push_number(out: &mut String, value: u32, padded: bool) {
    if padded && value < 10 {
        out.push('0');
    }
    let _ = write!(out, "{}", value);
}

fn hour12(d: &NaiveDateTime) -> u32 {
    match d.hour() % 12 {
        0 => 12,
        h => h
    }
}

fn push_field(out: &mut String, field: FormatField, d: &NaiveDateTime, locale: &LocaleTable) {
    match field {
        FormatField::DayPadded => push_number(out, d.day(), true),
        FormatField::Day => push_number(out, d.day(), false),
        FormatField::ShortWeekday => {
            out.push_str(locale.get_or_english(LocaleKey::short_weekday(d.weekday().num_days_from_sunday())))
        },
        FormatField::FullWeekday => {
            out.push_str(locale.get_or_english(LocaleKey::full_weekday(d.weekday().num_days_from_sunday())))
        },
        FormatField::MonthPadded => push_number(out, d.month(), true),
        FormatField::Month => push_number(out, d.month(), false),
        FormatField::ShortMonth => out.push_str(locale.get_or_english(LocaleKey::short_month(d.month0()))),
        FormatField::FullMonth => out.push_str(locale.get_or_english(LocaleKey::full_month(d.month0()))),
        FormatField::Year => {
            let _ = write!(out, "{}", d.year());
        },
        FormatField::ShortYear => {
            out.extend(d.year().to_string().chars().skip(2).take(2));
        },
        FormatField::QuarterLabel => {
            out.push_str(locale.get_or_english(LocaleKey::Qtr));
            push_number(out, d.month0() / 3 + 1, false);
        },
        FormatField::Quarter => push_number(out, d.month0() / 3 + 1, false),
        FormatField::Hour12Padded => push_number(out, hour12(d), true),
        FormatField::Hour12 => push_number(out, hour12(d), false),
        FormatField::Hour24Padded => push_number(out, d.hour(), true),
        FormatField::Hour24 => push_number(out, d.hour(), false),
        FormatField::MinutePadded => push_number(out, d.minute(), true),
        FormatField::Minute => push_number(out, d.minute(), false),
        FormatField::SecondPadded => push_number(out, d.second(), true),
        FormatField::Second => push_number(out, d.second(), false),
        FormatField::Meridiem => out.push_str(if d.hour() < 12 { "am" } else { "pm" }),
        FormatField::MeridiemUpper => out.push_str(if d.hour() < 12 { "AM" } else { "PM" }),
        FormatField::IsoWeekPadded => push_number(out, get_iso_week(*d), true),
        FormatField::IsoWeek => push_number(out, get_iso_week(*d), false),
        FormatField::IsoWeekDate => {
            let (year, week, weekday) = iso_week_date(*d);
            let _ = write!(out, "{}-W{}-{}", year, week, weekday);
        }
    }
}

/// Renders `d` by substituting each token of `tokens`.
///
/// Recognised component tokens become numbers or localised names. Any
/// other token is looked up in `locale` by its lowercased text and
/// otherwise copied verbatim, which is how separators pass through.
/// Returns `None` when there is no date.
pub fn format_date_str<S>(d: Option<NaiveDateTime>, tokens: &[S], locale: &LocaleTable) -> Option<String>
    where S: AsRef<str> {
    let d = d?;
    let mut out = String::new();
    for token in tokens {
        let token = token.as_ref();
        match FormatField::from_token(token) {
            Some(field) => push_field(&mut out, field, &d, locale),
            None => out.push_str(locale.lookup(token).unwrap_or(token))
        }
    }
    Some(out)
}
