use std::collections::HashMap;
use std::str::FromStr;

use serde::{
    Serialize,
    Deserialize
};
use thiserror::Error;

/// Names a locale table may localise.
///
/// The full name of May is keyed `maylong` because `may` is taken by the
/// abbreviation.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LocaleKey {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
    Sun, Mon, Tue, Wed, Thu, Fri, Sat,
    January, February, March, April, MayLong, June,
    July, August, September, October, November, December,
    Jan, Feb, Mar, Apr, May, Jun, Jul, Aug, Sep, Oct, Nov, Dec,
    Qtr
}

pub const ALL_LOCALE_KEYS: [LocaleKey; 39] = [
    LocaleKey::Sunday, LocaleKey::Monday, LocaleKey::Tuesday, LocaleKey::Wednesday,
    LocaleKey::Thursday, LocaleKey::Friday, LocaleKey::Saturday,
    LocaleKey::Sun, LocaleKey::Mon, LocaleKey::Tue, LocaleKey::Wed,
    LocaleKey::Thu, LocaleKey::Fri, LocaleKey::Sat,
    LocaleKey::January, LocaleKey::February, LocaleKey::March, LocaleKey::April,
    LocaleKey::MayLong, LocaleKey::June, LocaleKey::July, LocaleKey::August,
    LocaleKey::September, LocaleKey::October, LocaleKey::November, LocaleKey::December,
    LocaleKey::Jan, LocaleKey::Feb, LocaleKey::Mar, LocaleKey::Apr,
    LocaleKey::May, LocaleKey::Jun, LocaleKey::Jul, LocaleKey::Aug,
    LocaleKey::Sep, LocaleKey::Oct, LocaleKey::Nov, LocaleKey::Dec,
    LocaleKey::Qtr
];

const FULL_WEEKDAYS: [LocaleKey; 7] = [
    LocaleKey::Sunday, LocaleKey::Monday, LocaleKey::Tuesday, LocaleKey::Wednesday,
    LocaleKey::Thursday, LocaleKey::Friday, LocaleKey::Saturday
];

const SHORT_WEEKDAYS: [LocaleKey; 7] = [
    LocaleKey::Sun, LocaleKey::Mon, LocaleKey::Tue, LocaleKey::Wed,
    LocaleKey::Thu, LocaleKey::Fri, LocaleKey::Sat
];

const FULL_MONTHS: [LocaleKey; 12] = [
    LocaleKey::January, LocaleKey::February, LocaleKey::March, LocaleKey::April,
    LocaleKey::MayLong, LocaleKey::June, LocaleKey::July, LocaleKey::August,
    LocaleKey::September, LocaleKey::October, LocaleKey::November, LocaleKey::December
];

const SHORT_MONTHS: [LocaleKey; 12] = [
    LocaleKey::Jan, LocaleKey::Feb, LocaleKey::Mar, LocaleKey::Apr,
    LocaleKey::May, LocaleKey::Jun, LocaleKey::Jul, LocaleKey::Aug,
    LocaleKey::Sep, LocaleKey::Oct, LocaleKey::Nov, LocaleKey::Dec
];

impl LocaleKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocaleKey::Sunday => "sunday",
            LocaleKey::Monday => "monday",
            LocaleKey::Tuesday => "tuesday",
            LocaleKey::Wednesday => "wednesday",
            LocaleKey::Thursday => "thursday",
            LocaleKey::Friday => "friday",
            LocaleKey::Saturday => "saturday",
            LocaleKey::Sun => "sun",
            LocaleKey::Mon => "mon",
            LocaleKey::Tue => "tue",
            LocaleKey::Wed => "wed",
            LocaleKey::Thu => "thu",
            LocaleKey::Fri => "fri",
            LocaleKey::Sat => "sat",
            LocaleKey::January => "january",
            LocaleKey::February => "february",
            LocaleKey::March => "march",
            LocaleKey::April => "april",
            LocaleKey::MayLong => "maylong",
            LocaleKey::June => "june",
            LocaleKey::July => "july",
            LocaleKey::August => "august",
            LocaleKey::September => "september",
            LocaleKey::October => "october",
            LocaleKey::November => "november",
            LocaleKey::December => "december",
            LocaleKey::Jan => "jan",
            LocaleKey::Feb => "feb",
            LocaleKey::Mar => "mar",
            LocaleKey::Apr => "apr",
            LocaleKey::May => "may",
            LocaleKey::Jun => "jun",
            LocaleKey::Jul => "jul",
            LocaleKey::Aug => "aug",
            LocaleKey::Sep => "sep",
            LocaleKey::Oct => "oct",
            LocaleKey::Nov => "nov",
            LocaleKey::Dec => "dec",
            LocaleKey::Qtr => "qtr"
        }
    }

    /// English text used when a table has no entry for the key.
    pub fn english(&self) -> &'static str {
        match self {
            LocaleKey::Sunday => "Sunday",
            LocaleKey::Monday => "Monday",
            LocaleKey::Tuesday => "Tuesday",
            LocaleKey::Wednesday => "Wednesday",
            LocaleKey::Thursday => "Thursday",
            LocaleKey::Friday => "Friday",
            LocaleKey::Saturday => "Saturday",
            LocaleKey::Sun => "Sun",
            LocaleKey::Mon => "Mon",
            LocaleKey::Tue => "Tue",
            LocaleKey::Wed => "Wed",
            LocaleKey::Thu => "Thu",
            LocaleKey::Fri => "Fri",
            LocaleKey::Sat => "Sat",
            LocaleKey::January => "January",
            LocaleKey::February => "February",
            LocaleKey::March => "March",
            LocaleKey::April => "April",
            LocaleKey::MayLong => "May",
            LocaleKey::June => "June",
            LocaleKey::July => "July",
            LocaleKey::August => "August",
            LocaleKey::September => "September",
            LocaleKey::October => "October",
            LocaleKey::November => "November",
            LocaleKey::December => "December",
            LocaleKey::Jan => "Jan",
            LocaleKey::Feb => "Feb",
            LocaleKey::Mar => "Mar",
            LocaleKey::Apr => "Apr",
            LocaleKey::May => "May",
            LocaleKey::Jun => "Jun",
            LocaleKey::Jul => "Jul",
            LocaleKey::Aug => "Aug",
            LocaleKey::Sep => "Sep",
            LocaleKey::Oct => "Oct",
            LocaleKey::Nov => "Nov",
            LocaleKey::Dec => "Dec",
            LocaleKey::Qtr => "Qtr"
        }
    }

    /// `weekday0`: 0 = Sunday … 6 = Saturday.
    pub fn full_weekday(weekday0: u32) -> LocaleKey {
        FULL_WEEKDAYS[(weekday0 % 7) as usize]
    }

    pub fn short_weekday(weekday0: u32) -> LocaleKey {
        SHORT_WEEKDAYS[(weekday0 % 7) as usize]
    }

    /// `month0`: 0 = January … 11 = December.
    pub fn full_month(month0: u32) -> LocaleKey {
        FULL_MONTHS[(month0 % 12) as usize]
    }

    pub fn short_month(month0: u32) -> LocaleKey {
        SHORT_MONTHS[(month0 % 12) as usize]
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum LocaleError {
    #[error("unknown locale key '{0}'")]
    UnknownKey(String)
}

impl FromStr for LocaleKey {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_LOCALE_KEYS.iter()
            .find(|key| key.as_str() == s)
            .copied()
            .ok_or_else(|| LocaleError::UnknownKey(s.to_owned()))
    }
}

/// Localised weekday, month and quarter names, read by the date formatter.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "HashMap<String, String>", into = "HashMap<String, String>")]
pub struct LocaleTable {
    entries: HashMap<LocaleKey, String>
}

impl LocaleTable {
    pub fn new() -> LocaleTable {
        LocaleTable { entries: HashMap::new() }
    }

    pub fn english() -> LocaleTable {
        let mut table = LocaleTable::new();
        for key in ALL_LOCALE_KEYS {
            table.insert(key, key.english());
        }
        table
    }

    /// Builds a table from raw key names; every key must name a `LocaleKey`.
    pub fn try_from_map<I, K, V>(map: I) -> Result<LocaleTable, LocaleError>
        where I: IntoIterator<Item = (K, V)>,
              K: AsRef<str>,
              V: Into<String> {
        let mut table = LocaleTable::new();
        for (name, value) in map {
            let key: LocaleKey = name.as_ref().parse()?;
            table.insert(key, value);
        }
        Ok(table)
    }

    pub fn insert(&mut self, key: LocaleKey, value: impl Into<String>) {
        self.entries.insert(key, value.into());
    }

    pub fn get(&self, key: LocaleKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    /// Localised text for `key`, or its English name.
    pub fn get_or_english(&self, key: LocaleKey) -> &str {
        self.get(key).unwrap_or(key.english())
    }

    /// Lookup by raw name, lowercased first. Unknown names and empty entries
    /// yield `None`.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let key: LocaleKey = name.to_lowercase().parse().ok()?;
        self.get(key).filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<HashMap<String, String>> for LocaleTable {
    type Error = LocaleError;

    fn try_from(map: HashMap<String, String>) -> Result<Self, Self::Error> {
        LocaleTable::try_from_map(map)
    }
}

impl From<LocaleTable> for HashMap<String, String> {
    fn from(table: LocaleTable) -> Self {
        table.entries
            .into_iter()
            .map(|(key, value)| (key.as_str().to_owned(), value))
            .collect()
    }
}
