use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use crate::text::dateformatter::format_date_str;
use crate::text::dateparser::{
    coerce_date,
    parse_date_str
};
use crate::text::formattokenizer::parse_date_format_str;
use crate::text::localetable::LocaleTable;
use crate::time::calendar::projectcalendar::ProjectCalendar;
use crate::time::holiday::Holiday;
use crate::time::workingdays::WorkingDaysConfig;

const DEFAULT_DATE_FORMAT: &str = "yyyy-mm-dd";

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("holiday '{holiday}' has an invalid date: {value}")]
    InvalidDate {
        holiday: String,
        value: String
    }
}

fn default_locale() -> LocaleTable {
    LocaleTable::english()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_owned()
}

#[derive(Deserialize)]
struct HolidayJsonProp {
    #[serde(default)]
    id: Option<String>,
    name: String,
    start_date: serde_json::Value,
    end_date: serde_json::Value,
    #[serde(default)]
    recurring: bool,
    #[serde(default)]
    description: Option<String>
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    working_days: WorkingDaysConfig,
    #[serde(default)]
    holidays: Vec<HolidayJsonProp>,
    #[serde(default = "default_locale")]
    locale: LocaleTable,
    #[serde(default = "default_date_format")]
    date_format: String
}

fn date_from_json(holiday: &str, value: &serde_json::Value) -> Result<NaiveDateTime, ConfigurationError> {
    let coerced = match value {
        serde_json::Value::String(text) => coerce_date(text.as_str()),
        serde_json::Value::Number(number) => number.as_i64().and_then(|millis| coerce_date(millis)),
        _ => None
    };
    coerced.ok_or_else(|| ConfigurationError::InvalidDate {
        holiday: holiday.to_owned(),
        value: value.to_string()
    })
}

fn holiday_from_json(json_prop: HolidayJsonProp) -> Result<Holiday, ConfigurationError> {
    let start_date = date_from_json(&json_prop.name, &json_prop.start_date)?;
    let end_date = date_from_json(&json_prop.name, &json_prop.end_date)?;
    let mut holiday = Holiday::new(json_prop.name, start_date, end_date);
    if let Some(id) = json_prop.id {
        holiday = holiday.with_id(id);
    }
    if let Some(description) = json_prop.description {
        holiday = holiday.with_description(description);
    }
    if json_prop.recurring {
        holiday = holiday.recurring();
    }
    Ok(holiday)
}

/// Calendar settings of a project: weekly pattern, holidays, locale and the
/// date format used for display and parsing.
#[derive(Debug, Clone)]
pub struct Configuration {
    working_days: WorkingDaysConfig,
    holidays: Vec<Holiday>,
    locale: LocaleTable,
    date_format: String
}

impl Configuration {
    pub fn new(working_days: WorkingDaysConfig,
               holidays: Vec<Holiday>,
               locale: LocaleTable,
               date_format: impl Into<String>) -> Configuration {
        Configuration {
            working_days,
            holidays,
            locale,
            date_format: date_format.into()
        }
    }

    pub fn from_json_str(text: &str) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(text)?;
        Configuration::from_json_prop(json_prop)
    }

    #[tracing::instrument(skip_all, fields(path = %file_path.as_ref().display()))]
    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Configuration::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration, ConfigurationError> {
        let holidays = json_prop.holidays
            .into_iter()
            .map(holiday_from_json)
            .collect::<Result<Vec<Holiday>, ConfigurationError>>()?;
        tracing::debug!(holidays = holidays.len(),
                        locale_entries = json_prop.locale.len(),
                        date_format = %json_prop.date_format,
                        "configuration loaded");
        Ok(Configuration::new(json_prop.working_days, holidays, json_prop.locale, json_prop.date_format))
    }

    pub fn working_days(&self) -> &WorkingDaysConfig {
        &self.working_days
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn locale(&self) -> &LocaleTable {
        &self.locale
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn calendar(&self) -> ProjectCalendar<'_> {
        ProjectCalendar::new(&self.working_days, &self.holidays)
    }

    pub fn format_tokens(&self) -> Vec<String> {
        parse_date_format_str(&self.date_format)
    }

    pub fn format_date(&self, d: Option<NaiveDateTime>) -> Option<String> {
        format_date_str(d, &self.format_tokens(), &self.locale)
    }

    /// Parses `text` with the configured date format as the format name.
    pub fn parse_date(&self, text: &str) -> NaiveDateTime {
        parse_date_str(text, &self.date_format)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(WorkingDaysConfig::default(), Vec::new(), default_locale(), default_date_format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::text::localetable::LocaleKey;
    use crate::time::calendar::workingcalendar::WorkingCalendar;
    use crate::time::workingdays::DEFAULT_WORKING_DAYS;

    fn at_midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn empty_object_uses_defaults() {
        let config = Configuration::from_json_str("{}").unwrap();
        assert_eq!(config.working_days(), &DEFAULT_WORKING_DAYS);
        assert!(config.holidays().is_empty());
        assert_eq!(config.locale(), &LocaleTable::english());
        assert_eq!(config.date_format(), "yyyy-mm-dd");
    }

    #[test]
    fn parses_holidays_with_mixed_date_values() {
        let json = r#"{
            "holidays": [
                { "id": "xmas", "name": "Christmas", "start_date": "2023-12-25",
                  "end_date": "2023-12-25", "recurring": true },
                { "name": "Epoch", "start_date": 0, "end_date": "1970-01-01T12:00:00",
                  "description": "start of time" }
            ]
        }"#;
        let config = Configuration::from_json_str(json).unwrap();
        assert_eq!(config.holidays().len(), 2);
        let christmas = &config.holidays()[0];
        assert_eq!(christmas.id(), Some("xmas"));
        assert!(christmas.is_recurring());
        assert!(config.calendar().is_holiday(at_midnight(2026, 12, 25)));
        assert_eq!(config.holidays()[1].description(), Some("start of time"));
        assert_eq!(config.holidays()[1].start_date(), at_midnight(1970, 1, 1));
    }

    #[test]
    fn invalid_holiday_date_is_reported() {
        let json = r#"{ "holidays": [ { "name": "Broken", "start_date": "soon", "end_date": "2024-01-01" } ] }"#;
        match Configuration::from_json_str(json) {
            Err(ConfigurationError::InvalidDate { holiday, value }) => {
                assert_eq!(holiday, "Broken");
                assert_eq!(value, "\"soon\"");
            },
            other => panic!("unexpected result: {:?}", other)
        }
    }

    #[test]
    fn unknown_locale_key_is_a_parse_error() {
        let json = r#"{ "locale": { "fortnight": "x" } }"#;
        assert!(matches!(Configuration::from_json_str(json), Err(ConfigurationError::Json(_))));
    }

    #[test]
    fn formats_and_parses_with_configured_pattern() {
        let json = r#"{ "locale": { "jan": "gen" }, "date_format": "dd/mm/yyyy" }"#;
        let config = Configuration::from_json_str(json).unwrap();
        assert_eq!(config.locale().get(LocaleKey::Jan), Some("gen"));
        assert_eq!(config.format_tokens(), vec!["dd", "/", "mm", "/", "yyyy"]);
        assert_eq!(config.format_date(Some(at_midnight(2024, 4, 5))), Some("05/04/2024".to_owned()));
        assert_eq!(config.format_date(None), None);
        assert_eq!(config.parse_date("05/04/2024"), at_midnight(2024, 4, 5));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Configuration::from_reader("/nonexistent/plancal/config.json");
        assert!(matches!(result, Err(ConfigurationError::Io(_))));
    }
}
