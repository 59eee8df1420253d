use std::{fmt, str::FromStr};

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ForecastError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTH_NAMES_PT_BR: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Calendar month key, rendered as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ForecastError> {
        if !(1..=12).contains(&month) {
            return Err(ForecastError::InvalidMonth(format!("{year}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of year, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Moves by whole months in either direction.
    pub fn shift(&self, months: i32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 + months;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Human-readable form such as `May 2025`.
    pub fn label(&self) -> String {
        self.label_for("en")
    }

    /// Month name in the given locale followed by the year. Portuguese
    /// locales (`pt`, `pt-BR`) get Portuguese names; anything else is English.
    pub fn label_for(&self, locale: &str) -> String {
        let language = locale.split(['-', '_']).next().unwrap_or_default();
        let names = if language.eq_ignore_ascii_case("pt") {
            &MONTH_NAMES_PT_BR
        } else {
            &MONTH_NAMES
        };
        format!("{} {}", names[(self.month - 1) as usize], self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ForecastError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ForecastError::InvalidMonth(value.to_string());
        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        YearMonth::new(year, month).map_err(|_| invalid())
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Adds calendar months to a date, clamping the day to the target month's length.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let target = YearMonth::from_date(date).shift(months);
    let day = date.day().min(days_in_month(target.year, target.month));
    NaiveDate::from_ymd_opt(target.year, target.month, day).unwrap_or(date)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next = YearMonth { year, month }.shift(1);
    match NaiveDate::from_ymd_opt(next.year, next.month, 1) {
        Some(first_next) => (first_next - Duration::days(1)).day(),
        None => 28,
    }
}

/// Lists `count` consecutive month keys starting at the month containing `start`.
pub fn generate_future_months(start: NaiveDate, count: usize) -> Vec<YearMonth> {
    let first = YearMonth::from_date(start);
    (0..count).map(|offset| first.shift(offset as i32)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn shift_rolls_over_year_boundaries() {
        let december = YearMonth::new(2025, 12).unwrap();
        assert_eq!(december.shift(1), YearMonth::new(2026, 1).unwrap());
        assert_eq!(december.shift(-12), YearMonth::new(2024, 12).unwrap());
        assert_eq!(
            YearMonth::new(2025, 1).unwrap().shift(-1),
            YearMonth::new(2024, 12).unwrap()
        );
    }

    #[test]
    fn shift_month_clamps_day() {
        assert_eq!(shift_month(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(shift_month(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_month(date(2025, 3, 15), -3), date(2024, 12, 15));
    }

    #[test]
    fn days_in_month_handles_december_and_leap_years() {
        assert_eq!(days_in_month(2025, 12), 31);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
    }

    #[test]
    fn parses_and_renders_keys() {
        let key: YearMonth = "2025-05".parse().unwrap();
        assert_eq!(key.to_string(), "2025-05");
        assert_eq!(key.label(), "May 2025");
        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("2025-5".parse::<YearMonth>().is_err());
        assert!("May 2025".parse::<YearMonth>().is_err());
    }

    #[test]
    fn labels_follow_the_locale() {
        let key = YearMonth::new(2025, 3).unwrap();
        assert_eq!(key.label_for("pt-BR"), "Março 2025");
        assert_eq!(key.label_for("pt_br"), "Março 2025");
        assert_eq!(key.label_for("en-US"), "March 2025");
        assert_eq!(key.label_for(""), "March 2025");
        assert_eq!(YearMonth::new(2026, 12).unwrap().label_for("pt"), "Dezembro 2026");
    }

    #[test]
    fn future_months_are_consecutive() {
        let months = generate_future_months(date(2025, 11, 30), 3);
        let keys: Vec<String> = months.iter().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["2025-11", "2025-12", "2026-01"]);
        assert!(generate_future_months(date(2025, 11, 30), 0).is_empty());
    }
}
