use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MONTHS_PER_YEAR,
};
use crate::ParseError;
use crate::prelude::*;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A calendar-independent day in the proleptic Gregorian calendar.
///
/// This is the interchange value between calendar engines and the identity
/// of a grid cell. Two values are equal iff their year, month and day match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
#[display(fmt = "{_0}")]
pub struct AbsoluteDate(NaiveDate);

impl AbsoluteDate {
    /// Creates a date from Gregorian components, `None` if they don't form a valid date
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day)).map(Self)
    }

    /// The current local date
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Returns the wrapped chrono date
    #[inline]
    pub const fn naive(self) -> NaiveDate {
        self.0
    }

    /// Gregorian year
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Gregorian month, starting at 1
    pub fn month(self) -> u8 {
        narrow(self.0.month())
    }

    /// Gregorian day of month
    pub fn day(self) -> u8 {
        narrow(self.0.day())
    }

    /// Day of the week
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Day count where 0001-01-01 is day 1
    pub fn days_from_ce(self) -> i64 {
        i64::from(self.0.num_days_from_ce())
    }

    /// Inverse of [`Self::days_from_ce`], `None` outside chrono's supported range
    pub fn from_days_from_ce(days: i64) -> Option<Self> {
        i32::try_from(days)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .map(Self)
    }

    /// Shifts the date by a signed number of days
    pub fn add_days(self, days: i64) -> Option<Self> {
        self.days_from_ce()
            .checked_add(days)
            .and_then(Self::from_days_from_ce)
    }

    /// Signed number of days from `self` to `other`
    pub fn days_until(self, other: Self) -> i64 {
        other.days_from_ce() - self.days_from_ce()
    }
}

/// A date expressed in one calendar system.
///
/// Only calendar engines build these, so a `LocalDate` always names a day
/// that exists in its calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[display(fmt = "{}/{:02}/{:02}", year, month, day)]
pub struct LocalDate {
    year:    i32,
    month:   u8,
    day:     u8,
    weekday: Weekday,
}

impl LocalDate {
    pub(crate) const fn new(year: i32, month: u8, day: u8, weekday: Weekday) -> Self {
        Self {
            year,
            month,
            day,
            weekday,
        }
    }

    /// Year in the engine's calendar
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number, starting at 1
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of month, starting at 1
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Day of the week, shared by every calendar
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// `(year, month, day)`
    pub const fn parts(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// The date text with separators removed, read as an integer (`1403/05/25` -> `14030525`).
    /// Orders the same way as the dates themselves.
    pub fn ordinal(&self) -> i64 {
        i64::from(self.year) * 10_000 + i64::from(self.month) * 100 + i64::from(self.day)
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.parts().cmp(&other.parts())
    }
}

/// Outcome of turning calendar-local components into an [`AbsoluteDate`].
///
/// Invalid input doesn't fail: it resolves to today. The variant tells the
/// caller which of the two happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// The components named a real day in the calendar
    Exact(AbsoluteDate),
    /// The components were invalid and the current date was substituted
    FellBackToNow(AbsoluteDate),
}

impl Conversion {
    /// The resolved date, whichever way it was obtained
    pub const fn date(self) -> AbsoluteDate {
        match self {
            Self::Exact(date) | Self::FellBackToNow(date) => date,
        }
    }

    /// The components named a real day
    pub const fn is_exact(self) -> bool {
        matches!(self, Self::Exact(_))
    }

    /// The date only when the conversion was exact
    pub const fn exact(self) -> Option<AbsoluteDate> {
        match self {
            Self::Exact(date) => Some(date),
            Self::FellBackToNow(_) => None,
        }
    }
}

/// Splits canonical calendar text (`Y/M/D`) into its numeric components.
///
/// Only the shape is checked here; whether the components name a real day is
/// up to the calendar engine.
///
/// # Errors
/// Returns `ParseError::EmptyInput` for blank text and `ParseError::InvalidFormat`
/// unless the text has exactly three numeric components.
pub fn parse_date_text(text: &str) -> Result<(i32, u8, u8), ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidFormat(format!(
            "expected 3 '{DATE_SEPARATOR}'-separated components, found {}",
            parts.len()
        )));
    }

    let year = parts[0]
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidFormat(parts[0].to_owned()))?;
    let month = parts[1]
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(parts[1].to_owned()))?;
    let day = parts[2]
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(parts[2].to_owned()))?;

    Ok((year, month, day))
}

fn narrow(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

// Gregorian helpers

/// Gregorian leap rule: every fourth year, except centuries not divisible by 400
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in a Gregorian month, 0 for a month outside `1..=12`
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 0 || month > MONTHS_PER_YEAR {
        0
    } else if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_absolute_date_components() {
        let d = date(2024, 8, 15);
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), 8);
        assert_eq!(d.day(), 15);
        assert_eq!(d.weekday(), Weekday::Thu);
    }

    #[test]
    fn test_absolute_date_invalid() {
        assert!(AbsoluteDate::from_ymd(2023, 2, 29).is_none());
        assert!(AbsoluteDate::from_ymd(2024, 13, 1).is_none());
        assert!(AbsoluteDate::from_ymd(2024, 4, 31).is_none());
    }

    #[test]
    fn test_absolute_date_day_arithmetic() {
        let d = date(2024, 2, 28);
        assert_eq!(d.add_days(1), Some(date(2024, 2, 29)));
        assert_eq!(d.add_days(2), Some(date(2024, 3, 1)));
        assert_eq!(d.add_days(-59), Some(date(2023, 12, 31)));
        assert_eq!(date(2024, 8, 1).days_until(date(2024, 8, 31)), 30);
        assert_eq!(date(2024, 8, 31).days_until(date(2024, 8, 1)), -30);
    }

    #[test]
    fn test_absolute_date_days_from_ce() {
        assert_eq!(date(1, 1, 1).days_from_ce(), 1);
        assert_eq!(date(2024, 1, 1).days_from_ce(), 738_886);
        assert_eq!(AbsoluteDate::from_days_from_ce(738_886), Some(date(2024, 1, 1)));
        assert!(AbsoluteDate::from_days_from_ce(i64::MAX).is_none());
    }

    #[test]
    fn test_absolute_date_ordering() {
        assert!(date(2024, 8, 15) < date(2024, 8, 16));
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert_eq!(date(2024, 8, 15), date(2024, 8, 15));
    }

    #[test]
    fn test_absolute_date_display_and_serde() {
        let d = date(2024, 8, 5);
        assert_eq!(d.to_string(), "2024-08-05");

        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2024-08-05""#);
        let parsed: AbsoluteDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);
    }

    #[test]
    fn test_local_date_display_and_ordinal() {
        let local = LocalDate::new(1403, 5, 2, Weekday::Tue);
        assert_eq!(local.to_string(), "1403/05/02");
        assert_eq!(local.ordinal(), 14_030_502);
        assert_eq!(local.parts(), (1403, 5, 2));
    }

    #[test]
    fn test_local_date_accessors() {
        let local = LocalDate::new(1446, 2, 9, Weekday::Thu);
        assert_eq!(local.year(), 1446);
        assert_eq!(local.month(), 2);
        assert_eq!(local.day(), 9);
        assert_eq!(local.weekday(), Weekday::Thu);
    }

    #[test]
    fn test_local_date_ordering_matches_ordinal() {
        let a = LocalDate::new(1403, 1, 31, Weekday::Mon);
        let b = LocalDate::new(1403, 2, 1, Weekday::Tue);
        assert!(a < b);
        assert!(a.ordinal() < b.ordinal());
    }

    #[test]
    fn test_conversion_accessors() {
        let d = date(2024, 8, 15);
        assert_eq!(Conversion::Exact(d).date(), d);
        assert!(Conversion::Exact(d).is_exact());
        assert_eq!(Conversion::Exact(d).exact(), Some(d));

        assert_eq!(Conversion::FellBackToNow(d).date(), d);
        assert!(!Conversion::FellBackToNow(d).is_exact());
        assert_eq!(Conversion::FellBackToNow(d).exact(), None);
    }

    #[test]
    fn test_parse_date_text() {
        assert_eq!(parse_date_text("1403/05/25"), Ok((1403, 5, 25)));
        assert_eq!(parse_date_text(" 2024/8/5 "), Ok((2024, 8, 5)));
        assert_eq!(parse_date_text(""), Err(ParseError::EmptyInput));
        assert!(matches!(
            parse_date_text("2024-08-15"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_date_text("2024/08"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_date_text("2024/08/15/1"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_date_text("2024/xx/15"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12u8 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2024, 0), 0);
        assert_eq!(days_in_month(2024, 13), 0);
    }
}
