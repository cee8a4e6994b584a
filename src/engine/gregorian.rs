use super::CalendarEngine;
use crate::consts::{GREGORIAN_MONTH_NAMES, GREGORIAN_WEEKDAY_NAMES};
use crate::types::{self, LocalDate};
use crate::{AbsoluteDate, CalendarType};
use chrono::Weekday;

/// The proleptic Gregorian calendar. Local dates are the absolute dates themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct GregorianEngine;

impl CalendarEngine for GregorianEngine {
    fn calendar_type(&self) -> CalendarType {
        CalendarType::Gregorian
    }

    fn to_local(&self, date: AbsoluteDate) -> Option<LocalDate> {
        Some(LocalDate::new(
            date.year(),
            date.month(),
            date.day(),
            date.weekday(),
        ))
    }

    fn from_local(&self, year: i32, month: u8, day: u8) -> Option<AbsoluteDate> {
        AbsoluteDate::from_ymd(year, month, day)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        types::is_leap_year(year)
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        types::days_in_month(year, month)
    }

    fn first_weekday(&self) -> Weekday {
        Weekday::Sun
    }

    // Sunday, not Saturday.
    fn last_weekday(&self) -> Weekday {
        Weekday::Sun
    }

    fn month_names(&self) -> &'static [&'static str; 12] {
        &GREGORIAN_MONTH_NAMES
    }

    fn weekday_names(&self) -> &'static [&'static str; 7] {
        &GREGORIAN_WEEKDAY_NAMES
    }
}
