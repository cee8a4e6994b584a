//! Shared test fixtures.

use crate::engine::{CalendarEngine, GregorianEngine, HijriEngine, PersianEngine};
use crate::options::{CalendarOptions, SelectionMode};
use crate::registry::CalendarRegistry;
use crate::session::PickerSession;
use crate::types::LocalDate;
use crate::{AbsoluteDate, CalendarType};
use chrono::Weekday;

const MONDAY_FIRST_NAMES: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

pub fn date(year: i32, month: u8, day: u8) -> AbsoluteDate {
    AbsoluteDate::from_ymd(year, month, day).unwrap()
}

pub const fn gregorian() -> GregorianEngine {
    GregorianEngine
}

pub const fn persian() -> PersianEngine {
    PersianEngine
}

pub fn hijri() -> HijriEngine {
    HijriEngine::default()
}

pub fn options(calendar_type: CalendarType, selection_mode: SelectionMode) -> CalendarOptions {
    CalendarOptions::new(calendar_type, selection_mode)
}

/// A session from the built-in engines, fixed to `today`
pub fn session(options: CalendarOptions, today: AbsoluteDate) -> PickerSession {
    PickerSession::with_registry(options, &CalendarRegistry::with_builtins())
        .unwrap()
        .with_today(today)
}

/// Gregorian dates laid out in ISO weeks
#[derive(Debug)]
pub struct MondayFirstEngine;

impl CalendarEngine for MondayFirstEngine {
    fn calendar_type(&self) -> CalendarType {
        CalendarType::Custom("monday-first")
    }

    fn to_local(&self, date: AbsoluteDate) -> Option<LocalDate> {
        GregorianEngine.to_local(date)
    }

    fn from_local(&self, year: i32, month: u8, day: u8) -> Option<AbsoluteDate> {
        GregorianEngine.from_local(year, month, day)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        GregorianEngine.is_leap_year(year)
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        GregorianEngine.days_in_month(year, month)
    }

    fn first_weekday(&self) -> Weekday {
        Weekday::Mon
    }

    fn last_weekday(&self) -> Weekday {
        Weekday::Sun
    }

    fn month_names(&self) -> &'static [&'static str; 12] {
        GregorianEngine.month_names()
    }

    fn weekday_names(&self) -> &'static [&'static str; 7] {
        &MONDAY_FIRST_NAMES
    }
}
