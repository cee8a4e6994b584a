//! Calendar engines: conversion between [`AbsoluteDate`] and a calendar's
//! own year/month/day, plus the arithmetic and labels each calendar needs.

mod gregorian;
mod hijri;
mod persian;

pub use gregorian::GregorianEngine;
pub use hijri::HijriEngine;
pub use persian::PersianEngine;

use crate::consts::{DAYS_PER_WEEK, MIN_DAY, MONTHS_PER_YEAR};
use crate::types::{Conversion, LocalDate, parse_date_text};
use crate::{AbsoluteDate, CalendarType};
use chrono::Weekday;
use std::fmt::Debug;

/// Weekdays in `num_days_from_sunday` order
const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// One calendar system.
///
/// Implementors supply the strict conversions, leap rules and label tables;
/// everything else is derived from those. Engines hold no mutable state and
/// are shared between sessions.
pub trait CalendarEngine: Send + Sync + Debug {
    fn calendar_type(&self) -> CalendarType;

    /// Local date for `date`, `None` when the date is outside this calendar's supported range
    fn to_local(&self, date: AbsoluteDate) -> Option<LocalDate>;

    /// Absolute date for local components, `None` when they don't name a day in this calendar
    fn from_local(&self, year: i32, month: u8, day: u8) -> Option<AbsoluteDate>;

    /// `false` for years the engine can't compute
    fn is_leap_year(&self, year: i32) -> bool;

    /// 0 for an invalid month or an unsupported year
    fn days_in_month(&self, year: i32, month: u8) -> u8;

    /// Weekday shown in the first grid column; weekday numbering starts here
    fn first_weekday(&self) -> Weekday;

    /// The weekly holiday
    fn last_weekday(&self) -> Weekday;

    fn month_names(&self) -> &'static [&'static str; 12];

    /// Abbreviated weekday labels, indexed by [`CalendarEngine::weekday_index`]
    fn weekday_names(&self) -> &'static [&'static str; 7];

    fn months_per_year(&self) -> u8 {
        MONTHS_PER_YEAR
    }

    /// Converts local components, substituting today when they are invalid
    fn to_instant(&self, year: i32, month: u8, day: u8) -> Conversion {
        self.from_local(year, month, day).map_or_else(
            || {
                log::warn!(
                    "{}: {year}/{month:02}/{day:02} is not a valid date, using today",
                    self.calendar_type()
                );
                Conversion::FellBackToNow(AbsoluteDate::today())
            },
            Conversion::Exact,
        )
    }

    /// Converts canonical date text, substituting today when it can't be read
    fn parse(&self, text: &str) -> Conversion {
        match parse_date_text(text) {
            Ok((year, month, day)) => self.to_instant(year, month, day),
            Err(err) => {
                log::warn!("{}: cannot read {text:?} ({err}), using today", self.calendar_type());
                Conversion::FellBackToNow(AbsoluteDate::today())
            },
        }
    }

    /// Canonical `Y/MM/DD` text, empty when the date is unavailable in this calendar
    fn to_calendar_date(&self, date: AbsoluteDate) -> String {
        self.to_local(date).map(|local| local.to_string()).unwrap_or_default()
    }

    /// First day of the local month containing `date`
    fn month_start(&self, date: AbsoluteDate) -> Option<LocalDate> {
        let local = self.to_local(date)?;
        self.from_local(local.year(), local.month(), MIN_DAY)
            .and_then(|start| self.to_local(start))
    }

    /// Last day of the local month containing `date`
    fn month_end(&self, date: AbsoluteDate) -> Option<LocalDate> {
        let local = self.to_local(date)?;
        let last = self.days_in_month(local.year(), local.month());
        self.from_local(local.year(), local.month(), last)
            .and_then(|end| self.to_local(end))
    }

    fn weekday(&self, date: AbsoluteDate) -> Weekday {
        date.weekday()
    }

    /// Position of `weekday` in this calendar's week, 0 being [`CalendarEngine::first_weekday`]
    fn weekday_index(&self, weekday: Weekday) -> u8 {
        let offset = weekday.num_days_from_sunday() + u32::from(DAYS_PER_WEEK)
            - self.first_weekday().num_days_from_sunday();
        u8::try_from(offset % u32::from(DAYS_PER_WEEK)).unwrap_or(0)
    }

    /// Inverse of [`CalendarEngine::weekday_index`], wrapping past 6
    fn weekday_at(&self, index: u8) -> Weekday {
        let first = self.first_weekday().num_days_from_sunday() as usize;
        SUNDAY_FIRST[(first + usize::from(index)) % SUNDAY_FIRST.len()]
    }

    /// Empty for a month outside `1..=12`
    fn month_name(&self, month: u8) -> &'static str {
        month
            .checked_sub(1)
            .and_then(|index| self.month_names().get(usize::from(index)))
            .copied()
            .unwrap_or_default()
    }

    fn all_month_names(&self) -> Vec<&'static str> {
        self.month_names().to_vec()
    }

    fn weekday_name(&self, weekday: Weekday) -> &'static str {
        self.weekday_names()[usize::from(self.weekday_index(weekday))]
    }

    /// Header labels in grid column order
    fn all_weekday_names(&self) -> [&'static str; 7] {
        let mut labels = [""; 7];
        for (column, label) in (0u8..).zip(labels.iter_mut()) {
            *label = self.weekday_name(self.weekday_at(column));
        }
        labels
    }
}
