use super::CalendarEngine;
use crate::consts::{
    HIJRI_ADJUSTMENT, HIJRI_COMMON_YEAR_DAYS, HIJRI_CYCLE_DAYS, HIJRI_CYCLE_YEARS,
    HIJRI_DAYS_BEFORE_MONTH, HIJRI_EPOCH, HIJRI_MAX_YEAR, HIJRI_MONTH_NAMES, HIJRI_WEEKDAY_NAMES,
    MIN_DAY, MONTHS_PER_YEAR,
};
use crate::types::LocalDate;
use crate::{AbsoluteDate, CalendarType};
use chrono::Weekday;

/// The tabular Islamic calendar.
///
/// Years follow the 30-year cycle with 11 leap years, odd months have 30
/// days and even months 29, and Dhu al-Hijjah gains a day in leap years.
/// Every date is shifted by [`HIJRI_ADJUSTMENT`] days against the tabular
/// epoch to follow the regional sighting convention.
#[derive(Debug, Clone, Copy)]
pub struct HijriEngine {
    adjustment: i64,
}

impl Default for HijriEngine {
    fn default() -> Self {
        Self {
            adjustment: HIJRI_ADJUSTMENT,
        }
    }
}

impl HijriEngine {
    /// An engine with a custom day adjustment (0 gives the plain tabular calendar)
    pub const fn with_adjustment(adjustment: i64) -> Self {
        Self { adjustment }
    }

    /// Days added to the tabular conversion
    pub const fn adjustment(&self) -> i64 {
        self.adjustment
    }
}

const fn is_leap(year: i32) -> bool {
    (year * 11 + 14) % HIJRI_CYCLE_YEARS < 11
}

const fn year_length(year: i32) -> i64 {
    if is_leap(year) {
        HIJRI_COMMON_YEAR_DAYS + 1
    } else {
        HIJRI_COMMON_YEAR_DAYS
    }
}

const fn year_in_range(year: i32) -> bool {
    year >= 1 && year <= HIJRI_MAX_YEAR
}

/// Unadjusted absolute day (0001-01-01 = 0) of 1 Muharram of `year`
fn days_before_year(year: i32) -> i64 {
    let cycle_start = (year - 1) / HIJRI_CYCLE_YEARS * HIJRI_CYCLE_YEARS;
    let cycles_days = i64::from(cycle_start) * HIJRI_CYCLE_DAYS / i64::from(HIJRI_CYCLE_YEARS);
    let remaining: i64 = (1..year - cycle_start).map(year_length).sum();
    HIJRI_EPOCH + cycles_days + remaining
}

impl CalendarEngine for HijriEngine {
    fn calendar_type(&self) -> CalendarType {
        CalendarType::Hijri
    }

    fn to_local(&self, date: AbsoluteDate) -> Option<LocalDate> {
        let day_number = date.days_from_ce() - 1 + self.adjustment;
        if day_number < HIJRI_EPOCH {
            return None;
        }

        let estimate = (day_number - HIJRI_EPOCH) * i64::from(HIJRI_CYCLE_YEARS) / HIJRI_CYCLE_DAYS + 1;
        let mut year = i32::try_from(estimate).ok()?;
        while year > 1 && days_before_year(year) > day_number {
            year -= 1;
        }
        while days_before_year(year + 1) <= day_number {
            year += 1;
        }
        if !year_in_range(year) {
            return None;
        }

        let day_of_year = day_number - days_before_year(year);
        let month = (1..=MONTHS_PER_YEAR)
            .rev()
            .find(|&m| HIJRI_DAYS_BEFORE_MONTH[usize::from(m - 1)] <= day_of_year)?;
        let day = day_of_year - HIJRI_DAYS_BEFORE_MONTH[usize::from(month - 1)] + 1;

        Some(LocalDate::new(
            year,
            month,
            u8::try_from(day).ok()?,
            date.weekday(),
        ))
    }

    fn from_local(&self, year: i32, month: u8, day: u8) -> Option<AbsoluteDate> {
        if day < MIN_DAY || day > self.days_in_month(year, month) {
            return None;
        }
        let day_number = days_before_year(year)
            + HIJRI_DAYS_BEFORE_MONTH[usize::from(month - 1)]
            + i64::from(day)
            - 1
            - self.adjustment;
        AbsoluteDate::from_days_from_ce(day_number + 1)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        year_in_range(year) && is_leap(year)
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        if !year_in_range(year) {
            return 0;
        }
        match month {
            MONTHS_PER_YEAR if is_leap(year) => 30,
            1..=MONTHS_PER_YEAR if month % 2 == 1 => 30,
            1..=MONTHS_PER_YEAR => 29,
            _ => 0,
        }
    }

    fn first_weekday(&self) -> Weekday {
        Weekday::Sun
    }

    fn last_weekday(&self) -> Weekday {
        Weekday::Fri
    }

    fn month_names(&self) -> &'static [&'static str; 12] {
        &HIJRI_MONTH_NAMES
    }

    fn weekday_names(&self) -> &'static [&'static str; 7] {
        &HIJRI_WEEKDAY_NAMES
    }
}
