use super::CalendarEngine;
use crate::consts::{
    MIN_DAY, MONTHS_PER_YEAR, PERSIAN_BREAKS, PERSIAN_ESFAND_COMMON,
    PERSIAN_FIRST_HALF_DAYS, PERSIAN_GREGORIAN_OFFSET, PERSIAN_LONG_MONTH, PERSIAN_MONTH_NAMES,
    PERSIAN_SHORT_MONTH, PERSIAN_WEEKDAY_NAMES,
};
use crate::types::LocalDate;
use crate::{AbsoluteDate, CalendarType};
use chrono::Weekday;

/// Month of Nowruz in the Gregorian calendar
const MARCH: u8 = 3;
/// Mehr, the first 30-day month
const MEHR: u8 = 7;
const LEAP_CYCLE: i32 = 33;

/// The Persian (Solar Hijri, Jalali) calendar.
///
/// Leap years follow the 33-year cycle arithmetic with the published break
/// years, which agrees with the astronomical calendar for years -61..3177.
/// Weeks start on Saturday and Friday is the holiday.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersianEngine;

/// Facts about one Persian year needed by every conversion
#[derive(Debug, Clone, Copy)]
struct YearInfo {
    /// 0 when the year itself is leap
    years_since_leap: i32,
    /// Gregorian date of 1 Farvardin
    nowruz:           AbsoluteDate,
}

fn year_info(year: i32) -> Option<YearInfo> {
    let first = PERSIAN_BREAKS[0];
    let last = PERSIAN_BREAKS[PERSIAN_BREAKS.len() - 1];
    if year < first || year >= last {
        return None;
    }

    let gregorian_year = year + PERSIAN_GREGORIAN_OFFSET;
    let mut leap_persian = -14;
    let mut previous_break = first;
    let mut jump = 0;
    for &next_break in &PERSIAN_BREAKS[1..] {
        jump = next_break - previous_break;
        if year < next_break {
            break;
        }
        leap_persian += jump / LEAP_CYCLE * 8 + (jump % LEAP_CYCLE) / 4;
        previous_break = next_break;
    }

    let mut n = year - previous_break;
    leap_persian += n / LEAP_CYCLE * 8 + (n % LEAP_CYCLE + 3) / 4;
    if jump % LEAP_CYCLE == 4 && jump - n == 4 {
        leap_persian += 1;
    }

    let leap_gregorian = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;
    let march_day = 20 + leap_persian - leap_gregorian;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / LEAP_CYCLE * LEAP_CYCLE;
    }
    let mut years_since_leap = ((n + 1) % LEAP_CYCLE - 1) % 4;
    if years_since_leap == -1 {
        years_since_leap = 4;
    }

    let nowruz = AbsoluteDate::from_ymd(gregorian_year, MARCH, u8::try_from(march_day).ok()?)?;
    Some(YearInfo {
        years_since_leap,
        nowruz,
    })
}

/// Days from 1 Farvardin to the first of `month`
fn days_before_month(month: u8) -> i64 {
    let month = i64::from(month);
    (month - 1) * i64::from(PERSIAN_LONG_MONTH) - (month / 7) * (month - 7)
}

impl CalendarEngine for PersianEngine {
    fn calendar_type(&self) -> CalendarType {
        CalendarType::Persian
    }

    fn to_local(&self, date: AbsoluteDate) -> Option<LocalDate> {
        let mut year = date.year() - PERSIAN_GREGORIAN_OFFSET;
        let info = year_info(year)?;
        let mut offset = info.nowruz.days_until(date);

        if offset >= 0 {
            if offset < PERSIAN_FIRST_HALF_DAYS {
                let month = 1 + offset / i64::from(PERSIAN_LONG_MONTH);
                let day = offset % i64::from(PERSIAN_LONG_MONTH) + 1;
                return Some(LocalDate::new(
                    year,
                    u8::try_from(month).ok()?,
                    u8::try_from(day).ok()?,
                    date.weekday(),
                ));
            }
            offset -= PERSIAN_FIRST_HALF_DAYS;
        } else {
            // Tail of the previous Persian year, counted back from its Nowruz.
            year -= 1;
            if year < PERSIAN_BREAKS[0] {
                return None;
            }
            offset += 179;
            if info.years_since_leap == 1 {
                offset += 1;
            }
        }

        let month = i64::from(MEHR) + offset / i64::from(PERSIAN_SHORT_MONTH);
        let day = offset % i64::from(PERSIAN_SHORT_MONTH) + 1;
        Some(LocalDate::new(
            year,
            u8::try_from(month).ok()?,
            u8::try_from(day).ok()?,
            date.weekday(),
        ))
    }

    fn from_local(&self, year: i32, month: u8, day: u8) -> Option<AbsoluteDate> {
        if day < MIN_DAY || day > self.days_in_month(year, month) {
            return None;
        }
        let info = year_info(year)?;
        info.nowruz
            .add_days(days_before_month(month) + i64::from(day) - 1)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        year_info(year).is_some_and(|info| info.years_since_leap == 0)
    }

    fn days_in_month(&self, year: i32, month: u8) -> u8 {
        let Some(info) = year_info(year) else {
            return 0;
        };
        match month {
            1..MEHR => PERSIAN_LONG_MONTH,
            MEHR..MONTHS_PER_YEAR => PERSIAN_SHORT_MONTH,
            MONTHS_PER_YEAR if info.years_since_leap == 0 => PERSIAN_SHORT_MONTH,
            MONTHS_PER_YEAR => PERSIAN_ESFAND_COMMON,
            _ => 0,
        }
    }

    fn first_weekday(&self) -> Weekday {
        Weekday::Sat
    }

    fn last_weekday(&self) -> Weekday {
        Weekday::Fri
    }

    fn month_names(&self) -> &'static [&'static str; 12] {
        &PERSIAN_MONTH_NAMES
    }

    fn weekday_names(&self) -> &'static [&'static str; 7] {
        &PERSIAN_WEEKDAY_NAMES
    }
}
