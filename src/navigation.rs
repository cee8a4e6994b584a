//! Moving the displayed month around, in the engine's own calendar.

use crate::{AbsoluteDate, Conversion};
use crate::consts::{MIN_DAY, YEAR_CHOICES_BEFORE, YEAR_CHOICES_COUNT};
use crate::engine::CalendarEngine;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A request to change the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Navigation {
    #[display(fmt = "next month")]
    NextMonth,
    #[display(fmt = "previous month")]
    PreviousMonth,
    #[display(fmt = "next year")]
    NextYear,
    #[display(fmt = "previous year")]
    PreviousYear,
    #[display(fmt = "today")]
    Today,
    /// A month of the current local year
    #[display(fmt = "month {_0}")]
    Month(u8),
    /// A local year, keeping the current month
    #[display(fmt = "year {_0}")]
    Year(i32),
}

/// What the picker is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    #[display(fmt = "days")]
    Days,
    #[display(fmt = "months")]
    Months,
    #[display(fmt = "years")]
    Years,
}

/// Where `action` moves `anchor`.
///
/// Month and year steps keep the day of month, clamped to the target month's
/// length. An anchor or target the calendar can't represent moves to `today`.
pub fn navigate(
    engine: &dyn CalendarEngine,
    anchor: AbsoluteDate,
    today: AbsoluteDate,
    action: Navigation,
) -> AbsoluteDate {
    if action == Navigation::Today {
        return today;
    }
    let Some(local) = engine.to_local(anchor) else {
        log::warn!("{}: cannot navigate from {anchor}, using today", engine.calendar_type());
        return today;
    };

    let (year, month, day) = local.parts();
    let months_per_year = i32::from(engine.months_per_year());
    match action {
        Navigation::NextMonth => shift_months(engine, today, year, month, day, 1),
        Navigation::PreviousMonth => shift_months(engine, today, year, month, day, -1),
        Navigation::NextYear => shift_months(engine, today, year, month, day, months_per_year),
        Navigation::PreviousYear => {
            shift_months(engine, today, year, month, day, -months_per_year)
        },
        Navigation::Month(target) => or_today(engine.to_instant(year, target, MIN_DAY), today),
        Navigation::Year(target) => or_today(engine.to_instant(target, month, MIN_DAY), today),
        Navigation::Today => today,
    }
}

const fn or_today(conversion: Conversion, today: AbsoluteDate) -> AbsoluteDate {
    match conversion {
        Conversion::Exact(date) => date,
        Conversion::FellBackToNow(_) => today,
    }
}

fn shift_months(
    engine: &dyn CalendarEngine,
    today: AbsoluteDate,
    year: i32,
    month: u8,
    day: u8,
    delta: i32,
) -> AbsoluteDate {
    let months_per_year = i32::from(engine.months_per_year());
    let total = year
        .saturating_mul(months_per_year)
        .saturating_add(i32::from(month) - 1)
        .saturating_add(delta);
    let target_year = total.div_euclid(months_per_year);
    let target_month = u8::try_from(total.rem_euclid(months_per_year) + 1).unwrap_or(MIN_DAY);
    let target_day = day.min(engine.days_in_month(target_year, target_month)).max(MIN_DAY);
    or_today(engine.to_instant(target_year, target_month, target_day), today)
}

/// `(month number, name)` for every month of the engine's year
pub fn month_choices(engine: &dyn CalendarEngine) -> Vec<(u8, &'static str)> {
    (1..=engine.months_per_year())
        .map(|month| (month, engine.month_name(month)))
        .collect()
}

/// The years offered around `current_year`
pub fn year_choices(current_year: i32) -> Vec<i32> {
    let first = current_year - YEAR_CHOICES_BEFORE;
    (first..first + YEAR_CHOICES_COUNT).collect()
}
