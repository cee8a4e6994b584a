//! Persian, Gregorian and Hijri calendars over a single absolute date, and a
//! month-grid date picker engine built on top of them.
//!
//! Dates are stored as [`AbsoluteDate`] (proleptic Gregorian). A
//! [`CalendarEngine`] converts them to and from its own year/month/day, and a
//! [`PickerSession`] lays the local month out in a 7-column grid with single,
//! multiple or range selection.

mod cell;
mod consts;
mod engine;
mod format;
mod grid;
mod navigation;
mod options;
mod prelude;
mod registry;
mod selection;
mod session;
#[cfg(test)]
mod test_utils;
mod types;
mod window;

pub use cell::DayCell;
pub use consts::*;
pub use engine::{CalendarEngine, GregorianEngine, HijriEngine, PersianEngine};
pub use format::{format_date, format_display, to_calendar_date_time};
pub use grid::{MonthGrid, MonthGridBuilder};
pub use navigation::{Navigation, ViewMode, month_choices, navigate, year_choices};
pub use options::{CalendarOptions, SelectionCallback, SelectionMode};
pub use registry::{CalendarRegistry, RegistryError, SharedEngine};
pub use selection::{Activation, SelectionController};
pub use session::{PickerSession, SessionError, SessionEvent, SessionListener};
pub use types::{
    AbsoluteDate, Conversion, LocalDate, days_in_month, is_leap_year, parse_date_text,
};
pub use window::{SelectableWindow, WindowError};

use crate::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, de};

/// Identifies a calendar system.
///
/// `Custom` tags name engines registered at runtime; they exist only in code
/// and are never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize)]
pub enum CalendarType {
    /// Solar Hijri (Jalali)
    #[default]
    #[display(fmt = "Persian")]
    Persian,
    #[display(fmt = "Gregorian")]
    Gregorian,
    /// Tabular Islamic
    #[display(fmt = "Hijri")]
    Hijri,
    #[serde(skip)]
    #[display(fmt = "{_0}")]
    Custom(&'static str),
}

impl CalendarType {
    /// The engine registered for this type in the global registry
    ///
    /// # Errors
    /// Returns `RegistryError::Unsupported` if no engine is registered.
    pub fn engine(self) -> Result<SharedEngine, RegistryError> {
        CalendarRegistry::global().resolve(self)
    }

    /// Returns `false` for runtime-registered `Custom` tags
    pub const fn is_builtin(self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

/// Names accepted when reading a calendar type from configuration
const BUILTIN_NAMES: &[&str] = &["Persian", "Gregorian", "Hijri"];

impl<'de> Deserialize<'de> for CalendarType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        match name.as_str() {
            "Persian" => Ok(Self::Persian),
            "Gregorian" => Ok(Self::Gregorian),
            "Hijri" => Ok(Self::Hijri),
            other => Err(de::Error::unknown_variant(other, BUILTIN_NAMES)),
        }
    }
}

/// Why calendar text couldn't be split into year, month and day.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
