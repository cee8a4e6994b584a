use crate::cell::DayCell;
use crate::consts::{DATE_SEPARATOR, DEFAULT_DISPLAY_FORMAT};
use crate::prelude::*;
use crate::window::{SelectableWindow, WindowError};
use crate::{AbsoluteDate, CalendarType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// How activations change the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum SelectionMode {
    /// One day; a new activation replaces it
    #[default]
    #[display(fmt = "Single")]
    Single,
    /// Any number of days, each activation toggles one
    #[display(fmt = "Multiple")]
    Multiple,
    /// A start and an end day
    #[display(fmt = "Range")]
    Range,
}

/// Called with the selected cells when a session is accepted or cancelled.
#[derive(Clone)]
pub struct SelectionCallback(Arc<dyn Fn(&[DayCell]) + Send + Sync>);

impl SelectionCallback {
    /// Wraps `callback` for storage in the options
    pub fn new(callback: impl Fn(&[DayCell]) + Send + Sync + 'static) -> Self {
        Self(Arc::new(callback))
    }

    /// Invokes the callback with `cells`
    pub fn call(&self, cells: &[DayCell]) {
        (self.0)(cells);
    }
}

impl fmt::Debug for SelectionCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SelectionCallback")
    }
}

/// Configuration of one picker.
///
/// Every field has a default, so hosts can deserialize a partial JSON object.
/// Dates in `selected_date` and `selected_dates` are canonical calendar text
/// in the configured calendar (`1403/05/25` for Persian).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    pub calendar_type:           CalendarType,
    pub selection_mode:          SelectionMode,
    pub min_date:                Option<AbsoluteDate>,
    pub max_date:                Option<AbsoluteDate>,
    /// Days that can never be selected
    pub inactive_days:           Vec<AbsoluteDate>,
    pub can_select_holidays:     bool,
    /// Accept as soon as the selection allows closing
    pub auto_close_after_select: bool,
    /// Initial anchor (and selection in Single mode)
    pub selected_date:           Option<String>,
    pub selected_dates:          Vec<String>,
    pub date_separator:          char,
    pub display_format:          String,
    #[serde(skip)]
    pub on_accept:               Option<SelectionCallback>,
    #[serde(skip)]
    pub on_cancel:               Option<SelectionCallback>,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            calendar_type:           CalendarType::default(),
            selection_mode:          SelectionMode::default(),
            min_date:                None,
            max_date:                None,
            inactive_days:           Vec::new(),
            can_select_holidays:     true,
            auto_close_after_select: false,
            selected_date:           None,
            selected_dates:          Vec::new(),
            date_separator:          DATE_SEPARATOR,
            display_format:          DEFAULT_DISPLAY_FORMAT.to_owned(),
            on_accept:               None,
            on_cancel:               None,
        }
    }
}

impl CalendarOptions {
    /// Default options for a calendar and selection mode
    pub fn new(calendar_type: CalendarType, selection_mode: SelectionMode) -> Self {
        Self {
            calendar_type,
            selection_mode,
            ..Self::default()
        }
    }

    /// The selectable bounds
    ///
    /// # Errors
    /// Returns `WindowError::Inverted` if `min_date` is after `max_date`.
    pub fn window(&self) -> Result<SelectableWindow, WindowError> {
        SelectableWindow::new(self.min_date, self.max_date)
    }

    /// Whether `date` is listed in `inactive_days`
    pub fn is_inactive(&self, date: AbsoluteDate) -> bool {
        self.inactive_days.contains(&date)
    }

    #[must_use]
    pub fn with_accept(mut self, callback: impl Fn(&[DayCell]) + Send + Sync + 'static) -> Self {
        self.on_accept = Some(SelectionCallback::new(callback));
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, callback: impl Fn(&[DayCell]) + Send + Sync + 'static) -> Self {
        self.on_cancel = Some(SelectionCallback::new(callback));
        self
    }
}
