use serde::{Deserialize, Serialize};

use crate::AbsoluteDate;

/// The inclusive span of dates a user may select. Either end may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SelectableWindow {
    min: Option<AbsoluteDate>,
    max: Option<AbsoluteDate>,
}

/// Error type for selectable window construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// Lower bound is after upper bound.
    #[error("Invalid selectable window: min ({min}) is after max ({max})")]
    Inverted { min: AbsoluteDate, max: AbsoluteDate },
}

impl SelectableWindow {
    /// A window without bounds
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Creates a window, rejecting `min > max`.
    ///
    /// # Errors
    /// Returns `WindowError::Inverted` if both bounds are set and min > max.
    pub fn new(min: Option<AbsoluteDate>, max: Option<AbsoluteDate>) -> Result<Self, WindowError> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(WindowError::Inverted { min, max });
            }
        }
        Ok(Self { min, max })
    }

    /// Creates a window without checking the bounds' order; an inverted window contains nothing
    pub(crate) const fn between(min: Option<AbsoluteDate>, max: Option<AbsoluteDate>) -> Self {
        Self { min, max }
    }

    /// Earliest selectable date, if bounded below
    pub const fn min(&self) -> Option<AbsoluteDate> {
        self.min
    }

    /// Latest selectable date, if bounded above
    pub const fn max(&self) -> Option<AbsoluteDate> {
        self.max
    }

    /// True when neither end is set
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Checks if `date` falls inside the window (bounds inclusive)
    pub fn contains(&self, date: AbsoluteDate) -> bool {
        self.min.is_none_or(|min| min <= date) && self.max.is_none_or(|max| date <= max)
    }
}
