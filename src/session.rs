use crate::AbsoluteDate;
use crate::cell::{CellRules, DayCell};
use crate::engine::CalendarEngine;
use crate::format::format_display;
use crate::grid::{MonthGrid, MonthGridBuilder};
use crate::navigation::{self, Navigation, ViewMode};
use crate::options::CalendarOptions;
use crate::registry::{CalendarRegistry, RegistryError, SharedEngine};
use crate::selection::{Activation, SelectionController};
use crate::window::WindowError;
use std::fmt;

/// Something a listener may want to redraw or react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The cells were rebuilt for the given local month
    GridRebuilt { year: i32, month: u8 },
    SelectionChanged,
    /// The selection is complete
    CanClose,
    ViewChanged(ViewMode),
    Accepted,
    Cancelled,
}

/// Receives session notifications.
pub trait SessionListener {
    fn on_event(&self, event: &SessionEvent);
}

impl<F: Fn(&SessionEvent)> SessionListener for F {
    fn on_event(&self, event: &SessionEvent) {
        self(event);
    }
}

/// Error type for session construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Window(#[from] WindowError),
}

/// One open date picker: its engine, configuration, displayed month and selection.
pub struct PickerSession {
    engine:    SharedEngine,
    options:   CalendarOptions,
    today:     AbsoluteDate,
    anchor:    AbsoluteDate,
    view:      ViewMode,
    selection: SelectionController,
    grid:      MonthGrid,
    listeners: Vec<Box<dyn SessionListener>>,
}

impl fmt::Debug for PickerSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerSession")
            .field("calendar_type", &self.engine.calendar_type())
            .field("today", &self.today)
            .field("anchor", &self.anchor)
            .field("view", &self.view)
            .field("selected", &self.selection.selected().len())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl PickerSession {
    /// Opens a session with the engine from the global registry
    ///
    /// # Errors
    /// Fails if the calendar type isn't registered or the min/max dates are inverted.
    pub fn new(options: CalendarOptions) -> Result<Self, SessionError> {
        Self::with_registry(options, CalendarRegistry::global())
    }

    /// Opens a session resolving its engine from `registry`
    ///
    /// # Errors
    /// Fails if the calendar type isn't registered or the min/max dates are inverted.
    pub fn with_registry(
        options: CalendarOptions,
        registry: &CalendarRegistry,
    ) -> Result<Self, SessionError> {
        let engine = registry.resolve(options.calendar_type)?;
        options.window()?;
        Ok(Self::open(engine, options, AbsoluteDate::today(), Vec::new()))
    }

    /// The same session as seen on `today`
    #[must_use]
    pub fn with_today(self, today: AbsoluteDate) -> Self {
        Self::open(self.engine, self.options, today, self.listeners)
    }

    fn open(
        engine: SharedEngine,
        options: CalendarOptions,
        today: AbsoluteDate,
        listeners: Vec<Box<dyn SessionListener>>,
    ) -> Self {
        let anchor = options
            .selected_date
            .as_deref()
            .and_then(|text| engine.parse(text).exact())
            .unwrap_or(today);
        let selection = preselect(engine.as_ref(), &options, today);
        let grid = MonthGridBuilder::with_today(engine.as_ref(), &options, today)
            .build(anchor, &selection);
        Self {
            engine,
            options,
            today,
            anchor,
            view: ViewMode::Days,
            selection,
            grid,
            listeners,
        }
    }

    /// Registers a listener for every later event
    pub fn subscribe(&mut self, listener: impl SessionListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// The engine resolved for the options' calendar type
    pub fn engine(&self) -> &dyn CalendarEngine {
        self.engine.as_ref()
    }

    /// The configuration the session was opened with
    pub const fn options(&self) -> &CalendarOptions {
        &self.options
    }

    /// The date cells are marked as today against
    pub const fn today(&self) -> AbsoluteDate {
        self.today
    }

    /// The date whose month is displayed
    pub const fn anchor(&self) -> AbsoluteDate {
        self.anchor
    }

    /// Days, months or years chooser
    pub const fn view(&self) -> ViewMode {
        self.view
    }

    /// The displayed month
    pub const fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// The displayed month's cells, row by row
    pub fn cells(&self) -> &[DayCell] {
        self.grid.cells()
    }

    /// Column headers, starting at the engine's first weekday
    pub const fn weekday_labels(&self) -> &[&'static str; 7] {
        self.grid.weekday_labels()
    }

    /// Name of the displayed month
    pub const fn month_name(&self) -> &'static str {
        self.grid.month_name()
    }

    /// Local year of the displayed month
    pub const fn year(&self) -> i32 {
        self.grid.year()
    }

    /// The selected cells
    pub fn selected(&self) -> &[DayCell] {
        self.selection.selected()
    }

    /// Selected dates as display text, using the configured pattern and separator
    pub fn selected_display(&self) -> Vec<String> {
        self.selection
            .selected()
            .iter()
            .map(|cell| {
                format_display(
                    self.engine.as_ref(),
                    &cell.calendar_date,
                    &self.options.display_format,
                    self.options.date_separator,
                )
            })
            .collect()
    }

    /// Handles a click on the displayed cell for `date`. Dates not on the grid are ignored.
    pub fn activate(&mut self, date: AbsoluteDate) -> Activation {
        let Some(cell) = self.grid.cell(date).cloned() else {
            log::debug!("{date} is not on the displayed grid");
            return Activation::default();
        };

        let activation = self.selection.activate(&cell);
        if activation.changed {
            self.rebuild();
            self.notify(SessionEvent::SelectionChanged);
        }
        if activation.can_close {
            self.notify(SessionEvent::CanClose);
            if self.options.auto_close_after_select {
                self.accept();
            }
        }
        activation
    }

    /// Moves the anchor and rebuilds the grid, returning the new anchor
    pub fn navigate(&mut self, action: Navigation) -> AbsoluteDate {
        self.anchor = navigation::navigate(self.engine.as_ref(), self.anchor, self.today, action);
        if matches!(action, Navigation::Month(_) | Navigation::Year(_)) {
            self.switch_view(ViewMode::Days);
        }
        self.rebuild();
        self.anchor
    }

    /// Changes the chooser, notifying listeners when it differs
    pub fn switch_view(&mut self, view: ViewMode) {
        if self.view != view {
            self.view = view;
            self.notify(SessionEvent::ViewChanged(view));
        }
    }

    /// `(month number, name)` for the month chooser
    pub fn month_choices(&self) -> Vec<(u8, &'static str)> {
        navigation::month_choices(self.engine.as_ref())
    }

    /// Years for the year chooser, around the displayed year
    pub fn year_choices(&self) -> Vec<i32> {
        navigation::year_choices(self.grid.year())
    }

    /// Confirms the selection, calling the accept callback with the selected cells
    pub fn accept(&self) -> &[DayCell] {
        let selected = self.selection.selected();
        if let Some(callback) = &self.options.on_accept {
            callback.call(selected);
        }
        self.notify(SessionEvent::Accepted);
        selected
    }

    /// Dismisses the picker, calling the cancel callback with the selected cells
    pub fn cancel(&self) {
        if let Some(callback) = &self.options.on_cancel {
            callback.call(self.selection.selected());
        }
        self.notify(SessionEvent::Cancelled);
    }

    fn rebuild(&mut self) {
        self.grid = MonthGridBuilder::with_today(self.engine.as_ref(), &self.options, self.today)
            .build(self.anchor, &self.selection);
        self.notify(SessionEvent::GridRebuilt {
            year:  self.grid.year(),
            month: self.grid.month(),
        });
    }

    fn notify(&self, event: SessionEvent) {
        for listener in &self.listeners {
            listener.on_event(&event);
        }
    }
}

/// The selection described by the options' initial dates, seeded whether or
/// not the days are selectable. Text that doesn't name a real day is skipped
/// instead of selecting today.
fn preselect(
    engine: &dyn CalendarEngine,
    options: &CalendarOptions,
    today: AbsoluteDate,
) -> SelectionController {
    let rules = CellRules::new(engine, options, today);
    let initial = options
        .selected_date
        .iter()
        .filter(|_| options.selected_dates.is_empty())
        .chain(&options.selected_dates);
    let cells = initial.filter_map(|text| {
        let date = engine.parse(text).exact();
        if date.is_none() {
            log::warn!("ignoring preselected date {text:?}");
        }
        date.map(|date| rules.cell(date, false))
    });
    SelectionController::seed(options.selection_mode, cells)
}
