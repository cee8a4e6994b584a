use crate::AbsoluteDate;
use crate::cell::{CellRules, DayCell};
use crate::consts::{DAYS_PER_WEEK, MIN_DAY};
use crate::engine::CalendarEngine;
use crate::options::CalendarOptions;
use crate::selection::SelectionController;
use serde::Serialize;

/// The cells shown for one local month, in row-major week order.
///
/// Holds whole weeks: the month's days are preceded by the tail of the
/// previous month so day 1 lands in its weekday column, and followed by the
/// head of the next month up to the end of the last row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    year:           i32,
    month:          u8,
    month_name:     &'static str,
    lead:           u8,
    weekday_labels: [&'static str; 7],
    cells:          Vec<DayCell>,
}

impl MonthGrid {
    /// Local year of the displayed month
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Local month number, starting at 1
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Name of the displayed month
    pub const fn month_name(&self) -> &'static str {
        self.month_name
    }

    /// Number of filler cells before day 1
    pub const fn lead(&self) -> u8 {
        self.lead
    }

    /// Header labels in column order
    pub const fn weekday_labels(&self) -> &[&'static str; 7] {
        &self.weekday_labels
    }

    /// All cells, row by row
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Takes the cells out of the grid
    pub fn into_cells(self) -> Vec<DayCell> {
        self.cells
    }

    /// The cells split into rows of seven
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(usize::from(DAYS_PER_WEEK))
    }

    /// The cell showing `date`, if it is on the grid
    pub fn cell(&self, date: AbsoluteDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }

    /// Days of the displayed month only
    pub fn month_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|cell| cell.is_in_current_month)
    }
}

/// Builds [`MonthGrid`]s for one engine and configuration.
#[derive(Debug, Clone, Copy)]
pub struct MonthGridBuilder<'a> {
    engine: &'a dyn CalendarEngine,
    rules:  CellRules<'a>,
    today:  AbsoluteDate,
}

impl<'a> MonthGridBuilder<'a> {
    /// A builder marking the current local date as today
    pub fn new(engine: &'a dyn CalendarEngine, options: &'a CalendarOptions) -> Self {
        Self::with_today(engine, options, AbsoluteDate::today())
    }

    /// A builder with an explicit "today" for the `is_today` flag and fallbacks
    pub fn with_today(
        engine: &'a dyn CalendarEngine,
        options: &'a CalendarOptions,
        today: AbsoluteDate,
    ) -> Self {
        Self {
            engine,
            rules: CellRules::new(engine, options, today),
            today,
        }
    }

    /// The grid of the local month containing `anchor`.
    ///
    /// An anchor the calendar can't represent is replaced by today. The grid
    /// is empty when neither can be represented, or when a filler day falls
    /// outside the supported date range.
    pub fn build(&self, anchor: AbsoluteDate, selection: &SelectionController) -> MonthGrid {
        let engine = self.engine;
        let local = engine.to_local(anchor).or_else(|| {
            log::warn!(
                "{}: {anchor} is outside the calendar, showing today's month",
                engine.calendar_type()
            );
            engine.to_local(self.today)
        });
        let Some(local) = local else {
            log::warn!("{}: today is outside the calendar", engine.calendar_type());
            return self.empty_grid(0, 0);
        };

        let (year, month) = (local.year(), local.month());
        let days = engine.days_in_month(year, month);
        let Some(start) = engine.from_local(year, month, MIN_DAY) else {
            return self.empty_grid(year, month);
        };

        let lead = engine.weekday_index(engine.weekday(start));
        let week = i64::from(DAYS_PER_WEEK);
        let filled = i64::from(lead) + i64::from(days);
        let trail = (week - filled % week) % week;

        let cells: Option<Vec<DayCell>> = (-i64::from(lead)..i64::from(days) + trail)
            .map(|offset| {
                let date = start.add_days(offset)?;
                let in_month = (0..i64::from(days)).contains(&offset);
                Some(self.rules.annotated_cell(date, in_month, selection))
            })
            .collect();
        let Some(cells) = cells else {
            log::warn!(
                "{}: {year}/{month:02} runs past the supported date range",
                engine.calendar_type()
            );
            return self.empty_grid(year, month);
        };

        log::debug!(
            "{}: built {year}/{month:02} with {} cells ({lead} leading, {trail} trailing)",
            engine.calendar_type(),
            cells.len()
        );

        MonthGrid {
            year,
            month,
            month_name: engine.month_name(month),
            lead,
            weekday_labels: engine.all_weekday_names(),
            cells,
        }
    }

    fn empty_grid(&self, year: i32, month: u8) -> MonthGrid {
        MonthGrid {
            year,
            month,
            month_name: self.engine.month_name(month),
            lead: 0,
            weekday_labels: self.engine.all_weekday_names(),
            cells: Vec::new(),
        }
    }
}
