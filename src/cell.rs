use crate::AbsoluteDate;
use crate::engine::CalendarEngine;
use crate::options::CalendarOptions;
use crate::selection::SelectionController;
use crate::window::SelectableWindow;
use chrono::Weekday;
use serde::Serialize;

/// One position of the month grid.
///
/// The label fields (`day_number`, `calendar_date`, `ordinal`) are zero or
/// empty when the date can't be represented in the engine's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day_number:          u8,
    pub date:                AbsoluteDate,
    pub calendar_date:       String,
    /// `year * 10000 + month * 100 + day` in the local calendar
    pub ordinal:             i64,
    pub weekday:             Weekday,
    pub is_selected:         bool,
    pub is_in_range:         bool,
    pub is_in_current_month: bool,
    pub is_holiday:          bool,
    pub is_today:            bool,
    pub can_select:          bool,
}

/// Everything a cell's flags depend on besides the selection.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CellRules<'a> {
    engine:  &'a dyn CalendarEngine,
    options: &'a CalendarOptions,
    window:  SelectableWindow,
    today:   AbsoluteDate,
}

impl<'a> CellRules<'a> {
    pub(crate) fn new(
        engine: &'a dyn CalendarEngine,
        options: &'a CalendarOptions,
        today: AbsoluteDate,
    ) -> Self {
        Self {
            engine,
            options,
            window: SelectableWindow::between(options.min_date, options.max_date),
            today,
        }
    }

    pub(crate) fn is_holiday(&self, date: AbsoluteDate) -> bool {
        self.engine.weekday(date) == self.engine.last_weekday()
    }

    pub(crate) fn can_select(&self, date: AbsoluteDate) -> bool {
        self.window.contains(date)
            && !self.options.is_inactive(date)
            && (self.options.can_select_holidays || !self.is_holiday(date))
    }

    /// A cell with the selection flags unset
    pub(crate) fn cell(&self, date: AbsoluteDate, is_in_current_month: bool) -> DayCell {
        let local = self.engine.to_local(date);
        DayCell {
            day_number: local.map_or(0, |local| local.day()),
            date,
            calendar_date: local.map(|local| local.to_string()).unwrap_or_default(),
            ordinal: local.map_or(0, |local| local.ordinal()),
            weekday: self.engine.weekday(date),
            is_selected: false,
            is_in_range: false,
            is_in_current_month,
            is_holiday: self.is_holiday(date),
            is_today: date == self.today,
            can_select: self.can_select(date),
        }
    }

    /// A cell annotated with `selection`'s queries
    pub(crate) fn annotated_cell(
        &self,
        date: AbsoluteDate,
        is_in_current_month: bool,
        selection: &SelectionController,
    ) -> DayCell {
        DayCell {
            is_selected: selection.is_selected(date),
            is_in_range: selection.is_in_range(date),
            ..self.cell(date, is_in_current_month)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SelectionMode;
    use crate::test_utils::{date, gregorian, options, persian};
    use crate::CalendarType;

    #[test]
    fn test_cell_labels() {
        let engine = persian();
        let options = options(CalendarType::Persian, SelectionMode::Single);
        let rules = CellRules::new(&engine, &options, date(2024, 1, 1));
        let cell = rules.cell(date(2024, 8, 15), true);

        assert_eq!(cell.day_number, 25);
        assert_eq!(cell.calendar_date, "1403/05/25");
        assert_eq!(cell.ordinal, 14_030_525);
        assert_eq!(cell.weekday, Weekday::Thu);
        assert!(cell.is_in_current_month);
        assert!(!cell.is_today);
        assert!(!cell.is_selected);
    }

    #[test]
    fn test_unavailable_date_gets_empty_labels() {
        let engine = persian();
        let options = options(CalendarType::Persian, SelectionMode::Single);
        let rules = CellRules::new(&engine, &options, date(2024, 1, 1));
        let cell = rules.cell(date(4000, 1, 1), false);

        assert_eq!(cell.day_number, 0);
        assert_eq!(cell.calendar_date, "");
        assert_eq!(cell.ordinal, 0);
    }

    #[test]
    fn test_holiday_and_today() {
        let engine = gregorian();
        let options = options(CalendarType::Gregorian, SelectionMode::Single);
        let rules = CellRules::new(&engine, &options, date(2024, 10, 5));

        let saturday = rules.cell(date(2024, 10, 5), true);
        assert!(!saturday.is_holiday);
        assert!(saturday.is_today);

        let sunday = rules.cell(date(2024, 10, 6), true);
        assert!(sunday.is_holiday);
        assert!(!sunday.is_today);
    }

    #[test]
    fn test_can_select_cases() {
        struct TestCase {
            day:         (i32, u8, u8),
            can_select:  bool,
            description: &'static str,
        }

        let engine = gregorian();
        let options = CalendarOptions {
            min_date: Some(date(2024, 8, 5)),
            max_date: Some(date(2024, 8, 25)),
            inactive_days: vec![date(2024, 8, 14)],
            can_select_holidays: false,
            ..options(CalendarType::Gregorian, SelectionMode::Single)
        };
        let rules = CellRules::new(&engine, &options, date(2024, 8, 1));

        let cases = [
            TestCase {
                day:         (2024, 8, 15),
                can_select:  true,
                description: "ordinary weekday inside the window",
            },
            TestCase {
                day:         (2024, 8, 5),
                can_select:  true,
                description: "lower bound is inclusive",
            },
            TestCase {
                day:         (2024, 8, 4),
                can_select:  false,
                description: "before min",
            },
            TestCase {
                day:         (2024, 8, 26),
                can_select:  false,
                description: "after max",
            },
            TestCase {
                day:         (2024, 8, 14),
                can_select:  false,
                description: "inactive day",
            },
            TestCase {
                day:         (2024, 8, 11),
                can_select:  false,
                description: "Sunday holiday",
            },
            TestCase {
                day:         (2024, 8, 10),
                can_select:  true,
                description: "Saturday is not a Gregorian holiday",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.day;
            assert_eq!(
                rules.can_select(date(y, m, d)),
                case.can_select,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_inactive_days_agree_with_options() {
        let engine = gregorian();
        let options = CalendarOptions {
            inactive_days: vec![date(2024, 8, 1), date(2024, 8, 13), date(2024, 8, 31)],
            ..options(CalendarType::Gregorian, SelectionMode::Multiple)
        };
        let rules = CellRules::new(&engine, &options, date(2024, 8, 1));

        for day in 1..=31 {
            let day = date(2024, 8, day);
            assert_eq!(rules.can_select(day), !options.is_inactive(day), "{day}");
            assert_eq!(rules.cell(day, true).can_select, rules.can_select(day), "{day}");
        }
    }

    #[test]
    fn test_holidays_selectable_by_default() {
        let engine = persian();
        let options = options(CalendarType::Persian, SelectionMode::Single);
        let rules = CellRules::new(&engine, &options, date(2024, 8, 1));
        // a Friday
        assert!(rules.is_holiday(date(2024, 8, 16)));
        assert!(rules.can_select(date(2024, 8, 16)));
    }

    #[test]
    fn test_annotated_cell_uses_selection() {
        let engine = gregorian();
        let options = options(CalendarType::Gregorian, SelectionMode::Single);
        let rules = CellRules::new(&engine, &options, date(2024, 8, 1));
        let mut selection = SelectionController::new(SelectionMode::Single);
        selection.activate(&rules.cell(date(2024, 8, 15), true));

        assert!(rules.annotated_cell(date(2024, 8, 15), true, &selection).is_selected);
        assert!(!rules.annotated_cell(date(2024, 8, 16), true, &selection).is_selected);
    }
}
