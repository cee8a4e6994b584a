use crate::AbsoluteDate;
use crate::cell::DayCell;
use crate::options::SelectionMode;

/// What an activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Activation {
    /// The selected set changed
    pub changed:   bool,
    /// The selection is complete and the picker may close
    pub can_close: bool,
}

/// The selected days and the rules for changing them.
///
/// In Range mode the stored cells are kept in ascending order: an end that is
/// not after the start restarts the range instead.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    mode:     SelectionMode,
    selected: Vec<DayCell>,
}

impl SelectionController {
    /// An empty selection
    pub const fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: Vec::new(),
        }
    }

    /// A controller holding preselected cells.
    ///
    /// Seeding bypasses the selectability rules. Duplicates are dropped.
    /// Single keeps the first cell and Range keeps the two earliest, in
    /// ascending order.
    pub fn seed(mode: SelectionMode, cells: impl IntoIterator<Item = DayCell>) -> Self {
        let mut selected: Vec<DayCell> = Vec::new();
        for cell in cells {
            if !selected.iter().any(|s| s.date == cell.date) {
                selected.push(stored(&cell));
            }
        }

        match mode {
            SelectionMode::Single => selected.truncate(1),
            SelectionMode::Multiple => {},
            SelectionMode::Range => {
                selected.sort_by_key(|cell| cell.date);
                selected.truncate(2);
            },
        }
        Self { mode, selected }
    }

    /// The mode activations follow
    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Selected cells, in selection order (ascending in Range mode)
    pub fn selected(&self) -> &[DayCell] {
        &self.selected
    }

    /// Nothing is selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Drops every selected cell
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Whether `date` is one of the selected cells
    pub fn is_selected(&self, date: AbsoluteDate) -> bool {
        self.selected.iter().any(|cell| cell.date == date)
    }

    /// `true` strictly between the two ends of a complete range
    pub fn is_in_range(&self, date: AbsoluteDate) -> bool {
        self.range().is_some_and(|(start, end)| start < date && date < end)
    }

    /// Start and end of a complete range
    pub fn range(&self) -> Option<(AbsoluteDate, AbsoluteDate)> {
        match (self.mode, self.selected.as_slice()) {
            (SelectionMode::Range, [start, end]) => Some((start.date, end.date)),
            _ => None,
        }
    }

    /// Applies a user activation of `cell`. Cells that can't be selected are ignored.
    pub fn activate(&mut self, cell: &DayCell) -> Activation {
        if !cell.can_select {
            return Activation::default();
        }

        match self.mode {
            SelectionMode::Single => {
                self.selected = vec![stored(cell)];
            },
            SelectionMode::Multiple => {
                match self.selected.iter().position(|s| s.date == cell.date) {
                    Some(index) => {
                        self.selected.remove(index);
                    },
                    None => self.selected.push(stored(cell)),
                }
            },
            SelectionMode::Range => {
                let restarts = match self.selected.as_slice() {
                    [start] => cell.ordinal <= start.ordinal,
                    [_, _] => true,
                    _ => false,
                };
                if restarts {
                    self.selected.clear();
                }
                self.selected.push(stored(cell));
            },
        }

        Activation {
            changed:   true,
            can_close: self.can_close(),
        }
    }

    fn can_close(&self) -> bool {
        match self.mode {
            SelectionMode::Single => !self.selected.is_empty(),
            SelectionMode::Multiple => false,
            SelectionMode::Range => self.selected.len() == 2,
        }
    }
}

fn stored(cell: &DayCell) -> DayCell {
    DayCell {
        is_selected: true,
        is_in_range: false,
        ..cell.clone()
    }
}
