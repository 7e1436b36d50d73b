//! Presentation classes for grid cells.

use crate::cell::{Cell, CellRef};
use chrono::Weekday;
use std::collections::BTreeSet;

/// Classes in the order their fills are applied. A later class wins when a
/// cell is in more than one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Empty,
    Saturday,
    Sunday,
}

impl HighlightKind {
    pub const PRIORITY: [HighlightKind; 3] =
        [HighlightKind::Empty, HighlightKind::Saturday, HighlightKind::Sunday];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    empty: BTreeSet<CellRef>,
    saturday: BTreeSet<CellRef>,
    sunday: BTreeSet<CellRef>,
}

impl Highlights {
    /// Scans every cell, header row included.
    ///
    /// Empty membership is decided by the cell text; weekend membership by the
    /// weekday carried in the cell.
    pub fn classify(rows: &[Vec<Cell>]) -> Self {
        let mut highlights = Highlights::default();
        for (row, cells) in rows.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                let at = CellRef::new(column, row);
                if cell.is_empty() {
                    highlights.empty.insert(at);
                }
                match cell.weekday() {
                    Some(Weekday::Sat) => {
                        highlights.saturday.insert(at);
                    }
                    Some(Weekday::Sun) => {
                        highlights.sunday.insert(at);
                    }
                    _ => {}
                }
            }
        }
        highlights
    }

    pub fn cells(&self, kind: HighlightKind) -> &BTreeSet<CellRef> {
        match kind {
            HighlightKind::Empty => &self.empty,
            HighlightKind::Saturday => &self.saturday,
            HighlightKind::Sunday => &self.sunday,
        }
    }

    pub fn empty(&self) -> &BTreeSet<CellRef> {
        &self.empty
    }

    pub fn saturday(&self) -> &BTreeSet<CellRef> {
        &self.saturday
    }

    pub fn sunday(&self) -> &BTreeSet<CellRef> {
        &self.sunday
    }

    /// The class whose fill ends up visible at `at`, if any.
    pub fn fill_for(&self, at: CellRef) -> Option<HighlightKind> {
        HighlightKind::PRIORITY
            .into_iter()
            .rev()
            .find(|kind| self.cells(*kind).contains(&at))
    }
}
