//! The catalogue of all board layouts the puzzle can produce
//!
//! A layout ([`Sheet`]) is identified by its blockers, which are visible from the start.
//! For each layout the game picks one of a few sword placements ([`Row`]) and for each
//! sword placement one of a few box placements ([`Cell`]). The fox may then hide on a small
//! set of cells that depends on the box placement.
//!
//! Only the four upright layouts are written down. The game also plays each of them turned
//! by 90°, 180° and 270°, which [`PatternDb::new`] generates.
mod canonical;

use crate::bitmask::BitMask;
use crate::board::{chest_cells, rotate_chest_left, rotate_mask_left, Sword};

/// A box placement within a [`Row`]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Top-left cell of the box or chest
    pub chest_top_left: u8,
    /// Cells that may hold the fox for this box placement
    pub foxes: BitMask,
}

/// A sword placement within a [`Sheet`] together with the box placements allowed alongside
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Row {
    /// Where the sword lies
    pub sword: Sword,
    /// Every box placement consistent with the sword placement
    pub cells: Vec<Cell>,
}

/// A full board layout
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sheet {
    /// Permanently blocked cells
    pub blockers: BitMask,
    /// Every sword placement consistent with the blockers
    pub rows: Vec<Row>,
}

impl Cell {
    /// Constructs a new box placement.
    pub fn new(chest_top_left: u8, foxes: BitMask) -> Self {
        Cell { chest_top_left, foxes }
    }

    /// Cells covered by the box.
    pub fn chest_cells(&self) -> impl Iterator<Item = u8> {
        chest_cells(self.chest_top_left)
    }

    /// The same placement on a board turned by 90°.
    pub fn rotate_left(&self) -> Self {
        Cell::new(
            rotate_chest_left(self.chest_top_left),
            rotate_mask_left(self.foxes),
        )
    }
}

impl Row {
    /// Constructs a new sword placement.
    pub fn new(sword: Sword, cells: Vec<Cell>) -> Self {
        Row { sword, cells }
    }

    /// The same placement on a board turned by 90°.
    pub fn rotate_left(&self) -> Self {
        Row::new(
            self.sword.rotate_left(),
            self.cells.iter().map(Cell::rotate_left).collect(),
        )
    }
}

impl Sheet {
    /// Constructs a new layout.
    pub fn new(blockers: BitMask, rows: Vec<Row>) -> Self {
        Sheet { blockers, rows }
    }

    /// The same layout turned by 90°.
    pub fn rotate_left(&self) -> Self {
        Sheet::new(
            rotate_mask_left(self.blockers),
            self.rows.iter().map(Row::rotate_left).collect(),
        )
    }
}

/// Immutable catalogue of every known layout.
///
/// Layouts are stored in a fixed order: each upright layout is followed by its
/// three turned versions, so indices are stable across runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternDb {
    sheets: Vec<Sheet>,
}

impl Default for PatternDb {
    fn default() -> Self {
        PatternDb::new()
    }
}

impl PatternDb {
    /// Builds the catalogue of all 16 layouts of the puzzle.
    pub fn new() -> Self {
        PatternDb::from_upright(canonical::sheets())
    }

    /// Builds a catalogue from upright layouts, adding the three turned versions of each.
    pub fn from_upright(upright: impl IntoIterator<Item = Sheet>) -> Self {
        let mut sheets = vec![];
        for sheet in upright {
            let turned_once = sheet.rotate_left();
            let turned_twice = turned_once.rotate_left();
            let turned_thrice = turned_twice.rotate_left();
            sheets.extend(vec![sheet, turned_once, turned_twice, turned_thrice]);
        }
        PatternDb { sheets }
    }

    /// Returns all layouts in catalogue order.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Returns the layout at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Returns the number of layouts.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Checks whether the catalogue contains no layout.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
