//! Simulated games for trying out solver strategies
//!
//! A [`Layout`] fixes where every piece hides. A [`Simulation`] reveals the layout one
//! cell at a time, in the same way the game would show it, and can follow the solver's
//! hints until both sword and box are uncovered.

use crate::bitmask::BitMask;
use crate::board::{chest_cells, BoardState, Corner, Rotation, Sword, SwordPart, Tile};
use crate::consts::N_CELLS;
use crate::errors::InconsistentObservation;
use crate::patterns::{Cell, PatternDb, Row, Sheet};
use crate::solver::{Score, Solver};
use rand::Rng;

/// The hidden solution of one game
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Permanently blocked cells
    pub blockers: BitMask,
    /// Where the sword lies
    pub sword: Sword,
    /// Top-left cell of the box
    pub chest: u8,
    /// Cell of the fox, if it is on the board
    pub fox: Option<u8>,
}

impl Layout {
    /// Constructs the layout of a catalogue entry with the fox on `fox`.
    pub fn new(sheet: &Sheet, row: &Row, cell: &Cell, fox: Option<u8>) -> Self {
        Layout {
            blockers: sheet.blockers,
            sword: row.sword,
            chest: cell.chest_top_left,
            fox,
        }
    }

    /// Picks a layout at random: a sheet, a sword placement, a box placement and finally
    /// one of the fox cells of the box placement. Boxes without fox cells have no fox.
    ///
    /// # Panic
    /// Panics, if the catalogue is empty or contains a sheet or row without placements.
    pub fn random<R: Rng + ?Sized>(patterns: &PatternDb, rng: &mut R) -> Self {
        let sheets = patterns.sheets();
        let sheet = &sheets[rng.gen_range(0..sheets.len())];
        let row = &sheet.rows[rng.gen_range(0..sheet.rows.len())];
        let cell = &row.cells[rng.gen_range(0..row.cells.len())];
        let fox = match cell.foxes.len() {
            0 => None,
            n => cell.foxes.iter().nth(rng.gen_range(0..n as usize)),
        };
        Layout::new(sheet, row, cell, fox)
    }

    /// Returns the tile the game shows once `cell` is revealed.
    ///
    /// Horizontal swords are shown with the sprites turned left, boxes are never turned.
    pub fn tile_at(&self, cell: u8) -> Tile {
        if self.blockers.test(cell) {
            return Tile::Blocked;
        }
        if self.sword.mask().test(cell) {
            let rotation = match self.sword.horizontal {
                true => Rotation::Left,
                false => Rotation::None,
            };
            let offset = cell - self.sword.top_left;
            return SwordPart::ALL
                .iter()
                .find(|part| part.anchor_offset(rotation) == offset)
                .map_or(Tile::Unknown, |&part| Tile::Sword(part, rotation));
        }
        if chest_cells(self.chest).any(|chest_cell| chest_cell == cell) {
            let offset = cell - self.chest;
            return Corner::ALL
                .iter()
                .find(|corner| corner.anchor_offset(Rotation::None) == offset)
                .map_or(Tile::Unknown, |&corner| Tile::Box(corner, Rotation::None));
        }
        match self.fox {
            Some(fox) if fox == cell => Tile::Fox,
            _ => Tile::Empty,
        }
    }

    /// Cells that have to be revealed to win the game.
    pub fn prize_cells(&self) -> BitMask {
        self.sword.mask() | chest_cells(self.chest).collect::<BitMask>()
    }
}

/// A game in progress
#[derive(Clone, Debug)]
pub struct Simulation {
    layout: Layout,
    board: BoardState,
    reveals: usize,
}

impl Simulation {
    /// Starts a game with only the blockers visible.
    pub fn new(layout: Layout) -> Result<Self, InconsistentObservation> {
        let mut sim = Simulation {
            layout,
            board: BoardState::new(),
            reveals: 0,
        };
        sim.reset()?;
        Ok(sim)
    }

    /// Covers every cell again except the blockers.
    pub fn reset(&mut self) -> Result<(), InconsistentObservation> {
        let mut tiles = [Tile::Hidden; N_CELLS];
        for cell in self.layout.blockers {
            tiles[cell as usize] = Tile::Blocked;
        }
        self.reveals = 0;
        self.board.update(tiles)
    }

    /// Reveals `cell` and returns what was under it.
    pub fn open(&mut self, cell: u8) -> Result<Tile, InconsistentObservation> {
        let tile = self.layout.tile_at(cell);
        let mut tiles = *self.board.tiles();
        if tiles[cell as usize].is_hidden() {
            self.reveals += 1;
        }
        tiles[cell as usize] = tile;
        self.board.update(tiles)?;
        Ok(tile)
    }

    /// Returns the hidden solution.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the board as the player sees it.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Returns the number of cells revealed so far.
    pub fn reveals(&self) -> usize {
        self.reveals
    }

    /// Checks whether sword and box are fully uncovered.
    pub fn is_solved(&self) -> bool {
        self.layout
            .prize_cells()
            .iter()
            .all(|cell| !self.board.tile(cell).is_hidden())
    }

    /// Returns the cell the solver suggests to reveal next.
    ///
    /// Prefers the lowest hidden cell with the best count. Without any count,
    /// falls back to cells of the confirmed sword, then the confirmed box, then the fox.
    pub fn next_hint(&self, solver: &Solver) -> Option<u8> {
        let solution = solver.solve(&self.board);
        let hidden = |cell: &u8| self.board.tile(*cell).is_hidden();

        let hint = solution.best_cells().find(hidden).or_else(|| {
            [Score::ConfirmedSword, Score::ConfirmedChest, Score::PotentialFox]
                .iter()
                .find_map(|&special| {
                    (0..N_CELLS as u8).find(|cell| hidden(cell) && solution.get(*cell) == special)
                })
        });
        hint
    }

    /// Follows the solver's hints until the game is won or the solver runs out of hints.
    /// Returns the number of cells revealed.
    pub fn play(&mut self, solver: &Solver) -> Result<usize, InconsistentObservation> {
        while !self.is_solved() {
            match self.next_hint(solver) {
                Some(cell) => {
                    log::debug!("opening cell {}", cell);
                    self.open(cell)?;
                }
                None => break,
            }
        }
        Ok(self.reveals)
    }
}
