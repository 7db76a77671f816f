// Solving works by elimination against the catalogue of known layouts.
//
// The blockers are visible from the start and identify the layout. Within the layout,
// a sword placement stays possible as long as either the sword has been seen at exactly
// that spot or none of the cells it would cover has been revealed yet. The same goes for
// box placements. Every cell is then scored by how many of the remaining placements
// cover it. Pieces with only one remaining placement, and the fox cells if all remaining
// box placements agree on them, get a dedicated score instead of a count.

use crate::bitmask::BitMask;
use crate::board::{chest_cells, BoardState, Sword};
use crate::consts::{N_CELLS, WIDTH};
use crate::patterns::{Cell, PatternDb, Row, Sheet};
use std::collections::BTreeSet;
use std::fmt;

/// Raw value of [`Score::ConfirmedSword`]
pub const CONFIRMED_SWORD: i32 = -2;
/// Raw value of [`Score::ConfirmedChest`]
pub const CONFIRMED_CHEST: i32 = -3;
/// Raw value of [`Score::PotentialFox`]
pub const POTENTIAL_FOX: i32 = -4;

/// How interesting a cell is to reveal next
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Score {
    /// Number of remaining sword and box placements covering the cell
    Neutral(u8),
    /// The cell is covered by the only remaining sword placement
    ConfirmedSword,
    /// The cell is covered by the only remaining box placement
    ConfirmedChest,
    /// The fox may hide here
    PotentialFox,
}

impl Default for Score {
    fn default() -> Self {
        Score::Neutral(0)
    }
}

impl Score {
    /// Returns the number of covering placements for neutral cells.
    pub fn count(self) -> Option<u8> {
        match self {
            Score::Neutral(count) => Some(count),
            _ => None,
        }
    }

    /// Returns the score as an integer, with the special scores mapped to negative values.
    pub fn to_raw(self) -> i32 {
        match self {
            Score::Neutral(count) => count as i32,
            Score::ConfirmedSword => CONFIRMED_SWORD,
            Score::ConfirmedChest => CONFIRMED_CHEST,
            Score::PotentialFox => POTENTIAL_FOX,
        }
    }

    // counts add up, special scores replace whatever was there and are never added to
    fn combine(self, other: Score) -> Score {
        match (self, other) {
            (Score::Neutral(a), Score::Neutral(b)) => Score::Neutral(a + b),
            (_, Score::Neutral(_)) => self,
            (_, special) => special,
        }
    }
}

/// The score of every cell on the board
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Solution([Score; N_CELLS]);

impl Solution {
    fn empty() -> Self {
        Solution([Score::default(); N_CELLS])
    }

    /// Returns the score of `cell`.
    pub fn get(&self, cell: u8) -> Score {
        self.0[cell as usize]
    }

    /// Returns the scores of all cells, row by row.
    pub fn scores(&self) -> &[Score; N_CELLS] {
        &self.0
    }

    /// Returns an iterator over the scores of all cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = Score> + '_ {
        self.0.iter().copied()
    }

    /// Returns the highest count of any neutral cell.
    /// If no cell is covered by any placement, there is no best score.
    pub fn best_score(&self) -> Option<u8> {
        self.iter()
            .filter_map(Score::count)
            .max()
            .filter(|&best| best != 0)
    }

    /// Returns the cells with the best score, see [`Solution::best_score`].
    pub fn best_cells(&self) -> impl Iterator<Item = u8> + '_ {
        let best = self.best_score();
        (0..).zip(self.iter()).filter_map(move |(cell, score)| match best {
            Some(best) if score == Score::Neutral(best) => Some(cell),
            _ => None,
        })
    }

    /// Returns the scores as integers, see [`Score::to_raw`].
    pub fn to_raw(&self) -> [i32; N_CELLS] {
        let mut raw = [0; N_CELLS];
        for (raw, score) in raw.iter_mut().zip(self.iter()) {
            *raw = score.to_raw();
        }
        raw
    }

    fn add(&mut self, cells: impl IntoIterator<Item = u8>, score: Score) {
        for cell in cells {
            let slot = &mut self.0[cell as usize];
            *slot = slot.combine(score);
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let best = self.best_score();
        for (cell, score) in (0..).zip(self.iter()) {
            let text = match score {
                Score::ConfirmedSword => "S".to_string(),
                Score::ConfirmedChest => "C".to_string(),
                Score::PotentialFox => "F".to_string(),
                Score::Neutral(count) if Some(count) == best => format!("{}*", count),
                Score::Neutral(count) => count.to_string(),
            };
            write!(f, "{:>4}", text)?;
            if cell % WIDTH == WIDTH - 1 && (cell as usize) < N_CELLS - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Scores the cells of a board against the catalogue of known layouts.
///
/// The solver never changes after construction and can be shared between threads.
#[derive(Clone, Debug)]
pub struct Solver {
    patterns: PatternDb,
    find_swords_first: bool,
}

impl Default for Solver {
    fn default() -> Self {
        Solver::new(PatternDb::new())
    }
}

impl Solver {
    /// Constructs a solver for the given catalogue.
    pub fn new(patterns: PatternDb) -> Self {
        Solver {
            patterns,
            find_swords_first: false,
        }
    }

    /// Sets whether box placements are ignored in the counts while the sword is not pinned down.
    pub fn with_find_swords_first(mut self, find_swords_first: bool) -> Self {
        self.find_swords_first = find_swords_first;
        self
    }

    /// See [`Solver::with_find_swords_first`].
    pub fn set_find_swords_first(&mut self, find_swords_first: bool) {
        self.find_swords_first = find_swords_first;
    }

    /// Returns whether box placements are ignored while the sword is not pinned down.
    pub fn find_swords_first(&self) -> bool {
        self.find_swords_first
    }

    /// Returns the catalogue of layouts.
    pub fn patterns(&self) -> &PatternDb {
        &self.patterns
    }

    /// Scores every cell of the board.
    ///
    /// If the blockers match no known layout, every cell scores `Neutral(0)`.
    pub fn solve(&self, board: &BoardState) -> Solution {
        let mut solution = Solution::empty();
        let sheet = match self.matching_sheet(board) {
            Some(sheet) => sheet,
            None => return solution,
        };

        let mut swords = BTreeSet::<Sword>::new();
        let mut chests = BTreeSet::<u8>::new();
        let mut foxes = BTreeSet::<BitMask>::new();
        for (row, cell) in Solver::candidates(board, sheet) {
            swords.insert(row.sword);
            chests.insert(cell.chest_top_left);
            foxes.insert(cell.foxes);
        }

        let sword_score = match swords.len() {
            1 => Score::ConfirmedSword,
            _ => Score::Neutral(1),
        };
        let chest_score = match chests.len() {
            1 => Score::ConfirmedChest,
            _ if self.find_swords_first && swords.len() > 1 => Score::Neutral(0),
            _ => Score::Neutral(1),
        };

        for sword in &swords {
            solution.add(sword.cells(), sword_score);
        }
        for &chest in &chests {
            solution.add(chest_cells(chest), chest_score);
        }

        let mut foxes = foxes.into_iter();
        if let (Some(fox_cells), None) = (foxes.next(), foxes.next()) {
            for cell in fox_cells {
                solution.0[cell as usize] = Score::PotentialFox;
            }
        }
        solution
    }

    /// Returns the first layout whose blockers equal the blockers of the board.
    pub fn matching_sheet(&self, board: &BoardState) -> Option<&Sheet> {
        self.patterns
            .sheets()
            .iter()
            .find(|sheet| sheet.blockers == board.blockers())
    }

    /// Checks whether the sword placement of `row` is still possible on the board.
    pub fn matches_row(board: &BoardState, row: &Row) -> bool {
        match board.sword() {
            Some(sword) => sword == row.sword,
            None => board.all_hidden(row.sword.cells()),
        }
    }

    /// Checks whether the box placement of `cell` is still possible on the board.
    pub fn matches_cell(board: &BoardState, cell: &Cell) -> bool {
        match board.chest() {
            Some(chest) => chest == cell.chest_top_left,
            None => board.all_hidden(cell.chest_cells()),
        }
    }

    /// Returns every combination of sword and box placement of `sheet` still possible on the board.
    pub fn candidates<'a>(
        board: &'a BoardState,
        sheet: &'a Sheet,
    ) -> impl Iterator<Item = (&'a Row, &'a Cell)> + 'a {
        sheet
            .rows
            .iter()
            .filter(move |row| Solver::matches_row(board, row))
            .flat_map(move |row| {
                row.cells
                    .iter()
                    .filter(move |cell| Solver::matches_cell(board, cell))
                    .map(move |cell| (row, cell))
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::{parse_tiles, Rotation, SwordPart, Tile, Tiles};

    // a single upright layout; its 180° turn has the same blockers and is never matched
    fn synthetic() -> Solver {
        let sheet = Sheet::new(
            BitMask::build(&[0, 35]),
            vec![
                Row::new(
                    Sword::new(1, true),
                    vec![
                        Cell::new(24, BitMask::build(&[5, 11])),
                        Cell::new(27, BitMask::build(&[5, 11])),
                    ],
                ),
                Row::new(Sword::new(2, true), vec![Cell::new(24, BitMask::build(&[17]))]),
            ],
        );
        Solver::new(PatternDb::from_upright(vec![sheet]))
    }

    fn board(blocked: &[u8]) -> Tiles {
        let mut tiles = [Tile::Hidden; N_CELLS];
        for &cell in blocked {
            tiles[cell as usize] = Tile::Blocked;
        }
        tiles
    }

    #[test]
    fn no_matching_sheet() {
        let solver = synthetic();
        let board = BoardState::from_tiles(board(&[0])).unwrap();
        assert_eq!(solver.solve(&board), Solution::empty());
        assert_eq!(solver.solve(&BoardState::new()).to_raw(), [0; N_CELLS]);
    }

    #[test]
    fn overlapping_swords_accumulate() {
        let solver = synthetic();
        let board = BoardState::from_tiles(board(&[0, 35])).unwrap();
        let solution = solver.solve(&board);

        // swords at 1 and 2 share cells 2, 3, 8, 9
        for &cell in &[2, 3, 8, 9] {
            assert_eq!(solution.get(cell), Score::Neutral(2), "cell {}", cell);
        }
        for &cell in &[1, 4, 7, 10] {
            assert_eq!(solution.get(cell), Score::Neutral(1), "cell {}", cell);
        }
        // two chests, one per row for 24 and one for 27
        for &cell in &[24, 25, 30, 31, 27, 28, 33, 34] {
            assert_eq!(solution.get(cell), Score::Neutral(1), "cell {}", cell);
        }
        assert_eq!(solution.best_score(), Some(2));
        assert!(solution.best_cells().eq(vec![2, 3, 8, 9]));
    }

    #[test]
    fn find_swords_first_hides_chests() {
        let solver = synthetic().with_find_swords_first(true);
        let board = BoardState::from_tiles(board(&[0, 35])).unwrap();
        let solution = solver.solve(&board);
        for &cell in &[24, 25, 30, 31, 27, 28, 33, 34] {
            assert_eq!(solution.get(cell), Score::Neutral(0), "cell {}", cell);
        }
        assert_eq!(solution.get(2), Score::Neutral(2));
    }

    #[test]
    fn revealed_sword_confirms_row() {
        let solver = synthetic().with_find_swords_first(true);
        let mut tiles = board(&[0, 35]);
        tiles[1] = Tile::Sword(SwordPart::TopRight, Rotation::Left);
        let board = BoardState::from_tiles(tiles).unwrap();
        let solution = solver.solve(&board);

        for &cell in &[1, 2, 3, 7, 8, 9] {
            assert_eq!(solution.get(cell), Score::ConfirmedSword);
        }
        // the sword is known, so chests count again
        assert_eq!(solution.get(24), Score::Neutral(1));
        assert_eq!(solution.get(27), Score::Neutral(1));
        // both remaining chests agree on the fox
        assert_eq!(solution.get(5), Score::PotentialFox);
        assert_eq!(solution.get(11), Score::PotentialFox);
    }

    #[test]
    fn empty_tile_eliminates_row() {
        let solver = synthetic();
        let mut tiles = board(&[0, 35]);
        tiles[1] = Tile::Empty;
        tiles[27] = Tile::Empty;
        let board = BoardState::from_tiles(tiles).unwrap();
        let solution = solver.solve(&board);

        assert_eq!(solution.iter().filter(|&s| s == Score::ConfirmedSword).count(), 6);
        assert_eq!(solution.get(24), Score::ConfirmedChest);
        assert_eq!(solution.get(17), Score::PotentialFox);
        assert_eq!(solution.best_score(), None);
        assert_eq!(solution.best_cells().count(), 0);
    }

    #[test]
    fn special_scores_are_not_added_to() {
        assert_eq!(Score::ConfirmedChest.combine(Score::Neutral(1)), Score::ConfirmedChest);
        assert_eq!(Score::Neutral(1).combine(Score::ConfirmedChest), Score::ConfirmedChest);
        assert_eq!(Score::Neutral(1).combine(Score::Neutral(1)), Score::Neutral(2));
    }

    #[test]
    fn raw_scores() {
        let solver = synthetic();
        // bottom-left corner turned left shows at the bottom-right of the footprint
        let tiles = parse_tiles(
            "
            #    .    .    .    .    .
            .    .    .    .    .    .
            .    .    .    .    .    .
            .    .    .    .    .    .
            .    .    .    .    .    .
            .    Bbl< .    .    .    #",
        )
        .unwrap();
        let board = BoardState::from_tiles(tiles).unwrap();
        assert_eq!(board.chest(), Some(24));

        let raw = solver.solve(&board).to_raw();
        assert_eq!(raw[2], 2);
        assert_eq!(raw[1], 1);
        assert_eq!(raw[24], CONFIRMED_CHEST);
        assert_eq!(raw[31], CONFIRMED_CHEST);
        assert_eq!(raw[0], 0);
        // both rows allow the chest at 24 but disagree on the fox
        assert_eq!(raw[5], 0);
        assert_eq!(raw[17], 0);
    }

    #[test]
    fn display() {
        let solver = synthetic();
        let board = BoardState::from_tiles(board(&[0, 35])).unwrap();
        let text = solver.solve(&board).to_string();
        let first_row = text.lines().next().unwrap();
        assert_eq!(first_row, "   0   1  2*  2*   1   0");
        assert_eq!(text.lines().count(), 6);
    }
}
