use crate::bitmask::BitMask;
use crate::consts::{HEIGHT, N_CELLS, WIDTH};

#[inline(always)]
fn col(cell: u8) -> u8 {
    cell % WIDTH
}

#[inline(always)]
fn row(cell: u8) -> u8 {
    cell / WIDTH
}

/// Maps a cell to its position on the board after turning the board by 90°.
///
/// The cell at `(x, y)` ends up at `(WIDTH - 1 - y, x)`.
pub fn rotate_cell_left(cell: u8) -> u8 {
    let (x, y) = (col(cell), row(cell));
    let (xr, yr) = (WIDTH - 1 - y, x);
    yr * WIDTH + xr
}

/// Turns every cell of `mask` by 90°, see [`rotate_cell_left`].
pub fn rotate_mask_left(mask: BitMask) -> BitMask {
    mask.iter().map(rotate_cell_left).collect()
}

/// Checks whether the `width` x `height` rectangle with the top-left cell `top_left` lies on the board.
pub fn rect_fits(top_left: u8, width: u8, height: u8) -> bool {
    (top_left as usize) < N_CELLS && col(top_left) + width <= WIDTH && row(top_left) + height <= HEIGHT
}

/// Cells of the `width` x `height` rectangle with the top-left cell `top_left`, row by row.
pub fn rect_cells(top_left: u8, width: u8, height: u8) -> impl Iterator<Item = u8> {
    let (x, y) = (col(top_left), row(top_left));
    debug_assert!(rect_fits(top_left, width, height), "rectangle at {} leaves the board", top_left);
    (y..y + height).flat_map(move |y| (x..x + width).map(move |x| y * WIDTH + x))
}

/// Cells covered by the 2x2 box or chest with the top-left cell `top_left`.
pub fn chest_cells(top_left: u8) -> impl Iterator<Item = u8> {
    rect_cells(top_left, 2, 2)
}

/// A placement of the sword piece
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sword {
    /// Top-left cell of the footprint
    pub top_left: u8,
    /// `true` for a 3 wide, 2 tall footprint, `false` for 2 wide, 3 tall
    pub horizontal: bool,
}

impl Sword {
    /// Constructs a new sword placement.
    pub fn new(top_left: u8, horizontal: bool) -> Self {
        Sword { top_left, horizontal }
    }

    /// Width and height of the footprint.
    pub fn dimensions(self) -> (u8, u8) {
        match self.horizontal {
            true => (3, 2),
            false => (2, 3),
        }
    }

    /// Checks whether the whole footprint lies on the board.
    pub fn fits(self) -> bool {
        let (width, height) = self.dimensions();
        rect_fits(self.top_left, width, height)
    }

    /// Cells covered by the sword, row by row.
    pub fn cells(self) -> impl Iterator<Item = u8> {
        let (width, height) = self.dimensions();
        rect_cells(self.top_left, width, height)
    }

    /// Cells covered by the sword as a mask.
    pub fn mask(self) -> BitMask {
        self.cells().collect()
    }

    /// Placement of the same sword after turning the board by 90°.
    ///
    /// The rotated anchor is the old top-left corner, which becomes the top-right corner
    /// of the turned footprint. The new top-left lies one column further left for
    /// a footprint that becomes vertical and two columns for one that becomes horizontal.
    pub fn rotate_left(self) -> Self {
        let offset = if self.horizontal { 1 } else { 2 };
        Sword::new(rotate_cell_left(self.top_left) - offset, !self.horizontal)
    }
}

/// Top-left cell of the 2x2 piece with top-left cell `top_left` after turning the board by 90°.
pub(crate) fn rotate_chest_left(top_left: u8) -> u8 {
    rotate_cell_left(top_left) - 1
}
