//! Types for tiles, piece placements and the observed state of a board
mod geometry;
mod state;
mod tile;

pub(crate) use self::geometry::rotate_chest_left;

#[rustfmt::skip]
pub use self::{
    geometry::{chest_cells, rect_cells, rect_fits, rotate_cell_left, rotate_mask_left, Sword},
    state::{display_tiles, parse_tiles, BoardState, Tiles},
    tile::{Corner, Rotation, SwordPart, Tile},
};
