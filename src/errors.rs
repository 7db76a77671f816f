//! Errors that may be encountered when reading or updating a board
use crate::board::Tile;
#[cfg(doc)]
use crate::board::{parse_tiles, BoardState};

/// Error for [`BoardState::update`]
///
/// The observation places a piece in two different spots or partly off the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InconsistentObservation {
    /// Sword tile contradicts the sword placement implied by earlier tiles
    #[error("sword tile {tile} at cell {cell} does not fit the sword seen so far")]
    Sword {
        /// Cell of the offending tile
        cell: u8,
        /// The offending tile
        tile: Tile,
    },
    /// Box or chest tile contradicts the placement implied by earlier tiles
    #[error("box tile {tile} at cell {cell} does not fit the box seen so far")]
    Chest {
        /// Cell of the offending tile
        cell: u8,
        /// The offending tile
        tile: Tile,
    },
}

/// Error for parsing a single tile token
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("invalid tile '{0}'")]
pub struct InvalidTile(pub String);

/// Error for [`parse_tiles`]
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseObservationError {
    /// Token that is not a tile
    #[error("cell {cell}: {source}")]
    InvalidTile {
        /// Cell number in `0..36`, row by row
        cell: u8,
        /// What went wrong
        source: InvalidTile,
    },
    /// Observation doesn't contain exactly 36 tiles
    #[error("observation should have 36 tiles, found {0}")]
    WrongTileCount(usize),
}
