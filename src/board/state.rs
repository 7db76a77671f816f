use super::geometry::{rect_fits, Sword};
use super::tile::{Rotation, Tile};
use crate::bitmask::BitMask;
use crate::consts::{N_CELLS, WIDTH};
use crate::errors::{InconsistentObservation, ParseObservationError};
use std::fmt;

/// One tile classification per cell, row by row
pub type Tiles = [Tile; N_CELLS];

/// The observed state of a board and what it reveals about the hidden pieces.
///
/// The state only changes through [`BoardState::update`], which replaces all tiles at once
/// and derives the blockers and any piece placement the revealed tiles pin down.
/// A piece stays unknown until one of its tiles has been revealed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoardState {
    tiles: Tiles,
    blockers: BitMask,
    sword: Option<Sword>,
    chest: Option<u8>,
}

// derived from a full set of tiles
struct Summary {
    blockers: BitMask,
    sword: Option<Sword>,
    chest: Option<u8>,
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState::new()
    }
}

impl BoardState {
    /// Constructs a board where nothing is known.
    pub fn new() -> Self {
        BoardState {
            tiles: [Tile::Unknown; N_CELLS],
            blockers: BitMask::NONE,
            sword: None,
            chest: None,
        }
    }

    /// Constructs a board from an observation, see [`BoardState::update`].
    pub fn from_tiles(tiles: Tiles) -> Result<Self, InconsistentObservation> {
        let mut board = BoardState::new();
        board.update(tiles)?;
        Ok(board)
    }

    /// Replaces the observation and rederives blockers and piece placements.
    ///
    /// If the tiles imply two different placements for the sword or for the box,
    /// the board is reset to the state of [`BoardState::new`] and the first contradicting
    /// tile is returned as error.
    pub fn update(&mut self, tiles: Tiles) -> Result<(), InconsistentObservation> {
        match analyze(&tiles) {
            Ok(Summary { blockers, sword, chest }) => {
                log::trace!("board updated: sword {:?}, chest {:?}", sword, chest);
                *self = BoardState { tiles, blockers, sword, chest };
                Ok(())
            }
            Err(err) => {
                log::error!("inconsistent tile pattern, {}:\n{}", err, display_tiles(&tiles));
                self.reset();
                Err(err)
            }
        }
    }

    /// Forgets everything about the board.
    pub fn reset(&mut self) {
        *self = BoardState::new();
    }

    /// Returns the observed tiles.
    pub fn tiles(&self) -> &Tiles {
        &self.tiles
    }

    /// Returns the observed tile of `cell`.
    pub fn tile(&self, cell: u8) -> Tile {
        self.tiles[cell as usize]
    }

    /// Returns the blocked cells.
    pub fn blockers(&self) -> BitMask {
        self.blockers
    }

    /// Returns the sword placement, if any sword tile has been revealed.
    pub fn sword(&self) -> Option<Sword> {
        self.sword
    }

    /// Returns the top-left cell of the box or chest, if any of its tiles has been revealed.
    pub fn chest(&self) -> Option<u8> {
        self.chest
    }

    /// Checks whether all of `cells` are still covered.
    pub fn all_hidden(&self, cells: impl IntoIterator<Item = u8>) -> bool {
        cells.into_iter().all(|cell| self.tile(cell).is_hidden())
    }
}

fn analyze(tiles: &Tiles) -> Result<Summary, InconsistentObservation> {
    let mut summary = Summary {
        blockers: BitMask::new(),
        sword: None,
        chest: None,
    };

    for (cell, &tile) in (0..).zip(tiles.iter()) {
        match tile {
            Tile::Blocked => summary.blockers.set(cell),
            Tile::Sword(part, rotation) => {
                let sword = cell
                    .checked_sub(part.anchor_offset(rotation))
                    .map(|top_left| Sword::new(top_left, rotation != Rotation::None))
                    .filter(|sword| sword.fits());
                match (sword, summary.sword) {
                    (Some(sword), None) => summary.sword = Some(sword),
                    (Some(sword), Some(seen)) if sword == seen => {}
                    _ => return Err(InconsistentObservation::Sword { cell, tile }),
                }
            }
            Tile::Box(corner, rotation) | Tile::Chest(corner, rotation) => {
                let top_left = cell
                    .checked_sub(corner.anchor_offset(rotation))
                    .filter(|&top_left| rect_fits(top_left, 2, 2));
                match (top_left, summary.chest) {
                    (Some(top_left), None) => summary.chest = Some(top_left),
                    (Some(top_left), Some(seen)) if top_left == seen => {}
                    _ => return Err(InconsistentObservation::Chest { cell, tile }),
                }
            }
            Tile::Unknown | Tile::Hidden | Tile::Empty | Tile::Fox => {}
        }
    }
    Ok(summary)
}

/// Reads an observation from whitespace separated tile tokens, row by row.
///
/// See the [`Tile`] `FromStr` implementation for the tokens. Line breaks carry no meaning.
///
/// ```
/// let tiles = faux_hollows::board::parse_tiles("
///     .  .  #  .  .  .
///     .  #  .  .  .  .
///     .  .  .  .  .  .
///     .  #  .  .  Stl Str
///     .  .  .  .  Sml Smr
///     .  .  .  .  Sbl Sbr
/// ").unwrap();
/// assert_eq!(tiles[2], faux_hollows::board::Tile::Blocked);
/// assert_eq!(tiles[19], faux_hollows::board::Tile::Blocked);
/// ```
pub fn parse_tiles(s: &str) -> Result<Tiles, ParseObservationError> {
    let mut tiles = [Tile::Unknown; N_CELLS];
    let mut n_tiles = 0;
    for (cell, token) in s.split_whitespace().enumerate() {
        if cell < N_CELLS {
            tiles[cell] = token
                .parse()
                .map_err(|source| ParseObservationError::InvalidTile { cell: cell as u8, source })?;
        }
        n_tiles += 1;
    }

    match n_tiles {
        N_CELLS => Ok(tiles),
        _ => Err(ParseObservationError::WrongTileCount(n_tiles)),
    }
}

/// Formats an observation as a grid in the format read by [`parse_tiles`].
pub fn display_tiles(tiles: &Tiles) -> impl fmt::Display + '_ {
    TileGrid(tiles)
}

struct TileGrid<'a>(&'a Tiles);

impl fmt::Display for TileGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (n, row) in self.0.chunks(WIDTH as usize).enumerate() {
            if n != 0 {
                writeln!(f)?;
            }
            for (col, tile) in row.iter().enumerate() {
                match col + 1 == row.len() {
                    true => write!(f, "{}", tile)?,
                    false => write!(f, "{:<5}", tile)?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::{Corner, SwordPart};

    fn hidden() -> Tiles {
        [Tile::Hidden; N_CELLS]
    }

    #[test]
    fn all_hidden() {
        let board = BoardState::from_tiles(hidden()).unwrap();
        assert_eq!(board.blockers(), BitMask::NONE);
        assert_eq!(board.sword(), None);
        assert_eq!(board.chest(), None);
        assert!(board.all_hidden(0..N_CELLS as u8));
    }

    #[test]
    fn blockers() {
        let mut tiles = hidden();
        for &cell in &[8, 10, 13, 26, 35] {
            tiles[cell] = Tile::Blocked;
        }
        let board = BoardState::from_tiles(tiles).unwrap();
        assert_eq!(board.blockers(), BitMask::build(&[8, 10, 13, 26, 35]));
    }

    #[test]
    fn every_sword_part_finds_the_anchor() {
        use strum::IntoEnumIterator;
        // vertical sword at 14 covers 14, 15, 20, 21, 26, 27
        // horizontal sword at 14 covers 14, 15, 16, 20, 21, 22
        for rotation in Rotation::iter() {
            for part in SwordPart::iter() {
                let mut tiles = hidden();
                let cell = 14 + part.anchor_offset(rotation);
                tiles[cell as usize] = Tile::Sword(part, rotation);
                let board = BoardState::from_tiles(tiles).unwrap();
                let sword = board.sword().unwrap();
                assert_eq!(sword.top_left, 14);
                assert_eq!(sword.horizontal, rotation != Rotation::None);
            }
        }
    }

    #[test]
    fn agreeing_tiles() {
        let mut tiles = hidden();
        tiles[3] = Tile::Sword(SwordPart::TopLeft, Rotation::None);
        tiles[16] = Tile::Sword(SwordPart::BottomRight, Rotation::None);
        tiles[28] = Tile::Box(Corner::TopLeft, Rotation::None);
        tiles[35] = Tile::Chest(Corner::BottomRight, Rotation::None);
        let board = BoardState::from_tiles(tiles).unwrap();
        assert_eq!(board.sword(), Some(Sword::new(3, false)));
        assert_eq!(board.chest(), Some(28));
    }

    #[test]
    fn contradicting_swords_reset_the_board() {
        let mut board = BoardState::new();
        let mut tiles = hidden();
        tiles[0] = Tile::Blocked;
        board.update(tiles).unwrap();
        assert_eq!(board.blockers().len(), 1);

        tiles[3] = Tile::Sword(SwordPart::TopLeft, Rotation::None);
        tiles[5] = Tile::Sword(SwordPart::TopLeft, Rotation::None);
        assert_eq!(
            board.update(tiles),
            Err(InconsistentObservation::Sword { cell: 5, tile: tiles[5] })
        );
        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn orientation_mismatch() {
        let mut tiles = hidden();
        // same anchor, different footprints
        tiles[14] = Tile::Sword(SwordPart::TopLeft, Rotation::None);
        tiles[16] = Tile::Sword(SwordPart::BottomRight, Rotation::Left);
        assert!(BoardState::from_tiles(tiles).is_err());
    }

    #[test]
    fn anchor_off_the_board() {
        let mut tiles = hidden();
        tiles[3] = Tile::Sword(SwordPart::BottomLeft, Rotation::None);
        assert_eq!(
            BoardState::from_tiles(tiles),
            Err(InconsistentObservation::Sword { cell: 3, tile: tiles[3] })
        );

        let mut tiles = hidden();
        tiles[0] = Tile::Chest(Corner::BottomRight, Rotation::None);
        assert!(BoardState::from_tiles(tiles).is_err());

        // the footprint would wrap around into the next row
        let mut tiles = hidden();
        tiles[6] = Tile::Sword(SwordPart::TopRight, Rotation::None);
        assert!(BoardState::from_tiles(tiles).is_err());

        let mut tiles = hidden();
        tiles[11] = Tile::Box(Corner::TopLeft, Rotation::None);
        assert!(BoardState::from_tiles(tiles).is_err());
    }

    #[test]
    fn contradicting_chests() {
        let mut tiles = hidden();
        tiles[0] = Tile::Box(Corner::TopLeft, Rotation::None);
        tiles[9] = Tile::Chest(Corner::TopLeft, Rotation::None);
        assert_eq!(
            BoardState::from_tiles(tiles),
            Err(InconsistentObservation::Chest { cell: 9, tile: tiles[9] })
        );
    }

    #[test]
    fn parse_and_display() {
        let text = "\
.    .    #    .    .    .
.    #    .    .    .    .
.    .    .    .    .    .
#    .    .    .    Stl  Str
.    .    .    .    Sml  Smr
_    F    Btl< ?    Sbl  Sbr";
        let tiles = parse_tiles(text).unwrap();
        assert_eq!(tiles[34], Tile::Sword(SwordPart::BottomLeft, Rotation::None));
        assert_eq!(tiles[32], Tile::Box(Corner::TopLeft, Rotation::Left));
        assert_eq!(display_tiles(&tiles).to_string(), text);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_tiles(". . ."), Err(ParseObservationError::WrongTileCount(3)));
        let mut text = ". ".repeat(N_CELLS);
        text.push('.');
        assert_eq!(parse_tiles(&text), Err(ParseObservationError::WrongTileCount(N_CELLS + 1)));
        let text = format!("Sxx {}", ". ".repeat(N_CELLS - 1));
        match parse_tiles(&text) {
            Err(ParseObservationError::InvalidTile { cell: 0, .. }) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }
}
