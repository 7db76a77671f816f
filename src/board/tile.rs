use crate::consts::WIDTH;
use crate::errors::InvalidTile;
use std::fmt;
use std::str::FromStr;

/// How the icon on a revealed tile is turned.
///
/// The game draws horizontal swords by rotating the vertical sprites, so the rotation
/// tells apart the two possible footprints of the sword.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[allow(missing_docs)]
pub enum Rotation {
    None,
    Left,
    Right,
}

/// One of the six tiles of the 2x3 sword sprite, named by its place in the upright sprite.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[allow(missing_docs)]
pub enum SwordPart {
    TopLeft,
    TopRight,
    MiddleLeft,
    MiddleRight,
    BottomLeft,
    BottomRight,
}

/// One of the four tiles of a 2x2 sprite, named by its place in the upright sprite.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[allow(missing_docs)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Classification of a single board tile as read from the game.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// The tile could not be classified
    Unknown,
    /// Not revealed yet
    Hidden,
    /// Permanently blocked, visible from the start
    Blocked,
    /// Revealed, nothing underneath
    Empty,
    /// Part of the sword piece
    Sword(SwordPart, Rotation),
    /// Part of the gift box
    Box(Corner, Rotation),
    /// Part of the chest, which takes the place of the box on some boards
    Chest(Corner, Rotation),
    /// The fox
    Fox,
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Unknown
    }
}

impl SwordPart {
    /// All parts of the sword
    #[rustfmt::skip]
    pub const ALL: [SwordPart; 6] = [
        SwordPart::TopLeft, SwordPart::TopRight,
        SwordPart::MiddleLeft, SwordPart::MiddleRight,
        SwordPart::BottomLeft, SwordPart::BottomRight,
    ];

    /// Distance from the top-left cell of the sword's footprint to this tile.
    ///
    /// Rotated sprites cover a 3x2 footprint, upright ones a 2x3 footprint.
    pub fn anchor_offset(self, rotation: Rotation) -> u8 {
        use self::Rotation::*;
        use self::SwordPart::*;
        const W: u8 = WIDTH;

        #[rustfmt::skip]
        let offset = match (rotation, self) {
            (None, TopLeft)      => 0,
            (None, TopRight)     => 1,
            (None, MiddleLeft)   => W,
            (None, MiddleRight)  => W + 1,
            (None, BottomLeft)   => W * 2,
            (None, BottomRight)  => W * 2 + 1,

            (Left, TopLeft)      => W,
            (Left, TopRight)     => 0,
            (Left, MiddleLeft)   => W + 1,
            (Left, MiddleRight)  => 1,
            (Left, BottomLeft)   => W + 2,
            (Left, BottomRight)  => 2,

            (Right, TopLeft)     => 2,
            (Right, TopRight)    => W + 2,
            (Right, MiddleLeft)  => 1,
            (Right, MiddleRight) => W + 1,
            (Right, BottomLeft)  => 0,
            (Right, BottomRight) => W,
        };
        offset
    }

    fn code(self) -> &'static str {
        match self {
            SwordPart::TopLeft => "tl",
            SwordPart::TopRight => "tr",
            SwordPart::MiddleLeft => "ml",
            SwordPart::MiddleRight => "mr",
            SwordPart::BottomLeft => "bl",
            SwordPart::BottomRight => "br",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "tl" => SwordPart::TopLeft,
            "tr" => SwordPart::TopRight,
            "ml" => SwordPart::MiddleLeft,
            "mr" => SwordPart::MiddleRight,
            "bl" => SwordPart::BottomLeft,
            "br" => SwordPart::BottomRight,
            _ => return None,
        })
    }
}

impl Corner {
    /// All corners
    #[rustfmt::skip]
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft, Corner::TopRight,
        Corner::BottomLeft, Corner::BottomRight,
    ];

    /// Distance from the top-left cell of the 2x2 footprint to this tile.
    pub fn anchor_offset(self, rotation: Rotation) -> u8 {
        use self::Corner::*;
        use self::Rotation::*;
        const W: u8 = WIDTH;

        #[rustfmt::skip]
        let offset = match (rotation, self) {
            (None, TopLeft)      => 0,
            (None, TopRight)     => 1,
            (None, BottomLeft)   => W,
            (None, BottomRight)  => W + 1,

            (Left, TopLeft)      => W,
            (Left, TopRight)     => 0,
            (Left, BottomLeft)   => W + 1,
            (Left, BottomRight)  => 1,

            (Right, TopLeft)     => 1,
            (Right, TopRight)    => W + 1,
            (Right, BottomLeft)  => 0,
            (Right, BottomRight) => W,
        };
        offset
    }

    fn code(self) -> &'static str {
        match self {
            Corner::TopLeft => "tl",
            Corner::TopRight => "tr",
            Corner::BottomLeft => "bl",
            Corner::BottomRight => "br",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "tl" => Corner::TopLeft,
            "tr" => Corner::TopRight,
            "bl" => Corner::BottomLeft,
            "br" => Corner::BottomRight,
            _ => return None,
        })
    }
}

impl Rotation {
    fn suffix(self) -> &'static str {
        match self {
            Rotation::None => "",
            Rotation::Left => "<",
            Rotation::Right => ">",
        }
    }
}

impl Tile {
    /// Checks whether the tile is still covered.
    pub fn is_hidden(self) -> bool {
        self == Tile::Hidden
    }
}

// Token format:
// `?` unknown, `.` hidden, `#` blocked, `_` empty, `F` fox,
// `S<part>`, `B<corner>`, `C<corner>` for pieces, optionally followed by `<` or `>` for the rotation
impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Tile::Unknown => f.pad("?"),
            Tile::Hidden => f.pad("."),
            Tile::Blocked => f.pad("#"),
            Tile::Empty => f.pad("_"),
            Tile::Fox => f.pad("F"),
            Tile::Sword(part, rot) => f.pad(&format!("S{}{}", part.code(), rot.suffix())),
            Tile::Box(corner, rot) => f.pad(&format!("B{}{}", corner.code(), rot.suffix())),
            Tile::Chest(corner, rot) => f.pad(&format!("C{}{}", corner.code(), rot.suffix())),
        }
    }
}

impl FromStr for Tile {
    type Err = InvalidTile;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidTile(token.to_owned());

        match token {
            "?" => return Ok(Tile::Unknown),
            "." => return Ok(Tile::Hidden),
            "#" => return Ok(Tile::Blocked),
            "_" => return Ok(Tile::Empty),
            "F" => return Ok(Tile::Fox),
            _ => {}
        }

        let (body, rotation) = if let Some(body) = token.strip_suffix('<') {
            (body, Rotation::Left)
        } else if let Some(body) = token.strip_suffix('>') {
            (body, Rotation::Right)
        } else {
            (token, Rotation::None)
        };

        let mut chars = body.chars();
        let piece = chars.next().ok_or_else(invalid)?;
        let code = chars.as_str();
        match piece {
            'S' => SwordPart::from_code(code).map(|part| Tile::Sword(part, rotation)),
            'B' => Corner::from_code(code).map(|corner| Tile::Box(corner, rotation)),
            'C' => Corner::from_code(code).map(|corner| Tile::Chest(corner, rotation)),
            _ => None,
        }
        .ok_or_else(invalid)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::{chest_cells, Sword};
    use strum::IntoEnumIterator;

    // place a piece at a fixed anchor and check that every part points back to it
    #[test]
    fn sword_offsets_stay_in_footprint() {
        let anchor = 14;
        for rotation in Rotation::iter() {
            let sword = Sword::new(anchor, rotation != Rotation::None);
            let footprint: Vec<u8> = sword.cells().collect();
            let mut seen = vec![];
            for part in SwordPart::iter() {
                let cell = anchor + part.anchor_offset(rotation);
                assert!(footprint.contains(&cell), "{:?} {:?}", part, rotation);
                seen.push(cell);
            }
            seen.sort();
            assert_eq!(seen, footprint);
        }
    }

    #[test]
    fn corner_offsets_stay_in_footprint() {
        let anchor = 14;
        for rotation in Rotation::iter() {
            let footprint: Vec<u8> = chest_cells(anchor).collect();
            let mut seen: Vec<u8> = Corner::iter()
                .map(|corner| anchor + corner.anchor_offset(rotation))
                .collect();
            seen.sort();
            assert_eq!(seen, footprint);
        }
    }

    #[test]
    fn tokens() {
        for tile in Rotation::iter().flat_map(|rot| {
            SwordPart::iter()
                .map(move |part| Tile::Sword(part, rot))
                .chain(Corner::iter().map(move |corner| Tile::Box(corner, rot)))
                .chain(Corner::iter().map(move |corner| Tile::Chest(corner, rot)))
        }) {
            assert_eq!(tile.to_string().parse::<Tile>(), Ok(tile));
        }
        assert_eq!("Smr<".parse::<Tile>(), Ok(Tile::Sword(SwordPart::MiddleRight, Rotation::Left)));
        assert_eq!("Cbl".parse::<Tile>(), Ok(Tile::Chest(Corner::BottomLeft, Rotation::None)));
        assert_eq!("#".parse::<Tile>(), Ok(Tile::Blocked));
        assert!("Bml".parse::<Tile>().is_err());
        assert!("".parse::<Tile>().is_err());
        assert!("X".parse::<Tile>().is_err());
    }
}
