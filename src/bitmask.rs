//! Fixed-size bitset over the cells of the board
//!
//! Layouts are stored as sets of cells a lot: blockers, fox positions, piece footprints.
//! `BitMask` packs such a set into a single integer, one bit per cell in row-major order,
//! so that comparing two layouts is a single integer comparison.

use crate::consts::N_CELLS;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// Set of board cells, one bit per cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitMask(u64);

/// Iterator over the cells contained in a [`BitMask`], in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iter(u64);

impl BitMask {
    /// Bits of all cells on the board
    const ALL: u64 = (1 << N_CELLS) - 1;

    /// Empty mask
    pub const NONE: BitMask = BitMask(0);

    /// Constructs an empty mask.
    pub fn new() -> Self {
        BitMask::NONE
    }

    /// Constructs a mask containing exactly the given cells.
    ///
    /// # Panic
    /// Panics, if any cell is outside of the board
    pub fn build(cells: &[u8]) -> Self {
        cells.iter().copied().collect()
    }

    /// Construct a mask from a raw integer.
    ///
    /// # Panic
    /// Panics, if the integer contains bits beyond the last cell
    pub fn from_bits(bits: u64) -> Self {
        assert!(bits <= Self::ALL, "mask {:#x} exceeds the board", bits);
        BitMask(bits)
    }

    /// Return the raw integer backing the mask.
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Adds `cell` to the mask.
    ///
    /// # Panic
    /// Panics, if the cell is outside of the board
    #[inline]
    pub fn set(&mut self, cell: u8) {
        self.0 |= bit(cell);
    }

    /// Checks whether `cell` is part of the mask.
    ///
    /// # Panic
    /// Panics, if the cell is outside of the board
    #[inline]
    pub fn test(self, cell: u8) -> bool {
        self.0 & bit(cell) != 0
    }

    /// Removes all cells.
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// Returns an iterator over the contained cells, lowest first.
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }

    /// Returns the number of cells in this mask.
    pub fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Checks whether this mask contains any cell.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Checks if `self` and `other` contain any common cell.
    pub fn overlaps(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

#[inline(always)]
fn bit(cell: u8) -> u64 {
    assert!((cell as usize) < N_CELLS, "cell {} is outside of the board", cell);
    1 << cell
}

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        let lowest_bit = self.0 & (!self.0 + 1);
        self.0 ^= lowest_bit;
        Some(lowest_bit.trailing_zeros() as u8)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl IntoIterator for BitMask {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl FromIterator<u8> for BitMask {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut mask = BitMask::new();
        for cell in iter {
            mask.set(cell);
        }
        mask
    }
}

impl BitOr for BitMask {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, other: Self) -> Self {
        BitMask(self.0 | other.0)
    }
}

impl BitAnd for BitMask {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, other: Self) -> Self {
        BitMask(self.0 & other.0)
    }
}

impl BitOrAssign for BitMask {
    #[inline(always)]
    fn bitor_assign(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitAndAssign for BitMask {
    #[inline(always)]
    fn bitand_assign(&mut self, other: Self) {
        self.0 &= other.0;
    }
}

impl fmt::Binary for BitMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn set_bits_ascending() {
        let mask = BitMask::build(&[35, 4, 17, 0]);
        assert!(mask.iter().eq(vec![0, 4, 17, 35]));
        assert_eq!(mask.len(), 4);
        assert_eq!(mask.iter().len(), 4);
    }

    #[test]
    fn iteration_restarts() {
        let mask = BitMask::build(&[3, 9]);
        let first: Vec<_> = mask.iter().collect();
        let second: Vec<_> = mask.into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn set_test_reset() {
        let mut mask = BitMask::new();
        assert!(mask.is_empty());
        mask.set(12);
        assert!(mask.test(12));
        assert!(!mask.test(13));
        mask.reset();
        assert_eq!(mask, BitMask::NONE);
    }

    #[test]
    fn copies_are_independent() {
        let mut a = BitMask::build(&[1]);
        let b = a;
        a.set(2);
        assert_ne!(a, b);
        assert_eq!(b.bits(), 0b10);
    }

    #[test]
    #[should_panic]
    fn out_of_range() {
        BitMask::new().set(36);
    }

    #[test]
    #[should_panic]
    fn raw_out_of_range() {
        BitMask::from_bits(1 << 36);
    }
}
