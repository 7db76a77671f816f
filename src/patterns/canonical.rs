//! The four upright board layouts of the puzzle.
//!
//! Every layout lists all sword placements the game can pick for it and, for each sword
//! placement, all box placements with the cells where the fox may hide.

use super::{Cell, Row, Sheet};
use crate::bitmask::BitMask;
use crate::board::Sword;

const H: bool = true;
const V: bool = false;

fn sheet(blockers: &[u8], rows: Vec<Row>) -> Sheet {
    Sheet::new(BitMask::build(blockers), rows)
}

fn row(sword_top_left: u8, horizontal: bool, cells: Vec<Cell>) -> Row {
    Row::new(Sword::new(sword_top_left, horizontal), cells)
}

fn cell(chest_top_left: u8, foxes: &[u8]) -> Cell {
    Cell::new(chest_top_left, BitMask::build(foxes))
}

pub(super) fn sheets() -> Vec<Sheet> {
    vec![
        // A
        sheet(&[8, 10, 13, 26, 35], vec![
            row(16, V, vec![
                cell(0, &[3, 4, 12, 30]),
                cell(14, &[3, 4, 5, 12, 30]),
                cell(24, &[]),
                cell(18, &[]),
            ]),
            row(15, V, vec![
                cell(0, &[9, 12, 17, 33, 34]),
                cell(18, &[9, 17, 32, 33, 34]),
                cell(24, &[]),
            ]),
            row(21, V, vec![
                cell(0, &[5, 15, 16, 20]),
                cell(18, &[5, 15, 16, 20]),
                cell(24, &[]),
            ]),
            row(15, H, vec![
                cell(18, &[3, 4, 12, 30]),
                cell(27, &[3, 4, 12, 30]),
                cell(0, &[]),
                cell(24, &[]),
            ]),
            row(21, H, vec![
                cell(0, &[5, 15, 16, 20]),
                cell(24, &[5, 15, 16, 20]),
                cell(18, &[]),
            ]),
            row(14, H, vec![
                cell(0, &[2, 11, 29, 32]),
                cell(24, &[2, 11, 29, 32]),
                cell(27, &[]),
                cell(18, &[]),
            ]),
            row(18, V, vec![
                cell(27, &[2, 11, 29, 32]),
                cell(16, &[2, 11, 29, 32, 33]),
                cell(22, &[9, 17, 33, 34]),
                cell(14, &[9, 17, 33, 34]),
                cell(21, &[]),
                cell(0, &[]),
                cell(15, &[]),
            ]),
        ]),
        // B
        sheet(&[3, 13, 16, 21, 32], vec![
            row(0, H, vec![
                cell(4, &[15, 18, 26, 33]),
                cell(28, &[15, 18, 26, 33]),
                cell(24, &[10, 14, 20, 22]),
                cell(27, &[10, 14, 20, 22]),
                cell(19, &[]),
                cell(22, &[]),
                cell(18, &[]),
            ]),
            row(22, V, vec![
                cell(24, &[15, 18, 26, 33]),
                cell(1, &[15, 18, 26, 33]),
                cell(19, &[1, 6, 8, 17]),
                cell(4, &[1, 6, 8, 17]),
                cell(8, &[]),
                cell(0, &[]),
                cell(18, &[]),
            ]),
            row(27, H, vec![
                cell(4, &[1, 6, 8, 17]),
                cell(24, &[1, 6, 8, 17]),
                cell(8, &[]),
                cell(0, &[]),
                cell(19, &[]),
                cell(1, &[]),
                cell(18, &[]),
            ]),
            row(18, V, vec![
                cell(0, &[10, 14, 20, 22]),
                cell(28, &[10, 14, 20, 22]),
                cell(8, &[2, 5, 12, 35]),
                cell(22, &[2, 5, 12, 35]),
                cell(4, &[]),
                cell(1, &[]),
                cell(27, &[]),
            ]),
            row(18, H, vec![
                cell(0, &[2, 5, 12, 35]),
                cell(27, &[2, 5, 12, 35]),
                cell(8, &[]),
                cell(4, &[]),
                cell(22, &[]),
                cell(28, &[]),
                cell(1, &[]),
            ]),
        ]),
        // C
        sheet(&[4, 7, 15, 25, 33], vec![
            row(10, V, vec![
                cell(12, &[0, 21, 27, 31]),
                cell(28, &[0, 21, 27, 31]),
                cell(20, &[]),
                cell(13, &[]),
                cell(2, &[]),
            ]),
            row(16, V, vec![
                cell(12, &[8, 24, 34, 35]),
                cell(20, &[8, 24, 34, 35]),
                cell(13, &[]),
                cell(2, &[]),
            ]),
            row(22, V, vec![
                cell(2, &[6, 10, 17, 26]),
                cell(13, &[6, 10, 17, 26]),
                cell(20, &[1, 5, 14, 30]),
                cell(12, &[1, 5, 14, 30]),
                cell(10, &[]),
            ]),
            row(21, H, vec![
                cell(2, &[6, 10, 17, 26]),
                cell(12, &[6, 10, 17, 26]),
                cell(13, &[8, 24, 34, 35]),
                cell(10, &[8, 24, 34, 35]),
            ]),
            row(20, H, vec![
                cell(2, &[1, 5, 14, 30]),
                cell(10, &[1, 5, 14, 30]),
                cell(12, &[]),
            ]),
            row(12, H, vec![
                cell(2, &[0, 21, 27, 31]),
                cell(10, &[]),
                cell(16, &[]),
                cell(22, &[]),
                cell(28, &[]),
                cell(21, &[]),
            ]),
        ]),
        // D
        sheet(&[7, 16, 18, 27, 32], vec![
            row(2, H, vec![
                cell(14, &[11, 24, 31, 34]),
                cell(19, &[11, 24, 31, 34]),
                cell(22, &[]),
                cell(13, &[]),
                cell(28, &[]),
                cell(24, &[]),
            ]),
            row(3, H, vec![
                cell(22, &[0, 15, 21, 35]),
                cell(24, &[0, 15, 21, 35]),
                cell(14, &[]),
                cell(13, &[]),
                cell(19, &[]),
                cell(28, &[]),
            ]),
            row(2, V, vec![
                cell(4, &[1, 13, 17, 26]),
                cell(24, &[1, 13, 17, 26]),
                cell(28, &[]),
                cell(19, &[]),
                cell(22, &[]),
            ]),
            row(8, V, vec![
                cell(28, &[2, 3, 23, 33]),
                cell(24, &[2, 3, 23, 33]),
                cell(4, &[]),
                cell(22, &[]),
            ]),
            row(22, V, vec![
                cell(2, &[1, 13, 17, 26]),
                cell(4, &[1, 13, 17, 26]),
                cell(3, &[]),
                cell(8, &[]),
                cell(14, &[]),
                cell(13, &[]),
                cell(19, &[]),
                cell(24, &[]),
            ]),
            row(13, V, vec![
                cell(2, &[0, 15, 21, 35]),
                cell(22, &[0, 15, 21, 35]),
                cell(3, &[]),
                cell(4, &[]),
                cell(28, &[]),
            ]),
            row(13, H, vec![
                cell(2, &[11, 24, 31, 34]),
                cell(22, &[11, 24, 31, 34]),
                cell(4, &[2, 3, 23, 33]),
                cell(28, &[2, 3, 23, 33]),
                cell(3, &[]),
                cell(24, &[]),
            ]),
        ]),
    ]
}
