#![warn(missing_docs)]
//! Hints for the Faux Hollows tile puzzle
//!
//! ## Overview
//!
//! The puzzle hides a sword, a box and a fox on a 6x6 board with a few blocked cells.
//! Only a handful of layouts exist, and the blocked cells alone tell which one is in play.
//! This library keeps track of what has been revealed so far, eliminates every piece
//! placement that contradicts it and scores the cells by how likely they are to
//! uncover a piece.
//!
//! ## Example
//!
//! ```
//! use faux_hollows::{board::parse_tiles, BoardState, Score, Solver};
//!
//! let tiles = parse_tiles("
//!     .    .    .    .    .    .
//!     .    .    #    .    #    .
//!     .    #    .    .    .    .
//!     .    .    .    .    .    .
//!     .    .    #    .    .    .
//!     .    .    .    .    .    #
//! ").unwrap();
//!
//! let board = BoardState::from_tiles(tiles).unwrap();
//! let solver = Solver::default();
//! let solution = solver.solve(&board);
//!
//! // the blockers belong to a known layout, so some cells are worth revealing
//! assert!(solution.best_score().is_some());
//! for cell in solution.best_cells() {
//!     assert!(matches!(solution.get(cell), Score::Neutral(_)));
//! }
//! println!("{}", solution);
//! ```

mod bitmask;
pub mod board;
mod consts;
pub mod errors;
pub mod patterns;
pub mod simulation;
mod solver;

pub use crate::bitmask::{BitMask, Iter as BitMaskIter};
pub use crate::board::BoardState;
pub use crate::consts::{HEIGHT, N_CELLS, WIDTH};
pub use crate::patterns::PatternDb;
pub use crate::solver::{Score, Solution, Solver, CONFIRMED_CHEST, CONFIRMED_SWORD, POTENTIAL_FOX};
