//! Go-Liberties: connected groups and liberties on a Go board.
//!
//! A board is built up from a log of moves. Group analysis partitions its
//! stones into connected groups and reports each group's liberties, which
//! is what capture detection needs. Removing captured stones, ko, suicide
//! checks and scoring are left to a rules layer on top.
//!
//! ## Modules
//!
//! - [`constants`] - Board labels, action characters, demo defaults
//! - [`board`] - Board model: occupancy, moves, adjacency
//! - [`groups`] - Group discovery and liberty counting
//! - [`generator`] - Seeded random moves for exercising the analyzer
//! - [`error`] - Board errors
//!
//! ## Example
//!
//! ```
//! use go_liberties::board::{Board, Move};
//! use go_liberties::groups::find_groups;
//!
//! let mut board = Board::new(3, 3).unwrap();
//! board
//!     .apply_moves([
//!         Move::black((1, 1)),
//!         Move::white((1, 2)),
//!         Move::white((1, 0)),
//!         Move::white((0, 1)),
//!         Move::white((2, 1)),
//!     ])
//!     .unwrap();
//!
//! let groups = find_groups(&board);
//! let black = groups.iter().find(|g| g.contains((1, 1))).unwrap();
//! assert_eq!(black.liberty_count(), 0);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod generator;
pub mod groups;

pub use board::{Action, Board, Color, Move, Point};
pub use error::BoardError;
pub use groups::{Group, find_groups};
