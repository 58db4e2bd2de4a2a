//! Board model: dimensions, occupancy, and the move log.
//!
//! The board is a cache of its move log. Replaying the log onto an empty
//! board of the same size reproduces the occupancy exactly, which
//! [`Board::replay`] does.
//!
//! Coordinates are `(x, y)` with `x` running left to right and `y` bottom
//! to top, both 0-indexed. Occupancy is stored densely in row-major order.

use std::str::FromStr;

use log::{trace, warn};

use crate::constants::{ACTION_CHARS, BOARD_LETTERS, MAX_BOARD_AREA};
use crate::error::BoardError;

/// Stone color. An empty point is `None` wherever a stone is optional.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

/// A point on the board as `(x, y)`.
pub type Point = (usize, usize);

/// What a move does to its target point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Clear the point.
    Capture,
    Black,
    White,
}

impl Action {
    /// The stone this action leaves on its point.
    pub fn stone(self) -> Option<Color> {
        match self {
            Action::Capture => None,
            Action::Black => Some(Color::Black),
            Action::White => Some(Color::White),
        }
    }

    /// Single character tag: `c`, `b` or `w`.
    pub fn as_char(self) -> char {
        let i = match self {
            Action::Capture => 0,
            Action::Black => 1,
            Action::White => 2,
        };
        ACTION_CHARS.as_bytes()[i] as char
    }
}

impl From<Color> for Action {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Action::Black,
            Color::White => Action::White,
        }
    }
}

/// A placement or capture at a point. Immutable once created.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub point: Point,
    pub action: Action,
}

impl Move {
    pub fn new(point: Point, action: Action) -> Self {
        Self { point, action }
    }

    pub fn black(point: Point) -> Self {
        Self::new(point, Action::Black)
    }

    pub fn white(point: Point) -> Self {
        Self::new(point, Action::White)
    }

    pub fn capture(point: Point) -> Self {
        Self::new(point, Action::Capture)
    }

    pub fn stone(&self) -> Option<Color> {
        self.action.stone()
    }
}

impl FromStr for Move {
    type Err = BoardError;

    /// Move text such as `D4b` is not parsed yet. This always fails rather
    /// than handing back a default move.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Err(BoardError::UnsupportedMoveText(s.to_string()))
    }
}

/// Column letter for `x`, skipping `I`. `None` past the last letter.
pub fn column_letter(x: usize) -> Option<char> {
    BOARD_LETTERS.as_bytes().get(x).map(|&b| b as char)
}

/// A rectangular Go board with its move log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<Color>>,
    moves: Vec<Move>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Errors
    /// - [`BoardError::InvalidDimensions`] if either dimension is zero or the
    ///   area exceeds [`MAX_BOARD_AREA`].
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        let area = width
            .checked_mul(height)
            .filter(|&a| a > 0 && a <= MAX_BOARD_AREA)
            .ok_or(BoardError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![None; area],
            moves: Vec::new(),
        })
    }

    /// Create a board and apply `moves` to it in order.
    pub fn from_moves(width: usize, height: usize, moves: &[Move]) -> Result<Self, BoardError> {
        let mut board = Self::new(width, height)?;
        board.apply_moves(moves.iter().copied())?;
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The applied moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn is_inside(&self, (x, y): Point) -> bool {
        x < self.width && y < self.height
    }

    /// Row-major index of an in-bounds point.
    pub fn index(&self, (x, y): Point) -> usize {
        debug_assert!(self.is_inside((x, y)), "({x}, {y}) is off the board");
        y * self.width + x
    }

    /// The stone at `point`. Points off the board read as empty.
    pub fn stone_at(&self, point: Point) -> Option<Color> {
        if !self.is_inside(point) {
            return None;
        }
        self.cells[self.index(point)]
    }

    /// Set the target point to the move's stone and append the move to the log.
    ///
    /// No legality check is made beyond bounds: overwriting an occupied
    /// point, suicide, ko and turn order are the caller's business.
    ///
    /// # Errors
    /// - [`BoardError::OutOfBounds`] if the point is off the board. The board
    ///   and log are left unchanged.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.is_inside(mv.point) {
            warn!("rejecting {mv:?}: off the {}x{} board", self.width, self.height);
            return Err(BoardError::OutOfBounds {
                point: mv.point,
                width: self.width,
                height: self.height,
            });
        }
        trace!("applying {mv:?}");
        self.place(mv);
        self.moves.push(mv);
        Ok(())
    }

    /// Apply moves in order, stopping at the first one that fails.
    /// Moves before the failing one stay applied.
    pub fn apply_moves<I>(&mut self, moves: I) -> Result<(), BoardError>
    where
        I: IntoIterator<Item = Move>,
    {
        for mv in moves {
            self.apply_move(mv)?;
        }
        Ok(())
    }

    /// Rebuild the board from an empty one by replaying the move log.
    pub fn replay(&self) -> Board {
        let mut board = Board {
            width: self.width,
            height: self.height,
            cells: vec![None; self.width * self.height],
            moves: Vec::with_capacity(self.moves.len()),
        };
        for &mv in &self.moves {
            // Logged moves are always on the board.
            board.place(mv);
            board.moves.push(mv);
        }
        board
    }

    /// On-board orthogonal neighbors, in east, north, west, south order.
    ///
    /// `point` itself is not required to be on the board.
    pub fn neighbors(&self, (x, y): Point) -> impl Iterator<Item = Point> + '_ {
        [
            x.checked_add(1).map(|e| (e, y)),
            y.checked_add(1).map(|n| (x, n)),
            x.checked_sub(1).map(|w| (w, y)),
            y.checked_sub(1).map(|s| (x, s)),
        ]
        .into_iter()
        .flatten()
        .filter(move |&p| self.is_inside(p))
    }

    /// All points in row-major order: `y` ascending, then `x` ascending.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn place(&mut self, mv: Move) {
        let i = self.index(mv.point);
        self.cells[i] = mv.stone();
    }
}
