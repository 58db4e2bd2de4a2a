use thiserror::Error;

use crate::board::Point;

/// Errors raised by the board model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A board needs at least one row and one column.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The target point lies outside the board.
    #[error("point {point:?} is outside the {width}x{height} board")]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },
    /// Move text cannot be parsed yet.
    #[error("parsing move text is not supported: {0:?}")]
    UnsupportedMoveText(String),
}
