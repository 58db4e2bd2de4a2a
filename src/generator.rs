//! Seeded random moves for exercising group analysis.
//!
//! Generated moves are not guaranteed to be legal: they may stack on an
//! occupied point or leave a group without liberties. That is the point,
//! they are used to produce awkward boards for the analyzer.

use fastrand::Rng;
use log::debug;

use crate::board::{Action, Board, Move};
use crate::error::BoardError;

/// Random move source with an explicit seed.
///
/// The same seed always yields the same sequence.
pub struct RandomMoves {
    rng: Rng,
}

impl RandomMoves {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }

    /// A black or white move at a uniformly random point of `board`.
    /// The board itself is not touched.
    pub fn next_move(&mut self, board: &Board) -> Move {
        let action = if self.rng.bool() {
            Action::Black
        } else {
            Action::White
        };
        let point = (self.rng.usize(..board.width()), self.rng.usize(..board.height()));
        Move::new(point, action)
    }

    /// `count` moves for `board`.
    pub fn moves(&mut self, board: &Board, count: usize) -> Vec<Move> {
        (0..count).map(|_| self.next_move(board)).collect()
    }

    /// Visit every point in row-major order and leave it empty or place a
    /// black or white stone, each with equal probability.
    pub fn fill(&mut self, board: &mut Board) -> Result<(), BoardError> {
        let points: Vec<_> = board.points().collect();
        for point in points {
            let action = match self.rng.u8(0..3) {
                0 => continue,
                1 => Action::Black,
                _ => Action::White,
            };
            board.apply_move(Move::new(point, action))?;
        }
        debug!(
            "filled {}x{} board with {} stones",
            board.width(),
            board.height(),
            board.occupied_count()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new(9, 11).unwrap();
        let a = RandomMoves::new(7).moves(&board, 50);
        let b = RandomMoves::new(7).moves(&board, 50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_moves_are_on_board_and_place_stones() {
        let board = Board::new(9, 11).unwrap();
        let moves = RandomMoves::new(1).moves(&board, 200);
        assert_eq!(moves.len(), 200);
        for mv in moves {
            assert!(mv.point.0 < 9 && mv.point.1 < 11);
            assert_ne!(mv.action, Action::Capture);
        }
    }

    #[test]
    fn test_moves_on_single_point_board() {
        let board = Board::new(1, 1).unwrap();
        let moves = RandomMoves::new(3).moves(&board, 10);
        assert!(moves.iter().all(|mv| mv.point == (0, 0)));
    }

    #[test]
    fn test_fill_is_reproducible() {
        let mut a = Board::new(9, 9).unwrap();
        let mut b = Board::new(9, 9).unwrap();
        RandomMoves::new(13).fill(&mut a).unwrap();
        RandomMoves::new(13).fill(&mut b).unwrap();
        assert_eq!(a, b);
        assert!(a.occupied_count() > 0);
        assert!(a.occupied_count() < 81);
    }
}
