//! Group discovery and liberty counting.
//!
//! A group is a maximal set of same-colored stones joined by horizontal or
//! vertical adjacency. Its liberties are the distinct empty points next to
//! any of its stones. Groups are derived from a board on every call and
//! never updated incrementally.
//!
//! Discovery is a flood fill with an explicit stack, so board size does not
//! bound recursion depth. Groups come out in row-major order of their first
//! stone.

use std::collections::BTreeSet;

use log::debug;

use crate::board::{Board, Color, Point};

/// A connected group of same-colored stones and its liberties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub color: Color,
    pub stones: BTreeSet<Point>,
    pub liberties: BTreeSet<Point>,
}

impl Group {
    fn new(color: Color) -> Self {
        Self {
            color,
            stones: BTreeSet::new(),
            liberties: BTreeSet::new(),
        }
    }

    /// Number of stones in the group.
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    /// No liberties left: capturable under standard rules.
    pub fn is_dead(&self) -> bool {
        self.liberties.is_empty()
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }
}

/// Partition every stone on the board into groups.
///
/// Each stone lands in exactly one group.
pub fn find_groups(board: &Board) -> Vec<Group> {
    let mut visited = vec![false; board.width() * board.height()];
    let mut groups = Vec::new();

    for seed in board.points() {
        let Some(color) = board.stone_at(seed) else {
            continue;
        };
        if visited[board.index(seed)] {
            continue;
        }
        groups.push(flood_group(board, seed, color, &mut visited));
    }

    debug!(
        "found {} groups ({} without liberties) on {}x{} board",
        groups.len(),
        groups.iter().filter(|g| g.is_dead()).count(),
        board.width(),
        board.height()
    );
    groups
}

/// Grow one group from `seed`, marking its stones in `visited`.
///
/// Empty points are recorded as liberties but left unvisited, since the
/// same empty point may be a liberty of several groups. Opponent stones
/// are ignored.
fn flood_group(board: &Board, seed: Point, color: Color, visited: &mut [bool]) -> Group {
    let mut group = Group::new(color);
    let mut stack = vec![seed];

    while let Some(pt) = stack.pop() {
        let i = board.index(pt);
        if visited[i] {
            continue;
        }
        match board.stone_at(pt) {
            None => {
                group.liberties.insert(pt);
            }
            Some(c) if c == color => {
                visited[i] = true;
                group.stones.insert(pt);
                stack.extend(board.neighbors(pt));
            }
            Some(_) => {}
        }
    }

    group
}

/// Groups with no liberties.
pub fn dead_groups(groups: &[Group]) -> Vec<&Group> {
    groups.iter().filter(|g| g.is_dead()).collect()
}

/// Liberty count of the owning group for every point, in row-major order.
/// Empty points are `None`.
pub fn liberty_counts(board: &Board, groups: &[Group]) -> Vec<Option<usize>> {
    let mut counts = vec![None; board.width() * board.height()];
    for group in groups {
        let libs = group.liberty_count();
        for &pt in &group.stones {
            counts[board.index(pt)] = Some(libs);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    fn board_with(width: usize, height: usize, moves: &[Move]) -> Board {
        Board::from_moves(width, height, moves).unwrap()
    }

    fn points(list: &[Point]) -> BTreeSet<Point> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_empty_board_has_no_groups() {
        let board = Board::new(9, 9).unwrap();
        assert!(find_groups(&board).is_empty());
    }

    #[test]
    fn test_single_stone_liberties() {
        // Center, corner, and edge.
        let center = find_groups(&board_with(5, 5, &[Move::black((2, 2))]));
        assert_eq!(center.len(), 1);
        assert_eq!(center[0].liberty_count(), 4);

        let corner = find_groups(&board_with(5, 5, &[Move::black((0, 0))]));
        assert_eq!(corner[0].liberty_count(), 2);

        let edge = find_groups(&board_with(5, 5, &[Move::white((2, 0))]));
        assert_eq!(edge[0].liberty_count(), 3);
        assert_eq!(edge[0].color, Color::White);
    }

    #[test]
    fn test_two_adjacent_stones() {
        let board = board_with(5, 5, &[Move::black((1, 1)), Move::black((2, 1))]);
        let groups = find_groups(&board);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].stones, points(&[(1, 1), (2, 1)]));
        assert_eq!(
            groups[0].liberties,
            points(&[(0, 1), (1, 0), (1, 2), (2, 0), (2, 2), (3, 1)])
        );
    }

    #[test]
    fn test_diagonal_stones_are_separate_groups() {
        let board = board_with(3, 3, &[Move::black((0, 0)), Move::black((1, 1))]);
        let groups = find_groups(&board);
        assert_eq!(groups.len(), 2);
        // Shared empty points are liberties of both.
        assert!(groups[0].liberties.contains(&(1, 0)));
        assert!(groups[1].liberties.contains(&(1, 0)));
    }

    #[test]
    fn test_surrounded_stone_has_no_liberties() {
        let board = board_with(
            3,
            3,
            &[
                Move::black((1, 1)),
                Move::white((1, 2)),
                Move::white((1, 0)),
                Move::white((0, 1)),
                Move::white((2, 1)),
            ],
        );
        let groups = find_groups(&board);
        let black: Vec<&Group> = groups.iter().filter(|g| g.color == Color::Black).collect();
        assert_eq!(black.len(), 1);
        assert_eq!(black[0].stones, points(&[(1, 1)]));
        assert_eq!(black[0].liberty_count(), 0);
        assert!(black[0].is_dead());

        let dead = dead_groups(&groups);
        assert_eq!(dead.len(), 1);
        assert_eq!(dead[0].color, Color::Black);
    }

    #[test]
    fn test_opponent_stones_are_not_liberties() {
        let board = board_with(3, 1, &[Move::black((0, 0)), Move::white((1, 0))]);
        let groups = find_groups(&board);
        assert_eq!(groups.len(), 2);
        assert!(groups[0].liberties.is_empty());
        assert_eq!(groups[1].liberties, points(&[(2, 0)]));
    }

    #[test]
    fn test_discovery_order_is_row_major() {
        let board = board_with(4, 4, &[Move::white((3, 3)), Move::black((2, 0))]);
        let groups = find_groups(&board);
        assert_eq!(groups[0].color, Color::Black);
        assert_eq!(groups[1].color, Color::White);
    }

    #[test]
    fn test_ring_group_counts_inner_liberty_once() {
        // A ring of black around (1, 1) on a 3x3 board.
        let ring: Vec<Move> = [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
            .into_iter()
            .map(Move::black)
            .collect();
        let groups = find_groups(&board_with(3, 3, &ring));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 8);
        assert_eq!(groups[0].liberties, points(&[(1, 1)]));
    }

    #[test]
    fn test_liberty_counts_overlay() {
        let board = board_with(3, 1, &[Move::black((0, 0)), Move::black((1, 0))]);
        let groups = find_groups(&board);
        assert_eq!(liberty_counts(&board, &groups), vec![Some(1), Some(1), None]);
    }

    #[test]
    fn test_group_accessors() {
        let groups = find_groups(&board_with(2, 2, &[Move::white((0, 1))]));
        let group = &groups[0];
        assert!(group.contains((0, 1)));
        assert!(!group.contains((0, 0)));
        assert!(group.is_alive());
        assert!(!group.is_empty());
        assert_eq!(group.len(), 1);
    }
}
