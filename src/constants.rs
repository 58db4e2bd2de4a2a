//! Constants for board labels, move characters, and demo defaults.

// =============================================================================
// Board Labels
// =============================================================================

/// Column letters as marked along the top of a board.
///
/// `I` is left out to avoid confusion with the digit `1`, so this also
/// bounds the widest board that can be labelled.
pub const BOARD_LETTERS: &str = "ABCDEFGHJKLMNOPQRST";

/// Widest board whose columns all have a letter.
pub const MAX_LABELLED_WIDTH: usize = BOARD_LETTERS.len();

// =============================================================================
// Board Geometry
// =============================================================================

/// Largest number of points a board may have.
pub const MAX_BOARD_AREA: usize = 1 << 20;

// =============================================================================
// Move Actions
// =============================================================================

/// Action characters, indexed by action: capture, black, white.
pub const ACTION_CHARS: &str = "cbw";

// =============================================================================
// Rendering
// =============================================================================

/// Empty point.
pub const EMPTY_CHAR: char = '.';

/// Black stone.
pub const BLACK_CHAR: char = '#';

/// White stone.
pub const WHITE_CHAR: char = 'o';

/// Stone whose group has no liberties left.
pub const DEAD_CHAR: char = '*';

// =============================================================================
// Demo Defaults
// =============================================================================

/// Default demo board width.
pub const DEMO_WIDTH: usize = 9;

/// Default demo board height. Deliberately not square.
pub const DEMO_HEIGHT: usize = 11;

/// Number of random moves played in the demo.
pub const DEMO_MOVES: usize = 135;

/// Default size of the randomly filled board.
pub const FILL_SIZE: usize = 9;

/// Default seed for the randomly filled board.
pub const FILL_SEED: u64 = 13;
