//! Go-Liberties: show connected groups and their liberties.
//!
//! ## Usage
//!
//! - `go-liberties` - Random moves on a 9x11 board with a liberty overlay
//! - `go-liberties demo --seed 5` - Same, with a chosen seed
//! - `go-liberties fill` - Randomly filled board and its dead groups

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;

use go_liberties::board::{Board, Color, Move, column_letter};
use go_liberties::constants::{
    BLACK_CHAR, DEAD_CHAR, DEMO_HEIGHT, DEMO_MOVES, DEMO_WIDTH, EMPTY_CHAR, FILL_SEED, FILL_SIZE,
    MAX_LABELLED_WIDTH, WHITE_CHAR,
};
use go_liberties::generator::RandomMoves;
use go_liberties::groups::{Group, dead_groups, find_groups, liberty_counts};

/// Go-Liberties: connected groups and liberties on a Go board
#[derive(Parser)]
#[command(name = "go-liberties")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level for stderr output
    #[arg(long, env = "GO_LIBERTIES_LOG", default_value = "warn")]
    log_level: log::LevelFilter,

    /// Also write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play random moves and show each stone's group liberties
    Demo {
        #[arg(long, default_value_t = DEMO_WIDTH)]
        width: usize,
        #[arg(long, default_value_t = DEMO_HEIGHT)]
        height: usize,
        /// Number of random moves
        #[arg(long, default_value_t = DEMO_MOVES)]
        moves: usize,
        /// Random seed (defaults to a fresh one)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Randomly fill a square board and show the groups without liberties
    Fill {
        #[arg(long, default_value_t = FILL_SIZE)]
        size: usize,
        #[arg(long, default_value_t = FILL_SEED)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level, cli.log_file.as_ref())?;

    match cli.command {
        Some(Commands::Demo {
            width,
            height,
            moves,
            seed,
        }) => run_demo(width, height, moves, seed),
        Some(Commands::Fill { size, seed }) => run_fill(size, seed),
        None => run_demo(DEMO_WIDTH, DEMO_HEIGHT, DEMO_MOVES, None),
    }
}

fn setup_logging(level: log::LevelFilter, log_file: Option<&PathBuf>) -> Result<()> {
    let dispatcher = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}[{}][{}] {}",
            chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
            record.target(),
            record.level(),
            message
        ))
    });

    let dispatcher = match log_file {
        Some(path) => dispatcher
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Debug)
                    .chain(fern::log_file(path).with_context(|| {
                        format!("failed to open log file {}", path.display())
                    })?),
            )
            .chain(fern::Dispatch::new().level(level).chain(io::stderr())),
        None => dispatcher.level(level).chain(io::stderr()),
    };

    dispatcher.apply().context("failed to install logger")
}

fn new_board(width: usize, height: usize) -> Result<Board> {
    if width > MAX_LABELLED_WIDTH {
        bail!("board width {width} exceeds the {MAX_LABELLED_WIDTH} labelled columns");
    }
    Board::new(width, height).context("failed to create board")
}

fn run_demo(width: usize, height: usize, moves: usize, seed: Option<u64>) -> Result<()> {
    let mut board = new_board(width, height)?;
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    info!("demo on {width}x{height} board, {moves} moves, seed {seed}");

    let moves: Vec<Move> = RandomMoves::new(seed).moves(&board, moves);
    board
        .apply_moves(moves.iter().copied())
        .context("failed to apply random moves")?;

    println!("Seed: {seed}");
    println!("Moves: {}", moves.len());
    println!();
    print!("{}", render_board(&board));

    let groups = find_groups(&board);
    println!();
    println!("Liberties of groups:");
    println!();
    print!("{}", render_liberties(&board, &groups));
    Ok(())
}

fn run_fill(size: usize, seed: u64) -> Result<()> {
    let mut board = new_board(size, size)?;
    RandomMoves::new(seed)
        .fill(&mut board)
        .context("failed to fill board")?;

    println!("Board:");
    print!("{}", render_board(&board));

    let groups = find_groups(&board);
    let dead = dead_groups(&groups);
    info!("{} of {} groups are dead", dead.len(), groups.len());

    let mut dead_board = new_board(size, size)?;
    for group in dead {
        let stones = group.stones.iter().map(|&p| Move::new(p, group.color.into()));
        dead_board.apply_moves(stones)?;
    }

    println!("Dead groups:");
    print!("{}", render_board(&dead_board));
    Ok(())
}

fn stone_char(stone: Option<Color>) -> char {
    match stone {
        Some(Color::Black) => BLACK_CHAR,
        Some(Color::White) => WHITE_CHAR,
        None => EMPTY_CHAR,
    }
}

/// Column letters, each right-aligned in a cell of `cell` characters.
fn column_header(width: usize, cell: usize) -> String {
    let letters: String = (0..width)
        .filter_map(column_letter)
        .map(|c| format!("{c:>cell$}"))
        .collect();
    format!("   {letters}\n")
}

/// Board with column letters on top and row numbers counting up from the
/// bottom.
fn render_board(board: &Board) -> String {
    let mut out = column_header(board.width(), 2);
    for y in (0..board.height()).rev() {
        out.push_str(&format!("{:>3}", y + 1));
        for x in 0..board.width() {
            out.push(' ');
            out.push(stone_char(board.stone_at((x, y))));
        }
        out.push('\n');
    }
    out
}

/// Each stone shows its group's liberty count, `*` if it has none.
/// Cells are three wide so two-digit counts stay apart.
fn render_liberties(board: &Board, groups: &[Group]) -> String {
    let counts = liberty_counts(board, groups);
    let mut out = column_header(board.width(), 3);
    for y in (0..board.height()).rev() {
        out.push_str(&format!("{:>3}", y + 1));
        for x in 0..board.width() {
            let cell = match counts[board.index((x, y))] {
                None => format!("{EMPTY_CHAR:>3}"),
                Some(0) => format!("{DEAD_CHAR:>3}"),
                Some(n) => format!("{n:>3}"),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board() {
        let board = Board::from_moves(2, 2, &[Move::black((0, 0)), Move::white((1, 1))]).unwrap();
        assert_eq!(render_board(&board), "    A B\n  2 . o\n  1 # .\n");
    }

    #[test]
    fn test_render_liberties_marks_dead() {
        let board = Board::from_moves(2, 1, &[Move::black((0, 0)), Move::white((1, 0))]).unwrap();
        let groups = find_groups(&board);
        assert_eq!(render_liberties(&board, &groups), "     A  B\n  1  *  *\n");
    }

    #[test]
    fn test_render_liberties_two_digit_counts() {
        let row: Vec<Move> = (0..5).map(|x| Move::black((x, 1))).collect();
        let board = Board::from_moves(5, 3, &row).unwrap();
        let groups = find_groups(&board);
        assert_eq!(groups[0].liberty_count(), 10);
        assert_eq!(
            render_liberties(&board, &groups),
            "     A  B  C  D  E\n  3  .  .  .  .  .\n  2 10 10 10 10 10\n  1  .  .  .  .  .\n"
        );
    }

    #[test]
    fn test_huge_board_is_an_error() {
        assert!(new_board(9, 1_000_000_000_000_000_000).is_err());
        assert!(new_board(2, usize::MAX / 2 + 1).is_err());
    }

    #[test]
    fn test_wide_board_rejected() {
        assert!(new_board(MAX_LABELLED_WIDTH + 1, 3).is_err());
        assert!(new_board(MAX_LABELLED_WIDTH, 3).is_ok());
    }
}
