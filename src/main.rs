//! Minchess: a minimal pawns-and-knights board tool.
//!
//! ## Usage
//!
//! - `minchess` - Show a demo
//! - `minchess show <BOARD>` - Render a board string as a text diagram
//! - `minchess demo` - Run the demo

use anyhow::Context;
use clap::{Parser, Subcommand};

use minchess::board::{Board, compare_boards, copy_board, next_turn, set_piece};
use minchess::constants::{KNIGHT_LIGHT, START_BOARD};
use minchess::coords::to_position;
use minchess::fen::load_fen;
use minchess::render::print_board;

/// Minchess: a minimal pawns-and-knights board tool
#[derive(Parser)]
#[command(name = "minchess")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a board string as a text diagram
    Show {
        /// Board string, e.g. "nnnnnnnn/pppppppp/8/8/8/8/PPPPPPPP/NNNNNNNN"
        board: String,
        /// Show the board from the second player's seat
        #[arg(short, long)]
        reversed: bool,
    },
    /// Run a short demo of the board operations
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Show { board: layout, reversed }) => {
            let mut board = Board::new();
            load_fen(&mut board, &layout)
                .with_context(|| format!("invalid board string {layout:?}"))?;
            print_board(&board, reversed);
        }
        Some(Commands::Demo) | None => {
            run_demo()?;
        }
    }

    Ok(())
}

fn run_demo() -> anyhow::Result<()> {
    println!("Minchess: pawns-and-knights board demo\n");

    let mut board = Board::new();
    load_fen(&mut board, START_BOARD).context("starting layout should load")?;

    println!("=== Starting layout ===");
    print_board(&board, false);

    println!("\n=== Same layout, second player's seat ===");
    print_board(&board, true);

    println!("\n=== Turn advance ===");
    println!("side to move flag: {}", board.turn);
    let side = next_turn(&mut board);
    println!("after next_turn:   {side}");

    println!("\n=== Copy and compare ===");
    let mut copy = Board::new();
    copy_board(&board, &mut copy);
    println!("copy equals original: {}", compare_boards(&board, &copy));

    set_piece(&mut copy, to_position(4, 3), KNIGHT_LIGHT);
    println!("after editing the copy: {}", compare_boards(&board, &copy));

    Ok(())
}
