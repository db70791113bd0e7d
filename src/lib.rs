//! Minchess: a minimal pawns-and-knights chess board library.
//!
//! This crate provides the board representation for a restricted chess
//! variant that plays with pawns and knights only. It stores an 8x8 grid of
//! character piece codes plus a side-to-move flag, and offers loading from a
//! FEN-like board string, text rendering from either player's viewpoint, and
//! board copy/comparison. There is no move generation or legality checking
//! here; those belong to the consumers of this crate.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and piece codes
//! - [`coords`] - (row, col) to flat-position mapping and view perspective
//! - [`board`] - Board state, accessors, copy and comparison
//! - [`fen`] - Board-string loading and generation
//! - [`render`] - Text rendering
//!
//! ## Example
//!
//! ```
//! use minchess::board::{Board, next_turn};
//! use minchess::constants::START_BOARD;
//! use minchess::fen::load_fen;
//! use minchess::render::render_board;
//!
//! // Load the starting layout
//! let mut board = Board::new();
//! load_fen(&mut board, START_BOARD).unwrap();
//!
//! // Show it from the second player's seat
//! print!("{}", render_board(&board, true));
//!
//! // Hand the move to the other side
//! next_turn(&mut board);
//! ```

pub mod board;
pub mod constants;
pub mod coords;
pub mod fen;
pub mod render;
