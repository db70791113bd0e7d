//! Constants for board geometry and piece codes.
//!
//! The board is a fixed 8x8 grid stored as a 1D array of byte-valued cell
//! codes. The codes are the same ASCII characters the board-string format
//! uses, so cells can be compared against parsed input directly.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board side length (NxN). The board-string format's one-digit rank labels
/// pin this to 8.
pub const N: usize = 8;

/// Total number of cells in the flat board array.
pub const BOARD_CELLS: usize = N * N;

// =============================================================================
// Cell Codes (as bytes for direct comparison)
// =============================================================================

/// Dark-side pawn.
pub const PAWN_DARK: u8 = b'p';

/// Light-side pawn.
pub const PAWN_LIGHT: u8 = b'P';

/// Dark-side knight.
pub const KNIGHT_DARK: u8 = b'n';

/// Light-side knight.
pub const KNIGHT_LIGHT: u8 = b'N';

/// Empty square.
pub const EMPTY: u8 = b' ';

// =============================================================================
// Starting Layout
// =============================================================================

/// Starting layout for the pawns-and-knights variant: knights along each
/// back row, a full row of pawns in front of them.
pub const START_BOARD: &str = "nnnnnnnn/pppppppp/8/8/8/8/PPPPPPPP/NNNNNNNN";
