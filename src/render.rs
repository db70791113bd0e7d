//! Text rendering of a board, from either player's viewpoint.
//!
//! The diagram is a 9-line block: a column-header line, then one line per
//! row starting with its one-digit rank label. Empty squares alternate
//! between `'_'` and `' '` in a checkerboard pattern keyed to the logical
//! square, so a square keeps its fill character in both orientations.
//!
//! Reversed mode rotates the view 180 degrees by walking display
//! coordinates through the perspective mapping; the header is mirrored too,
//! so column labels always match the squares printed below them.

use crate::board::{Board, get_piece};
use crate::constants::{EMPTY, N};
use crate::coords::{perspective_col, perspective_row, to_position};

/// Render a loaded board to a 9-line string.
///
/// Every line is newline-terminated. The board must have been loaded; this
/// performs no validation of its own.
pub fn render_board(board: &Board, reversed: bool) -> String {
    let mut out = String::new();

    out.push_str(if reversed { " hgfedcba\n" } else { " abcdefgh\n" });

    for row in 0..N {
        let board_row = perspective_row(row, reversed);
        out.push(char::from(b'1' + board_row as u8));

        for col in 0..N {
            let board_col = perspective_col(col, reversed);
            let piece = get_piece(board, to_position(board_row, board_col));

            if piece == EMPTY {
                out.push(if (board_col + board_row) % 2 == 0 { '_' } else { ' ' });
            } else {
                out.push(piece as char);
            }
        }
        out.push('\n');
    }

    out
}

/// Print a loaded board to stdout.
pub fn print_board(board: &Board, reversed: bool) {
    print!("{}", render_board(board, reversed));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::load_fen;

    fn loaded_board(fen: &str) -> Board {
        let mut board = Board::new();
        load_fen(&mut board, fen).expect("test layout should load");
        board
    }

    #[test]
    fn test_render_full_pawn_layout() {
        let board = loaded_board("pppppppp/pppppppp/8/8/8/8/PPPPPPPP/PPPPPPPP");
        let expected = concat!(
            " abcdefgh\n",
            "1pppppppp\n",
            "2pppppppp\n",
            "3_ _ _ _ \n",
            "4 _ _ _ _\n",
            "5_ _ _ _ \n",
            "6 _ _ _ _\n",
            "7PPPPPPPP\n",
            "8PPPPPPPP\n",
        );
        assert_eq!(render_board(&board, false), expected);
    }

    #[test]
    fn test_render_reversed_mirrors_header_and_ranks() {
        let board = loaded_board("n7/8/8/8/8/8/8/7N");
        let expected = concat!(
            " hgfedcba\n",
            "8N _ _ _ \n",
            "7 _ _ _ _\n",
            "6_ _ _ _ \n",
            "5 _ _ _ _\n",
            "4_ _ _ _ \n",
            "3 _ _ _ _\n",
            "2_ _ _ _ \n",
            "1 _ _ _ n\n",
        );
        assert_eq!(render_board(&board, true), expected);
    }

    #[test]
    fn test_display_uses_normal_orientation() {
        let board = loaded_board("pppppppp/pppppppp/8/8/8/8/PPPPPPPP/PPPPPPPP");
        assert_eq!(format!("{board}"), render_board(&board, false));
    }
}
