use crate::{Board, Player, Square, BOARD_COLS, BOARD_ROWS};

/// Width of one rendered cell, in characters.
const CELL: usize = 7;

/// Renders the board as a text grid for logs and debugging.
///
/// Each occupied cell shows the owner's initial and the term's display
/// form, e.g. `R −4x²`; empty cells show a dot.
pub fn render_board(board: &Board) -> String {
    let mut result = String::from("    ");
    for col in 0..BOARD_COLS {
        result += &format!("{:^CELL$}", col);
    }
    result += "\n    ╭";
    for _ in 0..BOARD_COLS as usize * CELL {
        result += "─";
    }
    result += "╮\n";

    for row in 0..BOARD_ROWS {
        result += &format!("{:>3} │", row);
        for col in 0..BOARD_COLS {
            match board.get(Square::new(row, col)) {
                Some(piece) => {
                    let tag = match piece.owner {
                        Player::Red => 'R',
                        Player::Blue => 'B',
                    };
                    result += &format!("{:^CELL$}", format!("{} {}", tag, piece.term.pretty()));
                }
                None => result += &format!("{:^CELL$}", "·"),
            }
        }
        result += "│\n";
    }

    result += "    ╰";
    for _ in 0..BOARD_COLS as usize * CELL {
        result += "─";
    }
    result += "╯";
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_starting_position() {
        let rendered = render_board(&Board::starting_position());
        // Header, two border lines, nine board rows
        assert_eq!(rendered.lines().count(), 12);
        assert!(rendered.contains("R \u{2212}4x²"));
        assert!(rendered.contains("B 4x²"));
        assert!(rendered.contains("·"));
    }
}
