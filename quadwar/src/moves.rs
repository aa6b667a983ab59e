use serde::{Deserialize, Serialize};

use crate::{Board, Degree, IllegalMove, Player, Square, BOARD_COLS, BOARD_ROWS};

/// A move of one piece from one square to another.
///
/// Captures never happen by landing on a piece; they are resolved separately
/// through [equations](crate::detect_equations).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

/// Checks a single move for `mover`, without applying it.
///
/// The checks run in a fixed order, so the returned error names the first
/// rule the move broke.
pub fn check_move(board: &Board, mv: Move, mover: Player) -> Result<(), IllegalMove> {
    let Move { from, to } = mv;
    if from == to {
        return Err(IllegalMove::NullMove);
    }
    if !from.in_bounds() {
        return Err(IllegalMove::OutOfBounds { square: from });
    }
    if !to.in_bounds() {
        return Err(IllegalMove::OutOfBounds { square: to });
    }
    let piece = board
        .get(from)
        .ok_or(IllegalMove::EmptyOrigin { square: from })?;
    if piece.owner != mover {
        return Err(IllegalMove::WrongOwner { square: from });
    }
    if board.is_occupied(to) {
        return Err(IllegalMove::DestinationOccupied { square: to });
    }

    let d_row = to.row - from.row;
    let d_col = to.col - from.col;
    let distance = d_row.abs().max(d_col.abs());
    let degree = piece.term.degree;
    if distance > degree.step_range() {
        return Err(IllegalMove::OutOfRange { degree, distance });
    }
    match degree {
        // Constants only ever take a single step straight ahead
        Degree::Constant => {
            if d_col != 0 || d_row != mover.forward() {
                return Err(IllegalMove::BadDirection { degree });
            }
        }
        Degree::Linear => {
            if d_row != 0 && d_col != 0 {
                return Err(IllegalMove::BadDirection { degree });
            }
        }
        Degree::Quadratic => {
            let cardinal = d_row == 0 || d_col == 0;
            let diagonal = d_row.abs() == d_col.abs();
            if !cardinal && !diagonal {
                return Err(IllegalMove::BadDirection { degree });
            }
        }
    }

    // Pieces do not jump: every square strictly between origin and
    // destination must be empty.
    let step_row = d_row.signum();
    let step_col = d_col.signum();
    let mut cur = Square::new(from.row + step_row, from.col + step_col);
    while cur != to {
        if board.is_occupied(cur) {
            return Err(IllegalMove::PathBlocked { square: cur });
        }
        cur = Square::new(cur.row + step_row, cur.col + step_col);
    }
    Ok(())
}

pub fn is_legal(board: &Board, mv: Move, mover: Player) -> bool {
    check_move(board, mv, mover).is_ok()
}

/// Every legal destination for the piece at `from`.
///
/// Simply tries all board squares; the board is small enough that no
/// pruning is needed.
pub fn legal_moves_from(board: &Board, from: Square, mover: Player) -> Vec<Square> {
    let mut destinations = Vec::new();
    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLS {
            let to = Square::new(row, col);
            if is_legal(board, Move { from, to }, mover) {
                destinations.push(to);
            }
        }
    }
    destinations
}

/// Every legal move for every piece `mover` owns.
pub fn all_legal_moves(board: &Board, mover: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, _) in board.pieces_of(mover) {
        moves.extend(
            legal_moves_from(board, from, mover)
                .into_iter()
                .map(|to| Move { from, to }),
        );
    }
    moves
}
