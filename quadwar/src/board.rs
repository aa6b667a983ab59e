use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{term_for_slot, Degree, Term};

pub const BOARD_ROWS: i8 = 9;
pub const BOARD_COLS: i8 = 8;

/// One of the two sides.
///
/// Blue moves first; Red is the second-turn side (and the joiner in a peer
/// session).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// The row delta of a forward step for this side.
    ///
    /// Red sets up on rows 0..3 and advances toward larger rows, Blue sets up
    /// on rows 6..9 and advances toward smaller ones.
    pub fn forward(self) -> i8 {
        match self {
            Player::Red => 1,
            Player::Blue => -1,
        }
    }
}

/// A cell coordinate on the 9x8 board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    pub fn in_bounds(self) -> bool {
        (0..BOARD_ROWS).contains(&self.row) && (0..BOARD_COLS).contains(&self.col)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A piece on the board: an algebraic term fielded by one side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub term: Term,
}

/// Sparse mapping from occupied squares to pieces.
///
/// Pure container: it holds no legality or capture logic, and it is mutated
/// only through the [`Game`](crate::Game) engine once play begins. Keys are
/// present only for occupied squares, and iteration is row-major.
#[derive(Clone, Debug, Default)]
pub struct Board {
    pieces: BTreeMap<Square, Piece>,
}

impl Board {
    pub fn empty() -> Self {
        Board::default()
    }

    /// The initial formation: three tier rows per side, quadratics on each
    /// back rank, linears next, constants nearest the center, with Red's
    /// coefficient rows mirrored left-right.
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        let tiers = [Degree::Quadratic, Degree::Linear, Degree::Constant];
        for (offset, &degree) in tiers.iter().enumerate() {
            let offset = offset as i8;
            for col in 0..BOARD_COLS {
                board.set(
                    Square::new(offset, col),
                    Piece {
                        owner: Player::Red,
                        term: term_for_slot(Player::Red, degree, col),
                    },
                );
                board.set(
                    Square::new(BOARD_ROWS - 1 - offset, col),
                    Piece {
                        owner: Player::Blue,
                        term: term_for_slot(Player::Blue, degree, col),
                    },
                );
            }
        }
        board
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.pieces.get(&square).copied()
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.pieces.contains_key(&square)
    }

    pub fn set(&mut self, square: Square, piece: Piece) {
        self.pieces.insert(square, piece);
    }

    /// Removes and returns the piece at `square`.
    ///
    /// Removing an empty square is a no-op and returns `None`.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.pieces.remove(&square)
    }

    /// All occupied squares with their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces.iter().map(|(&sq, &piece)| (sq, piece))
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.owner == player)
    }

    pub fn count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::ArbitraryBoard;
    use crate::term;

    #[test]
    fn starting_position_shape() {
        let board = Board::starting_position();
        assert_eq!(board.len(), 48);
        assert_eq!(board.count(Player::Red), 24);
        assert_eq!(board.count(Player::Blue), 24);

        // Back ranks hold quadratics, center-most tiers hold constants
        for col in 0..BOARD_COLS {
            assert_eq!(board.get(Square::new(0, col)).unwrap().term.degree, Degree::Quadratic);
            assert_eq!(board.get(Square::new(2, col)).unwrap().term.degree, Degree::Constant);
            assert_eq!(board.get(Square::new(8, col)).unwrap().term.degree, Degree::Quadratic);
            assert_eq!(board.get(Square::new(6, col)).unwrap().term.degree, Degree::Constant);
        }
        // The two formations mirror each other left-right
        assert_eq!(board.get(Square::new(0, 0)).unwrap().term, term!("4x^2"));
        assert_eq!(board.get(Square::new(8, 7)).unwrap().term, term!("4x^2"));
        // Middle rows start empty
        for col in 0..BOARD_COLS {
            for row in 3..6 {
                assert!(board.get(Square::new(row, col)).is_none());
            }
        }
    }

    #[test]
    fn remove_is_idempotent() {
        let mut board = Board::starting_position();
        let sq = Square::new(0, 0);
        assert!(board.remove(sq).is_some());
        assert!(board.remove(sq).is_none());
        assert!(board.remove(Square::new(4, 4)).is_none());
    }

    quickcheck! {
        fn set_then_get(board: ArbitraryBoard, square: Square, piece: Piece) -> bool {
            let mut board = board.0;
            board.set(square, piece);
            board.get(square) == Some(piece)
        }

        fn remove_clears_the_square(board: ArbitraryBoard, square: Square) -> bool {
            let mut board = board.0;
            board.remove(square);
            board.get(square).is_none()
        }
    }
}
