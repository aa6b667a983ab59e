use quickcheck::{Arbitrary, Gen};

use crate::{Board, Degree, Piece, Player, Square, Term, SLOT_COEFFICIENTS};

impl Arbitrary for Player {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Player::Red, Player::Blue]).unwrap()
    }
}

impl Arbitrary for Degree {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Degree::Constant, Degree::Linear, Degree::Quadratic])
            .unwrap()
    }
}

impl Arbitrary for Term {
    fn arbitrary(g: &mut Gen) -> Self {
        Term {
            coefficient: *g.choose(&SLOT_COEFFICIENTS).unwrap(),
            degree: Degree::arbitrary(g),
        }
    }
}

impl Arbitrary for Piece {
    fn arbitrary(g: &mut Gen) -> Self {
        Piece {
            owner: Player::arbitrary(g),
            term: Term::arbitrary(g),
        }
    }
}

impl Arbitrary for Square {
    fn arbitrary(g: &mut Gen) -> Self {
        Square {
            row: *g.choose(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap(),
            col: *g.choose(&[0, 1, 2, 3, 4, 5, 6, 7]).unwrap(),
        }
    }
}

/// A board with a random scattering of pieces (possibly none).
#[derive(Clone, Debug)]
pub struct ArbitraryBoard(pub Board);

impl Arbitrary for ArbitraryBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut board = Board::empty();
        let num_pieces = usize::arbitrary(g) % 24;
        for _ in 0..num_pieces {
            board.set(Square::arbitrary(g), Piece::arbitrary(g));
        }
        ArbitraryBoard(board)
    }
}
