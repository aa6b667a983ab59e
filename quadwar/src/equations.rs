use crate::{Board, Degree, Piece, Player, Square};

/// One satisfied equation along an axis, with its capture plan.
///
/// Created when a move completes, queued on the [`Game`](crate::Game),
/// consumed as a single identify/resolve animation unit and then discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquationEvent {
    /// The full contiguous chain through the moved piece, ordered along the
    /// axis.
    pub chain: Vec<Square>,
    /// The squares whose pieces are removed when this event resolves.
    pub to_remove: Vec<Square>,
    /// True if the discriminant was non-negative, i.e. the capture hits the
    /// opponent; false on a backfire.
    pub success: bool,
    /// Human-readable polynomial, e.g. `1x^2 + 0x + -4`. Coefficients are
    /// printed as summed, without normalization.
    pub polynomial: String,
}

/// The four scan axes: horizontal, vertical, main diagonal, anti-diagonal.
const AXES: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Contiguous occupied squares starting next to `origin`, walking in one
/// direction until an empty square or the board edge.
fn chain_from(board: &Board, origin: Square, d_row: i8, d_col: i8) -> Vec<(Square, Piece)> {
    let mut chain = Vec::new();
    let mut cur = Square::new(origin.row + d_row, origin.col + d_col);
    while cur.in_bounds() {
        match board.get(cur) {
            Some(piece) => chain.push((cur, piece)),
            None => break,
        }
        cur = Square::new(cur.row + d_row, cur.col + d_col);
    }
    chain
}

/// Scans the four axes through `origin` and returns one event per axis that
/// forms a valid equation.
///
/// Runs against the post-move board, before any removal is applied: a single
/// move yields 0 to 4 events, all detected on the same snapshot. The board is
/// only read here; applying the removals is the engine's job.
pub fn detect_equations(board: &Board, origin: Square, mover: Player) -> Vec<EquationEvent> {
    let Some(center) = board.get(origin) else {
        return Vec::new();
    };

    let mut events = Vec::new();
    for &(d_row, d_col) in &AXES {
        let mut chain = chain_from(board, origin, -d_row, -d_col);
        chain.reverse();
        chain.push((origin, center));
        chain.extend(chain_from(board, origin, d_row, d_col));

        // An equation needs at least two pieces, from both sides
        if chain.len() < 2 {
            continue;
        }
        if chain.iter().all(|(_, p)| p.owner == mover)
            || chain.iter().all(|(_, p)| p.owner != mover)
        {
            continue;
        }

        let mut a: i64 = 0;
        let mut b: i64 = 0;
        let mut c: i64 = 0;
        for (_, piece) in &chain {
            let coefficient = i64::from(piece.term.coefficient);
            match piece.term.degree {
                Degree::Quadratic => a += coefficient,
                Degree::Linear => b += coefficient,
                Degree::Constant => c += coefficient,
            }
        }
        // No quadratic term, no quadratic equation
        if a == 0 {
            continue;
        }

        let discriminant = b * b - 4 * a * c;
        let success = discriminant >= 0;
        let target = if success { mover.opponent() } else { mover };
        let to_remove = chain
            .iter()
            .filter(|(_, p)| p.owner == target)
            .map(|&(sq, _)| sq)
            .collect();

        events.push(EquationEvent {
            chain: chain.iter().map(|&(sq, _)| sq).collect(),
            to_remove,
            success,
            polynomial: format!("{}x^2 + {}x + {}", a, b, c),
        });
    }
    events
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::ArbitraryBoard;
    use crate::term;

    fn put(board: &mut Board, row: i8, col: i8, owner: Player, label: &str) {
        board.set(
            Square::new(row, col),
            Piece {
                owner,
                term: label.parse().expect("test label"),
            },
        );
    }

    #[test]
    fn real_roots_capture_the_opponent() {
        // Vertical chain x^2 + 0x - 4: discriminant 16
        let mut board = Board::empty();
        put(&mut board, 4, 3, Player::Blue, "x");
        put(&mut board, 5, 3, Player::Red, "x^2");
        put(&mut board, 6, 3, Player::Red, "-x");
        put(&mut board, 7, 3, Player::Blue, "-4");

        let events = detect_equations(&board, Square::new(5, 3), Player::Red);
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert!(event.success);
        assert_eq!(event.polynomial, "1x^2 + 0x + -4");
        assert_eq!(
            event.chain,
            vec![
                Square::new(4, 3),
                Square::new(5, 3),
                Square::new(6, 3),
                Square::new(7, 3),
            ]
        );
        // Only the opponent's pieces are listed for removal
        assert_eq!(event.to_remove, vec![Square::new(4, 3), Square::new(7, 3)]);
    }

    #[test]
    fn complex_roots_backfire_on_the_mover() {
        // x^2 + 4 has no real roots
        let mut board = Board::empty();
        put(&mut board, 5, 3, Player::Red, "x^2");
        put(&mut board, 6, 3, Player::Blue, "4");

        let events = detect_equations(&board, Square::new(5, 3), Player::Red);
        assert_eq!(events.len(), 1);
        assert!(!events[0].success);
        assert_eq!(events[0].polynomial, "1x^2 + 0x + 4");
        assert_eq!(events[0].to_remove, vec![Square::new(5, 3)]);
    }

    #[test]
    fn no_quadratic_sum_no_event() {
        // 2x^2 - 2x^2 cancels, leaving no quadratic term
        let mut board = Board::empty();
        put(&mut board, 4, 2, Player::Blue, "2x^2");
        put(&mut board, 4, 3, Player::Red, "-2x^2");
        put(&mut board, 4, 4, Player::Blue, "3");
        assert!(detect_equations(&board, Square::new(4, 3), Player::Red).is_empty());

        // Linear and constant only
        let mut board = Board::empty();
        put(&mut board, 4, 2, Player::Blue, "x");
        put(&mut board, 4, 3, Player::Red, "-4");
        assert!(detect_equations(&board, Square::new(4, 3), Player::Red).is_empty());
    }

    #[test]
    fn single_owner_chains_are_skipped() {
        let mut board = Board::empty();
        put(&mut board, 4, 2, Player::Red, "x^2");
        put(&mut board, 4, 3, Player::Red, "-4");
        assert!(detect_equations(&board, Square::new(4, 3), Player::Red).is_empty());
    }

    #[test]
    fn lone_pieces_form_no_chain() {
        let mut board = Board::empty();
        put(&mut board, 4, 4, Player::Red, "x^2");
        put(&mut board, 6, 6, Player::Blue, "-4"); // not contiguous
        assert!(detect_equations(&board, Square::new(4, 4), Player::Red).is_empty());
    }

    #[test]
    fn one_move_can_satisfy_several_axes() {
        // A cross centered on the moved piece: both the rank and the file
        // form x^2 - 4
        let mut board = Board::empty();
        put(&mut board, 4, 4, Player::Red, "x^2");
        put(&mut board, 4, 5, Player::Blue, "-4");
        put(&mut board, 5, 4, Player::Blue, "-4");

        let events = detect_equations(&board, Square::new(4, 4), Player::Red);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.success));
        // Axis order: horizontal first, then vertical
        assert_eq!(events[0].to_remove, vec![Square::new(4, 5)]);
        assert_eq!(events[1].to_remove, vec![Square::new(5, 4)]);
    }

    #[test]
    fn gaps_break_chains() {
        let mut board = Board::empty();
        put(&mut board, 4, 2, Player::Blue, "-4");
        // (4, 3) left empty
        put(&mut board, 4, 4, Player::Red, "x^2");
        put(&mut board, 4, 5, Player::Blue, "3x");
        let events = detect_equations(&board, Square::new(4, 4), Player::Red);
        assert_eq!(events.len(), 1);
        // 1x^2 + 3x + 0: discriminant 9, the -4 beyond the gap plays no part
        assert_eq!(events[0].polynomial, "1x^2 + 3x + 0");
        assert_eq!(events[0].chain.len(), 2);
    }

    quickcheck! {
        /// Every emitted event has a mixed-ownership chain of at least two
        /// pieces through the origin, and removes the pieces of exactly one
        /// side.
        fn event_invariants(board: ArbitraryBoard, origin: Square, mover: Player) -> bool {
            let board = board.0;
            detect_equations(&board, origin, mover).into_iter().all(|event| {
                let owners: Vec<Player> = event
                    .chain
                    .iter()
                    .filter_map(|&sq| board.get(sq).map(|p| p.owner))
                    .collect();
                let target = if event.success { mover.opponent() } else { mover };
                event.chain.len() >= 2
                    && event.chain.contains(&origin)
                    && owners.len() == event.chain.len()
                    && owners.iter().any(|&o| o == mover)
                    && owners.iter().any(|&o| o != mover)
                    && !event.to_remove.is_empty()
                    && event.to_remove.iter().all(|sq| {
                        event.chain.contains(sq)
                            && board.get(*sq).map(|p| p.owner) == Some(target)
                    })
            })
        }
    }
}
