use rand::seq::SliceRandom;
use rand::Rng;

use crate::{all_legal_moves, detect_equations, Board, Move, Player};

const EQUATION_BONUS: f64 = 100.0;
const PER_CAPTURE_BONUS: f64 = 10.0;
const BACKFIRE_PENALTY: f64 = -1000.0;

/// Picks a move for `player` by scoring every legal move one ply deep.
///
/// Each candidate is simulated on a scratch clone of the board (the live
/// board is never touched): a move that triggers equations is scored by
/// their outcomes, anything else by a small advance-and-centralize
/// heuristic with a random tiebreak. Exact ties are broken uniformly at
/// random. Returns `None` when the side has no legal move at all.
pub fn select_move<R: Rng + ?Sized>(board: &Board, player: Player, rng: &mut R) -> Option<Move> {
    let mut best_score = f64::NEG_INFINITY;
    let mut candidates: Vec<Move> = Vec::new();

    for mv in all_legal_moves(board, player) {
        let mut scratch = board.clone();
        // The move is legal, so the origin is occupied
        let Some(piece) = scratch.remove(mv.from) else {
            continue;
        };
        scratch.set(mv.to, piece);
        let events = detect_equations(&scratch, mv.to, player);

        let score = if events.is_empty() {
            let progress = f64::from((mv.to.row - mv.from.row) * player.forward());
            let centralize = if mv.to.col > 2 && mv.to.col < 5 { 1.0 } else { 0.0 };
            progress * 2.0 + centralize + rng.gen::<f64>()
        } else {
            events
                .iter()
                .map(|event| {
                    if event.success {
                        EQUATION_BONUS + PER_CAPTURE_BONUS * event.to_remove.len() as f64
                    } else {
                        BACKFIRE_PENALTY
                    }
                })
                .sum()
        };

        match score.partial_cmp(&best_score) {
            Some(std::cmp::Ordering::Greater) => {
                best_score = score;
                candidates = vec![mv];
            }
            Some(std::cmp::Ordering::Equal) => {
                candidates.push(mv);
            }
            _ => {}
        }
    }

    candidates.choose(rng).copied()
}
