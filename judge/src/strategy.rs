use clap::ValueEnum;
use quadwar::{all_legal_moves, select_move, Board, Move, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// A built-in move-selection strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Single-ply heuristic scoring.
    Greedy,
    /// A uniformly random legal move.
    Random,
}

impl Strategy {
    pub fn pick(self, board: &Board, player: Player, rng: &mut StdRng) -> Option<Move> {
        match self {
            Strategy::Greedy => select_move(board, player, rng),
            Strategy::Random => all_legal_moves(board, player).choose(rng).copied(),
        }
    }
}
