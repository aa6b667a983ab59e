use quadwar::{render_board, Game, GameEnd, MoveOutcome, Phase, Player, Timings};
use rand::rngs::StdRng;
use tracing::trace;

use crate::recording::{RecordedMove, Recorder};
use crate::strategy::Strategy;

pub enum GameResult {
    WonBy { player: Player, reason: String },
    Tie { reason: String },
}

/// Plays one full headless game. `strategies[0]` plays Blue (and moves
/// first), `strategies[1]` plays Red.
///
/// Strategies only ever produce legal moves, so a rejected move is a bug
/// and is returned as an error rather than scored.
pub fn play_game(
    rng: &mut StdRng,
    strategies: [Strategy; 2],
    max_turns: usize,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    let mut game = Game::new(Timings::INSTANT);
    let mut moves: Vec<RecordedMove> = Vec::new();
    let mut consecutive_passes = 0;

    for _ in 0..max_turns {
        if game.phase() == Phase::Over {
            break;
        }
        let side = game.current_player();
        let strategy = match side {
            Player::Blue => strategies[0],
            Player::Red => strategies[1],
        };
        match strategy.pick(game.board(), side, rng) {
            Some(mv) => {
                consecutive_passes = 0;
                let outcome = game.try_move(mv)?;
                moves.push(RecordedMove { player: side, mv });
                if let MoveOutcome::Equations { count } = outcome {
                    trace!(count, ?side, "equations triggered");
                    game.fast_forward();
                }
                trace!("after {:?} {:?}:\n{}", side, mv, render_board(game.board()));
            }
            None => {
                consecutive_passes += 1;
                trace!(?side, "no legal moves, passing");
                if consecutive_passes == 2 {
                    break;
                }
                game.pass_turn()?;
            }
        }
    }

    let result = match game.end() {
        Some(GameEnd { winner: Some(player), reason }) => GameResult::WonBy {
            player: *player,
            reason: reason.clone(),
        },
        Some(GameEnd { winner: None, reason }) => GameResult::Tie { reason: reason.clone() },
        None if consecutive_passes == 2 => GameResult::Tie {
            reason: String::from("Neither side has a legal move"),
        },
        None => GameResult::Tie {
            reason: String::from("Turn limit reached"),
        },
    };

    if let Some(recorder) = recorder {
        let summary = match &result {
            GameResult::WonBy { player, reason } => format!("{:?} won: {}", player, reason),
            GameResult::Tie { reason } => format!("Tie: {}", reason),
        };
        recorder.write_game(&moves, &summary)?;
    }
    Ok(result)
}
