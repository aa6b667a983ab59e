use std::collections::VecDeque;
use std::time::Duration;

use crate::{
    check_move, detect_equations, Board, Degree, EquationEvent, IllegalMove, Move, PeerMessage,
    Player,
};

/// Fixed dwell durations for the turn/animation state machine.
///
/// These are presentation constants, not game state. A driver feeds elapsed
/// time into [`Game::tick`]; nothing here reads the wall clock directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timings {
    /// How long a detected equation is highlighted before it resolves.
    pub identify: Duration,
    /// How long the outcome is shown before the removal is applied.
    pub resolve: Duration,
    /// Artificial pause before a staged agent move commits.
    pub think: Duration,
}

impl Timings {
    /// Zero dwell everywhere, for headless games and tests.
    pub const INSTANT: Timings = Timings {
        identify: Duration::ZERO,
        resolve: Duration::ZERO,
        think: Duration::ZERO,
    };
}

impl Default for Timings {
    fn default() -> Self {
        Timings {
            identify: Duration::from_millis(1500),
            resolve: Duration::from_millis(1500),
            think: Duration::from_millis(800),
        }
    }
}

/// Where the turn state machine currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the side to move (human input, staged agent move, or a
    /// peer message).
    AwaitingInput,
    /// A staged move is dwelling through the think pause.
    Thinking,
    /// The front equation event is being displayed.
    Identify,
    /// The front event's outcome is being displayed; its removal applies
    /// when the dwell ends.
    Resolve,
    /// The game has ended; see [`Game::end`].
    Over,
}

/// How the game ended. `winner` is `None` for a draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEnd {
    pub winner: Option<Player>,
    pub reason: String,
}

/// Summarizes the immediate effect of an accepted move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No equation formed; the turn passed to the opponent at once.
    Quiet,
    /// Equation events were queued; drive them with [`Game::tick`] or
    /// [`Game::fast_forward`].
    Equations { count: usize },
}

/// A game in progress: the board, whose turn it is, and the animation
/// queue for the move being resolved.
///
/// The board is owned here exclusively. Legality checks, equation detection
/// and the agent all read snapshots or references; every mutation goes
/// through this type.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_player: Player,
    phase: Phase,
    phase_clock: Duration,
    staged: Option<Move>,
    queue: VecDeque<EquationEvent>,
    timings: Timings,
    end: Option<GameEnd>,
}

impl Game {
    /// A fresh game from the starting position. Blue moves first.
    pub fn new(timings: Timings) -> Self {
        Game::from_position(Board::starting_position(), Player::Blue, timings)
    }

    /// A game from an arbitrary position, for setups and tests.
    pub fn from_position(board: Board, to_move: Player, timings: Timings) -> Self {
        Game {
            board,
            current_player: to_move,
            phase: Phase::AwaitingInput,
            phase_clock: Duration::ZERO,
            staged: None,
            queue: VecDeque::new(),
            timings,
            end: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// The event currently in its identify/resolve cycle.
    pub fn active_event(&self) -> Option<&EquationEvent> {
        match self.phase {
            Phase::Identify | Phase::Resolve => self.queue.front(),
            _ => None,
        }
    }

    /// Set once the game is over.
    pub fn end(&self) -> Option<&GameEnd> {
        self.end.as_ref()
    }

    /// Validates and executes a move for the side to move.
    ///
    /// Remote moves go through this exact same path, so capture attribution
    /// is always framed for the side that actually moved. On error, nothing
    /// changes.
    pub fn try_move(&mut self, mv: Move) -> Result<MoveOutcome, IllegalMove> {
        self.ensure_accepting_input()?;
        check_move(&self.board, mv, self.current_player)?;
        Ok(self.commit_move(mv))
    }

    /// Validates a move and holds it through the think pause instead of
    /// committing immediately.
    ///
    /// This is the agent's entry point: selection is synchronous, the dwell
    /// is presentation. The move commits from [`Game::tick`] once
    /// [`Timings::think`] has elapsed.
    pub fn stage_move(&mut self, mv: Move) -> Result<(), IllegalMove> {
        self.ensure_accepting_input()?;
        check_move(&self.board, mv, self.current_player)?;
        self.staged = Some(mv);
        self.enter(Phase::Thinking);
        Ok(())
    }

    /// The no-legal-moves path: the side to move forfeits its turn with no
    /// board change.
    pub fn pass_turn(&mut self) -> Result<(), IllegalMove> {
        self.ensure_accepting_input()?;
        self.current_player = self.current_player.opponent();
        Ok(())
    }

    /// Applies a peer message.
    ///
    /// `START` resets to a fresh game with Blue to move (the receiver plays
    /// second, as Red). `MOVE` is re-validated like any local move; an
    /// illegal remote move is rejected with all state unchanged, and the
    /// session layer decides what to do with the peer.
    pub fn apply_peer_message(
        &mut self,
        message: PeerMessage,
    ) -> Result<Option<MoveOutcome>, IllegalMove> {
        match message {
            PeerMessage::Start => {
                *self = Game::new(self.timings);
                Ok(None)
            }
            PeerMessage::Move { mv } => self.try_move(mv).map(Some),
        }
    }

    /// Advances the dwell clock.
    ///
    /// Each elapsed dwell triggers one transition: thinking commits the
    /// staged move, identify hands over to resolve, resolve applies the
    /// front event's removals and moves on to the next event or the
    /// end-of-turn bookkeeping. A large `dt` can cascade through several
    /// transitions.
    pub fn tick(&mut self, dt: Duration) {
        self.phase_clock += dt;
        loop {
            match self.phase {
                Phase::Thinking if self.phase_clock >= self.timings.think => {
                    // Thinking is only ever entered with a staged move
                    self.enter(Phase::AwaitingInput);
                    if let Some(mv) = self.staged.take() {
                        self.commit_move(mv);
                    }
                }
                Phase::Identify if self.phase_clock >= self.timings.identify => {
                    self.enter(Phase::Resolve);
                }
                Phase::Resolve if self.phase_clock >= self.timings.resolve => {
                    self.finish_event();
                }
                _ => break,
            }
        }
    }

    /// Drains the think pause and every queued event without dwell.
    pub fn fast_forward(&mut self) {
        while let Phase::Thinking | Phase::Identify | Phase::Resolve = self.phase {
            let dwell = match self.phase {
                Phase::Thinking => self.timings.think,
                Phase::Identify => self.timings.identify,
                Phase::Resolve => self.timings.resolve,
                Phase::AwaitingInput | Phase::Over => Duration::ZERO,
            };
            self.tick(dwell);
        }
    }

    fn ensure_accepting_input(&self) -> Result<(), IllegalMove> {
        match self.phase {
            Phase::AwaitingInput => Ok(()),
            Phase::Over => Err(IllegalMove::GameOver),
            Phase::Thinking | Phase::Identify | Phase::Resolve => Err(IllegalMove::Busy),
        }
    }

    /// Applies an already-validated move and queues whatever it triggers.
    fn commit_move(&mut self, mv: Move) -> MoveOutcome {
        // check_move verified the origin
        let piece = self.board.remove(mv.from).unwrap();
        self.board.set(mv.to, piece);

        let events = detect_equations(&self.board, mv.to, self.current_player);
        if events.is_empty() {
            // Nothing to animate, nothing to remove: terminal states are
            // unreachable without a capture, so just advance the player.
            self.current_player = self.current_player.opponent();
            self.enter(Phase::AwaitingInput);
            MoveOutcome::Quiet
        } else {
            let count = events.len();
            self.queue.extend(events);
            self.enter(Phase::Identify);
            MoveOutcome::Equations { count }
        }
    }

    /// Applies the front event's removals, then starts the next event or
    /// wraps up the turn.
    fn finish_event(&mut self) {
        if let Some(event) = self.queue.pop_front() {
            for &square in &event.to_remove {
                // Idempotent: a square already cleared by an earlier event
                // in the same queue is simply skipped
                self.board.remove(square);
            }
        }
        if !self.queue.is_empty() {
            self.enter(Phase::Identify);
        } else {
            match check_game_end(&self.board) {
                Some(end) => {
                    self.end = Some(end);
                    self.enter(Phase::Over);
                }
                None => {
                    self.current_player = self.current_player.opponent();
                    self.enter(Phase::AwaitingInput);
                }
            }
        }
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.phase_clock = Duration::ZERO;
    }
}

/// Terminal-state check, run once the equation queue for a move is drained.
pub fn check_game_end(board: &Board) -> Option<GameEnd> {
    let mut red = 0usize;
    let mut blue = 0usize;
    let mut has_quadratic = false;
    let mut has_linear = false;
    for (_, piece) in board.pieces() {
        match piece.owner {
            Player::Red => red += 1,
            Player::Blue => blue += 1,
        }
        match piece.term.degree {
            Degree::Quadratic => has_quadratic = true,
            Degree::Linear => has_linear = true,
            Degree::Constant => {}
        }
    }

    if red == 0 && blue == 0 {
        return Some(GameEnd {
            winner: None,
            reason: String::from("Mutual destruction: both armies eliminated simultaneously"),
        });
    }
    if red == 0 {
        return Some(GameEnd {
            winner: Some(Player::Blue),
            reason: String::from("All red pieces eliminated"),
        });
    }
    if blue == 0 {
        return Some(GameEnd {
            winner: Some(Player::Red),
            reason: String::from("All blue pieces eliminated"),
        });
    }
    if !has_quadratic {
        return Some(GameEnd {
            winner: None,
            reason: String::from("No quadratic terms left, equations can no longer form"),
        });
    }
    if !has_linear {
        // Without a linear term the discriminant is -4ac, which is negative
        // whenever a and c share sign: no chain can ever resolve with real
        // roots again.
        let mut all_non_negative = true;
        let mut all_non_positive = true;
        for (_, piece) in board.pieces() {
            match piece.term.degree {
                Degree::Quadratic | Degree::Constant => {
                    if piece.term.coefficient < 0 {
                        all_non_negative = false;
                    }
                    if piece.term.coefficient > 0 {
                        all_non_positive = false;
                    }
                }
                Degree::Linear => {}
            }
        }
        if all_non_negative || all_non_positive {
            return Some(GameEnd {
                winner: None,
                reason: String::from("Only same-sign terms left, real solutions are impossible"),
            });
        }
    }
    None
}
