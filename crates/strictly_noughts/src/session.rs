//! Game session: the interface a presentation layer drives.
//!
//! A session owns exactly one [`GameState`] and the computer opponent.
//! Every call returns a [`RenderUpdate`] describing what the front end
//! should redraw, so no rendering surface is needed to exercise it.

use super::opponent::HeuristicOpponent;
use super::phases::TurnPhase;
use super::rules::apply_move;
use super::{GameState, MoveError, Outcome, Player, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One cell the front end must redraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct CellUpdate {
    /// Board index (0-8).
    pub index: usize,
    /// Text to show in the cell; empty clears it.
    pub symbol: String,
}

impl CellUpdate {
    fn mark(position: Position, player: Player) -> Self {
        Self::new(position.to_index(), player.symbol().to_string())
    }
}

/// Rendering instructions produced by every session operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderUpdate {
    /// Cells whose contents changed.
    pub cells_to_update: Vec<CellUpdate>,
    /// Outcome after the operation.
    pub outcome: Outcome,
    /// True while the human may not click (computer thinking or game over).
    pub should_lock_board: bool,
}

/// Proof that a computer turn was scheduled in a given game.
///
/// Tickets are invalidated by [`GameSession::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComputerTurnTicket {
    epoch: u64,
}

/// Result of a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Where the mark went.
    pub position: Position,
    /// State after the move.
    pub state: GameState,
    /// What to redraw.
    pub render: RenderUpdate,
    /// Present when the computer should move next.
    pub ticket: Option<ComputerTurnTicket>,
}

/// Errors returned by session operations. None of them change the state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// The move broke a rule.
    #[display("Illegal move: {}", _0)]
    #[from]
    IllegalMove(MoveError),

    /// The computer was asked to move on a full board.
    #[display("No moves available")]
    NoMovesAvailable,

    /// The computer was asked to move while the human is due.
    #[display("It is not the computer's turn")]
    NotComputerTurn,

    /// The ticket belongs to a game that has since been reset.
    #[display("Computer turn was discarded by a reset")]
    StaleTurn,
}

/// A single game between the human (X) and the computer (O).
#[derive(Debug, Clone)]
pub struct GameSession<R> {
    state: GameState,
    phase: TurnPhase,
    epoch: u64,
    opponent: HeuristicOpponent<R>,
}

impl GameSession<StdRng> {
    /// Session with a seeded tie-break source, or OS entropy when `seed` is `None`.
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> GameSession<R> {
    /// Creates a session with a fresh game.
    #[instrument(skip(rng))]
    pub fn new(rng: R) -> Self {
        info!("Creating game session");
        Self {
            state: GameState::new(),
            phase: TurnPhase::PlayerTurn,
            epoch: 0,
            opponent: HeuristicOpponent::new(rng),
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current turn phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Starts a new game. Same as [`GameSession::reset`].
    pub fn new_game(&mut self) -> RenderUpdate {
        self.reset()
    }

    /// Discards the current game and any scheduled computer turn.
    ///
    /// Safe at any point, including while a computer turn is pending.
    #[instrument(skip(self), fields(epoch = self.epoch))]
    pub fn reset(&mut self) -> RenderUpdate {
        self.state = GameState::new();
        self.phase = TurnPhase::PlayerTurn;
        self.epoch += 1;
        info!(epoch = self.epoch, "New game");

        RenderUpdate {
            cells_to_update: Position::ALL
                .iter()
                .map(|pos| CellUpdate::new(pos.to_index(), String::new()))
                .collect(),
            outcome: Outcome::InProgress,
            should_lock_board: false,
        }
    }

    /// Applies the human's move at `index`.
    ///
    /// On success the report carries a ticket when the computer is due.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn submit_human_move(&mut self, index: usize) -> Result<TurnReport, SessionError> {
        let placed = Position::from_index(index)
            .ok_or(MoveError::OutOfBounds(index))
            .and_then(|position| Ok((position, apply_move(&self.state, index, Player::X)?)));

        match placed {
            Ok((position, next)) => Ok(self.commit(Player::X, position, next)),
            Err(e) => {
                warn!(index, error = %e, "Human move rejected");
                Err(e.into())
            }
        }
    }

    /// Chooses and applies the computer's move right away.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn request_computer_move(&mut self) -> Result<TurnReport, SessionError> {
        match self.phase {
            TurnPhase::ComputerTurn => {}
            TurnPhase::PlayerTurn => return Err(SessionError::NotComputerTurn),
            TurnPhase::Won(_) | TurnPhase::Drawn => return Err(MoveError::GameOver.into()),
        }

        let (position, reason) = self
            .opponent
            .choose(self.state.board())
            .ok_or(SessionError::NoMovesAvailable)?;
        debug!(%position, %reason, "Computer move selected");

        let next = apply_move(&self.state, position.to_index(), Player::O)?;
        Ok(self.commit(Player::O, position, next))
    }

    /// Plays a deferred computer turn, unless a reset happened since it was scheduled.
    #[instrument(skip(self))]
    pub fn resolve_computer_turn(
        &mut self,
        ticket: ComputerTurnTicket,
    ) -> Result<TurnReport, SessionError> {
        if ticket.epoch != self.epoch {
            debug!(
                ticket_epoch = ticket.epoch,
                epoch = self.epoch,
                "Discarding stale computer turn"
            );
            return Err(SessionError::StaleTurn);
        }
        self.request_computer_move()
    }

    fn commit(&mut self, mover: Player, position: Position, next: GameState) -> TurnReport {
        self.state = next;
        self.phase = TurnPhase::after_move(mover, next.outcome());

        match next.outcome() {
            Outcome::Won(winner) => info!(%winner, "Game won"),
            Outcome::Draw => info!("Game drawn"),
            Outcome::InProgress => {}
        }

        let ticket = (self.phase == TurnPhase::ComputerTurn)
            .then_some(ComputerTurnTicket { epoch: self.epoch });

        TurnReport {
            position,
            state: next,
            render: RenderUpdate {
                cells_to_update: vec![CellUpdate::mark(position, mover)],
                outcome: next.outcome(),
                should_lock_board: self.phase != TurnPhase::PlayerTurn,
            },
            ticket,
        }
    }
}
