//! Deferred computer turns on top of a [`GameSession`].
//!
//! After the human moves, the computer's reply is held back for a fixed
//! delay so the turn change is visible. The delay runs in a spawned tokio
//! task that only posts the session's [`ComputerTurnTicket`] back through a
//! channel; the session itself never leaves the driver. A reset aborts the
//! task, and the session rejects any ticket that was already in flight.

use super::session::{ComputerTurnTicket, GameSession, RenderUpdate, SessionError, TurnReport};
use rand::Rng;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// Pause before the computer replies.
pub const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_millis(500);

/// Owns a session and schedules the computer's deferred replies.
#[derive(Debug)]
pub struct GameDriver<R> {
    session: GameSession<R>,
    delay: Duration,
    ticket_tx: mpsc::UnboundedSender<ComputerTurnTicket>,
    ticket_rx: mpsc::UnboundedReceiver<ComputerTurnTicket>,
    pending: Option<JoinHandle<()>>,
}

impl<R: Rng> GameDriver<R> {
    /// Wraps `session`, delaying each computer reply by `delay`.
    pub fn new(session: GameSession<R>, delay: Duration) -> Self {
        let (ticket_tx, ticket_rx) = mpsc::unbounded_channel();
        Self {
            session,
            delay,
            ticket_tx,
            ticket_rx,
            pending: None,
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    /// True while a computer reply is scheduled but not yet played.
    pub fn is_computer_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Applies a human move and schedules the computer's reply if one is due.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, index: usize) -> Result<TurnReport, SessionError> {
        let report = self.session.submit_human_move(index)?;
        if let Some(ticket) = report.ticket {
            self.schedule(ticket);
        }
        Ok(report)
    }

    /// Resets the game and drops any scheduled computer reply.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> RenderUpdate {
        self.cancel_pending();
        self.session.reset()
    }

    /// Waits for the next scheduled computer reply and plays it.
    ///
    /// Tickets from before a reset are skipped. Never resolves while
    /// nothing is scheduled, so it can sit in a `select!` next to input.
    pub async fn next_computer_turn(&mut self) -> Result<TurnReport, SessionError> {
        while let Some(ticket) = self.ticket_rx.recv().await {
            match self.session.resolve_computer_turn(ticket) {
                Err(SessionError::StaleTurn) => continue,
                result => {
                    self.pending = None;
                    return result;
                }
            }
        }
        // The driver holds a sender, so the channel never closes
        std::future::pending().await
    }

    fn schedule(&mut self, ticket: ComputerTurnTicket) {
        self.cancel_pending();

        let tx = self.ticket_tx.clone();
        let delay = self.delay;
        debug!(?delay, "Scheduling computer turn");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver dropped means the driver is gone
            let _ = tx.send(ticket);
        }));
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Cancelling scheduled computer turn");
            handle.abort();
        }
    }
}

impl<R> Drop for GameDriver<R> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
