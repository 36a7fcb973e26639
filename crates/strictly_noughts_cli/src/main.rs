//! Strictly Noughts - terminal front end.
//!
//! Reads moves from stdin and prints the board after each turn. The
//! computer replies after a short delay, during which input is refused.

#![warn(missing_docs)]

mod cli;
mod config;
mod frontend;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::GameConfig;
use frontend::{Frontend, Input};
use std::time::Duration;
use strictly_noughts::{GameDriver, GameSession, SessionError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::load(&cli.config)
        .context("Failed to load configuration")?
        .with_overrides(cli.delay_ms, cli.seed, cli.json);

    play(config).await
}

/// Runs games until stdin closes or the user quits.
#[instrument(skip_all, fields(delay_ms = config.computer_delay_ms(), json = config.json()))]
async fn play(config: GameConfig) -> Result<()> {
    info!("Starting Strictly Noughts");

    let session = GameSession::seeded(*config.seed());
    let mut driver = GameDriver::new(session, Duration::from_millis(*config.computer_delay_ms()));
    let mut frontend = Frontend::new(std::io::stdout(), *config.json());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let update = driver.reset();
    frontend.render(&update, driver.session().state().board())?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    debug!("Input closed");
                    break;
                };
                match Input::parse(&line) {
                    Input::Quit => break,
                    Input::Reset => {
                        let update = driver.reset();
                        frontend.render(&update, driver.session().state().board())?;
                    }
                    Input::Cell(index) => match driver.human_move(index) {
                        Ok(report) => frontend.render(&report.render, report.state.board())?,
                        Err(SessionError::IllegalMove(e)) => {
                            debug!(error = %e, "Ignoring input");
                            frontend.hint(&format!("{}.", e))?;
                        }
                        Err(e) => warn!(error = %e, "Unexpected session error"),
                    },
                    Input::Unknown(text) => {
                        frontend.hint(&format!("Unrecognised input '{}'. Type 1-9, reset or quit.", text))?;
                    }
                }
            }
            turn = driver.next_computer_turn() => match turn {
                Ok(report) => frontend.render(&report.render, report.state.board())?,
                Err(e) => warn!(error = %e, "Computer turn failed"),
            },
        }
    }

    info!("Goodbye");
    Ok(())
}
