//! Text and JSON presentation of render updates, and input parsing.

use std::io::Write;
use strictly_noughts::{Board, Outcome, Player, Position, RenderUpdate};

/// A line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Play the cell at this 0-based index.
    Cell(usize),
    /// Start over.
    Reset,
    /// Leave the program.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl Input {
    /// Parses `1`-`9`, a position label such as `center`, `reset`/`new`, or `quit`.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if let Ok(n) = trimmed.parse::<usize>() {
            return match n {
                1..=9 => Input::Cell(n - 1),
                _ => Input::Unknown(trimmed.to_string()),
            };
        }
        match trimmed.to_lowercase().as_str() {
            "reset" | "new" => Input::Reset,
            "quit" | "exit" | "q" => Input::Quit,
            label => Position::from_label_or_number(label)
                .map(|pos| Input::Cell(pos.to_index()))
                .unwrap_or_else(|| Input::Unknown(trimmed.to_string())),
        }
    }
}

/// Result banner shown when a game ends.
pub fn banner(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Won(Player::X) => Some("Congratulations! You win!"),
        Outcome::Won(Player::O) => Some("Computer wins! Better luck next time."),
        Outcome::Draw => Some("Game was a Draw."),
        Outcome::InProgress => None,
    }
}

/// Writes render updates to a terminal or a pipe.
pub struct Frontend<W> {
    out: W,
    json: bool,
}

impl<W: Write> Frontend<W> {
    /// Creates a front end writing to `out`.
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    /// Shows the result of an operation on `board`.
    pub fn render(&mut self, update: &RenderUpdate, board: &Board) -> std::io::Result<()> {
        if self.json {
            let line = serde_json::to_string(update).map_err(std::io::Error::other)?;
            writeln!(self.out, "{}", line)?;
            return self.out.flush();
        }

        writeln!(self.out, "\n{}\n", board.display())?;
        match banner(update.outcome) {
            Some(text) => writeln!(self.out, "{}\nType 'new' to play again.", text)?,
            None if update.should_lock_board => writeln!(self.out, "Computer is thinking...")?,
            None => writeln!(self.out, "Your move (1-9, reset, quit):")?,
        }
        self.out.flush()
    }

    /// Tells the user their input was not accepted. Silent in JSON mode.
    pub fn hint(&mut self, text: &str) -> std::io::Result<()> {
        if self.json {
            return Ok(());
        }
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_noughts::CellUpdate;

    fn output(frontend: Frontend<Vec<u8>>) -> String {
        String::from_utf8(frontend.out).unwrap()
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(Input::parse("1\n"), Input::Cell(0));
        assert_eq!(Input::parse(" 9 "), Input::Cell(8));
        assert_eq!(Input::parse("0"), Input::Unknown("0".to_string()));
        assert_eq!(Input::parse("Center"), Input::Cell(4));
        assert_eq!(Input::parse("NEW"), Input::Reset);
        assert_eq!(Input::parse("q"), Input::Quit);
        assert_eq!(Input::parse("hello"), Input::Unknown("hello".to_string()));
    }

    #[test]
    fn test_text_render_shows_banner() {
        let mut frontend = Frontend::new(Vec::new(), false);
        let update = RenderUpdate {
            cells_to_update: vec![CellUpdate::new(8, "O".to_string())],
            outcome: Outcome::Won(Player::O),
            should_lock_board: true,
        };
        frontend.render(&update, &Board::new()).unwrap();
        let text = output(frontend);
        assert!(text.contains("1|2|3"));
        assert!(text.contains("Computer wins! Better luck next time."));
    }

    #[test]
    fn test_text_render_while_thinking() {
        let mut frontend = Frontend::new(Vec::new(), false);
        let update = RenderUpdate {
            cells_to_update: vec![CellUpdate::new(0, "X".to_string())],
            outcome: Outcome::InProgress,
            should_lock_board: true,
        };
        frontend.render(&update, &Board::new()).unwrap();
        assert!(output(frontend).contains("Computer is thinking..."));
    }

    #[test]
    fn test_json_render_is_one_line() {
        let mut frontend = Frontend::new(Vec::new(), true);
        let update = RenderUpdate {
            cells_to_update: vec![CellUpdate::new(4, "X".to_string())],
            outcome: Outcome::InProgress,
            should_lock_board: true,
        };
        frontend.render(&update, &Board::new()).unwrap();
        frontend.hint("ignored").unwrap();
        let text = output(frontend);
        assert_eq!(text.lines().count(), 1);
        let parsed: RenderUpdate = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(parsed, update);
    }
}
