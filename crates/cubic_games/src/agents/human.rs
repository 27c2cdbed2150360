//! Human player that types coordinates at a prompt.

use super::Agent;
use anyhow::{Context, Result};
use cubic_tictactoe::{Action, Board, legal_actions};
use std::io::{BufRead, Stdout, Write};
use tracing::{debug, instrument};

/// Prompt shown before each move.
pub const PROMPT: &str = "Enter position [000 - 222], q to quit: ";

/// Human player reading moves from a line-based input.
///
/// Malformed and illegal input is reported and the prompt repeats.
/// Typing `q` ends the game.
pub struct HumanAgent<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanAgent<std::io::StdinLock<'static>, Stdout> {
    /// Human player on the terminal.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    /// Creates a human player over arbitrary input and output streams.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consumes the agent, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read move")?;
        if read == 0 {
            anyhow::bail!("Input closed before a move was entered");
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    #[instrument(skip_all, fields(agent = %self.name))]
    fn act(&mut self, board: &Board) -> Result<Option<Action>> {
        let legal = legal_actions(board);

        loop {
            let input = self.read_line()?;
            if input.eq_ignore_ascii_case("q") {
                debug!("Quit requested");
                return Ok(None);
            }

            match input.parse::<Action>() {
                Ok(action) if legal.contains(&action) => return Ok(Some(action)),
                Ok(_) => {
                    debug!(%input, "Cell already taken");
                    writeln!(self.output, "Illegal position: '{input}'")?;
                }
                Err(err) => {
                    debug!(%input, %err, "Rejected input");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
