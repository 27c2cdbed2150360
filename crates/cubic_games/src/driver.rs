//! Game loop that seats two agents at an engine.
//!
//! The driver resets the engine, asks the agent whose turn it is for a
//! move, steps the engine and prints the board, until the game ends or
//! an agent quits.

use crate::agents::Agent;
use anyhow::{Context, Result};
use cubic_tictactoe::{Engine, GameStatus, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use tracing::{debug, info, instrument};

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A player completed a line.
    Won(Player),
    /// The board filled without a line.
    Draw,
    /// An agent quit before the end.
    Aborted,
}

/// Result of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new, Serialize, Deserialize)]
pub struct GameReport {
    /// How it ended.
    outcome: GameOutcome,
    /// Moves played.
    moves: usize,
}

/// Tally over a series of games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Summary {
    /// Games started.
    games: u32,
    /// Games won by player one.
    player_one_wins: u32,
    /// Games won by player two.
    player_two_wins: u32,
    /// Drawn games.
    draws: u32,
    /// Games stopped by an agent.
    aborted: u32,
    /// Total moves across all games.
    total_moves: usize,
}

impl Summary {
    /// Adds one game to the tally.
    pub fn record(&mut self, report: &GameReport) {
        self.games += 1;
        self.total_moves += report.moves;
        match report.outcome {
            GameOutcome::Won(Player::One) => self.player_one_wins += 1,
            GameOutcome::Won(Player::Two) => self.player_two_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Aborted => self.aborted += 1,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Games played:    {}", self.games)?;
        writeln!(f, "Player 1 wins:   {}", self.player_one_wins)?;
        writeln!(f, "Player 2 wins:   {}", self.player_two_wins)?;
        writeln!(f, "Draws:           {}", self.draws)?;
        writeln!(f, "Aborted:         {}", self.aborted)?;
        write!(f, "Total moves:     {}", self.total_moves)
    }
}

/// Runs games between two agents and writes the transcript to `out`.
pub struct Driver<W> {
    engine: Engine,
    render: bool,
    out: W,
}

impl<W: Write> Driver<W> {
    /// Creates a driver; `render` prints the board after each move.
    pub fn new(render: bool, out: W) -> Self {
        Self {
            engine: Engine::new(),
            render,
            out,
        }
    }

    /// The engine of the game in progress or last played.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Consumes the driver, returning its output stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Plays one game. `agents[0]` is player one.
    #[instrument(skip_all, fields(one = agents[0].name(), two = agents[1].name()))]
    pub fn play(&mut self, agents: &mut [Box<dyn Agent>; 2]) -> Result<GameReport> {
        self.engine.reset();

        while !self.engine.is_done() {
            let round = self.engine.round();
            writeln!(self.out, "Move {}", round + 1)?;

            let seat = match self.engine.to_move() {
                Player::One => 0,
                Player::Two => 1,
            };
            let agent = &mut agents[seat];
            let Some(action) = agent.act(self.engine.board())? else {
                info!(agent = agent.name(), round, "Agent quit");
                writeln!(self.out, "==== Exiting ====")?;
                return Ok(GameReport::new(GameOutcome::Aborted, round));
            };

            let outcome = self
                .engine
                .step(action)
                .with_context(|| format!("{} played {}", agent.name(), action))?;
            debug!(%action, reward = outcome.reward, done = outcome.done, "Stepped");

            if self.render {
                writeln!(self.out, "{}", self.engine.render())?;
            }
        }

        let moves = self.engine.round();
        let outcome = match self.engine.status() {
            GameStatus::Won(player) => {
                writeln!(
                    self.out,
                    "==== Finished: Game won by player {}! ====",
                    player.number()
                )?;
                GameOutcome::Won(player)
            }
            _ => {
                writeln!(self.out, "==== Finished: Game ended in draw ====")?;
                GameOutcome::Draw
            }
        };
        info!(?outcome, moves, "Game over");
        Ok(GameReport::new(outcome, moves))
    }

    /// Plays up to `games` games, stopping early if an agent quits.
    #[instrument(skip(self, agents))]
    pub fn play_series(&mut self, agents: &mut [Box<dyn Agent>; 2], games: u32) -> Result<Summary> {
        let mut summary = Summary::default();
        for game in 1..=games {
            if games > 1 {
                writeln!(self.out, "==== Game {} of {} ====", game, games)?;
            }
            let report = self.play(agents)?;
            summary.record(&report);
            if report.outcome == GameOutcome::Aborted {
                break;
            }
        }
        Ok(summary)
    }
}
