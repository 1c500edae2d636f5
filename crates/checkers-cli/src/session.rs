//! Line-oriented console session: a human plays against the engine.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use checkers_core::{Color, Game};
use checkers_engine::{evaluate, search};

use crate::command::{Command, EngineOption, GoParams, parse_command};
use crate::error::CommandError;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search depth in plies.
    pub depth: u8,
    /// The side the engine plays automatically, if any.
    pub computer: Option<Color>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            computer: Some(Color::White),
        }
    }
}

/// Outcome of handling one command.
enum Flow {
    Continue,
    Quit,
}

/// A console game session.
///
/// Reads one command per line, answers on the output stream, and lets the
/// engine reply whenever it is the computer's turn. The session ends on
/// `quit`, at end of input, or once the game has a winner.
pub struct Session {
    game: Game,
    config: EngineConfig,
}

impl Session {
    /// Create a session at the opening position with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_game(Game::new(), config)
    }

    /// Create a session continuing an existing game.
    pub fn with_game(game: Game, config: EngineConfig) -> Self {
        Self { game, config }
    }

    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Run the session until `quit`, end of input, or a winner.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<(), CommandError> {
        self.print_position(&mut out)?;
        self.computer_reply(&mut out)?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let flow = match parse_command(trimmed) {
                Ok(cmd) => self.handle(cmd, &mut out)?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(out, "error: {e}")?;
                    Flow::Continue
                }
            };
            if matches!(flow, Flow::Quit) {
                break;
            }

            self.computer_reply(&mut out)?;
            if let Some(winner) = self.game.winner() {
                writeln!(out, "winner {winner}")?;
                break;
            }
        }

        out.flush()?;
        info!("session closed");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, CommandError> {
        match cmd {
            Command::Select(square) => {
                let turn = self.game.turn();
                if self.game.select(square) {
                    let dests: Vec<String> = self
                        .game
                        .valid_moves()
                        .destinations()
                        .map(|sq| sq.to_string())
                        .collect();
                    writeln!(out, "selected {square} -> {}", dests.join(" "))?;
                } else if self.game.turn() != turn {
                    self.print_position(out)?;
                } else {
                    writeln!(out, "nothing selected")?;
                }
            }
            Command::Moves => {
                for mv in self.game.legal_moves() {
                    writeln!(out, "{mv}")?;
                }
            }
            Command::Go(params) => self.play_engine(params, out)?,
            Command::Show => self.print_position(out)?,
            Command::SetOption(option) => self.handle_setoption(option),
            Command::NewGame => {
                self.game.reset();
                self.print_position(out)?;
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(name) => {
                if !name.is_empty() {
                    writeln!(out, "unknown command: {name}")?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_setoption(&mut self, option: EngineOption) {
        match option {
            EngineOption::Depth(depth) => self.config.depth = depth,
            EngineOption::Computer(side) => self.config.computer = side,
        }
        debug!(config = ?self.config, "configuration changed");
    }

    /// Let the engine move if it plays the side to move and the game is open.
    fn computer_reply<W: Write>(&mut self, out: &mut W) -> Result<(), CommandError> {
        if self.config.computer == Some(self.game.turn()) && self.game.winner().is_none() {
            self.play_engine(GoParams::default(), out)?;
        }
        Ok(())
    }

    fn play_engine<W: Write>(&mut self, params: GoParams, out: &mut W) -> Result<(), CommandError> {
        let depth = params.depth.unwrap_or(self.config.depth);
        let side = self.game.turn();
        let result = search(self.game.board(), depth, side);
        info!(
            %side,
            depth,
            score = result.score,
            nodes = result.nodes,
            "engine searched"
        );

        match (result.best_move, result.successor) {
            (Some(mv), Some(successor)) => {
                self.game.ai_move(successor);
                writeln!(out, "bestmove {mv} score {}", result.score)?;
                self.print_position(out)?;
            }
            _ => writeln!(out, "bestmove none")?,
        }
        Ok(())
    }

    fn print_position<W: Write>(&self, out: &mut W) -> Result<(), CommandError> {
        let board = self.game.board();
        writeln!(out, "{}", board.pretty())?;
        writeln!(out, "turn {} score {}", self.game.turn(), evaluate(board))?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
