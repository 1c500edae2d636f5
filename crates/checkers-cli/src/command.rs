//! Console command parsing.

use checkers_core::{Color, Square};

use crate::error::CommandError;

/// Deepest search the `Depth` option and `go depth` accept.
pub const MAX_DEPTH: u8 = 10;

/// Parameters for the `go` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Search to this depth instead of the configured one.
    pub depth: Option<u8>,
}

/// An option set with `setoption name <name> value <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineOption {
    /// Search depth in plies.
    Depth(u8),
    /// The side the computer plays, or `None` for two human players.
    Computer(Option<Color>),
}

/// A parsed console command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `select <row> <col>` -- click a square.
    Select(Square),
    /// `moves` -- list the legal moves of the side to move.
    Moves,
    /// `go [depth <n>]` -- let the engine play the side to move.
    Go(GoParams),
    /// `board` / `show` -- print the position.
    Show,
    /// `setoption name <name> value <value>` -- change configuration.
    SetOption(EngineOption),
    /// `new` -- start a new game.
    NewGame,
    /// `quit` -- leave the session.
    Quit,
    /// Unrecognized command.
    Unknown(String),
}

/// Parse a single line of console input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match name {
        "select" => parse_select(args),
        "moves" => Ok(Command::Moves),
        "go" => parse_go(args),
        "board" | "show" => Ok(Command::Show),
        "setoption" => parse_setoption(args),
        "new" => Ok(Command::NewGame),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(name.to_string())),
    }
}

fn parse_select(args: &[&str]) -> Result<Command, CommandError> {
    let row = parse_coord(args.first(), "row")?;
    let col = parse_coord(args.get(1), "column")?;
    let square = Square::new(row, col).ok_or(CommandError::OffBoard { row, col })?;
    Ok(Command::Select(square))
}

fn parse_coord(token: Option<&&str>, field: &'static str) -> Result<u8, CommandError> {
    let token = token.ok_or(CommandError::MissingArgument {
        command: "select",
        argument: field,
    })?;
    token.parse().map_err(|_| CommandError::InvalidNumber {
        field,
        value: token.to_string(),
    })
}

/// Parse the `go` command arguments. Unknown tokens are skipped.
fn parse_go(args: &[&str]) -> Result<Command, CommandError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < args.len() {
        match args[i] {
            "depth" => {
                let value = args.get(i + 1).ok_or(CommandError::MissingArgument {
                    command: "go",
                    argument: "depth value",
                })?;
                params.depth = Some(parse_depth(value)?);
                i += 2;
            }
            _ => i += 1,
        }
    }

    Ok(Command::Go(params))
}

fn parse_depth(value: &str) -> Result<u8, CommandError> {
    match value.parse::<u8>() {
        Ok(depth) if (1..=MAX_DEPTH).contains(&depth) => Ok(depth),
        Ok(_) => Err(CommandError::InvalidOptionValue {
            name: "Depth",
            value: value.to_string(),
        }),
        Err(_) => Err(CommandError::InvalidNumber {
            field: "depth",
            value: value.to_string(),
        }),
    }
}

/// Parse `setoption name <name> value <value>`.
fn parse_setoption(args: &[&str]) -> Result<Command, CommandError> {
    let name_pos = args.iter().position(|&t| t == "name");
    let value_pos = args.iter().position(|&t| t == "value");

    let (Some(name_pos), Some(value_pos)) = (name_pos, value_pos) else {
        return Err(CommandError::MissingArgument {
            command: "setoption",
            argument: "name and value",
        });
    };
    if value_pos <= name_pos + 1 || value_pos + 1 >= args.len() {
        return Err(CommandError::MissingArgument {
            command: "setoption",
            argument: "name and value",
        });
    }

    let name = args[name_pos + 1..value_pos].join(" ");
    let value = args[value_pos + 1..].join(" ");

    match name.to_ascii_lowercase().as_str() {
        "depth" => Ok(Command::SetOption(EngineOption::Depth(parse_depth(&value)?))),
        "computer" => {
            let side = match value.to_ascii_lowercase().as_str() {
                "none" | "off" => None,
                other => Some(Color::from_name(other).ok_or(
                    CommandError::InvalidOptionValue {
                        name: "Computer",
                        value: value.clone(),
                    },
                )?),
            };
            Ok(Command::SetOption(EngineOption::Computer(side)))
        }
        _ => Err(CommandError::UnknownOption { name }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_select() {
        let cmd = parse_command("select 5 2").unwrap();
        assert_eq!(cmd, Command::Select(Square::new(5, 2).unwrap()));
    }

    #[test]
    fn parse_select_off_board() {
        let err = parse_command("select 8 0").unwrap_err();
        assert!(matches!(err, CommandError::OffBoard { row: 8, col: 0 }));
    }

    #[test]
    fn parse_select_missing_column() {
        let err = parse_command("select 3").unwrap_err();
        assert!(matches!(
            err,
            CommandError::MissingArgument {
                argument: "column",
                ..
            }
        ));
    }

    #[test]
    fn parse_select_not_a_number() {
        let err = parse_command("select a 1").unwrap_err();
        assert!(matches!(err, CommandError::InvalidNumber { field: "row", .. }));
    }

    #[test]
    fn parse_go_default() {
        assert_eq!(parse_command("go").unwrap(), Command::Go(GoParams::default()));
    }

    #[test]
    fn parse_go_depth() {
        let cmd = parse_command("go depth 4").unwrap();
        assert_eq!(cmd, Command::Go(GoParams { depth: Some(4) }));
    }

    #[test]
    fn parse_go_depth_out_of_range() {
        assert!(parse_command("go depth 0").is_err());
        assert!(parse_command("go depth 11").is_err());
        assert!(parse_command("go depth").is_err());
    }

    #[test]
    fn parse_setoption_depth() {
        let cmd = parse_command("setoption name Depth value 5").unwrap();
        assert_eq!(cmd, Command::SetOption(EngineOption::Depth(5)));
    }

    #[test]
    fn parse_setoption_computer() {
        let cmd = parse_command("setoption name Computer value red").unwrap();
        assert_eq!(cmd, Command::SetOption(EngineOption::Computer(Some(Color::Red))));

        let cmd = parse_command("setoption name computer value none").unwrap();
        assert_eq!(cmd, Command::SetOption(EngineOption::Computer(None)));
    }

    #[test]
    fn parse_setoption_errors() {
        assert!(matches!(
            parse_command("setoption name Hash value 16").unwrap_err(),
            CommandError::UnknownOption { .. }
        ));
        assert!(matches!(
            parse_command("setoption name Computer value blue").unwrap_err(),
            CommandError::InvalidOptionValue { .. }
        ));
        assert!(parse_command("setoption name Depth").is_err());
        assert!(parse_command("setoption value 3").is_err());
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("moves").unwrap(), Command::Moves);
        assert_eq!(parse_command("board").unwrap(), Command::Show);
        assert_eq!(parse_command("show").unwrap(), Command::Show);
        assert_eq!(parse_command("new").unwrap(), Command::NewGame);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn parse_unknown_and_empty() {
        assert_eq!(parse_command("foobar").unwrap(), Command::Unknown("foobar".into()));
        assert_eq!(parse_command("   ").unwrap(), Command::Unknown(String::new()));
    }
}
