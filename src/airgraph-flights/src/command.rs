//! Line commands understood by the flight session.
//!
//! A line is split on whitespace; double quotes group words, so a flight
//! code with a space in it is written `"F1 UN3563"`. Blank lines and lines
//! starting with `#` carry no command.

use common_error::{AirgraphError, AirgraphResult};

/// One parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add-airport CODE`
    AddAirport { code: String },
    /// `remove-airport CODE`
    RemoveAirport { code: String },
    /// `add-flight FROM TO CODE DISTANCE`
    AddFlight {
        from: String,
        to: String,
        code: String,
        distance: String,
    },
    /// `remove-flight CODE`
    RemoveFlight { code: String },
    /// `stats`
    Stats,
    /// `list`
    List,
    /// `tree`
    Tree,
    /// `help`
    Help,
    /// `quit` or `exit`
    Quit,
}

/// Usage text printed by `help`.
pub const HELP: &str = "\
Commands:
  add-airport CODE                     add an airport
  remove-airport CODE                  remove an airport without flights
  add-flight FROM TO CODE DISTANCE     add a flight (quote codes with spaces)
  remove-flight CODE                   remove a flight
  stats                                show counts and the busiest airport
  list                                 list airports and flights
  tree                                 show flights grouped by departure airport
  help                                 show this text
  quit                                 leave the session";

impl Command {
    /// Parse one input line. Returns `Ok(None)` for blank and comment lines.
    pub fn parse(line: &str) -> AirgraphResult<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let words = split_words(trimmed)?;
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "add-airport" => {
                let [code] = expect_args::<1>(name, args, "CODE")?;
                Self::AddAirport { code }
            }
            "remove-airport" => {
                let [code] = expect_args::<1>(name, args, "CODE")?;
                Self::RemoveAirport { code }
            }
            "add-flight" => {
                let [from, to, code, distance] =
                    expect_args::<4>(name, args, "FROM TO CODE DISTANCE")?;
                Self::AddFlight {
                    from,
                    to,
                    code,
                    distance,
                }
            }
            "remove-flight" => {
                let [code] = expect_args::<1>(name, args, "CODE")?;
                Self::RemoveFlight { code }
            }
            "stats" => no_args(name, args, Self::Stats)?,
            "list" => no_args(name, args, Self::List)?,
            "tree" => no_args(name, args, Self::Tree)?,
            "help" | "?" => no_args(name, args, Self::Help)?,
            "quit" | "exit" => no_args(name, args, Self::Quit)?,
            other => {
                return Err(AirgraphError::command(format!(
                    "Unknown command '{other}'. Type 'help' for a list of commands."
                )));
            }
        };

        Ok(Some(command))
    }

    /// Whether running this command can change the network.
    pub const fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::AddAirport { .. }
                | Self::RemoveAirport { .. }
                | Self::AddFlight { .. }
                | Self::RemoveFlight { .. }
        )
    }
}

fn expect_args<const N: usize>(
    name: &str,
    args: &[String],
    usage: &str,
) -> AirgraphResult<[String; N]> {
    <[String; N]>::try_from(args.to_vec())
        .map_err(|_| AirgraphError::command(format!("Usage: {name} {usage}")))
}

fn no_args(name: &str, args: &[String], command: Command) -> AirgraphResult<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(AirgraphError::command(format!("'{name}' takes no arguments")))
    }
}

/// Split on whitespace, keeping double-quoted runs together.
fn split_words(line: &str) -> AirgraphResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }

    if in_quotes {
        return Err(AirgraphError::command("Unterminated quote."));
    }
    if has_word {
        words.push(current);
    }
    Ok(words)
}
