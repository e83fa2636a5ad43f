//! Command session over a flight network.
//!
//! A `Session` reads commands line by line, applies them to the network it
//! owns and writes one response per command. Rejected commands are reported
//! and the session keeps going.

use std::io::{BufRead, Write};

use airgraph_core::VertexId;
use common_config::DisplayConfig;
use common_error::{AirgraphError, AirgraphResult};
use log::{debug, warn};

use crate::command::{Command, HELP};
use crate::network::{FlightNetwork, user_message};
use crate::utils::{network_listing, network_tree};

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user.
    Output(String),
    /// The user asked to leave.
    Quit,
}

/// Totals for one `Session::run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Commands that completed.
    pub executed: usize,
    /// Commands that were rejected or could not be parsed.
    pub failed: usize,
    /// Completed commands that changed the network.
    pub mutations: usize,
}

/// Drives a `FlightNetwork` from text commands.
#[derive(Debug)]
pub struct Session {
    network: FlightNetwork,
    display: DisplayConfig,
}

impl Session {
    /// Create a session owning `network`.
    pub fn new(network: FlightNetwork, display: DisplayConfig) -> Self {
        Self { network, display }
    }

    /// The network in its current state.
    pub fn network(&self) -> &FlightNetwork {
        &self.network
    }

    /// Consume the session and return the network.
    pub fn into_network(self) -> FlightNetwork {
        self.network
    }

    /// Apply one command.
    pub fn execute(&mut self, command: Command) -> AirgraphResult<Outcome> {
        let output = match command {
            Command::AddAirport { code } => {
                let id = self.network.add_airport(&code)?;
                format!("Added airport {}.", self.network.airport(id)?)
            }
            Command::RemoveAirport { code } => {
                let id = self.lookup_airport(&code)?;
                let removed = self.network.remove_airport(id)?;
                format!("Removed airport {removed}.")
            }
            Command::AddFlight {
                from,
                to,
                code,
                distance,
            } => {
                let from_id = self.lookup_airport(&from)?;
                let to_id = self.lookup_airport(&to)?;
                let id = self.network.add_flight(from_id, to_id, &code, &distance)?;
                format!("Added flight {} from {from} to {to}.", self.network.flight(id)?)
            }
            Command::RemoveFlight { code } => {
                let id = self.network.find_flight(&code).ok_or_else(|| {
                    AirgraphError::command(format!("No flight with code '{code}'."))
                })?;
                let removed = self.network.remove_flight(id)?;
                format!("Removed flight {removed}.")
            }
            Command::Stats => self.network.statistics().to_string(),
            Command::List => network_listing(&self.network, &self.display),
            Command::Tree => network_tree(&self.network, &self.display)
                .display()
                .to_string()
                .trim_end()
                .to_string(),
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Output(output))
    }

    /// Read commands from `input` until it ends or `quit` is read.
    ///
    /// Only IO failures abort the run; unreadable lines and command errors
    /// are written to `output` as `error: ...` lines.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> AirgraphResult<RunSummary> {
        let mut summary = RunSummary::default();
        let mut buf = Vec::new();
        let mut number = 0;

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            number += 1;

            let mut mutation = false;
            let result = decode_line(&buf)
                .and_then(Command::parse)
                .and_then(|command| match command {
                    Some(command) => {
                        debug!("line {number}: {command:?}");
                        mutation = command.is_mutation();
                        self.execute(command).map(Some)
                    }
                    None => Ok(None),
                });

            match result {
                Ok(Some(Outcome::Output(text))) => {
                    summary.executed += 1;
                    if mutation {
                        summary.mutations += 1;
                    }
                    writeln!(output, "{text}")?;
                }
                Ok(Some(Outcome::Quit)) => {
                    summary.executed += 1;
                    break;
                }
                Ok(None) => {}
                Err(err) => {
                    summary.failed += 1;
                    warn!("line {number}: {err}");
                    writeln!(output, "error: {}", user_message(&err))?;
                }
            }
        }

        output.flush()?;
        Ok(summary)
    }

    fn lookup_airport(&self, code: &str) -> AirgraphResult<VertexId> {
        self.network
            .find_airport(code)
            .ok_or_else(|| AirgraphError::command(format!("No airport with code '{code}'.")))
    }
}

/// One input line without its terminator.
fn decode_line(raw: &[u8]) -> AirgraphResult<&str> {
    let line = std::str::from_utf8(raw)
        .map_err(|_| AirgraphError::command("Input line is not valid UTF-8."))?;
    let line = line.strip_suffix('\n').unwrap_or(line);
    Ok(line.strip_suffix('\r').unwrap_or(line))
}
