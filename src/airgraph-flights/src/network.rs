//! Flight network controller.
//!
//! `FlightNetwork` is the single owner of the airport graph. Whatever drives
//! it (the command session, a test) holds it directly; there is no shared
//! global instance.

use std::fmt;

use airgraph_core::{EdgeId, GraphStats, LabeledGraph, VertexId};
use common_config::{NetworkConfig, SeedDataset};
use common_display::key_value_table;
use common_error::{AirgraphError, AirgraphResult, ensure, value_err};
use log::{debug, warn};

use crate::data::{flight_network, letter_graph};
use crate::model::{Airport, Flight};

/// An airport/flight graph plus the policies applied before mutating it.
#[derive(Debug)]
pub struct FlightNetwork {
    graph: LabeledGraph<Airport, Flight>,
    config: NetworkConfig,
}

impl FlightNetwork {
    /// Create a network populated from `config.seed`.
    pub fn new(config: NetworkConfig) -> AirgraphResult<Self> {
        let graph = match config.seed {
            SeedDataset::Flights => flight_network()?,
            SeedDataset::Letters => letters_as_flights()?,
            SeedDataset::Empty => LabeledGraph::new(),
        };
        debug!(
            "seeded '{}' network with {} airports and {} flights",
            config.seed,
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(Self { graph, config })
    }

    /// The underlying graph, for read-only queries.
    pub fn graph(&self) -> &LabeledGraph<Airport, Flight> {
        &self.graph
    }

    /// The policy settings in effect.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Add an airport with the given code.
    ///
    /// The code is trimmed and must be non-empty and not already in use.
    pub fn add_airport(&mut self, code: &str) -> AirgraphResult<VertexId> {
        let code = code.trim();
        self.check_airport(code).map_err(rejected)?;

        let id = self.graph.insert_vertex(Airport::new(code));
        debug!("added airport {code} as {id}");
        Ok(id)
    }

    /// Add a flight between two airports.
    ///
    /// `distance` is the raw user text; it must parse as a finite,
    /// non-negative number.
    pub fn add_flight(
        &mut self,
        from: VertexId,
        to: VertexId,
        code: &str,
        distance: &str,
    ) -> AirgraphResult<EdgeId> {
        let code = code.trim();
        let distance = self
            .check_flight(from, to, code, distance)
            .map_err(rejected)?;

        let id = self
            .graph
            .insert_edge(from, to, Flight::new(code, distance))?;
        debug!("added flight {code} as {id}: {from} -> {to}");
        Ok(id)
    }

    fn check_airport(&self, code: &str) -> AirgraphResult<()> {
        ensure!(!code.is_empty(), "Airport code cannot be null or empty.");
        ensure!(
            self.find_airport(code).is_none(),
            format!("Airport {code} already exists.")
        );
        Ok(())
    }

    /// Checks run in the order the user sees them reported; returns the
    /// parsed distance.
    fn check_flight(
        &self,
        from: VertexId,
        to: VertexId,
        code: &str,
        distance: &str,
    ) -> AirgraphResult<f64> {
        ensure!(
            from != to || self.config.allow_same_airport,
            "Cannot add a flight with the same airport as inbound/outbound."
        );
        ensure!(!code.is_empty(), "Flight code cannot be null or empty.");
        let Ok(distance) = distance.trim().parse::<f64>() else {
            value_err!("Distance must be a valid number.");
        };
        ensure!(
            distance.is_finite() && distance >= 0.0,
            "Distance must be a non-negative number."
        );
        Ok(distance)
    }

    /// Remove a flight, returning it.
    pub fn remove_flight(&mut self, flight: EdgeId) -> AirgraphResult<Flight> {
        let removed = self.graph.remove_edge(flight)?;
        debug!("removed flight {}", removed.code());
        Ok(removed)
    }

    /// Remove an airport that has no flights, returning it.
    pub fn remove_airport(&mut self, airport: VertexId) -> AirgraphResult<Airport> {
        match self.graph.remove_vertex(airport) {
            Ok(removed) => {
                debug!("removed airport {removed}");
                Ok(removed)
            }
            Err(err) => {
                warn!("cannot remove airport {airport}: {err}");
                Err(err)
            }
        }
    }

    /// First airport with the given code, in insertion order.
    pub fn find_airport(&self, code: &str) -> Option<VertexId> {
        let code = code.trim();
        self.graph.find_vertex(|airport| airport.code() == code)
    }

    /// First flight with the given code, in insertion order.
    pub fn find_flight(&self, code: &str) -> Option<EdgeId> {
        let code = code.trim();
        self.graph.find_edge(|flight| flight.code() == code)
    }

    /// The airport behind a handle.
    pub fn airport(&self, id: VertexId) -> AirgraphResult<&Airport> {
        self.graph.vertex(id)
    }

    /// The flight behind a handle.
    pub fn flight(&self, id: EdgeId) -> AirgraphResult<&Flight> {
        self.graph.edge(id)
    }

    /// Flights departing from `airport`, in insertion order.
    pub fn departures(&self, airport: VertexId) -> AirgraphResult<Vec<EdgeId>> {
        let mut departures = Vec::new();
        for edge in self.graph.incident_edges(airport)? {
            if self.graph.endpoints(edge)?.0 == airport {
                departures.push(edge);
            }
        }
        Ok(departures)
    }

    /// Counts and the busiest airport.
    pub fn statistics(&self) -> NetworkStatistics {
        let stats = GraphStats::collect(&self.graph);
        let busiest = stats.busiest.and_then(|(id, flights)| {
            self.graph.vertex(id).ok().map(|airport| BusiestAirport {
                code: airport.code().to_string(),
                flights,
            })
        });

        NetworkStatistics {
            airports: stats.vertex_count,
            flights: stats.edge_count,
            busiest,
        }
    }
}

/// Build the lettered sample as airports and flights.
///
/// Each edge becomes a flight coded by its endpoints (`ab`) with the edge
/// weight as distance.
fn letters_as_flights() -> AirgraphResult<LabeledGraph<Airport, Flight>> {
    let letters = letter_graph()?;
    let mut graph = LabeledGraph::new();
    let mut mapping = Vec::with_capacity(letters.vertex_count());

    for (id, letter) in letters.vertex_entries() {
        mapping.push((id, graph.insert_vertex(Airport::new(letter.to_string()))));
    }
    let translate = |id: VertexId| {
        mapping
            .iter()
            .find(|(old, _)| *old == id)
            .map(|&(_, new)| new)
            .ok_or_else(|| AirgraphError::internal(format!("letter vertex {id} was not copied")))
    };

    for (id, weight) in letters.edge_entries() {
        let (source, target) = letters.endpoints(id)?;
        let code = format!("{}{}", letters.vertex(source)?, letters.vertex(target)?);
        graph.insert_edge(
            translate(source)?,
            translate(target)?,
            Flight::new(code, f64::from(*weight)),
        )?;
    }

    Ok(graph)
}

fn rejected(err: AirgraphError) -> AirgraphError {
    warn!("{err}");
    err
}

/// Busiest airport and its number of inbound plus outbound flights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusiestAirport {
    /// Airport code.
    pub code: String,
    /// Inbound plus outbound flights.
    pub flights: usize,
}

/// The figures shown in the statistics panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkStatistics {
    /// Number of airports.
    pub airports: usize,
    /// Number of flights.
    pub flights: usize,
    /// Airport with the most flights, if any airport has one.
    pub busiest: Option<BusiestAirport>,
}

impl fmt::Display for NetworkStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (busiest, busiest_flights) = match &self.busiest {
            Some(b) => (b.code.clone(), b.flights),
            None => ("N/A".to_string(), 0),
        };
        let rows = [
            ("Airport count", self.airports.to_string()),
            ("Flight count", self.flights.to_string()),
            ("Busiest Airport", busiest),
            ("Busiest Airport Flight Count", busiest_flights.to_string()),
        ];
        f.write_str(&key_value_table(&rows))
    }
}

/// Turn an error into the sentence shown to the person at the keyboard.
pub fn user_message(err: &AirgraphError) -> String {
    match err {
        AirgraphError::VertexHasIncidentEdges { .. } => {
            "Cannot remove an airport that has flights associated with it.".to_string()
        }
        AirgraphError::InvalidHandle { .. } => {
            "The selected airport or flight no longer exists.".to_string()
        }
        AirgraphError::ValueError(msg) | AirgraphError::CommandError(msg) => msg.clone(),
        other => other.to_string(),
    }
}
