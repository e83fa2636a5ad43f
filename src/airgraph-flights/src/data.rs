//! Sample data for the playground.
//!
//! This module provides the graphs a `FlightNetwork` can start from.

use airgraph_core::LabeledGraph;
use common_error::{AirgraphError, AirgraphResult};

use crate::model::{Airport, Flight};

/// Airports of the sample network, in insertion order.
const AIRPORTS: [&str; 8] = ["HNL", "LAX", "SFO", "ORD", "DFW", "PVD", "LGA", "MIA"];

/// Flights of the sample network as `(from, to, code, distance)`.
const FLIGHTS: [(&str, &str, &str, f64); 18] = [
    ("HNL", "LAX", "F1 UN3563", 2555.0),
    ("LAX", "HNL", "F2 DT1597", 2555.0),
    ("LAX", "SFO", "F3 UN9375", 337.0),
    ("SFO", "LAX", "F4 AM4526", 337.0),
    ("LAX", "ORD", "F5 UN4836", 1743.0),
    ("ORD", "LAX", "F6 VA2001", 1743.0),
    ("LAX", "DFW", "F10 AM4582", 1233.0),
    ("DFW", "LAX", "F9 SP1020", 1233.0),
    ("SFO", "ORD", "F7 UN1475", 1843.0),
    ("ORD", "SFO", "F8 AL7854", 1843.0),
    ("ORD", "DFW", "F11 UN4568", 802.0),
    ("ORD", "PVD", "F13 AM4520", 849.0),
    ("PVD", "ORD", "F14 UN7812", 849.0),
    ("DFW", "LGA", "F12 SP4512", 1387.0),
    ("LGA", "MIA", "F17 AM1026", 1099.0),
    ("MIA", "LGA", "F16 FT4021", 1099.0),
    ("PVD", "MIA", "F15 FT1000", 1099.0),
    ("DFW", "MIA", "F18 AM5267", 1099.0),
];

/// Edges of the lettered sample graph as `(from, to, weight)`.
const LETTER_EDGES: [(char, char, u32); 9] = [
    ('a', 'b', 6),
    ('b', 'c', 2),
    ('c', 'd', 30),
    ('d', 'e', 10),
    ('d', 'f', 22),
    ('f', 'e', 15),
    ('f', 'g', 8),
    ('e', 'g', 50),
    ('g', 'a', 11),
];

/// Create the sample US flight network.
///
/// Eight airports (HNL, LAX, SFO, ORD, DFW, PVD, LGA, MIA) connected by
/// eighteen flights. LAX is the busiest airport with eight flights.
pub fn flight_network() -> AirgraphResult<LabeledGraph<Airport, Flight>> {
    let mut graph = LabeledGraph::new();
    let ids: Vec<_> = AIRPORTS
        .iter()
        .map(|&code| (code, graph.insert_vertex(Airport::new(code))))
        .collect();
    let lookup = |code: &str| {
        ids.iter()
            .find(|(c, _)| *c == code)
            .map(|&(_, id)| id)
            .ok_or_else(|| AirgraphError::internal(format!("unknown sample airport {code}")))
    };

    for (from, to, code, distance) in FLIGHTS {
        graph.insert_edge(lookup(from)?, lookup(to)?, Flight::new(code, distance))?;
    }

    Ok(graph)
}

/// Create the lettered sample graph: vertices `a` to `g`, nine weighted edges.
pub fn letter_graph() -> AirgraphResult<LabeledGraph<char, u32>> {
    letters_with_edges(&LETTER_EDGES)
}

fn letters_with_edges(edges: &[(char, char, u32)]) -> AirgraphResult<LabeledGraph<char, u32>> {
    let mut graph = LabeledGraph::new();
    let ids: Vec<_> = ('a'..='g').map(|c| (c, graph.insert_vertex(c))).collect();
    let lookup = |letter: char| {
        ids.iter()
            .find(|(c, _)| *c == letter)
            .map(|&(_, id)| id)
            .ok_or_else(|| AirgraphError::internal(format!("unknown sample vertex {letter}")))
    };

    for &(from, to, weight) in edges {
        graph.insert_edge(lookup(from)?, lookup(to)?, weight)?;
    }

    Ok(graph)
}
