//! Utility functions for the playground.
//!
//! This module provides the text views of a flight network: a flat listing,
//! a tree of departures per airport, and section headers for the terminal.

use common_config::DisplayConfig;
use common_display::{TextTree, indent, truncate_string};

use crate::network::FlightNetwork;

/// Print a section header.
pub fn print_header(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a divider line.
pub fn print_divider() {
    println!("{}", "-".repeat(60));
}

/// Airports and flights as two indented lists.
pub fn network_listing(network: &FlightNetwork, display: &DisplayConfig) -> String {
    let graph = network.graph();
    let max = display.max_label_len;

    let airports: Vec<_> = graph
        .vertex_entries()
        .map(|(_, airport)| truncate_string(airport.code(), max))
        .collect();

    let flights: Vec<_> = graph
        .edge_entries()
        .filter_map(|(id, flight)| {
            let (source, target) = graph.endpoints(id).ok()?;
            let from = graph.vertex(source).ok()?;
            let to = graph.vertex(target).ok()?;
            Some(format!(
                "{}: {from} -> {to}, distance {}",
                truncate_string(flight.code(), max),
                flight.distance()
            ))
        })
        .collect();

    let mut out = format!("Airports ({}):\n", airports.len());
    if !airports.is_empty() {
        out.push_str(&indent(&airports.join("\n"), "  "));
        out.push('\n');
    }
    out.push_str(&format!("Flights ({}):", flights.len()));
    if !flights.is_empty() {
        out.push('\n');
        out.push_str(&indent(&flights.join("\n"), "  "));
    }
    out
}

/// Airports with their departing flights underneath.
pub fn network_tree(network: &FlightNetwork, display: &DisplayConfig) -> TextTree {
    let graph = network.graph();
    let max = display.max_label_len;
    let mut root = TextTree::new("Flight network").with_details(format!(
        "{} airports, {} flights",
        graph.vertex_count(),
        graph.edge_count()
    ));

    for (id, airport) in graph.vertex_entries() {
        let degree = graph.degree(id).unwrap_or(0);
        let mut node = TextTree::new(truncate_string(airport.code(), max))
            .with_details(format!("{degree} flights"));

        if display.show_flights {
            for edge in network.departures(id).unwrap_or_default() {
                let Ok(flight) = graph.edge(edge) else { continue };
                let destination = graph.opposite(id, edge).and_then(|to| graph.vertex(to));
                let Ok(destination) = destination else {
                    continue;
                };
                node.push(TextTree::new(format!(
                    "{} -> {destination}",
                    truncate_string(flight.code(), max)
                )));
            }
        }
        root.push(node);
    }

    root
}
