//! Integration tests for airgraph-flights
//!
//! Scripted sessions against the seeded network, mirroring what a person at
//! the flights view would do.

use airgraph_flights::*;
use common_config::{DisplayConfig, NetworkConfig, SeedDataset};
use proptest::prelude::*;

fn session(seed: SeedDataset) -> Session {
    let network = FlightNetwork::new(NetworkConfig {
        seed,
        allow_same_airport: false,
    })
    .unwrap();
    Session::new(network, DisplayConfig::default())
}

fn run(session: &mut Session, script: &str) -> (RunSummary, String) {
    let mut out = Vec::new();
    let summary = session.run(script.as_bytes(), &mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

#[test]
fn test_seeded_statistics() {
    let mut session = session(SeedDataset::Flights);
    let (summary, text) = run(&mut session, "stats\n");

    assert_eq!(summary.executed, 1);
    assert!(text.contains("Airport count:                 8"));
    assert!(text.contains("Flight count:                  18"));
    assert!(text.contains("Busiest Airport:               LAX"));
    assert!(text.contains("Busiest Airport Flight Count:  8"));
}

#[test]
fn test_airport_with_flights_cannot_be_removed() {
    let mut session = session(SeedDataset::Flights);
    let script = "\
remove-airport MIA
remove-flight \"F17 AM1026\"
remove-flight \"F16 FT4021\"
remove-flight \"F15 FT1000\"
remove-flight \"F18 AM5267\"
remove-airport MIA
";
    let (summary, text) = run(&mut session, script);

    assert_eq!(
        summary,
        RunSummary {
            executed: 5,
            failed: 1,
            mutations: 5
        }
    );
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines[0],
        "error: Cannot remove an airport that has flights associated with it."
    );
    assert_eq!(lines[5], "Removed airport MIA.");

    let stats = session.network().statistics();
    assert_eq!(stats.airports, 7);
    assert_eq!(stats.flights, 14);
}

#[test]
fn test_busiest_airport_changes_with_traffic() {
    let mut session = session(SeedDataset::Flights);
    let script = "\
add-flight PVD ORD \"F20 XX0001\" 849
add-flight ORD PVD \"F21 XX0002\" 849
stats
";
    let (summary, _) = run(&mut session, script);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.mutations, 2);

    // ORD reaches 9 flights and overtakes LAX with 8
    let stats = session.network().statistics();
    assert_eq!(
        stats.busiest,
        Some(BusiestAirport {
            code: "ORD".to_string(),
            flights: 9
        })
    );
}

#[test]
fn test_policy_rejections_leave_network_untouched() {
    let mut session = session(SeedDataset::Flights);
    let script = "\
add-airport \"\"
add-flight LAX LAX F1 10
add-flight LAX SFO \"\" 10
add-flight LAX SFO F1 ten
add-flight LAX XXX F1 10
";
    let (summary, text) = run(&mut session, script);

    assert_eq!(
        summary,
        RunSummary {
            executed: 0,
            failed: 5,
            mutations: 0
        }
    );
    let expected = [
        "error: Airport code cannot be null or empty.",
        "error: Cannot add a flight with the same airport as inbound/outbound.",
        "error: Flight code cannot be null or empty.",
        "error: Distance must be a valid number.",
        "error: No airport with code 'XXX'.",
    ];
    assert_eq!(text.lines().collect::<Vec<_>>(), expected);

    let stats = session.network().statistics();
    assert_eq!((stats.airports, stats.flights), (8, 18));
}

#[test]
fn test_invalid_utf8_line_is_reported_and_skipped() {
    let mut session = session(SeedDataset::Empty);
    let script: &[u8] = b"add-airport HNL\nadd-airport \xff\xfe\nadd-airport LAX\n";
    let mut out = Vec::new();

    let summary = session.run(script, &mut out).unwrap();
    assert_eq!(
        summary,
        RunSummary {
            executed: 2,
            failed: 1,
            mutations: 2
        }
    );

    let text = String::from_utf8(out).unwrap();
    let expected = [
        "Added airport HNL.",
        "error: Input line is not valid UTF-8.",
        "Added airport LAX.",
    ];
    assert_eq!(text.lines().collect::<Vec<_>>(), expected);
    assert!(session.network().find_airport("LAX").is_some());
}

#[test]
fn test_crlf_script() {
    let mut session = session(SeedDataset::Empty);
    let (summary, text) = run(&mut session, "add-airport HNL\r\nstats\r\n");

    assert_eq!(summary.executed, 2);
    assert!(text.contains("Airport count:                 1"));
}

#[test]
fn test_empty_network_statistics() {
    let mut session = session(SeedDataset::Empty);
    let (_, text) = run(&mut session, "add-airport PVD\nstats\n");

    assert!(text.contains("Busiest Airport:               N/A"));
    assert!(text.contains("Busiest Airport Flight Count:  0"));
}

#[test]
fn test_tree_and_list_commands() {
    let mut session = session(SeedDataset::Letters);
    let (summary, text) = run(&mut session, "tree\nlist\nhelp\n");

    assert_eq!(summary.executed, 3);
    assert!(text.starts_with("Flight network (7 airports, 9 flights)"));
    assert!(text.contains("├─ a (2 flights)"));
    assert!(text.contains("│  └─ ab -> b"));
    assert!(text.contains("Flights (9):"));
    assert!(text.contains("  ga: g -> a, distance 11"));
    assert!(text.contains("add-flight FROM TO CODE DISTANCE"));
}

proptest! {
    /// Statistics always agree with the graph after any series of valid flights.
    #[test]
    fn statistics_track_graph(
        wiring in prop::collection::vec((0usize..5, 0usize..5, 1u32..5000), 0..30)
    ) {
        let mut network = FlightNetwork::new(NetworkConfig {
            seed: SeedDataset::Empty,
            allow_same_airport: false,
        })
        .unwrap();
        let airports: Vec<_> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|code| network.add_airport(code).unwrap())
            .collect();

        let mut added = 0;
        for (i, (from, to, distance)) in wiring.into_iter().enumerate() {
            let result = network.add_flight(
                airports[from],
                airports[to],
                &format!("F{i}"),
                &distance.to_string(),
            );
            prop_assert_eq!(result.is_ok(), from != to);
            if result.is_ok() {
                added += 1;
            }
        }

        let stats = network.statistics();
        prop_assert_eq!(stats.airports, 5);
        prop_assert_eq!(stats.flights, added);

        let max_degree = airports
            .iter()
            .map(|&a| network.graph().degree(a).unwrap())
            .max()
            .unwrap_or(0);
        match stats.busiest {
            Some(busiest) => {
                prop_assert_eq!(busiest.flights, max_degree);
                let first_at_max = airports
                    .iter()
                    .find(|&&a| network.graph().degree(a).unwrap() == max_degree)
                    .map(|&a| network.airport(a).unwrap().code().to_string());
                prop_assert_eq!(Some(busiest.code), first_at_max);
            }
            None => prop_assert_eq!(max_degree, 0),
        }
    }
}
