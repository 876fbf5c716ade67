//! Deterministic networks for tests and demos.

use crate::network::{Link, Mode, ModeKind, Network, Node};
use crate::TransitLine;

/// The fixed "Frabitztown" test network: four zones around a ring road
/// with one rail line and two bus lines.
pub fn frabitztown() -> Network {
    let mut network = Network::new("Frabitztown");

    for (id, description, kind) in [
        ('c', "car", ModeKind::Auto),
        ('w', "walk", ModeKind::Auxiliary),
        ('b', "bus", ModeKind::Transit),
        ('r', "rail", ModeKind::Transit),
    ] {
        network
            .add_mode(Mode {
                id,
                description: description.to_string(),
                kind,
            })
            .expect("fixture modes are unique");
    }

    // Centroids 1-4 are the zones; 101-104 form the ring road.
    let nodes = [
        (1, true, 0.0, 2.0),
        (2, true, 4.0, 2.0),
        (3, true, 2.0, 4.0),
        (4, true, 2.0, 0.0),
        (101, false, 1.0, 2.0),
        (102, false, 2.0, 3.0),
        (103, false, 3.0, 2.0),
        (104, false, 2.0, 1.0),
    ];
    for (id, is_centroid, x, y) in nodes {
        network
            .add_node(Node {
                id,
                is_centroid,
                x,
                y,
            })
            .expect("fixture nodes are unique");
    }

    // Centroid connectors, both directions, car and walk only.
    for (zone, node) in [(1, 101), (2, 103), (3, 102), (4, 104)] {
        for (from, to) in [(zone, node), (node, zone)] {
            network
                .add_link(Link {
                    from,
                    to,
                    length: 0.5,
                    modes: "cw".to_string(),
                })
                .expect("fixture connectors are valid");
        }
    }

    // Ring road, both directions, open to every surface mode.
    let ring = [(101, 102), (102, 103), (103, 104), (104, 101)];
    for (a, b) in ring {
        for (from, to) in [(a, b), (b, a)] {
            network
                .add_link(Link {
                    from,
                    to,
                    length: 1.2,
                    modes: "cwbr".to_string(),
                })
                .expect("fixture ring links are valid");
        }
    }

    let lines = [
        ("r1", 'r', "Frabitztown rail shuttle", 10.0, vec![101, 102, 103]),
        ("b1", 'b', "South loop bus", 12.0, vec![101, 104, 103]),
        ("b2", 'b', "North loop bus", 20.0, vec![103, 102, 101]),
    ];
    for (id, mode, description, headway_minutes, itinerary) in lines {
        network
            .add_transit_line(TransitLine {
                id: id.to_string(),
                mode,
                description: description.to_string(),
                headway_minutes,
                itinerary,
            })
            .expect("fixture lines are valid");
    }

    network
}
