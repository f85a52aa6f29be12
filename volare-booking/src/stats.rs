use volare_network::LegGraph;

/// Booked seats over capacity for one leg, looked up directly by its
/// ordered pair without path resolution. `0.0` when the leg does not
/// exist or has no assigned plane.
pub fn occupation_rate(graph: &LegGraph, from: &str, to: &str) -> f64 {
    match graph.leg(from, to) {
        Some(leg) => leg.occupation_rate(),
        None => 0.0,
    }
}

/// Alphabetically sorted copy of the booking codes recorded on one leg;
/// empty when the leg does not exist.
pub fn list_bookings_for_leg(graph: &LegGraph, from: &str, to: &str) -> Vec<String> {
    match graph.leg(from, to) {
        Some(leg) => {
            let mut codes = leg.booking_codes().to_vec();
            codes.sort();
            codes
        }
        None => Vec::new(),
    }
}

/// Key of the leg with the most bookings, or `None` when no leg has any.
///
/// Legs are scanned in sorted key order and only a strictly greater count
/// replaces the current best, so ties resolve to the lexicographically
/// smallest key.
pub fn most_popular_leg(graph: &LegGraph) -> Option<String> {
    let mut best = None;
    let mut max = 0;
    for (key, leg) in graph.legs() {
        let count = leg.booking_codes().len();
        if count > max {
            max = count;
            best = Some(key.clone());
        }
    }
    best
}
