use std::collections::{BTreeMap, BTreeSet};
use volare_core::{Booking, FlightError, FlightResult};
use volare_network::{resolve_path, LegGraph};

use crate::codes::BookingCodeGenerator;

/// Validates and commits seat reservations across every leg of a journey.
pub struct BookingEngine {
    codes: BookingCodeGenerator,
}

impl BookingEngine {
    pub fn new() -> Self {
        Self {
            codes: BookingCodeGenerator::new(),
        }
    }

    /// Engine whose booking codes come from a seeded generator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            codes: BookingCodeGenerator::seeded(seed),
        }
    }

    /// Seats free on every leg of the journey between `from` and `to`.
    ///
    /// Availability is a journey-wide property: the result maps each leg
    /// key on the resolved path to the same sorted intersection of the
    /// legs' free seats.
    pub fn find_available_seats(
        &self,
        graph: &LegGraph,
        from: &str,
        to: &str,
    ) -> FlightResult<BTreeMap<String, Vec<u32>>> {
        let path = resolve_path(graph, from, to);
        if path.is_empty() {
            return Err(FlightError::RouteNotFound {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let mut common: Option<BTreeSet<u32>> = None;
        for key in &path {
            let leg = graph
                .leg_by_key(key)
                .ok_or_else(|| FlightError::LegNotFound(key.clone()))?;
            if leg.assigned_plane().is_none() {
                return Err(FlightError::LegHasNoPlane(key.clone()));
            }
            let seats: BTreeSet<u32> = leg.available_seats().into_iter().collect();
            common = Some(match common {
                Some(previous) => previous.intersection(&seats).copied().collect(),
                None => seats,
            });
        }

        let common: Vec<u32> = common.unwrap_or_default().into_iter().collect();
        Ok(path.into_iter().map(|key| (key, common.clone())).collect())
    }

    /// Book `seat` for a passenger on every leg between `from` and `to`.
    ///
    /// The precondition pass checks every leg of the path before anything
    /// is written: either the whole journey is booked under one code, or
    /// no leg changes at all.
    pub fn book_seat(
        &mut self,
        graph: &mut LegGraph,
        passenger_id: &str,
        from: &str,
        to: &str,
        seat: u32,
    ) -> FlightResult<Booking> {
        let path = resolve_path(graph, from, to);
        if path.is_empty() {
            return Err(FlightError::RouteNotFound {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        for key in &path {
            let leg = graph
                .leg_by_key(key)
                .ok_or_else(|| FlightError::LegNotFound(key.clone()))?;
            let plane = leg
                .assigned_plane()
                .ok_or_else(|| FlightError::LegHasNoPlane(key.clone()))?;
            if seat < 1 || seat > plane.capacity {
                return Err(FlightError::SeatOutOfRange {
                    seat,
                    leg: key.clone(),
                });
            }
            if !leg.is_seat_available(seat) {
                return Err(FlightError::SeatUnavailable {
                    seat,
                    leg: key.clone(),
                });
            }
        }

        let code = self.codes.next_code();
        graph.commit_booking(&path, seat, &code)?;
        tracing::info!(
            "Booked seat {} for passenger {} under code {} across {} legs",
            seat,
            passenger_id,
            code,
            path.len()
        );

        Ok(Booking::new(
            code,
            passenger_id.to_string(),
            from.to_string(),
            to.to_string(),
            seat,
            path,
        ))
    }
}

impl Default for BookingEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use volare_catalog::{AirportRegistry, PlaneRegistry};

    fn network(capacities: &[u32]) -> LegGraph {
        // A chain A -> B -> C ... with one plane per leg.
        let names = ["A", "B", "C", "D"];
        let mut registry = AirportRegistry::new();
        let mut fleet = PlaneRegistry::new();
        let mut graph = LegGraph::new();

        let stops: Vec<String> = names[..=capacities.len()]
            .iter()
            .map(|n| format!("{}-{}", n, n))
            .collect();
        for name in &names[..=capacities.len()] {
            registry.add_airport(name, name, 0.0, 0.0).unwrap();
        }
        let stop_refs: Vec<&str> = stops.iter().map(String::as_str).collect();
        graph.define_route(&registry, &stop_refs).unwrap();

        for (i, capacity) in capacities.iter().enumerate() {
            let plane_id = format!("P{}", i + 1);
            fleet.add_plane(&plane_id, *capacity).unwrap();
            graph
                .assign_plane_to_leg(&fleet, &stops[i], &stops[i + 1], &plane_id)
                .unwrap();
        }
        graph
    }

    #[test]
    fn test_intersection_across_legs() {
        let graph = network(&[10, 4, 8]);
        let engine = BookingEngine::seeded(1);

        let seats = engine.find_available_seats(&graph, "A-A", "D-D").unwrap();
        assert_eq!(seats.len(), 3);
        for list in seats.values() {
            assert_eq!(list, &vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_booking_spans_all_legs() {
        let mut graph = network(&[3, 3]);
        let mut engine = BookingEngine::seeded(1);

        let booking = engine
            .book_seat(&mut graph, "U123", "A-A", "C-C", 2)
            .unwrap();
        assert_eq!(booking.code.len(), 6);
        assert_eq!(booking.legs, vec!["A-A;B-B", "B-B;C-C"]);

        for key in &booking.legs {
            let leg = graph.leg_by_key(key).unwrap();
            assert!(leg.booked_seats().contains(&2));
            assert_eq!(leg.booking_codes(), [booking.code.clone()]);
        }
    }

    #[test]
    fn test_failed_booking_changes_nothing() {
        let mut graph = network(&[3, 3]);
        let mut engine = BookingEngine::seeded(1);

        // Take seat 2 on the second leg only.
        engine.book_seat(&mut graph, "U1", "B-B", "C-C", 2).unwrap();

        let result = engine.book_seat(&mut graph, "U2", "A-A", "C-C", 2);
        assert!(
            matches!(result, Err(FlightError::SeatUnavailable { seat: 2, ref leg }) if leg == "B-B;C-C")
        );

        // The first leg must be untouched by the failed attempt.
        let first = graph.leg("A-A", "B-B").unwrap();
        assert!(first.booked_seats().is_empty());
        assert!(first.booking_codes().is_empty());
    }

    #[test]
    fn test_seat_out_of_range() {
        let mut graph = network(&[3]);
        let mut engine = BookingEngine::seeded(1);

        let result = engine.book_seat(&mut graph, "U1", "A-A", "B-B", 0);
        assert!(matches!(result, Err(FlightError::SeatOutOfRange { seat: 0, .. })));
        let result = engine.book_seat(&mut graph, "U1", "A-A", "B-B", 4);
        assert!(matches!(result, Err(FlightError::SeatOutOfRange { seat: 4, .. })));
    }

    #[test]
    fn test_unassigned_leg_blocks_journey() {
        let names = ["A", "B", "C"];
        let mut registry = AirportRegistry::new();
        for name in &names {
            registry.add_airport(name, name, 0.0, 0.0).unwrap();
        }
        let mut fleet = PlaneRegistry::new();
        fleet.add_plane("P1", 5).unwrap();
        let mut graph = LegGraph::new();
        graph.define_route(&registry, &["A-A", "B-B", "C-C"]).unwrap();
        graph.assign_plane_to_leg(&fleet, "A-A", "B-B", "P1").unwrap();

        let engine = BookingEngine::seeded(1);
        let result = engine.find_available_seats(&graph, "A-A", "C-C");
        assert!(matches!(result, Err(FlightError::LegHasNoPlane(key)) if key == "B-B;C-C"));
    }

    #[test]
    fn test_no_route() {
        let graph = network(&[3]);
        let engine = BookingEngine::seeded(1);
        let result = engine.find_available_seats(&graph, "B-B", "A-A");
        assert!(matches!(result, Err(FlightError::RouteNotFound { .. })));
    }
}
