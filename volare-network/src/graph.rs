use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use volare_catalog::{AirportRegistry, PlaneRegistry};
use volare_core::{FlightError, FlightResult};

use crate::leg::{leg_key, Leg};

/// The directed adjacency structure formed by all defined routes.
///
/// Legs are stored in a `BTreeMap`, so every iteration (path resolution,
/// statistics scans) sees them in lexicographic key order. That pins down
/// which path wins when several connect the same pair of airports.
#[derive(Debug, Serialize, Deserialize)]
pub struct LegGraph {
    legs: BTreeMap<String, Leg>,
}

impl LegGraph {
    pub fn new() -> Self {
        Self {
            legs: BTreeMap::new(),
        }
    }

    /// Materialize the legs of a route given as a sequence of airport
    /// unique names; returns the leg count.
    ///
    /// Validation happens in full before any leg is created: length first,
    /// then repeated stops, then unknown airports. A leg that already
    /// exists for a consecutive pair is reused with its booking state
    /// intact, so redefining an overlapping route is idempotent.
    pub fn define_route(
        &mut self,
        airports: &AirportRegistry,
        stops: &[&str],
    ) -> FlightResult<usize> {
        if stops.len() < 2 {
            return Err(FlightError::RouteTooShort);
        }

        let mut seen = HashSet::new();
        for stop in stops {
            if !seen.insert(*stop) {
                return Err(FlightError::DuplicateConnection(stop.to_string()));
            }
        }

        for stop in stops {
            if !airports.contains(stop) {
                return Err(FlightError::UnknownAirport(stop.to_string()));
            }
        }

        let leg_count = stops.len() - 1;
        for pair in stops.windows(2) {
            let key = leg_key(pair[0], pair[1]);
            self.legs
                .entry(key)
                .or_insert_with(|| Leg::new(pair[0].to_string(), pair[1].to_string()));
        }

        tracing::debug!("Defined route {} ({} legs)", stops.join(" -> "), leg_count);
        Ok(leg_count)
    }

    /// Attach a registered plane to an existing leg; returns its capacity.
    /// The assignment is irreversible.
    pub fn assign_plane_to_leg(
        &mut self,
        fleet: &PlaneRegistry,
        from: &str,
        to: &str,
        plane_id: &str,
    ) -> FlightResult<u32> {
        let key = leg_key(from, to);
        let leg = self
            .legs
            .get_mut(&key)
            .ok_or_else(|| FlightError::LegNotFound(key.clone()))?;
        let plane = fleet
            .get(plane_id)
            .ok_or_else(|| FlightError::PlaneNotFound(plane_id.to_string()))?;

        let capacity = leg.assign_plane(plane.clone())?;
        tracing::info!("Assigned plane {} to leg {}", plane_id, key);
        Ok(capacity)
    }

    /// Record `seat` and `code` on every leg of a resolved path.
    ///
    /// All keys are checked before the first write, so a stale path cannot
    /// leave the graph partially booked.
    pub fn commit_booking(&mut self, path: &[String], seat: u32, code: &str) -> FlightResult<()> {
        for key in path {
            if !self.legs.contains_key(key) {
                return Err(FlightError::LegNotFound(key.clone()));
            }
        }
        for key in path {
            if let Some(leg) = self.legs.get_mut(key) {
                leg.book_seat(seat, code.to_string());
            }
        }
        Ok(())
    }

    pub fn leg(&self, from: &str, to: &str) -> Option<&Leg> {
        self.legs.get(&leg_key(from, to))
    }

    pub fn leg_by_key(&self, key: &str) -> Option<&Leg> {
        self.legs.get(key)
    }

    /// All legs in lexicographic key order.
    pub fn legs(&self) -> impl Iterator<Item = (&String, &Leg)> {
        self.legs.iter()
    }

    /// Outgoing legs of an airport, ordered by key (hence by destination).
    pub fn outgoing<'a>(&'a self, from: &'a str) -> impl Iterator<Item = &'a Leg> + 'a {
        self.legs.values().filter(move |leg| leg.origin() == from)
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

impl Default for LegGraph {
    fn default() -> Self {
        Self::new()
    }
}
