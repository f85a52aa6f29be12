use std::collections::{BTreeMap, HashMap};
use volare_catalog::{AirportRegistry, PlaneRegistry};
use volare_core::{Airport, FlightResult, Plane};
use volare_network::{Leg, LegGraph};

use crate::engine::BookingEngine;
use crate::stats;

/// Facade over the registries, the leg graph and the booking engine,
/// exposing the full boundary contract of the system.
///
/// The manager itself is single-threaded; wrap it in
/// [`SharedFlightManager`](crate::shared::SharedFlightManager) to serve
/// concurrent callers.
pub struct FlightManager {
    airports: AirportRegistry,
    fleet: PlaneRegistry,
    graph: LegGraph,
    engine: BookingEngine,
}

impl FlightManager {
    pub fn new() -> Self {
        Self {
            airports: AirportRegistry::new(),
            fleet: PlaneRegistry::new(),
            graph: LegGraph::new(),
            engine: BookingEngine::new(),
        }
    }

    /// Manager issuing a deterministic booking-code sequence, for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            airports: AirportRegistry::new(),
            fleet: PlaneRegistry::new(),
            graph: LegGraph::new(),
            engine: BookingEngine::seeded(seed),
        }
    }

    pub fn add_airport(
        &mut self,
        name: &str,
        city: &str,
        latitude: f64,
        longitude: f64,
    ) -> FlightResult<()> {
        self.airports.add_airport(name, city, latitude, longitude)
    }

    pub fn list_airports(&self) -> Vec<String> {
        self.airports.list_airports()
    }

    pub fn airport(&self, unique_name: &str) -> Option<&Airport> {
        self.airports.get(unique_name)
    }

    pub fn add_plane(&mut self, id: &str, capacity: u32) -> FlightResult<()> {
        self.fleet.add_plane(id, capacity)
    }

    /// Plane id to seat capacity for every registered plane.
    pub fn seat_capacities(&self) -> HashMap<String, u32> {
        self.fleet.seat_capacities()
    }

    pub fn plane(&self, id: &str) -> Option<&Plane> {
        self.fleet.get(id)
    }

    /// Define a route over registered airports; returns the leg count.
    pub fn define_route(&mut self, stops: &[&str]) -> FlightResult<usize> {
        self.graph.define_route(&self.airports, stops)
    }

    /// Assign a plane to a leg; returns the plane's capacity.
    pub fn assign_plane_to_leg(
        &mut self,
        from: &str,
        to: &str,
        plane_id: &str,
    ) -> FlightResult<u32> {
        self.graph.assign_plane_to_leg(&self.fleet, from, to, plane_id)
    }

    pub fn leg(&self, from: &str, to: &str) -> Option<&Leg> {
        self.graph.leg(from, to)
    }

    /// Seats free on every leg of the journey, keyed by leg.
    pub fn find_available_seats(
        &self,
        from: &str,
        to: &str,
    ) -> FlightResult<BTreeMap<String, Vec<u32>>> {
        self.engine.find_available_seats(&self.graph, from, to)
    }

    /// Book a seat across the journey; returns the booking code.
    pub fn book_seat(
        &mut self,
        passenger_id: &str,
        from: &str,
        to: &str,
        seat: u32,
    ) -> FlightResult<String> {
        let booking = self
            .engine
            .book_seat(&mut self.graph, passenger_id, from, to, seat)?;
        Ok(booking.code)
    }

    pub fn list_bookings_for_leg(&self, from: &str, to: &str) -> Vec<String> {
        stats::list_bookings_for_leg(&self.graph, from, to)
    }

    pub fn occupation_rate(&self, from: &str, to: &str) -> f64 {
        stats::occupation_rate(&self.graph, from, to)
    }

    pub fn most_popular_leg(&self) -> Option<String> {
        stats::most_popular_leg(&self.graph)
    }
}

impl Default for FlightManager {
    fn default() -> Self {
        Self::new()
    }
}
