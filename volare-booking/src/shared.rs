use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use volare_core::{Airport, FlightResult, Plane};

use crate::manager::FlightManager;

/// Clonable, thread-safe handle over a [`FlightManager`].
///
/// One coarse lock serializes every operation, so the validate-then-commit
/// sequence of a booking is atomic with respect to any other booking or
/// plane assignment touching an overlapping leg.
#[derive(Clone)]
pub struct SharedFlightManager {
    inner: Arc<RwLock<FlightManager>>,
}

impl SharedFlightManager {
    pub fn new() -> Self {
        Self::from_manager(FlightManager::new())
    }

    pub fn from_manager(manager: FlightManager) -> Self {
        Self {
            inner: Arc::new(RwLock::new(manager)),
        }
    }

    // Mutators never leave partial state behind, so a lock poisoned by a
    // panicking reader is safe to keep using.
    fn read(&self) -> RwLockReadGuard<'_, FlightManager> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FlightManager> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_airport(
        &self,
        name: &str,
        city: &str,
        latitude: f64,
        longitude: f64,
    ) -> FlightResult<()> {
        self.write().add_airport(name, city, latitude, longitude)
    }

    pub fn list_airports(&self) -> Vec<String> {
        self.read().list_airports()
    }

    pub fn airport(&self, unique_name: &str) -> Option<Airport> {
        self.read().airport(unique_name).cloned()
    }

    pub fn add_plane(&self, id: &str, capacity: u32) -> FlightResult<()> {
        self.write().add_plane(id, capacity)
    }

    pub fn seat_capacities(&self) -> HashMap<String, u32> {
        self.read().seat_capacities()
    }

    pub fn plane(&self, id: &str) -> Option<Plane> {
        self.read().plane(id).cloned()
    }

    pub fn define_route(&self, stops: &[&str]) -> FlightResult<usize> {
        self.write().define_route(stops)
    }

    pub fn assign_plane_to_leg(&self, from: &str, to: &str, plane_id: &str) -> FlightResult<u32> {
        self.write().assign_plane_to_leg(from, to, plane_id)
    }

    pub fn find_available_seats(
        &self,
        from: &str,
        to: &str,
    ) -> FlightResult<BTreeMap<String, Vec<u32>>> {
        self.read().find_available_seats(from, to)
    }

    /// Book a seat across the journey; the whole check-then-commit runs
    /// under the write lock.
    pub fn book_seat(
        &self,
        passenger_id: &str,
        from: &str,
        to: &str,
        seat: u32,
    ) -> FlightResult<String> {
        self.write().book_seat(passenger_id, from, to, seat)
    }

    pub fn list_bookings_for_leg(&self, from: &str, to: &str) -> Vec<String> {
        self.read().list_bookings_for_leg(from, to)
    }

    pub fn occupation_rate(&self, from: &str, to: &str) -> f64 {
        self.read().occupation_rate(from, to)
    }

    pub fn most_popular_leg(&self) -> Option<String> {
        self.read().most_popular_leg()
    }
}

impl Default for SharedFlightManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn shared_network(capacity: u32) -> SharedFlightManager {
        let fm = SharedFlightManager::new();
        fm.add_airport("A", "A", 0.0, 0.0).unwrap();
        fm.add_airport("B", "B", 1.0, 1.0).unwrap();
        fm.define_route(&["A-A", "B-B"]).unwrap();
        fm.add_plane("P1", capacity).unwrap();
        fm.assign_plane_to_leg("A-A", "B-B", "P1").unwrap();
        fm
    }

    #[test]
    fn test_concurrent_bookings_on_distinct_seats() {
        let fm = shared_network(8);

        let handles: Vec<_> = (1..=8)
            .map(|seat| {
                let fm = fm.clone();
                thread::spawn(move || fm.book_seat(&format!("U{}", seat), "A-A", "B-B", seat))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }

        assert_eq!(fm.occupation_rate("A-A", "B-B"), 1.0);
        assert_eq!(fm.list_bookings_for_leg("A-A", "B-B").len(), 8);
    }

    #[test]
    fn test_contended_seat_is_booked_exactly_once() {
        let fm = shared_network(4);

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let fm = fm.clone();
                thread::spawn(move || fm.book_seat(&format!("U{}", i), "A-A", "B-B", 1))
            })
            .collect();
        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(Result::is_ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(fm.list_bookings_for_leg("A-A", "B-B").len(), 1);
    }
}
