use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use volare_core::{FlightError, FlightResult, Plane};

/// In-memory registry of planes, keyed by id.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlaneRegistry {
    planes: HashMap<String, Plane>,
}

impl PlaneRegistry {
    pub fn new() -> Self {
        Self {
            planes: HashMap::new(),
        }
    }

    /// Register a plane. Capacity must be strictly positive.
    pub fn add_plane(&mut self, id: &str, capacity: u32) -> FlightResult<()> {
        if self.planes.contains_key(id) {
            return Err(FlightError::DuplicatePlane(id.to_string()));
        }
        if capacity == 0 {
            return Err(FlightError::InvalidCapacity(capacity));
        }

        tracing::debug!("Registered plane {} with {} seats", id, capacity);
        self.planes
            .insert(id.to_string(), Plane::new(id.to_string(), capacity));
        Ok(())
    }

    /// Plane id to seat capacity for every registered plane.
    pub fn seat_capacities(&self) -> HashMap<String, u32> {
        self.planes
            .values()
            .map(|plane| (plane.id.clone(), plane.capacity))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Plane> {
        self.planes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.planes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }
}

impl Default for PlaneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_capacities() {
        let mut fleet = PlaneRegistry::new();
        fleet.add_plane("PLA1", 100).unwrap();
        fleet.add_plane("PLA2", 120).unwrap();

        let seats = fleet.seat_capacities();
        assert_eq!(seats.len(), 2);
        assert_eq!(seats.get("PLA1"), Some(&100));
        assert_eq!(seats.get("PLA2"), Some(&120));
    }

    #[test]
    fn test_duplicate_plane() {
        let mut fleet = PlaneRegistry::new();
        fleet.add_plane("P1", 100).unwrap();

        let result = fleet.add_plane("P1", 150);
        assert!(matches!(result, Err(FlightError::DuplicatePlane(id)) if id == "P1"));
        assert_eq!(fleet.get("P1").unwrap().capacity, 100);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut fleet = PlaneRegistry::new();
        let result = fleet.add_plane("P2", 0);
        assert!(matches!(result, Err(FlightError::InvalidCapacity(0))));
        assert!(fleet.is_empty());
    }

    #[test]
    fn test_duplicate_checked_before_capacity() {
        let mut fleet = PlaneRegistry::new();
        fleet.add_plane("P1", 10).unwrap();
        // An existing id wins over an invalid capacity.
        let result = fleet.add_plane("P1", 0);
        assert!(matches!(result, Err(FlightError::DuplicatePlane(_))));
    }
}
