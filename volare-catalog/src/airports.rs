use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use volare_core::{Airport, FlightError, FlightResult};

/// In-memory registry of airports, keyed by unique name.
///
/// Airports are never deleted and their key never changes.
#[derive(Debug, Serialize, Deserialize)]
pub struct AirportRegistry {
    airports: HashMap<String, Airport>,
}

impl AirportRegistry {
    pub fn new() -> Self {
        Self {
            airports: HashMap::new(),
        }
    }

    /// Register an airport under its derived `city-name` key.
    pub fn add_airport(
        &mut self,
        name: &str,
        city: &str,
        latitude: f64,
        longitude: f64,
    ) -> FlightResult<()> {
        let airport = Airport::new(name.to_string(), city.to_string(), latitude, longitude);
        let unique_name = airport.unique_name();

        if self.airports.contains_key(&unique_name) {
            return Err(FlightError::DuplicateAirport(unique_name));
        }

        tracing::debug!("Registered airport {}", unique_name);
        self.airports.insert(unique_name, airport);
        Ok(())
    }

    /// Unique names of all registered airports. Order is not meaningful.
    pub fn list_airports(&self) -> Vec<String> {
        self.airports.keys().cloned().collect()
    }

    pub fn get(&self, unique_name: &str) -> Option<&Airport> {
        self.airports.get(unique_name)
    }

    pub fn contains(&self, unique_name: &str) -> bool {
        self.airports.contains_key(unique_name)
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

impl Default for AirportRegistry {
    fn default() -> Self {
        Self::new()
    }
}
