use serde::{Deserialize, Serialize};
use std::fmt;

/// An airport in the flight network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Airport {
    pub name: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    pub fn new(name: String, city: String, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            city,
            latitude,
            longitude,
        }
    }

    /// Unique name in the `city-name` format. This is the registry key and
    /// never changes once the airport is registered.
    pub fn unique_name(&self) -> String {
        format!("{}-{}", self.city, self.name)
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.unique_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_name_format() {
        let airport = Airport::new("Caselle".to_string(), "Torino".to_string(), 45.2, 7.65);
        assert_eq!(airport.unique_name(), "Torino-Caselle");
        assert_eq!(airport.to_string(), "Torino-Caselle");
    }
}
