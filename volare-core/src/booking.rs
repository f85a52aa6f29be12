use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of a committed seat reservation, returned for API ergonomics.
///
/// The legs traversed by the journey remain the system of record; this
/// value is derived at booking time and never stored or indexed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub code: String,
    pub passenger_id: String,
    pub origin: String,
    pub destination: String,
    pub seat_number: u32,
    pub legs: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        code: String,
        passenger_id: String,
        origin: String,
        destination: String,
        seat_number: u32,
        legs: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            passenger_id,
            origin,
            destination,
            seat_number,
            legs,
            created_at: Utc::now(),
        }
    }
}
