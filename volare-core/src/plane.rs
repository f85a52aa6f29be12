use serde::{Deserialize, Serialize};

/// A plane with a fixed seat capacity. Capacity is set at registration and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plane {
    pub id: String,
    pub capacity: u32,
}

impl Plane {
    pub fn new(id: String, capacity: u32) -> Self {
        Self { id, capacity }
    }
}
