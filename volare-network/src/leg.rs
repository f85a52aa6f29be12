use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use volare_core::{FlightError, FlightResult, Plane};

/// Key for an ordered airport pair, in the `from;to` format.
pub fn leg_key(from: &str, to: &str) -> String {
    format!("{};{}", from, to)
}

/// A directed edge between two airports, the unit a plane and its seat
/// inventory are attached to.
///
/// At most one leg exists per ordered pair; routes that traverse the same
/// pair share the leg and therefore its booking state. The plane is set at
/// most once, and booked seats and codes only ever grow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leg {
    from: String,
    to: String,
    assigned_plane: Option<Plane>,
    booked_seats: BTreeSet<u32>,
    booking_codes: Vec<String>,
}

impl Leg {
    pub fn new(from: String, to: String) -> Self {
        Self {
            from,
            to,
            assigned_plane: None,
            booked_seats: BTreeSet::new(),
            booking_codes: Vec::new(),
        }
    }

    pub fn key(&self) -> String {
        leg_key(&self.from, &self.to)
    }

    pub fn origin(&self) -> &str {
        &self.from
    }

    pub fn destination(&self) -> &str {
        &self.to
    }

    pub fn assigned_plane(&self) -> Option<&Plane> {
        self.assigned_plane.as_ref()
    }

    /// Attach a plane to this leg; returns its capacity. The assignment is
    /// write-once and cannot be cleared or replaced.
    pub(crate) fn assign_plane(&mut self, plane: Plane) -> FlightResult<u32> {
        if self.assigned_plane.is_some() {
            return Err(FlightError::LegAlreadyAssigned(self.key()));
        }
        let capacity = plane.capacity;
        self.assigned_plane = Some(plane);
        Ok(capacity)
    }

    /// A seat is available iff a plane is assigned, the number is within
    /// `[1, capacity]` and nobody booked it yet.
    pub fn is_seat_available(&self, seat: u32) -> bool {
        match &self.assigned_plane {
            Some(plane) => {
                seat >= 1 && seat <= plane.capacity && !self.booked_seats.contains(&seat)
            }
            None => false,
        }
    }

    /// Sorted free seat numbers; empty when no plane is assigned.
    pub fn available_seats(&self) -> Vec<u32> {
        match &self.assigned_plane {
            Some(plane) => (1..=plane.capacity)
                .filter(|seat| !self.booked_seats.contains(seat))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Booked seats over capacity, `0.0` when no plane is assigned.
    pub fn occupation_rate(&self) -> f64 {
        match &self.assigned_plane {
            Some(plane) => self.booked_seats.len() as f64 / plane.capacity as f64,
            None => 0.0,
        }
    }

    /// Record a committed booking. Seats are never released, codes keep
    /// their insertion order.
    pub(crate) fn book_seat(&mut self, seat: u32, code: String) {
        self.booked_seats.insert(seat);
        self.booking_codes.push(code);
    }

    pub fn booked_seats(&self) -> &BTreeSet<u32> {
        &self.booked_seats
    }

    /// Booking codes in the order they were issued.
    pub fn booking_codes(&self) -> &[String] {
        &self.booking_codes
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
