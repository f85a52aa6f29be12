pub mod airport;
pub mod booking;
pub mod plane;

pub use airport::Airport;
pub use booking::Booking;
pub use plane::Plane;

/// Every failure the engine surfaces to callers. All variants are caller
/// precondition violations; none leave partial state behind.
#[derive(Debug, thiserror::Error)]
pub enum FlightError {
    #[error("Airport {0} already exists")]
    DuplicateAirport(String),

    #[error("Route must have at least 2 connections")]
    RouteTooShort,

    #[error("Duplicate connection: {0}")]
    DuplicateConnection(String),

    #[error("Airport {0} not found")]
    UnknownAirport(String),

    #[error("Plane {0} already exists")]
    DuplicatePlane(String),

    #[error("Capacity must be positive, got {0}")]
    InvalidCapacity(u32),

    #[error("Leg {0} does not exist")]
    LegNotFound(String),

    #[error("Plane {0} not found")]
    PlaneNotFound(String),

    #[error("Leg {0} already has an assigned plane")]
    LegAlreadyAssigned(String),

    #[error("Route from {from} to {to} does not exist")]
    RouteNotFound { from: String, to: String },

    #[error("Leg {0} has no assigned plane")]
    LegHasNoPlane(String),

    #[error("Seat {seat} does not exist on leg {leg}")]
    SeatOutOfRange { seat: u32, leg: String },

    #[error("Seat {seat} is not available on leg {leg}")]
    SeatUnavailable { seat: u32, leg: String },
}

pub type FlightResult<T> = Result<T, FlightError>;
