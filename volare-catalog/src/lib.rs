pub mod airports;
pub mod fleet;

pub use airports::AirportRegistry;
pub use fleet::PlaneRegistry;
