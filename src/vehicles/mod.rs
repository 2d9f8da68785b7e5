//! Vehicle variants and the capability they share.
//!
//! Each variant owns its attributes (set once at construction) and renders
//! human-readable descriptions for driving and refueling. No validation is
//! performed; every field combination is accepted, including empty strings
//! and zero numeric values.

pub mod bus;
pub mod car;
pub mod motorcycle;
pub mod scooter;
pub mod truck;

pub use bus::Bus;
pub use car::Car;
pub use motorcycle::Motorcycle;
pub use scooter::Scooter;
pub use truck::Truck;

/// Capability set shared by every vehicle variant.
pub trait Vehicle {
    /// Describes the vehicle in motion.
    fn drive(&self) -> String;

    /// Describes topping up the vehicle's energy source.
    fn refuel(&self) -> String;
}
