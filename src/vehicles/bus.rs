//! City bus variant.

use super::Vehicle;

/// A bus described by seat count and the route it serves.
#[derive(Clone, Debug)]
pub struct Bus {
    passenger_capacity: u32,
    route: String,
}

impl Bus {
    pub fn new(passenger_capacity: u32, route: impl Into<String>) -> Self {
        Self {
            passenger_capacity,
            route: route.into(),
        }
    }
}

impl Vehicle for Bus {
    fn drive(&self) -> String {
        format!(
            "Bus with {} seats is driving on route {}.",
            self.passenger_capacity, self.route
        )
    }

    fn refuel(&self) -> String {
        format!(
            "Refueling bus with {} seats on route {}.",
            self.passenger_capacity, self.route
        )
    }
}
