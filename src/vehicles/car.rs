//! Passenger car variant.

use super::Vehicle;

/// A car identified by brand, model, and fuel type.
#[derive(Clone, Debug)]
pub struct Car {
    brand: String,
    model: String,
    fuel_type: String,
}

impl Car {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        fuel_type: impl Into<String>,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            fuel_type: fuel_type.into(),
        }
    }
}

impl Vehicle for Car {
    fn drive(&self) -> String {
        format!(
            "Driving car {} {} with {}.",
            self.brand, self.model, self.fuel_type
        )
    }

    fn refuel(&self) -> String {
        format!(
            "Refueling {} for car {} {}.",
            self.fuel_type, self.brand, self.model
        )
    }
}
