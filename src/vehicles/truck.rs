//! Cargo truck variant.

use super::Vehicle;

/// A truck described by load capacity in tons and axle count.
///
/// Capacity formats through `Display`, so whole-number values render
/// without a trailing `.0` (a 12.0-ton truck prints as "12 tons").
#[derive(Clone, Debug)]
pub struct Truck {
    capacity_tons: f64,
    axles: u32,
}

impl Truck {
    pub fn new(capacity_tons: f64, axles: u32) -> Self {
        Self {
            capacity_tons,
            axles,
        }
    }
}

impl Vehicle for Truck {
    fn drive(&self) -> String {
        format!(
            "Driving truck with capacity {} tons and {} axles.",
            self.capacity_tons, self.axles
        )
    }

    fn refuel(&self) -> String {
        format!(
            "Refueling diesel truck ({} tons, {} axles).",
            self.capacity_tons, self.axles
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_capacity_renders_without_decimal_point() {
        let truck = Truck::new(12.0, 4);
        assert_eq!(
            truck.drive(),
            "Driving truck with capacity 12 tons and 4 axles."
        );
        assert_eq!(truck.refuel(), "Refueling diesel truck (12 tons, 4 axles).");
    }

    #[test]
    fn fractional_capacity_keeps_its_precision() {
        let truck = Truck::new(7.5, 3);
        assert_eq!(
            truck.drive(),
            "Driving truck with capacity 7.5 tons and 3 axles."
        );
    }
}
