//! One factory per vehicle variant, behind a shared creation capability.
//!
//! Each factory is constructed with exactly the parameters its variant
//! needs and stamps out an independent, equivalently configured vehicle on
//! every call. Callers depend only on [`VehicleFactory`] and
//! [`Vehicle`](crate::vehicles::Vehicle), never on concrete constructors.

use crate::vehicles::{Bus, Car, Motorcycle, Scooter, Truck, Vehicle};

/// Factory Method capability: binds one variant's constructor behind a
/// uniform, argument-free creation call.
pub trait VehicleFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle>;
}

pub struct CarFactory {
    brand: String,
    model: String,
    fuel_type: String,
}

impl CarFactory {
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

impl VehicleFactory for CarFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Car::new(
            self.brand.clone(),
            self.model.clone(),
            self.fuel_type.clone(),
        ))
    }
}

pub struct MotorcycleFactory {
    kind: String,
    engine_capacity: u32,
}

impl MotorcycleFactory {
    pub fn new(kind: impl Into<String>, engine_capacity: u32) -> Self {
        Self {
            kind: kind.into(),
            engine_capacity,
        }
    }
}

impl VehicleFactory for MotorcycleFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Motorcycle::new(self.kind.clone(), self.engine_capacity))
    }
}

pub struct TruckFactory {
    capacity_tons: f64,
    axles: u32,
}

impl TruckFactory {
    pub fn new(capacity_tons: f64, axles: u32) -> Self {
        Self {
            capacity_tons,
            axles,
        }
    }
}

impl VehicleFactory for TruckFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Truck::new(self.capacity_tons, self.axles))
    }
}

pub struct BusFactory {
    passenger_capacity: u32,
    route: String,
}

impl BusFactory {
    pub fn new(passenger_capacity: u32, route: impl Into<String>) -> Self {
        Self {
            passenger_capacity,
            route: route.into(),
        }
    }
}

impl VehicleFactory for BusFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Bus::new(self.passenger_capacity, self.route.clone()))
    }
}

pub struct ScooterFactory {
    kind: String,
    is_electric: bool,
}

impl ScooterFactory {
    pub fn new(kind: impl Into<String>, is_electric: bool) -> Self {
        Self {
            kind: kind.into(),
            is_electric,
        }
    }
}

impl VehicleFactory for ScooterFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Scooter::new(self.kind.clone(), self.is_electric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_factory_builds_its_own_variant() {
        let cases: Vec<(Box<dyn VehicleFactory>, &str)> = vec![
            (
                Box::new(CarFactory::new("Toyota", "Camry", "Petrol")),
                "Driving car Toyota Camry with Petrol.",
            ),
            (
                Box::new(MotorcycleFactory::new("Sport", 600)),
                "Riding Sport motorcycle with 600cc engine.",
            ),
            (
                Box::new(TruckFactory::new(12.0, 4)),
                "Driving truck with capacity 12 tons and 4 axles.",
            ),
            (
                Box::new(BusFactory::new(50, "Route A1")),
                "Bus with 50 seats is driving on route Route A1.",
            ),
            (
                Box::new(ScooterFactory::new("City", true)),
                "Scooter (City) is moving with electric motor.",
            ),
        ];

        for (factory, expected_drive) in cases {
            assert_eq!(factory.create_vehicle().drive(), expected_drive);
        }
    }

    #[test]
    fn repeated_creation_yields_equivalent_vehicles() {
        let factory = BusFactory::new(50, "Route A1");
        let first = factory.create_vehicle();
        let second = factory.create_vehicle();
        assert_eq!(first.drive(), second.drive());
        assert_eq!(first.refuel(), second.refuel());
    }

    #[test]
    fn vehicles_from_different_factories_stay_independent() {
        let petrol = CarFactory::new("Toyota", "Camry", "Petrol");
        let diesel = CarFactory::new("Volvo", "XC90", "Diesel");
        let a = petrol.create_vehicle();
        let b = diesel.create_vehicle();
        // Re-invoking one vehicle's operations never disturbs the other.
        let before = b.drive();
        a.drive();
        a.refuel();
        assert_eq!(b.drive(), before);
    }
}
