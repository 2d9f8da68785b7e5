//! Showcase driver that exercises each factory/vehicle pair in sequence.

use std::io;

use tracing::{debug, info};

use crate::factories::{
    BusFactory, CarFactory, MotorcycleFactory, ScooterFactory, TruckFactory, VehicleFactory,
};

/// Roster of factories the demo walks through, in order.
pub struct DemoConfig {
    pub factories: Vec<Box<dyn VehicleFactory>>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            factories: vec![
                Box::new(CarFactory::new("Toyota", "Camry", "Petrol")),
                Box::new(MotorcycleFactory::new("Sport", 600)),
                Box::new(TruckFactory::new(12.0, 4)),
                Box::new(BusFactory::new(50, "Route A1")),
                Box::new(ScooterFactory::new("City", true)),
            ],
        }
    }
}

/// Runs the demo with the default roster, writing the transcript to `out`.
pub fn run(out: &mut impl io::Write) -> io::Result<()> {
    run_with(&DemoConfig::default(), out)
}

/// Walks the roster: banner first, then drive and refuel lines per
/// vehicle, with a blank line between consecutive vehicles.
pub fn run_with(config: &DemoConfig, out: &mut impl io::Write) -> io::Result<()> {
    info!("Showcasing {} vehicle factories", config.factories.len());

    writeln!(out, "=== Vehicle Factory Demo ===")?;
    for (index, factory) in config.factories.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        let vehicle = factory.create_vehicle();
        debug!("Exercising factory {} of {}", index + 1, config.factories.len());
        writeln!(out, "{}", vehicle.drive())?;
        writeln!(out, "{}", vehicle.refuel())?;
    }
    Ok(())
}
