//! Scooter variant, electric or fuel-driven.

use super::Vehicle;

/// A scooter classified by kind and drivetrain.
///
/// The drivetrain flag picks both the motion description and whether
/// refueling reads as charging or as filling a tank.
#[derive(Clone, Debug)]
pub struct Scooter {
    kind: String,
    is_electric: bool,
}

impl Scooter {
    pub fn new(kind: impl Into<String>, is_electric: bool) -> Self {
        Self {
            kind: kind.into(),
            is_electric,
        }
    }
}

impl Vehicle for Scooter {
    fn drive(&self) -> String {
        let engine = if self.is_electric {
            "electric motor"
        } else {
            "fuel engine"
        };
        format!("Scooter ({}) is moving with {}.", self.kind, engine)
    }

    fn refuel(&self) -> String {
        if self.is_electric {
            format!("Charging electric scooter ({}).", self.kind)
        } else {
            format!("Refueling fuel scooter ({}).", self.kind)
        }
    }
}
