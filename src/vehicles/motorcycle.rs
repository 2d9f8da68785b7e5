//! Motorcycle variant.

use super::Vehicle;

/// A motorcycle classified by kind (Sport, Cruiser, ...) and displacement.
#[derive(Clone, Debug)]
pub struct Motorcycle {
    kind: String,
    engine_capacity: u32,
}

impl Motorcycle {
    pub fn new(kind: impl Into<String>, engine_capacity: u32) -> Self {
        Self {
            kind: kind.into(),
            engine_capacity,
        }
    }
}

impl Vehicle for Motorcycle {
    fn drive(&self) -> String {
        format!(
            "Riding {} motorcycle with {}cc engine.",
            self.kind, self.engine_capacity
        )
    }

    fn refuel(&self) -> String {
        format!(
            "Refueling motorcycle ({}, {}cc).",
            self.kind, self.engine_capacity
        )
    }
}
