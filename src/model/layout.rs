use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Diagram position of an entity or association.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Presentation state of the diagram, kept apart from the domain model.
///
/// Positions are keyed by item id so the transformation pipeline never
/// sees them. Ids with no recorded position default to the origin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagramLayout {
    positions: BTreeMap<Uuid, Position>,
}

impl DiagramLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: Uuid, position: Position) {
        self.positions.insert(id, position);
    }

    pub fn get(&self, id: Uuid) -> Position {
        self.positions.get(&id).copied().unwrap_or_default()
    }

    pub fn remove(&mut self, id: Uuid) {
        self.positions.remove(&id);
    }
}
