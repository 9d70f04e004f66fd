use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum cardinality of an entity's participation in an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardinalityMin {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
}

/// Maximum cardinality of an entity's participation in an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardinalityMax {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "N")]
    Many,
}

impl std::fmt::Display for CardinalityMin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CardinalityMin::Zero => "0",
            CardinalityMin::One => "1",
        })
    }
}

impl std::fmt::Display for CardinalityMax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CardinalityMax::One => "1",
            CardinalityMax::Many => "N",
        })
    }
}

/// A cardinality-qualified connection between one entity and one association.
///
/// Owned by the project; the entity and association are referenced by id
/// only and resolved through project lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: Uuid,
    pub entity_id: Uuid,
    pub association_id: Uuid,
    pub cardinality_min: CardinalityMin,
    pub cardinality_max: CardinalityMax,
}

impl Link {
    pub fn new(
        entity_id: Uuid,
        association_id: Uuid,
        cardinality_min: CardinalityMin,
        cardinality_max: CardinalityMax,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_id,
            association_id,
            cardinality_min,
            cardinality_max,
        }
    }

    /// Display form, e.g. `1,N`.
    pub fn cardinality(&self) -> String {
        format!("{},{}", self.cardinality_min, self.cardinality_max)
    }

    /// The entity participates at least once.
    pub fn is_mandatory(&self) -> bool {
        self.cardinality_min == CardinalityMin::One
    }

    /// The entity may participate more than once.
    pub fn is_multiple(&self) -> bool {
        self.cardinality_max == CardinalityMax::Many
    }
}
