use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attribute::Attribute;

/// A conceptual entity (strong type) of the MCD.
///
/// Owns its attributes in insertion order. A well-formed entity has
/// exactly one primary-key attribute; the validator reports violations
/// but the rest of the pipeline tolerates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attributes(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            attributes,
        }
    }

    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Remove the attribute with the given name. Returns true if one was removed.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|a| a.name != name);
        self.attributes.len() != before
    }

    /// First attribute flagged as primary key, if any.
    pub fn primary_key(&self) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.is_primary_key)
    }
}
