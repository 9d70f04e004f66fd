use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::attribute::Attribute;

/// An MCD association between entities.
///
/// May carry attributes describing the relationship instance itself.
/// Carrying attributes are never primary keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Association {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Association {
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

    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|a| a.name != name);
        self.attributes.len() != before
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }
}
