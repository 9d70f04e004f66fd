use serde::{Deserialize, Serialize};

use super::attribute::Attribute;

/// Project-wide registry of attribute definitions.
///
/// Enforces name uniqueness across the project. The transformer does not
/// depend on it; editing collaborators use it to offer a single shared
/// vocabulary of attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    attributes: Vec<Attribute>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an attribute. Rejects duplicates by name.
    pub fn add(&mut self, attribute: Attribute) -> bool {
        if self.get(&attribute.name).is_some() {
            return false;
        }
        self.attributes.push(attribute);
        true
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Replace the attribute registered under `name`, possibly re-keying it.
    /// Fails when `name` is unknown or the new name collides with another entry.
    pub fn update(&mut self, name: &str, attribute: Attribute) -> bool {
        let Some(pos) = self.attributes.iter().position(|a| a.name == name) else {
            return false;
        };
        if attribute.name != name && self.get(&attribute.name).is_some() {
            return false;
        }
        self.attributes[pos] = attribute;
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|a| a.name != name);
        self.attributes.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
