use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::association::Association;
use super::dictionary::Dictionary;
use super::entity::Entity;
use super::layout::DiagramLayout;
use super::link::Link;

/// Diagram color settings, persisted per project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub entity_fill: String,
    pub entity_border: String,
    pub association_fill: String,
    pub association_border: String,
    pub link: String,
    pub selection: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            entity_fill: "#E3F2FD".to_string(),
            entity_border: "#1976D2".to_string(),
            association_fill: "#FFF3E0".to_string(),
            association_border: "#F57C00".to_string(),
            link: "#000000".to_string(),
            selection: "#FF5722".to_string(),
        }
    }
}

/// Aggregate root owning the whole MCD: dictionary, entities,
/// associations, links, plus project metadata and presentation layout.
///
/// All structural edits go through the add/remove methods, which maintain
/// referential integrity: removing an entity or association also removes
/// every link that references it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    #[serde(default)]
    pub colors: ColorScheme,
    #[serde(default)]
    pub dictionary: Dictionary,
    #[serde(default)]
    entities: Vec<Entity>,
    #[serde(default)]
    associations: Vec<Association>,
    #[serde(default)]
    links: Vec<Link>,
    #[serde(default)]
    pub layout: DiagramLayout,
    #[serde(skip)]
    pub modified: bool,
    #[serde(skip)]
    pub file_path: Option<PathBuf>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            author: String::new(),
            description: String::new(),
            created_at: now,
            modified_at: now,
            colors: ColorScheme::default(),
            dictionary: Dictionary::new(),
            entities: Vec::new(),
            associations: Vec::new(),
            links: Vec::new(),
            layout: DiagramLayout::new(),
            modified: false,
            file_path: None,
        }
    }

    fn touch(&mut self) {
        self.modified = true;
        self.modified_at = Utc::now();
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn associations(&self) -> &[Association] {
        &self.associations
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn entity(&self, id: Uuid) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn entity_mut(&mut self, id: Uuid) -> Option<&mut Entity> {
        self.touch();
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn association(&self, id: Uuid) -> Option<&Association> {
        self.associations.iter().find(|a| a.id == id)
    }

    pub fn association_mut(&mut self, id: Uuid) -> Option<&mut Association> {
        self.touch();
        self.associations.iter_mut().find(|a| a.id == id)
    }

    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
        self.touch();
    }

    /// Remove an entity and every link referencing it.
    pub fn remove_entity(&mut self, id: Uuid) -> bool {
        let before = self.entities.len();
        self.entities.retain(|e| e.id != id);
        if self.entities.len() == before {
            return false;
        }
        self.links.retain(|l| l.entity_id != id);
        self.layout.remove(id);
        self.touch();
        true
    }

    pub fn add_association(&mut self, association: Association) {
        self.associations.push(association);
        self.touch();
    }

    /// Remove an association and every link referencing it.
    pub fn remove_association(&mut self, id: Uuid) -> bool {
        let before = self.associations.len();
        self.associations.retain(|a| a.id != id);
        if self.associations.len() == before {
            return false;
        }
        self.links.retain(|l| l.association_id != id);
        self.layout.remove(id);
        self.touch();
        true
    }

    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
        self.touch();
    }

    pub fn remove_link(&mut self, id: Uuid) -> bool {
        let before = self.links.len();
        self.links.retain(|l| l.id != id);
        if self.links.len() == before {
            return false;
        }
        self.touch();
        true
    }

    /// Links referencing the given entity, in insertion order.
    pub fn links_for_entity(&self, entity_id: Uuid) -> Vec<&Link> {
        self.links.iter().filter(|l| l.entity_id == entity_id).collect()
    }

    /// Links referencing the given association, in insertion order.
    pub fn links_for_association(&self, association_id: Uuid) -> Vec<&Link> {
        self.links
            .iter()
            .filter(|l| l.association_id == association_id)
            .collect()
    }
}
