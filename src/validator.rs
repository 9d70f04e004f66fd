//! Structural validation of the MCD graph.
//!
//! Validation never blocks the pipeline: issues come back as plain
//! strings for display, and the transformer runs regardless.

use crate::model::Project;

/// Check the project for structural issues, in a fixed order:
/// empty dictionary, entities without a primary key, associations
/// connected to fewer than two entities, entities with no link at all.
/// An empty result means the model is valid.
pub fn validate(project: &Project) -> Vec<String> {
    let mut issues = Vec::new();

    if project.dictionary.is_empty() {
        issues.push("Dictionary is empty. Add attributes first.".to_string());
    }

    for entity in project.entities() {
        if entity.primary_key().is_none() {
            issues.push(format!(
                "Entity '{}' has no primary key attribute.",
                entity.name
            ));
        }
    }

    for assoc in project.associations() {
        if project.links_for_association(assoc.id).len() < 2 {
            issues.push(format!(
                "Association '{}' must be connected to at least 2 entities.",
                assoc.name
            ));
        }
    }

    for entity in project.entities() {
        if project.links_for_entity(entity.id).is_empty() {
            issues.push(format!(
                "Entity '{}' is not connected to any association.",
                entity.name
            ));
        }
    }

    issues
}

/// Item counts for the current model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub attributes: usize,
    pub entities: usize,
    pub associations: usize,
    pub links: usize,
}

pub fn statistics(project: &Project) -> Statistics {
    Statistics {
        attributes: project.dictionary.len(),
        entities: project.entities().len(),
        associations: project.associations().len(),
        links: project.links().len(),
    }
}
