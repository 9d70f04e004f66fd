//! Project file persistence (`.merisio`, pretty-printed JSON).

use std::fs;
use std::path::Path;

use crate::model::Project;

pub const FILE_EXTENSION: &str = "merisio";

#[derive(Debug, thiserror::Error)]
pub enum ProjectFileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid project file: {0}")]
    Format(#[from] serde_json::Error),
}

/// Load a project from disk, recording the path it came from.
pub fn load_project(path: &Path) -> Result<Project, ProjectFileError> {
    let text = fs::read_to_string(path)?;
    let mut project: Project = serde_json::from_str(&text)?;
    project.file_path = Some(path.to_path_buf());
    log::info!(
        "loaded project '{}' from {}",
        project.name,
        path.display()
    );
    Ok(project)
}

/// Save a project to disk, clearing its dirty flag on success.
pub fn save_project(project: &mut Project, path: &Path) -> Result<(), ProjectFileError> {
    let text = serde_json::to_string_pretty(&*project)?;
    fs::write(path, text)?;
    project.file_path = Some(path.to_path_buf());
    project.modified = false;
    log::info!("saved project '{}' to {}", project.name, path.display());
    Ok(())
}
