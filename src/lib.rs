//! Merisio core: MERISE conceptual data modeling.
//!
//! The pipeline runs in three read-only stages over a [`model::Project`]:
//! [`validator`] reports structural issues, [`mld`] derives the logical
//! relational schema, and [`sql`] renders it as DDL. No stage mutates
//! the project; transforming the same project twice yields identical
//! output.

pub mod io;
pub mod mld;
pub mod model;
pub mod report;
pub mod sql;
pub mod validator;

use mld::LogicalSchema;
use model::Project;

/// Derive the logical schema and render it as SQL DDL in one call.
pub fn project_to_sql(project: &Project) -> String {
    sql::generate(project)
}

/// Derive the logical schema from the project.
pub fn project_to_mld(project: &Project) -> LogicalSchema {
    LogicalSchema::from_project(project)
}
