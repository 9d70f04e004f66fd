//! In-memory MCD graph: entities, associations, links, dictionary,
//! and the project aggregate that owns them.

mod association;
mod attribute;
mod dictionary;
mod entity;
mod layout;
mod link;
mod project;

pub use association::Association;
pub use attribute::{Attribute, DataType};
pub use dictionary::Dictionary;
pub use entity::Entity;
pub use layout::{DiagramLayout, Position};
pub use link::{CardinalityMax, CardinalityMin, Link};
pub use project::{ColorScheme, Project};
