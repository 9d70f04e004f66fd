//! MCD to MLD transformation.
//!
//! Derives the logical relational schema from the conceptual graph:
//! one table per entity, then each association resolved according to its
//! cardinality profile (one-to-one collapse, one-to-many foreign key,
//! many-to-many junction table). The transform is a pure function of the
//! project: re-running it on an unchanged project yields identical tables.
//!
//! Malformed input never fails the transform. Associations with fewer
//! than two links are skipped, an entity without a primary key is
//! referenced through its first attribute, and an entity with no
//! attributes at all simply contributes no foreign key. The validator is
//! responsible for reporting those situations.

use crate::model::{Association, Attribute, DataType, Entity, Link, Project};

/// Target of a foreign-key column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
    pub size: Option<u32>,
    pub is_primary_key: bool,
    pub is_nullable: bool,
    pub is_foreign_key: bool,
    pub references: Option<ColumnRef>,
}

/// Origin of a table in the logical schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource {
    Entity,
    Junction,
}

impl std::fmt::Display for TableSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TableSource::Entity => "entity",
            TableSource::Junction => "junction",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub source: TableSource,
}

/// The derived relational schema (MLD): an ordered list of tables.
///
/// Entity tables come first, in entity insertion order; junction tables
/// follow, in the order of the association that produced them. Within a
/// table, primary-key columns precede foreign-key columns, which precede
/// the remaining columns, source order preserved within each group.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalSchema {
    pub tables: Vec<Table>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Profile {
    OneToOne,
    OneToMany,
    ManyToMany,
    Degenerate,
}

fn classify(links: &[&Link]) -> Profile {
    match links {
        [] | [_] => Profile::Degenerate,
        [a, b] => {
            if !a.is_multiple() && !b.is_multiple() {
                Profile::OneToOne
            } else if a.is_multiple() != b.is_multiple() {
                Profile::OneToMany
            } else {
                Profile::ManyToMany
            }
        }
        _ => Profile::ManyToMany,
    }
}

impl LogicalSchema {
    /// Transform the project's conceptual model into relational tables.
    pub fn from_project(project: &Project) -> Self {
        let mut tables: Vec<Table> = project.entities().iter().map(entity_table).collect();
        let mut junctions: Vec<Table> = Vec::new();

        for assoc in project.associations() {
            let links = project.links_for_association(assoc.id);
            match classify(&links) {
                Profile::Degenerate => {
                    log::debug!(
                        "association '{}' has {} link(s), skipping",
                        assoc.name,
                        links.len()
                    );
                }
                Profile::OneToOne => collapse_one_to_one(project, assoc, &links, &mut tables),
                Profile::OneToMany => resolve_one_to_many(project, assoc, &links, &mut tables),
                Profile::ManyToMany => {
                    if let Some(table) = junction_table(project, assoc, &links) {
                        junctions.push(table);
                    }
                }
            }
        }

        tables.extend(junctions);
        for table in &mut tables {
            order_columns(&mut table.columns);
        }
        LogicalSchema { tables }
    }
}

fn entity_table(entity: &Entity) -> Table {
    let columns = entity
        .attributes
        .iter()
        .map(|a| Column {
            name: a.name.clone(),
            data_type: a.data_type,
            size: a.size,
            is_primary_key: a.is_primary_key,
            is_nullable: !a.is_primary_key,
            is_foreign_key: false,
            references: None,
        })
        .collect();
    Table {
        name: entity.name.clone(),
        columns,
        source: TableSource::Entity,
    }
}

/// The column a foreign key should reference: the primary key, or the
/// first attribute when no primary key is flagged. None when the entity
/// has no attributes at all.
fn reference_attribute(entity: &Entity) -> Option<&Attribute> {
    entity.primary_key().or_else(|| entity.attributes.first())
}

fn foreign_key_name(entity: &Entity) -> String {
    format!("{}_id", entity.name.to_lowercase())
}

fn foreign_key_column(entity: &Entity, nullable: bool, part_of_pk: bool) -> Option<Column> {
    let target = reference_attribute(entity)?;
    Some(Column {
        name: foreign_key_name(entity),
        data_type: target.data_type,
        size: target.size,
        is_primary_key: part_of_pk,
        is_nullable: nullable && !part_of_pk,
        is_foreign_key: true,
        references: Some(ColumnRef {
            table: entity.name.clone(),
            column: target.name.clone(),
        }),
    })
}

fn carrying_column(attr: &Attribute) -> Column {
    Column {
        name: attr.name.clone(),
        data_type: attr.data_type,
        size: attr.size,
        is_primary_key: false,
        is_nullable: true,
        is_foreign_key: false,
        references: None,
    }
}

/// Add the foreign key for a binary association onto the holder's table,
/// followed by the association's carrying attributes.
fn attach_foreign_key(
    project: &Project,
    assoc: &Association,
    holder: &Link,
    referenced: &Link,
    tables: &mut [Table],
) {
    let Some(idx) = project
        .entities()
        .iter()
        .position(|e| e.id == holder.entity_id)
    else {
        return;
    };

    if let Some(target) = project.entity(referenced.entity_id) {
        let nullable = !holder.is_mandatory();
        if let Some(column) = foreign_key_column(target, nullable, false) {
            tables[idx].columns.push(column);
        }
    }
    tables[idx]
        .columns
        .extend(assoc.attributes.iter().map(carrying_column));
}

/// One-to-one: collapse the association into a foreign key. The mandatory
/// side holds the key; when both sides are mandatory or both optional,
/// the entity of the second link holds it (stable order-based tie-break).
fn collapse_one_to_one(
    project: &Project,
    assoc: &Association,
    links: &[&Link],
    tables: &mut [Table],
) {
    let (holder, referenced) = match (links[0].is_mandatory(), links[1].is_mandatory()) {
        (true, false) => (links[0], links[1]),
        (false, true) => (links[1], links[0]),
        _ => (links[1], links[0]),
    };
    attach_foreign_key(project, assoc, holder, referenced, tables);
}

/// One-to-many: the many side's table receives the foreign key.
fn resolve_one_to_many(
    project: &Project,
    assoc: &Association,
    links: &[&Link],
    tables: &mut [Table],
) {
    let (many, one) = if links[0].is_multiple() {
        (links[0], links[1])
    } else {
        (links[1], links[0])
    };
    attach_foreign_key(project, assoc, many, one, tables);
}

/// Many-to-many: synthesize a junction table with one not-null foreign
/// key per referenced entity, all part of a composite primary key, plus
/// the association's carrying attributes.
///
/// The table is named after the association when it carries attributes,
/// otherwise by joining the referenced entity names with underscores in
/// link order.
fn junction_table(project: &Project, assoc: &Association, links: &[&Link]) -> Option<Table> {
    let referenced: Vec<&Entity> = links
        .iter()
        .filter_map(|l| project.entity(l.entity_id))
        .collect();

    let mut columns: Vec<Column> = referenced
        .iter()
        .filter_map(|e| foreign_key_column(e, false, true))
        .collect();
    columns.extend(assoc.attributes.iter().map(carrying_column));

    if columns.is_empty() {
        return None;
    }

    let name = if assoc.has_attributes() {
        assoc.name.clone()
    } else {
        referenced
            .iter()
            .map(|e| e.name.as_str())
            .collect::<Vec<_>>()
            .join("_")
    };
    if name.is_empty() {
        return None;
    }

    Some(Table {
        name,
        columns,
        source: TableSource::Junction,
    })
}

/// Presentation contract: primary-key columns, then foreign-key columns,
/// then the rest. The sort is stable, so source order is preserved
/// within each group.
fn order_columns(columns: &mut [Column]) {
    columns.sort_by_key(|c| match (c.is_primary_key, c.is_foreign_key) {
        (true, _) => 0u8,
        (false, true) => 1,
        (false, false) => 2,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CardinalityMax, CardinalityMin};
    use uuid::Uuid;

    fn entity(name: &str, pk: &str) -> Entity {
        Entity::with_attributes(
            name,
            vec![Attribute::new(pk, DataType::Int).primary_key()],
        )
    }

    fn link(entity_id: Uuid, assoc_id: Uuid, min: CardinalityMin, max: CardinalityMax) -> Link {
        Link::new(entity_id, assoc_id, min, max)
    }

    #[test]
    fn test_entity_tables_in_insertion_order() {
        let mut project = Project::new("test");
        project.add_entity(entity("Client", "id_client"));
        project.add_entity(entity("Produit", "id_produit"));

        let schema = LogicalSchema::from_project(&project);
        let names: Vec<&str> = schema.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Client", "Produit"]);
        assert!(schema.tables.iter().all(|t| t.source == TableSource::Entity));
    }

    #[test]
    fn test_entity_without_attributes_still_produces_table() {
        let mut project = Project::new("test");
        project.add_entity(Entity::new("Vide"));

        let schema = LogicalSchema::from_project(&project);
        assert_eq!(schema.tables.len(), 1);
        assert_eq!(schema.tables[0].name, "Vide");
        assert!(schema.tables[0].columns.is_empty());
    }

    #[test]
    fn test_primary_key_column_is_not_nullable() {
        let mut project = Project::new("test");
        let mut e = entity("Client", "id_client");
        e.add_attribute(Attribute::new("nom", DataType::Varchar).with_size(100));
        project.add_entity(e);

        let schema = LogicalSchema::from_project(&project);
        let cols = &schema.tables[0].columns;
        assert!(!cols[0].is_nullable);
        assert!(cols[0].is_primary_key);
        assert!(cols[1].is_nullable);
    }

    #[test]
    fn test_one_to_many_fk_lands_on_many_side() {
        // Client 1,N -- Passer -- Commande 1,1: each order belongs to one
        // client, so Commande holds the key.
        let mut project = Project::new("test");
        let client = entity("Client", "id_client");
        let commande = entity("Commande", "id_cmd");
        let (client_id, commande_id) = (client.id, commande.id);
        project.add_entity(client);
        project.add_entity(commande);

        let assoc = Association::new("Passer");
        let assoc_id = assoc.id;
        project.add_association(assoc);

        project.add_link(link(client_id, assoc_id, CardinalityMin::One, CardinalityMax::Many));
        project.add_link(link(commande_id, assoc_id, CardinalityMin::One, CardinalityMax::One));

        let schema = LogicalSchema::from_project(&project);
        assert_eq!(schema.tables.len(), 2);

        let client_table = &schema.tables[0];
        assert_eq!(client_table.columns.len(), 1);

        let commande_table = &schema.tables[1];
        assert_eq!(commande_table.columns.len(), 2);
        let fk = &commande_table.columns[1];
        assert_eq!(fk.name, "client_id");
        assert!(fk.is_foreign_key);
        assert!(!fk.is_nullable);
        assert_eq!(
            fk.references,
            Some(ColumnRef { table: "Client".to_string(), column: "id_client".to_string() })
        );
    }

    #[test]
    fn test_one_to_many_independent_of_link_order() {
        // Same model as above with the links inserted the other way round.
        let mut project = Project::new("test");
        let client = entity("Client", "id_client");
        let commande = entity("Commande", "id_cmd");
        let (client_id, commande_id) = (client.id, commande.id);
        project.add_entity(client);
        project.add_entity(commande);

        let assoc = Association::new("Passer");
        let assoc_id = assoc.id;
        project.add_association(assoc);

        project.add_link(link(commande_id, assoc_id, CardinalityMin::One, CardinalityMax::One));
        project.add_link(link(client_id, assoc_id, CardinalityMin::One, CardinalityMax::Many));

        let schema = LogicalSchema::from_project(&project);
        assert_eq!(schema.tables[0].columns.len(), 1);
        assert_eq!(schema.tables[1].columns[1].name, "client_id");
    }

    #[test]
    fn test_fk_nullability_follows_many_side_min() {
        let mut project = Project::new("test");
        let a = entity("A", "id_a");
        let b = entity("B", "id_b");
        let (a_id, b_id) = (a.id, b.id);
        project.add_entity(a);
        project.add_entity(b);

        let assoc = Association::new("R");
        let assoc_id = assoc.id;
        project.add_association(assoc);

        // B participates 0,N: the FK on B's table is nullable.
        project.add_link(link(a_id, assoc_id, CardinalityMin::One, CardinalityMax::One));
        project.add_link(link(b_id, assoc_id, CardinalityMin::Zero, CardinalityMax::Many));

        let schema = LogicalSchema::from_project(&project);
        let fk = &schema.tables[1].columns[1];
        assert_eq!(fk.name, "a_id");
        assert!(fk.is_nullable);
    }

    #[test]
    fn test_one_to_one_mandatory_side_holds_fk() {
        let mut project = Project::new("test");
        let a = entity("A", "id_a");
        let b = entity("B", "id_b");
        let (a_id, b_id) = (a.id, b.id);
        project.add_entity(a);
        project.add_entity(b);

        let assoc = Association::new("S");
        let assoc_id = assoc.id;
        project.add_association(assoc);

        project.add_link(link(a_id, assoc_id, CardinalityMin::One, CardinalityMax::One));
        project.add_link(link(b_id, assoc_id, CardinalityMin::Zero, CardinalityMax::One));

        let schema = LogicalSchema::from_project(&project);
        // A is the mandatory side, so A's table gains the key and B is unchanged.
        let a_table = &schema.tables[0];
        assert_eq!(a_table.columns.len(), 2);
        let fk = &a_table.columns[1];
        assert_eq!(fk.name, "b_id");
        assert!(!fk.is_nullable);

        let b_table = &schema.tables[1];
        assert_eq!(b_table.columns.len(), 1);
    }

    #[test]
    fn test_one_to_one_tie_break_uses_second_link() {
        let mut project = Project::new("test");
        let a = entity("A", "id_a");
        let b = entity("B", "id_b");
        let (a_id, b_id) = (a.id, b.id);
        project.add_entity(a);
        project.add_entity(b);

        let assoc = Association::new("S");
        let assoc_id = assoc.id;
        project.add_association(assoc);

        // Both optional: the entity of the second link holds the key.
        project.add_link(link(a_id, assoc_id, CardinalityMin::Zero, CardinalityMax::One));
        project.add_link(link(b_id, assoc_id, CardinalityMin::Zero, CardinalityMax::One));

        let schema = LogicalSchema::from_project(&project);
        assert_eq!(schema.tables[0].columns.len(), 1);
        let fk = &schema.tables[1].columns[1];
        assert_eq!(fk.name, "a_id");
        assert!(fk.is_nullable);
    }

    #[test]
    fn test_one_to_one_carrying_attributes_follow_fk() {
        let mut project = Project::new("test");
        let a = entity("A", "id_a");
        let b = entity("B", "id_b");
        let (a_id, b_id) = (a.id, b.id);
        project.add_entity(a);
        project.add_entity(b);

        let assoc = Association::with_attributes(
            "S",
            vec![Attribute::new("depuis", DataType::Date)],
        );
        let assoc_id = assoc.id;
        project.add_association(assoc);

        project.add_link(link(a_id, assoc_id, CardinalityMin::One, CardinalityMax::One));
        project.add_link(link(b_id, assoc_id, CardinalityMin::Zero, CardinalityMax::One));

        let schema = LogicalSchema::from_project(&project);
        let a_table = &schema.tables[0];
        assert_eq!(a_table.columns.len(), 3);
        assert_eq!(a_table.columns[2].name, "depuis");
        assert!(a_table.columns[2].is_nullable);
    }

    #[test]
    fn test_many_to_many_junction_with_composite_pk() {
        let mut project = Project::new("test");
        let a = entity("A", "id_a");
        let b = entity("B", "id_b");
        let (a_id, b_id) = (a.id, b.id);
        project.add_entity(a);
        project.add_entity(b);

        let assoc = Association::new("R");
        let assoc_id = assoc.id;
        project.add_association(assoc);

        project.add_link(link(a_id, assoc_id, CardinalityMin::Zero, CardinalityMax::Many));
        project.add_link(link(b_id, assoc_id, CardinalityMin::One, CardinalityMax::Many));

        let schema = LogicalSchema::from_project(&project);
        assert_eq!(schema.tables.len(), 3);

        let junction = &schema.tables[2];
        assert_eq!(junction.name, "A_B");
        assert_eq!(junction.source, TableSource::Junction);
        assert_eq!(junction.columns.len(), 2);

        for (col, table, pk) in [
            (&junction.columns[0], "A", "id_a"),
            (&junction.columns[1], "B", "id_b"),
        ] {
            assert!(col.is_primary_key);
            assert!(col.is_foreign_key);
            assert!(!col.is_nullable);
            assert_eq!(
                col.references,
                Some(ColumnRef { table: table.to_string(), column: pk.to_string() })
            );
        }
        assert_eq!(junction.columns[0].name, "a_id");
        assert_eq!(junction.columns[1].name, "b_id");
    }

    #[test]
    fn test_junction_named_after_association_when_carrying() {
        let mut project = Project::new("test");
        let cmd = entity("Commande", "id_cmd");
        let produit = entity("Produit", "id_produit");
        let (cmd_id, produit_id) = (cmd.id, produit.id);
        project.add_entity(cmd);
        project.add_entity(produit);

        let assoc = Association::with_attributes(
            "Contenir",
            vec![Attribute::new("quantite", DataType::Int)],
        );
        let assoc_id = assoc.id;
        project.add_association(assoc);

        project.add_link(link(cmd_id, assoc_id, CardinalityMin::One, CardinalityMax::Many));
        project.add_link(link(produit_id, assoc_id, CardinalityMin::Zero, CardinalityMax::Many));

        let schema = LogicalSchema::from_project(&project);
        let junction = &schema.tables[2];
        assert_eq!(junction.name, "Contenir");
        assert_eq!(junction.columns.len(), 3);
        // Composite key first, carrying attribute last.
        assert_eq!(junction.columns[0].name, "commande_id");
        assert_eq!(junction.columns[1].name, "produit_id");
        assert_eq!(junction.columns[2].name, "quantite");
        assert!(!junction.columns[2].is_primary_key);
        assert!(junction.columns[2].is_nullable);
    }

    #[test]
    fn test_ternary_association_yields_one_fk_per_entity() {
        let mut project = Project::new("test");
        let names = ["A", "B", "C"];
        let mut ids = Vec::new();
        for name in names {
            let e = entity(name, &format!("id_{}", name.to_lowercase()));
            ids.push(e.id);
            project.add_entity(e);
        }

        let assoc = Association::new("R");
        let assoc_id = assoc.id;
        project.add_association(assoc);
        for id in &ids {
            project.add_link(link(*id, assoc_id, CardinalityMin::One, CardinalityMax::Many));
        }

        let schema = LogicalSchema::from_project(&project);
        let junction = &schema.tables[3];
        assert_eq!(junction.name, "A_B_C");
        assert_eq!(junction.columns.len(), 3);
        assert!(junction.columns.iter().all(|c| c.is_primary_key && c.is_foreign_key));
    }

    #[test]
    fn test_under_linked_association_is_skipped() {
        let mut project = Project::new("test");
        let a = entity("A", "id_a");
        let a_id = a.id;
        project.add_entity(a);

        let assoc = Association::new("R");
        let assoc_id = assoc.id;
        project.add_association(assoc);
        project.add_link(link(a_id, assoc_id, CardinalityMin::One, CardinalityMax::Many));

        let schema = LogicalSchema::from_project(&project);
        assert_eq!(schema.tables.len(), 1);
        assert_eq!(schema.tables[0].columns.len(), 1);
    }

    #[test]
    fn test_missing_pk_falls_back_to_first_attribute() {
        let mut project = Project::new("test");
        let a = Entity::with_attributes(
            "A",
            vec![Attribute::new("code", DataType::Varchar).with_size(10)],
        );
        let b = entity("B", "id_b");
        let (a_id, b_id) = (a.id, b.id);
        project.add_entity(a);
        project.add_entity(b);

        let assoc = Association::new("R");
        let assoc_id = assoc.id;
        project.add_association(assoc);
        project.add_link(link(a_id, assoc_id, CardinalityMin::One, CardinalityMax::One));
        project.add_link(link(b_id, assoc_id, CardinalityMin::One, CardinalityMax::Many));

        let schema = LogicalSchema::from_project(&project);
        let fk = &schema.tables[1].columns[1];
        assert_eq!(fk.name, "a_id");
        assert_eq!(fk.data_type, DataType::Varchar);
        assert_eq!(fk.size, Some(10));
        assert_eq!(
            fk.references,
            Some(ColumnRef { table: "A".to_string(), column: "code".to_string() })
        );
    }

    #[test]
    fn test_attribute_less_entity_contributes_no_fk() {
        let mut project = Project::new("test");
        let a = Entity::new("A");
        let b = entity("B", "id_b");
        let (a_id, b_id) = (a.id, b.id);
        project.add_entity(a);
        project.add_entity(b);

        let assoc = Association::new("R");
        let assoc_id = assoc.id;
        project.add_association(assoc);
        project.add_link(link(a_id, assoc_id, CardinalityMin::One, CardinalityMax::One));
        project.add_link(link(b_id, assoc_id, CardinalityMin::One, CardinalityMax::Many));

        let schema = LogicalSchema::from_project(&project);
        // B is the many side but A has nothing to reference.
        assert_eq!(schema.tables[1].columns.len(), 1);
    }

    #[test]
    fn test_column_ordering_pk_fk_rest() {
        let mut project = Project::new("test");
        // Primary key deliberately declared last.
        let client = Entity::with_attributes(
            "Client",
            vec![
                Attribute::new("nom", DataType::Varchar).with_size(100),
                Attribute::new("email", DataType::Varchar).with_size(255),
                Attribute::new("id_client", DataType::Int).primary_key(),
            ],
        );
        let pays = entity("Pays", "id_pays");
        let (client_id, pays_id) = (client.id, pays.id);
        project.add_entity(client);
        project.add_entity(pays);

        let assoc = Association::new("Habiter");
        let assoc_id = assoc.id;
        project.add_association(assoc);
        project.add_link(link(client_id, assoc_id, CardinalityMin::One, CardinalityMax::Many));
        project.add_link(link(pays_id, assoc_id, CardinalityMin::One, CardinalityMax::One));

        let schema = LogicalSchema::from_project(&project);
        let names: Vec<&str> = schema.tables[0].columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id_client", "pays_id", "nom", "email"]);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let mut project = Project::new("test");
        let a = entity("A", "id_a");
        let b = entity("B", "id_b");
        let (a_id, b_id) = (a.id, b.id);
        project.add_entity(a);
        project.add_entity(b);

        let assoc = Association::with_attributes(
            "R",
            vec![Attribute::new("quantite", DataType::Int)],
        );
        let assoc_id = assoc.id;
        project.add_association(assoc);
        project.add_link(link(a_id, assoc_id, CardinalityMin::One, CardinalityMax::Many));
        project.add_link(link(b_id, assoc_id, CardinalityMin::Zero, CardinalityMax::Many));

        let first = LogicalSchema::from_project(&project);
        let second = LogicalSchema::from_project(&project);
        assert_eq!(first, second);
    }

    #[test]
    fn test_cascade_deletion_drops_junction() {
        let mut project = Project::new("test");
        let a = entity("A", "id_a");
        let b = entity("B", "id_b");
        let (a_id, b_id) = (a.id, b.id);
        project.add_entity(a);
        project.add_entity(b);

        let assoc = Association::new("R");
        let assoc_id = assoc.id;
        project.add_association(assoc);
        project.add_link(link(a_id, assoc_id, CardinalityMin::One, CardinalityMax::Many));
        project.add_link(link(b_id, assoc_id, CardinalityMin::One, CardinalityMax::Many));

        let before = LogicalSchema::from_project(&project);
        assert_eq!(before.tables.len(), 3);

        // Removing A cascades its link; the association degenerates and
        // the junction table disappears.
        project.remove_entity(a_id);
        let after = LogicalSchema::from_project(&project);
        assert_eq!(after.tables.len(), 1);
        assert_eq!(after.tables[0].name, "B");
        assert_eq!(after.tables[0].columns.len(), 1);
    }
}
