//! DDL rendering of the logical schema.

use std::fmt::Write;

use crate::mld::{Column, LogicalSchema, Table};
use crate::model::Project;

/// Renders a logical schema as SQL `CREATE TABLE` statements.
///
/// One statement per table in schema order, statements separated by a
/// blank line, trailing newline at the end. Identifiers are emitted
/// verbatim; the model is expected to hold valid ones.
#[derive(Debug, Default)]
pub struct SqlRenderer;

impl SqlRenderer {
    pub fn render(&self, schema: &LogicalSchema) -> String {
        let mut sql = String::new();
        for (i, table) in schema.tables.iter().enumerate() {
            if i > 0 {
                sql.push('\n');
            }
            self.render_table(&mut sql, table);
        }
        sql
    }

    fn render_table(&self, sql: &mut String, table: &Table) {
        writeln!(sql, "CREATE TABLE {} (", table.name).unwrap();

        let mut lines: Vec<String> = table.columns.iter().map(column_line).collect();

        let pk_columns: Vec<&str> = table
            .columns
            .iter()
            .filter(|c| c.is_primary_key)
            .map(|c| c.name.as_str())
            .collect();
        if !pk_columns.is_empty() {
            lines.push(format!("PRIMARY KEY ({})", pk_columns.join(", ")));
        }

        for col in table.columns.iter().filter(|c| c.is_foreign_key) {
            if let Some(target) = &col.references {
                lines.push(format!(
                    "FOREIGN KEY ({}) REFERENCES {}({})",
                    col.name, target.table, target.column
                ));
            }
        }

        for (i, line) in lines.iter().enumerate() {
            let comma = if i + 1 < lines.len() { "," } else { "" };
            writeln!(sql, "    {}{}", line, comma).unwrap();
        }
        sql.push_str(");\n");
    }
}

fn column_line(col: &Column) -> String {
    let mut line = format!("{} {}", col.name, column_sql_type(col));
    if !col.is_nullable {
        line.push_str(" NOT NULL");
    }
    line
}

/// Type spelling for a column: sized types take a `(size)` suffix when a
/// size is present, every other type never does.
fn column_sql_type(col: &Column) -> String {
    match col.size {
        Some(size) if col.data_type.takes_size() => format!("{}({})", col.data_type, size),
        _ => col.data_type.to_string(),
    }
}

/// Derive the logical schema from the project and render it as DDL.
pub fn generate(project: &Project) -> String {
    let schema = LogicalSchema::from_project(project);
    log::debug!("rendering {} table(s)", schema.tables.len());
    SqlRenderer.render(&schema)
}
