//! Plain-text listing of the logical schema, for terminal display.

use std::fmt::Write;

use crate::mld::LogicalSchema;

/// Render the schema as an indented table listing:
/// one header line per table, one line per column with its flags.
pub fn render(schema: &LogicalSchema) -> String {
    let mut out = String::new();

    for table in &schema.tables {
        writeln!(&mut out, "{} ({})", table.name, table.source).unwrap();

        for col in &table.columns {
            let mut flags: Vec<String> = Vec::new();
            if col.is_primary_key {
                flags.push("PK".to_string());
            }
            if let Some(target) = col.references.as_ref().filter(|_| col.is_foreign_key) {
                flags.push(format!("FK -> {}.{}", target.table, target.column));
            }
            if !col.is_nullable {
                flags.push("NOT NULL".to_string());
            }

            let flag_str = if flags.is_empty() {
                String::new()
            } else {
                format!("  [{}]", flags.join(", "))
            };
            writeln!(&mut out, "  {} {}{}", col.name, col.data_type, flag_str).unwrap();
        }

        out.push('\n');
    }

    out
}
