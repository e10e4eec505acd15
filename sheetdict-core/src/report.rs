//! Fixed-width text reports

use crate::config::ReportConfig;
use crate::join::TableFields;
use crate::model::TableEntry;
use std::io::{self, Write};

const FIELDS_RULE_WIDTH: usize = 100;
const FIELD_DISPLAY_WIDTH: usize = 50;
const FIELD_SCHEMA_WIDTH: usize = 45;

const TABLES_RULE_WIDTH: usize = 80;
const TABLE_DISPLAY_WIDTH: usize = 35;
const TABLE_SCHEMA_WIDTH: usize = 40;

/// Format a value into a column of `width` characters.
///
/// Short values are padded on the right. Long values overflow unless
/// `truncate` is set, in which case they are cut at the column width.
fn column(value: &str, width: usize, truncate: bool) -> String {
    if truncate && value.chars().count() > width {
        value.chars().take(width).collect()
    } else {
        format!("{:<width$}", value, width = width)
    }
}

/// Render the table/field join report
pub fn render_fields_report<W: Write>(
    out: &mut W,
    joined: &[TableFields<'_>],
    config: &ReportConfig,
) -> io::Result<()> {
    let heavy = "=".repeat(FIELDS_RULE_WIDTH);
    let light = "-".repeat(FIELDS_RULE_WIDTH);
    let cell = |value: &str, width| column(value, width, config.truncate);

    writeln!(out, "{}", heavy)?;
    writeln!(out, "POWER BI TABLES AND FIELDS")?;
    writeln!(out, "{}", heavy)?;

    for entry in joined {
        let table = entry.table;
        if entry.has_fields() {
            writeln!(out, "\n\n{}", heavy)?;
            writeln!(
                out,
                "TABLE: {} (Schema: {})",
                table.display_name, table.schema_name
            )?;
            writeln!(out, "{}", heavy)?;
            writeln!(
                out,
                "{} {}",
                cell("Field Display Name", FIELD_DISPLAY_WIDTH),
                cell("Field Schema Name", FIELD_SCHEMA_WIDTH)
            )?;
            writeln!(out, "{}", light)?;

            for field in &entry.fields {
                writeln!(
                    out,
                    "{} {}",
                    cell(&field.display_name, FIELD_DISPLAY_WIDTH),
                    cell(&field.schema_name, FIELD_SCHEMA_WIDTH)
                )?;
            }

            writeln!(out, "\nTotal Fields: {}", entry.fields.len())?;
        } else {
            writeln!(
                out,
                "\n\nTABLE: {} (Schema: {}) - No fields found",
                table.display_name, table.schema_name
            )?;
        }
    }

    writeln!(out, "\n\n{}", heavy)?;
    writeln!(out, "EXTRACTION COMPLETE")?;
    writeln!(out, "{}", heavy)?;
    Ok(())
}

/// Render the table list report (no field detail)
pub fn render_tables_report<W: Write>(
    out: &mut W,
    tables: &[TableEntry],
    config: &ReportConfig,
) -> io::Result<()> {
    let heavy = "=".repeat(TABLES_RULE_WIDTH);
    let cell = |value: &str, width| column(value, width, config.truncate);

    writeln!(out, "Power BI Tables List:")?;
    writeln!(out, "{}", heavy)?;
    writeln!(
        out,
        "\n{} {}",
        cell("Display Name", TABLE_DISPLAY_WIDTH),
        cell("Schema Name", TABLE_SCHEMA_WIDTH)
    )?;
    writeln!(out, "{}", "-".repeat(TABLES_RULE_WIDTH))?;

    for table in tables {
        writeln!(
            out,
            "{} {}",
            cell(&table.display_name, TABLE_DISPLAY_WIDTH),
            cell(&table.schema_name, TABLE_SCHEMA_WIDTH)
        )?;
    }

    writeln!(out, "\n{}", heavy)?;
    writeln!(out, "Total Tables: {}", tables.len())?;
    Ok(())
}
