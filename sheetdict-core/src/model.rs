//! Table and field entries extracted from the dictionary sheets

use crate::config::{DictConfig, EntitySheetConfig, FieldSheetConfig};
use crate::error::Result;
use crate::reader::{DictWorkbook, SheetTable};
use std::path::Path;

/// A declared table (entity) from the entity list sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub display_name: String,
    pub schema_name: String,
}

/// A field from the metadata sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
    pub owner_entity_logical_name: String,
    pub schema_name: String,
    pub display_name: String,
}

/// Both logical tables of a metadata dictionary workbook
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    pub tables: Vec<TableEntry>,
    pub fields: Vec<FieldEntry>,
}

impl Dictionary {
    /// Load tables and fields from a workbook
    pub fn load<P: AsRef<Path>>(path: P, config: &DictConfig) -> Result<Self> {
        let mut workbook = DictWorkbook::open(path)?;
        let tables = read_tables(&mut workbook, &config.entities)?;
        let fields = read_fields(&mut workbook, &config.fields)?;
        Ok(Self { tables, fields })
    }
}

/// Read only the entity list from a workbook
pub fn load_tables<P: AsRef<Path>>(path: P, config: &DictConfig) -> Result<Vec<TableEntry>> {
    let mut workbook = DictWorkbook::open(path)?;
    read_tables(&mut workbook, &config.entities)
}

fn read_tables(
    workbook: &mut DictWorkbook,
    config: &EntitySheetConfig,
) -> Result<Vec<TableEntry>> {
    let sheet = workbook.sheet_at(config.sheet_index, config.header_row)?;
    tables_from_sheet(&sheet, config)
}

fn read_fields(
    workbook: &mut DictWorkbook,
    config: &FieldSheetConfig,
) -> Result<Vec<FieldEntry>> {
    let sheet = workbook.sheet_named(&config.sheet, config.header_row)?;
    fields_from_sheet(&sheet, config)
}

/// Extract table entries, dropping rows where either column is missing
pub fn tables_from_sheet(
    sheet: &SheetTable,
    config: &EntitySheetConfig,
) -> Result<Vec<TableEntry>> {
    let display = sheet.require_column(&config.display_column)?;
    let schema = sheet.require_column(&config.schema_column)?;

    let tables: Vec<TableEntry> = complete_rows(sheet, &[display, schema])
        .map(|values| {
            let [display_name, schema_name] = values;
            TableEntry {
                display_name,
                schema_name,
            }
        })
        .collect();

    log_dropped(sheet, tables.len());
    Ok(tables)
}

/// Extract field entries, dropping rows with any missing value in the three columns
pub fn fields_from_sheet(
    sheet: &SheetTable,
    config: &FieldSheetConfig,
) -> Result<Vec<FieldEntry>> {
    let owner = sheet.require_column(&config.owner_column)?;
    let schema = sheet.require_column(&config.schema_column)?;
    let display = sheet.require_column(&config.display_column)?;

    let fields: Vec<FieldEntry> = complete_rows(sheet, &[owner, schema, display])
        .map(|values| {
            let [owner_entity_logical_name, schema_name, display_name] = values;
            FieldEntry {
                owner_entity_logical_name,
                schema_name,
                display_name,
            }
        })
        .collect();

    log_dropped(sheet, fields.len());
    Ok(fields)
}

/// Rows whose selected columns all hold a value, rendered as text
fn complete_rows<'a, const N: usize>(
    sheet: &'a SheetTable,
    columns: &'a [usize; N],
) -> impl Iterator<Item = [String; N]> + 'a {
    (0..sheet.len()).filter_map(move |row| {
        if columns.iter().any(|&col| sheet.cell(row, col).is_missing()) {
            return None;
        }
        Some(columns.map(|col| sheet.cell(row, col).to_string()))
    })
}

fn log_dropped(sheet: &SheetTable, kept: usize) {
    let dropped = sheet.len() - kept;
    if dropped > 0 {
        tracing::debug!(
            "Sheet '{}': dropped {} of {} rows with missing values",
            sheet.name,
            dropped,
            sheet.len()
        );
    } else {
        tracing::debug!("Sheet '{}': loaded {} rows", sheet.name, kept);
    }
}
