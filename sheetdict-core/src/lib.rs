//! sheetdict-core: reports over metadata dictionary workbooks
//!
//! A dictionary workbook holds an entity list sheet (a title row, then the
//! real header row) and a per-field metadata sheet. This library finds the
//! workbook in a folder, loads both sheets, joins fields onto their tables by
//! schema name and renders fixed-width text reports.

pub mod config;
pub mod error;
pub mod join;
pub mod locate;
pub mod model;
pub mod reader;
pub mod report;

use std::io::Write;
use std::path::Path;

pub use config::DictConfig;
pub use error::{DictError, ReportError, Result};
pub use join::{TableFields, join_fields};
pub use locate::find_workbook;
pub use model::{Dictionary, FieldEntry, TableEntry, load_tables};

/// Locate the workbook in `folder` and write the table/field report
pub fn write_fields_report<W: Write>(
    folder: &Path,
    config: &DictConfig,
    out: &mut W,
) -> std::result::Result<(), ReportError> {
    let path = find_workbook(folder, &config.source)?;
    tracing::debug!("Using workbook {}", path.display());

    let dictionary = Dictionary::load(&path, config)?;
    let joined = join_fields(&dictionary.tables, &dictionary.fields);
    report::render_fields_report(out, &joined, &config.report)?;
    Ok(())
}

/// Locate the workbook in `folder` and write the table list report
pub fn write_tables_report<W: Write>(
    folder: &Path,
    config: &DictConfig,
    out: &mut W,
) -> std::result::Result<(), ReportError> {
    let path = find_workbook(folder, &config.source)?;
    tracing::debug!("Using workbook {}", path.display());

    let tables = load_tables(&path, config)?;
    report::render_tables_report(out, &tables, &config.report)?;
    Ok(())
}
