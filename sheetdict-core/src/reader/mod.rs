//! Workbook reader using calamine

use crate::error::{DictError, Result};
use calamine::{Reader, Sheets, open_workbook_auto};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub mod sheet;

pub use sheet::{CellValue, SheetTable};

/// An opened workbook; the file handle is released when this is dropped
pub struct DictWorkbook {
    pub path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl DictWorkbook {
    /// Open a workbook with calamine (xlsx, xlsb, xls or ods)
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let sheets = open_workbook_auto(path).map_err(|source| DictError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            sheets,
        })
    }

    /// Get all sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// Read the sheet at `index`, promoting physical row `header_row` to headers
    pub fn sheet_at(&mut self, index: usize, header_row: u32) -> Result<SheetTable> {
        let name = self
            .sheet_names()
            .get(index)
            .cloned()
            .ok_or_else(|| DictError::MissingSheet {
                sheet: format!("#{}", index),
            })?;
        self.sheet_named(&name, header_row)
    }

    /// Read the sheet called `name`, promoting physical row `header_row` to headers
    pub fn sheet_named(&mut self, name: &str, header_row: u32) -> Result<SheetTable> {
        if !self.sheet_names().iter().any(|s| s == name) {
            return Err(DictError::MissingSheet {
                sheet: name.to_string(),
            });
        }

        let range = self
            .sheets
            .worksheet_range(name)
            .map_err(|source| DictError::Workbook {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            "Read sheet '{}' with {} rows, header at row {}",
            name,
            range.height(),
            header_row
        );

        let table = SheetTable::from_range(name, &range, header_row)?;
        if table.is_empty() {
            tracing::warn!("Sheet '{}' has no rows below its header", name);
        }
        tracing::debug!("Sheet '{}' columns: {:?}", name, table.headers());
        Ok(table)
    }
}
