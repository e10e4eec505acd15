//! Sheet data structures with promoted headers

use crate::error::{DictError, Result};
use calamine::{Data, Range};
use std::collections::HashMap;
use std::fmt;

/// Text values treated as "not available" when deciding whether a cell is missing
const NA_SENTINELS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A sheet whose header row has been promoted to column labels.
///
/// Rows above the header row (decorative titles) and the header row itself
/// are not part of the data; the first data row has index 0.
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub name: String,
    headers: Vec<String>,
    columns: HashMap<String, usize>,
    rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    /// Build a table from a calamine range, using the physical row `header_row`
    /// (0-based, absolute) as column labels.
    pub fn from_range(name: &str, range: &Range<Data>, header_row: u32) -> Result<Self> {
        let end = match range.end() {
            Some(end) if header_row <= end.0 => end,
            _ => {
                return Err(DictError::HeaderRowOutOfRange {
                    sheet: name.to_string(),
                    row: header_row,
                });
            }
        };

        let cell_at = |row: u32, col: u32| {
            range
                .get_value((row, col))
                .map(parse_cell_value)
                .unwrap_or(CellValue::Empty)
        };

        // Columns are addressed from the physical first column so that
        // leading blank columns keep their position
        let headers: Vec<String> = (0..=end.1)
            .map(|col| cell_at(header_row, col).to_string().trim().to_string())
            .collect();

        let rows = (header_row + 1..=end.0)
            .map(|row| (0..=end.1).map(|col| cell_at(row, col)).collect())
            .collect();

        Ok(Self::new(name, headers, rows))
    }

    /// Build a table from already promoted headers and data rows
    pub fn new(name: &str, headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let mut columns = HashMap::new();
        for (index, label) in headers.iter().enumerate() {
            if !label.is_empty() {
                // First occurrence wins for repeated labels
                columns.entry(label.clone()).or_insert(index);
            }
        }

        Self {
            name: name.to_string(),
            headers,
            columns,
            rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column index for a header label (surrounding whitespace ignored)
    pub fn column(&self, label: &str) -> Option<usize> {
        self.columns.get(label.trim()).copied()
    }

    /// Like [`SheetTable::column`], failing with `MissingColumn`
    pub fn require_column(&self, label: &str) -> Result<usize> {
        self.column(label).ok_or_else(|| DictError::MissingColumn {
            sheet: self.name.clone(),
            column: label.to_string(),
        })
    }

    /// Cell at a data row and column; cells past the row's end are empty
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&CellValue::Empty)
    }
}

/// Cell value types
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    Error(String),
}

impl CellValue {
    /// Whether the cell counts as a missing value: empty, an error value,
    /// blank text or a "not available" marker
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty | CellValue::Error(_) => true,
            CellValue::Number(n) => n.is_nan(),
            CellValue::Text(s) => s.trim().is_empty() || NA_SENTINELS.contains(&s.as_str()),
            CellValue::Boolean(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            CellValue::Error(e) => f.write_str(e),
        }
    }
}

pub(crate) fn parse_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(format!("{:?}", e)),
        Data::Empty => CellValue::Empty,
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) if dt.is_datetime() => CellValue::Text(datetime.to_string()),
            _ => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
