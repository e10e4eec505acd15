//! Configuration for dictionary sources and report layout

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File looked up in the current directory when no config path is given
pub const DEFAULT_CONFIG_FILE: &str = "sheetdict.toml";

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DictConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub entities: EntitySheetConfig,
    #[serde(default)]
    pub fields: FieldSheetConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl DictConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load an explicit config file, or `sheetdict.toml` from the current
    /// directory if it exists, or fall back to defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            Self::from_file(default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Pick the folder to scan: the command-line value wins over the configured default
    pub fn resolve_folder(&self, cli_folder: Option<PathBuf>) -> Option<PathBuf> {
        cli_folder.or_else(|| self.source.default_folder.clone())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}

/// Where the workbook comes from
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Extension matched when scanning the folder
    pub extension: String,
    /// Exact file name to use instead of scanning by extension
    pub file_name: Option<String>,
    /// Folder used when none is given on the command line
    pub default_folder: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            extension: "xlsx".to_string(),
            file_name: None,
            default_folder: None,
        }
    }
}

/// Layout of the entity list sheet
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EntitySheetConfig {
    pub sheet_index: usize,
    /// Physical row holding the column labels (0-based)
    pub header_row: u32,
    pub display_column: String,
    pub schema_column: String,
}

impl Default for EntitySheetConfig {
    fn default() -> Self {
        Self {
            sheet_index: 0,
            header_row: 1,
            display_column: "Entity".to_string(),
            schema_column: "Schema Name".to_string(),
        }
    }
}

/// Layout of the per-field metadata sheet
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldSheetConfig {
    pub sheet: String,
    pub header_row: u32,
    pub owner_column: String,
    pub schema_column: String,
    pub display_column: String,
}

impl Default for FieldSheetConfig {
    fn default() -> Self {
        Self {
            sheet: "Metadata".to_string(),
            header_row: 0,
            owner_column: "Entity Logical Name".to_string(),
            schema_column: "Schema Name".to_string(),
            display_column: "Display Name".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Cut values longer than their column instead of letting them overflow
    pub truncate: bool,
}
