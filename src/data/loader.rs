//! RON table loader
//!
//! Loads property tables from external RON files, with fallback to the
//! hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::tables::{default_property_tables, PropertyTables, PropertyTablesDef};

/// File name of the property tables
pub const TABLES_FILE: &str = "property_tables.ron";

/// Errors reading or writing table files
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize tables: {0}")]
    Serialize(#[from] ron::Error),
}

/// Per-user location of the tables file
pub fn user_tables_path() -> Option<PathBuf> {
    use directories::ProjectDirs;

    ProjectDirs::from("com", "item-props", "ItemProps")
        .map(|dirs| dirs.config_dir().join(TABLES_FILE))
}

/// Resolves property tables from a list of candidate files
#[derive(Debug, Clone)]
pub struct TableLoader {
    search_paths: Vec<PathBuf>,
}

impl TableLoader {
    /// Look in `assets/data/`, then in the user config directory
    pub fn new() -> Self {
        let mut search_paths = vec![Path::new("assets/data").join(TABLES_FILE)];
        if let Some(path) = user_tables_path() {
            search_paths.push(path);
        }
        Self { search_paths }
    }

    /// Only look at the given files, in order
    pub fn with_paths(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Load the first readable tables file, or the defaults
    pub fn load(&self) -> PropertyTables {
        for path in &self.search_paths {
            if !path.exists() {
                continue;
            }
            match Self::load_file(path) {
                Ok(def) => {
                    log::info!("Loaded property tables from {}", path.display());
                    return PropertyTables::from_def(def);
                }
                Err(e) => log::warn!("{}. Trying next location.", e),
            }
        }

        log::debug!("No property tables file found, using defaults");
        PropertyTables::from_def(default_property_tables())
    }

    /// Read a single tables file
    pub fn load_file(path: &Path) -> Result<PropertyTablesDef, DataError> {
        let content = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Export the default tables to a RON file for easy editing
pub fn export_default_tables(path: &Path) -> Result<(), DataError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| DataError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let pretty = ron::ser::PrettyConfig::new().depth_limit(4);
    let content = ron::ser::to_string_pretty(&default_property_tables(), pretty)?;
    fs::write(path, content).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Exported default property tables to {}", path.display());
    Ok(())
}
