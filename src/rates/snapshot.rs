//! Startup snapshot: the table data the UI starts from instead of fetching.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::CurrencyRow;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Initial state handed to the view state container at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialSnapshot {
    #[serde(default)]
    pub table_data: Vec<CurrencyRow>,
}

impl InitialSnapshot {
    pub fn load_from(path: &Path) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path).map_err(|e| SnapshotError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| SnapshotError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_table_data_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tableData":[{{"country":"USA","code":"USD","rate":1.0}}]}}"#
        )
        .unwrap();

        let snapshot = InitialSnapshot::load_from(file.path()).unwrap();
        assert_eq!(snapshot.table_data, vec![CurrencyRow::new("USA", "USD", 1.0)]);
    }

    #[test]
    fn missing_table_data_is_empty() {
        let snapshot: InitialSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.table_data.is_empty());
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = InitialSnapshot::load_from(Path::new("/nonexistent/snapshot.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::ReadError { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = InitialSnapshot::load_from(file.path()).unwrap_err();
        assert!(matches!(err, SnapshotError::ParseError { .. }));
    }
}
