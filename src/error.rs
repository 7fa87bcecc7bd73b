use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// InspectError – every failure the inspector can report
// ---------------------------------------------------------------------------

/// Failures raised while selecting, loading or reporting on a CSV file.
///
/// Most variants are navigation or input mistakes: the menu loop prints them
/// and carries on. Data-integrity variants are fatal (see [`InspectError::is_fatal`])
/// and end the process with exit code 1.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("No CSV files in the current directory")]
    NoCsvFiles,

    #[error("Please enter the file number")]
    FileChoiceNotANumber,

    #[error("Invalid number")]
    FileChoiceOutOfRange,

    #[error("Please enter the column number")]
    ColumnChoiceNotANumber,

    #[error("Invalid choice. Select from 1 to {available}")]
    ColumnChoiceOutOfRange { available: usize },

    #[error("The file has no numeric columns")]
    NoNumericColumns,

    #[error("File is too large (maximum {limit_mb} MB)")]
    FileTooLarge { limit_mb: u64 },

    #[error("Error reading file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Error reading file: {0}")]
    Malformed(String),

    #[error("The file contains no data")]
    EmptyTable,

    #[error("Error: invalid data in column '{column}', row {row}: '{value}'")]
    DataIntegrity {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Error: invalid values detected in column '{column}'")]
    MissingValues { column: String },

    #[error("I/O error on {path:?}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("console I/O error: {0}")]
    Console(#[from] std::io::Error),
}

impl InspectError {
    /// Whether this error must terminate the whole process.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            InspectError::DataIntegrity { .. }
                | InspectError::MissingValues { .. }
                | InspectError::Console(_)
        )
    }
}

pub type Result<T, E = InspectError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrity_errors_are_fatal() {
        let err = InspectError::DataIntegrity {
            column: "revenue".into(),
            row: 5,
            value: "abc".into(),
        };
        assert!(err.is_fatal());
        assert_eq!(
            err.to_string(),
            "Error: invalid data in column 'revenue', row 5: 'abc'"
        );
        assert!(InspectError::MissingValues { column: "x".into() }.is_fatal());
    }

    #[test]
    fn navigation_errors_are_recoverable() {
        for err in [
            InspectError::NoCsvFiles,
            InspectError::FileChoiceNotANumber,
            InspectError::FileChoiceOutOfRange,
            InspectError::ColumnChoiceNotANumber,
            InspectError::ColumnChoiceOutOfRange { available: 3 },
            InspectError::NoNumericColumns,
            InspectError::FileTooLarge { limit_mb: 20 },
            InspectError::EmptyTable,
            InspectError::Malformed("bad".into()),
        ] {
            assert!(!err.is_fatal(), "{err} should not be fatal");
        }
    }

    #[test]
    fn out_of_range_message_names_bound() {
        let err = InspectError::ColumnChoiceOutOfRange { available: 4 };
        assert_eq!(err.to_string(), "Invalid choice. Select from 1 to 4");
    }
}
