//! Error types for labeling, mapping parsing, and centroid construction.

use std::fmt;

use crate::label::CellType;

/// Error type for single-character label mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelError {
    /// The character is not one of the recognized labels `{e, s, r, g, b}`.
    UnknownLabel(char),
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelError::UnknownLabel(label) => {
                write!(f, "unknown cell label {label:?} (expected one of e, s, r, g, b)")
            }
        }
    }
}

impl std::error::Error for LabelError {}

/// Error type for mapping-file parsing.
///
/// Grid-shape violations are rejected here rather than surfacing later as
/// out-of-range indexing during calibration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// A token is not a recognized single-character label.
    UnknownToken {
        /// Zero-based row the token appeared in.
        row: usize,
        /// The offending token.
        token: String,
    },
    /// The mapping has the wrong number of rows.
    WrongRowCount {
        /// Required number of rows.
        expected: usize,
        /// Number of non-blank rows found.
        found: usize,
    },
    /// A row has the wrong number of tokens.
    WrongTokenCount {
        /// Zero-based row with the wrong shape.
        row: usize,
        /// Required number of tokens.
        expected: usize,
        /// Number of tokens found.
        found: usize,
    },
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingError::UnknownToken { row, token } => {
                write!(f, "unknown label token {token:?} in mapping row {row}")
            }
            MappingError::WrongRowCount { expected, found } => {
                write!(f, "mapping has {found} rows, expected {expected}")
            }
            MappingError::WrongTokenCount {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "mapping row {row} has {found} tokens, expected {expected}"
                )
            }
        }
    }
}

impl std::error::Error for MappingError {}

/// Error type for centroid table construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CentroidError {
    /// A cell type appeared in no tuning sample, so its centroid is
    /// undefined. Calibration data must cover every type at least once.
    MissingType(CellType),
}

impl fmt::Display for CentroidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CentroidError::MissingType(cell_type) => {
                write!(
                    f,
                    "no tuning samples for cell type {:?} ({}); calibration data must cover every type",
                    cell_type,
                    cell_type.name()
                )
            }
        }
    }
}

impl std::error::Error for CentroidError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_error_display() {
        let err = LabelError::UnknownLabel('x');
        assert_eq!(
            err.to_string(),
            "unknown cell label 'x' (expected one of e, s, r, g, b)"
        );
    }

    #[test]
    fn test_mapping_error_display() {
        let err = MappingError::WrongTokenCount {
            row: 3,
            expected: 6,
            found: 5,
        };
        assert_eq!(err.to_string(), "mapping row 3 has 5 tokens, expected 6");
    }

    #[test]
    fn test_centroid_error_display() {
        let err = CentroidError::MissingType(CellType::Skull);
        assert!(err.to_string().contains("skull"));
    }
}
