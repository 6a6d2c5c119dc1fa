// Error types for mock verification
//
// Every outcome other than success is returned as a value; nothing here panics.

use crate::domain::path::FieldPath;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The root is not struct-shaped, directly or behind one pointer. Traversal never started.
    InvalidSubject { type_name: String },

    /// A reachable mock reported unmet expectations. `diagnostic` is the mock's own text,
    /// error lines first, then log lines.
    UnmetExpectations { path: FieldPath, diagnostic: String },

    /// Nesting went deeper than the configured limit.
    DepthExceeded { path: FieldPath, max_depth: usize },
}

impl VerifyError {
    /// Location of the failure, when it has one.
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            VerifyError::InvalidSubject { .. } => None,
            VerifyError::UnmetExpectations { path, .. } | VerifyError::DepthExceeded { path, .. } => {
                Some(path)
            }
        }
    }

    pub fn is_unmet_expectations(&self) -> bool {
        matches!(self, VerifyError::UnmetExpectations { .. })
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyError::InvalidSubject { type_name } => write!(
                f,
                "assert expectations for mocks requires a struct or a pointer to a struct, got '{}'",
                type_name
            ),
            VerifyError::UnmetExpectations { path, diagnostic } => write!(
                f,
                "assert expectations failed for mock field '{}':\n{}",
                path, diagnostic
            ),
            VerifyError::DepthExceeded { path, max_depth } => write!(
                f,
                "subject nesting exceeds max depth {} at field '{}'",
                max_depth, path
            ),
        }
    }
}

impl std::error::Error for VerifyError {}
