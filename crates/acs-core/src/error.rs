use std::path::PathBuf;

use crate::validate::ValidationIssue;

/// Alias for `Result<T, AdventureError>`.
pub type AdventureResult<T> = Result<T, AdventureError>;

/// Errors that can occur while loading an adventure. All of them are fatal
/// before the first turn; nothing here is raised during play.
#[derive(Debug, thiserror::Error)]
pub enum AdventureError {
    /// The adventure file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the adventure schema.
    #[error("invalid adventure document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but failed referential-integrity checks.
    #[error("invalid adventure: {}", summarize(.0))]
    Invalid(Vec<ValidationIssue>),
}

impl AdventureError {
    /// The validation issues, if this is an integrity failure.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Invalid(issues) => issues,
            _ => &[],
        }
    }
}

fn summarize(issues: &[ValidationIssue]) -> String {
    let errors: Vec<String> = issues
        .iter()
        .filter(|i| i.is_error)
        .map(|i| format!("{}: {}", i.subject, i.message))
        .collect();
    errors.join("; ")
}
