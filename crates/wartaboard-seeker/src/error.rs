//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that can occur when building queries from text.
///
/// Evaluating a query never fails; only parsing user-supplied rule text does.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeekerError {
    /// A textual rule did not have the `column:rule:value` shape.
    #[error("invalid filter rule '{input}': expected column:rule:value")]
    InvalidRuleSpec { input: String },

    /// A textual rule named an empty column.
    #[error("invalid filter rule '{input}': column name is empty")]
    EmptyColumn { input: String },
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
