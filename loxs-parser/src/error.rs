//! Error types for structure-definition parsing

use thiserror::Error;

/// Errors that can occur while parsing a structure definition
#[derive(Error, Debug)]
pub enum StructureError {
    /// The document is missing required keys or fields, or is otherwise
    /// not shaped like a structure definition
    #[error("Invalid structure definition: {0}")]
    InvalidDocument(String),

    /// A control references a category the document does not define
    ///
    /// Controls are filed under their category; a dangling reference means
    /// the document is inconsistent and the whole parse is rejected.
    #[error("Control {control} references unknown category {category}")]
    UnknownCategory { control: String, category: String },
}

/// Result type alias for parsing operations
pub type ParseResult<T> = Result<T, StructureError>;
