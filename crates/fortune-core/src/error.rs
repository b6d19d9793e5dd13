//! Error types for the fortune engine.

use thiserror::Error;

/// Result type for fortune operations.
pub type FortuneResult<T> = Result<T, FortuneError>;

/// Errors that can occur while building requests, loading tables, or generating.
#[derive(Debug, Error)]
pub enum FortuneError {
    /// The category is not a known category or has no templates in the bank.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The lucky-number range must be at least 1.
    #[error("invalid lucky number range: {0} (must be at least 1)")]
    InvalidRange(u32),

    /// The requester's name is empty or whitespace.
    #[error("name must not be blank")]
    BlankName,

    /// A template does not carry exactly one `{name}` placeholder.
    #[error("invalid template for {category}: \"{template}\" (needs exactly one {{name}})")]
    InvalidTemplate {
        /// Category the template belongs to.
        category: String,
        /// The offending template text.
        template: String,
    },

    /// The lucky-color palette is empty.
    #[error("lucky color palette must not be empty")]
    EmptyPalette,

    /// A template bank file could not be read or parsed.
    #[error("cannot load template bank: {0}")]
    TemplateLoad(String),

    /// Fortunes or tables could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}
