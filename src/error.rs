//! Error types for the page numbering library.
//!
//! This module defines all error types that can occur while validating
//! configuration and stamping a document.

/// Result type alias for page numbering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while stamping page numbers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed hexadecimal color code
    #[error("invalid hexadecimal color code: '{0}'")]
    InvalidColor(String),

    /// Font family not among the built-in core fonts
    #[error("unsupported font family: '{0}'")]
    UnknownFont(String),

    /// Malformed stamp format template
    #[error("invalid stamp format '{template}': {reason}")]
    InvalidFormat {
        /// The offending template string
        template: String,
        /// Reason the template was rejected
        reason: String,
    },

    /// Invalid command line argument
    #[error("argument {argument}: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        argument: String,
        /// Reason the value was rejected
        reason: String,
    },

    /// Page object missing or malformed in the document
    #[error("invalid page object {0} {1} R: {2}")]
    InvalidPage(u32, u16, String),

    /// Error from the underlying PDF document model
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
