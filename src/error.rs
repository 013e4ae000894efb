//! Error types for the PDF generation core.
//!
//! This module defines all error types that can occur while building document
//! objects and converting units.

/// Result type alias for PDF generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a PDF document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unit kind ordinal does not name a supported measurement unit
    #[error("Invalid unit kind: {0}")]
    InvalidUnitKind(i32),

    /// Document title was empty at construction or `set_title`
    #[error("Invalid title: title must not be empty")]
    EmptyTitle,

    /// Document creator was empty at `set_creator`
    #[error("Invalid creator: creator must not be empty")]
    EmptyCreator,

    /// An object failed to render its PDF fragment
    #[error("Render failed: {0}")]
    Render(String),
}
