//! Error types for content-profile.
//!
//! Errors never leave the crate's public entry points. They are produced by
//! individual field extractors and converted to typed defaults at the field
//! boundary by the assembler's `recover` combinator.

/// Error type for a single extraction step.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A CSS selector could not be compiled.
    #[error("invalid selector: {0}")]
    Selector(String),

    /// A structural element the step depends on is absent.
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    /// A panic was caught at a field boundary.
    #[error("extractor panicked: {0}")]
    Panicked(String),
}

/// Result type alias for extraction steps.
pub type Result<T> = std::result::Result<T, Error>;
