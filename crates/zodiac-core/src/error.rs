//! Error types for the zodiac core.

use thiserror::Error;

/// Result type for core operations.
pub type ZodiacResult<T> = Result<T, ZodiacError>;

/// Errors raised while parsing user-supplied identifiers and settings.
///
/// None of these abort a page: an unknown sign in a route turns into a
/// redirect to the landing page, and a bad query value falls back to the
/// default configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ZodiacError {
    /// A sign id that is not one of the twelve lowercase identifiers.
    #[error("unknown zodiac sign: {0}")]
    UnknownSign(String),

    /// A language tag other than `ko` or `en`.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// A path that matches no page.
    #[error("no page for path: {0}")]
    UnknownRoute(String),

    /// A query parameter with a value that could not be parsed.
    #[error("invalid value for `{key}`: {value}")]
    InvalidConfig { key: String, value: String },
}
