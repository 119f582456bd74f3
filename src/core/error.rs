//! Error types for the library.
//!
//! Each fallible helper has its own error so callers can match on exactly
//! what can go wrong:
//!
//! - [`DecodeError`] - malformed percent-encoding in a query key or value
//! - [`ScriptLoadError`] - dynamic `<script>` injection failures
//! - [`FormatError`] - out-of-range fixed-point precision
//! - [`UnknownOsKind`] - unrecognized platform name

use thiserror::Error;

/// Percent-decoding failures raised by the query parser.
///
/// The parser does not recover from these; the first bad component aborts
/// the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A `%` not followed by two hex digits.
    #[error("malformed escape at byte {offset} in {input:?}")]
    MalformedEscape { input: String, offset: usize },
    /// Escapes that decode to bytes which are not UTF-8.
    #[error("escapes in {input:?} do not decode to UTF-8")]
    InvalidUtf8 { input: String },
}

/// Script loading errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptLoadError {
    /// No document/head available (non-browser host).
    #[error("document not available")]
    NoDocument,
    /// `document.createElement("script")` failed.
    #[error("failed to create script element: {0}")]
    ElementCreation(String),
    /// Appending the element to `<head>` failed.
    #[error("failed to append script element: {0}")]
    Append(String),
    /// The host reported an error event for the script.
    #[error("failed to load script {src}: {reason}")]
    LoadFailed { src: String, reason: String },
}

/// Number formatting errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Precision above [`crate::config::money::MAX_DIGITS`].
    #[error("fraction digits must be between 0 and 100, got {0}")]
    DigitsOutOfRange(usize),
}

/// Unrecognized platform name passed to `OsKind::from_str`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform name {0:?}")]
pub struct UnknownOsKind(pub String);
