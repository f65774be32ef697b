//! Typed error kinds raised by the core engine.
//!
//! Codec-specific I/O and parse errors live in `imc-codec`; this module only
//! covers conditions the transformation engine itself can raise.

use thiserror::Error;

/// A label's textual rate portion could not be parsed as a finite number.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LabelParseError {
    #[error("rate text {0:?} is not a valid number")]
    NotANumber(String),
    #[error("rate {0} is not finite")]
    NotFinite(f64),
}

/// Raised when a transformation precondition that the caller must guard
/// against was violated.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransformError {
    #[error("graph contains an interactive cycle; cycle search was disabled at read time")]
    UndetectedInteractiveCycle,
}
