use thiserror::Error;

/// Failure taxonomy for formula evaluation.
///
/// Formulas return these internally; the dispatcher renders them through
/// `Display` at the boundary. Every variant's message begins with the
/// `Error:` marker that callers key on, so an error is always a terminal,
/// human-readable result line and never an exception.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A required input key was absent or empty.
    #[error("Error: Please provide {0}")]
    MissingField(String),

    /// A field was present but did not parse as a number.
    #[error("Error: {0} must be a valid number")]
    NotANumber(String),

    /// A field was present but did not parse as a whole number.
    #[error("Error: {0} must be a whole number")]
    NotAnInteger(String),

    /// A field was present but did not parse as an ISO calendar date.
    #[error("Error: {0} must be a valid date (YYYY-MM-DD)")]
    BadDate(String),

    /// A field was present but did not parse as a 24-hour clock time.
    #[error("Error: {0} must be a valid time (HH:MM)")]
    BadTime(String),

    /// A parsed value fell outside the formula's mathematical or
    /// physical domain.
    #[error("Error: {0}")]
    Domain(String),

    /// An unguarded divisor turned out to be zero.
    #[error("Error: Division by zero")]
    DivisionByZero,

    /// A unit name outside the converter's table.
    #[error("Error: Unknown unit '{0}'")]
    UnknownUnit(String),
}

impl EvalError {
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain(message.into())
    }
}

pub type EvalResult<T> = Result<T, EvalError>;
