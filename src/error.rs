//! Error taxonomy for the photology core.

use thiserror::Error;

/// Errors raised by the core simulation layers.
///
/// Every variant is raised synchronously at the point of invalid input;
/// no partial results are returned and nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// A value fell outside its valid domain (trit, angle, material,
    /// wavelength, or gate name).
    #[error("domain error: {0}")]
    Domain(String),

    /// A gate was invoked with the wrong number of operands.
    #[error("gate '{gate}' expects {expected} operand(s), got {got}")]
    Arity {
        gate: String,
        expected: usize,
        got: usize,
    },

    /// An invalid detector or solver configuration (efficiency, cladding,
    /// noise, reference intensity).
    #[error("configuration error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
