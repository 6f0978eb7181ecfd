//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Provides semantic variants for input contract violations (channel/shape
//! mismatches), degenerate geometry, policy parsing, and representation failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Channel count must match between batches: {a} vs {b}")]
    ChannelMismatch { a: usize, b: usize },

    #[error(
        "Spatial dimensions must match when reconciliation is disabled: {a_h}x{a_w} vs {b_h}x{b_w}"
    )]
    ShapeMismatch {
        a_h: usize,
        a_w: usize,
        b_h: usize,
        b_w: usize,
    },

    #[error("Dimension {dim} must be greater than 0, got: {value}")]
    InvalidDimension { dim: &'static str, value: usize },

    #[error("Unknown resize policy: {token}. Expected one of: fit, pad, stretch")]
    InvalidPolicy { token: String },

    #[error("Representation error: {0}")]
    Placement(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl Error {
    pub fn placement<E: std::fmt::Display>(e: E) -> Self {
        Error::Placement(e.to_string())
    }
}
