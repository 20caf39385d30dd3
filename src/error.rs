use thiserror::Error;

/// Top-level error type for numkit.
///
/// Numeric routines never fail; degenerate input propagates as NaN. Errors are
/// only produced by parsing and by explicit precondition checks.
#[derive(Debug, Error)]
pub enum NumkitError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Errors related to geometric input validation.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("polygon needs at least {min} vertices, got {count}")]
    TooFewVertices { count: usize, min: usize },
}

/// Errors related to color parsing.
#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("unrecognized color format: {0:?}")]
    UnknownFormat(String),

    #[error("invalid {channel} channel: {value:?}")]
    InvalidChannel { channel: &'static str, value: String },
}

/// Convenience type alias for results using [`NumkitError`].
pub type Result<T> = std::result::Result<T, NumkitError>;
