//! Error type shared by all hull operations.
//!
//! Every error is a local precondition failure detected at a function
//! boundary. Nothing here is transient, so callers never retry.

use thiserror::Error;

/// Errors raised by the hull engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// A caller broke an input contract: unsorted input, an empty hull,
    /// or a tangent seed that is not part of its hull.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The geometry cannot be handled under the chosen tolerance policy,
    /// e.g. a slope between identical points or a tangent walk that
    /// exhausted its step budget on non-convex input.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

/// Result alias for hull operations.
pub type Result<T> = std::result::Result<T, HullError>;
