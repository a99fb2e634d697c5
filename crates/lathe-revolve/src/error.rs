//! Error types for the revolve pipeline.

use lathe_math::MathError;
use thiserror::Error;

/// Errors that can occur while revolving a profile.
///
/// Every variant is terminal: no mesh is returned alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RevolveError {
    /// No edges were supplied.
    #[error("profile has no edges")]
    EmptyProfile,

    /// Tracing produced no chain with at least two points.
    #[error("profile contains no chain with at least two points")]
    InsufficientChain,

    /// Meshing finished without emitting a single triangle.
    #[error("revolve produced no triangles")]
    DegenerateResult,

    /// Sweep angle outside (0, 360] degrees.
    #[error("invalid sweep angle: {0} degrees")]
    InvalidAngle(f64),

    /// Numerical failure in a geometry primitive.
    #[error("computation fault: {0}")]
    ComputationFault(#[from] MathError),
}

/// Result type for revolve operations.
pub type Result<T> = std::result::Result<T, RevolveError>;
