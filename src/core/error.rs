use thiserror::Error;

/// Degenerate-input failures. None of these are fatal; the caller decides how to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("cannot normalise a zero-length vector")]
    ZeroLengthVector,
    #[error("rotation axis has zero length")]
    ZeroLengthAxis,
    #[error("quaternion has zero length")]
    ZeroLengthQuaternion,
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,
    #[error("plane points are collinear")]
    CollinearPoints,
    #[error("planes do not meet at a single point (two or more are parallel)")]
    ParallelPlanes,
}
