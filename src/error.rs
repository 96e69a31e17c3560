//! Error types for the triangulation pipeline.
//!
//! The pipeline façade (`triangulate`) never raises: malformed or degenerate
//! geometry simply yields a partial or empty result. The white-box entry
//! points used for testing the individual stages are stricter, and report
//! `TriangulationError` when asked to operate on geometry that violates
//! their contract (e.g. `ring_vertex_order` on fewer than three points).

use core::fmt;

/// Why a geometric contract was violated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InvalidGeometryKind {
    /// `ring_vertex_order` (or anything that depends on it) was given a ring
    /// with fewer than three points.
    DegenerateRing,
    /// `intersection` was asked for the crossing of two parallel lines.
    ParallelLines,
}

impl fmt::Display for InvalidGeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidGeometryKind::DegenerateRing => {
                write!(f, "ring has fewer than three points")
            }
            InvalidGeometryKind::ParallelLines => {
                write!(f, "lines are parallel and do not intersect")
            }
        }
    }
}

impl std::error::Error for InvalidGeometryKind {}

/// The umbrella error type for the white-box predicate entry points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriangulationError {
    InvalidGeometry(InvalidGeometryKind),
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriangulationError::InvalidGeometry(kind) => {
                write!(f, "invalid geometry: {kind}")
            }
        }
    }
}

impl std::error::Error for TriangulationError {}

impl From<InvalidGeometryKind> for TriangulationError {
    fn from(kind: InvalidGeometryKind) -> Self {
        TriangulationError::InvalidGeometry(kind)
    }
}

pub type Result<T> = core::result::Result<T, TriangulationError>;
