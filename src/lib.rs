#![deny(bare_trait_objects)]

//! Triangulates arbitrary, possibly self-intersecting 2D polygon rings.
//!
//! The pipeline has two stages:
//!
//! 1. **Normalization** ([`normalize_ring`]): finds every proper
//!    self-intersection of the ring's edges, splits edges at the crossings,
//!    and walks the outer face of the resulting planar subdivision to
//!    produce a normalized cyclic walk (see [`subdivision`] and
//!    [`traversal`]).
//! 2. **Ear-clipping** ([`ear_clip::ear_clip`]): repeatedly excises ear
//!    triangles from that walk, collapsing the zero-area "there-and-back"
//!    bridges the normalization stage leaves behind at cut vertices.
//!
//! [`triangulate`] is the sole entry point most callers need; the
//! individual stages and predicates are exposed for white-box testing.

#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde;

mod ear_clip;
mod error;
mod geom;
mod interner;
mod subdivision;
mod trace;
mod traversal;

pub use error::{InvalidGeometryKind, TriangulationError};
pub use geom::{
    angle_rad, intersection, point, point_strictly_in_triangle, proper_intersects,
    ring_vertex_order, signed_area, vertex_order, Point, Triangle, VertexOrder,
};
pub use trace::{NoopTraceSink, TraceSink};
pub use traversal::normalize_ring;

/// Triangulates `ring`, an ordered cyclic sequence of 2D points.
///
/// The ring may optionally repeat its first point as a trailing element;
/// that duplicate is stripped. Zero-length edges are ignored. The output
/// triangles are emitted in clip order and never overlap; their winding
/// matches the normalized walk's rotational sense. This function never
/// panics or returns an error: degenerate input (empty, a single point,
/// an all-collinear ring) simply yields an empty or partial result.
pub fn triangulate(ring: &[Point]) -> Vec<Triangle> {
    triangulate_with_trace(ring, &mut NoopTraceSink)
}

/// Like [`triangulate`], but reports pipeline internals to `trace` as it
/// goes. With [`NoopTraceSink`] this is identical in output to
/// [`triangulate`] — the hook is purely observational.
pub fn triangulate_with_trace(ring: &[Point], trace: &mut dyn TraceSink) -> Vec<Triangle> {
    let walk = traversal::normalize_ring_with_trace(ring, trace);
    ear_clip::ear_clip(&walk, trace)
}
