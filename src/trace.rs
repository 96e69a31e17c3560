//! An injected diagnostic observer.
//!
//! The pipeline never owns a logging sink. Instead it calls into an
//! externally-supplied `TraceSink` at a handful of well-defined points
//! (an edge gets split, the outer-face walk steps to a node, an ear gets
//! clipped, an empty loop collapses). With the default `NoopTraceSink`
//! every one of these calls compiles down to nothing: output is
//! indistinguishable whether tracing is wired up or not.

use crate::geom::{Point, Triangle};
use crate::interner::NodeId;

/// Observes pipeline internals without influencing control flow.
pub trait TraceSink {
    /// An edge between `from` and `to` was split at `at`.
    fn edge_split(&mut self, from: Point, to: Point, at: Point) {
        let _ = (from, to, at);
    }

    /// The outer-face walk stepped to `node` via `edge`.
    fn walk_step(&mut self, node: NodeId, point: Point) {
        let _ = (node, point);
    }

    /// An empty `X Y X` loop collapsed around `at`.
    fn loop_collapsed(&mut self, at: Point) {
        let _ = at;
    }

    /// A triangle was clipped as an ear.
    fn ear_clipped(&mut self, triangle: Triangle) {
        let _ = triangle;
    }
}

/// The default, zero-cost trace sink: every event is dropped.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopTraceSink;

impl TraceSink for NoopTraceSink {}
