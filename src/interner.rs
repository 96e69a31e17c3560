//! Deduplicates points under exact `==` and hands out stable integer ids.

use crate::geom::Point;
use std::collections::HashMap;

/// A stable id for an interned point. Distinct ids correspond to distinct
/// point values under exact equality.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn to_usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    fn from_usize(v: usize) -> Self {
        NodeId(v as u32)
    }
}

/// Bit-exact hashable/comparable wrapper around `Point`, used only as a
/// `HashMap` key. `f64` has no `Eq`/`Hash` impl because `NaN != NaN`; the
/// interner only ever stores finite input coordinates, so bit-pattern
/// equality is the correct and sufficient notion here.
#[derive(Copy, Clone, Debug)]
struct PointKey(Point);

impl PartialEq for PointKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.x.to_bits() == other.0.x.to_bits() && self.0.y.to_bits() == other.0.y.to_bits()
    }
}
impl Eq for PointKey {}

impl std::hash::Hash for PointKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.x.to_bits().hash(state);
        self.0.y.to_bits().hash(state);
    }
}

/// Maps points to stable node ids and back. No deletion.
#[derive(Default)]
pub struct PointInterner {
    ids: HashMap<PointKey, NodeId>,
    points: Vec<Point>,
}

impl PointInterner {
    pub fn new() -> Self {
        PointInterner {
            ids: HashMap::new(),
            points: Vec::new(),
        }
    }

    /// Returns the existing id for `p` if known, otherwise interns it.
    pub fn intern(&mut self, p: Point) -> NodeId {
        let key = PointKey(p);
        if let Some(&id) = self.ids.get(&key) {
            return id;
        }
        let id = NodeId::from_usize(self.points.len());
        self.points.push(p);
        self.ids.insert(key, id);
        id
    }

    #[inline]
    pub fn point(&self, id: NodeId) -> Point {
        self.points[id.to_usize()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point;

    #[test]
    fn test_intern_deduplicates() {
        let mut interner = PointInterner::new();
        let a = interner.intern(point(1.0, 2.0));
        let b = interner.intern(point(3.0, 4.0));
        let c = interner.intern(point(1.0, 2.0));
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_point_roundtrip() {
        let mut interner = PointInterner::new();
        let id = interner.intern(point(5.5, -2.25));
        assert_eq!(interner.point(id), point(5.5, -2.25));
    }
}
