//! Ear-clipping over the normalized walk: a cyclic mutable list supporting
//! O(1) erase-at-cursor, collapse of zero-area "there-and-back" bridges,
//! and the ear-detection loop itself.

use crate::geom::{self, Point, Triangle, VertexOrder};
use crate::trace::TraceSink;

/// A cyclic doubly-linked list realized as an arena of `prev`/`next`
/// indices. Slots are never reused or shifted, so a cursor captured before
/// a removal stays valid (as long as it wasn't the removed slot itself) —
/// this is what keeps erase-at-cursor O(1) instead of the O(n) cost an
/// index-shift removal from a plain array would incur.
struct CyclicList {
    points: Vec<Point>,
    next: Vec<usize>,
    prev: Vec<usize>,
    len: usize,
}

impl CyclicList {
    fn new(points: &[Point]) -> Self {
        let n = points.len();
        let next = (0..n).map(|i| (i + 1) % n).collect();
        let prev = (0..n).map(|i| (i + n - 1) % n).collect();
        CyclicList {
            points: points.to_vec(),
            next,
            prev,
            len: n,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn next(&self, cur: usize) -> usize {
        self.next[cur]
    }

    #[inline]
    fn prev(&self, cur: usize) -> usize {
        self.prev[cur]
    }

    #[inline]
    fn point(&self, cur: usize) -> Point {
        self.points[cur]
    }

    fn remove(&mut self, cur: usize) {
        let p = self.prev[cur];
        let n = self.next[cur];
        self.next[p] = n;
        self.prev[n] = p;
        self.len -= 1;
    }
}

/// Tries each of the three `X Y X` bridge patterns once, anchored at `a`.
/// Returns the cursor to continue from if a collapse happened.
fn try_collapse_once(list: &mut CyclicList, a: usize) -> Option<usize> {
    if list.len() < 3 {
        return None;
    }

    let a_next = list.next(a);
    let a_next2 = list.next(a_next);
    if list.point(a) == list.point(a_next2) {
        list.remove(a_next);
        list.remove(a_next2);
        return Some(a);
    }

    let a_prev = list.prev(a);
    if list.point(a_prev) == list.point(a_next) {
        list.remove(a);
        list.remove(a_next);
        return Some(a_prev);
    }

    let a_prev2 = list.prev(a_prev);
    if list.point(a_prev2) == list.point(a) {
        list.remove(a);
        list.remove(a_prev);
        return Some(a_prev2);
    }

    None
}

fn collapse_empty_loops(list: &mut CyclicList, a: &mut usize, trace: &mut dyn TraceSink) -> bool {
    let mut changed = false;
    while list.len() >= 3 {
        match try_collapse_once(list, *a) {
            Some(new_a) => {
                trace.loop_collapsed(list.point(new_a));
                *a = new_a;
                changed = true;
            }
            None => break,
        }
    }
    changed
}

/// Clips ears from the normalized `walk`, collapsing empty loops as it
/// goes. Never panics on malformed input: a ring with no available ears
/// simply yields whatever was clipped before the no-progress guard fired.
pub fn ear_clip(walk: &[Point], trace: &mut dyn TraceSink) -> Vec<Triangle> {
    if walk.len() < 3 {
        return Vec::new();
    }

    let orientation = match geom::ring_vertex_order(walk) {
        Ok(o) => o,
        Err(_) => return Vec::new(),
    };

    let mut list = CyclicList::new(walk);
    let mut triangles = Vec::new();
    let mut a = 0usize;
    let mut counter = 0usize;

    while list.len() > 2 && counter < list.len() {
        if collapse_empty_loops(&mut list, &mut a, trace) {
            counter = 0;
        }
        if list.len() <= 2 {
            break;
        }

        let b = list.next(a);
        let c = list.next(b);
        let t = Triangle::new(list.point(a), list.point(b), list.point(c));

        if geom::vertex_order(t) == VertexOrder::NoArea {
            a = list.next(a);
            counter += 1;
            continue;
        }

        let mut is_ear = geom::vertex_order(t) == orientation;
        if is_ear {
            let mut v = list.next(c);
            while v != a {
                if geom::point_strictly_in_triangle(t, list.point(v)) {
                    is_ear = false;
                    break;
                }
                v = list.next(v);
            }
        }

        if is_ear {
            triangles.push(t);
            trace.ear_clipped(t);
            list.remove(b);
            counter = 0;
        } else {
            a = list.next(a);
            counter += 1;
        }
    }

    triangles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point;
    use crate::trace::NoopTraceSink;

    fn clip(walk: &[Point]) -> Vec<Triangle> {
        ear_clip(walk, &mut NoopTraceSink)
    }

    fn as_set(t: Triangle) -> [Point; 3] {
        let mut v = [t.a, t.b, t.c];
        v.sort_by(|a, b| (a.x, a.y).partial_cmp(&(b.x, b.y)).unwrap());
        v
    }

    #[test]
    fn test_too_few_points_is_empty() {
        assert!(clip(&[]).is_empty());
        assert!(clip(&[point(0.0, 0.0), point(1.0, 0.0)]).is_empty());
    }

    #[test]
    fn test_single_triangle_clips_itself() {
        let walk = [point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0)];
        let triangles = clip(&walk);
        assert_eq!(triangles.len(), 1);
        assert_eq!(as_set(triangles[0]), as_set(Triangle::new(walk[0], walk[1], walk[2])));
    }

    #[test]
    fn test_square_clips_to_two_triangles() {
        let walk = [
            point(-1.0, -1.0),
            point(1.0, -1.0),
            point(1.0, 1.0),
            point(-1.0, 1.0),
        ];
        let triangles = clip(&walk);
        assert_eq!(triangles.len(), 2);
    }

    #[test]
    fn test_bridge_collapses_to_nothing() {
        // A "there and back" bridge: 0 -> 1 -> 2 -> 1 collapses away, and
        // fewer than 3 distinct points remain, so no triangles are produced.
        let walk = [point(0.0, 0.0), point(1.0, 0.0), point(2.0, 0.0), point(1.0, 0.0)];
        assert!(clip(&walk).is_empty());
    }

    #[test]
    fn test_convex_pentagon_clips_to_three_triangles() {
        // A convex, non-self-intersecting pentagon: already a valid
        // normalized walk on its own, so ear-clipping it directly is a
        // legitimate white-box test of this stage alone.
        let walk = [
            point(0.0, 0.0),
            point(2.0, 0.0),
            point(3.0, 1.0),
            point(1.0, 2.0),
            point(-1.0, 1.0),
        ];
        let triangles = clip(&walk);
        assert_eq!(triangles.len(), 3);
    }
}
