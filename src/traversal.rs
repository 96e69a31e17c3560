//! The outer-face traversal: establishes a consistent angular rotation at
//! every vertex, then walks the subdivision's outer face to produce the
//! normalized cyclic walk that the ear-clipper consumes.

use crate::geom::{self, Point};
use crate::interner::NodeId;
use crate::subdivision::{self, Subdivision};
use crate::trace::TraceSink;

/// Produces the normalized walk for `ring`. Empty for an empty, single-point,
/// or otherwise degenerate ring.
pub fn normalize_ring(ring: &[Point]) -> Vec<Point> {
    normalize_ring_with_trace(ring, &mut crate::trace::NoopTraceSink)
}

pub(crate) fn normalize_ring_with_trace(ring: &[Point], trace: &mut dyn TraceSink) -> Vec<Point> {
    let Some(mut sub) = subdivision::build(ring, trace) else {
        return Vec::new();
    };

    sort_adjacency_by_angle(&mut sub);
    let walk = eulerian_walk(&sub, trace);
    walk.into_iter().map(|id| sub.point(id)).collect()
}

/// Step 1: a DFS from the leftmost-lowest node that sorts each node's
/// incidence list by the angle of the incoming edge, exactly once per node.
fn sort_adjacency_by_angle(sub: &mut Subdivision) {
    let start = sub.most_left;
    let mut visited = vec![false; sub.interner.len()];

    // Approach the start node from the left, so the angular frame is
    // anchored by a synthetic predecessor rather than a real edge.
    let synthetic_pred = Point::new(f64::NEG_INFINITY, sub.point(start).y);

    let mut stack: Vec<(NodeId, Point)> = vec![(start, synthetic_pred)];

    while let Some((u, pred_point)) = stack.pop() {
        if visited[u.to_usize()] {
            continue;
        }
        visited[u.to_usize()] = true;

        let u_point = sub.point(u);
        let neighbors: Vec<Point> = sub.adjacency[u.to_usize()]
            .iter()
            .map(|&(v, _)| sub.point(v))
            .collect();

        let mut order: Vec<usize> = (0..sub.adjacency[u.to_usize()].len()).collect();
        order.sort_by(|&i, &j| {
            let ai = geom::angle_rad(pred_point, u_point, neighbors[i]);
            let aj = geom::angle_rad(pred_point, u_point, neighbors[j]);
            ai.partial_cmp(&aj).unwrap()
        });
        let sorted: Vec<(NodeId, subdivision::EdgeId)> =
            order.iter().map(|&i| sub.adjacency[u.to_usize()][i]).collect();
        sub.adjacency[u.to_usize()] = sorted;

        for &(v, _) in &sub.adjacency[u.to_usize()] {
            if !visited[v.to_usize()] {
                stack.push((v, u_point));
            }
        }
    }
}

/// Step 2: the Eulerian-style walk around the outer face, consuming each
/// edge exactly once and revisiting cut vertices as many times as their
/// degree requires.
fn eulerian_walk(sub: &Subdivision, trace: &mut dyn TraceSink) -> Vec<NodeId> {
    let mut adjacency = sub.adjacency.clone();
    let mut consumed = vec![false; sub.edge_count()];
    let mut output = Vec::new();

    let seed = *adjacency[sub.most_left.to_usize()]
        .last()
        .expect("leftmost node has at least one incident edge");
    let mut walk_stack = vec![seed];

    while let Some((node_id, edge_id)) = walk_stack.pop() {
        if consumed[edge_id.to_usize()] {
            continue;
        }
        consumed[edge_id.to_usize()] = true;
        output.push(node_id);
        trace.walk_step(node_id, sub.point(node_id));

        if let Some(next) = next_live_incidence(&mut adjacency, &consumed, node_id) {
            walk_stack.push(next);
        }
    }

    output
}

/// Pops consumed entries off the back of `node`'s incidence list and
/// returns the first live one found, leaving it in place.
fn next_live_incidence(
    adjacency: &mut [Vec<(NodeId, subdivision::EdgeId)>],
    consumed: &[bool],
    node: NodeId,
) -> Option<(NodeId, subdivision::EdgeId)> {
    let list = &mut adjacency[node.to_usize()];
    while let Some(&(_, edge_id)) = list.last() {
        if consumed[edge_id.to_usize()] {
            list.pop();
        } else {
            return list.last().copied();
        }
    }
    None
}
