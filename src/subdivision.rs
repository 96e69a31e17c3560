//! Builds the planar subdivision of a ring's edges: finds every proper
//! pairwise intersection, splits edges at their crossings, and emits the
//! resulting multigraph over interned nodes with per-node adjacency.

use crate::geom::{self, Point};
use crate::interner::{NodeId, PointInterner};
use crate::trace::TraceSink;

/// A stable id for an edge in the subdivision's edge table. Tombstoned
/// edges keep their id but are marked `deleted` rather than removed, so
/// earlier split-point bookkeeping never has to be renumbered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeId(u32);

impl EdgeId {
    #[inline]
    fn from_usize(v: usize) -> Self {
        EdgeId(v as u32)
    }

    #[inline]
    pub(crate) fn to_usize(self) -> usize {
        self.0 as usize
    }
}

#[derive(Copy, Clone, Debug)]
struct Edge {
    from: NodeId,
    to: NodeId,
    deleted: bool,
}

/// The planar subdivision: interned nodes, a tombstoned edge table, and
/// per-node `(neighbor, edge)` incidence lists over the non-deleted edges.
pub struct Subdivision {
    pub interner: PointInterner,
    edges: Vec<Edge>,
    pub adjacency: Vec<Vec<(NodeId, EdgeId)>>,
    pub most_left: NodeId,
}

impl Subdivision {
    #[inline]
    pub fn edge_endpoints(&self, id: EdgeId) -> (NodeId, NodeId) {
        let e = &self.edges[id.to_usize()];
        (e.from, e.to)
    }

    #[inline]
    pub fn point(&self, id: NodeId) -> Point {
        self.interner.point(id)
    }

    #[inline]
    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Strips a trailing duplicate-of-first point. Leaves the ring untouched
/// otherwise (adjacent interior duplicates are tolerated: they simply
/// intern to the same node and their zero-length edge is skipped below).
fn strip_closing_duplicate(ring: &[Point]) -> &[Point] {
    if ring.len() >= 2 && ring[0] == ring[ring.len() - 1] {
        &ring[..ring.len() - 1]
    } else {
        ring
    }
}

/// Builds the planar subdivision of `ring`. Returns `None` for an empty
/// ring or a ring that reduces to a single distinct point.
pub fn build(ring: &[Point], trace: &mut dyn TraceSink) -> Option<Subdivision> {
    if ring.is_empty() {
        return None;
    }

    let ring = strip_closing_duplicate(ring);
    if ring.is_empty() {
        return None;
    }

    let mut interner = PointInterner::new();
    let node_ids: Vec<NodeId> = ring.iter().map(|&p| interner.intern(p)).collect();
    if interner.len() < 2 {
        // A single distinct point (possibly repeated many times) is degenerate.
        return None;
    }

    let mut edges = Vec::new();
    let n = node_ids.len();
    for i in 0..n - 1 {
        push_edge(&mut edges, node_ids[i], node_ids[i + 1]);
    }
    // The closing edge is stored as (first, last) rather than (last, first);
    // either orientation is valid for undirected adjacency, but this one is
    // preserved for deterministic output.
    push_edge(&mut edges, node_ids[0], node_ids[n - 1]);

    let mut splits: Vec<Vec<NodeId>> = vec![Vec::new(); edges.len()];
    for i in 0..edges.len() {
        for j in (i + 1)..edges.len() {
            let (a, b) = (edges[i].from, edges[i].to);
            let (c, d) = (edges[j].from, edges[j].to);
            let (pa, pb, pc, pd) = (
                interner.point(a),
                interner.point(b),
                interner.point(c),
                interner.point(d),
            );
            if geom::proper_intersects(pa, pb, pc, pd) {
                // `proper_intersects` guarantees a non-degenerate crossing,
                // so `intersection` cannot fail here.
                let p = geom::intersection(pa, pb, pc, pd).expect("proper intersection exists");
                let node = interner.intern(p);
                splits[i].push(node);
                splits[j].push(node);
            }
        }
    }

    let mut final_edges: Vec<Edge> = Vec::new();
    for (i, edge) in edges.iter_mut().enumerate() {
        if splits[i].is_empty() {
            final_edges.push(*edge);
            continue;
        }

        edge.deleted = true;
        let from_point = interner.point(edge.from);
        let to_point = interner.point(edge.to);
        trace.edge_split(from_point, to_point, interner.point(splits[i][0]));

        let mut chain = splits[i].clone();
        chain.push(edge.from);
        chain.push(edge.to);
        chain.sort_by(|&a, &b| {
            let pa = interner.point(a);
            let pb = interner.point(b);
            (pa.x, pa.y).partial_cmp(&(pb.x, pb.y)).unwrap()
        });
        chain.dedup();

        for pair in chain.windows(2) {
            if pair[0] != pair[1] {
                push_edge(&mut final_edges, pair[0], pair[1]);
            }
        }
    }
    final_edges.extend(edges.iter().filter(|e| e.deleted));

    let mut adjacency: Vec<Vec<(NodeId, EdgeId)>> = vec![Vec::new(); interner.len()];
    let mut most_left: Option<NodeId> = None;
    for (idx, edge) in final_edges.iter().enumerate() {
        if edge.deleted {
            continue;
        }
        let id = EdgeId::from_usize(idx);
        adjacency[edge.from.to_usize()].push((edge.to, id));
        adjacency[edge.to.to_usize()].push((edge.from, id));

        for &endpoint in &[edge.from, edge.to] {
            let p = interner.point(endpoint);
            most_left = Some(match most_left {
                None => endpoint,
                Some(cur) if geom::lex_less(p, interner.point(cur)) => endpoint,
                Some(cur) => cur,
            });
        }
    }

    let most_left = most_left?;

    Some(Subdivision {
        interner,
        edges: final_edges,
        adjacency,
        most_left,
    })
}

fn push_edge(edges: &mut Vec<Edge>, from: NodeId, to: NodeId) {
    if from == to {
        return;
    }
    edges.push(Edge {
        from,
        to,
        deleted: false,
    });
}
