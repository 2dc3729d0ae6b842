//! Dijkstra shortest paths with a per-source cache.
//!
//! # Caching
//!
//! The first query from a given source runs a full single-source Dijkstra
//! over the whole graph and stores the resulting [`ShortestPathTree`].  Every
//! later query from the same source is answered from the tree by walking
//! predecessor edges back from the target.  The graph is owned by the solver
//! and never mutated, so cached trees are never invalidated.
//!
//! The cache uses `RefCell`, which makes the solver `!Sync`: keep one solver
//! per thread if queries ever need to run in parallel.
//!
//! # Cost units
//!
//! Weights are opaque `f64`s; the solver only requires them to be finite and
//! non-negative, which [`WeightedGraph::add_edge`] enforces.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use tc_core::{EdgeId, VertexId};

use crate::WeightedGraph;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a shortest-path query: edge ids from source to target and
/// their accumulated weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Edges to traverse in order, from source to target.
    pub edges: Vec<EdgeId>,
    /// Sum of the edge weights.
    pub total_weight: f64,
}

impl Route {
    /// `true` if source and target are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── ShortestPathTree ──────────────────────────────────────────────────────────

/// Single-source Dijkstra result: best weight and predecessor edge for every
/// vertex.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source:    VertexId,
    /// Best known weight; `f64::INFINITY` for unreached vertices.
    dist:      Vec<f64>,
    /// Edge that reached each vertex; `EdgeId::INVALID` for the source and
    /// for unreached vertices.
    prev_edge: Vec<EdgeId>,
}

impl ShortestPathTree {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Minimal total weight from the source to `target`, if reachable.
    pub fn weight_to(&self, target: VertexId) -> Option<f64> {
        let w = self.dist[target.index()];
        w.is_finite().then_some(w)
    }

    /// Number of vertices reachable from the source (including itself).
    pub fn reached_count(&self) -> usize {
        self.dist.iter().filter(|d| d.is_finite()).count()
    }

    fn route_to<P>(&self, graph: &WeightedGraph<P>, target: VertexId) -> Option<Route> {
        let total_weight = self.weight_to(target)?;

        let mut edges = Vec::new();
        let mut cur = target;
        loop {
            let e = self.prev_edge[cur.index()];
            if e == EdgeId::INVALID {
                break;
            }
            edges.push(e);
            cur = graph.edge(e).from;
        }
        edges.reverse();

        Some(Route { edges, total_weight })
    }
}

// ── Heap entry ────────────────────────────────────────────────────────────────

/// Min-heap entry ordered by weight, then vertex id for deterministic ties.
#[derive(Copy, Clone, Debug)]
struct HeapEntry {
    weight: f64,
    vertex: VertexId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    // Reversed so `BinaryHeap` (a max-heap) pops the smallest weight first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

// ── ShortestPathSolver ────────────────────────────────────────────────────────

/// Answers "cheapest path from A to B" over an owned, immutable graph.
pub struct ShortestPathSolver<P> {
    graph: WeightedGraph<P>,
    cache: RefCell<FxHashMap<VertexId, Rc<ShortestPathTree>>>,
}

impl<P> ShortestPathSolver<P> {
    /// Take ownership of a fully built graph.  No computation happens here.
    pub fn new(graph: WeightedGraph<P>) -> Self {
        Self {
            graph,
            cache: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn graph(&self) -> &WeightedGraph<P> {
        &self.graph
    }

    /// Number of sources with a memoised shortest-path tree.
    pub fn cached_sources(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Cheapest route from `source` to `target`.
    ///
    /// Returns an empty zero-weight route when `source == target` and `None`
    /// when `target` is unreachable.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is out of range.
    pub fn build_route(&self, source: VertexId, target: VertexId) -> Option<Route> {
        assert!(source.index() < self.graph.vertex_count(), "vertex {source} out of range");
        assert!(target.index() < self.graph.vertex_count(), "vertex {target} out of range");

        if source == target {
            return Some(Route { edges: vec![], total_weight: 0.0 });
        }

        let tree = self.tree(source);
        let route = tree.route_to(&self.graph, target);
        trace!(
            %source,
            %target,
            found = route.is_some(),
            edges = route.as_ref().map_or(0, |r| r.edges.len()),
            "route query"
        );
        route
    }

    /// Shortest-path tree rooted at `source`, computed on first use.
    pub fn tree(&self, source: VertexId) -> Rc<ShortestPathTree> {
        if let Some(tree) = self.cache.borrow().get(&source) {
            return Rc::clone(tree);
        }

        let tree = Rc::new(self.dijkstra(source));
        debug!(
            %source,
            reached = tree.reached_count(),
            cached  = self.cache.borrow().len() + 1,
            "computed shortest-path tree"
        );
        self.cache.borrow_mut().insert(source, Rc::clone(&tree));
        tree
    }

    fn dijkstra(&self, source: VertexId) -> ShortestPathTree {
        let n = self.graph.vertex_count();
        // dist[v] = best known weight to reach v.
        let mut dist      = vec![f64::INFINITY; n];
        // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached.
        let mut prev_edge = vec![EdgeId::INVALID; n];

        dist[source.index()] = 0.0;

        let mut heap = BinaryHeap::new();
        heap.push(HeapEntry { weight: 0.0, vertex: source });

        while let Some(HeapEntry { weight, vertex }) = heap.pop() {
            // Skip stale heap entries.
            if weight > dist[vertex.index()] {
                continue;
            }

            for &edge_id in self.graph.incident_edges(vertex) {
                let edge = self.graph.edge(edge_id);
                let candidate = weight + edge.weight;

                if candidate < dist[edge.to.index()] {
                    dist[edge.to.index()] = candidate;
                    prev_edge[edge.to.index()] = edge_id;
                    heap.push(HeapEntry { weight: candidate, vertex: edge.to });
                }
            }
        }

        ShortestPathTree { source, dist, prev_edge }
    }
}
