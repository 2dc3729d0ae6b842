//! Write-once, read-many directed weighted graph.
//!
//! # Data layout
//!
//! Edges live in a single `Vec<Edge<P>>` indexed by `EdgeId`; ids are handed
//! out sequentially by [`WeightedGraph::add_edge`] and never reused.  Each
//! vertex keeps the ids of its outgoing edges in insertion order:
//!
//! ```text
//! incidence[v] = [e0, e3, e7, ...]   // every e with edges[e].from == v
//! ```
//!
//! There is no removal.  Once construction is finished the graph is treated
//! as immutable and handed to a [`ShortestPathSolver`](crate::ShortestPathSolver).

use tc_core::{EdgeId, VertexId};

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A directed edge with a non-negative weight and a caller-defined payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<P> {
    pub from:    VertexId,
    pub to:      VertexId,
    pub weight:  f64,
    pub payload: P,
}

// ── WeightedGraph ─────────────────────────────────────────────────────────────

/// Directed graph with a fixed vertex count and accumulated edges.
#[derive(Debug, Clone)]
pub struct WeightedGraph<P> {
    edges:     Vec<Edge<P>>,
    incidence: Vec<Vec<EdgeId>>,
}

impl<P> WeightedGraph<P> {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges:     Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Pre-allocate room for `edge_capacity` edges.
    pub fn with_capacity(vertex_count: usize, edge_capacity: usize) -> Self {
        Self {
            edges:     Vec::with_capacity(edge_capacity),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Append a directed edge and return its id.
    ///
    /// The id equals the number of edges added before this call.
    ///
    /// # Panics
    ///
    /// Panics if `weight` is negative, NaN or infinite, if either vertex is
    /// out of range, or if the edge count outgrows `u32`.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64, payload: P) -> EdgeId {
        assert!(
            weight.is_finite() && weight >= 0.0,
            "edge weight must be finite and non-negative, got {weight}"
        );
        assert!(from.index() < self.vertex_count(), "vertex {from} out of range");
        assert!(to.index() < self.vertex_count(), "vertex {to} out of range");

        let id = EdgeId::try_from(self.edges.len()).expect("edge count exceeds u32 range");
        self.edges.push(Edge { from, to, weight, payload });
        self.incidence[from.index()].push(id);
        id
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The edge previously returned as `id` by [`add_edge`](Self::add_edge).
    ///
    /// # Panics
    ///
    /// Panics if `id` was never handed out by this graph.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge<P> {
        &self.edges[id.index()]
    }

    /// Outgoing edge ids of `vertex`, in the order they were added.
    #[inline]
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.incidence[vertex.index()]
    }

    /// Iterator over `(EdgeId, &Edge)` in id order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<P>)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId::from_index(i), e))
    }
}
