//! `tc-graph` — weighted directed graph and shortest-path solver.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`graph`]  | `WeightedGraph<P>`, `Edge<P>`                             |
//! | [`solver`] | `ShortestPathSolver<P>`, `ShortestPathTree`, `Route`      |
//!
//! The graph is generic over an edge payload `P`.  Callers store their
//! domain tag directly in the edge record, so the edge id is the only handle
//! needed to recover both the weight and the meaning of an edge.

pub mod graph;
pub mod solver;


pub use graph::{Edge, WeightedGraph};
pub use solver::{Route, ShortestPathSolver, ShortestPathTree};
