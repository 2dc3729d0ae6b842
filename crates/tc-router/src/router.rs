//! Query-time routing: resolve stop names, solve, translate edges to steps.

use rustc_hash::FxHashMap;
use tracing::trace;

use tc_catalogue::Catalogue;
use tc_core::VertexId;
use tc_graph::{Route, ShortestPathSolver};

use crate::{RouteEdge, RouteGraphBuilder, RouteResult, RouteStep, RouterResult, RouterSettings};

/// Shortest-time router over a fixed catalogue.
///
/// The stop graph is built once in [`new`](Self::new) and never changes.
/// Shortest-path trees are cached per departure stop inside the solver, so
/// repeated queries from the same stop are cheap.
///
/// The router borrows the catalogue; returned [`RouteResult`]s borrow stop
/// and bus names from it as well.
pub struct TransportRouter<'a> {
    catalogue:      &'a Catalogue,
    settings:       RouterSettings,
    vertex_by_stop: FxHashMap<&'a str, VertexId>,
    solver:         ShortestPathSolver<RouteEdge>,
}

impl<'a> TransportRouter<'a> {
    /// Validate `settings` and build the stop graph for `catalogue`.
    pub fn new(settings: RouterSettings, catalogue: &'a Catalogue) -> RouterResult<Self> {
        settings.validate()?;
        let built = RouteGraphBuilder::new(catalogue, settings).build();
        Ok(Self {
            catalogue,
            settings,
            vertex_by_stop: built.vertex_by_stop,
            solver: ShortestPathSolver::new(built.graph),
        })
    }

    pub fn settings(&self) -> &RouterSettings {
        &self.settings
    }

    pub fn vertex_count(&self) -> usize {
        self.solver.graph().vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.solver.graph().edge_count()
    }

    /// Fastest journey from stop `from` to stop `to`.
    ///
    /// Returns `None` if either name is unknown or `to` cannot be reached.
    /// Both ends are the stops' waiting vertices, so the journey starts with
    /// a `Wait` step unless `from == to`.
    pub fn calc_route(&self, from: &str, to: &str) -> Option<RouteResult<'a>> {
        let (Some(&source), Some(&target)) =
            (self.vertex_by_stop.get(from), self.vertex_by_stop.get(to))
        else {
            trace!(from, to, "unknown stop");
            return None;
        };

        let route = self.solver.build_route(source, target)?;
        Some(self.translate(&route))
    }

    fn translate(&self, route: &Route) -> RouteResult<'a> {
        let graph = self.solver.graph();
        let catalogue = self.catalogue;
        let mut result = RouteResult {
            total_time: 0.0,
            steps: Vec::with_capacity(route.edges.len()),
        };

        for &edge_id in &route.edges {
            let edge = graph.edge(edge_id);
            let step = match edge.payload {
                RouteEdge::Wait { stop } => RouteStep::Wait {
                    stop_name: catalogue.stop(stop).name.as_str(),
                    time:      edge.weight,
                },
                RouteEdge::Ride { bus, span } => RouteStep::Ride {
                    bus_name:   catalogue.bus(bus).name.as_str(),
                    span_count: span,
                    time:       edge.weight,
                },
            };
            result.push(step);
        }

        result
    }
}
