//! Construction of the stop graph from catalogue content.
//!
//! # Edges
//!
//! 1. One `Wait` edge per stop, `wait(s) → board(s)`, weight = wait time.
//! 2. For each bus with at least two stored stops `s[0..n]`, one `Ride`
//!    edge `board(s[i]) → wait(s[j])` for every `i < j`, weighted by the sum
//!    of real leg distances from `s[i]` to `s[j]` in travel direction.
//! 3. Linear buses also get `board(s[j]) → wait(s[i])`, measured with the
//!    reverse-direction legs `s[k+1] → s[k]` (real distances may be
//!    asymmetric).
//! 4. Circular buses also get `board(s[i]) → wait(s[0])` for every `i ≥ 1`,
//!    covering the legs up to `s[n-1]` plus the closing leg `s[n-1] → s[0]`.
//!
//! Every pair reachable without a transfer gets its own edge, so a route
//! with `n` stops produces `O(n²)` ride edges.

use rustc_hash::FxHashMap;
use tracing::debug;

use tc_catalogue::{Bus, Catalogue, RouteKind};
use tc_core::{BusId, StopId, VertexId};
use tc_graph::WeightedGraph;

use crate::RouterSettings;

// ── RouteEdge ─────────────────────────────────────────────────────────────────

/// Payload of a stop-graph edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RouteEdge {
    /// Dwell at `stop` before boarding.
    Wait { stop: StopId },
    /// Ride `bus` for `span` stops without a transfer.
    Ride { bus: BusId, span: u32 },
}

// ── RouteGraph ────────────────────────────────────────────────────────────────

/// Output of [`RouteGraphBuilder::build`]: the immutable stop graph and the
/// stop-name → waiting-vertex index.
pub struct RouteGraph<'a> {
    pub graph:          WeightedGraph<RouteEdge>,
    pub vertex_by_stop: FxHashMap<&'a str, VertexId>,
}

// ── RouteGraphBuilder ─────────────────────────────────────────────────────────

/// Reads the catalogue once and emits a [`RouteGraph`].
pub struct RouteGraphBuilder<'a> {
    catalogue: &'a Catalogue,
    settings:  RouterSettings,
}

impl<'a> RouteGraphBuilder<'a> {
    pub fn new(catalogue: &'a Catalogue, settings: RouterSettings) -> Self {
        Self { catalogue, settings }
    }

    /// Build the stop graph.
    ///
    /// Vertex ids are assigned densely in stop enumeration order:
    /// `StopId(i)` owns `2*i` (waiting) and `2*i + 1` (boarded).
    pub fn build(self) -> RouteGraph<'a> {
        let stops = self.catalogue.stops();
        let mut graph = WeightedGraph::with_capacity(stops.len() * 2, self.edge_estimate());
        let mut vertex_by_stop = FxHashMap::default();
        vertex_by_stop.reserve(stops.len());

        let wait_secs = self.settings.wait_secs();
        for (id, stop) in self.catalogue.stops_with_ids() {
            vertex_by_stop.insert(stop.name.as_str(), id.wait_vertex());
            graph.add_edge(id.wait_vertex(), id.board_vertex(), wait_secs, RouteEdge::Wait { stop: id });
        }

        for (id, bus) in self.catalogue.buses_with_ids() {
            self.add_bus_edges(&mut graph, id, bus);
        }

        debug!(
            stops    = stops.len(),
            buses    = self.catalogue.buses().len(),
            vertices = graph.vertex_count(),
            edges    = graph.edge_count(),
            "built stop graph"
        );

        RouteGraph { graph, vertex_by_stop }
    }

    fn add_bus_edges(&self, graph: &mut WeightedGraph<RouteEdge>, id: BusId, bus: &Bus) {
        let stops = &bus.stops;
        let n = stops.len();
        if n < 2 {
            return;
        }

        let forward = self.leg_lengths(stops, false);
        let backward = match bus.kind {
            RouteKind::Linear => Some(self.leg_lengths(stops, true)),
            RouteKind::Circular => None,
        };

        for i in 0..n - 1 {
            let mut there = 0.0;
            let mut back = 0.0;
            for j in i + 1..n {
                there += forward[j - 1];
                self.add_ride(graph, id, stops[i], stops[j], j - i, there);
                if let Some(backward) = &backward {
                    back += backward[j - 1];
                    self.add_ride(graph, id, stops[j], stops[i], j - i, back);
                }
            }
        }

        if bus.kind == RouteKind::Circular {
            let closing = self.catalogue.real_distance(stops[n - 1], stops[0]);
            for i in 1..n {
                self.add_ride(graph, id, stops[i], stops[0], n - i, wrap_length(&forward[i..], closing));
            }
        }
    }

    fn add_ride(
        &self,
        graph:  &mut WeightedGraph<RouteEdge>,
        bus:    BusId,
        from:   StopId,
        to:     StopId,
        span:   usize,
        metres: f64,
    ) {
        graph.add_edge(
            from.board_vertex(),
            to.wait_vertex(),
            self.settings.ride_secs(metres),
            RouteEdge::Ride {
                bus,
                span: u32::try_from(span).expect("bus stop count exceeds u32 range"),
            },
        );
    }

    /// Real distance of each consecutive leg `k → k+1`, or `k+1 → k` when
    /// `reverse` is set.  Length `stops.len() - 1`.
    fn leg_lengths(&self, stops: &[StopId], reverse: bool) -> Vec<f64> {
        stops
            .windows(2)
            .map(|w| {
                if reverse {
                    self.catalogue.real_distance(w[1], w[0])
                } else {
                    self.catalogue.real_distance(w[0], w[1])
                }
            })
            .collect()
    }

    /// Number of edges [`build`](Self::build) will add.
    fn edge_estimate(&self) -> usize {
        let rides: usize = self
            .catalogue
            .buses()
            .iter()
            .filter(|b| b.stops.len() >= 2)
            .map(|b| {
                let n = b.stops.len();
                let pairs = n * (n - 1) / 2;
                match b.kind {
                    RouteKind::Linear => 2 * pairs,
                    RouteKind::Circular => pairs + n - 1,
                }
            })
            .sum();
        self.catalogue.stops().len() + rides
    }
}

/// Length of a wrap ride: the remaining forward legs in travel order, then
/// the closing leg.
fn wrap_length(legs: &[f64], closing: f64) -> f64 {
    legs.iter().sum::<f64>() + closing
}
