//! The `Catalogue` — stop and bus arenas plus the real-distance table.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use tc_core::{BusId, GeoPoint, StopId};

use crate::{Bus, BusStats, CatalogueError, CatalogueResult, RouteKind, Stop};

/// Each stop owns two graph vertices, `2i` and `2i + 1`, and both must fit
/// a `VertexId`.
pub const MAX_STOPS: usize = (u32::MAX / 2) as usize;

/// `BusId::INVALID` stays free.
pub const MAX_BUSES: usize = u32::MAX as usize;

/// In-memory transit catalogue.
///
/// Population happens through `add_stop`, `set_distance` and `add_bus`;
/// every query afterwards borrows immutably.  Stops and buses are kept in
/// insertion order, which is also the enumeration order used by the router
/// to assign graph vertices.
#[derive(Debug, Default)]
pub struct Catalogue {
    stops:          Vec<Stop>,
    stop_by_name:   FxHashMap<String, StopId>,
    buses:          Vec<Bus>,
    bus_by_name:    FxHashMap<String, BusId>,
    /// Explicit road distances in metres, keyed by ordered `(from, to)`.
    distances:      FxHashMap<(StopId, StopId), u32>,
    /// Buses passing through each stop, indexed by `StopId`.  May contain
    /// duplicates when a bus visits a stop twice.
    buses_for_stop: Vec<Vec<BusId>>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Add a stop and return its id.
    pub fn add_stop(&mut self, name: impl Into<String>, coords: GeoPoint) -> CatalogueResult<StopId> {
        let name = name.into();
        if self.stop_by_name.contains_key(&name) {
            return Err(CatalogueError::DuplicateStop(name));
        }
        if self.stops.len() >= MAX_STOPS {
            return Err(CatalogueError::CapacityExceeded { what: "stops", limit: MAX_STOPS });
        }
        let id = StopId::from_index(self.stops.len());
        self.stop_by_name.insert(name.clone(), id);
        self.stops.push(Stop { name, coords });
        self.buses_for_stop.push(Vec::new());
        Ok(id)
    }

    /// Record the real road distance from `from` to `to` in metres.
    ///
    /// Distances are directional; the reverse direction falls back to this
    /// value until it is set explicitly.
    pub fn set_distance(&mut self, from: &str, to: &str, metres: u32) -> CatalogueResult<()> {
        let from_id = self.require_stop(from)?;
        let to_id = self.require_stop(to)?;
        if self.distances.contains_key(&(from_id, to_id)) {
            return Err(CatalogueError::DuplicateDistance {
                from: from.to_string(),
                to:   to.to_string(),
            });
        }
        self.distances.insert((from_id, to_id), metres);
        Ok(())
    }

    /// Add a bus route.
    ///
    /// For `RouteKind::Circular` the list must start and end with the same
    /// stop; the closing stop is dropped from storage.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name:       impl Into<String>,
        kind:       RouteKind,
        stop_names: &[S],
    ) -> CatalogueResult<BusId> {
        let name = name.into();
        if self.bus_by_name.contains_key(&name) {
            return Err(CatalogueError::DuplicateBus(name));
        }
        let (Some(first), Some(last)) = (stop_names.first(), stop_names.last()) else {
            return Err(CatalogueError::EmptyRoute(name));
        };
        if kind == RouteKind::Circular && first.as_ref() != last.as_ref() {
            return Err(CatalogueError::UnclosedCircularRoute(name));
        }

        let mut stops = stop_names
            .iter()
            .map(|s| self.require_stop(s.as_ref()))
            .collect::<CatalogueResult<Vec<StopId>>>()?;
        if kind == RouteKind::Circular {
            stops.pop();
        }

        if self.buses.len() >= MAX_BUSES {
            return Err(CatalogueError::CapacityExceeded { what: "buses", limit: MAX_BUSES });
        }
        let id = BusId::from_index(self.buses.len());
        for stop in &stops {
            self.buses_for_stop[stop.index()].push(id);
        }
        debug!(bus = %name, ?kind, stops = stops.len(), "added bus");
        self.bus_by_name.insert(name.clone(), id);
        self.buses.push(Bus { name, kind, stops });
        Ok(id)
    }

    // ── Enumeration and lookup ────────────────────────────────────────────

    /// All stops in insertion order; position `i` has `StopId(i)`.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses in insertion order; position `i` has `BusId(i)`.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// Stops paired with their ids.
    pub fn stops_with_ids(&self) -> impl Iterator<Item = (StopId, &Stop)> + '_ {
        self.stops.iter().enumerate().map(|(i, s)| (StopId::from_index(i), s))
    }

    /// Buses paired with their ids.
    pub fn buses_with_ids(&self) -> impl Iterator<Item = (BusId, &Bus)> + '_ {
        self.buses.iter().enumerate().map(|(i, b)| (BusId::from_index(i), b))
    }

    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.index()]
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_by_name.get(name).copied()
    }

    pub fn bus_id(&self, name: &str) -> Option<BusId> {
        self.bus_by_name.get(name).copied()
    }

    // ── Distances ─────────────────────────────────────────────────────────

    /// Road distance in metres from `from` to `to`.
    ///
    /// Uses the explicit `from → to` value, else the explicit `to → from`
    /// value, else the great-circle distance.
    pub fn real_distance(&self, from: StopId, to: StopId) -> f64 {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .map(|&m| f64::from(m))
            .unwrap_or_else(|| self.crow_distance(from, to))
    }

    /// Great-circle distance in metres between two stops.
    pub fn crow_distance(&self, from: StopId, to: StopId) -> f64 {
        self.stop(from).coords.distance_m(self.stop(to).coords)
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// Statistics for the bus called `name`, or `None` if it does not exist.
    pub fn bus_stats(&self, name: &str) -> Option<BusStats> {
        let bus = self.bus(self.bus_id(name)?);
        let stops = &bus.stops;

        let unique_stop_count = stops.iter().collect::<FxHashSet<_>>().len();

        // One-way pass is the same for both kinds.
        let (mut route_length, mut crow_length) = stops
            .windows(2)
            .map(|w| (self.real_distance(w[0], w[1]), self.crow_distance(w[0], w[1])))
            .fold((0.0, 0.0), |(r, c), (dr, dc)| (r + dr, c + dc));

        match bus.kind {
            RouteKind::Linear => {
                // Way back uses reverse-direction real distances.
                route_length += stops
                    .windows(2)
                    .map(|w| self.real_distance(w[1], w[0]))
                    .sum::<f64>();
                crow_length *= 2.0;
            }
            RouteKind::Circular => {
                if let (Some(&first), Some(&last)) = (stops.first(), stops.last()) {
                    route_length += self.real_distance(last, first);
                    crow_length += self.crow_distance(last, first);
                }
            }
        }

        Some(BusStats {
            stop_count: bus.trip_stop_count(),
            unique_stop_count,
            route_length,
            crow_length,
        })
    }

    /// Sorted, de-duplicated names of buses passing through the stop called
    /// `name`.
    ///
    /// Returns `None` for an unknown stop and an empty `Vec` for a stop no
    /// bus serves.
    pub fn buses_for_stop(&self, name: &str) -> Option<Vec<&str>> {
        let stop = self.stop_id(name)?;
        let mut names: Vec<&str> = self.buses_for_stop[stop.index()]
            .iter()
            .map(|&b| self.bus(b).name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        Some(names)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn require_stop(&self, name: &str) -> CatalogueResult<StopId> {
        self.stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_string()))
    }
}
