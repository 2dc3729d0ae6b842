//! Catalogue entities.

use tc_core::{GeoPoint, StopId};

/// A named location.  Names are unique within a catalogue.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub name:   String,
    pub coords: GeoPoint,
}

/// How a bus traverses its stop list.
///
/// With stored stops `S[0..n]`:
///
/// ```text
/// Linear:   S[0] → S[1] → … → S[n-1] → S[n-2] → … → S[0]
/// Circular: S[0] → S[1] → … → S[n-1] → S[0]
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteKind {
    Linear,
    Circular,
}

/// A named bus route.
///
/// For circular routes the closing stop (equal to `stops[0]`) is not
/// repeated in `stops`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bus {
    pub name:  String,
    pub kind:  RouteKind,
    pub stops: Vec<StopId>,
}

impl Bus {
    /// Stops visited on one full trip, counting the first stop again at the
    /// end: `2n - 1` for linear routes, `n + 1` for circular ones.
    pub fn trip_stop_count(&self) -> usize {
        let n = self.stops.len();
        match self.kind {
            RouteKind::Linear => (2 * n).saturating_sub(1),
            RouteKind::Circular => n + 1,
        }
    }
}

/// Statistics for one bus route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusStats {
    /// Stops on a full trip, see [`Bus::trip_stop_count`].
    pub stop_count:        usize,
    pub unique_stop_count: usize,
    /// Full trip length in metres using real distances.
    pub route_length:      f64,
    /// Full trip length in metres as the crow flies.
    pub crow_length:       f64,
}

impl BusStats {
    /// Ratio of real to straight-line length.  `1.0` when the straight-line
    /// length is zero (single-stop routes, coincident stops).
    pub fn curvature(&self) -> f64 {
        if self.crow_length > 0.0 {
            self.route_length / self.crow_length
        } else {
            1.0
        }
    }
}
