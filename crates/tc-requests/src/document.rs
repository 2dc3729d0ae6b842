//! Input document model.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "base_requests": [
//!     {"type": "Stop", "name": "A", "latitude": 43.58, "longitude": 39.71,
//!      "road_distances": {"B": 1200}},
//!     {"type": "Bus", "name": "14", "stops": ["A", "B", "A"], "is_roundtrip": true}
//!   ],
//!   "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
//!   "render_settings": {"width": 1200, "height": 800, "padding": 50, ...},
//!   "stat_requests": [
//!     {"id": 1, "type": "Stop", "name": "A"},
//!     {"id": 2, "type": "Bus", "name": "14"},
//!     {"id": 3, "type": "Route", "from": "A", "to": "B"},
//!     {"id": 4, "type": "Map"}
//!   ]
//! }
//! ```
//!
//! `routing_settings`, `render_settings` and `stat_requests` may be omitted.
//! See [`RenderSettings`] for the render section.  For a round-trip
//! bus the stop list must end with its first stop.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use tc_catalogue::{Catalogue, RouteKind};
use tc_core::GeoPoint;
use tc_render::RenderSettings;
use tc_router::{RouterResult, RouterSettings};

use crate::RequestResult;

// ── Document ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    pub base_requests:    Vec<BaseRequest>,
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,
    #[serde(default)]
    pub render_settings:  Option<RenderSettings>,
    #[serde(default)]
    pub stat_requests:    Vec<StatRequest>,
}

impl Document {
    /// Load a document from a JSON file.
    pub fn from_path(path: &Path) -> RequestResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Like [`from_path`](Self::from_path) but accepts any `Read` source.
    pub fn from_reader<R: Read>(reader: R) -> RequestResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(text: &str) -> RequestResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Populate `catalogue` from the base requests, see [`populate`].
    pub fn populate(&self, catalogue: &mut Catalogue) -> RequestResult<()> {
        populate(&self.base_requests, catalogue)
    }
}

/// Apply base requests to `catalogue`.
///
/// Applied in three passes (stops, then road distances, then buses) so a
/// request may name a stop declared later in the list.
pub fn populate(base_requests: &[BaseRequest], catalogue: &mut Catalogue) -> RequestResult<()> {
    for req in base_requests {
        if let BaseRequest::Stop { name, latitude, longitude, .. } = req {
            catalogue.add_stop(name.as_str(), GeoPoint::new(*latitude, *longitude))?;
        }
    }
    for req in base_requests {
        if let BaseRequest::Stop { name, road_distances, .. } = req {
            for (to, &metres) in road_distances {
                catalogue.set_distance(name, to, metres)?;
            }
        }
    }
    for req in base_requests {
        if let BaseRequest::Bus { name, stops, is_roundtrip } = req {
            let kind = if *is_roundtrip { RouteKind::Circular } else { RouteKind::Linear };
            catalogue.add_bus(name.as_str(), kind, stops.as_slice())?;
        }
    }
    Ok(())
}

// ── Requests ──────────────────────────────────────────────────────────────────

/// A request that adds content to the catalogue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name:           String,
        latitude:       f64,
        longitude:      f64,
        /// Road distances in metres to neighbouring stops, by name.
        #[serde(default)]
        road_distances: BTreeMap<String, u32>,
    },
    Bus {
        name:         String,
        stops:        Vec<String>,
        is_roundtrip: bool,
    },
}

/// A query answered from the populated catalogue.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Stop { id: i64, name: String },
    Bus { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    /// The whole network as an SVG document.
    Map { id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Stop { id, .. }
            | StatRequest::Bus { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}

/// `routing_settings` section: wait in minutes, velocity in km/h.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RoutingSettings {
    pub bus_wait_time: f64,
    pub bus_velocity:  f64,
}

impl RoutingSettings {
    pub fn to_router_settings(self) -> RouterResult<RouterSettings> {
        RouterSettings::new(self.bus_velocity, self.bus_wait_time)
    }
}
