//! Flat projection of stop coordinates onto the canvas.

use tc_core::GeoPoint;

use crate::Point;

/// Spans narrower than this (in degrees) do not constrain the zoom.
const EPSILON: f64 = 1e-6;

/// Maps geographic points into a `width × height` canvas with `padding` on
/// every side.
///
/// Longitude grows to the right and latitude grows upwards, so the
/// north-west corner of the bounding box lands at `(padding, padding)`.
/// One zoom factor applies to both axes: the smaller of the two that fit
/// the box horizontally and vertically.  An axis whose span is below
/// `1e-6` degrees is ignored; when both are, the zoom is zero and every
/// point projects to `(padding, padding)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphereProjector {
    padding: f64,
    min_lon: f64,
    max_lat: f64,
    zoom:    f64,
}

impl SphereProjector {
    pub fn new(
        points:  impl IntoIterator<Item = GeoPoint>,
        width:   f64,
        height:  f64,
        padding: f64,
    ) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self { padding, min_lon: 0.0, max_lat: 0.0, zoom: 0.0 };
        };

        let (mut min_lon, mut max_lon) = (first.lon, first.lon);
        let (mut min_lat, mut max_lat) = (first.lat, first.lat);
        for p in points {
            min_lon = min_lon.min(p.lon);
            max_lon = max_lon.max(p.lon);
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
        }

        let zoom_for = |span: f64, side: f64| {
            (span.abs() >= EPSILON).then(|| (side - 2.0 * padding) / span)
        };
        let zoom = match (zoom_for(max_lon - min_lon, width), zoom_for(max_lat - min_lat, height)) {
            (Some(w), Some(h)) => w.min(h),
            (Some(z), None) | (None, Some(z)) => z,
            (None, None) => 0.0,
        };

        Self { padding, min_lon, max_lat, zoom }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn project(&self, p: GeoPoint) -> Point {
        Point {
            x: (p.lon - self.min_lon) * self.zoom + self.padding,
            y: (self.max_lat - p.lat) * self.zoom + self.padding,
        }
    }
}
