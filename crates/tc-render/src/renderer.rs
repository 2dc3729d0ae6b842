//! Catalogue → SVG map.

use tracing::debug;

use tc_catalogue::{Bus, Catalogue, RouteKind, Stop};
use tc_core::StopId;

use crate::svg::Styled;
use crate::{Circle, Color, LineCap, LineJoin, Point, Polyline, RenderResult, RenderSettings, SphereProjector, SvgDocument, Text};

const LABEL_FONT_FAMILY: &str = "Verdana";
const BUS_LABEL_FONT_WEIGHT: &str = "bold";
const STOP_CIRCLE_FILL: &str = "white";
const STOP_LABEL_FILL: &str = "black";

/// Draws every bus route and served stop of a catalogue.
///
/// Buses with no stops are skipped and do not take a palette colour.  Stops
/// no bus serves are neither drawn nor used for the projection.
pub struct MapRenderer<'a> {
    catalogue: &'a Catalogue,
    settings:  RenderSettings,
}

impl<'a> MapRenderer<'a> {
    /// Validate `settings` and bind them to `catalogue`.
    pub fn new(catalogue: &'a Catalogue, settings: RenderSettings) -> RenderResult<Self> {
        settings.validate()?;
        Ok(Self { catalogue, settings })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Build the map.
    pub fn render(&self) -> SvgDocument {
        let catalogue = self.catalogue;
        let s = &self.settings;

        let projector = SphereProjector::new(
            catalogue
                .buses()
                .iter()
                .flat_map(|bus| bus.stops.iter())
                .map(|&stop| catalogue.stop(stop).coords),
            s.width,
            s.height,
            s.padding,
        );

        let mut buses: Vec<&Bus> = catalogue.buses().iter().filter(|b| !b.stops.is_empty()).collect();
        buses.sort_by(|a, b| a.name.cmp(&b.name));

        let mut stops: Vec<StopId> = buses.iter().flat_map(|b| b.stops.iter().copied()).collect();
        stops.sort_by(|&a, &b| catalogue.stop(a).name.cmp(&catalogue.stop(b).name));
        stops.dedup();
        let stops: Vec<&Stop> = stops.into_iter().map(|id| catalogue.stop(id)).collect();

        let mut doc = SvgDocument::new();

        // ── Route lines ───────────────────────────────────────────────────
        for (bus, color) in buses.iter().zip(s.color_palette.iter().cycle()) {
            doc.push(self.route_line(&projector, bus, color));
        }

        // ── Bus labels ────────────────────────────────────────────────────
        for (bus, color) in buses.iter().zip(s.color_palette.iter().cycle()) {
            for stop in terminals(bus) {
                let at = projector.project(catalogue.stop(stop).coords);
                let label = Text::new(bus.name.as_str(), at)
                    .offset(s.bus_label_offset)
                    .font_size(s.bus_label_font_size)
                    .font_family(LABEL_FONT_FAMILY)
                    .font_weight(BUS_LABEL_FONT_WEIGHT);
                doc.push(self.underlayer(label.clone()));
                doc.push(label.fill(color.clone()));
            }
        }

        // ── Stop circles ──────────────────────────────────────────────────
        for stop in &stops {
            doc.push(Circle::new(projector.project(stop.coords), s.stop_radius).fill(STOP_CIRCLE_FILL));
        }

        // ── Stop labels ───────────────────────────────────────────────────
        for stop in &stops {
            let label = Text::new(stop.name.as_str(), projector.project(stop.coords))
                .offset(s.stop_label_offset)
                .font_size(s.stop_label_font_size)
                .font_family(LABEL_FONT_FAMILY);
            doc.push(self.underlayer(label.clone()));
            doc.push(label.fill(STOP_LABEL_FILL));
        }

        debug!(
            buses    = buses.len(),
            stops    = stops.len(),
            elements = doc.len(),
            zoom     = projector.zoom(),
            "rendered map"
        );
        doc
    }

    /// Shorthand for `self.render().to_string()`.
    pub fn render_svg(&self) -> String {
        self.render().to_string()
    }

    /// Full trip as one polyline: out and back for linear buses, closed
    /// loop for circular ones.
    fn route_line(&self, projector: &SphereProjector, bus: &Bus, color: &Color) -> Polyline {
        let trip: Vec<StopId> = match bus.kind {
            RouteKind::Linear => bus
                .stops
                .iter()
                .chain(bus.stops.iter().rev().skip(1))
                .copied()
                .collect(),
            RouteKind::Circular => bus.stops.iter().chain(bus.stops.first()).copied().collect(),
        };
        let points: Vec<Point> = trip
            .into_iter()
            .map(|stop| projector.project(self.catalogue.stop(stop).coords))
            .collect();

        Polyline::new(points)
            .fill(Color::None)
            .stroke(color.clone())
            .stroke_width(self.settings.line_width)
            .line_cap(LineCap::Round)
            .line_join(LineJoin::Round)
    }

    fn underlayer(&self, text: Text) -> Text {
        let s = &self.settings;
        text.fill(s.underlayer_color.clone())
            .stroke(s.underlayer_color.clone())
            .stroke_width(s.underlayer_width)
            .line_cap(LineCap::Round)
            .line_join(LineJoin::Round)
    }
}

/// Stops that get a bus name label: the first stop, plus the last one for a
/// linear bus that ends somewhere else.
fn terminals(bus: &Bus) -> impl Iterator<Item = StopId> {
    let first = bus.stops.first().copied();
    let last = match bus.kind {
        RouteKind::Linear => bus.stops.last().copied().filter(|&l| Some(l) != first),
        RouteKind::Circular => None,
    };
    first.into_iter().chain(last)
}
