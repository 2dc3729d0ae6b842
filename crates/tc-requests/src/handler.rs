//! Stat request dispatch over a populated catalogue.

use std::cell::OnceCell;

use tracing::{debug, info};

use tc_catalogue::Catalogue;
use tc_render::{MapRenderer, RenderSettings};
use tc_router::{RouterSettings, TransportRouter};

use crate::{Document, RequestResult, Response, StatRequest};

/// Answers stat requests against a fixed catalogue.
///
/// The router and the map renderer are optional: without routing settings
/// every `Route` request answers "not found", and without render settings
/// every `Map` request does.
pub struct RequestHandler<'a> {
    catalogue: &'a Catalogue,
    router:    Option<TransportRouter<'a>>,
    renderer:  Option<MapRenderer<'a>>,
    /// Rendered on the first `Map` request.
    map:       OnceCell<String>,
}

impl<'a> RequestHandler<'a> {
    /// Build the handler, constructing the stop graph if `settings` is given.
    pub fn new(catalogue: &'a Catalogue, settings: Option<RouterSettings>) -> RequestResult<Self> {
        let router = settings
            .map(|s| TransportRouter::new(s, catalogue))
            .transpose()?;
        if let Some(router) = &router {
            debug!(
                vertices = router.vertex_count(),
                edges    = router.edge_count(),
                "router ready"
            );
        }
        Ok(Self { catalogue, router, renderer: None, map: OnceCell::new() })
    }

    /// Enable `Map` requests.  Fails if the settings are invalid.
    pub fn with_render_settings(mut self, settings: RenderSettings) -> RequestResult<Self> {
        self.renderer = Some(MapRenderer::new(self.catalogue, settings)?);
        Ok(self)
    }

    pub fn has_router(&self) -> bool {
        self.router.is_some()
    }

    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Answer one request.
    pub fn answer(&self, request: &StatRequest) -> Response<'a> {
        let id = request.id();
        let response = match request {
            StatRequest::Stop { name, .. } => self
                .catalogue
                .buses_for_stop(name)
                .map(|buses| Response::Stop { request_id: id, buses }),
            StatRequest::Bus { name, .. } => self
                .catalogue
                .bus_stats(name)
                .map(|stats| Response::bus(id, &stats)),
            StatRequest::Route { from, to, .. } => self
                .router
                .as_ref()
                .and_then(|router| router.calc_route(from, to))
                .map(|route| Response::route(id, &route)),
            StatRequest::Map { .. } => self.map().map(|svg| Response::Map {
                request_id: id,
                map:        svg.to_string(),
            }),
        };
        response.unwrap_or_else(|| Response::not_found(id))
    }

    /// Answer every request, preserving order.
    pub fn answer_all(&self, requests: &[StatRequest]) -> Vec<Response<'a>> {
        requests.iter().map(|r| self.answer(r)).collect()
    }

    fn map(&self) -> Option<&str> {
        let renderer = self.renderer.as_ref()?;
        Some(self.map.get_or_init(|| renderer.render_svg()).as_str())
    }
}

/// Run a whole document: populate a catalogue, answer the stat requests and
/// return the responses as a JSON array.
pub fn process_document(document: &Document) -> RequestResult<serde_json::Value> {
    let mut catalogue = Catalogue::new();
    document.populate(&mut catalogue)?;

    let settings = document
        .routing_settings
        .map(|s| s.to_router_settings())
        .transpose()?;
    let mut handler = RequestHandler::new(&catalogue, settings)?;
    if let Some(render) = &document.render_settings {
        handler = handler.with_render_settings(render.clone())?;
    }
    let responses = handler.answer_all(&document.stat_requests);

    let not_found = responses
        .iter()
        .filter(|r| matches!(r, Response::NotFound { .. }))
        .count();
    info!(
        stops     = catalogue.stops().len(),
        buses     = catalogue.buses().len(),
        requests  = responses.len(),
        not_found,
        routing   = handler.has_router(),
        rendering = handler.has_renderer(),
        "processed request document"
    );

    Ok(serde_json::to_value(&responses)?)
}
