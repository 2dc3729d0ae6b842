//! Response objects written back as a JSON array.
//!
//! Route times are printed in **minutes**; the router works in seconds.
//! Map answers carry the whole SVG document as one string.

use serde::Serialize;

use tc_catalogue::BusStats;
use tc_router::{RouteResult, RouteStep};

const NOT_FOUND: &str = "not found";

/// Answer to one stat request.  Names borrow from the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response<'a> {
    Stop {
        request_id: i64,
        buses:      Vec<&'a str>,
    },
    Bus {
        request_id:        i64,
        curvature:         f64,
        route_length:      f64,
        stop_count:        usize,
        unique_stop_count: usize,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items:      Vec<RouteItem<'a>>,
    },
    Map {
        request_id: i64,
        map:        String,
    },
    NotFound {
        request_id:    i64,
        error_message: &'static str,
    },
}

impl<'a> Response<'a> {
    pub fn not_found(request_id: i64) -> Self {
        Response::NotFound { request_id, error_message: NOT_FOUND }
    }

    pub fn bus(request_id: i64, stats: &BusStats) -> Self {
        Response::Bus {
            request_id,
            curvature:         stats.curvature(),
            route_length:      stats.route_length,
            stop_count:        stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
        }
    }

    pub fn route(request_id: i64, route: &RouteResult<'a>) -> Self {
        Response::Route {
            request_id,
            total_time: to_minutes(route.total_time),
            items:      route.steps.iter().map(RouteItem::from).collect(),
        }
    }

    pub fn request_id(&self) -> i64 {
        match self {
            Response::Stop { request_id, .. }
            | Response::Bus { request_id, .. }
            | Response::Route { request_id, .. }
            | Response::Map { request_id, .. }
            | Response::NotFound { request_id, .. } => *request_id,
        }
    }
}

/// One step of a route answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem<'a> {
    Wait {
        stop_name: &'a str,
        time:      f64,
    },
    Bus {
        bus:        &'a str,
        span_count: u32,
        time:       f64,
    },
}

impl<'a> From<&RouteStep<'a>> for RouteItem<'a> {
    fn from(step: &RouteStep<'a>) -> Self {
        match *step {
            RouteStep::Wait { stop_name, time } => RouteItem::Wait {
                stop_name,
                time: to_minutes(time),
            },
            RouteStep::Ride { bus_name, span_count, time } => RouteItem::Bus {
                bus: bus_name,
                span_count,
                time: to_minutes(time),
            },
        }
    }
}

#[inline]
fn to_minutes(secs: f64) -> f64 {
    secs / 60.0
}
