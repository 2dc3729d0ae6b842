//! `tc-router` — shortest-time bus routing between catalogue stops.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`settings`] | `RouterSettings` — bus velocity and uniform wait time     |
//! | [`builder`]  | `RouteGraphBuilder`, `RouteGraph`, `RouteEdge`            |
//! | [`route`]    | `RouteResult`, `RouteStep`                                |
//! | [`router`]   | `TransportRouter` — name lookup, solve, translate         |
//! | [`error`]    | `RouterError`, `RouterResult<T>`                          |
//!
//! # Graph model
//!
//! Every stop contributes two vertices:
//!
//! ```text
//!   wait(s) = 2*i  ──Wait(bus_wait_time)──▶  board(s) = 2*i + 1
//! ```
//!
//! A traveller standing at a stop is at `wait(s)`.  Boarding costs the
//! uniform wait time.  From `board(s_i)` a `Ride` edge leads to `wait(s_j)`
//! for every later stop on the same bus, so a transfer always pays the wait
//! again while staying on the bus does not.
//!
//! # Time units
//!
//! All weights and durations are **seconds** (`f64`).  The JSON layer
//! converts them to minutes when printing.

pub mod builder;
pub mod error;
pub mod route;
pub mod router;
pub mod settings;

#[cfg(test)]
mod tests;

pub use builder::{RouteEdge, RouteGraph, RouteGraphBuilder};
pub use error::{RouterError, RouterResult};
pub use route::{RouteResult, RouteStep};
pub use router::TransportRouter;
pub use settings::RouterSettings;
