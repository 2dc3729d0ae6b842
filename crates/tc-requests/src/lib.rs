//! `tc-requests` — batch front ends for the catalogue, router and map.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`document`] | `Document`, `BaseRequest`, `StatRequest`, `RoutingSettings` |
//! | [`handler`]  | `RequestHandler`, `process_document`                       |
//! | [`response`] | `Response`, `RouteItem` — serialised answers               |
//! | [`text`]     | Line-oriented `Stop`/`Bus` input and plain-text answers    |
//! | [`error`]    | `RequestError`, `RequestResult<T>`                         |
//!
//! # Processing order
//!
//! 1. Parse the whole document.
//! 2. Add all stops, then all road distances, then all buses.
//! 3. Build the router if `routing_settings` is present and validate
//!    `render_settings` if present.
//! 4. Answer stat requests in order.  Unknown names, unreachable stops and
//!    requests whose settings are missing answer
//!    `{"request_id": .., "error_message": "not found"}`.
//!
//! The text front end follows the same order without routing or maps.

pub mod document;
pub mod error;
pub mod handler;
pub mod response;
pub mod text;


pub use document::{populate, BaseRequest, Document, RoutingSettings, StatRequest};
pub use error::{RequestError, RequestResult};
pub use handler::{process_document, RequestHandler};
pub use response::{Response, RouteItem};
pub use text::{process_text, TextInput, TextQuery};
