//! `tc-core` — foundational types for the transit catalogue workspace.
//!
//! This crate is a dependency of every other `tc-*` crate.  It has no `tc-*`
//! dependencies and no external ones apart from the optional `serde`.
//!
//! # What lives here
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`ids`]   | `StopId`, `BusId`, `VertexId`, `EdgeId`               |
//! | [`geo`]   | `GeoPoint`, great-circle distance                     |
//! | [`num`]   | `Significant` — six-significant-digit number output   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geo;
pub mod ids;
pub mod num;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{BusId, EdgeId, StopId, VertexId};
pub use num::Significant;
