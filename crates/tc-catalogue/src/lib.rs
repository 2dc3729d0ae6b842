//! `tc-catalogue` — stops, buses, real distances, and route statistics.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`domain`]    | `Stop`, `Bus`, `RouteKind`, `BusStats`                 |
//! | [`catalogue`] | `Catalogue` — arenas, name indices, distance table     |
//! | [`error`]     | `CatalogueError`, `CatalogueResult<T>`                 |
//!
//! # Arena model
//!
//! Stops and buses are stored in `Vec`s and referenced by [`StopId`] /
//! [`BusId`].  Nothing is ever removed, so ids stay valid for the lifetime
//! of the catalogue and downstream crates (the router) may hold them freely.
//!
//! [`StopId`]: tc_core::StopId
//! [`BusId`]: tc_core::BusId

pub mod catalogue;
pub mod domain;
pub mod error;


pub use catalogue::Catalogue;
pub use domain::{Bus, BusStats, RouteKind, Stop};
pub use error::{CatalogueError, CatalogueResult};
