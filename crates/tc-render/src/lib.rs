//! `tc-render` — SVG map of bus routes and stops.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`svg`]       | `SvgDocument`, `Circle`, `Polyline`, `Text`, `Color`     |
//! | [`projector`] | `SphereProjector` — lat/lon to canvas coordinates        |
//! | [`settings`]  | `RenderSettings` — canvas size, widths, fonts, palette   |
//! | [`renderer`]  | `MapRenderer` — catalogue to `SvgDocument`               |
//! | [`error`]     | `RenderError`, `RenderResult<T>`                         |
//!
//! # Layers
//!
//! Drawn bottom to top, buses sorted by name and stops by name:
//!
//! 1. one route polyline per bus, stroked with the next palette colour;
//! 2. bus name labels at the terminal stops, each an underlayer then a
//!    coloured label;
//! 3. a white circle per stop served by at least one bus;
//! 4. stop name labels, underlayer then black label.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | `Deserialize` for `RenderSettings`; colours accept `"name"`, `[r, g, b]` or `[r, g, b, a]` |

pub mod error;
pub mod projector;
pub mod renderer;
pub mod settings;
pub mod svg;


pub use error::{RenderError, RenderResult};
pub use projector::SphereProjector;
pub use renderer::MapRenderer;
pub use settings::RenderSettings;
pub use svg::{Circle, Color, Element, LineCap, LineJoin, Point, Polyline, Stroke, Styled, SvgDocument, Text};
