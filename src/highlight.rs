//! src/highlight.rs
//!
//! Top-level `highlight` module exposing thresholds, geometry and the controller.

pub mod config;
pub mod controller;
pub mod geometry;
pub mod state;

/// Re-exports
pub use config::HighlightConfig;
pub use controller::{ControllerEvent, Phase, ProximityHighlight, RenderSurface};
pub use geometry::{BoundingBox, Origin, Point, closest_panel, distance_to_rect};
pub use state::{ClosestPanel, HighlightState, PanelSize, PointerState};
