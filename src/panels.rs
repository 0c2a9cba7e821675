//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod card;
pub mod grid;
pub mod info;
pub mod overlay;
pub mod paragraph;

pub use card::PanelCard;
pub use grid::{GridSurface, PanelGrid, PanelRecord, demo_records};
pub use info::InfoPanel;
pub use overlay::HighlightOverlay;
pub use paragraph::ParagraphPanel;
