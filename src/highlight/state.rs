//! src/highlight/state.rs
//!
//! Per-session values owned by the controller: pointer, nearest panel,
//! the highlight itself and the fallback panel size.

/// Pointer position relative to the container origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
}

/// Nearest panel to the pointer at the last move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestPanel {
    /// Display index of the panel in the grid.
    pub index: usize,
    pub distance: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Width and height of a representative panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelSize {
    pub width: f64,
    pub height: f64,
}

/// Where and how large the floating highlight is.
///
/// `(x, y)` is the highlight's center. When `snapped` it equals the closest
/// panel's center, otherwise the raw pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HighlightState {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub snapped: bool,
}

impl HighlightState {
    /// Dimensions scaled for painting; position is left untouched.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
            ..*self
        }
    }
}
