//! src/highlight/config.rs
//!
//! Thresholds driving snap and size interpolation.
//!
//! All distances are in surface units (see `config::CellMetrics` for how
//! terminal cells map onto them).

#[derive(Clone, Debug, PartialEq)]
pub struct HighlightConfig {
    /// Below this distance the highlight snaps onto the closest panel at full size.
    pub snap_distance: f64,

    /// At or beyond this distance the highlight is clamped to `min_scale`.
    pub max_distance: f64,

    /// Size floor, as a fraction of the closest panel's size.
    pub min_scale: f64,

    /// Presentation-only shrink applied when painting the highlight.
    pub render_scale: f64,
}

impl HighlightConfig {
    /// Create a new `HighlightConfig`.
    pub fn new(snap_distance: f64, max_distance: f64, min_scale: f64, render_scale: f64) -> Self {
        Self {
            snap_distance,
            max_distance,
            min_scale,
            render_scale,
        }
    }

    /// Whether a panel at `distance` captures the highlight.
    pub fn snaps(&self, distance: f64) -> bool {
        distance < self.snap_distance
    }

    /// Size multiplier for the closest panel's distance.
    ///
    /// `1.0` below the snap distance, `min_scale` past `max_distance`, and a
    /// linear ramp between the two. Non-increasing in `distance`.
    pub fn size_multiplier(&self, distance: f64) -> f64 {
        if distance < self.snap_distance {
            1.0
        } else if distance > self.max_distance {
            self.min_scale
        } else {
            let span = self.max_distance - self.snap_distance;
            if span <= 0.0 {
                // degenerate ramp: the only value in range is the snap edge
                return 1.0;
            }
            let t = (distance - self.snap_distance) / span;
            self.min_scale + (1.0 - self.min_scale) * (1.0 - t)
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            snap_distance: 50.0,
            max_distance: 200.0,
            min_scale: 0.4,
            render_scale: 0.95,
        }
    }
}
