//! src/highlight/controller.rs
//!
//! Pointer state machine and per-move highlight computation.
//!
//! The controller never caches panel boxes between moves: every move asks the
//! surface for fresh geometry, so panels that reflowed since the last resize
//! are still measured correctly. Resize only refreshes the fallback size used
//! before the first successful computation.

use tracing::{debug, trace};

use super::config::HighlightConfig;
use super::geometry::{BoundingBox, Origin, Point, closest_panel};
use super::state::{ClosestPanel, HighlightState, PanelSize, PointerState};

/// What the controller needs from whatever draws the panels.
pub trait RenderSurface {
    /// Current panel boxes, relative to the container origin, in display order.
    fn bounding_boxes(&self) -> Vec<BoundingBox>;

    /// Container origin, in the coordinate space pointer events arrive in.
    fn container_origin(&self) -> Origin;
}

/// Events the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControllerEvent {
    /// Pointer moved; coordinates in the same space as `container_origin`.
    Move { client_x: f64, client_y: f64 },
    Enter,
    Leave,
    Resize,
}

/// Lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Pointer outside the container; nothing rendered.
    Idle,
    /// Pointer inside the container; highlight rendered.
    Tracking,
    /// Torn down; every further event is ignored.
    Detached,
}

/// Owns the pointer, hover flag, fallback size and highlight for one mounted grid.
#[derive(Debug)]
pub struct ProximityHighlight {
    config: HighlightConfig,
    phase: Phase,
    pointer: PointerState,
    panel_size_fallback: PanelSize,
    closest: Option<ClosestPanel>,
    highlight: HighlightState,
}

impl ProximityHighlight {
    /// Create an unmounted-but-idle controller.
    pub fn new(config: HighlightConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            pointer: PointerState::default(),
            panel_size_fallback: PanelSize::default(),
            closest: None,
            highlight: HighlightState::default(),
        }
    }

    /// Create a controller and seed its fallback size from `surface`.
    pub fn mount<S: RenderSurface>(config: HighlightConfig, surface: &S) -> Self {
        let mut controller = Self::new(config);
        controller.refresh_geometry(surface);
        debug!(
            width = controller.panel_size_fallback.width,
            height = controller.panel_size_fallback.height,
            "highlight controller mounted"
        );
        controller
    }

    /// Dispatch a single event.
    pub fn handle<S: RenderSurface>(&mut self, event: ControllerEvent, surface: &S) {
        match event {
            ControllerEvent::Move { client_x, client_y } => {
                self.on_move(Point::new(client_x, client_y), surface)
            }
            ControllerEvent::Enter => self.on_enter(),
            ControllerEvent::Leave => self.on_leave(),
            ControllerEvent::Resize => self.on_resize(surface),
        }
    }

    pub fn on_enter(&mut self) {
        if self.phase == Phase::Idle {
            debug!("pointer entered container");
            self.phase = Phase::Tracking;
        }
    }

    pub fn on_leave(&mut self) {
        if self.phase == Phase::Tracking {
            debug!("pointer left container");
            self.phase = Phase::Idle;
        }
    }

    /// Refresh the fallback size. Does not recompute the highlight; the next
    /// move picks up the new layout.
    pub fn on_resize<S: RenderSurface>(&mut self, surface: &S) {
        if self.phase == Phase::Detached {
            return;
        }
        self.refresh_geometry(surface);
        debug!(
            width = self.panel_size_fallback.width,
            height = self.panel_size_fallback.height,
            "panel geometry refreshed"
        );
    }

    /// Recompute the highlight for a pointer at `client` (surface coordinates).
    ///
    /// Ignored unless tracking. With no panels on the surface the pointer is
    /// still recorded but the highlight keeps its last values.
    pub fn on_move<S: RenderSurface>(&mut self, client: Point, surface: &S) {
        if self.phase != Phase::Tracking {
            return;
        }
        let origin = surface.container_origin();
        let local = Point::new(client.x - origin.left, client.y - origin.top);
        self.pointer = PointerState {
            x: local.x,
            y: local.y,
        };

        let boxes = surface.bounding_boxes();
        let Some(closest) = closest_panel(local, &boxes) else {
            return;
        };

        let scale = self.config.size_multiplier(closest.distance);
        let width = closest.width * scale;
        let height = closest.height * scale;

        self.highlight = if self.config.snaps(closest.distance) {
            HighlightState {
                x: closest.center_x,
                y: closest.center_y,
                width,
                height,
                snapped: true,
            }
        } else {
            HighlightState {
                x: local.x,
                y: local.y,
                width,
                height,
                snapped: false,
            }
        };
        self.closest = Some(closest);

        trace!(
            x = local.x,
            y = local.y,
            panel = closest.index,
            distance = closest.distance,
            scale,
            snapped = self.highlight.snapped,
            "highlight updated"
        );
    }

    /// Tear down. Every later event is a no-op.
    pub fn unmount(&mut self) {
        if self.phase != Phase::Detached {
            debug!("highlight controller unmounted");
            self.phase = Phase::Detached;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Hover state: the highlight is rendered only while this is true.
    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Tracking
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn closest(&self) -> Option<ClosestPanel> {
        self.closest
    }

    pub fn panel_size_fallback(&self) -> PanelSize {
        self.panel_size_fallback
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Current highlight state.
    ///
    /// Until a move has found a closest panel the dimensions come from the
    /// fallback panel size.
    pub fn highlight(&self) -> HighlightState {
        if self.closest.is_some() {
            self.highlight
        } else {
            HighlightState {
                width: self.panel_size_fallback.width,
                height: self.panel_size_fallback.height,
                ..self.highlight
            }
        }
    }

    /// The box to paint, if any: visible highlight with the render shrink applied.
    pub fn render_state(&self) -> Option<HighlightState> {
        self.is_visible()
            .then(|| self.highlight().scaled(self.config.render_scale))
    }

    fn refresh_geometry<S: RenderSurface>(&mut self, surface: &S) {
        if let Some(first) = surface.bounding_boxes().first() {
            self.panel_size_fallback = PanelSize {
                width: first.width,
                height: first.height,
            };
        }
    }
}
