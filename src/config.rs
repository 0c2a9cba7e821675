//! src/config.rs
//!
//! Application configuration: grid shape, frame pacing, cell-to-unit mapping
//! and log settings.
//!
//! Defaults are compiled in; a handful of environment variables override them.
//! Unparseable values are ignored.

use std::path::PathBuf;
use std::time::Duration;

use ratatui::layout::Rect;

use crate::highlight::{BoundingBox, HighlightConfig, Point};

/// Size of one terminal cell in surface units.
///
/// Terminal cells are roughly twice as tall as they are wide, so the default
/// keeps that aspect and puts the highlight thresholds at a few cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellMetrics {
    pub width: f64,
    pub height: f64,
}

impl CellMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Box covered by `rect`, in absolute units.
    pub fn rect_to_box(&self, rect: Rect) -> BoundingBox {
        BoundingBox::new(
            rect.x as f64 * self.width,
            rect.y as f64 * self.height,
            rect.width as f64 * self.width,
            rect.height as f64 * self.height,
        )
    }

    /// Center of the cell at (`column`, `row`), in absolute units.
    pub fn cell_center(&self, column: u16, row: u16) -> Point {
        Point::new(
            (column as f64 + 0.5) * self.width,
            (row as f64 + 0.5) * self.height,
        )
    }
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width: 8.0,
            height: 16.0,
        }
    }
}

/// Where tracing output goes, if anywhere.
#[derive(Clone, Debug, Default)]
pub struct LogConfig {
    /// Log file; `None` disables logging entirely (the terminal owns stdout/stderr).
    pub file: Option<PathBuf>,

    /// Default to `debug` instead of `info` when `RUST_LOG` is unset.
    pub debug: bool,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Panels per grid row.
    pub columns: u16,

    /// Target time per frame of the draw/poll loop.
    pub frame_time: Duration,

    pub cell: CellMetrics,

    pub highlight: HighlightConfig,

    pub log: LogConfig,
}

impl AppConfig {
    /// Defaults overridden by `PANEL_GLOW_COLUMNS`, `PANEL_GLOW_LOG` and
    /// `PANEL_GLOW_DEBUG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(columns) = lookup("PANEL_GLOW_COLUMNS")
            .and_then(|v| v.trim().parse::<u16>().ok())
            .filter(|&c| c > 0)
        {
            cfg.columns = columns;
        }
        if let Some(path) = lookup("PANEL_GLOW_LOG").filter(|v| !v.trim().is_empty()) {
            cfg.log.file = Some(PathBuf::from(path));
        }
        if let Some(flag) = lookup("PANEL_GLOW_DEBUG") {
            cfg.log.debug = matches!(flag.trim(), "1" | "true" | "yes" | "on");
        }
        cfg
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            columns: 5,
            frame_time: Duration::from_millis(16),
            cell: CellMetrics::default(),
            highlight: HighlightConfig::default(),
            log: LogConfig::default(),
        }
    }
}
