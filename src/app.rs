//! src/app.rs
//!
//! Proximity highlight over a grid of terminal panels.
//!
//! # Top-Level Application (`app.rs`)
//!
//! Builds the panel grid, acquires mouse reporting, mounts the highlight
//! controller and runs the draw/poll loop until the user quits.
//!
//! ## Overview
//! - The grid fills the left of the screen; a status panel on the right shows
//!   what the controller computed for the last pointer move.
//! - Moving the mouse over the grid shows a tinted highlight. It follows the
//!   pointer, shrinks as the pointer gets farther from the nearest card, and
//!   snaps onto a card (bright tint) once the pointer is close enough.
//!
//! # Running
//!
//! ```text
//! cargo run --release
//! PANEL_GLOW_COLUMNS=3 PANEL_GLOW_LOG=/tmp/glow.log cargo run
//! ```
//!
//! # Keyboard Controls
//!
//! - **q** / **Esc** / **Ctrl-C** — Quit and restore terminal state.
//!
//! # Event Ordering
//!
//! All events pending at the start of a frame are drained in delivery order
//! before the next draw. A resize updates the screen rectangle before the
//! events after it are translated, so later moves always see the new layout.
//! A resize alone does not move the highlight; the next pointer move does.
//!
//! # Teardown
//!
//! The controller is unmounted and mouse reporting is released before the
//! terminal is restored, on the normal path and on errors alike.

use std::thread;
use std::time::{Duration, Instant};

use color_eyre::eyre::WrapErr;
use crossterm::event::Event;
use ratatui::DefaultTerminal;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tracing::info;

use crate::config::AppConfig;
use crate::highlight::ProximityHighlight;
use crate::input::{ListenerSet, PointerTracker, is_quit};
use crate::panels::{
    GridSurface, HighlightOverlay, InfoPanel, PanelGrid, ParagraphPanel, demo_records,
};
use crate::ui::Panel;

/// Width of the status column on the right.
const INFO_WIDTH: u16 = 30;

/// Where each part of the screen goes for a given terminal size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub container: Rect,
    pub info: Rect,
    pub footer: Rect,
}

impl ScreenAreas {
    pub fn new(screen: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(screen);
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(INFO_WIDTH)])
            .split(rows[1]);
        Self {
            header: rows[0],
            container: body[0],
            info: body[1],
            footer: rows[2],
        }
    }
}

/// Draw one frame.
fn draw(
    f: &mut ratatui::Frame<'_>,
    grid: &PanelGrid,
    controller: &ProximityHighlight,
    config: &AppConfig,
) {
    let areas = ScreenAreas::new(f.area());

    ParagraphPanel::new("Move the mouse over the panels", "panel-glow")
        .centered()
        .draw(f, areas.header);

    grid.draw(f, areas.container);
    HighlightOverlay::new(controller.render_state(), config.cell).draw(f, areas.container);

    InfoPanel::new(controller, |i| grid.title(i)).draw(f, areas.info);

    ParagraphPanel::new("Q / Esc = Quit", "Keys")
        .dimmed()
        .draw(f, areas.footer);
}

fn terminal_rect() -> color_eyre::Result<Rect> {
    let (w, h) = crossterm::terminal::size().wrap_err("query terminal size")?;
    Ok(Rect::new(0, 0, w, h))
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    grid: &PanelGrid,
    config: &AppConfig,
) -> color_eyre::Result<()> {
    let mut screen = terminal_rect()?;
    let mut controller = {
        let areas = ScreenAreas::new(screen);
        ProximityHighlight::mount(
            config.highlight.clone(),
            &GridSurface::new(grid, areas.container, config.cell),
        )
    };
    let mut tracker = PointerTracker::default();
    let mut running = true;

    while running {
        let frame_start = Instant::now();

        terminal
            .draw(|f| {
                screen = f.area();
                draw(f, grid, &controller, config);
            })
            .wrap_err("draw frame")?;

        while crossterm::event::poll(Duration::from_millis(0)).wrap_err("poll events")? {
            let event = crossterm::event::read().wrap_err("read event")?;
            if is_quit(&event) {
                running = false;
                break;
            }
            if let Event::Resize(w, h) = event {
                screen = Rect::new(0, 0, w, h);
            }
            let areas = ScreenAreas::new(screen);
            let surface = GridSurface::new(grid, areas.container, config.cell);
            for ev in tracker.translate(&event, areas.container, config.cell) {
                controller.handle(ev, &surface);
            }
        }

        if !running {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < config.frame_time {
            thread::sleep(config.frame_time - elapsed);
        }
    }

    controller.unmount();
    Ok(())
}

pub fn run(config: AppConfig) -> color_eyre::Result<()> {
    let grid = PanelGrid::new(demo_records(), config.columns);
    info!(
        panels = grid.len(),
        columns = grid.columns(),
        "starting panel grid"
    );

    let mut terminal = ratatui::init();
    let result = ListenerSet::acquire(std::io::stdout()).and_then(|listeners| {
        let out = event_loop(&mut terminal, &grid, &config);
        drop(listeners);
        out
    });
    ratatui::restore();

    info!("terminal restored");
    result
}
