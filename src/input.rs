//! src/input.rs
//!
//! Terminal input plumbing: acquiring/releasing mouse and focus reporting,
//! and turning crossterm events into controller events.
//!
//! Terminals report positions but never enter/leave, so those are derived
//! from whether consecutive mouse positions fall inside the grid container.

use std::io::Write;

use color_eyre::eyre::WrapErr;
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::config::CellMetrics;
use crate::highlight::ControllerEvent;

/// Mouse capture and focus reporting, enabled together and released together on drop.
pub struct ListenerSet<W: Write> {
    out: W,
}

impl<W: Write> ListenerSet<W> {
    pub fn acquire(mut out: W) -> color_eyre::Result<Self> {
        execute!(out, EnableMouseCapture, EnableFocusChange)
            .wrap_err("enable mouse capture")?;
        tracing::debug!("terminal listeners acquired");
        Ok(Self { out })
    }
}

impl<W: Write> Drop for ListenerSet<W> {
    fn drop(&mut self) {
        // nothing sensible to do if the terminal is already gone
        let _ = execute!(self.out, DisableFocusChange, DisableMouseCapture);
        tracing::debug!("terminal listeners released");
    }
}

/// Remembers whether the pointer was last seen inside the container.
#[derive(Debug, Default)]
pub struct PointerTracker {
    inside: bool,
}

impl PointerTracker {
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Controller events implied by `event`, in delivery order.
    ///
    /// `container` is the grid's current screen area; pointer coordinates are
    /// reported as the center of the hovered cell, in absolute units.
    pub fn translate(
        &mut self,
        event: &Event,
        container: Rect,
        cell: CellMetrics,
    ) -> Vec<ControllerEvent> {
        let mut out = Vec::new();
        match event {
            Event::Mouse(m) => {
                let inside = contains(container, m.column, m.row);
                if inside {
                    if !self.inside {
                        out.push(ControllerEvent::Enter);
                    }
                    let p = cell.cell_center(m.column, m.row);
                    out.push(ControllerEvent::Move {
                        client_x: p.x,
                        client_y: p.y,
                    });
                } else if self.inside {
                    out.push(ControllerEvent::Leave);
                }
                self.inside = inside;
            }
            Event::FocusLost => {
                if self.inside {
                    out.push(ControllerEvent::Leave);
                    self.inside = false;
                }
            }
            Event::Resize(..) => out.push(ControllerEvent::Resize),
            _ => {}
        }
        out
    }
}

/// `q`, `Esc` or `Ctrl-C`.
pub fn is_quit(event: &Event) -> bool {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = event
    else {
        return false;
    };
    if *kind != KeyEventKind::Press {
        return false;
    }
    match code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && row >= area.y
        && (column as u32) < area.x as u32 + area.width as u32
        && (row as u32) < area.y as u32 + area.height as u32
}
