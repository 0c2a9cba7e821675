//! src/lib.rs
//!
//! Proximity highlight over a grid of terminal panels.
//!
//! The pure part lives in [`highlight`]: distance math, closest-panel
//! selection, size interpolation and the pointer state machine. Everything
//! else is terminal glue around it.

pub mod app;
pub mod config;
pub mod highlight;
pub mod input;
pub mod logging;
pub mod panels;
pub mod ui;
