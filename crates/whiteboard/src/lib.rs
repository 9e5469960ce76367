//! Multi-source whiteboard drawing
//!
//! This crate provides a shared raster surface that any number of drawing
//! sources (finger tips, pens) draw into during a single update:
//! - [`surface`] - Square RGBA8 CPU surface with commit to a presentation target
//! - [`tracker`] - Per-source last position for stroke continuity
//! - [`line`] - Unit-spaced straight-line interpolation between ticks
//! - [`splat`] - 3x3 splat stamping
//! - [`projection`] - World point to surface pixel mapping
//! - [`controller`] - The [`Whiteboard`] that runs all of the above per tick
//! - [`commands`] - Serializable control commands (clear, color)

pub mod commands;
pub mod constants;
pub mod controller;
pub mod error;
pub mod line;
pub mod present;
pub mod projection;
pub mod splat;
pub mod surface;
pub mod tracker;
pub mod types;

pub use commands::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use line::*;
pub use present::*;
pub use projection::*;
pub use splat::*;
pub use surface::*;
pub use tracker::*;
pub use types::*;

pub use whiteboard_config::WhiteboardConfig;
