//! Whiteboard controller
//!
//! This module ties the whiteboard parts together:
//! - Drawing sources (from the interaction subsystem via [`ActiveSource`])
//! - Surface projection (world point to pixel coordinate)
//! - Stroke tracker (per-source last position)
//! - Line rasterizer and splat stamper (pixel writes)
//! - Presentation target (one commit per tick)
//!
//! The controller is engine agnostic; hosts call [`Whiteboard::process`] once
//! per update phase and [`Whiteboard::on_select_exited`] whenever a source
//! stops selecting the board.

mod tick;

use tracing::info;
use whiteboard_config::WhiteboardConfig;

use crate::commands::WhiteboardCommand;
use crate::error::WhiteboardError;
use crate::present::{PresentationTarget, TextureSnapshot};
use crate::projection::SurfaceProjection;
use crate::surface::RasterSurface;
use crate::tracker::StrokeTracker;
use crate::types::{ColorPreset, Rgba8};

/// Summary of one drawing tick
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Sources whose stroke was drawn
    pub sources_drawn: usize,
    /// Sources skipped because of an unusable coordinate
    pub sources_skipped: usize,
    /// Interpolated points stamped across all sources
    pub points_stamped: usize,
}

/// A drawable surface shared by any number of concurrent sources
///
/// Owns the raster surface, the stroke tracker and the presentation target.
/// Dropping the whiteboard releases the surface.
pub struct Whiteboard<T: PresentationTarget = TextureSnapshot> {
    pub(crate) surface: RasterSurface,
    pub(crate) tracker: StrokeTracker,
    pub(crate) color: Rgba8,
    pub(crate) projection: SurfaceProjection,
    pub(crate) target: T,
}

impl Whiteboard<TextureSnapshot> {
    /// Create a whiteboard that presents into an in-memory snapshot
    pub fn headless(config: &WhiteboardConfig) -> Result<Self, WhiteboardError> {
        Self::new(config, TextureSnapshot::new())
    }
}

impl<T: PresentationTarget> Whiteboard<T> {
    /// Allocate the surface and present the blank image to `target`.
    ///
    /// Fails with [`WhiteboardError::InvalidDimension`] if the configured
    /// size is unusable.
    pub fn new(config: &WhiteboardConfig, target: T) -> Result<Self, WhiteboardError> {
        let surface = RasterSurface::new(config.size)?;
        let mut board = Self {
            surface,
            tracker: StrokeTracker::new(),
            color: Rgba8::from(config.color),
            projection: SurfaceProjection::identity(),
            target,
        };
        board.surface.commit(&mut board.target);
        info!(
            "Whiteboard active: {}x{}, color {:?}",
            config.size, config.size, board.color
        );
        Ok(board)
    }

    /// Replace the world-to-surface projection (the board's world transform)
    pub fn with_projection(mut self, projection: SurfaceProjection) -> Self {
        self.projection = projection;
        self
    }

    /// Surface edge length in pixels
    pub fn size(&self) -> u32 {
        self.surface.size()
    }

    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    pub fn tracker(&self) -> &StrokeTracker {
        &self.tracker
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn projection(&self) -> &SurfaceProjection {
        &self.projection
    }

    /// Update the projection, e.g. after the board moved.
    pub fn set_projection(&mut self, projection: SurfaceProjection) {
        self.projection = projection;
    }

    /// Set the drawing color. Applies to the next stamp; existing pixels
    /// keep their color.
    pub fn set_color(&mut self, color: Rgba8) {
        self.color = color;
    }

    pub fn set_color_preset(&mut self, preset: ColorPreset) {
        self.set_color(preset.color());
    }

    /// Get the current drawing color
    pub fn color(&self) -> Rgba8 {
        self.color
    }

    /// Wipe the drawing.
    ///
    /// Reallocates the surface, forgets every tracked source so no stroke
    /// continues from a pre-clear position, and presents the blank image.
    pub fn clear(&mut self) {
        self.surface.reset();
        self.tracker.clear();
        self.surface.commit(&mut self.target);
        info!("Whiteboard cleared");
    }

    /// Apply a control command
    pub fn apply(&mut self, command: WhiteboardCommand) {
        match command {
            WhiteboardCommand::Clear => self.clear(),
            WhiteboardCommand::SetColor { color } => self.set_color(Rgba8::from(color)),
            WhiteboardCommand::SetColorPreset { preset } => self.set_color_preset(preset),
        }
    }

    /// Tear down the whiteboard, handing back the presentation target
    pub fn into_target(self) -> T {
        self.target
    }
}
