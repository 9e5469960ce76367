//! Per-tick drawing for the whiteboard

use tracing::{debug, warn};

use crate::constants::COORDINATE_LIMIT_FACTOR;
use crate::error::CoordinateError;
use crate::line::interpolate;
use crate::present::PresentationTarget;
use crate::splat;
use crate::types::{ActiveSource, DrawingEvent, SourceId, UpdatePhase};

use super::{TickReport, Whiteboard};

impl<T: PresentationTarget> Whiteboard<T> {
    /// Run the whiteboard for one host update phase.
    ///
    /// Only the `Dynamic` phase draws; every other phase returns `None`
    /// without touching the surface. `sources` are the sources currently
    /// selecting the board, with their world-space attach points.
    pub fn process<I>(&mut self, phase: UpdatePhase, sources: I) -> Option<TickReport>
    where
        I: IntoIterator<Item = ActiveSource>,
    {
        if phase != UpdatePhase::Dynamic {
            return None;
        }

        let size = self.surface.size();
        let projection = self.projection;
        let events = sources.into_iter().map(|active| DrawingEvent {
            source: active.source,
            position: projection.world_to_pixel(active.world_point, size),
        });
        Some(self.draw_tick(events))
    }

    /// Draw one tick from pixel-space events, then commit once.
    ///
    /// Each source continues its stroke from its last position (or starts a
    /// new one). A source with an unusable coordinate is skipped for this
    /// tick and keeps its previous position; the others are unaffected.
    pub fn draw_tick<I>(&mut self, events: I) -> TickReport
    where
        I: IntoIterator<Item = DrawingEvent>,
    {
        let mut report = TickReport::default();

        for event in events {
            if let Err(err) = self.check_coordinate(&event) {
                warn!("Skipping source this tick: {}", err);
                report.sources_skipped += 1;
                continue;
            }
            report.points_stamped += self.draw_stroke(&event);
            report.sources_drawn += 1;
        }

        self.surface.commit(&mut self.target);

        debug!(
            "draw_tick: {} sources drawn, {} skipped, {} points stamped",
            report.sources_drawn, report.sources_skipped, report.points_stamped
        );
        report
    }

    /// A source stopped selecting the board. Its next contact starts a new
    /// stroke.
    pub fn on_select_exited(&mut self, source: SourceId) {
        self.tracker.remove(source);
    }

    /// Stamp the path from the source's last position to its current one
    fn draw_stroke(&mut self, event: &DrawingEvent) -> usize {
        let last = self.tracker.get_last_or_seed(event.source, event.position);

        let mut stamped = 0;
        for point in interpolate(last, event.position) {
            splat::stamp(&mut self.surface, point, self.color);
            stamped += 1;
        }

        self.tracker.update(event.source, event.position);
        stamped
    }

    fn check_coordinate(&self, event: &DrawingEvent) -> Result<(), CoordinateError> {
        let source_id = event.source;
        let (x, y) = (event.position.x, event.position.y);

        if !event.position.is_finite() {
            return Err(CoordinateError::NonFinite { source_id, x, y });
        }

        let limit = COORDINATE_LIMIT_FACTOR * self.surface.size() as f32;
        if x.abs() > limit || y.abs() > limit {
            return Err(CoordinateError::OutOfRange { source_id, x, y });
        }

        Ok(())
    }
}
