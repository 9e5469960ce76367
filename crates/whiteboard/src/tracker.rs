//! Per-source stroke state
//!
//! Each active drawing source maps to the pixel coordinate it reported on
//! its previous tick. A source without an entry starts a fresh stroke.

use std::collections::HashMap;

use glam::Vec2;
use tracing::debug;

use crate::types::{SourceId, StrokeState};

/// Last known surface-space position of every tracked source
#[derive(Debug, Default, Clone)]
pub struct StrokeTracker {
    last_positions: HashMap<SourceId, Vec2>,
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored last position for `source`, or `current` if the source has
    /// none yet. Never inserts.
    pub fn get_last_or_seed(&self, source: SourceId, current: Vec2) -> Vec2 {
        self.last_positions.get(&source).copied().unwrap_or(current)
    }

    /// Insert or overwrite the last position for `source`
    pub fn update(&mut self, source: SourceId, position: Vec2) {
        if self.last_positions.insert(source, position).is_none() {
            debug!("{} started tracking at ({:.1}, {:.1})", source, position.x, position.y);
        }
    }

    /// Forget `source`. Returns whether an entry was removed.
    pub fn remove(&mut self, source: SourceId) -> bool {
        let removed = self.last_positions.remove(&source).is_some();
        if removed {
            debug!("{} stopped tracking", source);
        }
        removed
    }

    /// Forget every source
    pub fn clear(&mut self) {
        self.last_positions.clear();
    }

    pub fn state(&self, source: SourceId) -> StrokeState {
        if self.last_positions.contains_key(&source) {
            StrokeState::Tracking
        } else {
            StrokeState::Absent
        }
    }

    pub fn contains(&self, source: SourceId) -> bool {
        self.last_positions.contains_key(&source)
    }

    pub fn last_position(&self, source: SourceId) -> Option<Vec2> {
        self.last_positions.get(&source).copied()
    }

    pub fn len(&self) -> usize {
        self.last_positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_positions.is_empty()
    }
}
