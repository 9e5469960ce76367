use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// An RGBA8 pixel, laid out for direct texture upload
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
#[repr(C)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert a color with channels in 0.0-1.0 to RGBA8.
    /// Channels are clamped, then rounded to the nearest step.
    pub fn from_unit_f32(color: [f32; 4]) -> Self {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(
            channel(color[0]),
            channel(color[1]),
            channel(color[2]),
            channel(color[3]),
        )
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        c.to_array()
    }
}

/// Named drawing colors offered by the whiteboard's color buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorPreset {
    Yellow,
    Green,
    Red,
}

impl ColorPreset {
    /// The preset as 0.0-1.0 RGBA channels
    pub fn unit_rgba(self) -> [f32; 4] {
        match self {
            ColorPreset::Yellow => [1.0, 0.7, 0.0, 1.0],
            ColorPreset::Green => [0.0, 1.0, 0.7, 1.0],
            ColorPreset::Red => [1.0, 0.0, 0.2, 1.0],
        }
    }

    pub fn color(self) -> Rgba8 {
        Rgba8::from_unit_f32(self.unit_rgba())
    }
}

/// Stable identity of one drawing source (a finger tip, a pen, ...)
///
/// Assigned by the input collaborator. Two sources active at the same time
/// must never share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceId(pub u64);

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "source#{}", self.0)
    }
}

/// A drawing source's contact point for this tick, in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawingEvent {
    pub source: SourceId,
    pub position: Vec2,
}

impl DrawingEvent {
    pub fn new(source: SourceId, x: f32, y: f32) -> Self {
        Self {
            source,
            position: Vec2::new(x, y),
        }
    }
}

/// An actively selecting source as reported by the interaction subsystem
///
/// `world_point` is the source's attach point in world space; the
/// whiteboard projects it onto its own plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSource {
    pub source: SourceId,
    pub world_point: Vec3,
}

impl ActiveSource {
    pub fn new(source: SourceId, world_point: Vec3) -> Self {
        Self {
            source,
            world_point,
        }
    }
}

/// Phases of one host update. Drawing only happens during `Dynamic`, when
/// every source has reported a consistent position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdatePhase {
    /// Fixed-rate physics step
    Fixed,
    /// Regular per-frame update
    Dynamic,
    /// After all dynamic updates
    Late,
    /// Immediately before rendering
    OnBeforeRender,
}

/// Per-source stroke state held by the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeState {
    /// No prior position; the next coordinate seeds a new stroke
    Absent,
    /// A last position is stored; the next coordinate continues the stroke
    Tracking,
}
