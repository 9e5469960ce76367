//! Control commands for a whiteboard.

use serde::{Deserialize, Serialize};

use crate::types::ColorPreset;

/// Commands a host UI can send to a whiteboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum WhiteboardCommand {
    /// Wipe the surface and forget every stroke in progress
    Clear,
    /// Set the drawing color (RGBA8)
    SetColor { color: [u8; 4] },
    /// Switch to one of the named colors
    SetColorPreset { preset: ColorPreset },
}
