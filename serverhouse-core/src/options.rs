//! Mount-time renderer options.

use crate::{RenderError, RoomType};
use serde::{Deserialize, Serialize};

/// What a canvas view is asked to draw, fixed when it mounts.
///
/// JSON form: `{"roomType": 0..5 | "<room-id>", "isActive": bool, "use3D": bool}`;
/// every field is optional.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RendererOptions {
    pub room_type: RoomType,
    pub is_active: bool,
    /// Request the WebGL2 backend (Canvas2D is the fallback).
    #[serde(rename = "use3D")]
    pub use_3d: bool,
}

impl RendererOptions {
    pub fn new(room_type: RoomType, is_active: bool, use_3d: bool) -> Self {
        Self {
            room_type,
            is_active,
            use_3d,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(json)?)
    }
}
