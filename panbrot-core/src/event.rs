use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::viewport::ViewportState;

/// A navigation event, as translated by the platform shell from raw input.
///
/// Serde-derived so a shell can record and replay navigation sessions.
/// Raster resizes are deliberately absent: pixel dimensions live with the
/// raster, not the viewport, so a resize is handled by re-rendering the same
/// state at the new size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewportEvent {
    /// Drag by a pixel delta.
    Pan { delta_x: f64, delta_y: f64 },

    /// Zoom one step, anchored at a pixel.
    Zoom {
        anchor_x: u32,
        anchor_y: u32,
        zoom_in: bool,
    },
}

impl ViewportState {
    /// Pure reducer: fold one navigation event into the viewport state.
    ///
    /// The shell owns the event loop; it calls this, then re-renders with
    /// the returned state. `width` and `height` are the dimensions of the
    /// raster the event was captured on.
    pub fn apply(&self, event: ViewportEvent, width: u32, height: u32) -> Self {
        let next = match event {
            ViewportEvent::Pan { delta_x, delta_y } => self.pan(delta_x, delta_y, width, height),
            ViewportEvent::Zoom {
                anchor_x,
                anchor_y,
                zoom_in,
            } => self.zoom_at(anchor_x, anchor_y, width, height, zoom_in),
        };
        debug!(?event, zoom = next.zoom, "viewport event applied");
        next
    }
}
