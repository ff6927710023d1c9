use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::point::Point;

/// Smallest permitted zoom factor. Zooming out stops here.
pub const MIN_ZOOM: f64 = 0.5;

/// Largest permitted zoom factor. Effectively unbounded: deep zooms run out
/// of `f64` precision long before the clamp engages.
pub const MAX_ZOOM: f64 = f64::MAX;

/// Vertical span of the complex plane visible at `zoom = 1`, in plane units.
/// The horizontal span is derived from the raster aspect ratio.
pub const BASE_RANGE: f64 = 3.0;

/// Multiplier applied to `zoom` per zoom-in step. Smaller factor means more
/// zoomed in, since the visible half-extents scale with `1 / zoom`.
const ZOOM_IN_FACTOR: f64 = 0.9;

/// Multiplier applied to `zoom` per zoom-out step.
const ZOOM_OUT_FACTOR: f64 = 1.1;

/// Pan/zoom state defining which rectangle of the complex plane is visible.
///
/// The state is deliberately raster-independent: pixel dimensions are passed
/// into each transform, so the same `ViewportState` can drive rasters of any
/// size (the visible plane rectangle widens with the aspect ratio).
///
/// Owned by the rendering caller and only ever changed by the explicit
/// [`pan`](Self::pan) / [`zoom_at`](Self::zoom_at) operations, which return
/// a new state instead of mutating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    /// Zoom factor relative to the base view; always `>= MIN_ZOOM`.
    pub zoom: f64,

    /// Horizontal pan offset in plane units.
    pub offset_x: f64,

    /// Vertical pan offset in plane units.
    pub offset_y: f64,
}

impl Default for ViewportState {
    /// The classic framing: zoom 1, centred on `(-0.5, 0)`.
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ViewportState {
    /// Create a viewport state with explicit parameters.
    pub fn new(zoom: f64, offset_x: f64, offset_y: f64) -> crate::Result<Self> {
        if !zoom.is_finite() || zoom < MIN_ZOOM {
            return Err(CoreError::InvalidZoom(zoom));
        }
        if !offset_x.is_finite() || !offset_y.is_finite() {
            return Err(CoreError::InvalidOffset(offset_x, offset_y));
        }
        Ok(Self {
            zoom,
            offset_x,
            offset_y,
        })
    }

    /// The plane-rectangle bounds `(x_min, x_max, y_min, y_max)` visible
    /// through a `width × height` raster.
    ///
    /// The vertical span is `BASE_RANGE / zoom`; the horizontal span is
    /// aspect-corrected so pixels stay square on the plane. The `-2 + 1.5`
    /// and `-1.5 + 1.5` terms are the fixed re-centering constants of the
    /// default view, which put the zero-offset centre at `(-0.5, 0)`.
    fn plane_bounds(&self, width: u32, height: u32) -> (f64, f64, f64, f64) {
        let y_range = BASE_RANGE;
        let x_range = y_range * width as f64 / height as f64;

        let center_x = -2.0 + self.offset_x + 1.5;
        let center_y = -1.5 + self.offset_y + 1.5;

        let half_x = x_range / self.zoom / 2.0;
        let half_y = y_range / self.zoom / 2.0;

        (
            center_x - half_x,
            center_x + half_x,
            center_y - half_y,
            center_y + half_y,
        )
    }

    /// Map a pixel coordinate to a point on the complex plane.
    ///
    /// Pixel `(0, 0)` maps to the rectangle's minimum corner and pixel
    /// `(width, height)` to its maximum corner, by linear interpolation.
    /// Both dimensions must be non-zero; the renderer never calls this for
    /// an empty raster.
    #[inline]
    pub fn pixel_to_point(&self, px: u32, py: u32, width: u32, height: u32) -> Point {
        let (x_min, x_max, y_min, y_max) = self.plane_bounds(width, height);
        Point::new(
            x_min + px as f64 / width as f64 * (x_max - x_min),
            y_min + py as f64 / height as f64 * (y_max - y_min),
        )
    }

    /// Zoom one step toward (or away from) the plane point under the anchor
    /// pixel, returning the new state.
    ///
    /// The new zoom is `zoom * 0.9` (in) or `zoom * 1.1` (out), clamped into
    /// `[MIN_ZOOM, MAX_ZOOM]`; the offsets are biased toward the anchor so
    /// the point under the cursor roughly holds its screen position.
    ///
    /// The offset bias uses the fixed `BASE_RANGE` constant on both axes
    /// rather than the aspect-corrected horizontal range, so on non-square
    /// rasters the anchor drifts slightly per step. Inherited behavior, kept
    /// as documented.
    pub fn zoom_at(
        &self,
        anchor_px: u32,
        anchor_py: u32,
        width: u32,
        height: u32,
        zoom_in: bool,
    ) -> Self {
        let factor = if zoom_in {
            ZOOM_IN_FACTOR
        } else {
            ZOOM_OUT_FACTOR
        };
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let zoom_ratio = 1.0 - new_zoom / self.zoom;

        Self {
            zoom: new_zoom,
            offset_x: self.offset_x
                + anchor_px as f64 / width as f64 * BASE_RANGE / self.zoom * zoom_ratio,
            offset_y: self.offset_y
                + anchor_py as f64 / height as f64 * BASE_RANGE / self.zoom * zoom_ratio,
        }
    }

    /// Pan by a pixel delta, returning the new state.
    ///
    /// Drag direction is inverted: dragging right moves the visible window
    /// left, which keeps the content under the cursor.
    pub fn pan(&self, delta_px: f64, delta_py: f64, width: u32, height: u32) -> Self {
        let scale_x = BASE_RANGE / width as f64 / self.zoom;
        let scale_y = BASE_RANGE / height as f64 / self.zoom;
        Self {
            zoom: self.zoom,
            offset_x: self.offset_x - delta_px * scale_x,
            offset_y: self.offset_y - delta_py * scale_y,
        }
    }
}
