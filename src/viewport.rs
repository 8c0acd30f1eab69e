//! Viewport geometry and primary-ray generation.

use serde::{Deserialize, Serialize};

use crate::fixed::Fx32;
use crate::vec3::{Ray, Vec3Fx};

/// Integer pixel coordinate in the aspect-corrected viewport grid.
///
/// The frame driver advances `y` in steps of 2 to compensate for
/// non-square character cells; the shader itself treats every coordinate
/// uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportCoord {
    /// Column, 0 at the left edge.
    pub x: i32,
    /// Row, 0 at the top edge.
    pub y: i32,
}

/// Viewport geometry: extent, optical center, and the pinhole-camera
/// scaling applied per pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Horizontal extent in pixels.
    pub width: i32,
    /// Vertical extent in pixels (before the step-2 row correction).
    pub height: i32,
    /// Optical center column.
    pub center_x: i32,
    /// Optical center row.
    pub center_y: i32,
    /// Per-pixel angular scale applied to the viewport offset.
    pub pixel_scale: Fx32,
    /// Fixed forward (depth-axis) component of every primary ray.
    pub forward: Fx32,
}

/// Per-pixel angular scale of the reference viewport.
pub const PIXEL_SCALE: Fx32 = Fx32::from_f32(0.02313);
/// Forward ray component of the reference viewport.
pub const FORWARD: Fx32 = Fx32::from_f32(0.74);

impl Default for Viewport {
    fn default() -> Viewport {
        Viewport {
            width: 49,
            height: 33,
            center_x: 24,
            center_y: 16,
            pixel_scale: PIXEL_SCALE,
            forward: FORWARD,
        }
    }
}

impl Viewport {
    /// Number of output rows after the step-2 row correction.
    #[inline(always)]
    pub const fn out_height(&self) -> i32 {
        (self.height + 1) / 2
    }

    /// Build the primary ray for a pixel: position at the camera origin,
    /// direction from the viewport offset times the pixel scale, with the
    /// fixed forward component.
    ///
    /// The direction is deliberately not normalized; its magnitude varies
    /// with the pixel offset and is absorbed into the marching step
    /// scale. Normalizing here would change the rendered image.
    #[inline(always)]
    pub fn primary_ray(&self, coord: ViewportCoord) -> Ray {
        Ray::new(
            Vec3Fx::ZERO,
            Vec3Fx::new(
                Fx32::from_int(coord.x - self.center_x).mul(self.pixel_scale),
                Fx32::from_int(self.center_y - coord.y).mul(self.pixel_scale),
                self.forward,
            ),
        )
    }
}
