//! Scene configuration and signed-distance evaluators.
//!
//! The scene is one sphere above an infinite floor under one directional
//! light. All geometry lives in an immutable [`Scene`] value passed by
//! reference into the marching operations, so tests can substitute
//! configurations without recompiling constants.

use serde::{Deserialize, Serialize};

use crate::fixed::Fx32;
use crate::sqrt::sphere_sqrt;
use crate::vec3::Vec3Fx;

/// Immutable scene configuration.
///
/// [`Scene::default`] reproduces the reference constants; every field can
/// be overridden for testing. Fixed-point fields serialize as raw Q16.16
/// integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Sphere center.
    pub sphere_center: Vec3Fx,
    /// Sphere radius.
    pub sphere_radius: Fx32,
    /// Y offset of the infinite floor plane.
    pub floor_offset: Fx32,
    /// Rays above this Y coordinate have escaped to the sky.
    pub sky_bound: Fx32,
    /// Rays beyond this Z coordinate have escaped past the far plane.
    pub far_bound: Fx32,
    /// Direction toward the light. Pre-scaled to unit length by
    /// construction, never normalized at use time.
    pub light_dir: Vec3Fx,
    /// Hit epsilon for the primary (camera) pass.
    pub primary_epsilon: Fx32,
    /// Tighter hit epsilon for the shadow pass.
    pub shadow_epsilon: Fx32,
    /// Initial advance along the light before shadow marching, to escape
    /// self-intersection with the surface just hit.
    pub shadow_start_offset: Fx32,
    /// Iteration budget per ray, the only bound on marching runtime.
    pub max_steps: u32,
}

impl Default for Scene {
    fn default() -> Scene {
        Scene {
            sphere_center: Vec3Fx::from_ints(0, 2, 16),
            sphere_radius: Fx32::from_int(4),
            floor_offset: Fx32::from_int(-4),
            sky_bound: Fx32::from_int(16),
            far_bound: Fx32::from_int(256),
            // (1, 2, 1) / sqrt(6), quantized once ahead of time
            light_dir: Vec3Fx::new(
                Fx32::from_raw(0x6880),
                Fx32::from_raw(0xd106),
                Fx32::from_raw(0x6880),
            ),
            primary_epsilon: Fx32::from_raw(0x100),
            shadow_epsilon: Fx32::from_raw(0x10),
            shadow_start_offset: Fx32::from_raw(0x1000),
            max_steps: 4096,
        }
    }
}

impl Scene {
    /// Squared distance from `p` to the sphere center.
    ///
    /// No square root is taken; the result feeds [`sphere_sqrt`].
    #[inline(always)]
    pub fn sphere_distance_squared(&self, p: Vec3Fx) -> Fx32 {
        p.distance_squared_to(self.sphere_center)
    }

    /// Signed distance from `p` to the floor plane. Negative below.
    #[inline(always)]
    pub fn floor_distance(&self, p: Vec3Fx) -> Fx32 {
        p.y - self.floor_offset
    }

    /// Safe marching bound at `p`: the minimum of the sphere and floor
    /// distances. Additional geometry would extend this minimum.
    #[inline(always)]
    pub fn min_step(&self, p: Vec3Fx) -> Fx32 {
        let sphere = sphere_sqrt(self.sphere_distance_squared(p)) - self.sphere_radius;
        let floor = self.floor_distance(p);
        if sphere < floor {
            sphere
        } else {
            floor
        }
    }

    /// True once `p` has left the region of interest, above the sky bound
    /// or past the far plane.
    #[inline(always)]
    pub fn escaped(&self, p: Vec3Fx) -> bool {
        p.y > self.sky_bound || p.z > self.far_bound
    }
}
