//! Fixed-point 3-vectors and rays.

use serde::{Deserialize, Serialize};

use crate::fixed::Fx32;

/// Three-component vector in Q16.16 fixed point.
///
/// There is no implicit normalization anywhere: direction vectors are
/// pre-scaled by construction and used as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vec3Fx {
    /// X component.
    pub x: Fx32,
    /// Y component (up).
    pub y: Fx32,
    /// Z component (depth).
    pub z: Fx32,
}

impl Vec3Fx {
    /// The zero vector.
    pub const ZERO: Vec3Fx = Vec3Fx {
        x: Fx32::ZERO,
        y: Fx32::ZERO,
        z: Fx32::ZERO,
    };

    /// Construct from components.
    #[inline(always)]
    pub const fn new(x: Fx32, y: Fx32, z: Fx32) -> Vec3Fx {
        Vec3Fx { x, y, z }
    }

    /// Construct from whole-integer components.
    #[inline(always)]
    pub const fn from_ints(x: i32, y: i32, z: i32) -> Vec3Fx {
        Vec3Fx::new(Fx32::from_int(x), Fx32::from_int(y), Fx32::from_int(z))
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Component deltas are squared with the fixed multiply and summed
    /// with wrapping adds; no square root is taken here. Far-away points
    /// can wrap the accumulator, which downstream consumers fold into the
    /// inside-geometry band (see [`crate::sqrt::sphere_sqrt`]).
    #[inline(always)]
    pub fn distance_squared_to(self, other: Vec3Fx) -> Fx32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx.mul(dx) + dy.mul(dy) + dz.mul(dz)
    }
}

/// A marching ray: a mutable position and a fixed direction.
///
/// Rays are value objects, one per pixel evaluation. The direction is
/// constant for the duration of a march; the position accumulates
/// translations. The shadow pass reuses the same ray with the direction
/// re-pointed at the light.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ray {
    /// Current position, updated as the ray marches.
    pub position: Vec3Fx,
    /// March direction, scaled by construction rather than normalized.
    pub direction: Vec3Fx,
}

impl Ray {
    /// Construct a ray from a starting position and direction.
    #[inline(always)]
    pub const fn new(position: Vec3Fx, direction: Vec3Fx) -> Ray {
        Ray {
            position,
            direction,
        }
    }

    /// Translate the position by `direction * dist`.
    #[inline(always)]
    pub fn advance(&mut self, dist: Fx32) {
        self.position.x += self.direction.x.mul(dist);
        self.position.y += self.direction.y.mul(dist);
        self.position.z += self.direction.z.mul(dist);
    }
}
