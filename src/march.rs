//! The distance-field marching loop.
//!
//! One generic loop serves both the camera pass and the shadow pass; the
//! callers differ only in epsilon, escape predicate, and what they do with
//! the outcome. Every march terminates: the iteration budget is the sole
//! safety valve against a malformed distance field, and running into it is
//! a defined outcome, not an error.

use crate::fixed::Fx32;
use crate::vec3::{Ray, Vec3Fx};

/// Parameters for one marching run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarchConfig {
    /// Bound below which the ray is considered to have reached a surface.
    pub hit_epsilon: Fx32,
    /// Maximum number of marching steps.
    pub max_steps: u32,
}

/// How a march ended.
///
/// A tagged outcome rather than a sentinel value, so callers cannot
/// silently conflate a geometric hit with an escape or a spent budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarchOutcome {
    /// The step bound dropped below the hit epsilon; the ray position is
    /// on (within epsilon of) a surface.
    Hit,
    /// The ray left the region of interest without striking geometry.
    Escaped,
    /// The iteration budget ran out. Degraded but defined; rendered dark.
    Exhausted,
}

/// Outcome of a march plus the number of steps consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarchResult {
    /// Terminal outcome.
    pub outcome: MarchOutcome,
    /// Steps taken before terminating.
    pub steps: u32,
}

/// March `ray` until it hits a surface, escapes, or exhausts its budget.
///
/// Per iteration: evaluate `step_bound` at the current position; if it is
/// below the hit epsilon, terminate with [`MarchOutcome::Hit`] leaving the
/// position where it is. Otherwise translate the position by
/// `direction * bound` and re-test `escaped`. The bound must never
/// overestimate the true distance to the nearest surface, or the ray can
/// tunnel through geometry.
#[inline(always)]
pub fn march<F, E>(ray: &mut Ray, config: &MarchConfig, step_bound: F, escaped: E) -> MarchResult
where
    F: Fn(Vec3Fx) -> Fx32,
    E: Fn(Vec3Fx) -> bool,
{
    for step in 0..config.max_steps {
        let bound = step_bound(ray.position);
        if bound < config.hit_epsilon {
            return MarchResult {
                outcome: MarchOutcome::Hit,
                steps: step,
            };
        }
        ray.advance(bound);
        if escaped(ray.position) {
            return MarchResult {
                outcome: MarchOutcome::Escaped,
                steps: step + 1,
            };
        }
    }
    MarchResult {
        outcome: MarchOutcome::Exhausted,
        steps: config.max_steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;

    fn config(scene: &Scene) -> MarchConfig {
        MarchConfig {
            hit_epsilon: scene.primary_epsilon,
            max_steps: scene.max_steps,
        }
    }

    #[test]
    fn test_hit_on_sphere() {
        let scene = Scene::default();
        // Straight at the sphere center from the camera origin
        let mut ray = Ray::new(
            Vec3Fx::ZERO,
            Vec3Fx::new(Fx32::ZERO, Fx32::from_f32(0.0925), Fx32::from_f32(0.74)),
        );
        let result = march(
            &mut ray,
            &config(&scene),
            |p| scene.min_step(p),
            |p| scene.escaped(p),
        );
        assert_eq!(result.outcome, MarchOutcome::Hit);
        assert!(result.steps > 0 && result.steps < scene.max_steps);
        // Terminated within epsilon of the surface, never inside it
        let d2 = scene.sphere_distance_squared(ray.position);
        assert!(d2 >= Fx32::from_int(16));
        assert!(d2 < Fx32::from_f32(16.07));
    }

    #[test]
    fn test_escape_to_sky() {
        let scene = Scene::default();
        let mut ray = Ray::new(
            Vec3Fx::ZERO,
            Vec3Fx::new(Fx32::ZERO, Fx32::from_f32(0.37), Fx32::from_f32(0.74)),
        );
        let result = march(
            &mut ray,
            &config(&scene),
            |p| scene.min_step(p),
            |p| scene.escaped(p),
        );
        assert_eq!(result.outcome, MarchOutcome::Escaped);
        assert!(ray.position.y > scene.sky_bound);
    }

    #[test]
    fn test_exhausted_when_nothing_terminates() {
        // Zero direction: the position never moves, the bound never
        // shrinks, and only the budget ends the loop
        let mut ray = Ray::new(Vec3Fx::ZERO, Vec3Fx::ZERO);
        let cfg = MarchConfig {
            hit_epsilon: Fx32::from_raw(0x100),
            max_steps: 64,
        };
        let result = march(&mut ray, &cfg, |_| Fx32::ONE, |_| false);
        assert_eq!(result.outcome, MarchOutcome::Exhausted);
        assert_eq!(result.steps, 64);
        assert_eq!(ray.position, Vec3Fx::ZERO);
    }

    #[test]
    fn test_immediate_hit_takes_zero_steps() {
        let scene = Scene::default();
        // Already on the sphere surface
        let mut ray = Ray::new(Vec3Fx::from_ints(0, 2, 12), Vec3Fx::from_ints(0, 0, 1));
        let result = march(
            &mut ray,
            &config(&scene),
            |p| scene.min_step(p),
            |p| scene.escaped(p),
        );
        assert_eq!(result.outcome, MarchOutcome::Hit);
        assert_eq!(result.steps, 0);
        assert_eq!(ray.position, Vec3Fx::from_ints(0, 2, 12));
    }
}
