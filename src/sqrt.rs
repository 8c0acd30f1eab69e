//! Piecewise approximate square root for sphere tracing.
//!
//! [`sphere_sqrt`] turns a squared point-to-center distance into a usable
//! marching bound without a real square root. It is deliberately rough and
//! deliberately low: `sphere_sqrt(x) <= sqrt(x)` everywhere in its domain.
//! That under-bound is a correctness requirement, not a tuning choice.
//! Sphere tracing steps by `bound - radius`; an overestimate would let a
//! ray tunnel through the surface.

use crate::fixed::Fx32;

/// Inputs below this are treated as inside or on the sphere boundary.
const INNER_BOUND: i32 = 16 << 16;
/// Upper edge of the fine first-order band.
const MID_BOUND: i32 = 24 << 16;
/// Inputs are clamped here before evaluating.
const UPPER_BOUND: i32 = 64 << 16;

/// Monotonic, under-approximating square root of a squared distance.
///
/// Piecewise over the Q16.16 input:
///
/// - below 16.0: returns 0. Wrapped-negative inputs from the squared
///   distance accumulator land in this band too.
/// - 16.0 to 24.0: `4.0 + (x - 16.0)/16`, a first-order ramp whose 1/16
///   slope folds in one-sixteenth of the fractional remainder.
/// - 24.0 to 64.0: `3.0 + x/16`, a coarser band, continuous with the
///   previous one at 24.0.
/// - 64.0 and above: the input is clamped to 64.0 first, so the result
///   tops out at 7.0.
///
/// Both bands sit below `sqrt(x)`: the ramps start on or under the curve
/// and their 1/16 slope is below the chord slope of the concave square
/// root on each interval. The result is also monotonically non-decreasing,
/// so marching bounds never jitter backward as a ray approaches geometry.
#[inline(always)]
pub const fn sphere_sqrt(squared: Fx32) -> Fx32 {
    let x = squared.raw();
    if x < INNER_BOUND {
        return Fx32::ZERO;
    }
    if x < MID_BOUND {
        return Fx32::from_raw((4 << 16) + ((x - INNER_BOUND) >> 4));
    }
    let x = if x < UPPER_BOUND { x } else { UPPER_BOUND };
    Fx32::from_raw((3 << 16) + (x >> 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_f64(v: Fx32) -> f64 {
        v.raw() as f64 / 65536.0
    }

    #[test]
    fn test_inner_band_is_zero() {
        assert_eq!(sphere_sqrt(Fx32::ZERO), Fx32::ZERO);
        assert_eq!(sphere_sqrt(Fx32::from_f32(15.999)), Fx32::ZERO);
        assert_eq!(sphere_sqrt(Fx32::from_int(4)), Fx32::ZERO);
        // Wrapped-negative squared distances fall into the zero band
        assert_eq!(sphere_sqrt(Fx32::from_int(-100)), Fx32::ZERO);
    }

    #[test]
    fn test_band_edges() {
        // Exactly on the sphere boundary: sqrt(16) == 4 exactly
        assert_eq!(sphere_sqrt(Fx32::from_int(16)), Fx32::from_int(4));
        // Bands meet at 24.0: 4 + 8/16 == 3 + 24/16 == 4.5
        assert_eq!(sphere_sqrt(Fx32::from_int(24)), Fx32::from_f32(4.5));
        // Clamp: 64 and everything above evaluate to 3 + 64/16 == 7
        assert_eq!(sphere_sqrt(Fx32::from_int(64)), Fx32::from_int(7));
        assert_eq!(sphere_sqrt(Fx32::from_int(300)), Fx32::from_int(7));
        assert_eq!(sphere_sqrt(Fx32::from_raw(i32::MAX)), Fx32::from_int(7));
    }

    #[test]
    fn test_under_bound_over_domain() {
        // sphere_sqrt(x) <= sqrt(x) on a dense sweep of the domain
        let mut raw = 0i32;
        while raw < (80 << 16) {
            let approx = to_f64(sphere_sqrt(Fx32::from_raw(raw)));
            let exact = (raw as f64 / 65536.0).sqrt();
            assert!(
                approx <= exact + 1e-9,
                "over-estimate at raw {raw:#x}: {approx} > {exact}"
            );
            raw += 0x1357;
        }
    }

    #[test]
    fn test_monotonic_over_domain() {
        let mut prev = Fx32::ZERO;
        let mut raw = 0i32;
        while raw < (80 << 16) {
            let cur = sphere_sqrt(Fx32::from_raw(raw));
            assert!(cur >= prev, "decrease at raw {raw:#x}");
            prev = cur;
            raw += 0x800;
        }
    }
}
