//! Per-pixel shading: primary pass, shadow probe, glyph quantization.
//!
//! Illumination at this layer is ternary by design. The tagged
//! [`Illumination`] verdict is converted to the numeric quantization
//! domain only at the glyph-selection boundary, where a five-band palette
//! stands ready for continuous shading even though the current light
//! model reaches just three of its bands.

use crate::fixed::Fx32;
use crate::march::{march, MarchConfig, MarchOutcome};
use crate::scene::Scene;
use crate::vec3::Ray;
use crate::viewport::{Viewport, ViewportCoord};

/// Ternary illumination verdict for one pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Illumination {
    /// Unobstructed line to the light.
    Direct,
    /// The light is blocked by geometry.
    Shadowed,
    /// Nothing resolved: the primary ray escaped or a march ran out of
    /// budget. Rendered as background.
    Unresolved,
}

/// Quantization-domain encoding of [`Illumination::Direct`].
pub const INTENSITY_DIRECT: Fx32 = Fx32::from_f32(1.0);
/// Quantization-domain encoding of [`Illumination::Shadowed`].
pub const INTENSITY_SHADOWED: Fx32 = Fx32::from_f32(0.2);
/// Quantization-domain encoding of [`Illumination::Unresolved`].
pub const INTENSITY_UNRESOLVED: Fx32 = Fx32::from_f32(0.0);

impl Illumination {
    /// Numeric encoding in the quantization domain.
    #[inline(always)]
    pub const fn intensity(self) -> Fx32 {
        match self {
            Illumination::Direct => INTENSITY_DIRECT,
            Illumination::Shadowed => INTENSITY_SHADOWED,
            Illumination::Unresolved => INTENSITY_UNRESOLVED,
        }
    }
}

/// Display palette, darkest to brightest.
pub const PALETTE: [char; 5] = [' ', '.', ':', '#', '!'];

/// Ascending thresholds between palette bands. An intensity maps to the
/// first band it is strictly less than, so a value exactly on a threshold
/// lands in the next brighter band.
pub const BAND_THRESHOLDS: [Fx32; 4] = [
    Fx32::from_parts(0, 0x2000),
    Fx32::from_parts(0, 0x4000),
    Fx32::from_parts(0, 0x8000),
    Fx32::from_parts(1, 0x2000),
];

/// Quantize an intensity into the display palette.
#[inline(always)]
pub fn glyph_for_intensity(intensity: Fx32) -> char {
    for (i, threshold) in BAND_THRESHOLDS.iter().enumerate() {
        if intensity < *threshold {
            return PALETTE[i];
        }
    }
    PALETTE[PALETTE.len() - 1]
}

/// Glyph for a ternary illumination verdict.
#[inline(always)]
pub fn glyph_for(illum: Illumination) -> char {
    glyph_for_intensity(illum.intensity())
}

/// Secondary march from a surface hit toward the light.
///
/// The ray is the one the primary pass left at the surface: its direction
/// is re-pointed at the light and the position is advanced by a fixed
/// offset to escape self-intersection with the surface just hit, then it
/// marches under the tighter shadow epsilon.
pub fn shadow_probe(scene: &Scene, ray: &mut Ray) -> Illumination {
    ray.direction = scene.light_dir;
    ray.advance(scene.shadow_start_offset);

    let config = MarchConfig {
        hit_epsilon: scene.shadow_epsilon,
        max_steps: scene.max_steps,
    };
    let result = march(
        ray,
        &config,
        |p| scene.min_step(p),
        |p| scene.escaped(p),
    );
    match result.outcome {
        MarchOutcome::Hit => Illumination::Shadowed,
        MarchOutcome::Escaped => Illumination::Direct,
        MarchOutcome::Exhausted => Illumination::Unresolved,
    }
}

/// Evaluate one pixel: march the camera ray, and on a surface hit run the
/// shadow probe from the hit position.
///
/// A primary ray that escapes or exhausts its budget yields
/// [`Illumination::Unresolved`]; open sky and timeout deliberately render
/// identically as background.
pub fn shade_pixel(scene: &Scene, viewport: &Viewport, coord: ViewportCoord) -> Illumination {
    let mut ray = viewport.primary_ray(coord);

    let config = MarchConfig {
        hit_epsilon: scene.primary_epsilon,
        max_steps: scene.max_steps,
    };
    let result = march(
        &mut ray,
        &config,
        |p| scene.min_step(p),
        |p| scene.escaped(p),
    );
    match result.outcome {
        MarchOutcome::Hit => shadow_probe(scene, &mut ray),
        MarchOutcome::Escaped | MarchOutcome::Exhausted => Illumination::Unresolved,
    }
}
