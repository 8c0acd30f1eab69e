//! Frame drivers: iterate the viewport and forward glyphs to a surface.
//!
//! The serial driver walks rows top to bottom, columns left to right. The
//! parallel driver exploits pixel independence (the scene is read-only and
//! every ray is stack-scoped) to shade rows concurrently, then blits in
//! order.

use std::time::Instant;

use log::debug;
use rayon::prelude::*;

use crate::scene::Scene;
use crate::shade::{glyph_for, shade_pixel};
use crate::surface::{GlyphSurface, SurfaceError};
use crate::viewport::{Viewport, ViewportCoord};

/// Render one frame serially.
///
/// Rows advance in steps of 2 to compensate for non-square character
/// cells; the output row is the viewport row halved.
pub fn render_frame<S: GlyphSurface>(
    scene: &Scene,
    viewport: &Viewport,
    surface: &mut S,
) -> Result<(), SurfaceError> {
    let start = Instant::now();
    for y in (0..viewport.height).step_by(2) {
        for x in 0..viewport.width {
            let illum = shade_pixel(scene, viewport, ViewportCoord { x, y });
            surface.put(x as u32, (y >> 1) as u32, glyph_for(illum))?;
        }
    }
    debug!("frame rendered serially in {:?}", start.elapsed());
    Ok(())
}

/// Render one frame with rows shaded in parallel.
///
/// Produces the same glyphs as [`render_frame`]: shading is deterministic
/// and pixels share no mutable state, so only the evaluation order
/// differs. Surface writes still happen serially, in row order.
pub fn render_frame_parallel<S: GlyphSurface>(
    scene: &Scene,
    viewport: &Viewport,
    surface: &mut S,
) -> Result<(), SurfaceError> {
    let start = Instant::now();
    let rows: Vec<i32> = (0..viewport.height).step_by(2).collect();
    let shaded: Vec<(i32, Vec<char>)> = rows
        .par_iter()
        .map(|&y| {
            let glyphs = (0..viewport.width)
                .map(|x| glyph_for(shade_pixel(scene, viewport, ViewportCoord { x, y })))
                .collect();
            (y, glyphs)
        })
        .collect();

    for (y, glyphs) in shaded {
        for (x, glyph) in glyphs.into_iter().enumerate() {
            surface.put(x as u32, (y >> 1) as u32, glyph)?;
        }
    }
    debug!("frame rendered in parallel in {:?}", start.elapsed());
    Ok(())
}
