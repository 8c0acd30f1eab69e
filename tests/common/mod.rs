//! Shared helpers for integration tests.

#![allow(dead_code)]

use fixtrace::prelude::*;

/// The reference scene.
pub fn reference_scene() -> Scene {
    Scene::default()
}

/// The reference viewport.
pub fn reference_viewport() -> Viewport {
    Viewport::default()
}

/// A frame buffer sized for the reference viewport's output.
pub fn reference_buffer(viewport: &Viewport) -> FrameBuffer {
    FrameBuffer::new(viewport.width as u32, viewport.out_height() as u32)
}

/// Shade a single reference pixel down to its glyph.
pub fn glyph_at(scene: &Scene, viewport: &Viewport, x: i32, y: i32) -> char {
    glyph_for(shade_pixel(scene, viewport, ViewportCoord { x, y }))
}
