//! # fixtrace
//!
//! A fixed-point sphere-tracing renderer that shades a minimal scene, one
//! sphere above an infinite floor under one directional light, into ASCII
//! glyphs.
//!
//! ## Features
//!
//! - **Fixed point**: Q16.16 scalar with an audited widened multiply; no
//!   runtime floating point anywhere in the core
//! - **Sphere tracing**: generic marching loop with tagged
//!   Hit/Escaped/Exhausted outcomes and a fixed iteration budget
//! - **Approximate sqrt**: piecewise under-bound used to keep marching
//!   steps safe
//! - **Shadow probe**: secondary march toward the light, ternary verdict
//! - **Glyph quantization**: five-band palette over the illumination
//!   domain
//! - **Frame drivers**: serial and row-parallel, writing through a
//!   capability-typed glyph surface
//!
//! ## Example
//!
//! ```rust
//! use fixtrace::prelude::*;
//!
//! let scene = Scene::default();
//! let viewport = Viewport::default();
//!
//! // The optical center lands on the sphere's self-shadowed front
//! let illum = shade_pixel(&scene, &viewport, ViewportCoord { x: 24, y: 16 });
//! assert_eq!(glyph_for(illum), '.');
//!
//! // Well above the horizon there is nothing to hit
//! let sky = shade_pixel(&scene, &viewport, ViewportCoord { x: 24, y: 0 });
//! assert_eq!(glyph_for(sky), ' ');
//! ```

#![warn(missing_docs)]

pub mod fixed;
pub mod march;
pub mod render;
pub mod scene;
pub mod shade;
pub mod sqrt;
pub mod surface;
pub mod vec3;
pub mod viewport;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude, commonly used types and functions.
pub mod prelude {
    pub use crate::fixed::Fx32;
    pub use crate::march::{march, MarchConfig, MarchOutcome, MarchResult};
    pub use crate::render::{render_frame, render_frame_parallel};
    pub use crate::scene::Scene;
    pub use crate::shade::{
        glyph_for, glyph_for_intensity, shade_pixel, shadow_probe, Illumination, BAND_THRESHOLDS,
        PALETTE,
    };
    pub use crate::sqrt::sphere_sqrt;
    pub use crate::surface::{FrameBuffer, GlyphSurface, SurfaceError};
    pub use crate::vec3::{Ray, Vec3Fx};
    pub use crate::viewport::{Viewport, ViewportCoord};
}
