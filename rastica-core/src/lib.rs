//! Rastica is a CPU 2D scan-conversion rasterizer and colorimetric
//! conversion library.
//!
//! The crate turns a serde-described [`Scene`] into pixels ([`Surface`])
//! with the classic integer scan-conversion algorithms, and converts device
//! RGB to and from the standard color models.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: build a [`Scene`] programmatically or parse it from JSON
//! 2. **Validate**: [`Scene::validate`] checks the invariants the renderer
//!    relies on
//! 3. **Rasterize**: [`render_scene`] scan-converts every shape into a
//!    straight-alpha RGBA8 [`Surface`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: rasterization is pure integer math; the same scene
//!   always produces the same bytes.
//! - **No IO in the core**: encoding surfaces to files belongs to callers
//!   (the CLI uses the `image` crate).
//! - **Scissored drawing**: every primitive honors the surface's scissor
//!   stack; line segments are clipped with Cohen-Sutherland before the
//!   Bresenham walk.
//!
//! # Color models
//!
//! [`Rgba8`] converts to and from HSL, HSV, CMY, CMYK, CIE XYZ, CIE Lab,
//! YCbCr, YUV, YIQ and YPbPr. Space types carry f64 channels in each space's
//! natural range; quantization to bytes happens only at the RGB ends, so
//! round-trips stay within one unit per channel.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod foundation;
mod raster;
mod scene;

pub use color::parse::ColorSpec;
pub use color::spaces::{Cmy, Cmyk, Hsl, Hsv, Lab, Xyz, YCbCr, YPbPr, Yiq, Yuv};
pub use foundation::core::{Canvas, Point, Rgba8};
pub use foundation::error::{RasticaError, RasticaResult};
pub use raster::clip::{ClipRect, clip_line};
pub use raster::surface::Surface;
pub use scene::model::{Scene, Shape};
pub use scene::render::render_scene;
