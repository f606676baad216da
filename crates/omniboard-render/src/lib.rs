//! Software raster backend for Omniboard.
//!
//! Renders committed and in-progress elements onto RGBA8 pixel surfaces,
//! deterministically: replaying the same history twice produces identical
//! pixels.

pub mod board;
pub mod decode;
pub mod pixmap;
pub mod rasterizer;

pub use board::Board;
pub use decode::decode_template;
pub use pixmap::Pixmap;
pub use rasterizer::{BACKGROUND, render_element, replay};

use thiserror::Error;

/// Raster backend errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
}
