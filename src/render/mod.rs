//! Curve rasterization onto the character grid.
//!
//! # Algorithm
//!
//! One period of `t` is split into `rows * cols` steps. Each sample maps
//!
//! ```text
//! col = floor(cols * (x + 1) / 2)
//! row = floor((rows - 1) * (y + 1) / 2) + 1
//! ```
//!
//! with both indices clamped to the last row/column, and picks its own
//! palette color.

mod rasterizer;

pub use rasterizer::{Rasterizer, Sample, SampleSet, DEFAULT_GLYPH};
