//! # lissajous-viz
//!
//! Interactive Lissajous curves on a colored character grid.
//!
//! The curve `x = sin(a·t + δ)`, `y = sin(b·t)` is sampled once per grid
//! cell over one period and drawn as a speckle of randomly colored points.
//! Keys adjust `a`, `b` and `δ`; the screen is redrawn only when the
//! parameters actually change.
//!
//! ## Keys
//!
//! | Key | Effect |
//! |-----|--------|
//! | `A` / `a` | raise / lower `a` |
//! | `B` / `b` | raise / lower `b` |
//! | `+` / `-` | advance / retard `δ` |
//! | `q` / `Q` | quit |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lissajous_viz::prelude::*;
//!
//! let app = App::new(Config::default());
//! app.run()?;
//! ```
//!
//! Headless rendering into a ratatui buffer:
//!
//! ```rust
//! use lissajous_viz::prelude::*;
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//!
//! let grid = GridSize::new(24, 80);
//! let mut rasterizer = Rasterizer::new(grid, CycleColors::new());
//! let mut buffer = Buffer::empty(Rect::new(0, 0, grid.cols, grid.rows));
//!
//! rasterizer.rasterize(&mut buffer, &CurveParameters::new(3.0, 2.0, 0.0));
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Debug logging (`LISSAJOUS_DEBUG=1`).
pub mod debug;

/// Curve parameters and evaluation.
pub mod curve;

/// Point palette and color sources.
pub mod color;

/// Grid sizes and cell positions.
pub mod geometry;

/// Curve-to-grid scales.
pub mod scale;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Display surface abstraction.
pub mod surface;

/// Curve rasterization.
pub mod render;

// ============================================================================
// Application
// ============================================================================

/// Key mapping.
pub mod input;

/// Parameter state and redraw control.
pub mod controller;

/// Configuration file.
pub mod config;

/// Terminal session and main loop.
pub mod app;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for lissajous-viz operations.
pub mod error;

pub use error::{LissajousError, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
pub mod prelude {
    pub use crate::app::{App, KeySource};
    pub use crate::color::{ColorSource, CycleColors, PaletteColor, RandomColors};
    pub use crate::config::Config;
    pub use crate::controller::{Controller, ControllerState, Update};
    pub use crate::curve::CurveParameters;
    pub use crate::error::{LissajousError, Result};
    pub use crate::geometry::{Cell, GridSize};
    pub use crate::input::{Action, InputHandler};
    pub use crate::render::{Rasterizer, Sample, SampleSet};
    pub use crate::surface::Surface;
}
