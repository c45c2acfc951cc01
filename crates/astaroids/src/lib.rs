//! Geometry and simulation core for a field of drifting, colliding stars.
//!
//! Layers (leaves first)
//! - `matrix`: dense matrices with checked shapes and homogeneous transforms.
//! - `polygon`: vertex loops stored as 4×n matrices, bounds and edge-crossing tests.
//! - `field`: star placement and the per-tick update.
//! - `render`: the seam through which hosts receive outlines to draw.
//!
//! The crate does no windowing, timing or I/O. A host owns a `Field`, calls
//! `step` once per tick and `render` after it, and calls `reset` to start over.

pub mod field;
pub mod matrix;
pub mod polygon;
pub mod render;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for hosts.
pub mod prelude {
    pub use crate::field::{
        base_outline, Field, FieldCfg, RandomSampler, Star, StarSampler, StarState, StarTraits,
        TickOutcome,
    };
    pub use crate::matrix::{Matrix, MatrixError};
    pub use crate::polygon::{point, segments_intersect, Bounds, Polygon, Vec4};
    pub use crate::render::{DrawMode, Renderer, Rgb};
}
