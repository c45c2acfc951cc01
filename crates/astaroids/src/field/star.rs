//! Star entity: drawn traits, motion state, and its two owned polygons.

use nalgebra::Vector2;

use crate::matrix::{Matrix, MatrixError};
use crate::polygon::Polygon;
use crate::render::Rgb;

/// Lifecycle tag. `Invalid` is terminal until the whole field is re-placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarState {
    Valid,
    Invalid,
}

/// Per-star values drawn once at placement and kept across retries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarTraits {
    /// Radians added to the accumulated rotation each tick.
    pub rotation_speed: f64,
    /// Displacement per tick.
    pub velocity: Vector2<f64>,
    pub color: Rgb,
}

/// A drifting, spinning star.
///
/// Invariants:
/// - `shape` is the local outline, rotated cumulatively and never translated.
/// - `snapshot` is `translation(position) · shape` for the current tick and has
///   the same vertex count as `shape`.
/// - `Invalid` is terminal; only re-placement produces a fresh `Valid` star.
#[derive(Clone, Debug)]
pub struct Star {
    traits: StarTraits,
    position: Vector2<f64>,
    scale: f64,
    state: StarState,
    shape: Polygon,
    snapshot: Polygon,
}

impl Star {
    /// Scale `base` uniformly in the plane and place it at `position`.
    pub fn new(
        traits: StarTraits,
        position: Vector2<f64>,
        scale: f64,
        base: &Polygon,
    ) -> Result<Self, MatrixError> {
        let shape = base.transform(&Matrix::scale(scale, scale, 1.0))?;
        let snapshot = shape.transform(&translation_to(position))?;
        Ok(Self {
            traits,
            position,
            scale,
            state: StarState::Valid,
            shape,
            snapshot,
        })
    }

    pub fn traits(&self) -> &StarTraits {
        &self.traits
    }

    /// Center in world coordinates.
    pub fn position(&self) -> Vector2<f64> {
        self.position
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn state(&self) -> StarState {
        self.state
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.state == StarState::Valid
    }

    #[inline]
    pub fn invalidate(&mut self) {
        self.state = StarState::Invalid;
    }

    /// Local outline (accumulated rotation, no translation).
    pub fn shape(&self) -> &Polygon {
        &self.shape
    }

    /// World-space outline for the current tick.
    pub fn snapshot(&self) -> &Polygon {
        &self.snapshot
    }

    /// Move by one velocity step, spin `shape` in place, and rebuild `snapshot`.
    pub(crate) fn advance(&mut self) -> Result<(), MatrixError> {
        self.position += self.traits.velocity;
        let spin = Matrix::rotation(self.traits.rotation_speed, 0.0, 0.0, 1.0);
        self.shape.transform_in_place(&spin)?;
        self.snapshot = self.shape.transform(&translation_to(self.position))?;
        Ok(())
    }
}

#[inline]
fn translation_to(position: Vector2<f64>) -> Matrix {
    Matrix::translation(position.x, position.y, 0.0)
}
