//! Polygons as homogeneous vertex matrices.
//!
//! Purpose
//! - Store an ordered loop of `n` homogeneous vertices as a 4×n `Matrix`
//!   (one column per vertex) so every affine transform is a single product.
//! - Provide the two predicates the star field needs every tick: inclusive
//!   bounds containment and an edge-crossing intersection test.
//!
//! Edge-crossing semantics
//! - `intersects` reports only crossing edges. A polygon strictly inside another
//!   one (no boundary contact) is *not* intersecting.
//! - Touching or collinear configurations never count: if any endpoint lies
//!   exactly on the line through the other segment, the pair does not cross.
//!
//! Code cross-refs: `matrix::Matrix`, `field::Field::step`.

use nalgebra::{DMatrix, Vector2, Vector4};

use crate::matrix::{Matrix, MatrixError};

/// Homogeneous point (`w = 1`) or direction (`w = 0`).
pub type Vec4 = Vector4<f64>;

/// Position in the `z = 0` plane.
#[inline]
pub fn point(x: f64, y: f64) -> Vec4 {
    Vec4::new(x, y, 0.0, 1.0)
}

/// Closed axis-aligned rectangle `[low_x, high_x] × [low_y, high_y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub low_x: f64,
    pub high_x: f64,
    pub low_y: f64,
    pub high_y: f64,
}

impl Bounds {
    pub const UNIT: Bounds = Bounds {
        low_x: 0.0,
        high_x: 1.0,
        low_y: 0.0,
        high_y: 1.0,
    };

    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.low_x && x <= self.high_x && y >= self.low_y && y <= self.high_y
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Ordered, fixed-size vertex loop backed by a 4×n matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    mtx: Matrix,
}

impl Polygon {
    /// `n` vertices, all at the origin with `w = 0` until set.
    pub fn new(n: usize) -> Self {
        Self {
            mtx: Matrix::zeros(n, 4),
        }
    }

    pub fn from_points(points: &[Vec4]) -> Self {
        let coords = points.iter().flat_map(|p| p.iter().copied());
        let data = DMatrix::from_iterator(4, points.len(), coords);
        Self {
            mtx: Matrix::from_dmatrix(data),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.mtx.width()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn set_vertex(&mut self, i: usize, v: Vec4) -> Result<(), MatrixError> {
        for (y, value) in v.iter().enumerate() {
            self.mtx.set(i, y, *value)?;
        }
        Ok(())
    }

    pub fn vertex(&self, i: usize) -> Result<Vec4, MatrixError> {
        Ok(Vec4::new(
            self.mtx.get(i, 0)?,
            self.mtx.get(i, 1)?,
            self.mtx.get(i, 2)?,
            self.mtx.get(i, 3)?,
        ))
    }

    /// All vertices in loop order.
    pub fn vertices(&self) -> Vec<Vec4> {
        self.mtx
            .raw()
            .column_iter()
            .map(|c| Vec4::new(c[0], c[1], c[2], c[3]))
            .collect()
    }

    /// Copy of the backing 4×n matrix.
    pub fn to_matrix(&self) -> Matrix {
        self.mtx.clone()
    }

    #[inline]
    fn xy(&self, i: usize) -> Vector2<f64> {
        let m = self.mtx.raw();
        Vector2::new(m[(0, i)], m[(1, i)])
    }

    /// New polygon with vertices `m · p`.
    pub fn transform(&self, m: &Matrix) -> Result<Polygon, MatrixError> {
        Ok(Self {
            mtx: m.multiply(&self.mtx)?,
        })
    }

    /// Replace the vertices with `m · p`.
    pub fn transform_in_place(&mut self, m: &Matrix) -> Result<(), MatrixError> {
        self.mtx = m.multiply(&self.mtx)?;
        Ok(())
    }

    pub fn translate(&mut self, x: f64, y: f64, z: f64) -> Result<(), MatrixError> {
        self.transform_in_place(&Matrix::translation(x, y, z))
    }

    pub fn scale(&mut self, x: f64, y: f64, z: f64) -> Result<(), MatrixError> {
        self.transform_in_place(&Matrix::scale(x, y, z))
    }

    pub fn rotate(&mut self, theta: f64, ax: f64, ay: f64, az: f64) -> Result<(), MatrixError> {
        self.transform_in_place(&Matrix::rotation(theta, ax, ay, az))
    }

    /// True iff every vertex lies in `bounds` (inclusive). Empty polygons qualify.
    pub fn within_bounds(&self, bounds: &Bounds) -> bool {
        (0..self.len()).all(|i| {
            let p = self.xy(i);
            bounds.contains(p.x, p.y)
        })
    }

    /// True iff some edge of `self` crosses some edge of `other`.
    pub fn intersects(&self, other: &Polygon) -> bool {
        let n1 = self.len();
        let n2 = other.len();
        (0..n1).any(|i| {
            let a1 = self.xy(i);
            let a2 = self.xy((i + 1) % n1);
            (0..n2).any(|j| segments_intersect(a1, a2, other.xy(j), other.xy((j + 1) % n2)))
        })
    }
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// `q1` and `q2` lie strictly on opposite sides of the line through `p1 → p2`.
#[inline]
fn straddles(p1: Vector2<f64>, p2: Vector2<f64>, q1: Vector2<f64>, q2: Vector2<f64>) -> bool {
    let dir = p2 - p1;
    let s1 = cross(dir, q1 - p1);
    let s2 = cross(dir, q2 - p1);
    if s1 == 0.0 || s2 == 0.0 {
        return false;
    }
    (s1 < 0.0) != (s2 < 0.0)
}

/// Proper crossing of segments `a1a2` and `b1b2`.
///
/// An exactly-zero orientation on either side means no intersection, so
/// touching, collinear and degenerate (zero-length) segments never cross.
pub fn segments_intersect(
    a1: Vector2<f64>,
    a2: Vector2<f64>,
    b1: Vector2<f64>,
    b2: Vector2<f64>,
) -> bool {
    straddles(a1, a2, b1, b2) && straddles(b1, b2, a1, a2)
}
