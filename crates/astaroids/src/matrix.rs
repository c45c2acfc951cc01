//! Dense matrices with checked shapes and homogeneous transform constructors.
//!
//! Purpose
//! - Give the polygon layer a small, explicit linear-algebra surface where every
//!   shape or index problem comes back as a `MatrixError` instead of a panic
//!   deep inside nalgebra.
//! - Build the 4×4 homogeneous transforms (translation, scale, axis-angle
//!   rotation) used to move stars around.
//!
//! Conventions
//! - Elements are addressed as `(x, y)` = (column, row). `width` counts columns,
//!   `height` counts rows. Flat arrays are column-major.
//! - No operation mutates its operands; every result is freshly owned.
//!
//! Code cross-refs: `polygon::Polygon` (4×n backing matrix, one column per vertex).

use nalgebra::{DMatrix, Matrix4, Rotation3, Unit, Vector3, Vector4};
use std::fmt;

/// Contract violations of the matrix and polygon layers.
///
/// All variants indicate a caller bug (wrong shapes or indices), never a
/// transient condition. Shapes are reported as `(width, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatrixError {
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    NotSquare {
        width: usize,
        height: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { op, lhs, rhs } => write!(
                f,
                "dimension mismatch in {op}: {}x{} vs {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            Self::OutOfRange {
                x,
                y,
                width,
                height,
            } => write!(f, "index ({x}, {y}) out of range for {width}x{height} matrix"),
            Self::NotSquare { width, height } => {
                write!(f, "determinant of non-square {width}x{height} matrix")
            }
        }
    }
}

impl std::error::Error for MatrixError {}

/// Dense `f64` matrix with fixed dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: DMatrix<f64>,
}

impl Matrix {
    /// Zero-filled `width × height` matrix.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            data: DMatrix::zeros(height, width),
        }
    }

    /// `n × n` identity.
    pub fn identity(n: usize) -> Self {
        Self {
            data: DMatrix::identity(n, n),
        }
    }

    /// Populate from a column-major slice of exactly `width * height` values.
    pub fn from_array(values: &[f64], width: usize, height: usize) -> Result<Self, MatrixError> {
        if values.len() != width * height {
            return Err(MatrixError::DimensionMismatch {
                op: "from_array",
                lhs: (width, height),
                rhs: (values.len(), 1),
            });
        }
        Ok(Self {
            data: DMatrix::from_column_slice(height, width, values),
        })
    }

    pub(crate) fn from_dmatrix(data: DMatrix<f64>) -> Self {
        Self { data }
    }

    pub(crate) fn raw(&self) -> &DMatrix<f64> {
        &self.data
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    #[inline]
    fn shape(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn check_index(&self, x: usize, y: usize) -> Result<(), MatrixError> {
        if x >= self.width() || y >= self.height() {
            return Err(MatrixError::OutOfRange {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }

    pub fn get(&self, x: usize, y: usize) -> Result<f64, MatrixError> {
        self.check_index(x, y)?;
        Ok(self.data[(y, x)])
    }

    pub fn set(&mut self, x: usize, y: usize, value: f64) -> Result<(), MatrixError> {
        self.check_index(x, y)?;
        self.data[(y, x)] = value;
        Ok(())
    }

    /// Element-wise sum; shapes must match exactly.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::DimensionMismatch {
                op: "add",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(Self {
            data: &self.data + &rhs.data,
        })
    }

    pub fn negate(&self) -> Matrix {
        Self { data: -&self.data }
    }

    /// Product `self · rhs`; requires `self.width == rhs.height`.
    /// The result is `rhs.width × self.height`.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.width() != rhs.height() {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(Self {
            data: &self.data * &rhs.data,
        })
    }

    /// Determinant via LU decomposition.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        if !self.data.is_square() {
            return Err(MatrixError::NotSquare {
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(self.data.determinant())
    }

    /// First column of a 4-row matrix read as a homogeneous point.
    pub fn to_point(&self) -> Result<Vector4<f64>, MatrixError> {
        if self.height() != 4 {
            return Err(MatrixError::DimensionMismatch {
                op: "to_point",
                lhs: self.shape(),
                rhs: (1, 4),
            });
        }
        self.check_index(0, 0)?;
        Ok(Vector4::new(
            self.data[(0, 0)],
            self.data[(1, 0)],
            self.data[(2, 0)],
            self.data[(3, 0)],
        ))
    }

    /// Homogeneous translation by `(x, y, z)`.
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        Matrix4::new_translation(&Vector3::new(x, y, z)).into()
    }

    /// Homogeneous non-uniform scale `diag(x, y, z, 1)`.
    pub fn scale(x: f64, y: f64, z: f64) -> Self {
        Matrix4::new_nonuniform_scaling(&Vector3::new(x, y, z)).into()
    }

    /// Homogeneous rotation by `theta` radians about the axis `(ax, ay, az)`.
    ///
    /// The axis is normalized first. A zero axis has no direction and yields the identity.
    pub fn rotation(theta: f64, ax: f64, ay: f64, az: f64) -> Self {
        match Unit::try_new(Vector3::new(ax, ay, az), 0.0) {
            Some(axis) => Rotation3::from_axis_angle(&axis, theta)
                .to_homogeneous()
                .into(),
            None => Self::identity(4),
        }
    }
}

impl From<Matrix4<f64>> for Matrix {
    fn from(m: Matrix4<f64>) -> Self {
        Self {
            data: DMatrix::from_column_slice(4, 4, m.as_slice()),
        }
    }
}

impl std::ops::Neg for &Matrix {
    type Output = Matrix;
    #[inline]
    fn neg(self) -> Matrix {
        self.negate()
    }
}
