//! Matrix type for 2D numeric data.

use std::fmt;
use std::ops::{Div, Index, Mul, Neg};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validate;
use crate::error::{MatrizError, Result};

/// A 2D matrix of numeric values (row-major storage).
///
/// A matrix is validated once, at construction; after that it is a plain
/// immutable value. No public mutator exists, every operation returns a
/// fresh matrix, and operands are never modified.
///
/// # Examples
///
/// ```
/// use matriz::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).expect("rectangular grid");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a flat row-major vector.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if either dimension is zero
    /// or data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::dimension_mismatch(
                "at least 1x1",
                format!("{rows}x{cols}"),
            ));
        }
        if data.len() != rows * cols {
            return Err(MatrizError::dimension_mismatch(
                format!("{} elements ({rows}x{cols})", rows * cols),
                format!("{} elements", data.len()),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a new matrix from nested row data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if the grid is empty, has
    /// an empty row, or is ragged. Ragged grids are detected at the first
    /// boundary where a row's length differs from the next row's.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        validate::validate_rows(&rows)?;
        let row_count = rows.len();
        let col_count = rows[0].len();
        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            rows: row_count,
            cols: col_count,
        })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix has as many rows as columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Transposes the matrix, swapping its dimensions.
    ///
    /// Transpose is its own inverse: `m.transpose().transpose() == m`.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.get(i, j));
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl Matrix<f64> {
    /// Creates a matrix from an untyped JSON value, running the full
    /// element-level validation: every cell must be a plain number, not a
    /// boolean, string, null, object, or nested array.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] for structural problems
    /// (non-array root or row, empty or ragged grid) and
    /// [`MatrizError::InvalidElement`] with the offending value and its
    /// (row, col) position for bad cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use matriz::{Matrix, MatrizError};
    /// use serde_json::json;
    ///
    /// let m = Matrix::from_value(&json!([[1, 2], [3, 4]])).expect("valid grid");
    /// assert_eq!(m.shape(), (2, 2));
    ///
    /// let err = Matrix::from_value(&json!([[true]])).unwrap_err();
    /// assert!(matches!(err, MatrizError::InvalidElement { .. }));
    /// ```
    pub fn from_value(value: &Value) -> Result<Self> {
        let rows = validate::rows_from_value(value)?;
        Self::from_rows(rows)
    }

    /// Creates a matrix from a JSON string of nested arrays.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::Serialization`] if the text is not valid JSON,
    /// otherwise validates like [`Matrix::from_value`].
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Creates an n x n matrix with 1 on the main diagonal and 0 elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if n is zero.
    pub fn identity(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(MatrizError::dimension_mismatch("at least 1x1", "0x0"));
        }
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Ok(Self {
            data,
            rows: n,
            cols: n,
        })
    }

    /// Creates an m x n matrix with every cell equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if either dimension is zero.
    pub fn full(dims: (usize, usize), value: f64) -> Result<Self> {
        let (rows, cols) = dims;
        if rows == 0 || cols == 0 {
            return Err(MatrizError::dimension_mismatch(
                "at least 1x1",
                format!("{rows}x{cols}"),
            ));
        }
        Ok(Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        })
    }

    /// Creates an m x n matrix of zeros.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if either dimension is zero.
    pub fn zeros(dims: (usize, usize)) -> Result<Self> {
        Self::full(dims, 0.0)
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.shape() != other.shape() {
            return Err(MatrizError::shape_mismatch(self.shape(), other.shape()));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] if the inner dimensions
    /// don't match (self must be m x n, other n x p).
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::dimension_mismatch(
                format!("{}x{} (inner dimension {})", self.rows, self.cols, self.cols),
                format!("{}x{}", other.rows, other.cols),
            ));
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Multiplies each element by a scalar.
    ///
    /// Also available as `m * s` and `s * m`; both orders give equal results.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Divides each element by a scalar.
    ///
    /// No zero-check is performed: dividing by 0.0 propagates IEEE semantics
    /// (inf/NaN cells). Division by a matrix is not part of the API.
    #[must_use]
    pub fn div_scalar(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x / scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Raises a square matrix to a non-negative integer power by repeated
    /// multiplication.
    ///
    /// An exponent of 0 yields the identity of self's size; an exponent of
    /// k > 0 yields self multiplied by itself k - 1 times.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// - [`MatrizError::InvalidOperation`] if the exponent is not an integer
    ///   (fractional, NaN, or infinite);
    /// - [`MatrizError::NotSquare`] if the matrix is not square;
    /// - [`MatrizError::Unsupported`] if the exponent is negative.
    pub fn pow(&self, exponent: f64) -> Result<Self> {
        if !exponent.is_finite() || exponent.fract() != 0.0 {
            return Err(MatrizError::InvalidOperation {
                reason: format!("matrix power must be an integer, got {exponent}"),
            });
        }
        if !self.is_square() {
            return Err(MatrizError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if exponent < 0.0 {
            return Err(MatrizError::unsupported("negative matrix powers"));
        }
        if exponent > f64::from(u32::MAX) {
            return Err(MatrizError::InvalidOperation {
                reason: format!("matrix power out of range, got {exponent}"),
            });
        }

        let n = exponent as u32;
        if n == 0 {
            return Self::identity(self.rows);
        }

        let mut result = self.clone();
        for _ in 1..n {
            result = result.matmul(self)?;
        }
        Ok(result)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.cols + col]
    }
}

impl Mul<f64> for &Matrix<f64> {
    type Output = Matrix<f64>;

    fn mul(self, scalar: f64) -> Matrix<f64> {
        self.mul_scalar(scalar)
    }
}

impl Mul<f64> for Matrix<f64> {
    type Output = Matrix<f64>;

    fn mul(self, scalar: f64) -> Matrix<f64> {
        self.mul_scalar(scalar)
    }
}

impl Mul<&Matrix<f64>> for f64 {
    type Output = Matrix<f64>;

    fn mul(self, matrix: &Matrix<f64>) -> Matrix<f64> {
        matrix.mul_scalar(self)
    }
}

impl Mul<Matrix<f64>> for f64 {
    type Output = Matrix<f64>;

    fn mul(self, matrix: Matrix<f64>) -> Matrix<f64> {
        matrix.mul_scalar(self)
    }
}

impl Div<f64> for &Matrix<f64> {
    type Output = Matrix<f64>;

    fn div(self, scalar: f64) -> Matrix<f64> {
        self.div_scalar(scalar)
    }
}

impl Div<f64> for Matrix<f64> {
    type Output = Matrix<f64>;

    fn div(self, scalar: f64) -> Matrix<f64> {
        self.div_scalar(scalar)
    }
}

impl Neg for &Matrix<f64> {
    type Output = Matrix<f64>;

    fn neg(self) -> Matrix<f64> {
        self.mul_scalar(-1.0)
    }
}

impl Neg for Matrix<f64> {
    type Output = Matrix<f64>;

    fn neg(self) -> Matrix<f64> {
        self.mul_scalar(-1.0)
    }
}

impl<T: Copy + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.rows {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.get(i, j))?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
