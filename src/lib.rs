//! Matriz: a small dense-matrix value type with strictly validated
//! construction.
//!
//! The library provides one abstraction: an immutable m x n grid of numbers
//! with the standard linear-algebra operators (addition, subtraction, scalar
//! and matrix multiplication, scalar division, transpose, integer power,
//! equality). Raw input is validated eagerly at construction, so an invalid
//! matrix can never be observed; every failure is a distinct [`MatrizError`]
//! kind that callers can match on.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_rows(vec![vec![2.0, 4.0, 5.0], vec![5.0, 2.0, 7.0]]).unwrap();
//! let b = Matrix::from_rows(vec![
//!     vec![5.0, 3.0, 2.0, 5.0],
//!     vec![7.0, 2.0, 1.0, 3.0],
//!     vec![2.0, 3.0, 0.0, 1.0],
//! ]).unwrap();
//!
//! let product = a.matmul(&b).unwrap();
//! assert_eq!(product.shape(), (2, 4));
//! assert_eq!(product.get(0, 0), 48.0);
//!
//! // Scalar multiplication works in both orders.
//! assert_eq!(2.0 * &a, &a * 2.0);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: the `Matrix` type and its validated construction
//! - [`error`]: the error taxonomy and `Result` alias

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MatrizError, Result};
pub use primitives::Matrix;
