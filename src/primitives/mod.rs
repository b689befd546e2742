//! Core matrix primitive.
//!
//! The matrix type plus the construction-time validation that guards it.

mod matrix;
mod validate;

pub use matrix::Matrix;

#[cfg(test)]
mod tests_matrix_contract;
