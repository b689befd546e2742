//! Algebraic-law tests for the Matrix type.
//!
//! References:
//!   - Golub & Van Loan (2013) "Matrix Computations"

use super::Matrix;

#[test]
fn transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    assert_eq!(a.transpose().transpose(), a);
}

#[test]
fn transpose_swaps_shape() {
    let a = Matrix::from_vec(3, 5, vec![0.0; 15]).expect("valid");
    assert_eq!(a.transpose().shape(), (5, 3));
}

#[test]
fn addition_commutes() {
    let a = Matrix::from_rows(vec![
        vec![3.0, 6.0, 0.0],
        vec![1.0, -3.0, 2.0],
        vec![-9.0, 3.0, 0.0],
    ])
    .expect("valid");
    let b = Matrix::from_rows(vec![
        vec![7.0, 2.0, -6.0],
        vec![-6.0, 0.0, 1.0],
        vec![-1.0, 3.0, 6.0],
    ])
    .expect("valid");

    assert_eq!(a.add(&b).expect("same shape"), b.add(&a).expect("same shape"));
}

#[test]
fn subtraction_does_not_commute() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
    let b = Matrix::from_vec(2, 2, vec![4.0, 3.0, 2.0, 1.0]).expect("valid");

    assert_ne!(
        a.sub(&b).expect("same shape"),
        b.sub(&a).expect("same shape")
    );
    // Unless the operands are equal, where both orders give the zero matrix.
    let zero = Matrix::zeros((2, 2)).expect("valid dims");
    assert_eq!(a.sub(&a).expect("same shape"), zero);
}

#[test]
fn scalar_multiplication_commutes() {
    let a = Matrix::from_rows(vec![
        vec![4.0, 6.0, 1.0],
        vec![-5.0, 3.0, -1.0],
        vec![0.0, 1.0, 4.0],
        vec![9.0, 5.0, 0.0],
    ])
    .expect("valid");

    assert_eq!(2.0 * &a, &a * 2.0);
}

#[test]
fn identity_is_neutral_under_matmul() {
    let a = Matrix::from_vec(3, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
        .expect("valid");
    let eye = Matrix::identity(3).expect("n > 0");

    assert_eq!(a.matmul(&eye).expect("compatible"), a);
    assert_eq!(eye.matmul(&a).expect("compatible"), a);
}

#[test]
fn power_recurrence() {
    // A^k == A^(k-1) * A for k > 1.
    let a = Matrix::from_rows(vec![vec![2.0, 4.0], vec![3.0, -1.0]]).expect("valid");
    for k in 2..=4 {
        let direct = a.pow(f64::from(k)).expect("square, non-negative integer");
        let recurred = a
            .pow(f64::from(k - 1))
            .expect("square, non-negative integer")
            .matmul(&a)
            .expect("square");
        assert_eq!(direct, recurred, "recurrence failed at k={k}");
    }
}

#[test]
fn zeros_equals_full_of_zero() {
    for (m, n) in [(1, 1), (2, 5), (7, 3)] {
        assert_eq!(
            Matrix::zeros((m, n)).expect("valid dims"),
            Matrix::full((m, n), 0.0).expect("valid dims")
        );
    }
}

mod matrix_proptests {
    use super::*;
    use proptest::prelude::*;

    fn grid(rows: usize, cols: usize, seed: u32) -> Matrix<f64> {
        let data: Vec<f64> = (0..rows * cols)
            .map(|i| ((i as f64 + f64::from(seed)) * 0.37).sin() * 10.0)
            .collect();
        Matrix::from_vec(rows, cols, data).expect("valid")
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn prop_transpose_involution(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed in 0..500u32,
        ) {
            let a = grid(rows, cols, seed);
            prop_assert_eq!(a.transpose().transpose(), a);
        }

        #[test]
        fn prop_addition_commutes(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = grid(rows, cols, seed);
            let b = grid(rows, cols, seed.wrapping_add(17));
            prop_assert_eq!(
                a.add(&b).expect("same shape"),
                b.add(&a).expect("same shape")
            );
        }

        #[test]
        fn prop_scalar_multiplication_commutes(
            rows in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
            scalar in -100.0..100.0f64,
        ) {
            let a = grid(rows, cols, seed);
            prop_assert_eq!(scalar * &a, &a * scalar);
        }

        #[test]
        fn prop_identity_matmul(
            n in 1..=6usize,
            seed in 0..500u32,
        ) {
            let a = grid(n, n, seed);
            let eye = Matrix::identity(n).expect("n > 0");
            let result = a.matmul(&eye).expect("compatible");

            for i in 0..n {
                for j in 0..n {
                    prop_assert!(
                        (result.get(i, j) - a.get(i, j)).abs() < 1e-9,
                        "(A*I)[{},{}] != A[{},{}]", i, j, i, j
                    );
                }
            }
        }

        #[test]
        fn prop_zeros_equals_full_of_zero(
            rows in 1..=8usize,
            cols in 1..=8usize,
        ) {
            prop_assert_eq!(
                Matrix::zeros((rows, cols)).expect("valid dims"),
                Matrix::full((rows, cols), 0.0).expect("valid dims")
            );
        }
    }
}
