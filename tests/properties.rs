//! Property-based tests for the matrix algebra and the expression language.

use matrica::{
    dispatcher::core::Calculator,
    interpreter::value::core::Value,
    matrix::{Matrix, Residue},
};
use proptest::prelude::*;

type Z101 = Residue<101>;

// Strategy for generating matrices over Z/101 with 1-4 rows and columns
fn residue_matrix() -> impl Strategy<Value = Matrix<Z101>> {
    (1_usize..=4, 1_usize..=4).prop_flat_map(|(rows, columns)| {
        proptest::collection::vec(proptest::collection::vec((0_i64..101).prop_map(Z101::new),
                                                            columns),
                                  rows)
        .prop_map(|cells| Matrix::from_rows(cells).unwrap())
    })
}

// Strategy for generating small square integer matrices, exact in f32 when
// raised to low powers
fn small_square() -> impl Strategy<Value = Matrix<f32>> {
    (1_usize..=3).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec((-3_i8..=3).prop_map(f32::from), n),
                                  n)
        .prop_map(|cells| Matrix::from_rows(cells).unwrap())
    })
}

// Strategy for generating strictly diagonally dominant, hence invertible and
// well-conditioned, matrices
fn dominant_square() -> impl Strategy<Value = Matrix<f32>> {
    (1_usize..=4).prop_flat_map(|n| {
        (proptest::collection::vec(proptest::collection::vec(-1_i8..=1, n), n),
         proptest::collection::vec(1_i8..=4, n),
         proptest::collection::vec(any::<bool>(), n))
        .prop_map(move |(cells, extra, negative)| {
            let mut m = Matrix::zeros(n, n);
            for i in 0..n {
                for j in 0..n {
                    m[(i, j)] = f32::from(cells[i][j]);
                }
                #[allow(clippy::cast_precision_loss)]
                let diagonal = n as f32 + f32::from(extra[i]);
                m[(i, i)] = if negative[i] { -diagonal } else { diagonal };
            }
            m
        })
    })
}

fn approx_eq(a: &Matrix<f32>, b: &Matrix<f32>, tolerance: f32) -> bool {
    a.shape() == b.shape() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tolerance)
}

proptest! {
    // Row reduction over an exact field

    #[test]
    fn rref_is_idempotent(m in residue_matrix()) {
        let once = m.reduced_row_echelon_form();
        prop_assert_eq!(once.reduced_row_echelon_form(), once);
    }

    #[test]
    fn rank_of_transpose(m in residue_matrix()) {
        prop_assert_eq!(m.rank(), m.transposed().rank());
    }

    #[test]
    fn rank_is_bounded_by_shape(m in residue_matrix()) {
        prop_assert!(m.rank() <= m.rows().min(m.columns()));
    }

    #[test]
    fn full_rank_iff_nonzero_determinant(m in residue_matrix()) {
        prop_assume!(m.is_square());
        prop_assert_eq!(m.rank() == m.rows(), m.determinant() != Z101::new(0));
    }

    #[test]
    fn exact_inverse(m in residue_matrix()) {
        prop_assume!(m.is_square() && m.determinant() != Z101::new(0));
        let product = &m * &m.inverse();
        prop_assert_eq!(product, Matrix::identity(m.rows()));
    }

    // Floating point inverse and powers

    #[test]
    fn inverse_round_trip(a in dominant_square()) {
        let back = a.inverse().inverse();
        prop_assert!(approx_eq(&back, &a, 1e-4), "{} != {}", back, a);
    }

    #[test]
    fn determinant_of_inverse(a in dominant_square()) {
        let product = a.determinant() * a.inverse().determinant();
        prop_assert!((product - 1.0).abs() <= 1e-3, "det(A) * det(inv A) = {}", product);
    }

    #[test]
    fn first_power_is_identity_map(a in small_square()) {
        prop_assert_eq!(a.pow(1), a);
    }

    #[test]
    fn powers_add(a in small_square(), m in 1_u32..=3, n in 1_u32..=3) {
        prop_assert_eq!(a.pow(m + n), &a.pow(m) * &a.pow(n));
    }

    // Expression language

    #[test]
    fn subtraction_groups_left(a in -50_i16..50, b in -50_i16..50, c in 0_i16..50) {
        let mut calculator = Calculator::new();
        let text = format!("({a})-({b})-{c}").replace("(-", "(0-");
        let expected = f32::from(a) - f32::from(b) - f32::from(c);
        prop_assert_eq!(calculator.evaluate(&text), Ok(Value::Scalar(expected)));
    }

    #[test]
    fn bracketing_a_whole_expression_changes_nothing(a in 0_u8..20, b in 0_u8..20, c in 1_u8..20) {
        let text = format!("{a}+{b}*{c}");
        let mut calculator = Calculator::new();
        let plain = calculator.evaluate(&text);
        let wrapped = calculator.evaluate(&format!("(({text}))"));
        prop_assert_eq!(plain, wrapped);
    }
}
