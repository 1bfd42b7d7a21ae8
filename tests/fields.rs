//! Matrix algebra over the fields other than `f32`.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use matrica::matrix::{Complex, Field, Matrix};

const TOLERANCE: f32 = 1e-5;

fn close(a: Complex, b: Complex) -> bool {
    (a - b).abs() <= TOLERANCE
}

#[test]
fn complex_arithmetic() {
    let a = Complex::new(3.0, 6.0);
    let b = Complex::new(2.0, 8.0);

    assert_eq!(a + b, Complex::new(5.0, 14.0));
    assert_eq!(a - b, Complex::new(1.0, -2.0));
    assert_eq!(a * b, Complex::new(-42.0, 36.0));
    assert_eq!(a.scale(0.5), Complex::new(1.5, 3.0));
    assert!(close(a / b, Complex::new(27.0 / 34.0, -3.0 / 17.0)), "{}", a / b);
    assert_eq!(a.conjugate(), Complex::new(3.0, -6.0));
    assert_eq!(-a, Complex::new(-3.0, -6.0));
}

#[test]
fn complex_division_undoes_multiplication() {
    let a = Complex::new(3.0, 6.0);
    let b = Complex::new(2.0, 8.0);
    assert!(close(a * b / b, a));
    assert!(close(Complex::one() / Complex::I, -Complex::I));
}

#[test]
fn complex_modulus_and_argument() {
    assert_eq!(Complex::new(3.0, 4.0).abs(), 5.0);
    assert_eq!(Complex::new(3.0, -4.0).norm_sqr(), 25.0);

    assert_eq!(Complex::zero().arg(), 0.0);
    assert!((Complex::new(1.0, 1.0).arg() - FRAC_PI_4).abs() <= TOLERANCE);
    assert!((Complex::I.arg() - FRAC_PI_2).abs() <= TOLERANCE);
    assert!((Complex::new(-1.0, 0.0).arg() - PI).abs() <= TOLERANCE);
    assert!((Complex::new(0.0, -1.0).arg() - 3.0 * FRAC_PI_2).abs() <= TOLERANCE);
}

#[test]
fn complex_display() {
    assert_eq!(Complex::new(5.0, 14.0).to_string(), "5+14i");
    assert_eq!(Complex::new(1.0, -2.0).to_string(), "1-2i");
    assert_eq!(Complex::from(1.5).to_string(), "1.5+0i");
}

#[test]
fn complex_matrix_determinant_and_inverse() {
    let i = Complex::I;
    let one = Complex::one();
    let m = Matrix::from_rows(vec![vec![one + i, Complex::from(2.0)], vec![i, one]]).unwrap();

    assert_eq!(m.determinant(), Complex::new(1.0, -1.0));
    assert_eq!(m.rank(), 2);

    let inverse = m.inverse();
    let expected = [[Complex::new(0.5, 0.5), Complex::new(-1.0, -1.0)],
                    [Complex::new(0.5, -0.5), Complex::new(0.0, 1.0)]];
    for (row, expected_row) in expected.iter().enumerate() {
        for (column, &value) in expected_row.iter().enumerate() {
            assert!(close(inverse[(row, column)], value),
                    "entry ({row}, {column}) is {}",
                    inverse[(row, column)]);
        }
    }

    let product = &m * &inverse;
    let identity = Matrix::<Complex>::identity(2);
    assert!(product.iter().zip(identity.iter()).all(|(&a, &b)| close(a, b)), "{product}");
}

#[test]
fn complex_singular_matrix_has_lower_rank() {
    let i = Complex::I;
    let m = Matrix::from_rows(vec![vec![Complex::one(), i], vec![i, -Complex::one()]]).unwrap();
    assert_eq!(m.determinant(), Complex::zero());
    assert_eq!(m.rank(), 1);
}

#[test]
fn double_precision_inverse() {
    // Hilbert matrix of order 3
    let m = Matrix::from_rows(vec![vec![1.0_f64, 1.0 / 2.0, 1.0 / 3.0],
                                   vec![1.0 / 2.0, 1.0 / 3.0, 1.0 / 4.0],
                                   vec![1.0 / 3.0, 1.0 / 4.0, 1.0 / 5.0]]).unwrap();
    let expected = [[9.0, -36.0, 30.0], [-36.0, 192.0, -180.0], [30.0, -180.0, 180.0]];

    assert!((m.determinant() - 1.0 / 2160.0).abs() <= 1e-12);

    let inverse = m.inverse();
    for (row, expected_row) in expected.iter().enumerate() {
        for (column, &value) in expected_row.iter().enumerate() {
            let entry: f64 = inverse[(row, column)];
            assert!((entry - value).abs() <= 1e-8, "entry ({row}, {column}) is {entry}");
        }
    }
}
