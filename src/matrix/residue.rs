use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use crate::matrix::field::Field;

/// Returns `true` if `n` is prime. Usable in constant evaluation.
#[must_use]
pub const fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// An element of the integers modulo the prime `P`.
///
/// Instantiating `Residue<P>` with a composite `P` fails to compile, since
/// division is only defined when every non-zero element has an inverse.
///
/// # Example
/// ```
/// use matrica::matrix::Residue;
///
/// let a = Residue::<7>::new(3);
/// let b = Residue::<7>::new(5);
///
/// assert_eq!((a * b).value(), 1);
/// assert_eq!((a / b).value(), 2);
/// assert_eq!(Residue::<7>::new(-1).value(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Residue<const P: u32> {
    value: u32,
}

impl<const P: u32> Residue<P> {
    /// Reduces `value` modulo `P`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        const { assert!(is_prime(P), "Residue modulus must be prime") };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_lossless)]
        let value = value.rem_euclid(P as i64) as u32;
        Self { value }
    }

    /// The canonical representative in `0..P`.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Raises the element to `exponent` by repeated squaring.
    #[must_use]
    pub fn pow(self, exponent: u32) -> Self {
        let mut result = Self::one();
        let mut base = self;
        let mut exponent = exponent;
        while exponent > 0 {
            if exponent % 2 == 1 {
                result = result * base;
            }
            base = base * base;
            exponent /= 2;
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem. Zero maps to zero.
    #[must_use]
    pub fn inverse(self) -> Self {
        self.pow(P - 2)
    }
}

impl<const P: u32> Add for Residue<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(i64::from(self.value) + i64::from(rhs.value))
    }
}

impl<const P: u32> Sub for Residue<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(i64::from(self.value) - i64::from(rhs.value))
    }
}

impl<const P: u32> Mul for Residue<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let value = (u64::from(self.value) * u64::from(rhs.value) % u64::from(P)) as u32;
        Self { value }
    }
}

impl<const P: u32> Div for Residue<P> {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl<const P: u32> Neg for Residue<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-i64::from(self.value))
    }
}

impl<const P: u32> Field for Residue<P> {
    fn zero() -> Self {
        Self::new(0)
    }

    fn one() -> Self {
        Self::new(1)
    }
}

impl<const P: u32> fmt::Display for Residue<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
