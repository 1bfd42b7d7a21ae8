use std::{
    f32::consts::TAU,
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use crate::matrix::field::Field;

/// A complex number with single precision parts.
///
/// # Example
/// ```
/// use matrica::matrix::Complex;
///
/// let a = Complex::new(3.0, 6.0);
/// let b = Complex::new(2.0, 8.0);
///
/// assert_eq!(a + b, Complex::new(5.0, 14.0));
/// assert_eq!(a * b, Complex::new(-42.0, 36.0));
/// assert_eq!(a.conjugate(), Complex::new(3.0, -6.0));
/// assert_eq!(Complex::new(3.0, 4.0).abs(), 5.0);
/// assert_eq!(a.to_string(), "3+6i");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    /// Real part.
    pub re: f32,
    /// Imaginary part.
    pub im: f32,
}

impl Complex {
    /// The imaginary unit.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Builds `re + im·i`.
    #[must_use]
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }

    /// Mirrors the number across the real axis.
    #[must_use]
    pub const fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Squared modulus, `re² + im²`.
    #[must_use]
    pub fn norm_sqr(self) -> f32 {
        self.re * self.re + self.im * self.im
    }

    /// Modulus.
    #[must_use]
    pub fn abs(self) -> f32 {
        self.re.hypot(self.im)
    }

    /// Argument in `[0, 2π)`, measured counter-clockwise from the positive
    /// real axis. Zero has argument `0`.
    #[must_use]
    pub fn arg(self) -> f32 {
        self.im.atan2(self.re).rem_euclid(TAU)
    }

    /// Multiplies both parts by a real factor.
    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.re * factor, self.im * factor)
    }
}

impl From<f32> for Complex {
    fn from(re: f32) -> Self {
        Self::new(re, 0.0)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.re * rhs.re - self.im * rhs.im,
                  self.re * rhs.im + self.im * rhs.re)
    }
}

impl Div for Complex {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        let numerator = self * rhs.conjugate();
        let denominator = rhs.norm_sqr();
        Self::new(numerator.re / denominator, numerator.im / denominator)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl Field for Complex {
    fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    fn one() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}
