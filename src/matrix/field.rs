use std::{
    fmt::{Debug, Display},
    ops::{Add, Div, Mul, Neg, Sub},
};

/// A numeric field usable as the entry type of a [`Matrix`].
///
/// Only the field axioms are needed: the algorithms never compare magnitudes,
/// they only ask whether an entry is exactly zero.
///
/// [`Matrix`]: crate::matrix::Matrix
pub trait Field:
    Copy
    + PartialEq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns `true` if the value equals [`Field::zero`].
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Field for f32 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }
}

impl Field for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }
}
