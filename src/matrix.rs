/// Numeric fields a matrix can be built over.
///
/// Declares the `Field` trait with the small set of operations the row
/// reduction routines rely on, and implements it for `f32` and `f64`.
pub mod field;

/// The dense `Matrix` type.
///
/// Construction, element access, elementwise arithmetic, multiplication,
/// transposition and trace. Shapes are assumed valid: callers check them
/// before delegating here.
pub mod core;

/// Row reduction and everything built on it.
///
/// Determinant, row-echelon and reduced row-echelon forms, rank, inversion
/// and integer powers.
pub mod reduce;

/// Integers modulo a prime.
///
/// `Residue<P>` is an exact field, which makes it handy for checking the
/// reduction algorithms without floating-point noise.
pub mod residue;

/// Complex numbers with `f32` parts.
pub mod complex;

pub use self::{complex::Complex, core::Matrix, field::Field, residue::Residue};
