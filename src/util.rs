/// Numeric conversion helpers.
///
/// Lossless conversions between the calculator's `f32` scalars and the
/// integer types the matrix routines take. Every function either converts
/// exactly or returns an error; nothing is silently truncated.
pub mod num;
