/// Default tolerance for treating a scalar as zero.
///
/// `0.0` means exact comparison: a determinant or divisor counts as zero only
/// if it is exactly `0.0` (or `-0.0`).
pub const ZERO_TOLERANCE: f32 = 0.0;
/// Default distance within which a matrix entry is snapped to the nearest
/// integer after an evaluation.
pub const SNAP_TOLERANCE: f32 = 1e-5;

/// Numeric settings of a [`Calculator`](crate::dispatcher::core::Calculator).
///
/// # Example
/// ```
/// use matrica::config::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.is_zero(0.0));
/// assert!(!settings.is_zero(1e-30));
///
/// let loose = Settings { zero_tolerance: 1e-6,
///                        ..Settings::default() };
/// assert!(loose.is_zero(-1e-7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Largest magnitude still treated as zero by the singularity and
    /// division checks.
    pub zero_tolerance: f32,
    /// Largest distance from an integer at which a result entry is snapped
    /// to it. `0.0` disables snapping of non-integers.
    pub snap_tolerance: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self { zero_tolerance: ZERO_TOLERANCE,
               snap_tolerance: SNAP_TOLERANCE, }
    }
}

impl Settings {
    /// Returns `true` if `value` counts as zero under `zero_tolerance`.
    #[must_use]
    pub fn is_zero(&self, value: f32) -> bool {
        value.abs() <= self.zero_tolerance
    }

    /// Rounds `value` to the nearest integer if it lies within
    /// `snap_tolerance` of it.
    ///
    /// ```
    /// use matrica::config::Settings;
    ///
    /// let settings = Settings::default();
    /// assert_eq!(settings.snap(2.999_999), 3.0);
    /// assert_eq!(settings.snap(-0.999_999_5), -1.0);
    /// assert_eq!(settings.snap(0.5), 0.5);
    /// ```
    #[must_use]
    pub fn snap(&self, value: f32) -> f32 {
        let nearest = value.round();
        if (value - nearest).abs() <= self.snap_tolerance { nearest } else { value }
    }
}
