//! Numeric traits shared across the workspace.

/// Generic floating-point trait for rate conversions.
///
/// Re-exported so downstream crates can write conversion code once for both
/// `f64` and `f32` without depending on num-traits directly.
///
/// # Examples
/// ```
/// use rates_core::traits::Float;
///
/// fn continuous_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let df: f64 = continuous_discount(0.05, 1.0);
/// assert!((df - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;
