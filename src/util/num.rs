use num_traits::Float;

/// Returns `true` if a finite `input` was mapped to a NaN or infinite
/// `output`.
///
/// Non-finite inputs never count as leaving the domain, since the result is
/// only propagating what it was given.
///
/// ## Example
/// ```
/// use elemfn::util::num::left_domain;
///
/// assert!(left_domain(-1.0_f64, (-1.0_f64).ln()));
/// assert!(left_domain(0.0_f64, 1.0_f64 / 0.0));
/// assert!(!left_domain(f64::NAN, f64::NAN));
/// assert!(!left_domain(4.0_f64, 2.0));
/// ```
pub fn left_domain<T: Float>(input: T, output: T) -> bool {
    input.is_finite() && !output.is_finite()
}

/// Widens any `Float` to `f64` for error reporting.
///
/// Every `Float` implementor converts to `f64`; NaN is returned if one ever
/// does not.
pub fn to_f64_lossy<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
