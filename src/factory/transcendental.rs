use num_traits::Float;

/// Builds `f(x) = base^x`.
///
/// Negative bases only produce real results at integer `x`; everywhere else
/// the result is NaN.
///
/// # Example
/// ```
/// use elemfn::factory::exponential;
///
/// let f = exponential(2.0);
/// assert_eq!(f(3.0), 8.0);
/// assert_eq!(f(0.0), 1.0);
/// ```
pub fn exponential<T: Float>(base: T) -> impl Fn(T) -> T {
    move |x| base.powf(x)
}

/// Builds `f(x) = log_base(x)` as `ln(x) / ln(base)`.
///
/// `ln(base)` is computed once when the function is built. Nothing is
/// validated: `x <= 0` yields NaN or negative infinity, and a base of 1 makes
/// every evaluation divide by zero. Use
/// [`try_logarithmic`](crate::factory::checked::try_logarithmic) to reject
/// such bases up front.
///
/// # Example
/// ```
/// use elemfn::factory::logarithmic;
///
/// let log10 = logarithmic(10.0);
/// assert_eq!(log10(100.0), 2.0);
/// assert_eq!(log10(1.0), 0.0);
/// ```
pub fn logarithmic<T: Float>(base: T) -> impl Fn(T) -> T {
    let ln_base = base.ln();
    move |x| x.ln() / ln_base
}

/// Sine of `x` radians.
pub fn sin<T: Float>(x: T) -> T {
    x.sin()
}

/// Cosine of `x` radians.
pub fn cos<T: Float>(x: T) -> T {
    x.cos()
}

/// Tangent of `x` radians.
///
/// Odd multiples of pi/2 are not representable exactly, so this returns a
/// very large finite value there rather than an infinity.
///
/// # Example
/// ```
/// use std::f64::consts::FRAC_PI_2;
///
/// use elemfn::factory::tan;
///
/// let near_pole = tan(FRAC_PI_2);
/// assert!(near_pole.is_finite());
/// assert!(near_pole > 1e15);
/// ```
pub fn tan<T: Float>(x: T) -> T {
    x.tan()
}
