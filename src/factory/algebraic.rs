use num_traits::Float;

/// Builds `f(x) = slope * x + intercept`.
///
/// The closure evaluates exactly that expression, so its result is
/// bit-identical to writing `slope * x + intercept` by hand.
///
/// # Example
/// ```
/// use elemfn::factory::linear;
///
/// let f = linear(2.0, 3.0);
/// assert_eq!(f(4.0), 11.0);
/// ```
pub fn linear<T: Float>(slope: T, intercept: T) -> impl Fn(T) -> T {
    move |x| slope * x + intercept
}

/// Builds a polynomial from its coefficients, highest degree first.
///
/// `polynomial(&[c0, c1, ..., cn])` evaluates `c0*x^n + c1*x^(n-1) + ... +
/// cn` as a running sum from zero, term by term in coefficient order, with
/// every power taken through `powf`. Since `powf(x, 0)` is 1 for any `x`, a
/// constant polynomial returns its constant even for infinite or NaN inputs.
/// An empty coefficient list yields the zero function.
///
/// The coefficients are copied, so the returned function does not borrow
/// from `coefficients`.
///
/// # Parameters
/// - `coefficients`: Coefficients ordered from the highest degree down to the
///   constant term.
///
/// # Example
/// ```
/// use elemfn::factory::polynomial;
///
/// // x^2 - 2x + 3
/// let p = polynomial(&[1.0, -2.0, 3.0]);
/// assert_eq!(p(2.0), 3.0);
///
/// let zero = polynomial::<f64>(&[]);
/// assert_eq!(zero(42.0), 0.0);
/// ```
pub fn polynomial<T: Float>(coefficients: &[T]) -> impl Fn(T) -> T + use<T> {
    let mut exponent = T::zero();
    let mut terms: Vec<(T, T)> = coefficients.iter()
                                             .rev()
                                             .map(|&c| {
                                                 let term = (c, exponent);
                                                 exponent = exponent + T::one();
                                                 term
                                             })
                                             .collect();
    terms.reverse();

    move |x| terms.iter().fold(T::zero(), |sum, &(c, k)| sum + c * x.powf(k))
}

/// Builds `f(x) = x^exponent`.
///
/// Delegates to `powf`; negative inputs with a fractional exponent give NaN
/// and `0^negative` gives positive infinity.
///
/// # Example
/// ```
/// use elemfn::factory::power;
///
/// assert_eq!(power(3.0)(2.0), 8.0);
/// assert_eq!(power(0.5)(4.0), 2.0);
/// assert!(power(0.5_f64)(-4.0).is_nan());
/// ```
pub fn power<T: Float>(exponent: T) -> impl Fn(T) -> T {
    move |x| x.powf(exponent)
}

/// Builds `f(x) = numerator(x) / denominator(x)`.
///
/// Both parts may be any unary function, not only polynomials. A zero
/// denominator follows IEEE-754 division: `±inf` for a non-zero numerator,
/// NaN for `0 / 0`.
///
/// # Example
/// ```
/// use elemfn::factory::{polynomial, rational};
///
/// // (x^2 - 1) / (x + 1)
/// let f = rational(polynomial(&[1.0_f64, 0.0, -1.0]), polynomial(&[1.0, 1.0]));
/// assert_eq!(f(2.0), 1.0);
/// assert!(f(-1.0).is_nan());
/// ```
pub fn rational<T, P, Q>(numerator: P, denominator: Q) -> impl Fn(T) -> T
    where T: Float,
          P: Fn(T) -> T,
          Q: Fn(T) -> T
{
    move |x| numerator(x) / denominator(x)
}
