use num_traits::Float;

use crate::{
    error::{FactoryError, FactoryResult},
    factory::{exponential, logarithmic, power},
    util::num::{left_domain, to_f64_lossy},
};

/// Builds a logarithm after checking that the base is usable.
///
/// The base must be finite and strictly positive, and must not be 1. A base
/// whose natural logarithm is zero is reported as division by zero, matching
/// what every evaluation would otherwise do.
///
/// # Errors
/// - `InvalidArgument` if `base` is NaN, infinite, zero or negative.
/// - `DivisionByZero` if `ln(base) == 0`.
///
/// # Example
/// ```
/// use elemfn::{error::FactoryError, factory::checked::try_logarithmic};
///
/// let log10 = try_logarithmic(10.0).unwrap();
/// assert_eq!(log10(100.0), 2.0);
///
/// assert!(matches!(try_logarithmic(1.0), Err(FactoryError::DivisionByZero)));
/// assert!(matches!(try_logarithmic(-2.0), Err(FactoryError::InvalidArgument { .. })));
/// ```
pub fn try_logarithmic<T: Float>(base: T) -> FactoryResult<impl Fn(T) -> T> {
    if !base.is_finite() || base <= T::zero() {
        return Err(FactoryError::InvalidArgument { details: format!("logarithm base must be finite and positive, got {}",
                                                                    to_f64_lossy(base)) });
    }
    if base.ln() == T::zero() {
        return Err(FactoryError::DivisionByZero);
    }

    Ok(logarithmic(base))
}

/// Builds an exponential after checking that the base is finite.
///
/// # Errors
/// Returns `InvalidArgument` if `base` is NaN or infinite.
pub fn try_exponential<T: Float>(base: T) -> FactoryResult<impl Fn(T) -> T> {
    if !base.is_finite() {
        return Err(FactoryError::InvalidArgument { details: format!("exponential base must be finite, got {}",
                                                                    to_f64_lossy(base)) });
    }

    Ok(exponential(base))
}

/// Builds a power function after checking that the exponent is a number.
///
/// Infinite exponents are accepted; `powf` gives them a well-defined meaning.
///
/// # Errors
/// Returns `InvalidArgument` if `exponent` is NaN.
pub fn try_power<T: Float>(exponent: T) -> FactoryResult<impl Fn(T) -> T> {
    if exponent.is_nan() {
        return Err(FactoryError::InvalidArgument { details: "power exponent must not be NaN".to_string() });
    }

    Ok(power(exponent))
}

/// Wraps a function so that leaving its real domain is an error.
///
/// A finite input whose result is NaN or infinite produces
/// `FactoryError::DomainError`. Non-finite inputs are passed through and their
/// result is returned as `Ok`, since there is no domain to leave.
///
/// # Example
/// ```
/// use elemfn::{error::FactoryError, factory::{checked::guarded, logarithmic}};
///
/// let log = guarded(logarithmic(2.0));
/// assert_eq!(log(4.0), Ok(2.0));
/// assert_eq!(log(-4.0), Err(FactoryError::DomainError { input: -4.0 }));
/// ```
pub fn guarded<T, F>(function: F) -> impl Fn(T) -> FactoryResult<T>
    where T: Float,
          F: Fn(T) -> T
{
    move |x| {
        let y = function(x);
        if left_domain(x, y) {
            Err(FactoryError::DomainError { input: to_f64_lossy(x) })
        } else {
            Ok(y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{polynomial, rational};

    #[test]
    fn logarithm_base_validation() {
        for base in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(try_logarithmic(base), Err(FactoryError::InvalidArgument { .. })),
                    "base {base} should be rejected");
        }
        assert!(matches!(try_logarithmic(1.0_f32), Err(FactoryError::DivisionByZero)));
        assert!(try_logarithmic(0.5_f64).is_ok());
    }

    #[test]
    fn exponential_and_power_validation() {
        assert!(try_exponential(f64::NEG_INFINITY).is_err());
        assert_eq!(try_exponential(-2.0_f64).map(|f| f(2.0)), Ok(4.0));

        assert!(try_power(f64::NAN).is_err());
        assert_eq!(try_power(f64::INFINITY).map(|f| f(0.5)), Ok(0.0));
    }

    #[test]
    fn guarded_rational_reports_the_pole() {
        let f = guarded(rational(polynomial(&[1.0_f64]), polynomial(&[1.0, -3.0])));
        assert_eq!(f(3.0), Err(FactoryError::DomainError { input: 3.0 }));
        assert_eq!(f(4.0), Ok(1.0));
    }

    #[test]
    fn guarded_passes_non_finite_inputs_through() {
        let f = guarded(power(2.0_f64));
        assert_eq!(f(f64::INFINITY), Ok(f64::INFINITY));
        assert!(f(f64::NAN).is_ok_and(f64::is_nan));
    }
}
