//! # elemfn
//!
//! elemfn builds elementary mathematical functions as closures.
//! Each factory takes the parameters of a function family (a slope and an
//! intercept, a list of coefficients, an exponent, a base) and returns a pure
//! unary function that can be called, stored, boxed or shared across threads.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{error::FactoryResult, factory::registry::build};

/// Provides the error type for checked construction and registry lookups.
///
/// The plain factories never fail. Errors only arise when a caller opts into
/// validation or builds a function by name.
///
/// # Responsibilities
/// - Defines the `FactoryError` enum for every failure mode.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// The function factories.
///
/// This module holds every constructor, grouped by family, together with the
/// opt-in checked layer and the name-based registry.
///
/// # Responsibilities
/// - Builds linear, polynomial, power, rational, exponential and logarithmic
///   functions, and exposes sine, cosine and tangent.
/// - Keeps IEEE-754 semantics: numeric edge cases become NaN or infinity.
/// - Offers validating variants for callers that prefer errors.
pub mod factory;
/// The fixed demonstration evaluations printed by the binary.
pub mod samples;
/// General floating-point helpers shared by the factory layers.
pub mod util;

/// Evaluates a named factory at each of the given points.
///
/// The factory is looked up in the registry and built from `params`, then
/// applied to every value in `at`, preserving order.
///
/// # Errors
/// Returns an error if the name is unknown or the parameter count does not
/// match the factory.
///
/// # Examples
/// ```
/// use elemfn::evaluate;
///
/// let ys = evaluate("power", &[2.0], &[1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(ys, vec![1.0, 4.0, 9.0]);
///
/// assert!(evaluate("power", &[], &[1.0]).is_err());
/// ```
pub fn evaluate(name: &str, params: &[f64], at: &[f64]) -> FactoryResult<Vec<f64>> {
    let function = build(name, params)?;
    let values: Vec<f64> = at.iter().map(|&x| function(x)).collect();

    debug!(factory = name, points = at.len(), "evaluated function");
    Ok(values)
}

/// Prints the demonstration samples to standard output.
///
/// See [`samples::render`] for the line format.
pub fn print_samples(labelled: bool) {
    print!("{}", samples::render(&samples::samples(), labelled));
}
