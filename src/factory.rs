/// Polynomial-family factories.
///
/// Builds linear, polynomial, power and rational functions.
pub mod algebraic;
/// Validating constructors.
///
/// Opt-in checks that turn degenerate parameters and out-of-domain results
/// into `FactoryError`s instead of NaN or infinity.
pub mod checked;
/// Name-based factory lookup.
///
/// A static table mapping factory names to constructors over `&[f64]`
/// parameters, used by the command-line front end.
pub mod registry;
/// Exponential, logarithmic and trigonometric functions.
pub mod transcendental;

pub use algebraic::{linear, polynomial, power, rational};
pub use transcendental::{cos, exponential, logarithmic, sin, tan};
