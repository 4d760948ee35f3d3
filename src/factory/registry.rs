use tracing::debug;

use crate::{
    error::{FactoryError, FactoryResult},
    factory::{cos, exponential, linear, logarithmic, polynomial, power, sin, tan},
};

/// A type-erased function value over `f64`.
///
/// This is what the registry hands out, since the concrete closure type
/// differs per factory.
pub type BoxedFunction = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// Type alias for registry constructors.
///
/// A constructor receives the numeric parameters, already checked against
/// the entry's arity, and returns the built function.
type Constructor = fn(&[f64]) -> BoxedFunction;

/// Specifies the allowed number of parameters for a factory.
///
/// - `Exact(n)` means the factory must receive exactly `n` parameters.
/// - `Any` means every count is accepted, including zero.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    Any,
}

/// Defines the factory table and the list of factory names.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a constructor over the numeric parameters.
macro_rules! factory_table {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                build: $build:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct FactoryDef {
            name:  &'static str,
            arity: Arity,
            build: Constructor,
        }
        static FACTORY_TABLE: &[FactoryDef] = &[
            $(
                FactoryDef { name: $name, arity: $arity, build: $build },
            )*
        ];
        /// Names of every factory reachable through [`build`], in table order.
        pub const FACTORY_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

factory_table! {
    "linear"      => { arity: Arity::Exact(2), build: |p| boxed(linear(p[0], p[1])) },
    "polynomial"  => { arity: Arity::Any,      build: |p| boxed(polynomial(p)) },
    "power"       => { arity: Arity::Exact(1), build: |p| boxed(power(p[0])) },
    "exponential" => { arity: Arity::Exact(1), build: |p| boxed(exponential(p[0])) },
    "logarithmic" => { arity: Arity::Exact(1), build: |p| boxed(logarithmic(p[0])) },
    "sin"         => { arity: Arity::Exact(0), build: |_| boxed(sin::<f64>) },
    "cos"         => { arity: Arity::Exact(0), build: |_| boxed(cos::<f64>) },
    "tan"         => { arity: Arity::Exact(0), build: |_| boxed(tan::<f64>) },
}

impl Arity {
    /// Tests whether the given parameter count satisfies this arity.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Any => true,
        }
    }

    fn describe(self) -> String {
        match self {
            Self::Exact(m) => format!("exactly {m}"),
            Self::Any => "any number of".to_string(),
        }
    }
}

fn boxed<F>(function: F) -> BoxedFunction
    where F: Fn(f64) -> f64 + Send + Sync + 'static
{
    Box::new(function)
}

/// Builds the named factory from numeric parameters.
///
/// The parameter count is checked against the factory's arity before the
/// constructor runs. The parameters themselves are not validated, so the
/// result behaves exactly like calling the factory directly.
///
/// # Errors
/// - `UnknownFactory` if `name` is not in [`FACTORY_NAMES`].
/// - `ArgumentCountMismatch` if `params` has the wrong length.
///
/// # Example
/// ```
/// use elemfn::factory::registry::build;
///
/// let f = build("linear", &[2.0, 3.0]).unwrap();
/// assert_eq!(f(4.0), 11.0);
///
/// assert!(build("linear", &[2.0]).is_err());
/// assert!(build("secant", &[]).is_err());
/// ```
pub fn build(name: &str, params: &[f64]) -> FactoryResult<BoxedFunction> {
    let def = FACTORY_TABLE.iter()
                           .find(|def| def.name == name)
                           .ok_or_else(|| FactoryError::UnknownFactory { name: name.to_string() })?;

    if !def.arity.check(params.len()) {
        return Err(FactoryError::ArgumentCountMismatch { name:     name.to_string(),
                                                         expected: def.arity.describe(),
                                                         found:    params.len(), });
    }

    debug!(factory = name, ?params, "building function");
    Ok((def.build)(params))
}

/// Returns `true` if `name` refers to a registered factory.
pub fn is_factory(name: &str) -> bool {
    FACTORY_NAMES.iter().any(|candidate| *candidate == name)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn every_listed_name_is_buildable() {
        for name in FACTORY_NAMES {
            assert!(is_factory(name));
            let def = FACTORY_TABLE.iter().find(|def| def.name == *name).unwrap();
            let params = match def.arity {
                Arity::Exact(n) => vec![2.0; n],
                Arity::Any => vec![1.0, 2.0],
            };
            assert!(build(name, &params).is_ok(), "{name} failed to build");
        }
    }

    #[test]
    fn polynomial_accepts_any_count() {
        assert_eq!(build("polynomial", &[]).unwrap()(7.0), 0.0);
        assert_eq!(build("polynomial", &[1.0, -2.0, 3.0]).unwrap()(2.0), 3.0);
    }

    #[test]
    fn trig_entries_take_no_parameters() {
        let cos = build("cos", &[]).unwrap();
        assert_eq!(cos(PI), -1.0);

        let err = build("sin", &[1.0]).err().unwrap();
        assert_eq!(err,
                   FactoryError::ArgumentCountMismatch { name:     "sin".to_string(),
                                                         expected: "exactly 0".to_string(),
                                                         found:    1, });
    }

    #[test]
    fn rational_is_not_registered() {
        assert!(!is_factory("rational"));
        assert!(matches!(build("rational", &[1.0, 1.0]),
                         Err(FactoryError::UnknownFactory { .. })));
    }
}
