use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use tracing::debug;

use crate::factory::{
    cos, exponential, linear, logarithmic, polynomial, power, rational, sin, tan,
};

/// One demonstration evaluation: the expression and what it evaluated to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// The evaluated expression, written in factory-call notation.
    pub expression: &'static str,
    /// The result of the evaluation.
    pub value:      f64,
}

impl Sample {
    const fn new(expression: &'static str, value: f64) -> Self {
        Self { expression, value }
    }
}

impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.expression, self.value)
    }
}

/// Evaluates the fixed demonstration expressions, in order.
///
/// The order never changes: linear, polynomial, power, rational,
/// exponential, logarithmic, then sine, cosine and tangent.
///
/// # Example
/// ```
/// use elemfn::samples::samples;
///
/// let values: Vec<f64> = samples().iter().map(|s| s.value).collect();
/// assert_eq!(values[..6], [11.0, 3.0, 8.0, 1.0, 8.0, 2.0]);
/// ```
pub fn samples() -> Vec<Sample> {
    let quotient = rational(polynomial(&[1.0, 0.0, -1.0]), polynomial(&[1.0, 1.0]));

    let samples = vec![Sample::new("linear(2, 3)(4)", linear(2.0, 3.0)(4.0)),
                       Sample::new("polynomial(1, -2, 3)(2)", polynomial(&[1.0, -2.0, 3.0])(2.0)),
                       Sample::new("power(3)(2)", power(3.0)(2.0)),
                       Sample::new("rational(polynomial(1, 0, -1), polynomial(1, 1))(2)",
                                   quotient(2.0)),
                       Sample::new("exponential(2)(3)", exponential(2.0)(3.0)),
                       Sample::new("logarithmic(10)(100)", logarithmic(10.0)(100.0)),
                       Sample::new("sin(pi/2)", sin(FRAC_PI_2)),
                       Sample::new("cos(pi)", cos(PI)),
                       Sample::new("tan(pi/4)", tan(FRAC_PI_4)),];

    for sample in &samples {
        debug!(expression = sample.expression, value = sample.value, "evaluated sample");
    }

    samples
}

/// Renders samples one per line.
///
/// Bare values by default; `expression = value` when `labelled` is set.
/// Values use `f64`'s `Display`, so whole numbers print without a fraction.
pub fn render(samples: &[Sample], labelled: bool) -> String {
    samples.iter()
           .map(|sample| {
               if labelled {
                   format!("{sample}\n")
               } else {
                   format!("{}\n", sample.value)
               }
           })
           .collect()
}
