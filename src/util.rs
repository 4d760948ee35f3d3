/// Floating-point helpers.
///
/// This module provides small predicates over `num_traits::Float` values that
/// the checked factory layer uses to classify parameters and results without
/// caring whether the caller works in `f32` or `f64`.
pub mod num;
