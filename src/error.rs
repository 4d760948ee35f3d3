/// Factory errors.
///
/// Defines the error type raised by the checked constructors and by the
/// name-based registry. Covers invalid parameters, degenerate bases, unknown
/// factory names and wrong parameter counts.
pub mod factory_error;

pub use factory_error::{FactoryError, FactoryResult};
