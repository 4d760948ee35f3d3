#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while building or evaluating a
/// function through the checked and registry layers.
///
/// The plain factories never produce these; they report numeric edge cases as
/// NaN or infinity instead.
pub enum FactoryError {
    /// A factory parameter was outside the range the factory accepts.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// Building the function would divide by zero on every evaluation.
    DivisionByZero,
    /// The wrong number of parameters was supplied to a named factory.
    ArgumentCountMismatch {
        /// The name of the factory.
        name:     String,
        /// A human-readable description of the accepted count.
        expected: String,
        /// The number of parameters actually supplied.
        found:    usize,
    },
    /// No factory with the given name exists in the registry.
    UnknownFactory {
        /// The name that was looked up.
        name: String,
    },
    /// A finite input produced a NaN or infinite result.
    DomainError {
        /// The input that fell outside the function's domain.
        input: f64,
    },
}

impl std::fmt::Display for FactoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { details } => write!(f, "Invalid argument: {details}."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::ArgumentCountMismatch { name, expected, found } => write!(f,
                                                                            "Factory '{name}' expects {expected} parameter(s), but found {found}."),
            Self::UnknownFactory { name } => write!(f, "Unknown factory '{name}'."),
            Self::DomainError { input } => {
                write!(f, "Input {input} is outside the domain of the function.")
            },
        }
    }
}

impl std::error::Error for FactoryError {}

/// Result type used by fallible factory operations.
pub type FactoryResult<T> = Result<T, FactoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = FactoryError::ArgumentCountMismatch { name:     "linear".to_string(),
                                                        expected: "exactly 2".to_string(),
                                                        found:    3, };
        assert_eq!(err.to_string(),
                   "Factory 'linear' expects exactly 2 parameter(s), but found 3.");

        let err = FactoryError::UnknownFactory { name: "sec".to_string() };
        assert_eq!(err.to_string(), "Unknown factory 'sec'.");

        let err = FactoryError::DomainError { input: -1.0 };
        assert_eq!(err.to_string(), "Input -1 is outside the domain of the function.");
    }
}
