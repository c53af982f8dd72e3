//! Error types for the factory functions.
//!
//! Only the factories that need a callable argument can fail. Every other
//! helper in the crate is total and degrades on malformed input instead.

use thiserror::Error;

/// Represents an invalid argument handed to a factory.
///
/// # Examples
///
/// ```rust
/// use fnkit::error::InvalidArgumentError;
///
/// let error = InvalidArgumentError::NotCallable {
///     function: "make_comparator",
///     parameter: "compare_fn",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "make_comparator: `compare_fn` must be a callable function"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgumentError {
    /// A required function argument was not supplied.
    #[error("{function}: `{parameter}` must be a callable function")]
    NotCallable {
        /// The name of the factory that rejected the argument.
        function: &'static str,
        /// The name of the missing parameter.
        parameter: &'static str,
    },
}

impl InvalidArgumentError {
    /// Returns the name of the factory that raised the error.
    pub const fn function(&self) -> &'static str {
        match self {
            Self::NotCallable { function, .. } => function,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("make_comparator", "compare_fn")]
    #[case("make_join_string_reducer", "transformer")]
    fn not_callable_display(#[case] function: &'static str, #[case] parameter: &'static str) {
        let error = InvalidArgumentError::NotCallable {
            function,
            parameter,
        };
        assert_eq!(
            error.to_string(),
            format!("{function}: `{parameter}` must be a callable function")
        );
        assert_eq!(error.function(), function);
    }

    #[rstest]
    fn not_callable_equality() {
        let first = InvalidArgumentError::NotCallable {
            function: "make_comparator",
            parameter: "compare_fn",
        };
        let second = first.clone();
        let third = InvalidArgumentError::NotCallable {
            function: "make_join_string_reducer",
            parameter: "transformer",
        };
        assert_eq!(first, second);
        assert_ne!(first, third);
    }
}
