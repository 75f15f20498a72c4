use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the parameter engine.
///
/// Parsing itself never fails: malformed keys are skipped and malformed values
/// fall back to defaults. Errors only surface from strict accessors and from
/// explicit construction of typed parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A strict read asked for a parameter that is not present
    #[error("Missing parameter {name} ({context})")]
    MissingParameter {
        /// Parameter name as it would appear on the wire
        name: String,
        /// Header name, or "Request/Status line"
        context: String,
    },

    /// The stored value does not have the requested shape
    #[error("Parameter {name} is not a {expected} parameter")]
    ParameterTypeMismatch {
        /// Parameter name
        name: String,
        /// Grammar that was expected
        expected: &'static str,
    },

    /// Parse error
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl Error {
    pub(crate) fn missing(name: impl Into<String>, context: impl Into<String>) -> Self {
        Error::MissingParameter {
            name: name.into(),
            context: context.into(),
        }
    }

    pub(crate) fn mismatch(name: impl Into<String>, expected: &'static str) -> Self {
        Error::ParameterTypeMismatch {
            name: name.into(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::missing("qop", "WWW-Authenticate");
        assert_eq!(err.to_string(), "Missing parameter qop (WWW-Authenticate)");

        let err = Error::mismatch("ttl", "data");
        assert_eq!(err.to_string(), "Parameter ttl is not a data parameter");
    }
}
