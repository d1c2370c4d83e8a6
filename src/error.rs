//! Error types for xsdom
//!
//! This module defines the two error kinds the builder surfaces when a call
//! is legal in context but its value is unusable: datatype errors (the raw
//! lexical value fails its validator) and resolution errors (a QName prefix
//! is not bound anywhere in the ancestor chain). Calls that are illegal for
//! the current context are silent no-ops, never errors.

use thiserror::Error;

/// Result type alias using the xsdom [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// A lexical value failed a datatype validator.
///
/// The message text is part of the observable contract: downstream
/// compatibility tests match it verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatatypeError {
    /// The value does not parse as the expected datatype
    #[error("\"{value}\" is an invalid {datatype} datatype.")]
    Invalid {
        /// The offending raw value
        value: String,
        /// The expected datatype name
        datatype: &'static str,
    },

    /// The value is outside a closed set of accepted literals
    #[error("\"{value}\" is an invalid {datatype} datatype. Accepted values are: {accepted}.")]
    NotAccepted {
        /// The offending raw value
        value: String,
        /// The expected datatype name
        datatype: &'static str,
        /// The accepted literal set, comma-separated
        accepted: &'static str,
    },
}

impl DatatypeError {
    /// Create a generic invalid-datatype error
    pub fn invalid(value: impl Into<String>, datatype: &'static str) -> Self {
        Self::Invalid {
            value: value.into(),
            datatype,
        }
    }

    /// Create an enumerated-datatype error naming the accepted literal set
    pub fn not_accepted(
        value: impl Into<String>,
        datatype: &'static str,
        accepted: &'static str,
    ) -> Self {
        Self::NotAccepted {
            value: value.into(),
            datatype,
            accepted,
        }
    }

    /// The offending raw value
    pub fn value(&self) -> &str {
        match self {
            Self::Invalid { value, .. } | Self::NotAccepted { value, .. } => value,
        }
    }

    /// The expected datatype name
    pub fn datatype(&self) -> &'static str {
        match self {
            Self::Invalid { datatype, .. } | Self::NotAccepted { datatype, .. } => datatype,
        }
    }
}

/// Main error type for builder operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A lexical value failed its datatype validator
    #[error(transparent)]
    Datatype(#[from] DatatypeError),

    /// A QName prefix is not bound anywhere in the ancestor chain
    #[error("The \"{prefix}\" prefix is not bound to a namespace.")]
    UnboundPrefix {
        /// The unbound prefix
        prefix: String,
    },

    /// A second legal build of an attribute already set on the same node.
    /// Attribute slots are immutable once validly set; rebuild semantics are
    /// not part of the contract, so the case is flagged instead of guessed.
    #[error("The \"{name}\" attribute is already set on this element.")]
    AttributeAlreadySet {
        /// The attribute's XML name
        name: &'static str,
    },
}

impl Error {
    /// True for datatype (lexical) errors
    pub fn is_datatype(&self) -> bool {
        matches!(self, Self::Datatype(_))
    }

    /// True for structural/resolution errors
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::UnboundPrefix { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datatype_error_message() {
        let err = DatatypeError::invalid("maybe", "boolean");
        assert_eq!(
            format!("{}", err),
            "\"maybe\" is an invalid boolean datatype."
        );
    }

    #[test]
    fn test_enumerated_error_message() {
        let err = DatatypeError::not_accepted("sometimes", "formChoice", "qualified, unqualified");
        assert_eq!(
            format!("{}", err),
            "\"sometimes\" is an invalid formChoice datatype. \
             Accepted values are: qualified, unqualified."
        );
    }

    #[test]
    fn test_unbound_prefix_message() {
        let err = Error::UnboundPrefix {
            prefix: "p".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "The \"p\" prefix is not bound to a namespace."
        );
        assert!(err.is_resolution());
        assert!(!err.is_datatype());
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = DatatypeError::invalid("x", "NCName").into();
        assert!(err.is_datatype());
    }
}
