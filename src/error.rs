// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error type shared by the library.
//!
//! Unrecognised text is not an error for the `parse` functions, which
//! return `None`. Errors are reserved for misuse: operands of the wrong
//! type, results that overflow, `FromStr` conversions and bad
//! configuration values.

use thiserror::Error;

/// Library result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the music primitives
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An operator was applied to operands it does not support
    #[error("unsupported operand types for {op}: {lhs} and {rhs}")]
    TypeMismatch {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    /// An arithmetic result does not fit the operand type
    #[error("arithmetic overflow in {lhs} {op} {rhs}")]
    Overflow {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },

    /// Text could not be converted through `FromStr`
    #[error("invalid {kind}: {input:?}")]
    Parse { kind: &'static str, input: String },

    /// A configuration value is out of range or unrecognised
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn parse(kind: &'static str, input: &str) -> Self {
        Error::Parse {
            kind,
            input: input.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::TypeMismatch {
            op: "==",
            lhs: "pitch class",
            rhs: "text",
        };
        assert_eq!(
            err.to_string(),
            "unsupported operand types for ==: pitch class and text"
        );

        let err = Error::Overflow {
            op: "+",
            lhs: "integer",
            rhs: "integer",
        };
        assert_eq!(err.to_string(), "arithmetic overflow in integer + integer");

        let err = Error::parse("pitch", "H4");
        assert_eq!(err.to_string(), "invalid pitch: \"H4\"");
    }
}
