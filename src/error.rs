// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the tablature model and its tuning data.

use thiserror::Error;

/// Errors raised while building or querying tablature values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    /// A JSON document did not have the expected shape
    #[error("Cannot create tab section from json: {0}")]
    MalformedDocument(String),

    /// A 1-based string number outside the tuning
    #[error("No string at position {string}")]
    StringIndexOutOfRange {
        /// The requested string number
        string: usize,
        /// Number of strings available
        strings: usize,
    },

    /// A tuning was built without any strings
    #[error("A tuning needs at least one string")]
    EmptyTuning,

    /// A note name that could not be parsed
    #[error("Invalid note name: {0:?}")]
    InvalidNote(String),
}

/// Result type for tablature operations
pub type Result<T> = std::result::Result<T, TabError>;

impl TabError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        TabError::MalformedDocument(message.into())
    }

    /// Check 1-based `string` against `strings` and return its 0-based index
    pub(crate) fn check_string(string: usize, strings: usize) -> Result<usize> {
        if string == 0 || string > strings {
            return Err(TabError::StringIndexOutOfRange { string, strings });
        }
        Ok(string - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_index_message() {
        let err = TabError::StringIndexOutOfRange { string: 7, strings: 6 };
        assert_eq!(err.to_string(), "No string at position 7");
    }

    #[test]
    fn test_check_string_bounds() {
        assert_eq!(TabError::check_string(1, 6), Ok(0));
        assert_eq!(TabError::check_string(6, 6), Ok(5));
        assert!(TabError::check_string(0, 6).is_err());
        assert!(TabError::check_string(7, 6).is_err());
    }

    #[test]
    fn test_malformed_message() {
        let err = TabError::malformed("missing bpm");
        assert_eq!(
            err.to_string(),
            "Cannot create tab section from json: missing bpm"
        );
    }
}
