//! Error types for connection-input parsing.

use thiserror::Error;

/// Errors that can occur while parsing the course URL or headers blob.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Course URL is missing a separator or has a non-numeric course id
    #[error("invalid course URL '{url}': {reason}\n  Suggestion: {suggestion}")]
    InvalidUrlFormat {
        /// The URL text that failed validation
        url: String,
        /// Why the URL is invalid
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },

    /// Headers text is not a JSON object of string values
    #[error("invalid headers JSON: {reason}\n  Suggestion: {suggestion}")]
    InvalidHeaderJson {
        /// Why the headers blob is invalid
        reason: String,
        /// How to fix the issue
        suggestion: String,
    },
}

impl ParseError {
    /// Creates an `InvalidUrlFormat` error for empty course URL input.
    #[must_use]
    pub fn empty_url() -> Self {
        Self::InvalidUrlFormat {
            url: String::new(),
            reason: "course URL is empty".to_string(),
            suggestion: "Enter the full course URL ending in the numeric course id".to_string(),
        }
    }

    /// Creates an `InvalidUrlFormat` error for a URL without a path separator.
    #[must_use]
    pub fn no_separator(url: &str) -> Self {
        Self::InvalidUrlFormat {
            url: url.to_string(),
            reason: "no '/' separator before the course id".to_string(),
            suggestion: "Use the form <base-url>/<course-id>".to_string(),
        }
    }

    /// Creates an `InvalidUrlFormat` error for a non-numeric final segment.
    #[must_use]
    pub fn non_numeric_id(url: &str, id: &str) -> Self {
        let reason = if id.is_empty() {
            "course id segment is empty".to_string()
        } else {
            format!("course id '{id}' is not all digits")
        };
        Self::InvalidUrlFormat {
            url: url.to_string(),
            reason,
            suggestion: "The course id after the last '/' must be a number".to_string(),
        }
    }

    /// Creates an `InvalidHeaderJson` error for undecodable JSON text.
    #[must_use]
    pub fn bad_header_json(decode_error: &str) -> Self {
        Self::InvalidHeaderJson {
            reason: decode_error.to_string(),
            suggestion: "Paste the headers as a JSON object, e.g. {\"authorization\": \"Bearer ...\"}"
                .to_string(),
        }
    }

    /// Creates an `InvalidHeaderJson` error for valid JSON that is not an object.
    #[must_use]
    pub fn headers_not_an_object() -> Self {
        Self::InvalidHeaderJson {
            reason: "headers JSON is not an object".to_string(),
            suggestion: "Wrap the headers in { } with one string value per header name".to_string(),
        }
    }

    /// Creates an `InvalidHeaderJson` error for a non-string header value.
    #[must_use]
    pub fn header_value_not_string(name: &str) -> Self {
        Self::InvalidHeaderJson {
            reason: format!("value for header '{name}' is not a string"),
            suggestion: "Quote every header value, including numeric ones".to_string(),
        }
    }
}
