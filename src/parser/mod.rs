//! Connection-input parsing: course URL and headers blob.
//!
//! The parser turns the two pieces of user-supplied text (a course URL ending
//! in the numeric course id and a JSON object of request headers) into a
//! [`ConnectionConfig`]. It is deliberately permissive beyond the two checks
//! the source API needs: no URL scheme or host validation, no header token
//! syntax checks. Those stay with the HTTP client, which is where they fail
//! in practice.
//!
//! # Example
//!
//! ```
//! use course_browser_core::parser::parse_connection;
//!
//! let config = parse_connection(
//!     "https://host.example/api/student/enrollments/courses/2495",
//!     r#"{"authorization": "Bearer token"}"#,
//!     None,
//! )
//! .unwrap();
//! assert_eq!(config.course_id, "2495");
//! ```

mod error;

pub use error::ParseError;

use std::collections::BTreeMap;

use tracing::debug;

/// Immutable connection parameters for one fetch session.
///
/// Rebuilt from the current user input on every fetch; never mutated in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Everything before the last `/` of the course URL.
    pub base_url: String,
    /// The all-digit final segment of the course URL.
    pub course_id: String,
    /// Request headers forwarded verbatim on every API call.
    pub headers: BTreeMap<String, String>,
    /// Optional proxy URL applied to API calls and generated commands.
    pub proxy_url: Option<String>,
}

impl ConnectionConfig {
    /// Returns the course endpoint URL, `{base_url}/{course_id}`.
    #[must_use]
    pub fn course_endpoint(&self) -> String {
        format!("{}/{}", self.base_url, self.course_id)
    }

    /// Returns the folder-detail endpoint URL for a folder id.
    ///
    /// The id is percent-encoded; folder ids come back from the API and are
    /// not guaranteed to be path-safe.
    #[must_use]
    pub fn folder_endpoint(&self, folder_id: &str) -> String {
        format!("{}/folders/{}", self.base_url, urlencoding::encode(folder_id))
    }

    /// Returns the `authorization` header value if present and non-empty.
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .get("authorization")
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Splits a course URL into `(base_url, course_id)`.
///
/// The split is on the last `/`; the final segment must be non-empty and
/// all decimal digits.
///
/// # Errors
///
/// Returns [`ParseError::InvalidUrlFormat`] for empty input, input without a
/// separator, or a non-numeric final segment.
pub fn parse_course_url(text: &str) -> Result<(String, String), ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::empty_url());
    }

    let Some((base_url, course_id)) = trimmed.rsplit_once('/') else {
        return Err(ParseError::no_separator(trimmed));
    };

    if course_id.is_empty() || !course_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::non_numeric_id(trimmed, course_id));
    }

    debug!(base_url, course_id, "course URL parsed");
    Ok((base_url.to_string(), course_id.to_string()))
}

/// Parses the headers blob as a JSON object of string values.
///
/// # Errors
///
/// Returns [`ParseError::InvalidHeaderJson`] when the text is not valid
/// JSON, not an object, or any value is not a string.
pub fn parse_headers(text: &str) -> Result<BTreeMap<String, String>, ParseError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ParseError::bad_header_json(&e.to_string()))?;

    let serde_json::Value::Object(entries) = value else {
        return Err(ParseError::headers_not_an_object());
    };

    let mut headers = BTreeMap::new();
    for (name, value) in entries {
        let serde_json::Value::String(value) = value else {
            return Err(ParseError::header_value_not_string(&name));
        };
        headers.insert(name, value);
    }

    debug!(header_count = headers.len(), "headers parsed");
    Ok(headers)
}

/// Parses both inputs and assembles a [`ConnectionConfig`].
///
/// An empty or whitespace-only proxy is treated as absent.
///
/// # Errors
///
/// Returns [`ParseError`] when either input fails its own parse; the URL is
/// checked first, matching the order failures surface to the user.
pub fn parse_connection(
    course_url_text: &str,
    headers_text: &str,
    proxy_url: Option<&str>,
) -> Result<ConnectionConfig, ParseError> {
    let (base_url, course_id) = parse_course_url(course_url_text)?;
    let headers = parse_headers(headers_text)?;
    let proxy_url = proxy_url
        .map(str::trim)
        .filter(|proxy| !proxy.is_empty())
        .map(ToString::to_string);

    Ok(ConnectionConfig {
        base_url,
        course_id,
        headers,
        proxy_url,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const COURSE_URL: &str = "https://em.example.site/api/student/enrollments/courses/2495";

    // ==================== Course URL Tests ====================

    #[test]
    fn test_parse_course_url_splits_on_last_separator() {
        let (base, id) = parse_course_url(COURSE_URL).unwrap();
        assert_eq!(base, "https://em.example.site/api/student/enrollments/courses");
        assert_eq!(id, "2495");
    }

    #[test]
    fn test_parse_course_url_trims_whitespace() {
        let (base, id) = parse_course_url("  https://host/courses/7 \n").unwrap();
        assert_eq!(base, "https://host/courses");
        assert_eq!(id, "7");
    }

    #[test]
    fn test_parse_course_url_accepts_any_base_shape() {
        // No scheme validation: matches the permissive source behavior.
        let (base, id) = parse_course_url("host-without-scheme/123").unwrap();
        assert_eq!(base, "host-without-scheme");
        assert_eq!(id, "123");
    }

    #[test]
    fn test_parse_course_url_empty_input_fails() {
        let err = parse_course_url("   ").unwrap_err();
        assert!(matches!(err, ParseError::InvalidUrlFormat { .. }));
    }

    #[test]
    fn test_parse_course_url_no_separator_fails() {
        let err = parse_course_url("2495").unwrap_err();
        assert!(matches!(err, ParseError::InvalidUrlFormat { .. }));
    }

    #[test]
    fn test_parse_course_url_non_numeric_id_fails() {
        let err = parse_course_url("https://host/courses/abc123").unwrap_err();
        assert!(matches!(err, ParseError::InvalidUrlFormat { .. }));
    }

    #[test]
    fn test_parse_course_url_trailing_slash_fails() {
        let err = parse_course_url("https://host/courses/2495/").unwrap_err();
        assert!(err.to_string().contains("empty"), "empty id segment: {err}");
    }

    // ==================== Headers Tests ====================

    #[test]
    fn test_parse_headers_object_of_strings() {
        let headers = parse_headers(r#"{"authorization": "Bearer t", "lang": "en"}"#).unwrap();
        assert_eq!(headers.get("authorization").unwrap(), "Bearer t");
        assert_eq!(headers.get("lang").unwrap(), "en");
    }

    #[test]
    fn test_parse_headers_round_trip() {
        let mut original = BTreeMap::new();
        original.insert("authorization".to_string(), "Bearer 56248|abc".to_string());
        original.insert("x-device-token".to_string(), "e593febbfcc5ff78".to_string());

        let text = serde_json::to_string(&original).unwrap();
        let parsed = parse_headers(&text).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_parse_headers_invalid_json_fails() {
        let err = parse_headers("authorization: Bearer t").unwrap_err();
        assert!(matches!(err, ParseError::InvalidHeaderJson { .. }));
    }

    #[test]
    fn test_parse_headers_non_object_fails() {
        for text in [r#"["authorization"]"#, r#""authorization""#, "42", "null"] {
            let err = parse_headers(text).unwrap_err();
            assert!(
                matches!(err, ParseError::InvalidHeaderJson { .. }),
                "{text} should fail as non-object"
            );
        }
    }

    #[test]
    fn test_parse_headers_non_string_value_fails() {
        let err = parse_headers(r#"{"x-app-version": 1.43}"#).unwrap_err();
        assert!(err.to_string().contains("x-app-version"), "{err}");
    }

    #[test]
    fn test_parse_headers_empty_object_is_valid() {
        assert!(parse_headers("{}").unwrap().is_empty());
    }

    // ==================== ConnectionConfig Tests ====================

    #[test]
    fn test_parse_connection_assembles_config() {
        let config = parse_connection(
            COURSE_URL,
            r#"{"authorization": "Bearer t"}"#,
            Some("http://127.0.0.1:8080"),
        )
        .unwrap();
        assert_eq!(config.course_id, "2495");
        assert_eq!(config.proxy_url.as_deref(), Some("http://127.0.0.1:8080"));
        assert_eq!(config.authorization(), Some("Bearer t"));
    }

    #[test]
    fn test_parse_connection_blank_proxy_is_none() {
        let config = parse_connection(COURSE_URL, "{}", Some("  ")).unwrap();
        assert!(config.proxy_url.is_none());
    }

    #[test]
    fn test_connection_config_endpoints() {
        let config = parse_connection("https://host/api/courses/9", "{}", None).unwrap();
        assert_eq!(config.course_endpoint(), "https://host/api/courses/9");
        assert_eq!(config.folder_endpoint("41"), "https://host/api/courses/folders/41");
    }

    #[test]
    fn test_connection_config_folder_endpoint_encodes_id() {
        let config = parse_connection("https://host/api/courses/9", "{}", None).unwrap();
        assert_eq!(
            config.folder_endpoint("a b/c"),
            "https://host/api/courses/folders/a%20b%2Fc"
        );
    }

    #[test]
    fn test_connection_config_authorization_empty_is_none() {
        let config = parse_connection(COURSE_URL, r#"{"authorization": ""}"#, None).unwrap();
        assert!(config.authorization().is_none());
    }
}
