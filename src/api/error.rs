//! Error types and per-folder warnings for the fetch pipeline.

use std::fmt;

use thiserror::Error;

/// A non-fatal, per-folder failure recorded during the detail-fetch loop.
///
/// Warnings never abort the fetch; they are collected and surfaced to the
/// user alongside the folders that did load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderWarning {
    /// The folder id from the course listing.
    pub folder_id: String,
    /// The folder's display name (summary name or a synthesized placeholder).
    pub folder_name: String,
    /// What went wrong for this folder.
    pub reason: String,
}

impl FolderWarning {
    /// Creates a warning for one folder.
    #[must_use]
    pub fn new(
        folder_id: impl Into<String>,
        folder_name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            folder_id: folder_id.into(),
            folder_name: folder_name.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FolderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "folder '{}' (id {}): {}", self.folder_name, self.folder_id, self.reason)
    }
}

/// Errors that abort a probe-less fetch as a whole.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The headers lack a non-empty `authorization` entry
    #[error(
        "missing authorization header\n  Suggestion: include a non-empty 'authorization' entry in the headers JSON"
    )]
    MissingAuthorization,

    /// A configured header is not a legal HTTP header token
    #[error("invalid header '{name}': {reason}\n  Suggestion: remove control characters from the header name and value")]
    InvalidHeader {
        /// The offending header name
        name: String,
        /// Why the header was rejected
        reason: String,
    },

    /// The proxy URL could not be understood by the HTTP client
    #[error("invalid proxy URL '{url}': {reason}")]
    InvalidProxy {
        /// The proxy URL that failed
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// The HTTP client itself could not be constructed
    #[error("HTTP client construction failed: {reason}")]
    ClientBuild {
        /// Builder error detail
        reason: String,
    },

    /// Timeout, DNS, or connection failure on a required call
    #[error("network error calling {url}: {reason}\n  Suggestion: check connectivity and any VPN or proxy, then retry")]
    Transport {
        /// The URL that was being called
        url: String,
        /// Transport-level reason
        reason: String,
    },

    /// Non-2xx status on a required call
    #[error("HTTP {status} from {url}")]
    Http {
        /// The response status code
        status: u16,
        /// The URL that was being called
        url: String,
    },

    /// The course response was readable but not the expected shape
    #[error("malformed course response: {reason}")]
    MalformedCourseResponse {
        /// What was missing or undecodable
        reason: String,
    },

    /// Every listed folder failed to yield usable data
    #[error("no folder could be fetched ({attempted} attempted)")]
    NoValidFolders {
        /// How many folders the course listed
        attempted: usize,
        /// The per-folder reasons collected along the way
        warnings: Vec<FolderWarning>,
    },
}

impl FetchError {
    /// Creates a [`FetchError::Transport`] from a reqwest error, classifying
    /// timeouts distinctly from connection failures.
    #[must_use]
    pub fn transport(url: &str, error: &reqwest::Error) -> Self {
        let reason = if error.is_timeout() {
            "request timed out".to_string()
        } else if error.is_connect() {
            format!("connection failed: {error}")
        } else {
            error.to_string()
        };
        Self::Transport {
            url: url.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_warning_display() {
        let warning = FolderWarning::new("41", "Week 1", "HTTP 403");
        let msg = warning.to_string();
        assert!(msg.contains("Week 1"), "should contain folder name");
        assert!(msg.contains("41"), "should contain folder id");
        assert!(msg.contains("HTTP 403"), "should contain reason");
    }

    #[test]
    fn test_missing_authorization_message() {
        let msg = FetchError::MissingAuthorization.to_string();
        assert!(msg.contains("authorization"), "should name the header");
        assert!(msg.contains("Suggestion"), "should carry a suggestion");
    }

    #[test]
    fn test_http_error_message_carries_status_and_url() {
        let err = FetchError::Http {
            status: 500,
            url: "https://host/courses/9".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("https://host/courses/9"));
    }

    #[test]
    fn test_no_valid_folders_message_carries_count() {
        let err = FetchError::NoValidFolders {
            attempted: 3,
            warnings: vec![FolderWarning::new("1", "a", "HTTP 403")],
        };
        assert!(err.to_string().contains("3 attempted"));
    }
}
