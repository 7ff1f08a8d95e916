//! Course-content API client: connectivity probe and course tree fetch.
//!
//! One [`CourseClient`] wraps a `reqwest::Client` configured from a
//! [`ConnectionConfig`]: the user's headers are installed verbatim as default
//! headers and forwarded on every call, with optional proxy support.
//!
//! # Architecture
//!
//! - [`CourseClient::probe`] - single GET against the course endpoint,
//!   classified into a [`ProbeReport`]; never fails past the boundary
//! - [`CourseClient::fetch_tree`] - course listing GET followed by one
//!   folder-detail GET per folder, strictly sequential, skip-and-warn on
//!   per-folder failures
//! - [`FetchError`] / [`FolderWarning`] - fatal vs collected failures
//!
//! The fetch never retries; the user re-triggers it.

mod error;
mod types;

pub use error::{FetchError, FolderWarning};
pub use types::{
    CourseData, CourseResponse, FolderDetailResponse, FolderId, FolderSummary, RawFolderDetail,
    RawMaterial, RawMaterialable, RawSubfolder,
};

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::course::{CourseTree, normalize_folder};
use crate::parser::ConnectionConfig;

/// Request timeout for the connectivity probe.
pub const PROBE_TIMEOUT_SECS: u64 = 10;
/// Request timeout for the course listing and each folder-detail call.
pub const FOLDER_TIMEOUT_SECS: u64 = 30;
/// How much of a 403 body the probe surfaces for diagnosis.
pub const PROBE_BODY_PREVIEW_CHARS: usize = 200;

/// Outcome of a connectivity probe.
///
/// `ok` mirrors a 2xx response; everything else carries whatever diagnostic
/// detail was available. The probe itself never returns an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub ok: bool,
    /// HTTP status, when a response came back at all.
    pub status: Option<u16>,
    /// Truncated response body, surfaced for 403 diagnosis.
    pub body_preview: Option<String>,
    /// Transport-level failure reason (timeout, DNS, refused).
    pub failure: Option<String>,
}

impl ProbeReport {
    #[must_use]
    fn success(status: u16) -> Self {
        Self {
            ok: true,
            status: Some(status),
            body_preview: None,
            failure: None,
        }
    }

    #[must_use]
    fn denied(status: u16, body_preview: String) -> Self {
        Self {
            ok: false,
            status: Some(status),
            body_preview: Some(body_preview),
            failure: None,
        }
    }

    #[must_use]
    fn http_error(status: u16) -> Self {
        Self {
            ok: false,
            status: Some(status),
            body_preview: None,
            failure: None,
        }
    }

    #[must_use]
    fn transport(reason: String) -> Self {
        Self {
            ok: false,
            status: None,
            body_preview: None,
            failure: Some(reason),
        }
    }

    /// One-line (plus optional preview) summary for display.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.ok {
            return match self.status {
                Some(status) => format!("connection ok (HTTP {status})"),
                None => "connection ok".to_string(),
            };
        }
        if let Some(reason) = &self.failure {
            return format!("connection failed: {reason}");
        }
        match (self.status, &self.body_preview) {
            (Some(status), Some(preview)) => {
                format!("HTTP {status} - the API rejected the headers\n  response preview: {preview}")
            }
            (Some(status), None) => format!("unexpected HTTP {status} from the course endpoint"),
            (None, _) => "connection failed".to_string(),
        }
    }
}

/// A fetched course tree plus the per-folder warnings collected on the way.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub tree: CourseTree,
    pub warnings: Vec<FolderWarning>,
}

/// HTTP client for one course's API, built from a [`ConnectionConfig`].
#[derive(Debug)]
pub struct CourseClient {
    client: Client,
    config: ConnectionConfig,
    debug_payloads: bool,
}

impl CourseClient {
    /// Builds the client: verbatim default headers, gzip, optional proxy.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidHeader`] for a header that is not a legal
    /// HTTP token, [`FetchError::InvalidProxy`] for an unusable proxy URL,
    /// and [`FetchError::ClientBuild`] when client construction fails.
    pub fn new(config: ConnectionConfig) -> Result<Self, FetchError> {
        let mut default_headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| FetchError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| FetchError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            default_headers.insert(header_name, header_value);
        }

        let mut builder = Client::builder().default_headers(default_headers).gzip(true);
        if let Some(proxy_url) = &config.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| FetchError::InvalidProxy {
                url: proxy_url.clone(),
                reason: e.to_string(),
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::ClientBuild { reason: e.to_string() })?;

        Ok(Self {
            client,
            config,
            debug_payloads: false,
        })
    }

    /// Enables logging of raw API response bodies at debug level.
    #[must_use]
    pub fn with_debug_payloads(mut self, enabled: bool) -> Self {
        self.debug_payloads = enabled;
        self
    }

    /// The connection config this client was built from.
    #[must_use]
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Probes the course endpoint to confirm the headers are usable.
    ///
    /// Classification: 2xx is ok; 403 carries a truncated body preview for
    /// diagnosis; any other status is a plain failure; transport errors get
    /// a distinct reason. The caller decides whether to proceed.
    #[tracing::instrument(skip(self), fields(course_id = %self.config.course_id))]
    pub async fn probe(&self) -> ProbeReport {
        let url = self.config.course_endpoint();
        info!(url = %url, "probing course endpoint");

        let response = match self
            .client
            .get(&url)
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                warn!(url = %url, %error, "probe transport failure");
                let reason = if error.is_timeout() {
                    "request timed out".to_string()
                } else {
                    error.to_string()
                };
                return ProbeReport::transport(reason);
            }
        };

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "probe ok");
            return ProbeReport::success(status.as_u16());
        }

        if status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            if self.debug_payloads {
                debug!(url = %url, body = %body, "probe 403 payload");
            }
            let preview: String = body.chars().take(PROBE_BODY_PREVIEW_CHARS).collect();
            return ProbeReport::denied(status.as_u16(), preview);
        }

        warn!(status = status.as_u16(), "probe got unexpected status");
        ProbeReport::http_error(status.as_u16())
    }

    /// Fetches and normalizes the whole course tree.
    ///
    /// One GET for the folder listing, then one GET per folder in listing
    /// order. Per-folder failures (403, other statuses, transport errors,
    /// unusable bodies) are recorded as warnings and skipped; the loop
    /// always completes. `on_progress(processed, total)` fires after every
    /// folder, processed or skipped.
    ///
    /// # Errors
    ///
    /// [`FetchError::MissingAuthorization`] before any request when the
    /// headers lack a non-empty `authorization` entry;
    /// [`FetchError::Transport`] / [`FetchError::Http`] /
    /// [`FetchError::MalformedCourseResponse`] when the course listing
    /// itself fails; [`FetchError::NoValidFolders`] when every listed
    /// folder failed (carrying the collected warnings).
    #[tracing::instrument(skip(self, on_progress), fields(course_id = %self.config.course_id))]
    pub async fn fetch_tree<F>(&self, mut on_progress: F) -> Result<FetchOutcome, FetchError>
    where
        F: FnMut(usize, usize),
    {
        if self.config.authorization().is_none() {
            return Err(FetchError::MissingAuthorization);
        }

        let course_url = self.config.course_endpoint();
        info!(url = %course_url, "fetching course folder list");

        let response = self
            .client
            .get(&course_url)
            .timeout(Duration::from_secs(FOLDER_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| FetchError::transport(&course_url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: course_url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::transport(&course_url, &e))?;
        if self.debug_payloads {
            debug!(url = %course_url, body = %body, "course response payload");
        }

        let course: CourseResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::MalformedCourseResponse {
                reason: format!("course body is not the expected JSON shape: {e}"),
            })?;
        let folders = course
            .data
            .ok_or_else(|| FetchError::MalformedCourseResponse {
                reason: "missing 'data' key".to_string(),
            })?
            .folders
            .ok_or_else(|| FetchError::MalformedCourseResponse {
                reason: "missing 'data.folders' key".to_string(),
            })?;

        let total = folders.len();
        let mut tree = CourseTree::default();
        let mut warnings = Vec::new();

        for (index, summary) in folders.iter().enumerate() {
            let folder_id = summary.id.to_string();
            let display_name = summary
                .name
                .clone()
                .unwrap_or_else(|| format!("folder {folder_id}"));

            match self.fetch_folder_detail(&folder_id).await {
                Ok(raw) => {
                    let normalized = normalize_folder(&raw);
                    for warning in normalized.warnings {
                        warnings.push(FolderWarning::new(&folder_id, &display_name, warning));
                    }
                    tree.folders.push(normalized.folder);
                }
                Err(reason) => {
                    warn!(folder_id = %folder_id, folder = %display_name, %reason, "skipping folder");
                    warnings.push(FolderWarning::new(&folder_id, &display_name, reason));
                }
            }

            on_progress(index + 1, total);
        }

        if tree.is_empty() {
            return Err(FetchError::NoValidFolders {
                attempted: total,
                warnings,
            });
        }

        info!(
            folders = tree.folders.len(),
            materials = tree.material_count(),
            warnings = warnings.len(),
            "course tree fetched"
        );
        Ok(FetchOutcome { tree, warnings })
    }

    /// Fetches one folder's detail payload; any failure becomes a warning
    /// reason string for the caller's skip-and-continue loop.
    async fn fetch_folder_detail(&self, folder_id: &str) -> Result<RawFolderDetail, String> {
        let url = self.config.folder_endpoint(folder_id);
        debug!(url = %url, "fetching folder detail");

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(FOLDER_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| format!("network error: {e}"))?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Err("access denied (HTTP 403); check the authorization headers".to_string());
        }
        if !status.is_success() {
            return Err(format!("HTTP {}", status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| format!("network error reading body: {e}"))?;
        if self.debug_payloads {
            debug!(url = %url, body = %body, "folder response payload");
        }

        let detail: FolderDetailResponse = serde_json::from_str(&body)
            .map_err(|e| format!("unreadable folder response: {e}"))?;
        detail
            .data
            .ok_or_else(|| "missing 'data' key in folder response".to_string())
    }
}
