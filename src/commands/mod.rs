//! CLI command handlers.

mod curl;
mod probe;
mod tree;

pub use curl::run_curl_command;
pub use probe::run_probe_command;
pub use tree::run_tree_command;

use anyhow::{Context, Result, bail};
use course_browser_core::{CourseClient, FetchOutcome, parse_connection};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::cli::ConnectionArgs;

/// Reads the headers blob from the inline flag or the file flag.
pub(crate) fn load_headers_text(args: &ConnectionArgs) -> Result<String> {
    if let Some(inline) = &args.headers {
        return Ok(inline.clone());
    }
    if let Some(path) = &args.headers_file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read headers file {}", path.display()));
    }
    bail!("no headers given; pass --headers '<json>' or --headers-file <path>")
}

/// Parses the connection inputs and builds the API client.
pub(crate) fn build_client(args: &ConnectionArgs) -> Result<CourseClient> {
    let headers_text = load_headers_text(args)?;
    let config = parse_connection(&args.url, &headers_text, args.proxy.as_deref())?;
    let client = CourseClient::new(config)?.with_debug_payloads(args.debug);
    Ok(client)
}

/// Runs the probe as a gate before fetching; fails the command when the
/// probe fails.
pub(crate) async fn probe_gate(client: &CourseClient) -> Result<()> {
    let report = client.probe().await;
    if report.ok {
        debug!(status = ?report.status, "connectivity probe ok");
        Ok(())
    } else {
        bail!("connectivity probe failed: {}", report.describe())
    }
}

/// Drives a fetch behind a progress bar over the folder loop.
pub(crate) async fn fetch_with_progress(client: &CourseClient) -> Result<FetchOutcome> {
    let bar = ProgressBar::new(0);
    bar.set_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} folders")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let result = client
        .fetch_tree(|done, total| {
            bar.set_length(total as u64);
            bar.set_position(done as u64);
        })
        .await;
    bar.finish_and_clear();
    Ok(result?)
}
