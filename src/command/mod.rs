//! Download command rendering.
//!
//! The system never downloads anything itself; its durable output is a
//! copy-pasteable `curl` invocation carrying the session's headers. The
//! header set and order are fixed so the same inputs always render the same
//! command.

use std::collections::BTreeMap;

/// Default output directory inside the generated command. Matches the path
/// the source application targeted; overridable at the CLI boundary.
pub const DEFAULT_DESTINATION_ROOT: &str = "/storage/emulated/0/كورس";

/// The headers a generated command forwards, in render order, with the
/// fallback used when the session's header map lacks the key.
pub const COMMAND_HEADERS: [(&str, &str); 9] = [
    ("lang", "en"),
    ("x-secret", ""),
    ("authorization", ""),
    ("x-device-token", ""),
    ("x-app-version", ""),
    ("x-device-type", ""),
    ("x-device-version", ""),
    ("accept-encoding", "gzip"),
    ("user-agent", ""),
];

/// Renders the download command for one material.
///
/// Values are wrapped in double quotes and nothing more; filenames with
/// embedded quotes or backticks stay a known, unhandled edge case.
#[must_use]
pub fn render_download_command(
    link: &str,
    filename: &str,
    headers: &BTreeMap<String, String>,
    proxy_url: Option<&str>,
    destination_root: &str,
) -> String {
    let mut lines = Vec::with_capacity(COMMAND_HEADERS.len() + 3);
    lines.push(format!("curl -L \"{link}\" \\"));
    for (name, fallback) in COMMAND_HEADERS {
        let value = headers.get(name).map_or(fallback, String::as_str);
        lines.push(format!("  -H \"{name}: {value}\" \\"));
    }
    if let Some(proxy) = proxy_url {
        lines.push(format!("  -x \"{proxy}\" \\"));
    }
    lines.push(format!(
        "  -o \"{}/{filename}\"",
        destination_root.trim_end_matches('/')
    ));
    lines.join("\n")
}
