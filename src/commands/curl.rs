//! Curl command handler: emit download commands for matching files.

use anyhow::{Result, bail};
use course_browser_core::{Session, render_download_command};

use crate::cli::CurlArgs;
use crate::commands::{build_client, fetch_with_progress, probe_gate};

pub async fn run_curl_command(args: &CurlArgs) -> Result<()> {
    let client = build_client(&args.connection)?;
    if !args.skip_probe {
        probe_gate(&client).await?;
    }

    let outcome = fetch_with_progress(&client).await?;
    let mut session = Session::new(client.config().clone());
    session.install_fetch(outcome);

    // Warnings go to stderr; stdout stays a clean, pipeable command stream.
    for warning in session.warnings() {
        eprintln!("⚠️  {warning}");
    }

    let Some(tree) = session.tree() else {
        bail!("no course tree fetched");
    };
    let tree = match &args.material {
        Some(term) => tree.filter_materials(term),
        None => tree.clone(),
    };

    if tree.is_empty() {
        bail!("no files match the requested material filter");
    }

    let config = session.config();
    let mut first = true;
    for (_, _, material) in tree.iter_materials() {
        if !first {
            println!();
        }
        first = false;
        println!("# {}", material.name);
        println!(
            "{}",
            render_download_command(
                &material.link,
                &material.name,
                &config.headers,
                config.proxy_url.as_deref(),
                &args.dest,
            )
        );
    }
    Ok(())
}
