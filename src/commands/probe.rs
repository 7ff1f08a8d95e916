//! Probe command handler: test the headers against the course endpoint.

use anyhow::{Result, bail};

use crate::cli::ProbeArgs;
use crate::commands::build_client;

pub async fn run_probe_command(args: &ProbeArgs) -> Result<()> {
    let client = build_client(&args.connection)?;
    let report = client.probe().await;
    if report.ok {
        println!("✅ {}", report.describe());
        Ok(())
    } else {
        bail!("{}", report.describe())
    }
}
