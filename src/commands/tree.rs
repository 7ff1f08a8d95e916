//! Tree command handler: fetch the course tree and render it.

use anyhow::Result;
use course_browser_core::Session;

use crate::cli::TreeArgs;
use crate::commands::{build_client, fetch_with_progress, probe_gate};

pub async fn run_tree_command(args: &TreeArgs) -> Result<()> {
    let client = build_client(&args.connection)?;
    if !args.skip_probe {
        probe_gate(&client).await?;
    }

    let outcome = fetch_with_progress(&client).await?;
    let mut session = Session::new(client.config().clone());
    session.install_fetch(outcome);

    for warning in session.warnings() {
        println!("⚠️  {warning}");
    }

    let Some(tree) = session.tree() else {
        return Ok(());
    };
    let tree = match &args.search {
        Some(term) => tree.filter_materials(term),
        None => tree.clone(),
    };

    if tree.is_empty() {
        println!("No files matched the current search.");
        return Ok(());
    }

    for folder in &tree.folders {
        println!("📁 {}", folder.name);
        if folder.children.is_empty() {
            println!("   (no subfolders)");
            continue;
        }
        for child in &folder.children {
            println!("  📂 {}", child.name);
            if child.materials.is_empty() {
                println!("     (no files)");
                continue;
            }
            for material in &child.materials {
                println!("    📄 {}", material.name);
                println!("       {}", material.link);
            }
        }
    }
    println!();
    println!(
        "{} folders, {} files",
        tree.folders.len(),
        tree.material_count()
    );
    Ok(())
}
