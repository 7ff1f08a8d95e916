//! CLI argument definitions using clap derive macros.

use clap::{Args, Parser, Subcommand};

use course_browser_core::DEFAULT_DESTINATION_ROOT;

/// Browse remote course folders and generate download commands.
///
/// course-browser fetches a course's folder tree from its content API using
/// request headers you supply, lets you filter the files, and renders
/// ready-to-run curl commands for individual files.
#[derive(Parser, Debug)]
#[command(name = "course-browser")]
#[command(author, version, about)]
pub struct Cli {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection inputs shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Full course URL ending in the numeric course id
    #[arg(long)]
    pub url: String,

    /// Headers as an inline JSON object
    #[arg(long, conflicts_with = "headers_file")]
    pub headers: Option<String>,

    /// Path to a file holding the headers JSON object
    #[arg(long)]
    pub headers_file: Option<std::path::PathBuf>,

    /// Proxy URL forwarded to API calls and generated commands
    #[arg(long)]
    pub proxy: Option<String>,

    /// Surface raw API payloads for diagnosis
    #[arg(long)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that the configured headers can reach the course endpoint
    Probe(ProbeArgs),
    /// Fetch the course tree and print folders, subfolders and files
    Tree(TreeArgs),
    /// Emit download commands for matching files
    Curl(CurlArgs),
}

impl Command {
    /// The connection inputs of whichever subcommand was chosen.
    pub fn connection(&self) -> &ConnectionArgs {
        match self {
            Self::Probe(args) => &args.connection,
            Self::Tree(args) => &args.connection,
            Self::Curl(args) => &args.connection,
        }
    }
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Only show files whose name contains this term (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Skip the connectivity probe before fetching
    #[arg(long)]
    pub skip_probe: bool,
}

#[derive(Args, Debug)]
pub struct CurlArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Only emit commands for files whose name contains this term
    #[arg(long)]
    pub material: Option<String>,

    /// Output directory used inside the generated commands
    #[arg(long, default_value = DEFAULT_DESTINATION_ROOT)]
    pub dest: String,

    /// Skip the connectivity probe before fetching
    #[arg(long)]
    pub skip_probe: bool,
}
