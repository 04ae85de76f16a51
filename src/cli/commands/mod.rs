//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod copy_citation;
mod inspect;
mod render;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings, LoadOptions};
use crate::layout::Layout;

#[derive(Parser)]
#[command(name = "tpage")]
#[command(about = "Render tutorial pages from team, schedule and reading-list JSON")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Site directory or base URL the JSON documents are fetched from
    #[arg(short, long, global = true)]
    site: Option<String>,

    /// Page layout
    #[arg(short, long, global = true, value_enum)]
    layout: Option<Layout>,

    /// Host HTML page (defaults to the built-in page for the layout)
    #[arg(short, long, global = true)]
    page: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the page's documents and write the rendered page
    Render {
        /// Output file (stdout if not given)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start a web server that renders the page on every request
    Serve {
        /// Address to bind to: PORT, HOST, or HOST:PORT (default: 127.0.0.1:3030)
        #[arg(default_value = "127.0.0.1:3030")]
        bind: String,
    },

    /// Show which containers and UI affordances the host page binds
    Inspect {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Copy the page's citation to the clipboard
    CopyCitation,
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let output = match cli.command {
        Commands::Render { ref output } => output.clone(),
        _ => None,
    };
    let options = LoadOptions {
        config_path: cli.config,
        site: cli.site,
        layout: cli.layout,
        page: cli.page,
        output,
    };
    let settings = load_settings(options).await?;

    match cli.command {
        Commands::Render { .. } => render::cmd_render(&settings).await,
        Commands::Serve { bind } => serve::cmd_serve(&settings, &bind).await,
        Commands::Inspect { json } => inspect::cmd_inspect(&settings, json).await,
        Commands::CopyCitation => copy_citation::cmd_copy_citation(&settings).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tpage", "render", "-l", "v2", "-s", "site", "-o", "out.html"])
            .unwrap();
        assert_eq!(cli.layout, Some(Layout::V2));
        assert_eq!(cli.site.as_deref(), Some("site"));
        assert!(matches!(cli.command, Commands::Render { output: Some(_) }));
    }

    #[test]
    fn test_serve_default_bind() {
        let cli = Cli::try_parse_from(["tpage", "serve"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { ref bind } if bind == "127.0.0.1:3030"));
    }
}
