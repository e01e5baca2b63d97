//! displayname CLI - Render test display names from a test plan manifest
//!
//! Commands:
//! - `displayname check` - Validate a displayname.toml manifest
//! - `displayname render` - Print the display name of every class and method

use clap::{Parser, Subcommand};

mod manifest;
mod render;

#[derive(Parser)]
#[command(name = "displayname")]
#[command(author, version, about = "Render display names for test classes and methods", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a displayname.toml manifest
    Check {
        /// Path to displayname.toml (default: ./displayname.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },

    /// Render display names for every class, nested class and method
    Render {
        /// Path to displayname.toml (default: ./displayname.toml)
        #[arg(short, long)]
        manifest: Option<String>,

        /// Default style for classes without their own (default, underscore)
        #[arg(short, long)]
        style: Option<String>,

        /// Log level written to stderr (trace, debug, info, warn, error, off)
        #[arg(short, long, default_value = "warn")]
        log_level: String,

        /// Emit JSON instead of an indented tree
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { manifest } => {
            manifest::check(manifest)?;
        }
        Commands::Render {
            manifest,
            style,
            log_level,
            json,
        } => {
            render::run(manifest, style, log_level, json)?;
        }
    }

    Ok(())
}
