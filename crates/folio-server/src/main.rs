//! Folio CLI
//!
//! Serves the portfolio site and offers a few inspection commands.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::Registry;
use folio_server::config_cmd::{cmd_config_get, cmd_config_init, cmd_config_path};
use folio_server::telemetry::init_tracing;
use folio_server::{FolioConfig, Overrides, render_path};

/// Folio - portfolio site server
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about = "Portfolio site server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "FOLIO_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// List registered projects
    Projects {
        /// Print the full records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render one path to stdout without starting a listener
    Render {
        /// Request path, e.g. `/project/ken-interior-shop`
        path: String,
        #[command(flatten)]
        site: ServeArgs,
    },
    /// Configuration file operations
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(clap::Args, Debug)]
struct ServeArgs {
    /// Listen host
    #[arg(long, env = "FOLIO_HOST")]
    host: Option<String>,
    /// Listen port
    #[arg(short, long, env = "FOLIO_PORT")]
    port: Option<u16>,
    /// URL prefix the site is mounted under
    #[arg(long, env = "FOLIO_BASE_PATH")]
    base_path: Option<String>,
    /// Directory static assets are served from
    #[arg(long, env = "FOLIO_ASSET_DIR")]
    asset_dir: Option<PathBuf>,
    /// Address shown in the contact section
    #[arg(long, env = "FOLIO_CONTACT_EMAIL")]
    contact_email: Option<String>,
}

impl From<ServeArgs> for Overrides {
    fn from(args: ServeArgs) -> Self {
        Overrides {
            host: args.host,
            port: args.port,
            base_path: args.base_path,
            asset_dir: args.asset_dir,
            contact_email: args.contact_email,
        }
    }
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the config file location
    Path,
    /// Print one value by dotted key, e.g. `server.port`
    Get {
        /// Dotted key
        key: String,
    },
    /// Write a default config file
    Init {
        /// Target file (defaults to the standard location)
        #[arg(short, long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Serve(args) => {
            let config = FolioConfig::load_with(config_path, args.into())?;
            init_tracing(&config.logging.filter)?;
            folio_server::serve(&config).await?;
        }
        Command::Projects { json } => {
            let registry = Registry::builtin();
            if json {
                let out = serde_json::to_string_pretty(registry.projects())
                    .context("failed to serialize projects")?;
                println!("{out}");
            } else {
                for project in registry.projects() {
                    println!(
                        "{:<22} {:<7} {}",
                        project.id,
                        project.kind().as_str(),
                        project.title
                    );
                }
            }
        }
        Command::Render { path, site } => {
            let config = FolioConfig::load_with(config_path, site.into())?;
            let (status, body) = render_path(&config, &path).await?;
            if !status.is_success() {
                eprintln!("{path}: {status}");
            }
            println!("{body}");
        }
        Command::Config(ConfigCommand::Path) => {
            println!("{}", cmd_config_path(config_path)?);
        }
        Command::Config(ConfigCommand::Get { key }) => {
            println!("{}", cmd_config_get(config_path, &key)?);
        }
        Command::Config(ConfigCommand::Init { file, force }) => {
            let target = file.as_deref().or(config_path);
            let written = cmd_config_init(target, force)?;
            println!("Wrote {}", written.display());
        }
    }

    Ok(())
}
