//! Segment Router CLI
//!
//! Loads a TOML route table and resolves paths against it.
//!
//! ```text
//!     router.toml ──▶ config::load_config ──▶ Router::from_config
//!                                                   │
//!     PATH... ─────────────────────────────▶ Router::resolve ──▶ JSON on stdout
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use segment_router::config::load_config;
use segment_router::observability::init_logging;
use segment_router::Router;

#[derive(Parser)]
#[command(name = "segment-router")]
#[command(about = "Resolve request paths against a route table", long_about = None)]
struct Cli {
    /// Route table to load.
    #[arg(short, long, default_value = "router.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the route table
    Check,
    /// List compiled routes
    Routes,
    /// Resolve one or more paths
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    init_logging(&config.observability);

    tracing::info!(
        config = ?cli.config,
        routes = config.routes.len(),
        mount_prefix = %config.mount_prefix,
        "Configuration loaded"
    );

    let router = Router::from_config(&config)?;

    match cli.command {
        Commands::Check => {
            println!("ok: {} routes", router.routes().len());
        }
        Commands::Routes => {
            println!("{}", serde_json::to_string_pretty(router.routes())?);
        }
        Commands::Resolve { paths } => {
            for path in paths {
                let matched = router.resolve(&path);
                println!("{}", json!({ "path": path, "match": matched }));
            }
        }
    }

    Ok(())
}
