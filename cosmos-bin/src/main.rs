mod commands;

use clap::{Parser, Subcommand};
use cosmos_common::CXContext;
use cosmos_error::{CXError, CXResult};
use cosmos_models::{constants::DEFAULT_CONFIG_FILE_NAME, record::EntityFamily};
use std::{env::current_dir, path::PathBuf, process::ExitCode};
use tracing::error;
use uuid::Uuid;

/// CosmosExplorer sync - keeps the on-device catalog and the remote mirror in step
#[derive(Parser)]
#[command(name = "cosmos")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "CosmosExplorer catalog sync", long_about = None)]
struct Cli {
    /// Sets a custom config file with full path
    ///
    /// If not specified, 'cosmos.toml' in the current working directory is
    /// used when present.
    #[arg(short, long, env = "CX_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the remote tables that do not exist yet
    MigrateRemote,
    /// Print every entity of a family as JSON, repairing an empty local store
    Fetch {
        #[arg(value_parser = parse_family)]
        family: EntityFamily,
    },
    /// Print the remote rows of a family without touching the local store
    FetchRemote {
        #[arg(value_parser = parse_family)]
        family: EntityFamily,
    },
    /// Save every entity of a JSON array file
    Import {
        #[arg(value_parser = parse_family)]
        family: EntityFamily,
        file: PathBuf,
    },
    /// Overwrite the local copies of a family with the remote rows
    Refresh {
        #[arg(value_parser = parse_family)]
        family: EntityFamily,
    },
    /// Delete one entity from both stores
    Delete {
        #[arg(value_parser = parse_family)]
        family: EntityFamily,
        id: Uuid,
    },
    /// Flip the favorite flag of one entity
    Favorite {
        #[arg(value_parser = parse_family)]
        family: EntityFamily,
        id: Uuid,
    },
}

fn parse_family(s: &str) -> Result<EntityFamily, String> {
    s.parse().map_err(|e: CXError| e.to_string())
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> CXResult<ExitCode> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(p) => p,
        None => {
            let dir = current_dir()
                .map_err(|e| CXError::from(format!("Failed to get current directory: {e}")))?;
            dir.join(DEFAULT_CONFIG_FILE_NAME)
        }
    };

    let ctx = CXContext::init(config_path.to_string_lossy().to_string()).await?;
    let result = commands::run(&ctx, cli.command).await;
    if let Err(e) = ctx.shutdown().await {
        error!("❌ Failed to close local store: {e}");
    }

    match result {
        Ok(true) => Ok(ExitCode::SUCCESS),
        Ok(false) => Ok(ExitCode::FAILURE),
        Err(e) => {
            error!("❌ {e}");
            Err(e)
        }
    }
}
