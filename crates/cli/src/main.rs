//! Glance CLI
//!
//! Entry point for the web server and the run-once dashboard.

use anyhow::Result;
use clap::{Parser, Subcommand};
use glance_dashboard::DashboardConfig;
use glance_server::ServerConfig;
use glance_storage::Storage;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "glance")]
#[command(about = "Glance - a table viewer over an embedded SQLite file")]
#[command(version)]
struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "data/database.db")]
    database: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind to
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },

    /// Load one table and print it
    Dashboard {
        /// Table to display
        #[arg(short, long, default_value = "your_table")]
        table: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let storage = Storage::open(&cli.database);

    match cli.command {
        Commands::Serve { bind } => {
            glance_server::run(ServerConfig { bind }, storage).await?;
        }
        Commands::Dashboard { table } => {
            glance_dashboard::run(&storage, &DashboardConfig { table }).await?;
        }
    }

    Ok(())
}
