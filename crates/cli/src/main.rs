mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use ai_audit_core::AuditConfig;
use ai_audit_storage::{JsonFileStore, UsageStore};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::track::TrackArgs;

#[derive(Parser)]
#[command(name = "ai-audit", version)]
#[command(about = "Audit log of AI-assisted changes with a read-only usage report", long_about = None)]
struct Cli {
    /// Usage store path [default: $AI_AUDIT_STORE_PATH or .ai-audit/usage-data.json]
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the usage report over HTTP
    Serve {
        #[arg(short, long, default_value = "3100")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print the usage report as JSON
    Report {
        /// Keep only the most recent N sessions
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Record one AI-assisted change
    Track(TrackArgs),
}

fn open_store(config: &AuditConfig) -> Arc<dyn UsageStore> {
    Arc::new(JsonFileStore::new(config.store_path.clone()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AuditConfig::from_env().with_store_path(cli.store);
    let store = open_store(&config);

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(store, &host, port).await,
        Commands::Report { limit } => commands::report::run(store, limit).await,
        Commands::Track(args) => commands::track::run(store, config.max_sessions, args).await,
    }
}
