mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "skiff",
    about = "Patch changed files into running containers instead of rebuilding"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Jib build and print the extracted sync map
    Sync {
        /// Print the map as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check build-tool setup and readiness
    Doctor,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                // arch-lint: allow(no-silent-result-drop) reason="absent or invalid RUST_LOG falls back to the info-level filter — standard startup idiom"
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sync { json } => commands::sync(json).await?,
        Commands::Doctor => commands::doctor().await?,
    }

    Ok(())
}
