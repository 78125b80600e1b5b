//! Arbor CLI - Command line interface for the tree navigation service

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use arbor_server::run_server;

#[derive(Parser)]
#[command(name = "arbor")]
#[command(author, version, about = "Zipper-style tree navigation over HTTP")]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "ARBOR_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000, env = "ARBOR_PORT")]
    pub port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting arbor CLI");

    match &cli.command {
        Commands::Serve(args) => {
            let addr = format!("{}:{}", args.host, args.port);
            run_server(&addr).await?;
        }
    }

    Ok(())
}
