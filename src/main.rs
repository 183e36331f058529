use anyhow::Context;
use clap::Parser;
use pnsearch::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pnsearch", version, about = "Fuzzy search over parts orders")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,

    /// Port to listen on.
    #[arg(short, long)]
    port: Option<u16>,

    /// Dataset file (.db / .sqlite, or .csv).
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Config file. Defaults to $XDG_CONFIG_HOME/pnsearch/config.toml when present.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref()).context("loading config")?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(file) = cli.file {
        config.dataset.path = file;
    }

    let state = pnsearch::bootstrap(&config)?;
    pnsearch::web::serve(state, &config.server.socket_addr()).await
}
