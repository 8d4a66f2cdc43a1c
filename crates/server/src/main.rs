use anyhow::Context;
use clap::Parser;
use nearby::{Config, NearbySearch};
use nearby_server::run_server;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Search configuration file (JSON, or TOML with the `toml` feature)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON array of items to load into the in-memory store
    #[arg(short, long)]
    seed: Option<PathBuf>,
}

fn load_config(path: &PathBuf) -> anyhow::Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;

    #[cfg(feature = "toml")]
    if path.extension().is_some_and(|ext| ext == "toml") {
        return Config::from_toml(&text).context("Invalid TOML config");
    }

    Config::from_json(&text).context("Invalid JSON config")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nearby_server=info,nearby=info,info".into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    let mut builder = NearbySearch::builder().config(config);
    if let Some(path) = args.seed {
        info!("Seeding items from {}", path.display());
        builder = builder.seed_file(path);
    } else {
        info!("Starting with an empty item store");
    }
    let search = builder.build()?;

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", args.host, args.port))?;

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl_c signal: {}", e);
            std::future::pending::<()>().await;
        }
    };

    run_server(listener, search, shutdown).await
}
