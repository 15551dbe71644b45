//! Activity Signup Server
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Settings come from (lowest to highest precedence) built-in defaults, a
//! TOML config file (`--config`, or the first of
//! `~/.config/activity-signup/config.toml`, `/etc/activity-signup/config.toml`,
//! `./config.toml`), `ACTIVITIES_*` environment variables, and command-line
//! flags. `RUST_LOG` overrides the configured log level.

use activity_signup::config::{generate_default_config, Config, LoggingConfig};
use activity_signup::{serve, ActivityCatalog, AppState};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "activity-signup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extracurricular activity signup server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the API server (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory with the built activities UI
        #[arg(long)]
        static_dir: Option<String>,
        /// JSON file to seed the catalog from
        #[arg(long)]
        seed_file: Option<String>,
    },

    /// Print a default config file to stdout
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        static_dir: None,
        seed_file: None,
    });

    match command {
        Commands::InitConfig => {
            print!("{}", generate_default_config());
            Ok(())
        }
        Commands::Serve {
            host,
            port,
            static_dir,
            seed_file,
        } => {
            let (mut config, source) = Config::resolve(cli.config.as_deref())?;

            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dir) = static_dir {
                config.server.static_dir = dir;
            }
            if seed_file.is_some() {
                config.catalog.seed_file = seed_file;
            }

            init_tracing(&config.logging);

            tracing::info!("Starting activity signup server v{}", env!("CARGO_PKG_VERSION"));
            match source {
                Some(path) => tracing::info!("Loaded config from {:?}", path),
                None => tracing::info!("Using default config with environment overrides"),
            }

            run(config).await
        }
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    let catalog = match &config.catalog.seed_file {
        Some(path) => ActivityCatalog::from_seed_file(Path::new(path))
            .with_context(|| format!("Failed to seed catalog from {}", path))?,
        None => ActivityCatalog::with_defaults(),
    };

    tracing::info!("Catalog ready with {} activities", catalog.len().await);
    tracing::info!("Serving UI from {:?}", config.server.static_dir);

    let state = AppState::new(Arc::new(catalog), config.server);
    serve(state).await?;

    tracing::info!("Activity signup server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("activity_signup={},tower_http=info", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
