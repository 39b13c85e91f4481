//! emx-mirage binary
//!
//! Web server whose every page is imagined by an LLM

use anyhow::Result;
use clap::Parser;
use emx_mirage::gate::{start_server, GatewayConfig};
use emx_mirage::{resolve_api_key, API_KEY_VAR};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "./mirage.toml";

/// emx-mirage: every request answered by an imagined web page
#[derive(Parser, Debug)]
#[command(name = "emx-mirage")]
#[command(about = "HTTP server that asks an LLM to imagine each page", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Upstream request timeout in seconds (default: none)
    #[arg(long)]
    timeout: Option<u64>,

    /// Env file scanned for the API key when the variable is unset
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Validate configuration and exit
    #[arg(long)]
    validate: bool,
}

/// Load gateway configuration from file
fn load_gateway_config(config_path: &Path) -> Result<GatewayConfig> {
    let content = std::fs::read_to_string(config_path)?;
    let config: GatewayConfig = toml::from_str(&content)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let config_file = args.config.clone().or_else(|| {
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.exists().then_some(local)
    });

    let mut gateway_config = match config_file {
        Some(ref path) => {
            info!("Loading config from: {}", path.display());
            load_gateway_config(path)?
        }
        None => GatewayConfig::default(),
    };

    // Override with CLI arguments
    if let Some(host) = args.host {
        gateway_config.host = host;
    }
    if let Some(port) = args.port {
        gateway_config.port = port;
    }
    if let Some(timeout) = args.timeout {
        gateway_config.upstream.timeout_secs = Some(timeout);
    }

    if args.validate {
        return validate_config(&gateway_config);
    }

    // Missing key is fatal before the listener is bound
    let env_value = std::env::var(API_KEY_VAR).ok();
    gateway_config.upstream.api_key = resolve_api_key(env_value, &args.env_file)?;

    start_server(gateway_config).await
}

/// Validate configuration
fn validate_config(config: &GatewayConfig) -> Result<()> {
    println!("Configuration validation:");
    println!("  Listen: {}", config.bind_addr());
    println!("  Upstream: {}", config.upstream.messages_url());
    println!("  Model: {}", config.upstream.model);
    println!("  Max tokens: {}", config.upstream.max_tokens);
    match config.upstream.timeout_secs {
        Some(secs) => println!("  Timeout: {}s", secs),
        None => println!("  Timeout: none"),
    }

    if config.port == 0 {
        anyhow::bail!("Invalid port: 0");
    }
    if config.upstream.max_tokens == 0 {
        anyhow::bail!("Invalid max_tokens: 0");
    }
    config.bind_addr().parse::<std::net::SocketAddr>()?;

    println!("\n✓ Configuration is valid");
    Ok(())
}
