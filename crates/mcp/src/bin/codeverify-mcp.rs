// Standalone MCP server binary

use anyhow::Result;
use clap::{Parser, Subcommand};
use codeverify_client::config::DEFAULT_API_URL;
use codeverify_client::HttpTransport;
use codeverify_mcp::config::{BackendSettings, FileConfig};
use codeverify_mcp::tools::ToolRegistry;
use codeverify_mcp::{Dispatcher, McpServer};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "codeverify-mcp")]
#[command(about = "MCP server exposing codeverify tools to agent clients", long_about = None)]
struct Args {
    /// Backend base URL
    #[arg(long, env = "CODEVERIFY_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Bearer credential for the backend (empty: unauthenticated)
    #[arg(long, env = "CODEVERIFY_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    /// Timeout for each backend call, in seconds
    #[arg(long, env = "CODEVERIFY_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Path to configuration file
    #[arg(short, long, env = "CODEVERIFY_CONFIG", default_value = "codeverify.toml")]
    config: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long, env = "CODEVERIFY_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve MCP over stdin/stdout (default)
    Serve,
    /// Print the tool catalog as JSON and exit
    Tools,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_json);

    let registry = Arc::new(ToolRegistry::with_catalog());

    if let Some(Command::Tools) = args.command {
        println!("{}", serde_json::to_string_pretty(&registry.list_definitions())?);
        return Ok(());
    }

    let file = FileConfig::load(&args.config)?;
    let config = BackendSettings {
        api_url: args.api_url,
        api_key: args.api_key,
        timeout_secs: args.timeout_secs,
    }
    .into_backend_config(file)?;

    tracing::info!(
        backend = %config.base_url,
        authenticated = config.api_key.is_some(),
        timeout_secs = config.timeout.as_secs(),
        "codeverify MCP server starting"
    );

    let transport = HttpTransport::new(Arc::new(config))?;
    let server = McpServer::new(Dispatcher::new(registry, Arc::new(transport)));
    server.start().await?;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    // stdout carries the protocol, so logs go to stderr
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
