use clap::Parser;
use tracing_subscriber::EnvFilter;

use parley::core::config::GatewayConfig;
use parley::gateway::{self, GatewayState};

#[derive(Parser)]
#[command(name = "parley")]
#[command(about = "A minimal chat gateway that proxies conversation logs to an LLM API")]
#[command(long_about = "Parley serves a small HTTP gateway that accepts a JSON array of \
{role, content} chat messages, injects a default system directive when absent, and \
forwards the log to an upstream chat-completion API.\n\n\
Environment Variables:\n\
  XAI_APIKEY      Upstream API credential (required for completions)\n\
  XAI_ENDPOINT    Upstream endpoint (optional, defaults to \
https://api.x.ai/v1/chat/completions)\n\n\
Logging verbosity follows RUST_LOG (default: info).")]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: std::net::SocketAddr,

    /// Model identifier sent upstream
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = GatewayConfig::from_env();
    if let Some(model) = args.model {
        config = config.with_model(model);
    }
    if config.api_key.is_none() {
        tracing::warn!("XAI_APIKEY is not set; completion requests will fail until it is");
    }

    // No total request timeout: a hung upstream call stalls only its own
    // conversation, matching the serialized-submission contract.
    let client = reqwest::Client::new();
    let app = gateway::router(GatewayState::new(config, client));

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!("gateway listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
