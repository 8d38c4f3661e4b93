//! # Faqbot — FAQ chatbot gateway
//!
//! Answers free-text questions from a curated Notion knowledge base and
//! records contact leads into a second database.
//!
//! Usage:
//!   faqbot                        # Start the gateway (default port 3000)
//!   faqbot --port 8080            # Custom port
//!   faqbot --config ./faqbot.toml # Explicit config file

use anyhow::Result;
use clap::Parser;
use faqbot_core::FaqbotConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "faqbot",
    version,
    about = "💬 Faqbot — FAQ chatbot gateway backed by Notion"
)]
struct Cli {
    /// Path to the config file (defaults to ~/.faqbot/config.toml)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Bind host override
    #[arg(long)]
    host: Option<String>,

    /// Bind port override
    #[arg(short, long)]
    port: Option<u16>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug,hyper=info"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let mut config = match &cli.config {
        Some(path) => {
            let mut config = FaqbotConfig::load_from(path)?;
            config.apply_env_overrides();
            config
        }
        None => FaqbotConfig::load()?,
    };

    if let Some(host) = cli.host {
        config.gateway.host = host;
    }
    if let Some(port) = cli.port {
        config.gateway.port = port;
    }

    if config.notion.token.is_empty() {
        tracing::warn!("No Notion token configured; set NOTION_TOKEN or [notion].token");
    }

    faqbot_gateway::start(&config).await
}
