//! Stock Quote Bot
//!
//! Serves the quote menus over Telegram, or on the terminal with `--console`.
//!
//! # Usage
//!
//! ```bash
//! # Set up environment variables (or put them in .env)
//! export BOT_TOKEN="123456:ABC..."
//! export BOT_NAME="Quote Bot"
//! export STOCK_API_KEY="your-key"
//! export STOCK_API_URL="https://www.alphavantage.co/query"
//!
//! # Run the bot
//! cargo run --bin quote-bot -p quote-bot
//! ```

use anyhow::Context;
use clap::Parser;
use quote_bot::platforms::{ConsoleBot, TelegramBot, TelegramConfig};
use quote_bot::{AlphaVantageClient, BotConfig, QuoteBot};
use quote_utils::LogFormat;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "quote-bot")]
#[command(about = "Menu-driven stock quote bot", long_about = None)]
struct Args {
    /// Chat on the terminal instead of Telegram
    #[arg(long)]
    console: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Override the provider request timeout, in seconds
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let dotenv = quote_utils::load_dotenv();

    let format = if args.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    quote_utils::init_tracing("warn,quote_bot=info", format);

    if let Some(path) = dotenv {
        info!(path = %path.display(), "Loaded environment file");
    }

    let config = match load_config(&args) {
        Ok(config) => Arc::new(config),
        Err(err) => {
            error!(error = %err, "Invalid configuration");
            return Err(err);
        }
    };
    info!(?config, "Configuration loaded");

    let source = Arc::new(
        AlphaVantageClient::from_config(&config).context("failed to build the HTTP client")?,
    );
    let quote_bot = Arc::new(QuoteBot::new(config.clone(), source));

    if args.console {
        ConsoleBot::new(quote_bot).run().await?;
    } else {
        info!(name = %config.bot_name, "Bot is starting");
        TelegramBot::new(TelegramConfig::from_bot_config(&config), quote_bot)
            .run()
            .await;
    }

    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<BotConfig> {
    let mut config = BotConfig::from_env().context("failed to load configuration")?;
    if let Some(secs) = args.timeout_secs {
        config.request_timeout = Duration::from_secs(secs);
        config.validate().context("invalid --timeout-secs")?;
    }
    Ok(config)
}
