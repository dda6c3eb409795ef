//! Invoke an Ad Exchange Buyer tool from the command line.
//!
//! Usage:
//!   cargo run --example call -- list
//!   API_KEY=... cargo run --example call -- call get_accounts
//!   BEARER_TOKEN=ya29... cargo run --example call -- call get_creatives --args '{"maxResults": 10}'
//!   cargo run --example call -- --base-url http://localhost:8080 call get_accounts_id --args '{"id": 123}'
//!
//! Ctrl-C cancels an in-flight call.

use adexchange_buyer_tools::{ApiConfig, ToolRegistry};
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(name = "call", about = "Invoke Ad Exchange Buyer API tools")]
struct Cli {
    /// API base URL (overrides API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every tool definition as JSON
    List,
    /// Invoke one tool
    Call {
        /// Tool name, e.g. get_creatives
        name: String,

        /// Arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

fn build_config(cli: &Cli) -> ApiConfig {
    let config = match cli.base_url {
        Some(ref url) => ApiConfig::new(url).map(|c| {
            c.with_api_key(std::env::var("API_KEY").unwrap_or_default())
                .with_bearer_token(std::env::var("BEARER_TOKEN").unwrap_or_default())
        }),
        None => ApiConfig::from_env(),
    };
    config.unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let registry = ToolRegistry::for_api(build_config(&cli));

    match cli.command {
        Command::List => {
            let schemas = serde_json::Value::Array(registry.schemas());
            match serde_json::to_string_pretty(&schemas) {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Call { name, args } => {
            let input: serde_json::Value = serde_json::from_str(&args).unwrap_or_else(|e| {
                eprintln!("error: --args is not valid JSON: {e}");
                std::process::exit(1);
            });

            let cancel = CancellationToken::new();
            let on_interrupt = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    on_interrupt.cancel();
                }
            });

            match registry.execute(&name, &input, &cancel).await {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    eprintln!("\x1b[1;31merror:\x1b[0m {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
