mod config;
mod routes;
mod server;

use crate::config::Config;
use crate::server::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args() {
        return Ok(());
    }

    better_panic::install();

    // Load .env file if exists
    dotenv::dotenv().ok();

    // Also forwards `log` records from the handlers and the riot-api crate.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = AppState::from_config(&config)?;

    server::run(&config, state).await
}

fn handle_cli_args() -> bool {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return false;
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            true
        }
        "-V" | "--version" => {
            println!("lol-edge {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "lol-edge - League of Legends profile aggregation backend

Usage:
  lol-edge
  lol-edge --help
  lol-edge --version

Environment (also read from .env):
  RIOT_API_KEY               Riot Games API key (required)
  PORT                       Listen port (default 5000)
  LOLEDGE_FALLBACK_MATCHES   Path to a JSON array of sample matches (default: bundled sample)
  LOLEDGE_RIOT_HOST          Riot host template, {route} is substituted (default https://{route}.api.riotgames.com)
  RUST_LOG                   Log filter (default info)"
}
