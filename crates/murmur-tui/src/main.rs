//! murmur entry point.
//!
//! # Usage
//!
//! ```bash
//! # Connect to the default local server
//! murmur
//!
//! # Connect elsewhere with a name and role, logging to a file
//! murmur --url ws://chat.example:5173/ws --name Alice --role mod --log-file murmur.log
//! ```

use std::{fs::File, path::PathBuf, sync::Mutex, time::Duration};

use clap::Parser;
use murmur_app::{App, UserAttributes};
use murmur_client::TransportConfig;
use murmur_tui::{Runtime, TerminalDriver};
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Capacity of the merged terminal/network event channel.
const EVENT_BUFFER: usize = 256;

/// murmur terminal chat client
#[derive(Parser, Debug)]
#[command(name = "murmur")]
#[command(about = "Terminal client for murmur chat")]
#[command(version)]
struct Args {
    /// WebSocket URL of the chat server
    #[arg(short, long, default_value = "ws://localhost:5173/ws")]
    url: String,

    /// Initial display name (change later with /nick)
    #[arg(short, long, default_value = UserAttributes::DEFAULT_USERNAME)]
    name: String,

    /// Initial role badge (change later with /role)
    #[arg(short, long)]
    role: Option<String>,

    /// Seconds to wait for the server before giving up
    #[arg(long, default_value_t = 10)]
    connect_timeout: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Append logs to this file. Logs are discarded when unset since the
    /// terminal is taken over by the UI.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(args: &Args) -> std::io::Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let file = File::options().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    tracing::info!("murmur starting");
    tracing::info!("Connecting to {}", args.url);

    let (events_tx, events_rx) = mpsc::channel(EVENT_BUFFER);
    let config = TransportConfig { connect_timeout: Duration::from_secs(args.connect_timeout) };
    let connection = murmur_client::connect_with_config(&args.url, events_tx.clone(), config).await?;

    let mut user = UserAttributes::random(&mut rand::rng());
    user.username = args.name;
    if let Some(role) = args.role {
        user.role = role.to_uppercase();
    }

    let driver = TerminalDriver::new(connection, events_tx, events_rx)?;
    let mut runtime = Runtime::new(driver, App::new(user));
    runtime.run().await?;

    tracing::info!("murmur exiting");
    Ok(())
}
