//! Paste Server
//!
//! Pastes text into whatever application has focus, on behalf of browser
//! clients that cannot drive OS input themselves.

use anyhow::Result;
use clap::Parser;
use paste_server::server::{self, AppState};
use paste_server::utils::config::DEFAULT_PORT;
use paste_server::{HostOs, PasteActor, ServerConfig, SystemDesktop};
use tracing::{info, Level};

#[derive(Parser)]
#[command(version, about = "Local HTTP server that pastes text into the focused application")]
struct Args {
    /// Port to listen on (loopback only)
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = ServerConfig::with_port(args.port);

    // Fail fast if the port is taken, before announcing anything
    let listener = server::bind(config.socket_addr()).await?;

    let paster = PasteActor::spawn(SystemDesktop::new, HostOs::current())?;
    let state = AppState::new(paster.clone(), &config.service_name);

    print_banner(config.port);

    server::serve(listener, state, shutdown_signal()).await?;

    paster.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}

fn print_banner(port: u16) {
    let url = format!("http://localhost:{}", port);
    let lines = [
        "Paste Server".to_string(),
        String::new(),
        format!("Running on: {}", url),
        String::new(),
        "Endpoints:".to_string(),
        "  POST /paste  - Paste text (body: {\"text\": \"...\"})".to_string(),
        "  GET  /health - Health check".to_string(),
        String::new(),
        "Press Ctrl+C to stop".to_string(),
    ];

    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 4;
    println!("╔{}╗", "═".repeat(width));
    for line in &lines {
        println!("║  {:<w$}║", line, w = width - 2);
    }
    println!("╚{}╝", "═".repeat(width));
}
