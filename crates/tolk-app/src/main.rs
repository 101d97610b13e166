use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod state;
pub mod ui;


use tolk_config::Config;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "tolk", about = "In-client chat auto-translation")]
struct Args {
    /// Connect to a websocket chat feed instead of reading stdin
    #[arg(long)]
    ws_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(atty::is(atty::Stream::Stdout))
        .init();

    let args = Args::parse();

    let mut config = Config::new();
    if let Some(ws_url) = args.ws_url {
        config.ws_url = ws_url;
        config.listen_to_ws = true;
    }

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);

    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::warn!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    Ok(())
}
