use std::sync::Arc;

use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;
use tolk_core::types::{AppEvent, FeedMessage};

use crate::state::AppState;

/// Watcher for the websocket or stdin chat feed
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (listen_to_ws, ws_url) = {
        let config = state.config.read().await;
        (config.listen_to_ws, config.ws_url.clone())
    };

    if listen_to_ws {
        tracing::info!("starting websocket chat feed on {}", ws_url);

        tolk_io::ws::start_ws_listener(&ws_url, move |text| {
            forward_frame(&event_tx, text);
        })
        .await?;

        cancel.cancelled().await;
        tracing::info!("websocket chat feed stopping");
    } else {
        tracing::info!("reading chat feed from stdin");

        let tx = event_tx.clone();
        tokio::select! {
            result = tolk_io::stdin::watch_stdin(move |text| {
                forward_frame(&tx, text);
            }) => {
                if let Err(e) = result {
                    tracing::error!("stdin feed error: {}", e);
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("stdin feed stopping");
            }
        }
    }

    Ok(())
}

/// Decode one feed frame and hand it to the event loop.
fn forward_frame(event_tx: &AsyncSender<AppEvent>, text: String) {
    let event = match serde_json::from_str::<FeedMessage>(&text) {
        Ok(FeedMessage::Chat(message)) => AppEvent::ChatMessage(message),
        Ok(FeedMessage::Config { group, key, value }) => {
            AppEvent::ConfigUpdate { group, key, value }
        }
        Err(e) => {
            tracing::debug!("dropping undecodable feed frame: {}", e);
            return;
        }
    };

    let tx = event_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = tx.send(event).await {
            tracing::error!("failed to send feed event to app: {}", e);
        }
    });
}
