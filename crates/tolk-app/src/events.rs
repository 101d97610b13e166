use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tolk_core::types::AppEvent;

use crate::state::AppState;

pub mod chat_message;
pub mod config_update;

use chat_message::handle_chat_message;
use config_update::handle_config_update;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("event loop started, waiting for chat events");

    loop {
        let event = ui_to_app_rx.recv().await?;
        handle_events(state.clone(), &app_to_ui_tx, event).await?;
    }
}

async fn handle_events(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::ChatMessage(message) => {
            handle_chat_message(state, message, app_to_ui_tx).await?;
        }
        AppEvent::ConfigUpdate { group, key, value } => {
            handle_config_update(state, &group, &key, &value).await?;
        }
        AppEvent::RenderChatLine { .. } => {
            // UI-only event, ignore in backend
        }
    }

    Ok(())
}
