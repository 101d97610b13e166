use kanal::AsyncReceiver;
use tolk_core::types::{AppEvent, ChannelKind};

/// Sole consumer of `app_to_ui`. Every chat-line render happens on this
/// one task, standing in for the host client's UI thread.
pub async fn ui_loop(app_to_ui_rx: AsyncReceiver<AppEvent>) -> anyhow::Result<()> {
    while let Ok(event) = app_to_ui_rx.recv().await {
        if let AppEvent::RenderChatLine {
            channel,
            sender,
            text,
            recipient,
        } = event
        {
            render_chat_line(channel, &sender, &text, recipient.as_deref());
        }
    }

    Ok(())
}

fn render_chat_line(channel: ChannelKind, sender: &str, text: &str, recipient: Option<&str>) {
    tracing::debug!(?channel, sender, recipient, "render chat line");
    println!("[{channel:?}] {sender}: {text}");
}
