use futures_util::StreamExt;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

/// Forward every text frame from the chat feed socket to the callback.
/// The reader runs detached; this returns once the connection is up.
/// The feed is one-way, nothing is ever written back.
pub async fn start_ws_listener<F>(url: &str, mut on_text: F) -> Result<(), anyhow::Error>
where
    F: FnMut(String) + Send + 'static,
{
    let (ws_stream, _) = connect_async(url).await?;
    let (_, mut read) = ws_stream.split();

    tokio::spawn(async move {
        while let Some(msg) = read.next().await {
            match msg {
                Ok(Message::Text(text)) => on_text(text.to_string()),
                Ok(Message::Close(_)) => break,
                // pings are answered by tungstenite, binary frames are
                // not part of the feed protocol
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("chat feed read error: {}", e);
                    break;
                }
            }
        }
        tracing::info!("chat feed disconnected");
    });

    Ok(())
}
