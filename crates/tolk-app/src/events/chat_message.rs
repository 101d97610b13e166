use std::sync::Arc;

use kanal::AsyncSender;
use tolk_core::filter;
use tolk_core::types::{AppEvent, ChatEvent};
use tolk_translator::Translator;
use uuid::Uuid;

use crate::state::AppState;

/// Run one chat event through the translation pipeline: eligibility
/// filter, language detection, allow-list match, dispatch.
pub async fn handle_chat_message(
    state: Arc<AppState>,
    message: ChatEvent,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let engines = state.engines().await;

    // Translation is off entirely while no API key is configured.
    let Some(translator) = engines.translator.clone() else {
        return Ok(());
    };

    if !filter::is_eligible(&message) {
        return Ok(());
    }

    let guesses = engines.classifier.detect(message.text.trim());
    let Some(top) = guesses.first() else {
        tracing::debug!("no confident language for message from {}", message.sender);
        return Ok(());
    };

    let (target_lang, source_langs) = {
        let config = state.config.read().await;
        (
            config.translator.target_lang.clone(),
            config.translator.source_language_list(),
        )
    };

    // Only the top guess is compared, so the allow-list matches at most
    // once per message (duplicate entries dispatch duplicate tasks).
    for language in &source_langs {
        if *language == top.code {
            dispatch_translation(
                translator.clone(),
                message.clone(),
                top.code.clone(),
                target_lang.clone(),
                app_to_ui_tx.clone(),
            );
        }
    }

    Ok(())
}

/// Translate off the event loop and re-inject the result as a render
/// event. Render order across tasks is completion order, not arrival
/// order. A failed call is logged and the original stays untranslated.
fn dispatch_translation(
    translator: Arc<dyn Translator>,
    message: ChatEvent,
    source_lang: String,
    target_lang: String,
    app_to_ui_tx: AsyncSender<AppEvent>,
) {
    let task_id = Uuid::new_v4();
    tracing::debug!(%task_id, %source_lang, "dispatching translation");

    tokio::spawn(async move {
        match translator
            .translate(&message.text, source_lang, target_lang)
            .await
        {
            Ok(translation) => {
                let _ = app_to_ui_tx
                    .send(AppEvent::RenderChatLine {
                        channel: message.channel,
                        sender: format!("{}{}", filter::SENDER_PREFIX, message.sender),
                        text: translation.text,
                        recipient: message.recipient,
                    })
                    .await;
            }
            Err(e) => {
                tracing::warn!(%task_id, "translation failed: {e}");
            }
        }
    });
}
