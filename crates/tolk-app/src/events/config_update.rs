use std::sync::Arc;

use tolk_config::CONFIG_GROUP;
use tolk_core::detect::LanguageClassifier;

use crate::state::{AppState, build_translator};

/// React to a persisted-settings change. Only the credential and the
/// probability floor force an engine rebuild; language selections are
/// read at dispatch time.
pub async fn handle_config_update(
    state: Arc<AppState>,
    group: &str,
    key: &str,
    value: &str,
) -> anyhow::Result<()> {
    if group != CONFIG_GROUP {
        return Ok(());
    }

    {
        let mut config = state.config.write().await;
        if !config.translator.apply(key, value) {
            tracing::warn!("ignoring config update for {group}.{key}");
            return Ok(());
        }
    }

    match key {
        "apiKey" => {
            let translator = {
                let config = state.config.read().await;
                build_translator(&config.translator)
            };

            let engines = state.engines().await;
            state
                .install_engines(engines.with_translator(translator))
                .await;
            tracing::info!("translator rebuilt after credential change");
        }
        "probability" => {
            let floor = {
                let config = state.config.read().await;
                config.translator.min_probability
            };

            let engines = state.engines().await;
            state
                .install_engines(engines.with_classifier(LanguageClassifier::new(floor)))
                .await;
            tracing::info!(floor, "classifier rebuilt after probability change");
        }
        _ => {}
    }

    Ok(())
}
