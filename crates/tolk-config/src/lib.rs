use std::env;

use serde::{Deserialize, Serialize};

use self::translator::TranslatorConfig;

pub mod translator;

/// Settings group the orchestrator listens to; change notifications for
/// any other group are ignored.
pub const CONFIG_GROUP: &str = "autotranslator";

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub translator: TranslatorConfig,

    /// Listen to a websocket chat feed, if false read frames from stdin
    pub listen_to_ws: bool,
    /// WebSocket URL to connect to
    pub ws_url: String,
}

impl Config {
    pub fn new() -> Self {
        let listen_to_ws = env::var("TOLK_LISTEN_WS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        let ws_url =
            env::var("TOLK_WS_URL").unwrap_or_else(|_| "ws://localhost:8080".to_string());

        let mut translator = TranslatorConfig::default();
        if let Ok(key) = env::var("TOLK_API_KEY") {
            translator.api_key = key;
        }

        Config {
            translator,
            listen_to_ws,
            ws_url,
        }
    }
}
