use std::sync::Arc;

use tokio::sync::RwLock;
use tolk_config::Config;
use tolk_config::translator::TranslatorConfig;
use tolk_core::detect::LanguageClassifier;
use tolk_translator::{DeepLTranslator, Translator};

/// Classifier/translator pair, swapped as one immutable snapshot on
/// config change. In-flight tasks keep the snapshot they started with.
pub struct Engines {
    pub classifier: Arc<LanguageClassifier>,
    pub translator: Option<Arc<dyn Translator>>,
}

impl Engines {
    pub fn from_config(config: &Config) -> Self {
        Self {
            classifier: Arc::new(LanguageClassifier::new(config.translator.min_probability)),
            translator: build_translator(&config.translator),
        }
    }

    /// New snapshot with a rebuilt translator, classifier carried over.
    pub fn with_translator(&self, translator: Option<Arc<dyn Translator>>) -> Self {
        Self {
            classifier: self.classifier.clone(),
            translator,
        }
    }

    /// New snapshot with a rebuilt classifier, translator carried over.
    pub fn with_classifier(&self, classifier: LanguageClassifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
            translator: self.translator.clone(),
        }
    }
}

/// An empty API key means the whole feature is off.
pub fn build_translator(config: &TranslatorConfig) -> Option<Arc<dyn Translator>> {
    if config.api_key.is_empty() {
        return None;
    }

    let translator = DeepLTranslator::new(config.api_key.clone(), config.api_url.clone());
    tracing::debug!("translation provider: {}", translator.metadata().name);

    Some(Arc::new(translator))
}

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    engines: RwLock<Arc<Engines>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let engines = Engines::from_config(&config);

        Self {
            config: Arc::new(RwLock::new(config)),
            engines: RwLock::new(Arc::new(engines)),
        }
    }

    /// Consistent snapshot for the caller, never a half-rebuilt pair.
    pub async fn engines(&self) -> Arc<Engines> {
        self.engines.read().await.clone()
    }

    pub async fn install_engines(&self, engines: Engines) {
        *self.engines.write().await = Arc::new(engines);
    }
}
