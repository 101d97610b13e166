use serde::{Deserialize, Serialize};

fn default_target_lang() -> String {
    "en-GB".to_string()
}

fn default_source_langs() -> String {
    "fr,de,es,it".to_string()
}

fn default_min_probability() -> f64 {
    0.90
}

fn default_api_url() -> String {
    "https://api-free.deepl.com/v2/translate".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Provider API key; empty disables translation entirely.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    /// ISO 639-1 codes, comma separated.
    #[serde(default = "default_source_langs")]
    pub source_langs: String,
    /// Minimum detector confidence to accept a classification.
    #[serde(default = "default_min_probability")]
    pub min_probability: f64,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            target_lang: default_target_lang(),
            source_langs: default_source_langs(),
            min_probability: default_min_probability(),
            api_url: default_api_url(),
        }
    }
}

impl TranslatorConfig {
    /// Allow-list of source languages, in configured order.
    /// Malformed entries just fall out; this never fails.
    pub fn source_language_list(&self) -> Vec<String> {
        self.source_langs
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Apply one persisted option by its config key. Returns false when
    /// the key is unknown or the value does not parse.
    pub fn apply(&mut self, key: &str, value: &str) -> bool {
        match key {
            "apiKey" => self.api_key = value.to_string(),
            "targetLanguage" => self.target_lang = value.to_string(),
            "sourceLanguage" | "sourceLanguages" => self.source_langs = value.to_string(),
            "probability" => match value.parse() {
                Ok(p) => self.min_probability = p,
                Err(_) => return false,
            },
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_settings_table() {
        let config = TranslatorConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.target_lang, "en-GB");
        assert_eq!(config.source_langs, "fr,de,es,it");
        assert_eq!(config.min_probability, 0.90);
    }

    #[test]
    fn source_list_is_trimmed_and_ordered() {
        let mut config = TranslatorConfig::default();
        config.source_langs = " fr , de,es ,  it ".to_string();
        assert_eq!(config.source_language_list(), ["fr", "de", "es", "it"]);
    }

    #[test]
    fn source_list_drops_empty_entries() {
        let mut config = TranslatorConfig::default();
        config.source_langs = "fr,,de, ,".to_string();
        assert_eq!(config.source_language_list(), ["fr", "de"]);

        config.source_langs = "   ".to_string();
        assert!(config.source_language_list().is_empty());
    }

    #[test]
    fn apply_updates_each_known_key() {
        let mut config = TranslatorConfig::default();
        assert!(config.apply("apiKey", "secret"));
        assert!(config.apply("targetLanguage", "de"));
        assert!(config.apply("sourceLanguage", "fr,nl"));
        assert!(config.apply("probability", "0.5"));
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.target_lang, "de");
        assert_eq!(config.source_langs, "fr,nl");
        assert_eq!(config.min_probability, 0.5);
    }

    #[test]
    fn apply_accepts_both_source_key_spellings() {
        let mut config = TranslatorConfig::default();
        assert!(config.apply("sourceLanguages", "pl"));
        assert_eq!(config.source_langs, "pl");
    }

    #[test]
    fn apply_rejects_unknown_keys_and_bad_floats() {
        let mut config = TranslatorConfig::default();
        assert!(!config.apply("volume", "11"));
        assert!(!config.apply("probability", "not-a-number"));
        assert_eq!(config.min_probability, 0.90);
    }
}
