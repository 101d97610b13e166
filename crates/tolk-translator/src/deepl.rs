use async_trait::async_trait;

use crate::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

/// DeepL `/v2/translate` client. One attempt per call, no retry and no
/// request timeout; a failed call is terminal for that message only.
#[derive(Clone)]
pub struct DeepLTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl DeepLTranslator {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
        }
    }
}

/// Pull the first translated text out of a DeepL response body.
fn extract_text(json: &serde_json::Value) -> Result<String, TranslateError> {
    json["translations"]
        .get(0)
        .and_then(|t| t["text"].as_str())
        .map(str::to_string)
        .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))
}

#[async_trait]
impl Translator for DeepLTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let params = [
            ("text", text),
            ("source_lang", &from.to_uppercase()),
            ("target_lang", &to.to_uppercase()),
        ];

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(&params)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if response.status() == 403 {
            return Err(TranslateError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslateError::ApiError(format!("Failed to parse response: {}", e)))?;

        let translated_text = extract_text(&json)?;

        Ok(Translation {
            text: translated_text,
            from,
            to,
            provider: "deepl".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "DeepL".to_string(),
            requires_api_key: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_translation() {
        let body = serde_json::json!({
            "translations": [
                { "detected_source_language": "FR", "text": "Hello, how are you?" }
            ]
        });
        assert_eq!(extract_text(&body).unwrap(), "Hello, how are you?");
    }

    #[test]
    fn missing_translations_is_an_api_error() {
        let body = serde_json::json!({ "message": "quota exceeded" });
        assert!(matches!(
            extract_text(&body),
            Err(TranslateError::ApiError(_))
        ));
    }

    #[test]
    fn empty_translations_array_is_an_api_error() {
        let body = serde_json::json!({ "translations": [] });
        assert!(matches!(
            extract_text(&body),
            Err(TranslateError::ApiError(_))
        ));
    }
}
