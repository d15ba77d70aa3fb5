use std::time::Duration;

use async_trait::async_trait;

use crate::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

const SUPPORTED: &[&str] = &["en", "vi", "fr", "de", "es", "ja", "ko", "zh-CN"];

/// Client for Google's public web translation endpoint
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_url })
    }

    fn is_supported(code: &str) -> bool {
        SUPPORTED.iter().any(|c| c.eq_ignore_ascii_case(code))
    }
}

/// Join the translated segments of a `translate_a/single` response
pub(crate) fn parse_response(json: &serde_json::Value) -> Result<String, TranslateError> {
    let segments = json
        .get(0)
        .and_then(|s| s.as_array())
        .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        return Err(TranslateError::ApiError(
            "Empty translation in response".to_string(),
        ));
    }

    Ok(text)
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TranslateError::EmptyText);
        }

        if !Self::is_supported(&from) || !Self::is_supported(&to) {
            return Err(TranslateError::UnsupportedLanguagePair { from, to });
        }

        let params = [
            ("client", "gtx"),
            ("sl", from.as_str()),
            ("tl", to.as_str()),
            ("dt", "t"),
            ("q", text),
        ];

        tracing::debug!("Translating {} chars {} -> {}", text.len(), from, to);

        let response = self.client.get(&self.api_url).query(&params).send().await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        Ok(Translation {
            original: text.to_string(),
            text: parse_response(&json)?,
            from,
            to,
            provider: "google".to_string(),
        })
    }

    fn supported_languages(&self) -> Vec<(LanguageCode, LanguageCode)> {
        SUPPORTED
            .iter()
            .flat_map(|from| {
                SUPPORTED
                    .iter()
                    .filter(move |to| *to != from)
                    .map(move |to| (from.to_string(), to.to_string()))
            })
            .collect()
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}
