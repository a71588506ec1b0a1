/*!
 * Deterministic translation doubles for integration tests
 *
 * `DictionaryTranslator` answers from a fixed Quechua → Spanish glossary so
 * several different answers can go through one orchestrator.
 */

use async_trait::async_trait;
use std::collections::HashMap;

use lengua_validator::errors::ProviderError;
use lengua_validator::providers::TranslationCapability;

/// Translator backed by a small glossary
#[derive(Debug, Default)]
pub struct DictionaryTranslator {
    entries: HashMap<String, String>,
}

impl DictionaryTranslator {
    /// Glossary covering the exercises used across the suite
    pub fn quechua_glossary() -> Self {
        let mut entries = HashMap::new();
        for (quechua, spanish) in [
            ("Allinllachu", "Hola"),
            ("Tupananchiskama", "Adiós"),
            ("Sulpayki", "Gracias"),
            ("Allin p'unchaw", "Buenos días"),
            ("Imaynalla", "Cómo estás"),
        ] {
            entries.insert(quechua.to_lowercase(), spanish.to_string());
        }
        Self { entries }
    }
}

#[async_trait]
impl TranslationCapability for DictionaryTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<String, ProviderError> {
        self.entries
            .get(&text.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| ProviderError::ApiError {
                status_code: 400,
                message: format!("no translation for '{}'", text),
            })
    }
}
