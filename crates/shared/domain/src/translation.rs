//! UI translation catalog.
//!
//! The catalog maps a message key to its text in each language:
//!
//! ```json
//! { "client.created": { "en": "Client created", "es": "Cliente creado" } }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Texts of one key, indexed by language code.
pub type LanguageTexts = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations(BTreeMap<String, LanguageTexts>);

impl Translations {
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| DomainError::internal(format!("Malformed translations catalog: {}", e)))
    }

    /// Every key that has a text in `lang`. Keys without one are left out.
    pub fn for_language(&self, lang: &str) -> BTreeMap<String, String> {
        self.0
            .iter()
            .filter_map(|(key, texts)| texts.get(lang).map(|text| (key.clone(), text.clone())))
            .collect()
    }

    pub fn into_inner(self) -> BTreeMap<String, LanguageTexts> {
        self.0
    }
}
