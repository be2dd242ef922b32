//! Translation catalog served to the UI.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::Translations;

#[async_trait]
pub trait TranslationService: Send + Sync {
    /// The whole catalog
    async fn catalog(&self) -> AppResult<Translations>;

    /// Texts of one language, keyed by message key
    async fn language(&self, lang: &str) -> AppResult<BTreeMap<String, String>>;
}

/// Reads the catalog file on every call, so edits show up without a restart.
pub struct TranslationStore {
    path: PathBuf,
}

impl TranslationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> AppResult<Translations> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => {
                    tracing::warn!(path = %self.path.display(), "Translations file not found");
                    AppError::NotFound
                }
                _ => AppError::internal(format!(
                    "Reading {}: {}",
                    self.path.display(),
                    e
                )),
            })?;

        Ok(Translations::from_json(&raw)?)
    }
}

#[async_trait]
impl TranslationService for TranslationStore {
    async fn catalog(&self) -> AppResult<Translations> {
        self.load().await
    }

    async fn language(&self, lang: &str) -> AppResult<BTreeMap<String, String>> {
        Ok(self.load().await?.for_language(lang))
    }
}
