//! Translation catalog endpoints (public).

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::LanguageTexts;

use crate::api::AppState;

pub fn translation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(all_translations))
        .route("/:lang", get(language_translations))
}

/// Whole catalog: key -> language -> text
#[utoipa::path(
    get,
    path = "/translations",
    tag = "Translations",
    responses(
        (status = 200, description = "Translation catalog"),
        (status = 404, description = "Translations file not found")
    )
)]
pub async fn all_translations(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, LanguageTexts>>> {
    Ok(Json(state.translations.catalog().await?.into_inner()))
}

/// Texts of one language: key -> text. Keys without that language are omitted.
#[utoipa::path(
    get,
    path = "/translations/{lang}",
    tag = "Translations",
    params(("lang" = String, Path, description = "Language code", example = "es")),
    responses(
        (status = 200, description = "Texts for the language"),
        (status = 404, description = "Translations file not found")
    )
)]
pub async fn language_translations(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> AppResult<Json<BTreeMap<String, String>>> {
    Ok(Json(state.translations.language(&lang).await?))
}
