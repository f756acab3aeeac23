pub mod armor;
pub mod documents;
pub mod item_sets;
pub mod items;
pub mod licenses;
pub mod publishers;
pub mod rulesets;
pub mod weapons;

use axum::Json;
use grimoire_domain::{ContentKey, LanguageCode};
use serde::Deserialize;
use serde_json::{json, Value};
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};

/// Query parameters accepted by every localized retrieve endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct RetrieveQuery {
    /// Language for localized text (default "en").
    pub lang: Option<String>,
}

/// Resolve the requested language, defaulting to English.
pub(crate) fn parse_lang(raw: Option<&str>) -> Result<LanguageCode, AppError> {
    match raw {
        None => Ok(LanguageCode::english()),
        Some(raw) => LanguageCode::new(raw).map_err(|err| AppError::bad_request(err.to_string())),
    }
}

/// Validate a path key. A string that cannot be a slug cannot name any
/// resource, so the failure is a 404 rather than a 400.
pub(crate) fn parse_key(raw: &str, resource: &str) -> Result<ContentKey, AppError> {
    ContentKey::new(raw).map_err(|_| AppError::not_found(format!("{} not found", resource)))
}

/// Liveness probe.
pub async fn health() -> AppResult<Json<Value>> {
    Ok(Json(json!({ "status": "ok" })))
}
