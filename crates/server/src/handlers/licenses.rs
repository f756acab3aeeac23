use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use super::parse_key;
use crate::error::{AppError, AppResult};
use crate::filters::{PageParams, TextLookup};
use crate::models::{License, LicenseFilter, Page};
use crate::repositories::LicenseRepository;
use crate::state::AppState;

/// Exact-match filter parameters for the license list.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct LicenseListQuery {
    /// Page size (default 50, max 500).
    pub limit: Option<i64>,
    /// Rows to skip.
    pub offset: Option<i64>,

    pub key: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
}

/// List licenses.
#[utoipa::path(
    get,
    path = "/v2/licenses",
    tag = "licenses",
    params(LicenseListQuery),
    responses(
        (status = 200, description = "Filtered page of licenses", body = Page<License>)
    )
)]
pub async fn list_licenses(
    State(state): State<AppState>,
    Query(query): Query<LicenseListQuery>,
) -> AppResult<Json<Page<License>>> {
    let page = PageParams::new(query.limit, query.offset);
    let filter = LicenseFilter {
        key: TextLookup::exact(query.key),
        name: TextLookup::exact(query.name),
        url: TextLookup::exact(query.url),
    };

    let licenses = LicenseRepository::list(&state.db, &filter, &page).await?;
    Ok(Json(licenses))
}

/// Get a particular license.
#[utoipa::path(
    get,
    path = "/v2/licenses/{key}",
    tag = "licenses",
    params(("key" = String, Path, description = "License key")),
    responses(
        (status = 200, description = "The license", body = License),
        (status = 404, description = "No license with that key")
    )
)]
pub async fn get_license(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<License>> {
    let key = parse_key(&key, "License")?;

    let license = LicenseRepository::get_by_key(&state.db, key.as_str())
        .await?
        .ok_or_else(|| AppError::not_found("License not found"))?;
    Ok(Json(license))
}
