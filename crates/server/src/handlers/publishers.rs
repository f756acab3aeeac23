use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use super::parse_key;
use crate::error::{AppError, AppResult};
use crate::filters::{PageParams, TextLookup};
use crate::models::{Page, Publisher, PublisherFilter};
use crate::repositories::PublisherRepository;
use crate::state::AppState;

/// Exact-match filter parameters for the publisher list.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PublisherListQuery {
    /// Page size (default 50, max 500).
    pub limit: Option<i64>,
    /// Rows to skip.
    pub offset: Option<i64>,

    pub key: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
}

/// List publishers.
#[utoipa::path(
    get,
    path = "/v2/publishers",
    tag = "publishers",
    params(PublisherListQuery),
    responses(
        (status = 200, description = "Filtered page of publishers", body = Page<Publisher>)
    )
)]
pub async fn list_publishers(
    State(state): State<AppState>,
    Query(query): Query<PublisherListQuery>,
) -> AppResult<Json<Page<Publisher>>> {
    let page = PageParams::new(query.limit, query.offset);
    let filter = PublisherFilter {
        key: TextLookup::exact(query.key),
        name: TextLookup::exact(query.name),
        url: TextLookup::exact(query.url),
    };

    let publishers = PublisherRepository::list(&state.db, &filter, &page).await?;
    Ok(Json(publishers))
}

/// Get a particular publisher.
#[utoipa::path(
    get,
    path = "/v2/publishers/{key}",
    tag = "publishers",
    params(("key" = String, Path, description = "Publisher key")),
    responses(
        (status = 200, description = "The publisher", body = Publisher),
        (status = 404, description = "No publisher with that key")
    )
)]
pub async fn get_publisher(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Publisher>> {
    let key = parse_key(&key, "Publisher")?;

    let publisher = PublisherRepository::get_by_key(&state.db, key.as_str())
        .await?
        .ok_or_else(|| AppError::not_found("Publisher not found"))?;
    Ok(Json(publisher))
}
