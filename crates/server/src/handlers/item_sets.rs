use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use super::parse_key;
use crate::error::{AppError, AppResult};
use crate::filters::{PageParams, TextLookup};
use crate::models::{ItemSet, ItemSetFilter, Page};
use crate::repositories::ItemSetRepository;
use crate::state::AppState;

/// Filter parameters for the item set list.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ItemSetListQuery {
    /// Page size (default 50, max 500).
    pub limit: Option<i64>,
    /// Rows to skip.
    pub offset: Option<i64>,

    pub key: Option<String>,
    pub key__iexact: Option<String>,
    pub key__in: Option<String>,

    pub name: Option<String>,
    pub name__iexact: Option<String>,

    pub document__key: Option<String>,
    pub document__key__iexact: Option<String>,
    pub document__key__in: Option<String>,
}

impl ItemSetListQuery {
    fn into_filter(self) -> ItemSetFilter {
        ItemSetFilter {
            key: TextLookup::new(self.key, self.key__iexact, self.key__in),
            name: TextLookup::new(self.name, self.name__iexact, None),
            document_key: TextLookup::new(
                self.document__key,
                self.document__key__iexact,
                self.document__key__in,
            ),
        }
    }
}

/// List item sets.
#[utoipa::path(
    get,
    path = "/v2/itemsets",
    tag = "itemsets",
    params(ItemSetListQuery),
    responses(
        (status = 200, description = "Filtered page of item sets", body = Page<ItemSet>)
    )
)]
pub async fn list_item_sets(
    State(state): State<AppState>,
    Query(query): Query<ItemSetListQuery>,
) -> AppResult<Json<Page<ItemSet>>> {
    let page = PageParams::new(query.limit, query.offset);
    let filter = query.into_filter();

    let sets = ItemSetRepository::list(&state.db, &filter, &page).await?;
    Ok(Json(sets))
}

/// Get a particular item set.
#[utoipa::path(
    get,
    path = "/v2/itemsets/{key}",
    tag = "itemsets",
    params(("key" = String, Path, description = "Item set key")),
    responses(
        (status = 200, description = "The item set", body = ItemSet),
        (status = 404, description = "No item set with that key")
    )
)]
pub async fn get_item_set(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<ItemSet>> {
    let key = parse_key(&key, "Item set")?;

    let set = ItemSetRepository::get_by_key(&state.db, key.as_str())
        .await?
        .ok_or_else(|| AppError::not_found("Item set not found"))?;
    Ok(Json(set))
}
