use axum::extract::{Path, Query, State};
use axum::Json;
use grimoire_domain::Rarity;
use serde::Deserialize;
use utoipa::IntoParams;

use super::{parse_key, parse_lang, RetrieveQuery};
use crate::error::{AppError, AppResult};
use crate::filters::{NumberLookup, PageParams, TextLookup};
use crate::models::{Item, ItemFilter, Page};
use crate::repositories::ItemRepository;
use crate::state::AppState;

/// Filter parameters for the item list, spelled `field__lookup`.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ItemListQuery {
    /// Language for localized text (default "en").
    pub lang: Option<String>,
    /// Page size (default 50, max 500).
    pub limit: Option<i64>,
    /// Rows to skip.
    pub offset: Option<i64>,

    pub key: Option<String>,
    pub key__iexact: Option<String>,
    pub key__in: Option<String>,

    pub cost: Option<f64>,
    pub cost__gt: Option<f64>,
    pub cost__gte: Option<f64>,
    pub cost__lt: Option<f64>,
    pub cost__lte: Option<f64>,
    /// Inclusive bounds, e.g. `10,100`.
    pub cost__range: Option<String>,

    pub weight: Option<f64>,
    pub weight__gt: Option<f64>,
    pub weight__gte: Option<f64>,
    pub weight__lt: Option<f64>,
    pub weight__lte: Option<f64>,
    pub weight__range: Option<String>,

    pub rarity: Option<String>,
    pub rarity__in: Option<String>,

    pub requires_attunement: Option<bool>,

    pub category: Option<String>,
    pub category__iexact: Option<String>,
    pub category__in: Option<String>,

    pub document__key: Option<String>,
    pub document__key__iexact: Option<String>,
    pub document__key__in: Option<String>,

    /// True keeps only items with a rarity, false only mundane ones.
    pub is_magic_item: Option<bool>,
}

impl ItemListQuery {
    fn into_filter(self) -> Result<ItemFilter, AppError> {
        // Rarity values go through the domain parser so unknown rungs
        // are a 400, and mixed-case input is normalized.
        let rarity = self
            .rarity
            .map(|raw| parse_rarity(&raw))
            .transpose()?;
        let rarity_in = self
            .rarity__in
            .map(|csv| {
                csv.split(',')
                    .map(parse_rarity)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(ItemFilter {
            key: TextLookup::new(self.key, self.key__iexact, self.key__in),
            cost: NumberLookup::new(
                self.cost,
                self.cost__gt,
                self.cost__gte,
                self.cost__lt,
                self.cost__lte,
                self.cost__range,
            )?,
            weight: NumberLookup::new(
                self.weight,
                self.weight__gt,
                self.weight__gte,
                self.weight__lt,
                self.weight__lte,
                self.weight__range,
            )?,
            rarity: TextLookup {
                exact: rarity,
                iexact: None,
                any: rarity_in,
            },
            requires_attunement: self.requires_attunement,
            category: TextLookup::new(self.category, self.category__iexact, self.category__in),
            document_key: TextLookup::new(
                self.document__key,
                self.document__key__iexact,
                self.document__key__in,
            ),
            is_magic_item: self.is_magic_item,
        })
    }
}

fn parse_rarity(raw: &str) -> Result<String, AppError> {
    raw.parse::<Rarity>()
        .map(|r| r.as_str().to_string())
        .map_err(|err| AppError::bad_request(err.to_string()))
}

/// List items.
#[utoipa::path(
    get,
    path = "/v2/items",
    tag = "items",
    params(ItemListQuery),
    responses(
        (status = 200, description = "Filtered page of items", body = Page<Item>),
        (status = 400, description = "Malformed filter parameter")
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ItemListQuery>,
) -> AppResult<Json<Page<Item>>> {
    let lang = parse_lang(query.lang.as_deref())?;
    let page = PageParams::new(query.limit, query.offset);
    let filter = query.into_filter()?;

    let items = ItemRepository::list(&state.db, &lang, &filter, &page).await?;
    Ok(Json(items))
}

/// Get a particular item.
#[utoipa::path(
    get,
    path = "/v2/items/{key}",
    tag = "items",
    params(
        ("key" = String, Path, description = "Item key"),
        RetrieveQuery
    ),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "No item with that key")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<RetrieveQuery>,
) -> AppResult<Json<Item>> {
    let key = parse_key(&key, "Item")?;
    let lang = parse_lang(query.lang.as_deref())?;

    let item = ItemRepository::get_by_key(&state.db, &lang, key.as_str())
        .await?
        .ok_or_else(|| AppError::not_found("Item not found"))?;
    Ok(Json(item))
}
