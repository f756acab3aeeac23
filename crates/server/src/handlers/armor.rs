use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use super::{parse_key, parse_lang, RetrieveQuery};
use crate::error::{AppError, AppResult};
use crate::filters::{NumberLookup, PageParams, TextLookup};
use crate::models::{Armor, ArmorFilter, Page};
use crate::repositories::ArmorRepository;
use crate::state::AppState;

/// Filter parameters for the armor list.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ArmorListQuery {
    /// Language for localized text (default "en").
    pub lang: Option<String>,
    /// Page size (default 50, max 500).
    pub limit: Option<i64>,
    /// Rows to skip.
    pub offset: Option<i64>,

    pub key: Option<String>,
    pub key__iexact: Option<String>,
    pub key__in: Option<String>,

    pub document__key: Option<String>,
    pub document__key__iexact: Option<String>,
    pub document__key__in: Option<String>,

    pub grants_stealth_disadvantage: Option<bool>,

    pub strength_score_required: Option<i64>,
    pub strength_score_required__gt: Option<i64>,
    pub strength_score_required__gte: Option<i64>,
    pub strength_score_required__lt: Option<i64>,
    pub strength_score_required__lte: Option<i64>,

    pub ac_base: Option<i64>,
    pub ac_base__gt: Option<i64>,
    pub ac_base__gte: Option<i64>,
    pub ac_base__lt: Option<i64>,
    pub ac_base__lte: Option<i64>,

    pub ac_add_dexmod: Option<bool>,
    pub ac_cap_dexmod: Option<i64>,
}

impl ArmorListQuery {
    fn into_filter(self) -> ArmorFilter {
        ArmorFilter {
            key: TextLookup::new(self.key, self.key__iexact, self.key__in),
            document_key: TextLookup::new(
                self.document__key,
                self.document__key__iexact,
                self.document__key__in,
            ),
            grants_stealth_disadvantage: self.grants_stealth_disadvantage,
            strength_score_required: NumberLookup {
                exact: self.strength_score_required,
                gt: self.strength_score_required__gt,
                gte: self.strength_score_required__gte,
                lt: self.strength_score_required__lt,
                lte: self.strength_score_required__lte,
                range: None,
            },
            ac_base: NumberLookup {
                exact: self.ac_base,
                gt: self.ac_base__gt,
                gte: self.ac_base__gte,
                lt: self.ac_base__lt,
                lte: self.ac_base__lte,
                range: None,
            },
            ac_add_dexmod: self.ac_add_dexmod,
            ac_cap_dexmod: self.ac_cap_dexmod,
        }
    }
}

/// List armor.
#[utoipa::path(
    get,
    path = "/v2/armor",
    tag = "armor",
    params(ArmorListQuery),
    responses(
        (status = 200, description = "Filtered page of armor", body = Page<Armor>)
    )
)]
pub async fn list_armor(
    State(state): State<AppState>,
    Query(query): Query<ArmorListQuery>,
) -> AppResult<Json<Page<Armor>>> {
    let lang = parse_lang(query.lang.as_deref())?;
    let page = PageParams::new(query.limit, query.offset);
    let filter = query.into_filter();

    let armor = ArmorRepository::list(&state.db, &lang, &filter, &page).await?;
    Ok(Json(armor))
}

/// Get a particular suit of armor.
#[utoipa::path(
    get,
    path = "/v2/armor/{key}",
    tag = "armor",
    params(
        ("key" = String, Path, description = "Armor key"),
        RetrieveQuery
    ),
    responses(
        (status = 200, description = "The armor", body = Armor),
        (status = 404, description = "No armor with that key")
    )
)]
pub async fn get_armor(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<RetrieveQuery>,
) -> AppResult<Json<Armor>> {
    let key = parse_key(&key, "Armor")?;
    let lang = parse_lang(query.lang.as_deref())?;

    let armor = ArmorRepository::get_by_key(&state.db, &lang, key.as_str())
        .await?
        .ok_or_else(|| AppError::not_found("Armor not found"))?;
    Ok(Json(armor))
}
