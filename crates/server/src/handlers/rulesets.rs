use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use super::parse_key;
use crate::error::{AppError, AppResult};
use crate::filters::{PageParams, TextLookup};
use crate::models::{Page, Ruleset, RulesetFilter};
use crate::repositories::RulesetRepository;
use crate::state::AppState;

/// Exact-match filter parameters for the ruleset list.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct RulesetListQuery {
    /// Page size (default 50, max 500).
    pub limit: Option<i64>,
    /// Rows to skip.
    pub offset: Option<i64>,

    pub key: Option<String>,
    pub name: Option<String>,
    pub content_prefix: Option<String>,
}

/// List rulesets.
#[utoipa::path(
    get,
    path = "/v2/rulesets",
    tag = "rulesets",
    params(RulesetListQuery),
    responses(
        (status = 200, description = "Filtered page of rulesets", body = Page<Ruleset>)
    )
)]
pub async fn list_rulesets(
    State(state): State<AppState>,
    Query(query): Query<RulesetListQuery>,
) -> AppResult<Json<Page<Ruleset>>> {
    let page = PageParams::new(query.limit, query.offset);
    let filter = RulesetFilter {
        key: TextLookup::exact(query.key),
        name: TextLookup::exact(query.name),
        content_prefix: TextLookup::exact(query.content_prefix),
    };

    let rulesets = RulesetRepository::list(&state.db, &filter, &page).await?;
    Ok(Json(rulesets))
}

/// Get a particular ruleset.
#[utoipa::path(
    get,
    path = "/v2/rulesets/{key}",
    tag = "rulesets",
    params(("key" = String, Path, description = "Ruleset key")),
    responses(
        (status = 200, description = "The ruleset", body = Ruleset),
        (status = 404, description = "No ruleset with that key")
    )
)]
pub async fn get_ruleset(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Json<Ruleset>> {
    let key = parse_key(&key, "Ruleset")?;

    let ruleset = RulesetRepository::get_by_key(&state.db, key.as_str())
        .await?
        .ok_or_else(|| AppError::not_found("Ruleset not found"))?;
    Ok(Json(ruleset))
}
