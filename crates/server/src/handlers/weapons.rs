use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use super::{parse_key, parse_lang, RetrieveQuery};
use crate::error::{AppError, AppResult};
use crate::filters::{NumberLookup, PageParams, TextLookup};
use crate::models::{Page, Weapon, WeaponFilter};
use crate::repositories::WeaponRepository;
use crate::state::AppState;

/// Filter parameters for the weapon list.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct WeaponListQuery {
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

    pub damage_type: Option<String>,
    pub damage_type__iexact: Option<String>,
    pub damage_type__in: Option<String>,

    pub damage_dice: Option<String>,
    pub damage_dice__iexact: Option<String>,
    pub damage_dice__in: Option<String>,

    pub versatile_dice: Option<String>,
    pub versatile_dice__iexact: Option<String>,
    pub versatile_dice__in: Option<String>,

    pub range_reach: Option<i64>,
    pub range_reach__gt: Option<i64>,
    pub range_reach__gte: Option<i64>,
    pub range_reach__lt: Option<i64>,
    pub range_reach__lte: Option<i64>,

    pub range_normal: Option<i64>,
    pub range_normal__gt: Option<i64>,
    pub range_normal__gte: Option<i64>,
    pub range_normal__lt: Option<i64>,
    pub range_normal__lte: Option<i64>,

    pub range_long: Option<i64>,
    pub range_long__gt: Option<i64>,
    pub range_long__gte: Option<i64>,
    pub range_long__lt: Option<i64>,
    pub range_long__lte: Option<i64>,

    pub is_finesse: Option<bool>,
    pub is_thrown: Option<bool>,
    pub is_two_handed: Option<bool>,
    pub requires_ammunition: Option<bool>,
    pub requires_loading: Option<bool>,
    pub is_heavy: Option<bool>,
    pub is_light: Option<bool>,
    pub is_lance: Option<bool>,
    pub is_net: Option<bool>,
    pub is_simple: Option<bool>,
    pub is_improvised: Option<bool>,
}

impl WeaponListQuery {
    fn into_filter(self) -> WeaponFilter {
        let cmp = |exact, gt, gte, lt, lte| NumberLookup::<i64> {
            exact,
            gt,
            gte,
            lt,
            lte,
            range: None,
        };

        WeaponFilter {
            key: TextLookup::new(self.key, self.key__iexact, self.key__in),
            document_key: TextLookup::new(
                self.document__key,
                self.document__key__iexact,
                self.document__key__in,
            ),
            damage_type: TextLookup::new(
                self.damage_type,
                self.damage_type__iexact,
                self.damage_type__in,
            ),
            damage_dice: TextLookup::new(
                self.damage_dice,
                self.damage_dice__iexact,
                self.damage_dice__in,
            ),
            versatile_dice: TextLookup::new(
                self.versatile_dice,
                self.versatile_dice__iexact,
                self.versatile_dice__in,
            ),
            range_reach: cmp(
                self.range_reach,
                self.range_reach__gt,
                self.range_reach__gte,
                self.range_reach__lt,
                self.range_reach__lte,
            ),
            range_normal: cmp(
                self.range_normal,
                self.range_normal__gt,
                self.range_normal__gte,
                self.range_normal__lt,
                self.range_normal__lte,
            ),
            range_long: cmp(
                self.range_long,
                self.range_long__gt,
                self.range_long__gte,
                self.range_long__lt,
                self.range_long__lte,
            ),
            is_finesse: self.is_finesse,
            is_thrown: self.is_thrown,
            is_two_handed: self.is_two_handed,
            requires_ammunition: self.requires_ammunition,
            requires_loading: self.requires_loading,
            is_heavy: self.is_heavy,
            is_light: self.is_light,
            is_lance: self.is_lance,
            is_net: self.is_net,
            is_simple: self.is_simple,
            is_improvised: self.is_improvised,
        }
    }
}

/// List weapons.
#[utoipa::path(
    get,
    path = "/v2/weapons",
    tag = "weapons",
    params(WeaponListQuery),
    responses(
        (status = 200, description = "Filtered page of weapons", body = Page<Weapon>)
    )
)]
pub async fn list_weapons(
    State(state): State<AppState>,
    Query(query): Query<WeaponListQuery>,
) -> AppResult<Json<Page<Weapon>>> {
    let lang = parse_lang(query.lang.as_deref())?;
    let page = PageParams::new(query.limit, query.offset);
    let filter = query.into_filter();

    let weapons = WeaponRepository::list(&state.db, &lang, &filter, &page).await?;
    Ok(Json(weapons))
}

/// Get a particular weapon.
#[utoipa::path(
    get,
    path = "/v2/weapons/{key}",
    tag = "weapons",
    params(
        ("key" = String, Path, description = "Weapon key"),
        RetrieveQuery
    ),
    responses(
        (status = 200, description = "The weapon", body = Weapon),
        (status = 404, description = "No weapon with that key")
    )
)]
pub async fn get_weapon(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<RetrieveQuery>,
) -> AppResult<Json<Weapon>> {
    let key = parse_key(&key, "Weapon")?;
    let lang = parse_lang(query.lang.as_deref())?;

    let weapon = WeaponRepository::get_by_key(&state.db, &lang, key.as_str())
        .await?
        .ok_or_else(|| AppError::not_found("Weapon not found"))?;
    Ok(Json(weapon))
}
