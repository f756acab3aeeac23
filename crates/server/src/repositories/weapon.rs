use grimoire_domain::LanguageCode;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::filters::{PageParams, SqlWhere};
use crate::models::{Page, Weapon, WeaponFilter};

const SELECT_WEAPON: &str = "SELECT weapon.key, weapon.document_key, weapon.damage_type, \
     weapon.damage_dice, weapon.versatile_dice, \
     weapon.range_reach, weapon.range_normal, weapon.range_long, \
     weapon.is_finesse, weapon.is_thrown, weapon.is_two_handed, \
     weapon.requires_ammunition, weapon.requires_loading, \
     weapon.is_heavy, weapon.is_light, weapon.is_lance, weapon.is_net, \
     weapon.is_simple, weapon.is_improvised";

const COUNT_WEAPON: &str = "SELECT COUNT(*) FROM weapon";

pub struct WeaponRepository;

impl WeaponRepository {
    fn select(lang: &LanguageCode) -> QueryBuilder<'static, Sqlite> {
        let mut qb = QueryBuilder::new(SELECT_WEAPON);
        qb.push(
            ", (SELECT t.name FROM weapon_text t \
             WHERE t.weapon_key = weapon.key AND t.lang = ",
        )
        .push_bind(lang.as_str().to_string())
        .push(" LIMIT 1) AS name");
        qb.push(" FROM weapon");
        qb
    }

    fn apply(clause: &mut SqlWhere<'_>, filter: &WeaponFilter) {
        clause
            .text("weapon.key", &filter.key)
            .text("weapon.document_key", &filter.document_key)
            .text("weapon.damage_type", &filter.damage_type)
            .text("weapon.damage_dice", &filter.damage_dice)
            .text("weapon.versatile_dice", &filter.versatile_dice)
            .number("weapon.range_reach", &filter.range_reach)
            .number("weapon.range_normal", &filter.range_normal)
            .number("weapon.range_long", &filter.range_long)
            .boolean("weapon.is_finesse", filter.is_finesse)
            .boolean("weapon.is_thrown", filter.is_thrown)
            .boolean("weapon.is_two_handed", filter.is_two_handed)
            .boolean("weapon.requires_ammunition", filter.requires_ammunition)
            .boolean("weapon.requires_loading", filter.requires_loading)
            .boolean("weapon.is_heavy", filter.is_heavy)
            .boolean("weapon.is_light", filter.is_light)
            .boolean("weapon.is_lance", filter.is_lance)
            .boolean("weapon.is_net", filter.is_net)
            .boolean("weapon.is_simple", filter.is_simple)
            .boolean("weapon.is_improvised", filter.is_improvised);
    }

    /// List weapons matching `filter`, ordered by key.
    pub async fn list(
        pool: &SqlitePool,
        lang: &LanguageCode,
        filter: &WeaponFilter,
        page: &PageParams,
    ) -> Result<Page<Weapon>, sqlx::Error> {
        let mut count_clause = SqlWhere::new(COUNT_WEAPON);
        Self::apply(&mut count_clause, filter);
        let mut count_query = count_clause.into_builder();
        let count: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

        let mut select_clause = SqlWhere::from_builder(Self::select(lang));
        Self::apply(&mut select_clause, filter);
        let mut select_query = select_clause.into_page("weapon.key ASC", page);
        let results = select_query
            .build_query_as::<Weapon>()
            .fetch_all(pool)
            .await?;

        Ok(Page { count, results })
    }

    /// Get a weapon by key.
    pub async fn get_by_key(
        pool: &SqlitePool,
        lang: &LanguageCode,
        key: &str,
    ) -> Result<Option<Weapon>, sqlx::Error> {
        let mut qb = Self::select(lang);
        qb.push(" WHERE weapon.key = ").push_bind(key.to_string());
        qb.build_query_as::<Weapon>().fetch_optional(pool).await
    }
}
