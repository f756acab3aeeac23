use grimoire_domain::LanguageCode;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::filters::{PageParams, SqlWhere};
use crate::models::{Item, ItemFilter, Page};

/// Stored columns; localized `name`/`desc` are attached per query.
const SELECT_ITEM: &str = "SELECT item.key, item.document_key, item.category, item.cost, \
     item.rarity, item.requires_attunement, \
     (item.rarity IS NOT NULL) AS is_magic_item, \
     item.size, item.weight, item.armor_class, item.hit_points";

const COUNT_ITEM: &str = "SELECT COUNT(*) FROM item";

pub struct ItemRepository;

impl ItemRepository {
    /// SELECT prefix with correlated subqueries resolving the display
    /// text for `lang`. A missing translation yields NULL text, never a
    /// dropped row.
    fn select(lang: &LanguageCode) -> QueryBuilder<'static, Sqlite> {
        let mut qb = QueryBuilder::new(SELECT_ITEM);
        qb.push(
            ", (SELECT t.name FROM item_text t \
             WHERE t.item_key = item.key AND t.lang = ",
        )
        .push_bind(lang.as_str().to_string())
        .push(" LIMIT 1) AS name");
        qb.push(
            ", (SELECT t.description FROM item_text t \
             WHERE t.item_key = item.key AND t.lang = ",
        )
        .push_bind(lang.as_str().to_string())
        .push(" LIMIT 1) AS \"desc\"");
        qb.push(" FROM item");
        qb
    }

    fn apply(clause: &mut SqlWhere<'_>, filter: &ItemFilter) {
        clause
            .text("item.key", &filter.key)
            .number("item.cost", &filter.cost)
            .number("item.weight", &filter.weight)
            .text("item.rarity", &filter.rarity)
            .boolean("item.requires_attunement", filter.requires_attunement)
            .text("item.category", &filter.category)
            .text("item.document_key", &filter.document_key)
            .not_null("item.rarity", filter.is_magic_item);
    }

    /// List items matching `filter`, ordered by key.
    pub async fn list(
        pool: &SqlitePool,
        lang: &LanguageCode,
        filter: &ItemFilter,
        page: &PageParams,
    ) -> Result<Page<Item>, sqlx::Error> {
        let mut count_clause = SqlWhere::new(COUNT_ITEM);
        Self::apply(&mut count_clause, filter);
        let mut count_query = count_clause.into_builder();
        let count: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

        let mut select_clause = SqlWhere::from_builder(Self::select(lang));
        Self::apply(&mut select_clause, filter);
        let mut select_query = select_clause.into_page("item.key ASC", page);
        let results = select_query
            .build_query_as::<Item>()
            .fetch_all(pool)
            .await?;

        Ok(Page { count, results })
    }

    /// Get an item by key.
    pub async fn get_by_key(
        pool: &SqlitePool,
        lang: &LanguageCode,
        key: &str,
    ) -> Result<Option<Item>, sqlx::Error> {
        let mut qb = Self::select(lang);
        qb.push(" WHERE item.key = ").push_bind(key.to_string());
        qb.build_query_as::<Item>().fetch_optional(pool).await
    }
}
