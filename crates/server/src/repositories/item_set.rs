use sqlx::SqlitePool;

use crate::filters::{PageParams, SqlWhere};
use crate::models::{ItemSet, ItemSetFilter, ItemSetRow, Page};

const SELECT_ITEM_SET: &str = "SELECT item_set.key, item_set.document_key, item_set.name, \
     item_set.description AS \"desc\" FROM item_set";

const COUNT_ITEM_SET: &str = "SELECT COUNT(*) FROM item_set";

pub struct ItemSetRepository;

impl ItemSetRepository {
    fn apply(clause: &mut SqlWhere<'_>, filter: &ItemSetFilter) {
        clause
            .text("item_set.key", &filter.key)
            .text("item_set.name", &filter.name)
            .text("item_set.document_key", &filter.document_key);
    }

    async fn member_keys(pool: &SqlitePool, set_key: &str) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT item_key FROM item_set_member \
             WHERE item_set_key = $1 ORDER BY item_key",
        )
        .bind(set_key)
        .fetch_all(pool)
        .await
    }

    /// List item sets matching `filter`, each with its member keys.
    pub async fn list(
        pool: &SqlitePool,
        filter: &ItemSetFilter,
        page: &PageParams,
    ) -> Result<Page<ItemSet>, sqlx::Error> {
        let mut count_clause = SqlWhere::new(COUNT_ITEM_SET);
        Self::apply(&mut count_clause, filter);
        let mut count_query = count_clause.into_builder();
        let count: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

        let mut select_clause = SqlWhere::new(SELECT_ITEM_SET);
        Self::apply(&mut select_clause, filter);
        let mut select_query = select_clause.into_page("item_set.key ASC", page);
        let rows = select_query
            .build_query_as::<ItemSetRow>()
            .fetch_all(pool)
            .await?;

        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let items = Self::member_keys(pool, &row.key).await?;
            results.push(row.into_set(items));
        }

        Ok(Page { count, results })
    }

    /// Get an item set by key.
    pub async fn get_by_key(
        pool: &SqlitePool,
        key: &str,
    ) -> Result<Option<ItemSet>, sqlx::Error> {
        let query = format!("{} WHERE item_set.key = $1", SELECT_ITEM_SET);
        let row = sqlx::query_as::<_, ItemSetRow>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let items = Self::member_keys(pool, &row.key).await?;
        Ok(Some(row.into_set(items)))
    }
}
