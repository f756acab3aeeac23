use sqlx::SqlitePool;

use crate::filters::{PageParams, SqlWhere};
use crate::models::{Page, Publisher, PublisherFilter};

const SELECT_PUBLISHER: &str = "SELECT publisher.key, publisher.name, publisher.url FROM publisher";

const COUNT_PUBLISHER: &str = "SELECT COUNT(*) FROM publisher";

pub struct PublisherRepository;

impl PublisherRepository {
    fn apply(clause: &mut SqlWhere<'_>, filter: &PublisherFilter) {
        clause
            .text("publisher.key", &filter.key)
            .text("publisher.name", &filter.name)
            .text("publisher.url", &filter.url);
    }

    /// List publishers matching `filter`, ordered by key.
    pub async fn list(
        pool: &SqlitePool,
        filter: &PublisherFilter,
        page: &PageParams,
    ) -> Result<Page<Publisher>, sqlx::Error> {
        let mut count_clause = SqlWhere::new(COUNT_PUBLISHER);
        Self::apply(&mut count_clause, filter);
        let mut count_query = count_clause.into_builder();
        let count: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

        let mut select_clause = SqlWhere::new(SELECT_PUBLISHER);
        Self::apply(&mut select_clause, filter);
        let mut select_query = select_clause.into_page("publisher.key ASC", page);
        let results = select_query
            .build_query_as::<Publisher>()
            .fetch_all(pool)
            .await?;

        Ok(Page { count, results })
    }

    /// Get a publisher by key.
    pub async fn get_by_key(
        pool: &SqlitePool,
        key: &str,
    ) -> Result<Option<Publisher>, sqlx::Error> {
        let query = format!("{} WHERE publisher.key = $1", SELECT_PUBLISHER);
        sqlx::query_as::<_, Publisher>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }
}
