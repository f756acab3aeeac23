use sqlx::SqlitePool;

use crate::filters::{PageParams, SqlWhere};
use crate::models::{License, LicenseFilter, Page};

const SELECT_LICENSE: &str = "SELECT license.key, license.name, \
     license.description AS \"desc\", license.url FROM license";

const COUNT_LICENSE: &str = "SELECT COUNT(*) FROM license";

pub struct LicenseRepository;

impl LicenseRepository {
    fn apply(clause: &mut SqlWhere<'_>, filter: &LicenseFilter) {
        clause
            .text("license.key", &filter.key)
            .text("license.name", &filter.name)
            .text("license.url", &filter.url);
    }

    /// List licenses matching `filter`, ordered by key.
    pub async fn list(
        pool: &SqlitePool,
        filter: &LicenseFilter,
        page: &PageParams,
    ) -> Result<Page<License>, sqlx::Error> {
        let mut count_clause = SqlWhere::new(COUNT_LICENSE);
        Self::apply(&mut count_clause, filter);
        let mut count_query = count_clause.into_builder();
        let count: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

        let mut select_clause = SqlWhere::new(SELECT_LICENSE);
        Self::apply(&mut select_clause, filter);
        let mut select_query = select_clause.into_page("license.key ASC", page);
        let results = select_query
            .build_query_as::<License>()
            .fetch_all(pool)
            .await?;

        Ok(Page { count, results })
    }

    /// Get a license by key.
    pub async fn get_by_key(pool: &SqlitePool, key: &str) -> Result<Option<License>, sqlx::Error> {
        let query = format!("{} WHERE license.key = $1", SELECT_LICENSE);
        sqlx::query_as::<_, License>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }
}
