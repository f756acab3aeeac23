use sqlx::SqlitePool;

use crate::filters::{PageParams, SqlWhere};
use crate::models::{Document, DocumentFilter, Page};

const SELECT_DOCUMENT: &str = "SELECT document.key, document.name, \
     document.description AS \"desc\", document.author, document.published_at, \
     document.permalink, document.publisher_key, document.ruleset_key, \
     document.license_key FROM document";

const COUNT_DOCUMENT: &str = "SELECT COUNT(*) FROM document";

pub struct DocumentRepository;

impl DocumentRepository {
    fn apply(clause: &mut SqlWhere<'_>, filter: &DocumentFilter) {
        clause
            .text("document.key", &filter.key)
            .text("document.name", &filter.name)
            .text("document.author", &filter.author)
            .text("document.permalink", &filter.permalink)
            .text("document.publisher_key", &filter.publisher_key)
            .text("document.ruleset_key", &filter.ruleset_key)
            .text("document.license_key", &filter.license_key);
    }

    /// List documents matching `filter`, ordered by key.
    pub async fn list(
        pool: &SqlitePool,
        filter: &DocumentFilter,
        page: &PageParams,
    ) -> Result<Page<Document>, sqlx::Error> {
        let mut count_clause = SqlWhere::new(COUNT_DOCUMENT);
        Self::apply(&mut count_clause, filter);
        let mut count_query = count_clause.into_builder();
        let count: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

        let mut select_clause = SqlWhere::new(SELECT_DOCUMENT);
        Self::apply(&mut select_clause, filter);
        let mut select_query = select_clause.into_page("document.key ASC", page);
        let results = select_query
            .build_query_as::<Document>()
            .fetch_all(pool)
            .await?;

        Ok(Page { count, results })
    }

    /// Get a document by key.
    pub async fn get_by_key(
        pool: &SqlitePool,
        key: &str,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("{} WHERE document.key = $1", SELECT_DOCUMENT);
        sqlx::query_as::<_, Document>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }
}
