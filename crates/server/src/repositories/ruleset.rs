use sqlx::SqlitePool;

use crate::filters::{PageParams, SqlWhere};
use crate::models::{Page, Ruleset, RulesetFilter};

const SELECT_RULESET: &str = "SELECT ruleset.key, ruleset.name, \
     ruleset.description AS \"desc\", ruleset.content_prefix FROM ruleset";

const COUNT_RULESET: &str = "SELECT COUNT(*) FROM ruleset";

pub struct RulesetRepository;

impl RulesetRepository {
    fn apply(clause: &mut SqlWhere<'_>, filter: &RulesetFilter) {
        clause
            .text("ruleset.key", &filter.key)
            .text("ruleset.name", &filter.name)
            .text("ruleset.content_prefix", &filter.content_prefix);
    }

    /// List rulesets matching `filter`, ordered by key.
    pub async fn list(
        pool: &SqlitePool,
        filter: &RulesetFilter,
        page: &PageParams,
    ) -> Result<Page<Ruleset>, sqlx::Error> {
        let mut count_clause = SqlWhere::new(COUNT_RULESET);
        Self::apply(&mut count_clause, filter);
        let mut count_query = count_clause.into_builder();
        let count: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

        let mut select_clause = SqlWhere::new(SELECT_RULESET);
        Self::apply(&mut select_clause, filter);
        let mut select_query = select_clause.into_page("ruleset.key ASC", page);
        let results = select_query
            .build_query_as::<Ruleset>()
            .fetch_all(pool)
            .await?;

        Ok(Page { count, results })
    }

    /// Get a ruleset by key.
    pub async fn get_by_key(pool: &SqlitePool, key: &str) -> Result<Option<Ruleset>, sqlx::Error> {
        let query = format!("{} WHERE ruleset.key = $1", SELECT_RULESET);
        sqlx::query_as::<_, Ruleset>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }
}
