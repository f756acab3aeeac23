use grimoire_domain::LanguageCode;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::filters::{PageParams, SqlWhere};
use crate::models::{Armor, ArmorFilter, ArmorRow, Page};

const SELECT_ARMOR: &str = "SELECT armor.key, armor.document_key, \
     armor.grants_stealth_disadvantage, armor.strength_score_required, \
     armor.ac_base, armor.ac_add_dexmod, armor.ac_cap_dexmod";

const COUNT_ARMOR: &str = "SELECT COUNT(*) FROM armor";

pub struct ArmorRepository;

impl ArmorRepository {
    fn select(lang: &LanguageCode) -> QueryBuilder<'static, Sqlite> {
        let mut qb = QueryBuilder::new(SELECT_ARMOR);
        qb.push(
            ", (SELECT t.name FROM armor_text t \
             WHERE t.armor_key = armor.key AND t.lang = ",
        )
        .push_bind(lang.as_str().to_string())
        .push(" LIMIT 1) AS name");
        qb.push(" FROM armor");
        qb
    }

    fn apply(clause: &mut SqlWhere<'_>, filter: &ArmorFilter) {
        clause
            .text("armor.key", &filter.key)
            .text("armor.document_key", &filter.document_key)
            .boolean(
                "armor.grants_stealth_disadvantage",
                filter.grants_stealth_disadvantage,
            )
            .number(
                "armor.strength_score_required",
                &filter.strength_score_required,
            )
            .number("armor.ac_base", &filter.ac_base)
            .boolean("armor.ac_add_dexmod", filter.ac_add_dexmod);
        if let Some(cap) = filter.ac_cap_dexmod {
            clause.number(
                "armor.ac_cap_dexmod",
                &crate::filters::NumberLookup {
                    exact: Some(cap),
                    ..Default::default()
                },
            );
        }
    }

    /// List armor matching `filter`, ordered by key.
    pub async fn list(
        pool: &SqlitePool,
        lang: &LanguageCode,
        filter: &ArmorFilter,
        page: &PageParams,
    ) -> Result<Page<Armor>, sqlx::Error> {
        let mut count_clause = SqlWhere::new(COUNT_ARMOR);
        Self::apply(&mut count_clause, filter);
        let mut count_query = count_clause.into_builder();
        let count: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

        let mut select_clause = SqlWhere::from_builder(Self::select(lang));
        Self::apply(&mut select_clause, filter);
        let mut select_query = select_clause.into_page("armor.key ASC", page);
        let rows = select_query
            .build_query_as::<ArmorRow>()
            .fetch_all(pool)
            .await?;

        Ok(Page {
            count,
            results: rows.into_iter().map(Into::into).collect(),
        })
    }

    /// Get a suit of armor by key.
    pub async fn get_by_key(
        pool: &SqlitePool,
        lang: &LanguageCode,
        key: &str,
    ) -> Result<Option<Armor>, sqlx::Error> {
        let mut qb = Self::select(lang);
        qb.push(" WHERE armor.key = ").push_bind(key.to_string());
        let row = qb.build_query_as::<ArmorRow>().fetch_optional(pool).await?;
        Ok(row.map(Into::into))
    }
}
