//! Filtered query construction.
//!
//! List endpoints accept Django-style `field__lookup` parameters
//! (`cost__gte=10`, `key__in=a,b`, `category__iexact=Armor`). Handlers
//! fold those into the lookup structs below; repositories apply them to
//! both the page query and its matching COUNT query through [`SqlWhere`],
//! a thin wrapper over `sqlx::QueryBuilder` that tracks whether a WHERE
//! keyword has been emitted yet.

use std::str::FromStr;

use sqlx::{QueryBuilder, Sqlite};
use thiserror::Error;

/// Default page size when `limit` is absent.
pub const DEFAULT_LIMIT: i64 = 50;

/// Hard ceiling on page size.
pub const MAX_LIMIT: i64 = 500;

/// Error interpreting a filter parameter value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A `__range` value was not two comma-separated bounds.
    #[error("malformed range {0:?}: expected \"min,max\"")]
    MalformedRange(String),

    /// A bound inside a `__range` value failed to parse.
    #[error("invalid range bound {0:?}")]
    BadBound(String),
}

/// Validated limit/offset pair.
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub limit: i64,
    pub offset: i64,
}

impl PageParams {
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self {
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            offset: offset.unwrap_or(0).max(0),
        }
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Lookups on a text column: `exact`, `iexact` and `in`.
#[derive(Debug, Clone, Default)]
pub struct TextLookup {
    pub exact: Option<String>,
    pub iexact: Option<String>,
    pub any: Option<Vec<String>>,
}

impl TextLookup {
    /// Build from raw query values; `any_csv` is the comma-separated
    /// `__in` list.
    pub fn new(
        exact: Option<String>,
        iexact: Option<String>,
        any_csv: Option<String>,
    ) -> Self {
        Self {
            exact,
            iexact,
            any: any_csv.map(|csv| split_csv(&csv)),
        }
    }

    /// Exact-only lookup, for resources that only filter on equality.
    pub fn exact(value: Option<String>) -> Self {
        Self {
            exact: value,
            ..Self::default()
        }
    }
}

/// Lookups on a numeric column: `exact`, `gt`, `gte`, `lt`, `lte` and
/// the inclusive `range`.
#[derive(Debug, Clone, Default)]
pub struct NumberLookup<T> {
    pub exact: Option<T>,
    pub gt: Option<T>,
    pub gte: Option<T>,
    pub lt: Option<T>,
    pub lte: Option<T>,
    pub range: Option<(T, T)>,
}

impl<T: FromStr> NumberLookup<T> {
    /// Build from raw query values; `range_csv` is the comma-separated
    /// `__range` pair and the only field that can fail to parse (the
    /// others are deserialized as numbers by the query extractor).
    pub fn new(
        exact: Option<T>,
        gt: Option<T>,
        gte: Option<T>,
        lt: Option<T>,
        lte: Option<T>,
        range_csv: Option<String>,
    ) -> Result<Self, FilterError> {
        Ok(Self {
            exact,
            gt,
            gte,
            lt,
            lte,
            range: range_csv.map(|csv| parse_range(&csv)).transpose()?,
        })
    }
}

/// Split a `__in` parameter into trimmed entries.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// Parse a `__range` parameter into its two bounds.
pub fn parse_range<T: FromStr>(raw: &str) -> Result<(T, T), FilterError> {
    let (lo, hi) = raw
        .split_once(',')
        .ok_or_else(|| FilterError::MalformedRange(raw.to_string()))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<T>()
            .map_err(|_| FilterError::BadBound(s.trim().to_string()))
    };
    Ok((parse(lo)?, parse(hi)?))
}

/// WHERE-clause builder shared by a page query and its COUNT twin.
pub struct SqlWhere<'args> {
    qb: QueryBuilder<'args, Sqlite>,
    has_where: bool,
}

impl<'args> SqlWhere<'args> {
    /// Start from a plain SELECT prefix.
    pub fn new(select: &str) -> Self {
        Self::from_builder(QueryBuilder::new(select))
    }

    /// Start from a prefix that already carries binds (e.g. the
    /// localized-text subqueries).
    pub fn from_builder(qb: QueryBuilder<'args, Sqlite>) -> Self {
        Self {
            qb,
            has_where: false,
        }
    }

    fn connective(&mut self) {
        if self.has_where {
            self.qb.push(" AND ");
        } else {
            self.qb.push(" WHERE ");
            self.has_where = true;
        }
    }

    /// Apply every populated lookup of a text filter.
    pub fn text(&mut self, column: &str, lookup: &TextLookup) -> &mut Self {
        if let Some(value) = &lookup.exact {
            self.connective();
            self.qb.push(column).push(" = ").push_bind(value.clone());
        }
        if let Some(value) = &lookup.iexact {
            self.connective();
            self.qb
                .push("LOWER(")
                .push(column)
                .push(") = LOWER(")
                .push_bind(value.clone())
                .push(")");
        }
        if let Some(values) = &lookup.any {
            self.connective();
            self.qb.push(column).push(" IN (");
            let mut separated = self.qb.separated(", ");
            for value in values {
                separated.push_bind(value.clone());
            }
            self.qb.push(")");
        }
        self
    }

    /// Apply every populated lookup of a numeric filter.
    pub fn number<T>(&mut self, column: &str, lookup: &NumberLookup<T>) -> &mut Self
    where
        T: Copy + Send + for<'q> sqlx::Encode<'q, Sqlite> + sqlx::Type<Sqlite> + 'args,
    {
        for (op, value) in [
            (" = ", lookup.exact),
            (" > ", lookup.gt),
            (" >= ", lookup.gte),
            (" < ", lookup.lt),
            (" <= ", lookup.lte),
        ] {
            if let Some(value) = value {
                self.connective();
                self.qb.push(column).push(op).push_bind(value);
            }
        }
        if let Some((lo, hi)) = lookup.range {
            self.connective();
            self.qb
                .push(column)
                .push(" BETWEEN ")
                .push_bind(lo)
                .push(" AND ")
                .push_bind(hi);
        }
        self
    }

    /// Exact match on a boolean column.
    pub fn boolean(&mut self, column: &str, value: Option<bool>) -> &mut Self {
        if let Some(value) = value {
            self.connective();
            self.qb.push(column).push(" = ").push_bind(value);
        }
        self
    }

    /// NULL-ness test: `Some(true)` keeps non-null rows, `Some(false)`
    /// keeps null rows (the `is_magic_item` filter).
    pub fn not_null(&mut self, column: &str, value: Option<bool>) -> &mut Self {
        if let Some(value) = value {
            self.connective();
            self.qb.push(column);
            self.qb
                .push(if value { " IS NOT NULL" } else { " IS NULL" });
        }
        self
    }

    /// Finish a COUNT query.
    pub fn into_builder(self) -> QueryBuilder<'args, Sqlite> {
        self.qb
    }

    /// Finish a page query: ordering plus bound limit/offset.
    pub fn into_page(mut self, order_by: &str, page: &PageParams) -> QueryBuilder<'args, Sqlite> {
        self.qb
            .push(" ORDER BY ")
            .push(order_by)
            .push(" LIMIT ")
            .push_bind(page.limit)
            .push(" OFFSET ")
            .push_bind(page.offset);
        self.qb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_lookups_emits_no_where() {
        let mut w = SqlWhere::new("SELECT COUNT(*) FROM item");
        w.text("item.key", &TextLookup::default());
        assert_eq!(w.into_builder().sql(), "SELECT COUNT(*) FROM item");
    }

    #[test]
    fn test_text_lookups() {
        let lookup = TextLookup::new(
            Some("longsword".into()),
            Some("Longsword".into()),
            Some("a, b".into()),
        );
        let mut w = SqlWhere::new("SELECT COUNT(*) FROM item");
        w.text("item.key", &lookup);
        let sql = w.into_builder().sql().to_string();
        assert!(sql.contains("WHERE item.key = "));
        assert!(sql.contains("AND LOWER(item.key) = LOWER("));
        assert!(sql.contains("AND item.key IN ("));
    }

    #[test]
    fn test_number_lookups_and_range() {
        let lookup = NumberLookup::new(
            None,
            None,
            Some(10.0),
            None,
            Some(50.0),
            Some("1,100".into()),
        )
        .unwrap();
        let mut w = SqlWhere::new("SELECT COUNT(*) FROM item");
        w.number("item.cost", &lookup);
        let sql = w.into_builder().sql().to_string();
        assert!(sql.contains("item.cost >= "));
        assert!(sql.contains("item.cost <= "));
        assert!(sql.contains("item.cost BETWEEN "));
    }

    #[test]
    fn test_not_null() {
        let mut w = SqlWhere::new("SELECT COUNT(*) FROM item");
        w.not_null("item.rarity", Some(true));
        assert!(w.into_builder().sql().ends_with("item.rarity IS NOT NULL"));

        let mut w = SqlWhere::new("SELECT COUNT(*) FROM item");
        w.not_null("item.rarity", Some(false));
        assert!(w.into_builder().sql().ends_with("item.rarity IS NULL"));
    }

    #[test]
    fn test_page_clause() {
        let w = SqlWhere::new("SELECT key FROM item");
        let sql = w
            .into_page("item.key ASC", &PageParams::default())
            .sql()
            .to_string();
        assert!(sql.contains("ORDER BY item.key ASC LIMIT "));
        assert!(sql.contains("OFFSET "));
    }

    #[test]
    fn test_page_params_clamp() {
        let page = PageParams::new(Some(10_000), Some(-5));
        assert_eq!(page.limit, MAX_LIMIT);
        assert_eq!(page.offset, 0);

        let page = PageParams::new(None, None);
        assert_eq!(page.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_parse_range_errors() {
        assert_eq!(
            parse_range::<f64>("10"),
            Err(FilterError::MalformedRange("10".into()))
        );
        assert_eq!(
            parse_range::<f64>("a,b"),
            Err(FilterError::BadBound("a".into()))
        );
        assert_eq!(parse_range::<i64>("1, 5"), Ok((1, 5)));
    }
}
