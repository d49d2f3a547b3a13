use serde::Deserialize;

use crate::error::QueryError;
use crate::field::Field;
use crate::filter::{Condition, Predicate};
use crate::parse_filter::parse_filter;
use crate::query::Query;
use crate::sort::parse_sort;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Raw list-endpoint parameters, exactly as the transport hands them over:
/// untrusted, string-typed, all optional. Empty strings count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub search: Option<String>,
    pub fields: Option<String>,
}

/// The built query plus the parsed page/limit, echoed back in responses.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub query: Query,
    pub page: u64,
    pub limit: u64,
}

impl ListParams {
    /// Build a validated [`ListQuery`]. Pure function of the parameters;
    /// any structural problem fails the whole build, so a partial or
    /// default query never reaches the store.
    pub fn build(&self) -> Result<ListQuery, QueryError> {
        let page = parse_positive(self.page.as_deref(), DEFAULT_PAGE)?;
        let limit = parse_positive(self.limit.as_deref(), DEFAULT_LIMIT)?;

        let mut predicate = Predicate::default();
        if let Some(filter) = present(&self.filter) {
            for condition in parse_filter(filter)? {
                predicate.push(condition);
            }
        }
        if let Some(search) = present(&self.search) {
            predicate.push(Condition::icontains(Field::Name, search)?);
        }

        let sort = present(&self.sort).map(parse_sort).transpose()?;
        let projection = present(&self.fields).and_then(parse_fields);

        let query = Query {
            predicate,
            sort,
            projection,
            skip: Some((page - 1).saturating_mul(limit)),
            take: Some(limit),
        };

        Ok(ListQuery { query, page, limit })
    }
}

fn present(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|s| !s.is_empty())
}

/// Parse an optional positive integer parameter; absent or empty falls back
/// to the default, anything non-numeric or < 1 is rejected.
fn parse_positive(raw: Option<&str>, default: u64) -> Result<u64, QueryError> {
    match raw {
        None | Some("") => Ok(default),
        Some(s) => match s.parse::<u64>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(QueryError::InvalidPagination),
        },
    }
}

/// Comma-separated field names into a projection. Unknown and empty entries
/// are ignored; a list of only unknown names still projects (down to `id`).
fn parse_fields(raw: &str) -> Option<Vec<Field>> {
    Some(
        raw.split(',')
            .filter_map(|name| Field::parse(name.trim()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortDirection;

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        let mut p = ListParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "page" => p.page = value,
                "limit" => p.limit = value,
                "filter" => p.filter = value,
                "sort" => p.sort = value,
                "search" => p.search = value,
                "fields" => p.fields = value,
                k => panic!("unknown param {k}"),
            }
        }
        p
    }

    // ── Pagination ──────────────────────────────────────────────

    #[test]
    fn defaults_when_absent() {
        let built = ListParams::default().build().unwrap();
        assert_eq!(built.page, 1);
        assert_eq!(built.limit, 10);
        assert_eq!(built.query.skip, Some(0));
        assert_eq!(built.query.take, Some(10));
        assert!(built.query.predicate.is_empty());
        assert!(built.query.sort.is_none());
        assert!(built.query.projection.is_none());
    }

    #[test]
    fn skip_is_page_minus_one_times_limit() {
        let built = params(&[("page", "2"), ("limit", "10")]).build().unwrap();
        assert_eq!(built.query.skip, Some(20));

        let built = params(&[("page", "5"), ("limit", "3")]).build().unwrap();
        assert_eq!(built.query.skip, Some(12));
        assert_eq!(built.query.take, Some(3));
    }

    #[test]
    fn page_and_limit_echoed() {
        let built = params(&[("page", "4"), ("limit", "25")]).build().unwrap();
        assert_eq!(built.page, 4);
        assert_eq!(built.limit, 25);
    }

    #[test]
    fn zero_page_rejected() {
        let err = params(&[("page", "0")]).build().unwrap_err();
        assert_eq!(err, QueryError::InvalidPagination);
    }

    #[test]
    fn zero_limit_rejected() {
        let err = params(&[("limit", "0")]).build().unwrap_err();
        assert_eq!(err, QueryError::InvalidPagination);
    }

    #[test]
    fn negative_page_rejected() {
        let err = params(&[("page", "-1")]).build().unwrap_err();
        assert_eq!(err, QueryError::InvalidPagination);
    }

    #[test]
    fn non_numeric_limit_rejected() {
        let err = params(&[("limit", "ten")]).build().unwrap_err();
        assert_eq!(err, QueryError::InvalidPagination);
    }

    // ── Filter and search ───────────────────────────────────────

    #[test]
    fn search_becomes_name_icontains() {
        let built = params(&[("search", "spr")]).build().unwrap();
        assert_eq!(built.query.predicate.conditions.len(), 1);
        match &built.query.predicate.conditions[0] {
            Condition::IContains(Field::Name, re) => assert_eq!(re.as_str(), "(?i)spr"),
            c => panic!("expected IContains, got {c:?}"),
        }
    }

    #[test]
    fn filter_and_search_are_anded() {
        let built = params(&[("filter", r#"{"country":"US"}"#), ("search", "san")])
            .build()
            .unwrap();
        let conditions = &built.query.predicate.conditions;
        assert_eq!(conditions.len(), 2);
        assert!(matches!(&conditions[0], Condition::Eq(Field::Country, _)));
        assert!(matches!(
            &conditions[1],
            Condition::IContains(Field::Name, _)
        ));
    }

    #[test]
    fn search_does_not_displace_name_filter() {
        // A name filter and a search on the same field both apply.
        let built = params(&[("filter", r#"{"name":"Springfield"}"#), ("search", "spr")])
            .build()
            .unwrap();
        assert_eq!(built.query.predicate.conditions.len(), 2);
    }

    #[test]
    fn malformed_filter_fails_build() {
        let err = params(&[("filter", "{invalid")]).build().unwrap_err();
        assert!(matches!(err, QueryError::MalformedFilter(_)));
    }

    #[test]
    fn invalid_sort_fails_build() {
        let err = params(&[("sort", "population:down")]).build().unwrap_err();
        assert_eq!(err, QueryError::InvalidSort);
    }

    #[test]
    fn sort_is_carried() {
        let built = params(&[("sort", "population:desc")]).build().unwrap();
        let sort = built.query.sort.unwrap();
        assert_eq!(sort.field, "population");
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    // ── Projection ──────────────────────────────────────────────

    #[test]
    fn fields_parse_to_projection() {
        let built = params(&[("fields", "name,population")]).build().unwrap();
        assert_eq!(
            built.query.projection,
            Some(vec![Field::Name, Field::Population])
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let built = params(&[("fields", "name, mayor ,population")])
            .build()
            .unwrap();
        assert_eq!(
            built.query.projection,
            Some(vec![Field::Name, Field::Population])
        );
    }

    #[test]
    fn only_unknown_fields_projects_to_id() {
        let built = params(&[("fields", "mayor")]).build().unwrap();
        assert_eq!(built.query.projection, Some(vec![]));
    }

    // ── Empty strings count as absent ───────────────────────────

    #[test]
    fn empty_params_fall_back_to_defaults() {
        let built = params(&[
            ("page", ""),
            ("limit", ""),
            ("filter", ""),
            ("sort", ""),
            ("search", ""),
            ("fields", ""),
        ])
        .build()
        .unwrap();
        assert_eq!(built.page, 1);
        assert_eq!(built.limit, 10);
        assert!(built.query.predicate.is_empty());
        assert!(built.query.sort.is_none());
        assert!(built.query.projection.is_none());
    }
}
