use crate::error::QueryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

/// Parse a `field:asc` / `field:desc` sort parameter.
///
/// The direction token is strict. The field token is kept as-is: sorting by
/// a field the store does not know leaves its natural order, so there is
/// nothing to reject at this boundary.
pub fn parse_sort(raw: &str) -> Result<Sort, QueryError> {
    let (field, direction) = raw.split_once(':').ok_or(QueryError::InvalidSort)?;
    if field.is_empty() {
        return Err(QueryError::InvalidSort);
    }
    let direction = match direction {
        "asc" => SortDirection::Asc,
        "desc" => SortDirection::Desc,
        _ => return Err(QueryError::InvalidSort),
    };
    Ok(Sort {
        field: field.to_string(),
        direction,
    })
}
