use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    MalformedFilter(String),
    InvalidSort,
    InvalidPagination,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::MalformedFilter(msg) => write!(f, "malformed filter: {msg}"),
            QueryError::InvalidSort => {
                write!(f, "Invalid sort parameter. Use 'field:asc' or 'field:desc'.")
            }
            QueryError::InvalidPagination => {
                write!(f, "page and limit must be positive integers")
            }
        }
    }
}

impl std::error::Error for QueryError {}
