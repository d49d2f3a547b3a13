mod error;
mod field;
mod filter;
mod parse_filter;
mod query;
mod request;
mod sort;

pub use error::QueryError;
pub use field::Field;
pub use filter::{Condition, Predicate};
pub use parse_filter::parse_filter;
pub use query::Query;
pub use request::{DEFAULT_LIMIT, DEFAULT_PAGE, ListParams, ListQuery};
pub use sort::{Sort, SortDirection, parse_sort};
