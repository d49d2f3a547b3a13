use crate::field::Field;
use crate::filter::Predicate;
use crate::sort::Sort;

/// A validated, executable query descriptor. Built by
/// [`ListParams::build`](crate::ListParams::build); raw request input never
/// reaches the store without passing through that build step.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub predicate: Predicate,
    /// At most one sort key; `None` leaves the store's natural order.
    pub sort: Option<Sort>,
    /// Fields to return; `id` is always included. `None` returns all fields.
    pub projection: Option<Vec<Field>>,
    pub skip: Option<u64>,
    pub take: Option<u64>,
}
