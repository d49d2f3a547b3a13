use serde_json::Value;

use crate::error::QueryError;
use crate::field::Field;
use crate::filter::Condition;

/// Parse a JSON filter parameter into a list of conditions.
///
/// Follows the shape of a document-store query object, narrowed to what the
/// schema allows:
/// - The top level must be a JSON object; every entry is ANDed.
/// - `{ "field": value }` is an implicit equality.
/// - `{ "field": { "$gte": v } }` uses operator sub-documents; `$eq`, `$gt`,
///   `$gte`, `$lt` and `$lte` are accepted.
/// - Field names are resolved against the city schema. Unknown fields and
///   `$`-prefixed top-level keys are rejected rather than passed through to
///   the store.
pub fn parse_filter(raw: &str) -> Result<Vec<Condition>, QueryError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| QueryError::MalformedFilter(format!("invalid JSON: {e}")))?;

    let map = match value {
        Value::Object(map) => map,
        _ => {
            return Err(QueryError::MalformedFilter(
                "filter must be a JSON object".into(),
            ));
        }
    };

    let mut conditions = Vec::new();
    for (key, value) in map {
        if key.starts_with('$') {
            return Err(QueryError::MalformedFilter(format!(
                "unknown top-level operator: {key}"
            )));
        }
        let field = Field::parse(&key)
            .ok_or_else(|| QueryError::MalformedFilter(format!("unknown field: {key}")))?;
        parse_field_condition(field, value, &mut conditions)?;
    }
    Ok(conditions)
}

/// Parse a field entry: an operator sub-document when its first key starts
/// with `$`, an implicit equality otherwise.
fn parse_field_condition(
    field: Field,
    value: Value,
    out: &mut Vec<Condition>,
) -> Result<(), QueryError> {
    match value {
        Value::Object(map) if map.keys().next().is_some_and(|k| k.starts_with('$')) => {
            for (op, op_value) in map {
                let condition = match op.as_str() {
                    "$eq" => Condition::Eq(field, op_value),
                    "$gt" => Condition::Gt(field, op_value),
                    "$gte" => Condition::Gte(field, op_value),
                    "$lt" => Condition::Lt(field, op_value),
                    "$lte" => Condition::Lte(field, op_value),
                    op => {
                        return Err(QueryError::MalformedFilter(format!(
                            "unknown field operator: {op}"
                        )));
                    }
                };
                out.push(condition);
            }
            Ok(())
        }
        scalar => {
            out.push(Condition::Eq(field, scalar));
            Ok(())
        }
    }
}
