use crate::error::SqlFacadeError;
use crate::params::NamedParams;
use crate::query::QueryAndParams;

use super::{equality_clause, require_non_empty};

/// Build `SELECT * FROM table WHERE k1 = :k1 AND ...` from an equality
/// mapping. Clause order follows the mapping's insertion order.
///
/// # Errors
/// Returns `SqlFacadeError::ParameterError` if `where_map` is empty, which
/// would otherwise produce a malformed WHERE clause.
pub fn select_where(
    table: &str,
    where_map: &NamedParams,
) -> Result<QueryAndParams, SqlFacadeError> {
    require_non_empty(where_map, "where")?;

    let mut params = NamedParams::new();
    let clause = equality_clause(where_map, "", &mut params);
    let query = format!("SELECT * FROM {table} WHERE {clause}");
    Ok(QueryAndParams::new(query, params))
}
