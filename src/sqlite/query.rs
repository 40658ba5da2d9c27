use std::sync::Arc;

use rusqlite::Statement;
use rusqlite::types::Value;

use crate::error::SqlFacadeError;
use crate::results::ResultSet;
use crate::types::RowValues;

use super::params::SqliteParams;

/// Extract one facade value from a `SQLite` row.
///
/// # Errors
/// Returns `SqlFacadeError::QueryError` if the driver cannot read the column.
pub(crate) fn extract_value(row: &rusqlite::Row, idx: usize) -> Result<RowValues, SqlFacadeError> {
    let value: Value = row
        .get(idx)
        .map_err(|e| SqlFacadeError::QueryError(e.to_string()))?;
    Ok(match value {
        Value::Null => RowValues::Null,
        Value::Integer(i) => RowValues::Int(i),
        Value::Real(f) => RowValues::Float(f),
        Value::Text(s) => RowValues::Text(s),
        Value::Blob(b) => RowValues::Blob(b),
    })
}

/// Execute a prepared statement and fetch every row into a [`ResultSet`].
///
/// # Errors
/// Returns `SqlFacadeError::QueryError` (driver message preserved) if binding,
/// stepping, or value extraction fails.
pub fn build_result_set(
    stmt: &mut Statement,
    params: &SqliteParams,
) -> Result<ResultSet, SqlFacadeError> {
    let column_names: Vec<String> = stmt
        .column_names()
        .iter()
        .map(std::string::ToString::to_string)
        .collect();
    let column_count = column_names.len();

    let bind_refs = params.as_bind_refs();
    let mut rows_iter = stmt
        .query(&bind_refs[..])
        .map_err(|e| SqlFacadeError::QueryError(e.to_string()))?;

    let mut result_set = ResultSet::with_capacity(10);
    result_set.set_column_names(Arc::new(column_names));

    while let Some(row) = rows_iter
        .next()
        .map_err(|e| SqlFacadeError::QueryError(e.to_string()))?
    {
        let mut values = Vec::with_capacity(column_count);
        for i in 0..column_count {
            values.push(extract_value(row, i)?);
        }
        result_set.add_row_values(values);
    }

    Ok(result_set)
}
