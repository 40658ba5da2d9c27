use crate::error::SqlFacadeError;
use crate::params::NamedParams;
use crate::query::QueryAndParams;
use crate::types::RowValues;

use super::{equality_clause, quote_ident, require_non_empty};

/// Build a single-row `INSERT` statement. Column order follows the mapping's
/// insertion order; every value binds under its own column name.
///
/// `ignore_keyword`, when present, lands immediately after `INSERT` (the
/// adapter supplies its dialect's duplicate-key-ignore fragment).
///
/// # Errors
/// Returns `SqlFacadeError::ParameterError` if `row` is empty.
pub fn insert(
    table: &str,
    row: &NamedParams,
    ignore_keyword: Option<&str>,
) -> Result<QueryAndParams, SqlFacadeError> {
    require_non_empty(row, "row")?;

    let columns: Vec<String> = row.names().map(quote_ident).collect();
    let placeholders: Vec<String> = row.names().map(|name| format!(":{name}")).collect();
    let query = format!(
        "INSERT {}INTO {table} ({}) VALUES ({})",
        ignore_fragment(ignore_keyword),
        columns.join(", "),
        placeholders.join(", "),
    );
    Ok(QueryAndParams::new(query, row.clone()))
}

/// Build a single multi-row `INSERT` statement.
///
/// The column list comes from the first row; every row must carry the same
/// columns in the same order. Placeholder names (`v0`, `v1`, ...) come from a
/// counter shared across the whole batch so no name repeats between rows.
/// Empty-string text values are inlined as a literal `''` instead of being
/// bound, sidestepping drivers that mishandle empty-string binds.
///
/// # Errors
/// Returns `SqlFacadeError::ParameterError` if `rows` is empty, the first row
/// is empty, or any row's columns differ from the first row's.
pub fn insert_batch(
    table: &str,
    rows: &[NamedParams],
    ignore_keyword: Option<&str>,
) -> Result<QueryAndParams, SqlFacadeError> {
    let Some(first) = rows.first() else {
        return Err(SqlFacadeError::ParameterError(
            "batch insert requires at least one row".to_string(),
        ));
    };
    require_non_empty(first, "row")?;

    let columns: Vec<&str> = first.names().collect();
    let column_list: Vec<String> = columns.iter().map(|c| quote_ident(c)).collect();

    let mut params = NamedParams::new();
    let mut counter = 0usize;
    let mut value_rows: Vec<String> = Vec::with_capacity(rows.len());

    for (row_idx, row) in rows.iter().enumerate() {
        let row_columns: Vec<&str> = row.names().collect();
        if row_columns != columns {
            return Err(SqlFacadeError::ParameterError(format!(
                "batch row {row_idx} does not match the first row's columns"
            )));
        }

        let mut slots: Vec<String> = Vec::with_capacity(row.len());
        for (_, value) in row.iter() {
            if matches!(value, RowValues::Text(s) if s.is_empty()) {
                slots.push("''".to_string());
            } else {
                let placeholder = format!("v{counter}");
                counter += 1;
                params.insert(placeholder.clone(), value.clone());
                slots.push(format!(":{placeholder}"));
            }
        }
        value_rows.push(format!("({})", slots.join(", ")));
    }

    let query = format!(
        "INSERT {}INTO {table} ({}) VALUES {}",
        ignore_fragment(ignore_keyword),
        column_list.join(", "),
        value_rows.join(", "),
    );
    Ok(QueryAndParams::new(query, params))
}

/// Build `UPDATE table SET ... WHERE ...`.
///
/// SET placeholders are `c_`-prefixed and WHERE placeholders `v_`-prefixed so
/// a column appearing in both mappings binds twice, independently.
///
/// # Errors
/// Returns `SqlFacadeError::ParameterError` if either mapping is empty.
pub fn update_where(
    table: &str,
    row: &NamedParams,
    where_map: &NamedParams,
) -> Result<QueryAndParams, SqlFacadeError> {
    require_non_empty(row, "row")?;
    require_non_empty(where_map, "where")?;

    let mut params = NamedParams::new();
    let assignments: Vec<String> = row
        .iter()
        .map(|(column, value)| {
            let placeholder = format!("c_{column}");
            params.insert(placeholder.clone(), value.clone());
            format!("{} = :{placeholder}", quote_ident(column))
        })
        .collect();
    let clause = equality_clause(where_map, "v_", &mut params);

    let query = format!(
        "UPDATE {table} SET {} WHERE {clause}",
        assignments.join(", ")
    );
    Ok(QueryAndParams::new(query, params))
}

/// Build `DELETE FROM table WHERE ...` from an equality mapping.
///
/// # Errors
/// Returns `SqlFacadeError::ParameterError` if `where_map` is empty.
pub fn delete_where(
    table: &str,
    where_map: &NamedParams,
) -> Result<QueryAndParams, SqlFacadeError> {
    require_non_empty(where_map, "where")?;

    let mut params = NamedParams::new();
    let clause = equality_clause(where_map, "", &mut params);
    let query = format!("DELETE FROM {table} WHERE {clause}");
    Ok(QueryAndParams::new(query, params))
}

fn ignore_fragment(ignore_keyword: Option<&str>) -> String {
    match ignore_keyword {
        Some(keyword) => format!("{keyword} "),
        None => String::new(),
    }
}
