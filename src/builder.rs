//! Construction of parameterized CRUD statements from associative input.
//!
//! Every value travels through a named placeholder (`:name`); only column and
//! table identifiers are interpolated into the SQL text. Column names are
//! backtick-quoted; driver-specific identifier escaping beyond that is the
//! adapter's concern. Iteration order of the input mappings fixes clause and
//! column order.

use crate::error::SqlFacadeError;
use crate::params::NamedParams;

mod dml;
mod select;

pub use dml::{delete_where, insert, insert_batch, update_where};
pub use select::select_where;

fn quote_ident(column: &str) -> String {
    format!("`{column}`")
}

/// Build an AND-joined equality clause from `where_map`, registering each
/// value in `out_params` under `placeholder_prefix` + column name.
fn equality_clause(
    where_map: &NamedParams,
    placeholder_prefix: &str,
    out_params: &mut NamedParams,
) -> String {
    let terms: Vec<String> = where_map
        .iter()
        .map(|(column, value)| {
            let placeholder = format!("{placeholder_prefix}{column}");
            out_params.insert(placeholder.clone(), value.clone());
            format!("{} = :{placeholder}", quote_ident(column))
        })
        .collect();
    terms.join(" AND ")
}

fn require_non_empty(map: &NamedParams, what: &str) -> Result<(), SqlFacadeError> {
    if map.is_empty() {
        return Err(SqlFacadeError::ParameterError(format!(
            "{what} mapping must not be empty"
        )));
    }
    Ok(())
}
