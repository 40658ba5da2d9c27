use crate::params::NamedParams;

/// A SQL string and its bound parameters bundled together.
///
/// The fragment builders return this so query text and parameter names can
/// never drift apart:
/// ```rust
/// use sql_facade::prelude::*;
///
/// let qp = QueryAndParams::new(
///     "INSERT INTO t (`id`, `name`) VALUES (:id, :name)",
///     NamedParams::new()
///         .with("id", RowValues::Int(1))
///         .with("name", RowValues::Text("alice".into())),
/// );
/// # let _ = qp;
/// ```
#[derive(Debug, Clone)]
pub struct QueryAndParams {
    /// The SQL query string
    pub query: String,
    /// The parameters to be bound to the query
    pub params: NamedParams,
}

impl QueryAndParams {
    /// Create a new `QueryAndParams` with the given query string and parameters.
    pub fn new(query: impl Into<String>, params: NamedParams) -> Self {
        Self {
            query: query.into(),
            params,
        }
    }

    /// Create a new `QueryAndParams` with no parameters.
    pub fn new_without_params(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            params: NamedParams::new(),
        }
    }
}
