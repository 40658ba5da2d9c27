// Query results: one row type plus the ordered collection returned by
// `query_to_array`. Column names and the name-to-index map are shared across
// all rows of a result set behind `Arc`.

mod result_set;
mod row;

pub use result_set::ResultSet;
pub use row::DbRow;
