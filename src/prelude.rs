//! Convenient imports for common functionality.

pub use crate::adapter::{AnyConnWrapper, DatabaseAdapter, ExecOutcome};
pub use crate::config::DbConfig;
pub use crate::error::SqlFacadeError;
pub use crate::facade::Database;
pub use crate::params::NamedParams;
pub use crate::query::QueryAndParams;
pub use crate::results::{DbRow, ResultSet};
pub use crate::types::RowValues;

#[cfg(feature = "sqlite")]
pub use crate::sqlite::SqliteAdapter;
