//! Thin synchronous database access facade.
//!
//! One [`Database`] wraps one [`DatabaseAdapter`], which owns a single driver
//! connection. The facade builds parameterized CRUD statements (named `:name`
//! placeholders only) from associative input and delegates execution; raw
//! query and transaction calls pass through unchanged. No pooling, no query
//! planning, no async.
//!
//! ```rust
//! use sql_facade::prelude::*;
//! use sql_facade::sqlite::SqliteAdapter;
//!
//! # fn main() -> Result<(), SqlFacadeError> {
//! let mut db = Database::new(SqliteAdapter::in_memory());
//! db.connect()?;
//! db.run(
//!     "CREATE TABLE users (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT)",
//!     &NamedParams::new(),
//! )?;
//!
//! let id = db.insert_row(
//!     "users",
//!     &NamedParams::single("name", RowValues::Text("alice".into())),
//!     false,
//! )?;
//! let rows = db.get_row_where("users", "id", RowValues::Int(id))?;
//! assert_eq!(rows.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod builder;
pub mod config;
pub mod error;
pub mod facade;
pub mod params;
pub mod prelude;
pub mod query;
pub mod results;
pub mod types;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use adapter::{AnyConnWrapper, DatabaseAdapter, ExecOutcome};
pub use config::DbConfig;
pub use error::SqlFacadeError;
pub use facade::Database;
pub use params::NamedParams;
pub use query::QueryAndParams;
pub use results::{DbRow, ResultSet};
pub use types::RowValues;
