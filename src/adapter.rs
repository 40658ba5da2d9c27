use crate::error::SqlFacadeError;
use crate::params::NamedParams;
use crate::results::ResultSet;

/// Wrapper around a raw database connection for escape-hatch use.
///
/// `connection()` hands this out so callers can reach driver features the
/// facade does not cover, without the adapter giving up ownership.
pub enum AnyConnWrapper<'a> {
    /// `SQLite` database connection
    #[cfg(feature = "sqlite")]
    Sqlite(&'a mut rusqlite::Connection),
    #[doc(hidden)]
    #[cfg(not(feature = "sqlite"))]
    _Phantom(std::marker::PhantomData<&'a ()>),
}

/// Outcome of executing a statement via [`DatabaseAdapter::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecOutcome {
    /// Rows affected, as reported by the driver.
    pub rows_affected: usize,
}

/// Capability boundary over a concrete database driver.
///
/// An adapter owns exactly one connection. Every operation is synchronous and
/// blocks until the driver completes it; one adapter instance serves one
/// logical session at a time. Implementations exist per engine and are
/// injected into [`Database`](crate::facade::Database) at construction.
pub trait DatabaseAdapter: Send {
    /// Establish the connection from the adapter's configuration.
    ///
    /// # Errors
    /// Returns `SqlFacadeError::ConnectionError` (driver message preserved)
    /// if the driver cannot establish or authenticate the connection.
    fn connect(&mut self) -> Result<(), SqlFacadeError>;

    /// Raw connection handle for advanced use. No validation is performed on
    /// what callers do with it.
    ///
    /// # Errors
    /// Returns `SqlFacadeError::ConnectionError` if `connect` has not
    /// succeeded yet.
    fn connection(&mut self) -> Result<AnyConnWrapper<'_>, SqlFacadeError>;

    /// Prepare `sql`, bind every entry of `params` by name, and execute it.
    ///
    /// The SQL must contain exactly the placeholders named in `params`; the
    /// driver rejects a mismatch.
    ///
    /// # Errors
    /// Returns `SqlFacadeError::QueryError` (driver message preserved) on
    /// prepare, bind, or execute failure.
    fn run(&mut self, sql: &str, params: &NamedParams) -> Result<ExecOutcome, SqlFacadeError>;

    /// Same preparation and binding as [`run`](Self::run), but fetches every
    /// resulting row. An empty result is an empty [`ResultSet`].
    ///
    /// # Errors
    /// Returns `SqlFacadeError::QueryError` on prepare, bind, or execute
    /// failure.
    fn query_to_array(
        &mut self,
        sql: &str,
        params: &NamedParams,
    ) -> Result<ResultSet, SqlFacadeError>;

    /// The most recent auto-generated row id on this connection, as reported
    /// by the driver. Driver-defined when no insert has occurred.
    ///
    /// # Errors
    /// Returns `SqlFacadeError::ConnectionError` if not connected.
    fn last_insert_id(&mut self) -> Result<i64, SqlFacadeError>;

    /// Begin a transaction. Nesting is not supported.
    ///
    /// # Errors
    /// Returns `SqlFacadeError::QueryError` if a transaction is already open
    /// or the driver refuses.
    fn begin_transaction(&mut self) -> Result<(), SqlFacadeError>;

    /// Commit the open transaction.
    ///
    /// # Errors
    /// Returns `SqlFacadeError::QueryError` if no transaction is open or the
    /// driver refuses.
    fn commit(&mut self) -> Result<(), SqlFacadeError>;

    /// Roll back the open transaction.
    ///
    /// # Errors
    /// Returns `SqlFacadeError::QueryError` if no transaction is open or the
    /// driver refuses.
    fn roll_back(&mut self) -> Result<(), SqlFacadeError>;

    /// Dialect fragment placed immediately after `INSERT` when duplicate-key
    /// failures should be ignored.
    fn insert_ignore_keyword(&self) -> &'static str {
        "IGNORE"
    }
}

impl DatabaseAdapter for Box<dyn DatabaseAdapter> {
    fn connect(&mut self) -> Result<(), SqlFacadeError> {
        (**self).connect()
    }

    fn connection(&mut self) -> Result<AnyConnWrapper<'_>, SqlFacadeError> {
        (**self).connection()
    }

    fn run(&mut self, sql: &str, params: &NamedParams) -> Result<ExecOutcome, SqlFacadeError> {
        (**self).run(sql, params)
    }

    fn query_to_array(
        &mut self,
        sql: &str,
        params: &NamedParams,
    ) -> Result<ResultSet, SqlFacadeError> {
        (**self).query_to_array(sql, params)
    }

    fn last_insert_id(&mut self) -> Result<i64, SqlFacadeError> {
        (**self).last_insert_id()
    }

    fn begin_transaction(&mut self) -> Result<(), SqlFacadeError> {
        (**self).begin_transaction()
    }

    fn commit(&mut self) -> Result<(), SqlFacadeError> {
        (**self).commit()
    }

    fn roll_back(&mut self) -> Result<(), SqlFacadeError> {
        (**self).roll_back()
    }

    fn insert_ignore_keyword(&self) -> &'static str {
        (**self).insert_ignore_keyword()
    }
}
