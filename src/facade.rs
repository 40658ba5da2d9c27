use crate::adapter::{AnyConnWrapper, DatabaseAdapter, ExecOutcome};
use crate::builder;
use crate::error::SqlFacadeError;
use crate::params::NamedParams;
use crate::results::ResultSet;
use crate::types::RowValues;

/// Driver-agnostic database facade.
///
/// Holds one adapter, builds SQL text and parameter sets for the common CRUD
/// shapes, and delegates execution. Raw query and transaction calls pass
/// through to the adapter unchanged.
///
/// ```rust,no_run
/// use sql_facade::prelude::*;
/// use sql_facade::sqlite::SqliteAdapter;
///
/// # fn demo() -> Result<(), SqlFacadeError> {
/// let mut db = Database::new(SqliteAdapter::new(DbConfig::sqlite_path("app.db")));
/// db.connect()?;
///
/// let id = db.insert_row(
///     "users",
///     &NamedParams::new()
///         .with("name", RowValues::Text("John Doe".into()))
///         .with("email", RowValues::Text("john.doe@example.org".into())),
///     false,
/// )?;
///
/// let rows = db.get_row_where("users", "id", RowValues::Int(id))?;
/// # let _ = rows;
/// # Ok(())
/// # }
/// ```
pub struct Database<A> {
    adapter: A,
}

impl<A: DatabaseAdapter> Database<A> {
    /// Wrap an adapter. The adapter is injected fully configured; call
    /// [`connect`](Self::connect) before issuing statements.
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// Direct access to the adapter.
    pub fn adapter(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Connect to the database.
    ///
    /// # Errors
    /// Propagates `SqlFacadeError::ConnectionError` from the adapter.
    pub fn connect(&mut self) -> Result<(), SqlFacadeError> {
        self.adapter.connect()
    }

    /// Raw connection handle for advanced use.
    ///
    /// # Errors
    /// Propagates `SqlFacadeError::ConnectionError` if not connected.
    pub fn connection(&mut self) -> Result<AnyConnWrapper<'_>, SqlFacadeError> {
        self.adapter.connection()
    }

    /// Run a statement with named parameters.
    ///
    /// # Errors
    /// Propagates `SqlFacadeError::QueryError` from the adapter.
    pub fn run(
        &mut self,
        sql: &str,
        params: &NamedParams,
    ) -> Result<ExecOutcome, SqlFacadeError> {
        self.adapter.run(sql, params)
    }

    /// Run a query and return the results as a [`ResultSet`].
    ///
    /// # Errors
    /// Propagates `SqlFacadeError::QueryError` from the adapter.
    pub fn query_to_array(
        &mut self,
        sql: &str,
        params: &NamedParams,
    ) -> Result<ResultSet, SqlFacadeError> {
        self.adapter.query_to_array(sql, params)
    }

    /// Select all rows matching every equality in `where_map`, in the
    /// mapping's insertion order.
    ///
    /// # Errors
    /// `SqlFacadeError::ParameterError` if `where_map` is empty; otherwise
    /// propagates adapter errors.
    pub fn get_row_where_array(
        &mut self,
        table: &str,
        where_map: &NamedParams,
    ) -> Result<ResultSet, SqlFacadeError> {
        let qp = builder::select_where(table, where_map)?;
        self.adapter.query_to_array(&qp.query, &qp.params)
    }

    /// Single-condition shortcut for [`get_row_where_array`](Self::get_row_where_array).
    ///
    /// # Errors
    /// Propagates adapter errors.
    pub fn get_row_where(
        &mut self,
        table: &str,
        column: &str,
        value: RowValues,
    ) -> Result<ResultSet, SqlFacadeError> {
        self.get_row_where_array(table, &NamedParams::single(column, value))
    }

    /// Insert one row and return the new auto-generated id.
    ///
    /// With `ignore_duplicate`, duplicate-key failures are suppressed using
    /// the adapter's dialect fragment; the returned id is then only
    /// meaningful if the row was actually inserted.
    ///
    /// # Errors
    /// `SqlFacadeError::ParameterError` if `row` is empty; otherwise
    /// propagates adapter errors.
    pub fn insert_row(
        &mut self,
        table: &str,
        row: &NamedParams,
        ignore_duplicate: bool,
    ) -> Result<i64, SqlFacadeError> {
        let keyword = ignore_duplicate.then(|| self.adapter.insert_ignore_keyword());
        let qp = builder::insert(table, row, keyword)?;
        self.adapter.run(&qp.query, &qp.params)?;
        self.adapter.last_insert_id()
    }

    /// Insert several rows in one statement and return the last insert id.
    ///
    /// The column list comes from the first row; every row must share it.
    ///
    /// # Errors
    /// `SqlFacadeError::ParameterError` if `rows` is empty or ragged;
    /// otherwise propagates adapter errors.
    pub fn insert_row_batch(
        &mut self,
        table: &str,
        rows: &[NamedParams],
        ignore_duplicate: bool,
    ) -> Result<i64, SqlFacadeError> {
        let keyword = ignore_duplicate.then(|| self.adapter.insert_ignore_keyword());
        let qp = builder::insert_batch(table, rows, keyword)?;
        self.adapter.run(&qp.query, &qp.params)?;
        self.adapter.last_insert_id()
    }

    /// Update every row matching `where_map`, setting the columns in `row`.
    ///
    /// # Errors
    /// `SqlFacadeError::ParameterError` if either mapping is empty; otherwise
    /// propagates adapter errors.
    pub fn update_row_where_array(
        &mut self,
        table: &str,
        row: &NamedParams,
        where_map: &NamedParams,
    ) -> Result<ExecOutcome, SqlFacadeError> {
        let qp = builder::update_where(table, row, where_map)?;
        self.adapter.run(&qp.query, &qp.params)
    }

    /// Single-condition shortcut for [`update_row_where_array`](Self::update_row_where_array).
    ///
    /// # Errors
    /// Propagates adapter errors.
    pub fn update_row_where(
        &mut self,
        table: &str,
        row: &NamedParams,
        column: &str,
        value: RowValues,
    ) -> Result<ExecOutcome, SqlFacadeError> {
        self.update_row_where_array(table, row, &NamedParams::single(column, value))
    }

    /// Delete every row matching `where_map`.
    ///
    /// # Errors
    /// `SqlFacadeError::ParameterError` if `where_map` is empty; otherwise
    /// propagates adapter errors.
    pub fn delete_where_array(
        &mut self,
        table: &str,
        where_map: &NamedParams,
    ) -> Result<ExecOutcome, SqlFacadeError> {
        let qp = builder::delete_where(table, where_map)?;
        self.adapter.run(&qp.query, &qp.params)
    }

    /// Single-condition shortcut for [`delete_where_array`](Self::delete_where_array).
    ///
    /// # Errors
    /// Propagates adapter errors.
    pub fn delete_where(
        &mut self,
        table: &str,
        column: &str,
        value: RowValues,
    ) -> Result<ExecOutcome, SqlFacadeError> {
        self.delete_where_array(table, &NamedParams::single(column, value))
    }

    /// Last auto-generated id on this connection.
    ///
    /// # Errors
    /// Propagates adapter errors.
    pub fn last_insert_id(&mut self) -> Result<i64, SqlFacadeError> {
        self.adapter.last_insert_id()
    }

    /// Begin a transaction.
    ///
    /// # Errors
    /// Propagates adapter errors.
    pub fn begin_transaction(&mut self) -> Result<(), SqlFacadeError> {
        self.adapter.begin_transaction()
    }

    /// Commit the open transaction.
    ///
    /// # Errors
    /// Propagates adapter errors.
    pub fn commit(&mut self) -> Result<(), SqlFacadeError> {
        self.adapter.commit()
    }

    /// Roll back the open transaction.
    ///
    /// # Errors
    /// Propagates adapter errors.
    pub fn roll_back(&mut self) -> Result<(), SqlFacadeError> {
        self.adapter.roll_back()
    }
}
