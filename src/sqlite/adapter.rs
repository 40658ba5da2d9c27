use rusqlite::Connection;
use tracing::debug;

use crate::adapter::{AnyConnWrapper, DatabaseAdapter, ExecOutcome};
use crate::config::DbConfig;
use crate::error::SqlFacadeError;
use crate::params::NamedParams;
use crate::results::ResultSet;

use super::params::SqliteParams;
use super::query::build_result_set;

/// Implicit transaction state of the single connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TxState {
    Idle,
    Open,
}

/// Reference adapter: one `SQLite` connection via rusqlite.
///
/// `DbConfig::database` is the filesystem path (`:memory:` for an in-memory
/// database); the remaining config keys are ignored. The connection is opened
/// by [`connect`](DatabaseAdapter::connect) and held for the adapter's
/// lifetime.
pub struct SqliteAdapter {
    config: DbConfig,
    conn: Option<Connection>,
    tx_state: TxState,
}

impl SqliteAdapter {
    #[must_use]
    pub fn new(config: DbConfig) -> Self {
        Self {
            config,
            conn: None,
            tx_state: TxState::Idle,
        }
    }

    /// Adapter over a fresh in-memory database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(DbConfig::sqlite_path(":memory:"))
    }

    fn conn_mut(&mut self) -> Result<&mut Connection, SqlFacadeError> {
        self.conn.as_mut().ok_or_else(|| {
            SqlFacadeError::ConnectionError("not connected; call connect() first".to_string())
        })
    }
}

fn query_error(e: &rusqlite::Error) -> SqlFacadeError {
    SqlFacadeError::QueryError(e.to_string())
}

impl DatabaseAdapter for SqliteAdapter {
    fn connect(&mut self) -> Result<(), SqlFacadeError> {
        if self.config.database.is_empty() {
            return Err(SqlFacadeError::ConfigError(
                "sqlite database path is empty".to_string(),
            ));
        }
        let conn = Connection::open(&self.config.database)
            .map_err(|e| SqlFacadeError::ConnectionError(e.to_string()))?;
        debug!(path = %self.config.database, "sqlite connection opened");
        self.conn = Some(conn);
        self.tx_state = TxState::Idle;
        Ok(())
    }

    fn connection(&mut self) -> Result<AnyConnWrapper<'_>, SqlFacadeError> {
        Ok(AnyConnWrapper::Sqlite(self.conn_mut()?))
    }

    fn run(&mut self, sql: &str, params: &NamedParams) -> Result<ExecOutcome, SqlFacadeError> {
        let converted = SqliteParams::convert(params);
        let conn = self.conn_mut()?;
        debug!(sql, params = params.len(), "execute statement");
        let mut stmt = conn.prepare(sql).map_err(|e| query_error(&e))?;
        let rows_affected = stmt
            .execute(&converted.as_bind_refs()[..])
            .map_err(|e| query_error(&e))?;
        Ok(ExecOutcome { rows_affected })
    }

    fn query_to_array(
        &mut self,
        sql: &str,
        params: &NamedParams,
    ) -> Result<ResultSet, SqlFacadeError> {
        let converted = SqliteParams::convert(params);
        let conn = self.conn_mut()?;
        debug!(sql, params = params.len(), "execute query");
        let mut stmt = conn.prepare(sql).map_err(|e| query_error(&e))?;
        build_result_set(&mut stmt, &converted)
    }

    fn last_insert_id(&mut self) -> Result<i64, SqlFacadeError> {
        Ok(self.conn_mut()?.last_insert_rowid())
    }

    fn begin_transaction(&mut self) -> Result<(), SqlFacadeError> {
        if self.tx_state == TxState::Open {
            return Err(SqlFacadeError::QueryError(
                "transaction already open".to_string(),
            ));
        }
        self.conn_mut()?
            .execute_batch("BEGIN")
            .map_err(|e| query_error(&e))?;
        self.tx_state = TxState::Open;
        debug!("transaction begun");
        Ok(())
    }

    fn commit(&mut self) -> Result<(), SqlFacadeError> {
        if self.tx_state != TxState::Open {
            return Err(SqlFacadeError::QueryError(
                "no open transaction to commit".to_string(),
            ));
        }
        self.conn_mut()?
            .execute_batch("COMMIT")
            .map_err(|e| query_error(&e))?;
        self.tx_state = TxState::Idle;
        debug!("transaction committed");
        Ok(())
    }

    fn roll_back(&mut self) -> Result<(), SqlFacadeError> {
        if self.tx_state != TxState::Open {
            return Err(SqlFacadeError::QueryError(
                "no open transaction to roll back".to_string(),
            ));
        }
        self.conn_mut()?
            .execute_batch("ROLLBACK")
            .map_err(|e| query_error(&e))?;
        self.tx_state = TxState::Idle;
        debug!("transaction rolled back");
        Ok(())
    }

    fn insert_ignore_keyword(&self) -> &'static str {
        "OR IGNORE"
    }
}
