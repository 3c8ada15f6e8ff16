//! Driver capability boundary.
//!
//! A storage backend is usable by [`ScopedConnection`](super::ScopedConnection)
//! once it can connect from a configuration value, hand out a cursor,
//! commit, roll back and close. Nothing above this module knows which
//! backend is in use.

use super::value::{SqlRow, SqlValue};
use crate::errors::AppResult;

/// Opens connections from a driver-specific configuration.
pub trait Driver {
    type Config: Clone;
    type Connection: DriverConnection;

    fn connect(&self, config: &Self::Config) -> AppResult<Self::Connection>;
}

/// An open connection with one pending transaction.
pub trait DriverConnection {
    fn cursor(&mut self) -> AppResult<Box<dyn Cursor + '_>>;

    fn commit(&mut self) -> AppResult<()>;

    fn rollback(&mut self) -> AppResult<()>;

    fn close(self) -> AppResult<()>;
}

/// Statement execution handle borrowed from a connection.
///
/// Result rows of the last `execute` are buffered and drained by the
/// `fetch_*` methods.
pub trait Cursor {
    fn execute(&mut self, sql: &str, params: &[SqlValue]) -> AppResult<()>;

    /// Runs `sql` once per parameter set and returns the total number of
    /// changed rows.
    fn execute_many(
        &mut self,
        sql: &str,
        params: &mut dyn Iterator<Item = Vec<SqlValue>>,
    ) -> AppResult<usize>;

    fn fetch_one(&mut self) -> AppResult<Option<SqlRow>>;

    fn fetch_all(&mut self) -> AppResult<Vec<SqlRow>>;

    /// Rows changed by the last `execute`/`execute_many`.
    fn rowcount(&self) -> usize;

    fn close(self: Box<Self>) -> AppResult<()>;
}
