//! SQLite driver built on `rusqlite`.
//!
//! Every connection opens a deferred transaction right away, so the work
//! done through its cursor is committed or rolled back as one unit.

use super::driver::{Cursor, Driver, DriverConnection};
use super::value::{SqlRow, SqlValue};
use crate::errors::{AppError, AppResult};
use log::{debug, error};
use rusqlite::types::{ToSqlOutput, ValueRef};
use rusqlite::{Connection, ToSql, params_from_iter};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection parameters for a file-backed SQLite store.
#[derive(Debug, Clone, PartialEq)]
pub struct SqliteConfig {
    pub database: PathBuf,
    pub busy_timeout: Duration,
}

impl SqliteConfig {
    pub fn new(database: impl AsRef<Path>) -> Self {
        Self {
            database: database.as_ref().to_path_buf(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDriver;

impl Driver for SqliteDriver {
    type Config = SqliteConfig;
    type Connection = SqliteConnection;

    fn connect(&self, config: &SqliteConfig) -> AppResult<SqliteConnection> {
        let conn = Connection::open(&config.database).map_err(|err| {
            error!(
                "event=db_open module=db status=error path={} error={}",
                config.database.display(),
                err
            );
            AppError::Connection(err)
        })?;
        conn.busy_timeout(config.busy_timeout)
            .map_err(AppError::Connection)?;
        conn.execute_batch("BEGIN DEFERRED")
            .map_err(AppError::Connection)?;

        debug!(
            "event=db_open module=db status=ok path={}",
            config.database.display()
        );
        Ok(SqliteConnection { conn })
    }
}

pub struct SqliteConnection {
    conn: Connection,
}

impl DriverConnection for SqliteConnection {
    fn cursor(&mut self) -> AppResult<Box<dyn Cursor + '_>> {
        Ok(Box::new(SqliteCursor {
            conn: &self.conn,
            rows: VecDeque::new(),
            rowcount: 0,
        }))
    }

    fn commit(&mut self) -> AppResult<()> {
        if self.conn.is_autocommit() {
            return Ok(());
        }
        self.conn.execute_batch("COMMIT")?;
        Ok(())
    }

    // SQLite may already have ended the transaction on some errors.
    fn rollback(&mut self) -> AppResult<()> {
        if self.conn.is_autocommit() {
            return Ok(());
        }
        self.conn.execute_batch("ROLLBACK")?;
        Ok(())
    }

    fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, err)| AppError::from(err))
    }
}

pub struct SqliteCursor<'c> {
    conn: &'c Connection,
    rows: VecDeque<SqlRow>,
    rowcount: usize,
}

impl Cursor for SqliteCursor<'_> {
    fn execute(&mut self, sql: &str, params: &[SqlValue]) -> AppResult<()> {
        self.rows.clear();
        self.rowcount = 0;

        let conn = self.conn;
        let mut stmt = conn.prepare(sql)?;
        let column_count = stmt.column_count();

        if column_count == 0 {
            self.rowcount = stmt.execute(params_from_iter(params.iter()))?;
            return Ok(());
        }

        let mut rows = stmt.query(params_from_iter(params.iter()))?;
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(column_count);
            for idx in 0..column_count {
                values.push(from_value_ref(row.get_ref(idx)?));
            }
            self.rows.push_back(values);
        }
        Ok(())
    }

    fn execute_many(
        &mut self,
        sql: &str,
        params: &mut dyn Iterator<Item = Vec<SqlValue>>,
    ) -> AppResult<usize> {
        self.rows.clear();
        self.rowcount = 0;

        let conn = self.conn;
        let mut stmt = conn.prepare_cached(sql)?;
        for set in params {
            self.rowcount += stmt.execute(params_from_iter(set.iter()))?;
        }
        Ok(self.rowcount)
    }

    fn fetch_one(&mut self) -> AppResult<Option<SqlRow>> {
        Ok(self.rows.pop_front())
    }

    fn fetch_all(&mut self) -> AppResult<Vec<SqlRow>> {
        Ok(self.rows.drain(..).collect())
    }

    fn rowcount(&self) -> usize {
        self.rowcount
    }

    fn close(self: Box<Self>) -> AppResult<()> {
        Ok(())
    }
}

impl ToSql for SqlValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlValue::Null => ToSqlOutput::Borrowed(ValueRef::Null),
            SqlValue::Integer(v) => ToSqlOutput::Borrowed(ValueRef::Integer(*v)),
            SqlValue::Real(v) => ToSqlOutput::Borrowed(ValueRef::Real(*v)),
            SqlValue::Text(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            SqlValue::Blob(v) => ToSqlOutput::Borrowed(ValueRef::Blob(v)),
        })
    }
}

fn from_value_ref(value: ValueRef<'_>) -> SqlValue {
    match value {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Integer(v) => SqlValue::Integer(v),
        ValueRef::Real(v) => SqlValue::Real(v),
        ValueRef::Text(v) => SqlValue::Text(String::from_utf8_lossy(v).into_owned()),
        ValueRef::Blob(v) => SqlValue::Blob(v.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ScopedConnection;
    use std::env;

    fn temp_db(name: &str) -> PathBuf {
        let path = env::temp_dir().join(format!(
            "{}_{}_bookholder_driver.sqlite",
            name,
            std::process::id()
        ));
        std::fs::remove_file(&path).ok();
        path
    }

    fn count(scope: &ScopedConnection<SqliteDriver>) -> i64 {
        scope
            .run(|cur| {
                cur.execute("SELECT COUNT(*) FROM t", &[])?;
                let row = cur.fetch_one()?.expect("count row");
                row[0].as_i64()
            })
            .unwrap()
    }

    #[test]
    fn work_is_committed_on_success() {
        let scope = ScopedConnection::new(SqliteDriver, SqliteConfig::new(temp_db("commit")));
        scope
            .run(|cur| cur.execute("CREATE TABLE t (v INTEGER)", &[]))
            .unwrap();
        scope
            .run(|cur| cur.execute("INSERT INTO t VALUES (?1)", &[SqlValue::Integer(7)]))
            .unwrap();

        assert_eq!(count(&scope), 1);
    }

    #[test]
    fn work_is_rolled_back_on_error() {
        let scope = ScopedConnection::new(SqliteDriver, SqliteConfig::new(temp_db("rollback")));
        scope
            .run(|cur| cur.execute("CREATE TABLE t (v INTEGER NOT NULL)", &[]))
            .unwrap();

        let err = scope
            .run(|cur| {
                cur.execute("INSERT INTO t VALUES (1)", &[])?;
                cur.execute("INSERT INTO t VALUES (NULL)", &[])
            })
            .unwrap_err();

        assert!(err.is_constraint_violation());
        assert_eq!(count(&scope), 0);
    }

    #[test]
    fn execute_many_reports_changed_rows() {
        let scope = ScopedConnection::new(SqliteDriver, SqliteConfig::new(temp_db("many")));
        scope
            .run(|cur| cur.execute("CREATE TABLE t (v INTEGER)", &[]))
            .unwrap();

        let inserted = scope
            .run(|cur| {
                let mut sets = (0..5).map(|i| vec![SqlValue::Integer(i)]);
                cur.execute_many("INSERT INTO t VALUES (?1)", &mut sets)
            })
            .unwrap();

        assert_eq!(inserted, 5);
        assert_eq!(count(&scope), 5);
    }

    #[test]
    fn unreachable_store_is_a_connection_error() {
        let missing = env::temp_dir()
            .join("bookholder_no_such_dir")
            .join("nested")
            .join("db.sqlite");
        let scope = ScopedConnection::new(SqliteDriver, SqliteConfig::new(missing));

        let err = scope.run(|_| Ok(())).unwrap_err();
        assert!(matches!(err, AppError::Connection(_)));
    }
}
