//! Transactional scope around one connection + cursor pair.
//!
//! # Invariants
//! - A connection is opened per unit of work and closed before `run` returns.
//! - The cursor is closed before the transaction is finished.
//! - `Ok` from the work commits, `Err` rolls back.
//! - A failed connect releases nothing because nothing was acquired.

use super::driver::{Cursor, Driver, DriverConnection};
use crate::errors::AppResult;
use log::{debug, error, warn};
use std::time::Instant;

pub struct ScopedConnection<D: Driver> {
    driver: D,
    config: D::Config,
}

impl<D: Driver> ScopedConnection<D> {
    pub fn new(driver: D, config: D::Config) -> Self {
        Self { driver, config }
    }

    /// Runs `work` inside a fresh connection and transaction.
    ///
    /// # Errors
    /// - Connect failures propagate untouched.
    /// - The work error wins over any rollback or close failure, which are
    ///   only logged.
    /// - A commit failure propagates after the connection is closed.
    pub fn run<T, F>(&self, work: F) -> AppResult<T>
    where
        F: FnOnce(&mut dyn Cursor) -> AppResult<T>,
    {
        let started_at = Instant::now();

        let mut conn = match self.driver.connect(&self.config) {
            Ok(conn) => conn,
            Err(err) => {
                error!("event=unit_of_work module=db status=error phase=connect error={err}");
                return Err(err);
            }
        };

        let outcome = match with_cursor(&mut conn, work) {
            Ok(value) => match conn.commit() {
                Ok(()) => {
                    debug!("event=unit_of_work module=db status=ok phase=commit");
                    Ok(value)
                }
                Err(err) => {
                    error!("event=unit_of_work module=db status=error phase=commit error={err}");
                    Err(err)
                }
            },
            Err(err) => {
                match conn.rollback() {
                    Ok(()) => debug!(
                        "event=unit_of_work module=db status=ok phase=rollback cause={err}"
                    ),
                    Err(rb_err) => warn!(
                        "event=unit_of_work module=db status=error phase=rollback error={rb_err}"
                    ),
                }
                Err(err)
            }
        };

        let result = match (outcome, conn.close()) {
            (outcome, Ok(())) => outcome,
            (Ok(_), Err(close_err)) => Err(close_err),
            (Err(err), Err(close_err)) => {
                warn!("event=unit_of_work module=db status=error phase=close error={close_err}");
                Err(err)
            }
        };

        debug!(
            "event=unit_of_work module=db status={} duration_ms={}",
            if result.is_ok() { "ok" } else { "error" },
            started_at.elapsed().as_millis()
        );
        result
    }
}

fn with_cursor<C, T, F>(conn: &mut C, work: F) -> AppResult<T>
where
    C: DriverConnection,
    F: FnOnce(&mut dyn Cursor) -> AppResult<T>,
{
    let mut cursor = conn.cursor()?;
    let result = work(&mut *cursor);

    match (result, cursor.close()) {
        (result, Ok(())) => result,
        (Ok(_), Err(close_err)) => Err(close_err),
        (Err(err), Err(close_err)) => {
            warn!("event=unit_of_work module=db status=error phase=cursor_close error={close_err}");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::value::{SqlRow, SqlValue};
    use crate::errors::AppError;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Journal = Rc<RefCell<Vec<&'static str>>>;

    #[derive(Clone, Default)]
    struct Script {
        fail_connect: bool,
        fail_commit: bool,
        fail_close: bool,
    }

    struct RecordingDriver {
        journal: Journal,
    }

    struct RecordingConnection {
        journal: Journal,
        script: Script,
    }

    struct RecordingCursor {
        journal: Journal,
    }

    fn io_error(msg: &str) -> AppError {
        AppError::Io(std::io::Error::other(msg.to_string()))
    }

    impl Driver for RecordingDriver {
        type Config = Script;
        type Connection = RecordingConnection;

        fn connect(&self, config: &Script) -> AppResult<RecordingConnection> {
            if config.fail_connect {
                return Err(io_error("unreachable"));
            }
            self.journal.borrow_mut().push("connect");
            Ok(RecordingConnection {
                journal: self.journal.clone(),
                script: config.clone(),
            })
        }
    }

    impl DriverConnection for RecordingConnection {
        fn cursor(&mut self) -> AppResult<Box<dyn Cursor + '_>> {
            self.journal.borrow_mut().push("cursor");
            Ok(Box::new(RecordingCursor {
                journal: self.journal.clone(),
            }))
        }

        fn commit(&mut self) -> AppResult<()> {
            self.journal.borrow_mut().push("commit");
            if self.script.fail_commit {
                return Err(io_error("commit failed"));
            }
            Ok(())
        }

        fn rollback(&mut self) -> AppResult<()> {
            self.journal.borrow_mut().push("rollback");
            Ok(())
        }

        fn close(self) -> AppResult<()> {
            self.journal.borrow_mut().push("close");
            if self.script.fail_close {
                return Err(io_error("close failed"));
            }
            Ok(())
        }
    }

    impl Cursor for RecordingCursor {
        fn execute(&mut self, _sql: &str, _params: &[SqlValue]) -> AppResult<()> {
            self.journal.borrow_mut().push("execute");
            Ok(())
        }

        fn execute_many(
            &mut self,
            _sql: &str,
            params: &mut dyn Iterator<Item = Vec<SqlValue>>,
        ) -> AppResult<usize> {
            Ok(params.count())
        }

        fn fetch_one(&mut self) -> AppResult<Option<SqlRow>> {
            Ok(None)
        }

        fn fetch_all(&mut self) -> AppResult<Vec<SqlRow>> {
            Ok(Vec::new())
        }

        fn rowcount(&self) -> usize {
            0
        }

        fn close(self: Box<Self>) -> AppResult<()> {
            self.journal.borrow_mut().push("cursor_close");
            Ok(())
        }
    }

    fn scoped(script: Script) -> (ScopedConnection<RecordingDriver>, Journal) {
        let journal = Journal::default();
        let driver = RecordingDriver {
            journal: journal.clone(),
        };
        (ScopedConnection::new(driver, script), journal)
    }

    #[test]
    fn successful_work_commits_then_releases() {
        let (scope, journal) = scoped(Script::default());

        let value = scope
            .run(|cursor| {
                cursor.execute("SELECT 1", &[])?;
                Ok(42)
            })
            .unwrap();

        assert_eq!(value, 42);
        assert_eq!(
            *journal.borrow(),
            vec!["connect", "cursor", "execute", "cursor_close", "commit", "close"]
        );
    }

    #[test]
    fn failing_work_rolls_back_and_keeps_its_error() {
        let (scope, journal) = scoped(Script::default());

        let err = scope
            .run(|_| -> AppResult<()> { Err(AppError::InvalidArgument("boom".into())) })
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert_eq!(
            *journal.borrow(),
            vec!["connect", "cursor", "cursor_close", "rollback", "close"]
        );
    }

    #[test]
    fn connect_failure_touches_nothing() {
        let (scope, journal) = scoped(Script {
            fail_connect: true,
            ..Script::default()
        });

        let mut called = false;
        let err = scope
            .run(|_| {
                called = true;
                Ok(())
            })
            .unwrap_err();

        assert!(matches!(err, AppError::Io(_)));
        assert!(!called);
        assert!(journal.borrow().is_empty());
    }

    #[test]
    fn commit_failure_still_closes_the_connection() {
        let (scope, journal) = scoped(Script {
            fail_commit: true,
            ..Script::default()
        });

        let err = scope.run(|_| Ok(())).unwrap_err();

        assert!(err.to_string().contains("commit failed"));
        assert_eq!(journal.borrow().last(), Some(&"close"));
    }

    #[test]
    fn close_failure_surfaces_only_after_success() {
        let (scope, _) = scoped(Script {
            fail_close: true,
            ..Script::default()
        });
        let err = scope.run(|_| Ok(())).unwrap_err();
        assert!(err.to_string().contains("close failed"));

        let (scope, _) = scoped(Script {
            fail_close: true,
            ..Script::default()
        });
        let err = scope
            .run(|_| -> AppResult<()> { Err(AppError::InvalidArgument("first".into())) })
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }
}
