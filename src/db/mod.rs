//! Storage layer: driver capability traits, the scoped unit-of-work wrapper
//! and the SQLite driver.

pub mod driver;
pub mod scoped;
pub mod sqlite;
pub mod value;

pub use driver::{Cursor, Driver, DriverConnection};
pub use scoped::ScopedConnection;
pub use sqlite::{SqliteConfig, SqliteDriver};
pub use value::{SqlRow, SqlValue};
