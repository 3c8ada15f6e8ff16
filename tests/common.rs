#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bookholder::{BookRepository, NewBook, ScopedConnection, SqliteConfig, SqliteDriver};
use std::env;
use std::fs;
use std::path::PathBuf;

/// CLI command isolated from the user's configuration directory.
pub fn rbh() -> Command {
    let mut cmd = cargo_bin_cmd!("bookholder");
    cmd.env(bookholder::config::CONFIG_DIR_ENV, config_dir());
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn config_dir() -> PathBuf {
    let dir = env::temp_dir().join("bookholder_test_config");
    fs::create_dir_all(&dir).ok();
    dir
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bookholder.sqlite3", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Repository over a fresh database with the books table created.
pub fn fresh_repo(name: &str) -> BookRepository<SqliteDriver> {
    let db_path = setup_test_db(name);
    let out = temp_out(name, "csv");
    let repo = BookRepository::new(
        ScopedConnection::new(SqliteDriver, SqliteConfig::new(&db_path)),
        "books",
        out,
    )
    .expect("valid repository");
    repo.create_table().expect("create table");
    repo
}

pub fn book(isbn13: &str, pages: i64, year: i64, price: f64) -> NewBook {
    NewBook {
        title: format!("Book {isbn13}"),
        authors: "Anna Orlov".to_string(),
        isbn13: isbn13.to_string(),
        pages,
        year,
        price,
        discount: None,
    }
}
