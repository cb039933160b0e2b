//! SQLite Persistence

mod bookmark_repo;
mod database;

pub use bookmark_repo::SqliteBookmarkRepository;
pub use database::{create_pool, run_migrations, DatabaseConfig, DbPool};
