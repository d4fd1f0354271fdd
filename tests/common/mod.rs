use std::sync::Arc;
use tempfile::TempDir;

use fintrack_core::db::{self, DbPool};

/// Spins up a fresh migrated database under a temp directory. The returned
/// TempDir must outlive the pool, otherwise SQLite loses its file.
pub fn setup_test_db() -> (TempDir, Arc<DbPool>) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let data_dir = dir.path().to_str().expect("Temp path is not valid UTF-8");

    let db_path = db::init(data_dir).expect("Failed to initialize database");
    let pool = db::create_pool(&db_path).expect("Failed to create database pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    (dir, pool)
}
