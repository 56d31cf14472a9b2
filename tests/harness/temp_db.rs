use std::path::{Path, PathBuf};

use quotebook::adapter::outbound::sqlite::database::connection::{
    create_pool, run_migrations, DbPool,
};
use quotebook::adapter::outbound::sqlite::store::SqliteQuoteStore;
use tempfile::TempDir;

/// Migrated SQLite database in a temporary directory.
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("quotes.db");
        let pool = create_pool(&path.to_string_lossy()).expect("create sqlite pool");
        run_migrations(&pool).expect("run migrations");

        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn store(&self, collection: &str) -> SqliteQuoteStore {
        SqliteQuoteStore::new(self.pool.clone(), collection)
    }
}
