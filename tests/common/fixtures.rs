use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use zenno::{PreferenceStore, ProjectRecord, data::projects::detailed_projects};

/// Opens a PreferenceStore inside a fresh temporary directory.
/// Returns both the store and the directory (which must be kept alive).
pub async fn create_test_store() -> (PreferenceStore, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let store = PreferenceStore::open_in(dir.path())
        .await
        .expect("Failed to open test store");
    (store, dir)
}

/// Reopens the store living in `dir`, as a restarted application would.
pub async fn reopen_store(dir: &Path) -> PreferenceStore {
    PreferenceStore::open_in(dir)
        .await
        .expect("Failed to reopen test store")
}

/// Writes a raw entry behind the store's back, bypassing its typed API.
pub async fn write_raw_entry(db_file: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let pool = SqlitePool::connect_with(SqliteConnectOptions::new().filename(db_file)).await?;
    sqlx::query(
        "INSERT INTO preference (key, value) VALUES ($1, $2) \
         ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
    )
    .bind(key)
    .bind(value)
    .execute(&pool)
    .await?;
    pool.close().await;
    Ok(())
}

/// One of the sample projects shown on the skills & projects page.
pub fn sample_project(id: u32) -> ProjectRecord {
    detailed_projects()
        .into_iter()
        .find(|p| p.id == id)
        .expect("No sample project with that id")
}
