use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering},
};

use anyhow::Context;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use tokio::sync::Mutex;

pub(super) struct StoreState {
    db_file: PathBuf,
    pool: SqlitePool,
    next_revision: AtomicU64,
    /// Last revision written per key.
    applied: Mutex<HashMap<&'static str, u64>>,
}

impl std::fmt::Debug for StoreState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreState")
            .field("db_file", &self.db_file)
            .field("next_revision", &self.next_revision.load(Ordering::Relaxed))
            .finish()
    }
}

impl StoreState {
    pub(super) async fn new<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        let db_file = db_file.as_ref().to_path_buf();

        if let Some(parent) = db_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let connect_opts = SqliteConnectOptions::new()
            .filename(&db_file)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_opts)
            .await
            .with_context(|| format!("Failed to open preference database {:?}", db_file))?;
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self {
            db_file,
            pool,
            next_revision: AtomicU64::new(0),
            applied: Mutex::new(HashMap::new()),
        })
    }

    pub(super) fn db_file(&self) -> &Path {
        &self.db_file
    }

    /// Revisions are handed out in call order, before the write is awaited.
    pub(super) fn next_revision(&self) -> u64 {
        self.next_revision.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Upserts `key`, unless a newer revision of the same key has already landed.
    /// Returns whether the write was applied.
    pub(super) async fn write(
        &self,
        key: &'static str,
        value: &str,
        revision: u64,
    ) -> anyhow::Result<bool> {
        let mut applied = self.applied.lock().await;
        if applied.get(key).is_some_and(|&last| last > revision) {
            return Ok(false);
        }
        sqlx::query(
            r#"INSERT INTO preference (key, value) VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to write preference {:?}", key))?;
        applied.insert(key, revision);
        Ok(true)
    }

    pub(super) async fn entries(&self) -> anyhow::Result<HashMap<String, String>> {
        let rows: Vec<(String, String)> = sqlx::query_as("SELECT key, value FROM preference")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().collect())
    }

    /// Deletes every entry and raises the floor of `keys` to `revision`, so
    /// writes issued before the clear can no longer land.
    pub(super) async fn clear(&self, keys: &[&'static str], revision: u64) -> anyhow::Result<()> {
        let mut applied = self.applied.lock().await;
        sqlx::query("DELETE FROM preference")
            .execute(&self.pool)
            .await
            .context("Failed to clear preferences")?;
        for &key in keys {
            let floor = applied.entry(key).or_insert(revision);
            *floor = (*floor).max(revision);
        }
        Ok(())
    }

    pub(super) async fn close(&self) {
        self.pool.close().await;
    }
}
