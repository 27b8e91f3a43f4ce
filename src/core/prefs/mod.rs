mod state;

use std::{collections::HashMap, fmt, future::Future, path::Path, str::FromStr, sync::Arc};

use serde::Serialize;
use state::StoreState;
use tracing::{debug, warn};

pub const THEME_KEY: &str = "theme";
pub const AUTHENTICATED_KEY: &str = "authenticated";
pub const DB_FILE_NAME: &str = "preferences.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(anyhow::anyhow!("Invalid theme value: {:?}", s)),
        }
    }
}

/// The two persisted user settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Preference {
    pub theme: Theme,
    pub authenticated: bool,
}

impl Preference {
    /// Decodes stored entries. Missing or unrecognised values fall back to the defaults.
    pub fn from_entries(theme: Option<&str>, authenticated: Option<&str>) -> Self {
        let theme = theme
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        let authenticated = authenticated == Some("true");
        Self {
            theme,
            authenticated,
        }
    }

    pub fn apply(&mut self, change: PreferenceChange) {
        match change {
            PreferenceChange::Theme(theme) => self.theme = theme,
            PreferenceChange::Authenticated(authenticated) => self.authenticated = authenticated,
        }
    }
}

/// A single preference mutation that still has to reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceChange {
    Theme(Theme),
    Authenticated(bool),
}

impl PreferenceChange {
    fn entry(self) -> (&'static str, &'static str) {
        match self {
            PreferenceChange::Theme(theme) => (THEME_KEY, theme.as_str()),
            PreferenceChange::Authenticated(true) => (AUTHENTICATED_KEY, "true"),
            PreferenceChange::Authenticated(false) => (AUTHENTICATED_KEY, "false"),
        }
    }
}

/// Durable home of [`Preference`]: a sqlite key-value table.
///
/// Cheap to clone; clones share one pool. Writes are sequenced by a revision
/// taken when the write is requested, so an older write that finishes late
/// never overwrites a newer one.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    state: Arc<StoreState>,
}

impl PreferenceStore {
    pub async fn open<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        let state = StoreState::new(db_file).await?;
        debug!(db_file = ?state.db_file(), "preference store opened");
        Ok(Self {
            state: Arc::new(state),
        })
    }

    /// Opens `preferences.db` inside `data_dir`.
    pub async fn open_in<P: AsRef<Path>>(data_dir: P) -> anyhow::Result<Self> {
        Self::open(data_dir.as_ref().join(DB_FILE_NAME)).await
    }

    pub fn db_file(&self) -> &Path {
        self.state.db_file()
    }

    /// Reads both flags. Never fails: read errors are logged and yield the defaults.
    pub async fn load(&self) -> Preference {
        match self.state.entries().await {
            Ok(entries) => decode(&entries),
            Err(e) => {
                warn!(error = %e, "failed to read preferences, using defaults");
                Preference::default()
            }
        }
    }

    pub fn set_theme(&self, theme: Theme) -> impl Future<Output = anyhow::Result<()>> + 'static {
        self.apply(PreferenceChange::Theme(theme))
    }

    pub fn set_authenticated(
        &self,
        authenticated: bool,
    ) -> impl Future<Output = anyhow::Result<()>> + 'static {
        self.apply(PreferenceChange::Authenticated(authenticated))
    }

    /// Persists one change. The revision is taken now; the returned future can run later.
    pub fn apply(
        &self,
        change: PreferenceChange,
    ) -> impl Future<Output = anyhow::Result<()>> + 'static {
        let state = self.state.clone();
        let revision = state.next_revision();
        async move {
            let (key, value) = change.entry();
            let applied = state.write(key, value, revision).await?;
            if applied {
                debug!(key, value, revision, "preference persisted");
            } else {
                debug!(key, value, revision, "stale preference write skipped");
            }
            Ok(())
        }
    }

    /// Removes every stored entry; the next `load` yields the defaults.
    /// Like `apply`, the revision is taken now, so writes issued earlier are dropped.
    pub fn reset(&self) -> impl Future<Output = anyhow::Result<()>> + 'static {
        let state = self.state.clone();
        let revision = state.next_revision();
        async move {
            state
                .clear(&[THEME_KEY, AUTHENTICATED_KEY], revision)
                .await?;
            debug!(revision, "preferences reset");
            Ok(())
        }
    }

    pub async fn close(&self) {
        self.state.close().await;
    }
}

fn decode(entries: &HashMap<String, String>) -> Preference {
    Preference::from_entries(
        entries.get(THEME_KEY).map(String::as_str),
        entries.get(AUTHENTICATED_KEY).map(String::as_str),
    )
}
