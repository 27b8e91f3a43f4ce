//! Integration tests for the persisted preference store.
//!
//! Tests cover:
//! - Defaults on a fresh store
//! - Theme and sign-in flag surviving a reopen
//! - Unrecognised stored values falling back to the defaults
//! - Out-of-order completion of queued writes
//! - Resetting the store

mod common;

use common::*;

#[tokio::test]
async fn test_fresh_store_loads_defaults() -> anyhow::Result<()> {
    // 1. Open a store in an empty directory
    let (store, temp_dir) = create_test_store().await;

    // 2. Nothing stored yet, so both flags are at their defaults
    let preference = store.load().await;
    assert_eq!(preference.theme, Theme::Light);
    assert!(!preference.authenticated);
    assert_eq!(preference, Preference::default());

    // 3. The database file lives inside the data directory
    assert!(store.db_file().starts_with(temp_dir.path()));
    assert!(store.db_file().exists());

    Ok(())
}

#[tokio::test]
async fn test_theme_survives_reopen() -> anyhow::Result<()> {
    // 1. Store the dark theme
    let (store, temp_dir) = create_test_store().await;
    store.set_theme(Theme::Dark).await?;
    store.close().await;

    // 2. Reopen, as on the next application start
    let reopened = reopen_store(temp_dir.path()).await;
    let preference = reopened.load().await;

    // 3. Theme is dark, sign-in flag untouched
    assert_eq!(preference.theme, Theme::Dark);
    assert!(!preference.authenticated);

    Ok(())
}

#[tokio::test]
async fn test_authenticated_round_trip() -> anyhow::Result<()> {
    // 1. Sign in and reopen
    let (store, temp_dir) = create_test_store().await;
    store.set_authenticated(true).await?;
    store.close().await;
    let reopened = reopen_store(temp_dir.path()).await;
    assert!(reopened.load().await.authenticated);

    // 2. Sign out writes "false" and reads back as signed out
    reopened.set_authenticated(false).await?;
    assert!(!reopened.load().await.authenticated);

    Ok(())
}

#[tokio::test]
async fn test_unrecognised_values_fall_back_to_defaults() -> anyhow::Result<()> {
    // 1. Write values the typed API would never produce
    let (store, _temp_dir) = create_test_store().await;
    write_raw_entry(store.db_file(), "theme", "solarized").await?;
    write_raw_entry(store.db_file(), "authenticated", "yes").await?;

    // 2. Both decode to the defaults instead of failing
    let preference = store.load().await;
    assert_eq!(preference.theme, Theme::Light);
    assert!(!preference.authenticated);

    // 3. Case matters: only the exact strings count
    write_raw_entry(store.db_file(), "theme", "Dark").await?;
    write_raw_entry(store.db_file(), "authenticated", "TRUE").await?;
    assert_eq!(store.load().await, Preference::default());

    Ok(())
}

#[test]
fn test_from_entries_decoding() {
    assert_eq!(Preference::from_entries(None, None), Preference::default());

    let signed_in_dark = Preference::from_entries(Some("dark"), Some("true"));
    assert_eq!(signed_in_dark.theme, Theme::Dark);
    assert!(signed_in_dark.authenticated);

    let garbage = Preference::from_entries(Some(""), Some("1"));
    assert_eq!(garbage, Preference::default());
}

#[tokio::test]
async fn test_latest_write_wins_when_completed_out_of_order() -> anyhow::Result<()> {
    // 1. Queue two theme writes; the second call is the most recent intent
    let (store, _temp_dir) = create_test_store().await;
    let first = store.set_theme(Theme::Dark);
    let second = store.set_theme(Theme::Light);

    // 2. Let the newer write land first, then the older one
    second.await?;
    first.await?;

    // 3. The stale write was skipped
    assert_eq!(store.load().await.theme, Theme::Light);

    Ok(())
}

#[tokio::test]
async fn test_writes_to_different_keys_do_not_interfere() -> anyhow::Result<()> {
    // 1. Queue writes to both keys and complete them in reverse order
    let (store, _temp_dir) = create_test_store().await;
    let theme = store.set_theme(Theme::Dark);
    let auth = store.set_authenticated(true);
    auth.await?;
    theme.await?;

    // 2. Both landed
    let preference = store.load().await;
    assert_eq!(preference.theme, Theme::Dark);
    assert!(preference.authenticated);

    Ok(())
}

#[tokio::test]
async fn test_reset_restores_defaults() -> anyhow::Result<()> {
    // 1. Store non-default values
    let (store, _temp_dir) = create_test_store().await;
    store.apply(PreferenceChange::Theme(Theme::Dark)).await?;
    store.apply(PreferenceChange::Authenticated(true)).await?;
    assert_ne!(store.load().await, Preference::default());

    // 2. Reset removes both entries
    store.reset().await?;
    assert_eq!(store.load().await, Preference::default());

    // 3. The store is still writable afterwards
    store.set_theme(Theme::Dark).await?;
    assert_eq!(store.load().await.theme, Theme::Dark);

    Ok(())
}

#[tokio::test]
async fn test_write_queued_before_reset_does_not_land() -> anyhow::Result<()> {
    // 1. Queue a theme write, then reset before it runs
    let (store, _temp_dir) = create_test_store().await;
    let queued = store.set_theme(Theme::Dark);
    store.reset().await?;

    // 2. The older write completes last and is skipped
    queued.await?;
    assert_eq!(store.load().await, Preference::default());

    // 3. Writes issued after the reset still land
    store.set_authenticated(true).await?;
    assert!(store.load().await.authenticated);

    Ok(())
}

#[test]
fn test_theme_parsing() {
    assert_eq!("dark".parse::<Theme>().ok(), Some(Theme::Dark));
    assert_eq!("light".parse::<Theme>().ok(), Some(Theme::Light));
    assert!("blue".parse::<Theme>().is_err());
    assert_eq!(Theme::Dark.to_string(), "dark");
}
