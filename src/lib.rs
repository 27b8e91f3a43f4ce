pub mod core;
pub mod data;
pub mod models;

pub use crate::core::nav::{ActiveView, Coordinator, NavRequest, NavigationState, PageId, View};
pub use crate::core::prefs::{Preference, PreferenceChange, PreferenceStore, Theme};
pub use models::{ContactId, ContactRecord, ProjectRecord};

#[cfg(feature = "gui")]
pub mod gui;
