mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from zenno for tests
pub use zenno::{
    ActiveView, ContactId, Coordinator, NavRequest, NavigationState, PageId, Preference,
    PreferenceChange, PreferenceStore, ProjectRecord, Theme, View,
};
