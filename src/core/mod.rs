pub mod nav;
pub mod prefs;
