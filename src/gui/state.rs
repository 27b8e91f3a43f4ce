use std::path::PathBuf;

use crate::core::{nav::Coordinator, prefs::PreferenceStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopMenu {
    Messages,
    Notifications,
    Account,
}

/// Window chrome state that belongs to no page.
#[derive(Debug, Default)]
pub struct Chrome {
    pub settings_open: bool,
    pub open_menu: Option<TopMenu>,
    pub search: String,
}

impl Chrome {
    /// Opening a menu closes any other; selecting the open one closes it.
    pub fn toggle_menu(&mut self, menu: TopMenu) {
        self.open_menu = match self.open_menu {
            Some(open) if open == menu => None,
            _ => Some(menu),
        };
    }
}

#[derive(Debug)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub coordinator: Coordinator,
    /// `None` until the store has opened, or when it could not be opened.
    pub store: Option<PreferenceStore>,
    pub chrome: Chrome,
}

impl AppState {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            coordinator: Coordinator::default(),
            store: None,
            chrome: Chrome::default(),
        }
    }
}
