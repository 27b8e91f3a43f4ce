//! Page switching and the selection handed between views.
//!
//! [`Coordinator`] is the only writer of the current page, the chat and
//! project selections, and the in-memory [`Preference`]. Views never mutate
//! this state; they emit a [`NavRequest`] and the coordinator applies it.
//! Preference mutations come back as a [`PreferenceChange`] for the caller to
//! hand to the store.

mod page;

pub use page::PageId;

use tracing::{debug, info};

use crate::{
    core::prefs::{Preference, PreferenceChange, Theme},
    models::{ContactId, ProjectRecord},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    pub page: PageId,
    pub selected_chat: Option<ContactId>,
    pub selected_project: Option<ProjectRecord>,
}

/// Navigation requests a view can emit.
#[derive(Debug, Clone, PartialEq)]
pub enum NavRequest {
    Back,
    Metrics,
    AppLanguages,
    SkillsProjects,
    ZennoAgent,
    Profile,
    Chats(Option<ContactId>),
    ProjectDetail(ProjectRecord),
    Login,
    Logout,
}

/// The one view to show. Chats and project detail carry the selection they
/// read; no other page sees either selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    SignIn,
    Dashboard,
    ZennoAgent,
    Chats { selected: Option<ContactId> },
    Profile,
    Metrics,
    SkillsProjects,
    AppLanguages,
    ProjectDetail { project: Option<&'a ProjectRecord> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveView<'a> {
    pub theme: Theme,
    /// Target of `Back` from this view.
    pub back: PageId,
    pub view: View<'a>,
}

#[derive(Debug, Clone, Default)]
pub struct Coordinator {
    preference: Preference,
    navigation: NavigationState,
}

impl Coordinator {
    pub fn new(preference: Preference) -> Self {
        Self {
            preference,
            navigation: NavigationState::default(),
        }
    }

    pub fn preference(&self) -> Preference {
        self.preference
    }

    pub fn theme(&self) -> Theme {
        self.preference.theme
    }

    pub fn is_authenticated(&self) -> bool {
        self.preference.authenticated
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn page(&self) -> PageId {
        self.navigation.page
    }

    pub fn apply(&mut self, request: NavRequest) -> Option<PreferenceChange> {
        match request {
            NavRequest::Back => self.go_back(),
            NavRequest::Metrics => self.go_to_metrics(),
            NavRequest::AppLanguages => self.go_to_app_languages(),
            NavRequest::SkillsProjects => self.go_to_skills_projects(),
            NavRequest::ZennoAgent => self.go_to_zenno_agent(),
            NavRequest::Profile => self.go_to_profile(),
            NavRequest::Chats(contact) => self.go_to_chats(contact),
            NavRequest::ProjectDetail(project) => self.go_to_project_detail(project),
            NavRequest::Login => return Some(self.login()),
            NavRequest::Logout => return Some(self.logout()),
        }
        None
    }

    pub fn go_to_metrics(&mut self) {
        self.set_page(PageId::Metrics);
    }

    pub fn go_to_app_languages(&mut self) {
        self.set_page(PageId::AppLanguages);
    }

    pub fn go_to_skills_projects(&mut self) {
        self.set_page(PageId::SkillsProjects);
    }

    pub fn go_to_zenno_agent(&mut self) {
        self.set_page(PageId::ZennoAgent);
    }

    pub fn go_to_profile(&mut self) {
        self.set_page(PageId::Profile);
    }

    /// `None` opens chats with no contact pre-selected.
    pub fn go_to_chats(&mut self, contact: Option<ContactId>) {
        self.navigation.selected_chat = contact;
        self.set_page(PageId::Chats);
    }

    pub fn go_to_project_detail(&mut self, project: ProjectRecord) {
        self.navigation.selected_project = Some(project);
        self.set_page(PageId::ProjectDetail);
    }

    /// Selections are left in place.
    pub fn go_back(&mut self) {
        let target = self.navigation.page.back_target();
        self.set_page(target);
    }

    pub fn login(&mut self) -> PreferenceChange {
        info!("signed in");
        self.change_preference(PreferenceChange::Authenticated(true))
    }

    /// Returns to the dashboard and drops the auth flag. Selections survive.
    pub fn logout(&mut self) -> PreferenceChange {
        info!("signed out");
        self.set_page(PageId::Dashboard);
        self.change_preference(PreferenceChange::Authenticated(false))
    }

    /// `None` when `theme` is already active.
    pub fn set_theme(&mut self, theme: Theme) -> Option<PreferenceChange> {
        if self.preference.theme == theme {
            return None;
        }
        Some(self.change_preference(PreferenceChange::Theme(theme)))
    }

    pub fn active_view(&self) -> ActiveView<'_> {
        let page = self.navigation.page;
        let view = if !self.preference.authenticated {
            View::SignIn
        } else {
            match page {
                PageId::Dashboard => View::Dashboard,
                PageId::ZennoAgent => View::ZennoAgent,
                PageId::Chats => View::Chats {
                    selected: self.navigation.selected_chat,
                },
                PageId::Profile => View::Profile,
                PageId::Metrics => View::Metrics,
                PageId::SkillsProjects => View::SkillsProjects,
                PageId::AppLanguages => View::AppLanguages,
                PageId::ProjectDetail => View::ProjectDetail {
                    project: self.navigation.selected_project.as_ref(),
                },
            }
        };
        ActiveView {
            theme: self.preference.theme,
            back: page.back_target(),
            view,
        }
    }

    fn set_page(&mut self, page: PageId) {
        if self.navigation.page != page {
            debug!(from = %self.navigation.page, to = %page, "navigate");
        }
        self.navigation.page = page;
    }

    fn change_preference(&mut self, change: PreferenceChange) -> PreferenceChange {
        self.preference.apply(change);
        change
    }
}
