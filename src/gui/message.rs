use crate::{
    core::{
        nav::NavRequest,
        prefs::{Preference, PreferenceStore, Theme},
    },
    gui::{
        screens::{
            ScreenMessage, app_languages::AppLanguagesScreen, chats::ChatsScreen,
            dashboard::DashboardScreen, metrics::MetricsScreen, profile::ProfileScreen,
            project_detail::ProjectDetailScreen, sign_in::SignInScreen,
            skills_projects::SkillsProjectsScreen, zenno_agent::ZennoAgentScreen,
        },
        state::TopMenu,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    StoreOpened(Result<(PreferenceStore, Preference), String>),
    Persisted(Result<(), String>),
    Navigate(NavRequest),
    ThemeSelected(Theme),
    ToggleSettings,
    ToggleMenu(TopMenu),
    SearchChanged(String),
    ToggleNotification(usize, bool),
    SignIn(ScreenMessage<SignInScreen>),
    Dashboard(ScreenMessage<DashboardScreen>),
    ZennoAgent(ScreenMessage<ZennoAgentScreen>),
    Chats(ScreenMessage<ChatsScreen>),
    Profile(ScreenMessage<ProfileScreen>),
    Metrics(ScreenMessage<MetricsScreen>),
    SkillsProjects(ScreenMessage<SkillsProjectsScreen>),
    AppLanguages(ScreenMessage<AppLanguagesScreen>),
    ProjectDetail(ScreenMessage<ProjectDetailScreen>),
}
