pub mod app_languages;
pub mod chats;
pub mod dashboard;
pub mod loading_page;
pub mod metrics;
pub mod profile;
pub mod project_detail;
pub mod sign_in;
pub mod skills_projects;
pub mod zenno_agent;

use iced::{Element, Task};

use crate::{
    core::{
        nav::{ActiveView, NavRequest, View},
        prefs::Theme,
    },
    gui::Message,
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

/// A page. It owns its private UI state and reports navigation upwards
/// as a `ParentMessage`; it never touches the coordinator directly.
pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view(&self, theme: Theme) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message) -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    LoadingPage(loading_page::LoadingPageScreen),
    SignIn(sign_in::SignInScreen),
    Dashboard(dashboard::DashboardScreen),
    ZennoAgent(zenno_agent::ZennoAgentScreen),
    Chats(chats::ChatsScreen),
    Profile(profile::ProfileScreen),
    Metrics(metrics::MetricsScreen),
    SkillsProjects(skills_projects::SkillsProjectsScreen),
    AppLanguages(app_languages::AppLanguagesScreen),
    ProjectDetail(project_detail::ProjectDetailScreen),
}

impl ScreenData {
    /// Builds the screen for the coordinator's active view, seeded with the
    /// selection that view carries.
    pub fn for_view(active: ActiveView<'_>) -> Self {
        match active.view {
            View::SignIn => ScreenData::SignIn(sign_in::SignInScreen::default()),
            View::Dashboard => ScreenData::Dashboard(dashboard::DashboardScreen::default()),
            View::ZennoAgent => ScreenData::ZennoAgent(zenno_agent::ZennoAgentScreen::default()),
            View::Chats { selected } => ScreenData::Chats(chats::ChatsScreen::new(selected)),
            View::Profile => ScreenData::Profile(profile::ProfileScreen::default()),
            View::Metrics => ScreenData::Metrics(metrics::MetricsScreen),
            View::SkillsProjects => {
                ScreenData::SkillsProjects(skills_projects::SkillsProjectsScreen::default())
            }
            View::AppLanguages => ScreenData::AppLanguages(app_languages::AppLanguagesScreen),
            View::ProjectDetail { project } => {
                ScreenData::ProjectDetail(project_detail::ProjectDetailScreen::new(project))
            }
        }
    }

    /// Whether the top bar and settings panel are drawn around this screen.
    pub fn has_chrome(&self) -> bool {
        !matches!(self, ScreenData::LoadingPage(_) | ScreenData::SignIn(_))
    }
}

fn forward<S, F>(
    screen: &mut S,
    message: ScreenMessage<S>,
    wrap: F,
) -> Task<ScreenMessage<ScreenData>>
where
    S: Screen<ParentMessage = NavRequest> + 'static,
    S::Message: Send + 'static,
    F: Fn(ScreenMessage<S>) -> Message + Send + 'static,
{
    match message {
        ScreenMessage::ScreenMessage(msg) => screen
            .update(msg)
            .map(wrap)
            .map(ScreenMessage::ScreenMessage),
        ScreenMessage::ParentMessage(request) => {
            Task::done(ScreenMessage::ScreenMessage(Message::Navigate(request)))
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self, theme: Theme) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::LoadingPage(screen) => screen.view(theme).map(|msg| -> Message {
                match msg {
                    ScreenMessage::ScreenMessage(never) | ScreenMessage::ParentMessage(never) => {
                        match never {}
                    }
                }
            }),
            ScreenData::SignIn(screen) => screen.view(theme).map(Message::SignIn),
            ScreenData::Dashboard(screen) => screen.view(theme).map(Message::Dashboard),
            ScreenData::ZennoAgent(screen) => screen.view(theme).map(Message::ZennoAgent),
            ScreenData::Chats(screen) => screen.view(theme).map(Message::Chats),
            ScreenData::Profile(screen) => screen.view(theme).map(Message::Profile),
            ScreenData::Metrics(screen) => screen.view(theme).map(Message::Metrics),
            ScreenData::SkillsProjects(screen) => screen.view(theme).map(Message::SkillsProjects),
            ScreenData::AppLanguages(screen) => screen.view(theme).map(Message::AppLanguages),
            ScreenData::ProjectDetail(screen) => screen.view(theme).map(Message::ProjectDetail),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(&mut self, message: Self::Message) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (ScreenData::SignIn(page), Message::SignIn(msg)) => forward(page, msg, Message::SignIn),
            (ScreenData::Dashboard(page), Message::Dashboard(msg)) => {
                forward(page, msg, Message::Dashboard)
            }
            (ScreenData::ZennoAgent(page), Message::ZennoAgent(msg)) => {
                forward(page, msg, Message::ZennoAgent)
            }
            (ScreenData::Chats(page), Message::Chats(msg)) => forward(page, msg, Message::Chats),
            (ScreenData::Profile(page), Message::Profile(msg)) => {
                forward(page, msg, Message::Profile)
            }
            (ScreenData::Metrics(page), Message::Metrics(msg)) => {
                forward(page, msg, Message::Metrics)
            }
            (ScreenData::SkillsProjects(page), Message::SkillsProjects(msg)) => {
                forward(page, msg, Message::SkillsProjects)
            }
            (ScreenData::AppLanguages(page), Message::AppLanguages(msg)) => {
                forward(page, msg, Message::AppLanguages)
            }
            (ScreenData::ProjectDetail(page), Message::ProjectDetail(msg)) => {
                forward(page, msg, Message::ProjectDetail)
            }
            // Messages from a screen that has since been replaced.
            _ => Task::none(),
        }
    }
}
