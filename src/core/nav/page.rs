use std::fmt;

/// One of the mutually exclusive full-view screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    #[default]
    Dashboard,
    ZennoAgent,
    Chats,
    Profile,
    Metrics,
    SkillsProjects,
    AppLanguages,
    ProjectDetail,
}

impl PageId {
    /// Where `Back` leads from this page. Project detail returns to the project
    /// list; everything else returns to the dashboard.
    pub fn back_target(self) -> PageId {
        match self {
            PageId::ProjectDetail => PageId::SkillsProjects,
            _ => PageId::Dashboard,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::ZennoAgent => "zennoAgent",
            PageId::Chats => "chats",
            PageId::Profile => "profile",
            PageId::Metrics => "metrics",
            PageId::SkillsProjects => "skillsProjects",
            PageId::AppLanguages => "appLanguages",
            PageId::ProjectDetail => "projectDetail",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PageId::Dashboard => "Dashboard",
            PageId::ZennoAgent => "Zenno Agent",
            PageId::Chats => "Chats",
            PageId::Profile => "Profile",
            PageId::Metrics => "Metrics",
            PageId::SkillsProjects => "Skills & Projects",
            PageId::AppLanguages => "Apps & Languages",
            PageId::ProjectDetail => "Project Details",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
