//! Hard-coded sample data behind every dashboard card and detail page,
//! plus the small amount of view-local state logic that goes with it.

pub mod agent;
pub mod chats;
pub mod metrics;
pub mod profile;
pub mod projects;
pub mod trends;
pub mod usage;

pub struct Notification {
    pub title: &'static str,
    pub detail: &'static str,
    pub time: &'static str,
}

pub static NOTIFICATIONS: [Notification; 5] = [
    Notification {
        title: "New productivity milestone!",
        detail: "You've coded 40+ hours this week",
        time: "2 hours ago",
    },
    Notification {
        title: "Zenno Agent suggestion",
        detail: "Try optimizing your morning workflow",
        time: "5 hours ago",
    },
    Notification {
        title: "TypeScript usage increased",
        detail: "+18% compared to last month",
        time: "1 day ago",
    },
    Notification {
        title: "New message from Sarah",
        detail: "Check out the new design mockups",
        time: "2 days ago",
    },
    Notification {
        title: "Weekly goal achieved",
        detail: "You completed all your tasks!",
        time: "3 days ago",
    },
];
