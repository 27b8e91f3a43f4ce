//! Integration tests for the view-state coordinator.
//!
//! Tests cover:
//! - Page transitions and the asymmetric back target
//! - Chat and project selections handed to the views
//! - Sign-in gating and logout
//! - Theme changes reported back for persistence
//! - Navigation driven through a real store

mod common;

use common::*;

const PAGES: [PageId; 8] = [
    PageId::Dashboard,
    PageId::ZennoAgent,
    PageId::Chats,
    PageId::Profile,
    PageId::Metrics,
    PageId::SkillsProjects,
    PageId::AppLanguages,
    PageId::ProjectDetail,
];

fn signed_in() -> Coordinator {
    Coordinator::new(Preference {
        theme: Theme::Light,
        authenticated: true,
    })
}

#[test]
fn test_starts_on_dashboard_without_selection() {
    let coordinator = Coordinator::default();
    assert_eq!(coordinator.page(), PageId::Dashboard);
    assert_eq!(*coordinator.navigation(), NavigationState::default());
    assert_eq!(coordinator.navigation().selected_chat, None);
    assert_eq!(coordinator.navigation().selected_project, None);
    assert_eq!(coordinator.preference(), Preference::default());
}

#[test]
fn test_page_follows_most_recent_navigation() {
    // 1. Walk through a mixed sequence of requests
    let mut coordinator = signed_in();
    let steps = [
        (NavRequest::Metrics, PageId::Metrics),
        (NavRequest::AppLanguages, PageId::AppLanguages),
        (NavRequest::Back, PageId::Dashboard),
        (NavRequest::ZennoAgent, PageId::ZennoAgent),
        (NavRequest::Profile, PageId::Profile),
        (NavRequest::Chats(None), PageId::Chats),
        (NavRequest::SkillsProjects, PageId::SkillsProjects),
        (NavRequest::ProjectDetail(sample_project(2)), PageId::ProjectDetail),
        (NavRequest::Back, PageId::SkillsProjects),
        (NavRequest::Back, PageId::Dashboard),
        (NavRequest::Back, PageId::Dashboard),
    ];

    // 2. After every step the page is the target of that step
    for (request, expected) in steps {
        let change = coordinator.apply(request.clone());
        assert_eq!(change, None, "{request:?} must not touch preferences");
        assert_eq!(coordinator.page(), expected, "after {request:?}");
    }
}

#[test]
fn test_back_targets() {
    for page in PAGES {
        let expected = match page {
            PageId::ProjectDetail => PageId::SkillsProjects,
            _ => PageId::Dashboard,
        };
        assert_eq!(page.back_target(), expected, "back from {page}");
    }
}

#[test]
fn test_views_receive_only_their_selection() {
    // 1. Set both selections, then stand on each page in turn
    let mut coordinator = signed_in();
    let project = sample_project(2);
    coordinator.go_to_chats(Some(ContactId(3)));
    coordinator.go_to_project_detail(project.clone());

    let requests = [
        (NavRequest::Back, View::SkillsProjects),
        (NavRequest::Back, View::Dashboard),
        (NavRequest::ZennoAgent, View::ZennoAgent),
        (NavRequest::Profile, View::Profile),
        (NavRequest::Metrics, View::Metrics),
        (NavRequest::AppLanguages, View::AppLanguages),
    ];

    // 2. Pages without a selection get the bare view
    for (request, expected) in requests {
        coordinator.apply(request);
        assert_eq!(coordinator.active_view().view, expected);
    }

    // 3. Chats and project detail each get their own slice
    coordinator.go_to_chats(Some(ContactId(3)));
    assert_eq!(
        coordinator.active_view().view,
        View::Chats {
            selected: Some(ContactId(3))
        }
    );
    coordinator.go_to_project_detail(project.clone());
    assert_eq!(
        coordinator.active_view().view,
        View::ProjectDetail {
            project: Some(&project)
        }
    );
}

#[test]
fn test_page_keys() {
    let keys: Vec<_> = PAGES.iter().map(|p| p.key()).collect();
    assert_eq!(
        keys,
        [
            "dashboard",
            "zennoAgent",
            "chats",
            "profile",
            "metrics",
            "skillsProjects",
            "appLanguages",
            "projectDetail",
        ]
    );
}

#[test]
fn test_chats_with_and_without_contact() {
    let mut coordinator = signed_in();

    // 1. Opening a specific contact selects it
    coordinator.go_to_chats(Some(ContactId(5)));
    assert_eq!(coordinator.page(), PageId::Chats);
    assert_eq!(coordinator.navigation().selected_chat, Some(ContactId(5)));
    assert_eq!(
        coordinator.active_view().view,
        View::Chats {
            selected: Some(ContactId(5))
        }
    );

    // 2. Opening chats without a contact clears the selection
    coordinator.go_to_chats(None);
    assert_eq!(coordinator.page(), PageId::Chats);
    assert_eq!(coordinator.navigation().selected_chat, None);
}

#[test]
fn test_project_detail_round_trip() {
    // 1. Dashboard -> skills & projects -> project 1
    let mut coordinator = signed_in();
    let project = sample_project(1);
    coordinator.go_to_skills_projects();
    coordinator.go_to_project_detail(project.clone());

    // 2. The detail view receives the selected project
    assert_eq!(coordinator.page(), PageId::ProjectDetail);
    assert_eq!(coordinator.navigation().selected_project.as_ref(), Some(&project));
    let active = coordinator.active_view();
    assert_eq!(active.back, PageId::SkillsProjects);
    assert_eq!(
        active.view,
        View::ProjectDetail {
            project: Some(&project)
        }
    );

    // 3. Back leads to the project list, not the dashboard
    coordinator.go_back();
    assert_eq!(coordinator.page(), PageId::SkillsProjects);
}

#[test]
fn test_selections_survive_navigating_away() {
    let mut coordinator = signed_in();
    coordinator.go_to_chats(Some(ContactId(2)));
    coordinator.go_to_project_detail(sample_project(3));
    coordinator.go_back();
    coordinator.go_back();

    assert_eq!(coordinator.page(), PageId::Dashboard);
    assert_eq!(coordinator.navigation().selected_chat, Some(ContactId(2)));
    assert_eq!(
        coordinator.navigation().selected_project.as_ref().map(|p| p.id),
        Some(3)
    );
}

#[test]
fn test_logout_from_anywhere() {
    for request in [
        NavRequest::Metrics,
        NavRequest::Chats(Some(ContactId(1))),
        NavRequest::ProjectDetail(sample_project(4)),
        NavRequest::Profile,
    ] {
        // 1. Navigate somewhere, then log out
        let mut coordinator = signed_in();
        coordinator.apply(request);
        let change = coordinator.logout();

        // 2. Always back on the dashboard and signed out
        assert_eq!(change, PreferenceChange::Authenticated(false));
        assert_eq!(coordinator.page(), PageId::Dashboard);
        assert!(!coordinator.is_authenticated());
        assert_eq!(coordinator.active_view().view, View::SignIn);
    }
}

#[test]
fn test_login_keeps_current_page() {
    // 1. Signed out: every page renders the sign-in view
    let mut coordinator = Coordinator::default();
    coordinator.go_to_metrics();
    assert_eq!(coordinator.page(), PageId::Metrics);
    assert_eq!(coordinator.active_view().view, View::SignIn);

    // 2. Signing in reveals the page the router already points at
    let change = coordinator.apply(NavRequest::Login);
    assert_eq!(change, Some(PreferenceChange::Authenticated(true)));
    assert!(coordinator.is_authenticated());
    assert_eq!(coordinator.active_view().view, View::Metrics);
}

#[test]
fn test_set_theme_reports_only_real_changes() {
    let mut coordinator = signed_in();

    assert_eq!(coordinator.set_theme(Theme::Light), None);
    assert_eq!(
        coordinator.set_theme(Theme::Dark),
        Some(PreferenceChange::Theme(Theme::Dark))
    );
    assert_eq!(coordinator.theme(), Theme::Dark);
    assert_eq!(coordinator.active_view().theme, Theme::Dark);
    assert_eq!(coordinator.set_theme(Theme::Dark), None);
}

#[tokio::test]
async fn test_coordinator_with_store() -> anyhow::Result<()> {
    // 1. Boot from a fresh store: signed out, light theme
    let (store, temp_dir) = create_test_store().await;
    let mut coordinator = Coordinator::new(store.load().await);
    assert_eq!(coordinator.active_view().view, View::SignIn);

    // 2. Sign in and switch theme, persisting each change
    if let Some(change) = coordinator.apply(NavRequest::Login) {
        store.apply(change).await?;
    }
    if let Some(change) = coordinator.set_theme(Theme::Dark) {
        store.apply(change).await?;
    }
    store.close().await;

    // 3. A restarted coordinator comes back signed in with the dark theme
    let reopened = reopen_store(temp_dir.path()).await;
    let restarted = Coordinator::new(reopened.load().await);
    assert!(restarted.is_authenticated());
    assert_eq!(restarted.theme(), Theme::Dark);
    assert_eq!(restarted.page(), PageId::Dashboard);
    assert_eq!(restarted.active_view().view, View::Dashboard);

    Ok(())
}
