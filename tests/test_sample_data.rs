//! Tests for the sample data tables and the view-local state behind them.
//!
//! Tests cover:
//! - Line count parsing and percentage helpers
//! - Per-period aggregates on the dashboard cards
//! - Chat search and sending rules
//! - Project name editing
//! - Profile visibility and ordering
//! - Agent settings

mod common;

use common::*;
use zenno::{
    data::{
        agent::{AgentSettings, Tone},
        chats::{Conversations, filter_contacts, recent_contacts},
        metrics::{average_wpm, best_session_slot, days_on_target, total_mistakes},
        profile::{PROFILE_APPS, PROFILE_LANGUAGES, PROFILE_SKILLS, ProfileLayout, Section},
        projects::{
            ProjectEditor, UNTITLED_PROJECT, detailed_projects, portfolio_summary,
            project_total_lines, total_skill_hours,
        },
        trends::{self, MetricFilter},
        usage::{
            language_totals, top_apps, top_languages, total_app_hours, total_detailed_app_hours,
            total_detailed_files, total_detailed_lines,
        },
    },
    models::{ProjectStatus, TimePeriod, format_line_count, parse_line_count, percent_of_total},
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_parse_line_count() {
    assert!(approx(parse_line_count("12.5K"), 12_500.0));
    assert!(approx(parse_line_count("150K"), 150_000.0));
    assert!(approx(parse_line_count("842"), 842.0));
    assert!(approx(parse_line_count(" 3.1k "), 3_100.0));
    assert_eq!(parse_line_count("lots"), 0.0);
    assert_eq!(parse_line_count(""), 0.0);
    assert_eq!(parse_line_count("K"), 0.0);
}

#[test]
fn test_format_line_count() {
    assert_eq!(format_line_count(34_400.0), "34.4K");
    assert_eq!(format_line_count(12_000.0), "12K");
    assert_eq!(format_line_count(842.0), "842");
}

#[test]
fn test_percent_of_total() {
    assert_eq!(percent_of_total(0.0, 0.0), 0.0);
    assert_eq!(percent_of_total(12.0, 0.0), 0.0);
    assert_eq!(percent_of_total(25.0, 100.0), 25.0);
    assert_eq!(percent_of_total(3.0, 4.0), 75.0);
}

#[test]
fn test_language_totals_per_period() {
    // 1. Monthly totals add up the abbreviated line counts
    let month = language_totals(TimePeriod::Month);
    assert!(approx(month.lines, 34_400.0));
    assert_eq!(month.files, 368);
    assert_eq!(month.languages, 5);

    // 2. Every period lists languages and reports consistent totals
    for period in TimePeriod::ALL {
        let languages = top_languages(period);
        let totals = language_totals(period);
        assert_eq!(totals.languages, languages.len());
        assert_eq!(totals.files, languages.iter().map(|l| l.files).sum::<u32>());
        assert!(totals.lines > 0.0);
    }
}

#[test]
fn test_app_usage_per_period() {
    assert_eq!(total_app_hours(TimePeriod::Month), 479.0);
    assert_eq!(total_app_hours(TimePeriod::Week), 118.0);
    for period in TimePeriod::ALL {
        let apps = top_apps(period);
        assert_eq!(apps.len(), 5);
        assert_eq!(apps[0].name, "VS Code");
    }
}

#[test]
fn test_detailed_usage_totals() {
    assert_eq!(total_detailed_app_hours(), 371);
    assert_eq!(total_detailed_lines(), 44_320);
    assert_eq!(total_detailed_files(), 789);
}

#[test]
fn test_trend_average_and_peak() {
    let week_average = trends::average(TimePeriod::Week, MetricFilter::All);
    assert!((week_average - 488.0 / 7.0).abs() < 1e-4);

    let peak = trends::peak(TimePeriod::Week, MetricFilter::All).map(|p| p.time);
    assert_eq!(peak, Some("WED"));

    let busiest_hour = trends::peak(TimePeriod::Day, MetricFilter::Distraction).map(|p| p.time);
    assert_eq!(busiest_hour, Some("14:00"));

    assert_eq!(trends::series(TimePeriod::Year).len(), 12);
    assert_eq!(TimePeriod::default(), TimePeriod::Month);
    assert_eq!(TimePeriod::Day.to_string(), "24 Hours");
}

#[test]
fn test_metrics_aggregates() {
    assert!((average_wpm() - 566.0 / 7.0).abs() < 1e-4);
    assert_eq!(days_on_target(), 6);
    assert_eq!(total_mistakes(), (152, 141));
    assert_eq!(best_session_slot().productivity, 92);
}

#[test]
fn test_portfolio_summary() {
    let projects = detailed_projects();
    let summary = portfolio_summary(&projects);
    assert_eq!(summary.projects, 4);
    assert_eq!(summary.hours, 476);
    assert_eq!(summary.commits, 719);
    assert_eq!(summary.completed, 1);

    assert_eq!(portfolio_summary(&[]).projects, 0);
    assert_eq!(total_skill_hours(), 2_370);
    assert_eq!(project_total_lines(), 36_560);
}

#[test]
fn test_sample_projects() {
    let project = sample_project(3);
    assert_eq!(project.name, "Mobile App Backend");
    assert_eq!(project.status, ProjectStatus::Completed);
    assert_eq!(project.progress, 100);
    assert!(project.task_completion() <= 100.0);

    let ids: Vec<_> = detailed_projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, [1, 2, 3, 4]);
}

#[test]
fn test_contact_search() {
    let contacts = recent_contacts();
    assert_eq!(contacts.len(), 4);

    // 1. Case-insensitive match on the full name
    let found: Vec<_> = filter_contacts(&contacts, "sAr")
        .into_iter()
        .map(|c| c.full_name())
        .collect();
    assert_eq!(found, ["Sarah Chen"]);
    assert_eq!(filter_contacts(&contacts, "CHEN").len(), 1);
    assert_eq!(filter_contacts(&contacts, "emma watson").len(), 1);

    // 2. Empty query keeps everyone, unknown names match nobody
    assert_eq!(filter_contacts(&contacts, "").len(), 4);
    assert!(filter_contacts(&contacts, "zzz").is_empty());

    assert_eq!(contacts[0].initials(), "SC");
}

#[test]
fn test_send_message_rules() {
    let mut conversations = Conversations::default();
    let sarah = ContactId(1);
    let seeded = conversations.thread(sarah).count();
    assert_eq!(seeded, 5);

    // 1. No selected contact or blank text: nothing is appended
    assert!(conversations.send(None, "hello", "10:40").is_none());
    assert!(conversations.send(Some(sarah), "   ", "10:40").is_none());
    assert!(conversations.send(Some(sarah), "", "10:40").is_none());
    assert_eq!(conversations.thread(sarah).count(), seeded);

    // 2. A real message is appended as sent and unread, numbered after the 9 seeded ones
    let sent = conversations
        .send(Some(sarah), "On it", "10:41")
        .cloned()
        .expect("message should be sent");
    assert_eq!(sent.id, 10);
    assert_eq!(sent.contact, sarah);
    assert_eq!(sent.text, "On it");
    assert_eq!(sent.time, "10:41");
    assert!(sent.is_sent);
    assert!(!sent.is_read);

    // 3. It shows up at the end of that contact's thread only
    let thread: Vec<_> = conversations.thread(sarah).map(|m| m.id).collect();
    assert_eq!(thread.len(), 6);
    assert_eq!(thread.last(), Some(&10));
    assert!(conversations.thread(ContactId(2)).all(|m| m.id != 10));
}

#[test]
fn test_send_ids_follow_count() {
    let mut conversations = Conversations::default();
    let first = conversations.send(Some(ContactId(4)), "hi", "09:00").map(|m| m.id);
    let second = conversations.send(Some(ContactId(2)), "again", "09:01").map(|m| m.id);
    assert_eq!(first, Some(10));
    assert_eq!(second, Some(11));
}

#[test]
fn test_project_editor_placeholder() {
    let editor = ProjectEditor::new(None);
    assert_eq!(editor.saved_name(), UNTITLED_PROJECT);
    assert!(!editor.is_editing());

    let mut nameless = sample_project(1);
    nameless.name = "  ".to_string();
    assert_eq!(ProjectEditor::new(Some(&nameless)).saved_name(), UNTITLED_PROJECT);
}

#[test]
fn test_project_editor_save_and_cancel() {
    // 1. Start editing the selected project
    let project = sample_project(1);
    let mut editor = ProjectEditor::new(Some(&project));
    assert_eq!(editor.saved_name(), "E-Commerce Platform");
    editor.start_editing();
    assert!(editor.is_editing());

    // 2. Cancel drops the draft
    editor.name = "Shopfront".to_string();
    editor.cancel();
    assert!(!editor.is_editing());
    assert_eq!(editor.name, "E-Commerce Platform");
    assert_eq!(editor.saved_name(), "E-Commerce Platform");

    // 3. Save keeps it, and a later cancel restores the saved name
    editor.start_editing();
    editor.name = "Shopfront".to_string();
    editor.save();
    assert_eq!(editor.saved_name(), "Shopfront");
    editor.start_editing();
    editor.name = "Something else".to_string();
    editor.cancel();
    assert_eq!(editor.name, "Shopfront");
}

#[test]
fn test_profile_visibility() {
    let mut layout = ProfileLayout::default();
    assert!(!layout.edit_mode);
    assert!(layout.is_visible(Section::Skills, "React"));

    // 1. Hide and show again
    layout.toggle(Section::Skills, "React");
    assert!(!layout.is_visible(Section::Skills, "React"));
    layout.toggle(Section::Skills, "React");
    assert!(layout.is_visible(Section::Skills, "React"));

    // 2. Sections are independent and unknown names are ignored
    layout.toggle(Section::Languages, "TypeScript");
    assert!(layout.is_visible(Section::Skills, "TypeScript"));
    assert!(!layout.is_visible(Section::Languages, "TypeScript"));
    layout.toggle(Section::Apps, "Notepad");
    assert!(!layout.is_visible(Section::Apps, "Notepad"));
    assert!(PROFILE_APPS.iter().all(|app| layout.is_visible(Section::Apps, app.name)));

    // 3. Projects hide and reappear
    layout.toggle_project(2);
    assert!(!layout.is_project_visible(2));
    layout.toggle_project(2);
    assert!(layout.is_project_visible(2));
}

#[test]
fn test_profile_sections_keep_rank_order() {
    // 1. Skills, apps and languages come in ranked order with their figures
    let skills: Vec<_> = PROFILE_SKILLS.iter().map(|s| (s.name, s.level, s.hours)).collect();
    assert_eq!(skills[0], ("React", 95, 520));
    assert_eq!(skills[7], ("AWS", 72, 260));
    assert!(PROFILE_SKILLS.windows(2).all(|w| w[0].level > w[1].level));
    assert_eq!(PROFILE_SKILLS[2].category, "Backend");

    let apps: Vec<_> = PROFILE_APPS.iter().map(|a| a.name).collect();
    assert_eq!(apps, ["VS Code", "Chrome", "Terminal", "Figma", "Slack"]);
    assert_eq!((PROFILE_APPS[0].hours, PROFILE_APPS[0].percentage), (842, 45));
    assert_eq!(PROFILE_APPS.iter().map(|a| a.percentage).sum::<u32>(), 100);

    let languages: Vec<_> = PROFILE_LANGUAGES.iter().map(|l| l.name).collect();
    assert_eq!(languages, ["TypeScript", "JavaScript", "Python", "HTML/CSS", "SQL"]);
    assert_eq!(PROFILE_LANGUAGES[0].lines, 125_000);
    assert_eq!(PROFILE_LANGUAGES[4].hours, 62);

    // 2. Hiding an entry does not move the others
    let mut layout = ProfileLayout::default();
    layout.toggle(Section::Apps, "VS Code");
    let listed: Vec<_> = PROFILE_APPS
        .iter()
        .filter(|a| layout.is_listed(Section::Apps, a.name))
        .map(|a| a.name)
        .collect();
    assert_eq!(listed, ["Chrome", "Terminal", "Figma", "Slack"]);
}

#[test]
fn test_hidden_profile_entries_listing() {
    let mut layout = ProfileLayout::default();
    layout.toggle(Section::Skills, "Docker");
    layout.toggle(Section::Languages, "SQL");

    // 1. Hidden skills stay listed, hidden languages drop out
    assert!(layout.is_listed(Section::Skills, "Docker"));
    assert!(!layout.is_visible(Section::Skills, "Docker"));
    assert!(!layout.is_listed(Section::Languages, "SQL"));

    // 2. While editing, everything is listed so it can be shown again
    layout.edit_mode = true;
    assert!(layout.is_listed(Section::Languages, "SQL"));
    assert!(!layout.is_listed(Section::Languages, "COBOL"));
}

#[test]
fn test_profile_project_order() {
    let mut layout = ProfileLayout::default();
    let order = |layout: &ProfileLayout| layout.projects().iter().map(|p| p.id).collect::<Vec<_>>();
    assert_eq!(order(&layout), [1, 2, 3]);

    layout.move_project(1, true);
    assert_eq!(order(&layout), [1, 2, 3]);
    layout.move_project(3, false);
    assert_eq!(order(&layout), [1, 2, 3]);

    layout.move_project(1, false);
    assert_eq!(order(&layout), [2, 1, 3]);
    layout.move_project(3, true);
    assert_eq!(order(&layout), [2, 3, 1]);

    layout.move_project(99, true);
    assert_eq!(order(&layout), [2, 3, 1]);
}

#[test]
fn test_agent_settings() {
    let mut settings = AgentSettings::default();
    assert_eq!(settings.tone, Tone::Motivational);
    assert!(settings.play_sounds);
    assert!(!settings.limit_notifications);
    assert!(!settings.shutdown);
    assert_eq!(settings.volume, 70);

    settings.set_volume(150);
    assert_eq!(settings.volume, 100);
    settings.set_volume(0);
    assert_eq!(settings.volume, 0);

    assert_eq!(Tone::ALL.len(), 4);
    assert_eq!(Tone::default(), Tone::Motivational);
}
