use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, progress_bar, row, scrollable, text, text_input},
};
use tracing::info;

use crate::{
    core::{nav::NavRequest, prefs::Theme},
    data::projects::{
        PROJECT_LANGUAGES, PROJECT_PLATFORMS, PROJECT_TOOLS, PROJECT_TOP_SKILLS,
        PROJECT_WEEKLY_ACTIVITY, ProjectEditor, project_total_lines,
    },
    gui::{
        screens::{Screen, ScreenMessage},
        widgets::{accent, bar, card, list, muted, page_header, section_title, stat, stat_row},
    },
    models::{Color, ProjectRecord, format_line_count},
};

/// Detail page for the project picked on the skills & projects page. Without a
/// selected project it renders placeholder values.
#[derive(Debug, Clone)]
pub struct ProjectDetailScreen {
    project: Option<ProjectRecord>,
    editor: ProjectEditor,
}

#[derive(Debug, Clone)]
pub enum ProjectDetailMessage {
    Edit,
    NameChanged(String),
    DescriptionChanged(String),
    Save,
    Cancel,
}

type Msg = ScreenMessage<ProjectDetailScreen>;

impl ProjectDetailScreen {
    pub fn new(project: Option<&ProjectRecord>) -> Self {
        Self {
            editor: ProjectEditor::new(project),
            project: project.cloned(),
        }
    }

    fn overview(&self, theme: Theme) -> Element<'_, Msg> {
        let Some(project) = &self.project else {
            return card(text("No project selected").color(muted(theme)));
        };
        card(
            column![
                row![
                    text(project.status.label()).color(accent(theme)).width(Length::Fill),
                    text(format!("{}%", project.progress)),
                ],
                progress_bar(0.0..=100.0, project.progress as f32),
                text(format!(
                    "Started {} · Deadline {} · Last active {}",
                    project.start_date, project.deadline, project.last_active
                ))
                .size(13)
                .color(muted(theme)),
                text(format!(
                    "{} of {} tasks done ({:.0}%)",
                    project.completed_tasks,
                    project.total_tasks,
                    project.task_completion()
                ))
                .size(13),
                text(project.tech.join(" · ")).size(13).color(muted(theme)),
            ]
            .spacing(8),
        )
    }

    fn stats(&self, theme: Theme) -> Element<'_, Msg> {
        let (hours, commits, team) = self
            .project
            .as_ref()
            .map(|p| (p.hours.to_string(), p.commits.to_string(), p.team.to_string()))
            .unwrap_or_else(|| ("-".into(), "-".into(), "-".into()));
        stat_row(vec![
            stat("Hours", hours, theme),
            stat("Commits", commits, theme),
            stat("Team", team, theme),
            stat("Lines", format_line_count(project_total_lines() as f64), theme),
        ])
    }

    fn title_bar(&self, theme: Theme) -> Element<'_, Msg> {
        let msg = ScreenMessage::ScreenMessage;
        if self.editor.is_editing() {
            row![
                text_input("Project name", &self.editor.name)
                    .on_input(move |s| msg(ProjectDetailMessage::NameChanged(s)))
                    .on_submit(msg(ProjectDetailMessage::Save))
                    .padding(8),
                button("Save").on_press(msg(ProjectDetailMessage::Save)),
                button("Cancel")
                    .style(button::secondary)
                    .on_press(msg(ProjectDetailMessage::Cancel)),
            ]
            .spacing(8)
            .align_y(Center)
            .into()
        } else {
            row![
                column![
                    text(self.editor.saved_name()).size(22),
                    text(&self.editor.description).color(muted(theme)),
                ]
                .spacing(4)
                .width(Length::Fill),
                button("Edit")
                    .style(button::secondary)
                    .on_press(msg(ProjectDetailMessage::Edit)),
            ]
            .align_y(Center)
            .into()
        }
    }
}

impl Screen for ProjectDetailScreen {
    type Message = ProjectDetailMessage;
    type ParentMessage = NavRequest;

    fn view(&self, theme: Theme) -> Element<'_, ScreenMessage<Self>> {
        let msg = ScreenMessage::ScreenMessage;
        let total_lines = project_total_lines();

        let languages = PROJECT_LANGUAGES.iter().map(|language| {
            bar(
                language.language,
                format!(
                    "{} lines · {}%",
                    format_line_count(language.lines as f64),
                    language.percentage
                ),
                language.lines as f32,
                total_lines as f32,
                language.color,
            )
        });

        let skills = PROJECT_TOP_SKILLS.iter().map(|&(skill, level, hours)| {
            bar(skill, format!("{level}% · {hours}h"), level as f32, 100.0, Color::hex(0x4ECDC4))
        });

        let tools = PROJECT_TOOLS.iter().map(|&(tool, hours, share)| {
            bar(tool, format!("{hours}h · {share}%"), share as f32, 100.0, Color::hex(0xFFD93D))
        });

        let platforms = PROJECT_PLATFORMS.iter().map(|&(platform, role)| {
            Element::from(
                row![
                    text(platform).width(Length::Fill),
                    text(role).size(12).color(muted(theme)),
                ]
                .spacing(8),
            )
        });

        let activity = PROJECT_WEEKLY_ACTIVITY.iter().map(|&(week, hours, commits)| {
            bar(
                week,
                format!("{hours}h · {commits} commits"),
                hours as f32,
                40.0,
                Color::hex(0x5B6FD8),
            )
        });

        let mut description = column![section_title("Description", theme)].spacing(8);
        description = if self.editor.is_editing() {
            description.push(
                text_input("Describe the project", &self.editor.description)
                    .on_input(move |s| msg(ProjectDetailMessage::DescriptionChanged(s)))
                    .padding(8),
            )
        } else {
            description.push(text(&self.editor.description))
        };

        scrollable(
            column![
                page_header(
                    self.editor.saved_name(),
                    "Project details",
                    ScreenMessage::ParentMessage(NavRequest::Back),
                    theme,
                ),
                card(self.title_bar(theme)),
                self.overview(theme),
                self.stats(theme),
                card(description),
                row![
                    card(
                        column![
                            section_title("Languages", theme),
                            text(format!("{} lines in total", format_line_count(total_lines as f64)))
                                .size(13)
                                .color(muted(theme)),
                            list(languages),
                        ]
                        .spacing(12)
                    ),
                    card(column![section_title("Top Skills", theme), list(skills)].spacing(12)),
                ]
                .spacing(16),
                row![
                    card(column![section_title("Tools", theme), list(tools)].spacing(12)),
                    card(column![section_title("Platforms", theme), list(platforms)].spacing(12)),
                ]
                .spacing(16),
                card(column![section_title("Weekly Activity", theme), list(activity)].spacing(12)),
            ]
            .spacing(20)
            .padding(24),
        )
        .into()
    }

    fn update(&mut self, message: Self::Message) -> Task<ScreenMessage<Self>> {
        match message {
            ProjectDetailMessage::Edit => self.editor.start_editing(),
            ProjectDetailMessage::NameChanged(name) => self.editor.name = name,
            ProjectDetailMessage::DescriptionChanged(description) => {
                self.editor.description = description
            }
            ProjectDetailMessage::Save => {
                self.editor.save();
                info!(name = self.editor.saved_name(), "project renamed");
            }
            ProjectDetailMessage::Cancel => self.editor.cancel(),
        }
        Task::none()
    }
}
