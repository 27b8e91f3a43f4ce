use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, progress_bar, row, scrollable, text},
};

use crate::{
    core::{nav::NavRequest, prefs::Theme},
    data::projects::{
        RADAR_SCORES, SKILL_GROWTH, SKILLS, detailed_projects, portfolio_summary,
        total_skill_hours,
    },
    gui::{
        screens::{Screen, ScreenMessage},
        widgets::{accent, bar, card, list, muted, page_header, section_title, stat, stat_row, to_iced},
    },
    models::{Color, ProjectRecord},
};

#[derive(Debug, Clone)]
pub struct SkillsProjectsScreen {
    projects: Vec<ProjectRecord>,
}

impl Default for SkillsProjectsScreen {
    fn default() -> Self {
        Self {
            projects: detailed_projects(),
        }
    }
}

type Msg = ScreenMessage<SkillsProjectsScreen>;

fn project_row(project: &ProjectRecord, theme: Theme) -> Element<'_, Msg> {
    let entry = button(
        column![
            row![
                text(&project.name).size(18).width(Length::Fill),
                text(project.status.label()).size(12).color(to_iced(project.accent)),
            ]
            .align_y(Center),
            progress_bar(0.0..=100.0, project.progress as f32),
            row![
                text(format!("{}% complete", project.progress)).width(Length::Fill),
                text(format!(
                    "{}h · {} commits · {} people",
                    project.hours, project.commits, project.team
                ))
                .color(muted(theme)),
            ]
            .spacing(8),
            text(project.tech.join(" · ")).size(12).color(muted(theme)),
            text(format!("{} → {}", project.start_date, project.deadline))
                .size(12)
                .color(muted(theme)),
        ]
        .spacing(6),
    )
    .width(Length::Fill)
    .style(button::text)
    .on_press(ScreenMessage::ParentMessage(NavRequest::ProjectDetail(
        project.clone(),
    )));
    card(entry)
}

impl Screen for SkillsProjectsScreen {
    type Message = Infallible;
    type ParentMessage = NavRequest;

    fn view(&self, theme: Theme) -> Element<'_, ScreenMessage<Self>> {
        let summary = portfolio_summary(&self.projects);

        let skills = SKILLS.iter().map(|skill| {
            bar(
                skill.skill,
                format!(
                    "{}% · {}h · {} projects",
                    skill.level, skill.hours, skill.projects
                ),
                skill.level as f32,
                100.0,
                Color::hex(0x5B6FD8),
            )
        });

        let growth = SKILL_GROWTH.iter().map(|(month, levels)| {
            let [react, typescript, node, python] = *levels;
            Element::from(
                row![
                    text(*month).width(Length::Fixed(48.0)),
                    text(format!(
                        "React {react} · TypeScript {typescript} · Node.js {node} · Python {python}"
                    ))
                    .size(13),
                ]
                .spacing(12),
            )
        });

        let radar = RADAR_SCORES.iter().map(|&(area, score)| {
            bar(area, format!("{score}"), score as f32, 100.0, Color::hex(0x4ECDC4))
        });

        let projects = self.projects.iter().map(|p| project_row(p, theme));

        scrollable(
            column![
                page_header(
                    "Skills & Projects",
                    "What you build and what you are getting better at",
                    ScreenMessage::ParentMessage(NavRequest::Back),
                    theme,
                ),
                stat_row(vec![
                    stat("Projects", summary.projects.to_string(), theme),
                    stat("Hours", summary.hours.to_string(), theme),
                    stat("Commits", summary.commits.to_string(), theme),
                    stat("Completed", summary.completed.to_string(), theme),
                ]),
                row![
                    card(
                        column![
                            section_title("Skills", theme),
                            text(format!("{} hours across all skills", total_skill_hours()))
                                .size(13)
                                .color(muted(theme)),
                            list(skills),
                        ]
                        .spacing(12),
                    ),
                    card(column![section_title("Skill Areas", theme), list(radar)].spacing(12)),
                ]
                .spacing(16),
                card(column![section_title("Skill Growth", theme), list(growth)].spacing(12)),
                text("Projects").size(20).color(accent(theme)),
                list(projects),
            ]
            .spacing(20)
            .padding(24),
        )
        .into()
    }

    fn update(&mut self, message: Self::Message) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
