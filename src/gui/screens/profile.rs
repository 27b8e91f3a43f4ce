use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, row, scrollable, text, toggler},
};

use crate::{
    core::{nav::NavRequest, prefs::Theme},
    data::profile::{
        PROFILE_APPS, PROFILE_LANGUAGES, PROFILE_SKILLS, ProfileLayout, STATS, Section, USER,
    },
    gui::{
        screens::{Screen, ScreenMessage},
        widgets::{accent, bar, card, list, muted, page_header, section_title, stat, stat_row},
    },
    models::{Color, format_line_count},
};

const BAR_COLOR: Color = Color::hex(0x5B6FD8);

#[derive(Debug, Clone, Default)]
pub struct ProfileScreen {
    layout: ProfileLayout,
}

#[derive(Debug, Clone)]
pub enum ProfileMessage {
    ToggleEditMode,
    ToggleItem(Section, &'static str),
    ToggleProject(u32),
    MoveProject { id: u32, up: bool },
}

type Msg = ScreenMessage<ProfileScreen>;

impl ProfileScreen {
    /// One ranked entry. Hidden entries are dimmed and lose their bar.
    fn item(
        &self,
        section: Section,
        name: &'static str,
        detail: String,
        value: u32,
        theme: Theme,
    ) -> Element<'_, Msg> {
        let shown = self.layout.is_visible(section, name);
        let body = if shown {
            bar(name, detail, value as f32, 100.0, BAR_COLOR)
        } else {
            Element::from(
                row![
                    text(name).color(muted(theme)).width(Length::Fill),
                    text(detail).size(12).color(muted(theme)),
                ]
                .spacing(8),
            )
        };
        if !self.layout.edit_mode {
            return body;
        }
        row![
            container(body).width(Length::Fill),
            toggler(shown).on_toggle(move |_| {
                ScreenMessage::ScreenMessage(ProfileMessage::ToggleItem(section, name))
            }),
        ]
        .spacing(12)
        .align_y(Center)
        .into()
    }

    fn section<'a>(
        &'a self,
        title: &'a str,
        section: Section,
        items: impl Iterator<Item = (&'static str, String, u32)> + 'a,
        theme: Theme,
    ) -> Element<'a, Msg> {
        let rows = items
            .filter(move |&(name, _, _)| self.layout.is_listed(section, name))
            .map(move |(name, detail, value)| self.item(section, name, detail, value, theme));
        card(column![section_title(title, theme), list(rows)].spacing(12))
    }

    fn skills(&self, theme: Theme) -> Element<'_, Msg> {
        let items = PROFILE_SKILLS.iter().map(|skill| {
            (
                skill.name,
                format!("{} · {}h · {}%", skill.category, skill.hours, skill.level),
                skill.level,
            )
        });
        self.section("Top Skills", Section::Skills, items, theme)
    }

    fn apps(&self, theme: Theme) -> Element<'_, Msg> {
        let items = PROFILE_APPS.iter().map(|app| {
            (
                app.name,
                format!("{}h · {}%", app.hours, app.percentage),
                app.percentage,
            )
        });
        self.section("Most Used Apps", Section::Apps, items, theme)
    }

    fn languages(&self, theme: Theme) -> Element<'_, Msg> {
        let items = PROFILE_LANGUAGES.iter().map(|language| {
            (
                language.name,
                format!(
                    "{}% · {}h · {} lines",
                    language.percentage,
                    language.hours,
                    format_line_count(language.lines as f64)
                ),
                language.percentage,
            )
        });
        self.section("Languages", Section::Languages, items, theme)
    }

    fn projects(&self, theme: Theme) -> Element<'_, Msg> {
        let edit_mode = self.layout.edit_mode;
        let entries = self
            .layout
            .projects()
            .iter()
            .filter(|p| edit_mode || self.layout.is_project_visible(p.id))
            .map(|project| {
                let mut header = row![
                    text(&project.title).size(18).width(Length::Fill),
                    text(&project.status).size(12).color(accent(theme)),
                ]
                .spacing(8)
                .align_y(Center);
                if edit_mode {
                    let id = project.id;
                    header = header
                        .push(
                            button("↑")
                                .style(button::secondary)
                                .on_press(ScreenMessage::ScreenMessage(ProfileMessage::MoveProject {
                                    id,
                                    up: true,
                                })),
                        )
                        .push(
                            button("↓")
                                .style(button::secondary)
                                .on_press(ScreenMessage::ScreenMessage(ProfileMessage::MoveProject {
                                    id,
                                    up: false,
                                })),
                        )
                        .push(
                            toggler(self.layout.is_project_visible(id))
                                .on_toggle(move |_| {
                                    ScreenMessage::ScreenMessage(ProfileMessage::ToggleProject(id))
                                }),
                        );
                }
                card(
                    column![
                        header,
                        text(&project.description).color(muted(theme)),
                        text(format!(
                            "{} · {}h · {}% productivity",
                            project.duration, project.total_hours, project.productivity
                        ))
                        .size(12),
                        text(project.skills.join(" · ")).size(12).color(muted(theme)),
                    ]
                    .spacing(6),
                )
            });
        column![section_title("Projects", theme), list(entries)]
            .spacing(12)
            .into()
    }
}

impl Screen for ProfileScreen {
    type Message = ProfileMessage;
    type ParentMessage = NavRequest;

    fn view(&self, theme: Theme) -> Element<'_, ScreenMessage<Self>> {
        let edit_label = if self.layout.edit_mode {
            "Done"
        } else {
            "Edit Profile"
        };

        let about = card(
            column![
                row![
                    column![
                        text(USER.name).size(26),
                        text(USER.username).color(muted(theme)),
                    ]
                    .width(Length::Fill),
                    button(edit_label)
                        .on_press(ScreenMessage::ScreenMessage(ProfileMessage::ToggleEditMode)),
                ]
                .align_y(Center),
                text(USER.bio),
                text(format!(
                    "{} · Joined {} · {}",
                    USER.location, USER.join_date, USER.email
                ))
                .size(13)
                .color(muted(theme)),
                text(format!(
                    "{} · github.com/{} · linkedin.com/in/{} · @{}",
                    USER.website, USER.github, USER.linkedin, USER.twitter
                ))
                .size(13)
                .color(accent(theme)),
            ]
            .spacing(8),
        );

        scrollable(
            column![
                page_header(
                    "Profile",
                    "Your public developer profile",
                    ScreenMessage::ParentMessage(NavRequest::Back),
                    theme,
                ),
                about,
                stat_row(vec![
                    stat("Projects", STATS.total_projects.to_string(), theme),
                    stat("Hours coded", STATS.total_hours.to_string(), theme),
                    stat("Avg productivity", format!("{}%", STATS.avg_productivity), theme),
                    stat("Day streak", STATS.streak.to_string(), theme),
                ]),
                self.skills(theme),
                self.apps(theme),
                self.languages(theme),
                self.projects(theme),
            ]
            .spacing(20)
            .padding(24),
        )
        .into()
    }

    fn update(&mut self, message: Self::Message) -> Task<ScreenMessage<Self>> {
        match message {
            ProfileMessage::ToggleEditMode => self.layout.edit_mode = !self.layout.edit_mode,
            ProfileMessage::ToggleItem(section, name) => self.layout.toggle(section, name),
            ProfileMessage::ToggleProject(id) => self.layout.toggle_project(id),
            ProfileMessage::MoveProject { id, up } => self.layout.move_project(id, up),
        }
        Task::none()
    }
}
