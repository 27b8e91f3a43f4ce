use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, pick_list, row, scrollable, text},
};

use crate::{
    core::{nav::NavRequest, prefs::Theme},
    data::{
        agent::AGENT_STATS,
        chats::recent_contacts,
        metrics::KEY_METRICS,
        projects::{RECENT_PROJECTS, STRONGEST_SKILLS},
        trends::{self, MetricFilter},
        usage::{language_totals, top_apps, top_languages},
    },
    gui::{
        screens::{Screen, ScreenMessage},
        widgets::{accent, bar, card, list, muted, period_picker, section_title, to_iced},
    },
    models::{Color, ContactRecord, TimePeriod, Trend, format_line_count, parse_line_count},
};

#[derive(Debug, Clone)]
pub struct DashboardScreen {
    trend_period: TimePeriod,
    trend_filter: MetricFilter,
    app_period: TimePeriod,
    language_period: TimePeriod,
    contacts: Vec<ContactRecord>,
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self {
            trend_period: TimePeriod::default(),
            trend_filter: MetricFilter::default(),
            app_period: TimePeriod::default(),
            language_period: TimePeriod::default(),
            contacts: recent_contacts(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum DashboardMessage {
    TrendPeriod(TimePeriod),
    TrendFilter(MetricFilter),
    AppPeriod(TimePeriod),
    LanguagePeriod(TimePeriod),
}

type Msg = ScreenMessage<DashboardScreen>;

fn go(request: NavRequest) -> Msg {
    ScreenMessage::ParentMessage(request)
}

fn card_header<'a>(title: &'a str, link: &'a str, target: NavRequest, theme: Theme) -> Element<'a, Msg> {
    row![
        section_title(title, theme),
        text("").width(Length::Fill),
        button(text(link).size(13))
            .style(button::text)
            .on_press(go(target)),
    ]
    .align_y(Center)
    .into()
}

impl DashboardScreen {
    fn welcome(&self, theme: Theme) -> Element<'_, Msg> {
        card(
            column![
                text("Welcome back, John!").size(28),
                text("You've been 23% more productive this week. Keep it up!")
                    .color(muted(theme)),
            ]
            .spacing(6),
        )
    }

    fn key_metrics(&self, theme: Theme) -> Element<'_, Msg> {
        let tiles = KEY_METRICS.iter().map(|metric| {
            let arrow = match metric.trend {
                Trend::Up => "▲",
                Trend::Down => "▼",
            };
            Element::from(
                column![
                    text(format!("{} {}", metric.value, metric.unit))
                        .size(22)
                        .color(to_iced(metric.accent)),
                    text(metric.label).size(13).color(muted(theme)),
                    text(format!("{arrow} {}", metric.change)).size(12),
                ]
                .spacing(2)
                .width(Length::Fill),
            )
        });
        card(
            column![
                card_header("Key Metrics", "Details →", NavRequest::Metrics, theme),
                row(tiles).spacing(12),
            ]
            .spacing(12),
        )
    }

    fn trends(&self, theme: Theme) -> Element<'_, Msg> {
        let period = self.trend_period;
        let filter = self.trend_filter;
        let series = trends::series(period);
        let max = series.iter().map(|p| p.value(filter)).max().unwrap_or(0) as f32;
        let bars = series.iter().map(|point| {
            let value = point.value(filter);
            bar(point.time, format!("{value}%"), value as f32, max, Color::hex(0x5B6FD8))
        });
        let peak = trends::peak(period, filter)
            .map(|p| format!("Peak {} at {}", p.value(filter), p.time))
            .unwrap_or_default();

        card(
            column![
                row![
                    section_title("Developer Trends", theme),
                    text("").width(Length::Fill),
                    pick_list(MetricFilter::ALL, Some(filter), |f| {
                        ScreenMessage::ScreenMessage(DashboardMessage::TrendFilter(f))
                    }),
                    period_picker(period, |p| {
                        ScreenMessage::ScreenMessage(DashboardMessage::TrendPeriod(p))
                    }),
                ]
                .spacing(8)
                .align_y(Center),
                text(format!(
                    "Average {:.1} · {peak}",
                    trends::average(period, filter)
                ))
                .size(13)
                .color(muted(theme)),
                list(bars),
            ]
            .spacing(12),
        )
    }

    fn top_apps(&self, theme: Theme) -> Element<'_, Msg> {
        let apps = top_apps(self.app_period);
        let max = apps.iter().map(|a| a.hours).fold(0.0, f32::max);
        let bars = apps.iter().map(|app| {
            bar(
                app.name,
                format!("{}h · {}% · {}", app.hours, app.percentage, app.trend),
                app.hours,
                max,
                app.color,
            )
        });
        card(
            column![
                row![
                    section_title("Top App Usage", theme),
                    text("").width(Length::Fill),
                    period_picker(self.app_period, |p| {
                        ScreenMessage::ScreenMessage(DashboardMessage::AppPeriod(p))
                    }),
                ]
                .spacing(8)
                .align_y(Center),
                list(bars),
                button(text("View all apps").size(13))
                    .style(button::text)
                    .on_press(go(NavRequest::AppLanguages)),
            ]
            .spacing(12),
        )
    }

    fn top_languages(&self, theme: Theme) -> Element<'_, Msg> {
        let languages = top_languages(self.language_period);
        let totals = language_totals(self.language_period);
        let bars = languages.iter().map(|language| {
            bar(
                language.label,
                format!(
                    "{}% · {} lines · {} files",
                    language.percentage,
                    format_line_count(parse_line_count(language.lines)),
                    language.files
                ),
                language.percentage as f32,
                100.0,
                language.color,
            )
        });
        card(
            column![
                row![
                    section_title("Top Languages", theme),
                    text("").width(Length::Fill),
                    period_picker(self.language_period, |p| {
                        ScreenMessage::ScreenMessage(DashboardMessage::LanguagePeriod(p))
                    }),
                ]
                .spacing(8)
                .align_y(Center),
                list(bars),
                row![
                    text(format!("{} lines", format_line_count(totals.lines))).width(Length::Fill),
                    text(format!("{} files", totals.files)).width(Length::Fill),
                    text(format!("{} languages", totals.languages)),
                ]
                .spacing(8),
                button(text("View all languages").size(13))
                    .style(button::text)
                    .on_press(go(NavRequest::AppLanguages)),
            ]
            .spacing(12),
        )
    }

    fn agent(&self, theme: Theme) -> Element<'_, Msg> {
        card(
            column![
                card_header("Zenno Agent", "Settings →", NavRequest::ZennoAgent, theme),
                text("Your AI productivity companion is active").color(muted(theme)),
                row![
                    text(format!("{} nudges today", AGENT_STATS.nudges_today)).width(Length::Fill),
                    text(format!("{}% success", AGENT_STATS.success_rate)).color(accent(theme)),
                ],
            ]
            .spacing(10),
        )
    }

    fn strongest_skills(&self, theme: Theme) -> Element<'_, Msg> {
        let bars = STRONGEST_SKILLS.iter().map(|&(skill, level)| {
            bar(skill, format!("{level}%"), level as f32, 100.0, Color::hex(0x4ECDC4))
        });
        card(
            column![
                card_header("Strongest Skills", "View all →", NavRequest::SkillsProjects, theme),
                list(bars),
            ]
            .spacing(12),
        )
    }

    fn recent_projects(&self, theme: Theme) -> Element<'_, Msg> {
        let rows = RECENT_PROJECTS.iter().map(|project| {
            Element::from(
                row![
                    text(project.code).color(accent(theme)),
                    column![
                        text(project.name),
                        text(project.stack).size(12).color(muted(theme)),
                    ]
                    .width(Length::Fill),
                    text(project.last_active).size(12).color(muted(theme)),
                ]
                .spacing(12)
                .align_y(Center),
            )
        });
        card(
            column![
                card_header("Recent Projects", "View all →", NavRequest::SkillsProjects, theme),
                list(rows),
            ]
            .spacing(12),
        )
    }

    fn recent_chats(&self, theme: Theme) -> Element<'_, Msg> {
        let rows = self.contacts.iter().map(|contact| {
            let entry = button(
                row![
                    text(contact.initials()).color(accent(theme)),
                    column![
                        text(contact.full_name()),
                        text(&contact.last_message).size(12).color(muted(theme)),
                    ]
                    .width(Length::Fill),
                    text(&contact.last_message_time).size(12).color(muted(theme)),
                ]
                .spacing(12)
                .align_y(Center),
            )
            .width(Length::Fill)
            .style(button::text)
            .on_press(go(NavRequest::Chats(Some(contact.id))));
            Element::from(entry)
        });
        card(
            column![
                card_header("Recent Chats", "Open chats →", NavRequest::Chats(None), theme),
                list(rows),
            ]
            .spacing(12),
        )
    }
}

impl Screen for DashboardScreen {
    type Message = DashboardMessage;
    type ParentMessage = NavRequest;

    fn view(&self, theme: Theme) -> Element<'_, ScreenMessage<Self>> {
        scrollable(
            column![
                self.welcome(theme),
                self.key_metrics(theme),
                row![self.trends(theme), self.agent(theme)].spacing(16),
                row![self.top_apps(theme), self.top_languages(theme)].spacing(16),
                row![self.strongest_skills(theme), self.recent_projects(theme)].spacing(16),
                self.recent_chats(theme),
            ]
            .spacing(16)
            .padding(24),
        )
        .into()
    }

    fn update(&mut self, message: Self::Message) -> Task<ScreenMessage<Self>> {
        match message {
            DashboardMessage::TrendPeriod(period) => self.trend_period = period,
            DashboardMessage::TrendFilter(filter) => self.trend_filter = filter,
            DashboardMessage::AppPeriod(period) => self.app_period = period,
            DashboardMessage::LanguagePeriod(period) => self.language_period = period,
        }
        Task::none()
    }
}
