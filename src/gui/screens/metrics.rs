use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{column, row, scrollable, text},
};

use crate::{
    core::{nav::NavRequest, prefs::Theme},
    data::metrics::{
        COMMON_MISTAKES, DAILY_MISTAKES, KEY_METRICS, PRODUCTIVITY_BY_SESSION, RECENT_SESSIONS,
        SKILL_ACCURACY, WEEKLY_WPM, average_wpm, best_session_slot, days_on_target,
        total_mistakes,
    },
    gui::{
        screens::{Screen, ScreenMessage},
        widgets::{accent, bar, card, list, muted, page_header, section_title, stat, stat_row},
    },
    models::{Color, Trend, percent_of_total},
};

#[derive(Debug, Clone)]
pub struct MetricsScreen;

type Msg = ScreenMessage<MetricsScreen>;

fn panel<'a>(title: &'a str, theme: Theme, body: Element<'a, Msg>) -> Element<'a, Msg> {
    card(column![section_title(title, theme), body].spacing(12))
}

impl Screen for MetricsScreen {
    type Message = Infallible;
    type ParentMessage = NavRequest;

    fn view(&self, theme: Theme) -> Element<'_, ScreenMessage<Self>> {
        let headline = KEY_METRICS.iter().map(|metric| {
            let arrow = match metric.trend {
                Trend::Up => "▲",
                Trend::Down => "▼",
            };
            stat(
                metric.label,
                format!("{} {} {arrow}{}", metric.value, metric.unit, metric.change),
                theme,
            )
        });

        let wpm = WEEKLY_WPM.iter().map(|day| {
            bar(
                day.day,
                format!("{} / {} WPM", day.wpm, day.target),
                day.wpm as f32,
                100.0,
                if day.wpm >= day.target {
                    Color::hex(0x4ECDC4)
                } else {
                    Color::hex(0xFF6B9D)
                },
            )
        });

        let (errors, corrected) = total_mistakes();
        let mistakes = DAILY_MISTAKES.iter().map(|day| {
            bar(
                day.day,
                format!("{} errors · {} corrected", day.errors, day.corrected),
                day.errors as f32,
                30.0,
                Color::hex(0xFF6B9D),
            )
        });

        let common = COMMON_MISTAKES.iter().map(|mistake| {
            Element::from(
                row![
                    text(mistake.issue).width(Length::Fill),
                    text(mistake.language).size(12).color(muted(theme)),
                    text(format!("{}×", mistake.frequency)).color(accent(theme)),
                ]
                .spacing(12),
            )
        });

        let accuracy = SKILL_ACCURACY.iter().map(|&(skill, score)| {
            bar(skill, format!("{score}%"), score as f32, 100.0, Color::hex(0x5B6FD8))
        });

        let best = best_session_slot();
        let sessions = PRODUCTIVITY_BY_SESSION.iter().map(|slot| {
            bar(
                slot.time,
                format!("{}% · {} sessions", slot.productivity, slot.sessions),
                slot.productivity as f32,
                100.0,
                Color::hex(0xFFD93D),
            )
        });

        let recent = RECENT_SESSIONS.iter().map(|session| {
            Element::from(
                row![
                    text(session.date).width(Length::Fill),
                    text(session.duration).width(Length::Fixed(80.0)),
                    text(format!("{} tasks", session.tasks)).width(Length::Fixed(80.0)),
                    text(format!("{}%", session.productivity)).color(accent(theme)),
                ]
                .spacing(12),
            )
        });

        scrollable(
            column![
                page_header(
                    "Metrics",
                    "Typing speed, accuracy and session productivity",
                    ScreenMessage::ParentMessage(NavRequest::Back),
                    theme,
                ),
                stat_row(headline.collect()),
                row![
                    panel(
                        "Weekly WPM",
                        theme,
                        column![
                            text(format!(
                                "Average {:.1} WPM · target met on {} of {} days",
                                average_wpm(),
                                days_on_target(),
                                WEEKLY_WPM.len()
                            ))
                            .size(13)
                            .color(muted(theme)),
                            list(wpm),
                        ]
                        .spacing(10)
                        .into(),
                    ),
                    panel(
                        "Daily Mistakes",
                        theme,
                        column![
                            text(format!(
                                "{errors} errors this week, {corrected} corrected ({:.0}%)",
                                percent_of_total(corrected as f32, errors as f32)
                            ))
                            .size(13)
                            .color(muted(theme)),
                            list(mistakes),
                        ]
                        .spacing(10)
                        .into(),
                    ),
                ]
                .spacing(16),
                row![
                    panel("Common Mistakes", theme, list(common)),
                    panel("Accuracy by Skill", theme, list(accuracy)),
                ]
                .spacing(16),
                panel(
                    "Productivity by Session",
                    theme,
                    column![
                        text(format!(
                            "Most productive: {} at {}%",
                            best.time, best.productivity
                        ))
                        .size(13)
                        .color(muted(theme)),
                        list(sessions),
                    ]
                    .spacing(10)
                    .into(),
                ),
                panel("Recent Sessions", theme, list(recent)),
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
