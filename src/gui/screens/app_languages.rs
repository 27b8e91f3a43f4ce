use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{column, row, scrollable, text},
};

use crate::{
    core::{nav::NavRequest, prefs::Theme},
    data::usage::{
        APP_CATEGORIES, DETAILED_APP_USAGE, DETAILED_LANGUAGES, LANGUAGE_GROWTH,
        WEEKLY_APP_USAGE, total_detailed_app_hours, total_detailed_files, total_detailed_lines,
    },
    gui::{
        screens::{Screen, ScreenMessage},
        widgets::{bar, card, list, muted, page_header, section_title, stat, stat_row},
    },
    models::{Color, format_line_count, percent_of_total},
};

#[derive(Debug, Clone)]
pub struct AppLanguagesScreen;

impl Screen for AppLanguagesScreen {
    type Message = Infallible;
    type ParentMessage = NavRequest;

    fn view(&self, theme: Theme) -> Element<'_, ScreenMessage<Self>> {
        let app_hours = total_detailed_app_hours();
        let lines = total_detailed_lines();

        let apps = DETAILED_APP_USAGE.iter().map(|app| {
            bar(
                app.name,
                format!(
                    "{}h · {} sessions · avg {} · {}",
                    app.hours, app.sessions, app.avg_session, app.trend
                ),
                app.hours as f32,
                app_hours as f32,
                app.color,
            )
        });

        let category_total: u32 = APP_CATEGORIES.iter().map(|&(_, hours, _)| hours).sum();
        let categories = APP_CATEGORIES.iter().map(|&(name, hours, color)| {
            bar(
                name,
                format!(
                    "{hours}h · {:.0}%",
                    percent_of_total(hours as f32, category_total as f32)
                ),
                hours as f32,
                category_total as f32,
                color,
            )
        });

        let weekly = WEEKLY_APP_USAGE.iter().map(|&(day, hours, top)| {
            bar(day, format!("{hours}h · mostly {top}"), hours, 24.0, Color::hex(0x5B6FD8))
        });

        let languages = DETAILED_LANGUAGES.iter().map(|language| {
            bar(
                language.name,
                format!(
                    "{} lines · {} files · {}h · {}",
                    format_line_count(language.lines as f64),
                    language.files,
                    language.hours,
                    language.trend
                ),
                language.lines as f32,
                lines as f32,
                language.color,
            )
        });

        let growth = LANGUAGE_GROWTH.iter().map(|(month, counts)| {
            let [typescript, javascript, python, html] = counts.map(|c| format_line_count(c as f64));
            Element::from(
                row![
                    text(*month).width(Length::Fixed(48.0)),
                    text(format!(
                        "TypeScript {typescript} · JavaScript {javascript} · Python {python} · HTML {html}"
                    ))
                    .size(13),
                ]
                .spacing(12),
            )
        });

        scrollable(
            column![
                page_header(
                    "Apps & Languages",
                    "Where your time goes and what you write",
                    ScreenMessage::ParentMessage(NavRequest::Back),
                    theme,
                ),
                stat_row(vec![
                    stat("App hours", app_hours.to_string(), theme),
                    stat("Lines of code", format_line_count(lines as f64), theme),
                    stat("Files", total_detailed_files().to_string(), theme),
                    stat("Languages", DETAILED_LANGUAGES.len().to_string(), theme),
                ]),
                row![
                    card(column![section_title("App Usage", theme), list(apps)].spacing(12)),
                    card(
                        column![section_title("Categories", theme), list(categories)].spacing(12)
                    ),
                ]
                .spacing(16),
                card(column![section_title("This Week", theme), list(weekly)].spacing(12)),
                card(
                    column![
                        section_title("Languages", theme),
                        text(format!("{lines} lines written in total"))
                            .size(13)
                            .color(muted(theme)),
                        list(languages),
                    ]
                    .spacing(12)
                ),
                card(column![section_title("Language Growth", theme), list(growth)].spacing(12)),
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
