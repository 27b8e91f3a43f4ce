use iced::{
    Alignment::Center,
    Element, Length,
    widget::{Column, button, column, container, container::Style, pick_list, progress_bar, row, text},
};
use iced_widget::container::bordered_box;

use crate::{
    core::prefs::Theme,
    models::{Color, TimePeriod},
};

pub fn to_iced(color: Color) -> iced::Color {
    iced::Color::from_rgb8(color.r, color.g, color.b)
}

/// Highlight colour for headings and active items.
pub fn accent(theme: Theme) -> iced::Color {
    match theme {
        Theme::Light => to_iced(Color::hex(0x5B6FD8)),
        Theme::Dark => to_iced(Color::hex(0xA78BFA)),
    }
}

pub fn muted(theme: Theme) -> iced::Color {
    match theme {
        Theme::Light => to_iced(Color::hex(0x6B7280)),
        Theme::Dark => to_iced(Color::hex(0x9CA3AF)),
    }
}

fn card_style(theme: &iced::Theme) -> Style {
    bordered_box(theme).border(iced::border::rounded(12))
}

fn highlighted_style(theme: &iced::Theme) -> Style {
    let style = bordered_box(theme).border(iced::border::rounded(12).width(2));
    let mut color_rgba = theme.palette().primary.into_rgba8();
    color_rgba[3] = 40;
    style.background(iced::Color::from_rgba8(
        color_rgba[0],
        color_rgba[1],
        color_rgba[2],
        color_rgba[3] as f32 / 255.0,
    ))
}

pub fn card<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(card_style)
        .into()
}

/// A card drawn with the primary colour, for the selected entry of a list.
pub fn highlighted_card<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(highlighted_style)
        .into()
}

pub fn section_title<'a, Message: 'a>(title: &'a str, theme: Theme) -> Element<'a, Message> {
    text(title).size(20).color(accent(theme)).into()
}

/// Back button plus page title, shown on top of every detail page.
pub fn page_header<'a, Message: Clone + 'a>(
    title: impl text::IntoFragment<'a>,
    subtitle: &'a str,
    back: Message,
    theme: Theme,
) -> Element<'a, Message> {
    row![
        button("← Back").on_press(back).style(button::secondary),
        column![
            text(title).size(28),
            text(subtitle).size(14).color(muted(theme)),
        ]
        .spacing(4),
    ]
    .spacing(16)
    .align_y(Center)
    .into()
}

/// Labelled horizontal bar, the dashboard's stand-in for a chart series.
pub fn bar<'a, Message: 'a>(
    label: impl text::IntoFragment<'a>,
    detail: String,
    value: f32,
    max: f32,
    color: Color,
) -> Element<'a, Message> {
    column![
        row![
            text(label).width(Length::Fill),
            text(detail).color(to_iced(color)),
        ],
        progress_bar(0.0..=max.max(1.0), value.min(max)),
    ]
    .spacing(4)
    .into()
}

pub fn stat<'a, Message: 'a>(label: &'a str, value: String, theme: Theme) -> Element<'a, Message> {
    card(
        column![
            text(value).size(24).color(accent(theme)),
            text(label).size(13).color(muted(theme)),
        ]
        .spacing(4),
    )
}

pub fn stat_row<'a, Message: 'a>(stats: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    row(stats).spacing(12).into()
}

pub fn period_picker<'a, Message: Clone + 'a>(
    selected: TimePeriod,
    on_select: impl Fn(TimePeriod) -> Message + 'a,
) -> Element<'a, Message> {
    pick_list(TimePeriod::ALL, Some(selected), on_select).into()
}

pub fn list<'a, Message: 'a>(
    items: impl IntoIterator<Item = Element<'a, Message>>,
) -> Element<'a, Message> {
    Column::with_children(items).spacing(10).into()
}
