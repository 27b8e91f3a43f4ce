use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Task,
    widget::{column, container, text},
};

use crate::{
    core::prefs::Theme,
    gui::{
        screens::{Screen, ScreenMessage},
        widgets::muted,
    },
};

/// Shown while the preference store opens.
#[derive(Debug, Clone)]
pub struct LoadingPageScreen;

impl Screen for LoadingPageScreen {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view(&self, theme: Theme) -> Element<'_, ScreenMessage<Self>> {
        container(
            column![
                text("Zenno").size(32),
                text("Loading preferences...").color(muted(theme)),
            ]
            .spacing(8)
            .align_x(Center),
        )
        .center_x(iced::Length::Fill)
        .center_y(iced::Length::Fill)
        .into()
    }

    fn update(&mut self, message: Self::Message) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
