use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, row, scrollable, slider, text, toggler},
};
use tracing::debug;

use crate::{
    core::{nav::NavRequest, prefs::Theme},
    data::agent::{AGENT_STATS, AgentSettings, Tone},
    gui::{
        screens::{Screen, ScreenMessage},
        widgets::{card, highlighted_card, list, muted, page_header, section_title, stat, stat_row},
    },
};

#[derive(Debug, Clone, Default)]
pub struct ZennoAgentScreen {
    settings: AgentSettings,
}

#[derive(Debug, Clone)]
pub enum ZennoAgentMessage {
    ToneSelected(Tone),
    PlaySounds(bool),
    LimitNotifications(bool),
    Shutdown(bool),
    Volume(u8),
}

impl Screen for ZennoAgentScreen {
    type Message = ZennoAgentMessage;
    type ParentMessage = NavRequest;

    fn view(&self, theme: Theme) -> Element<'_, ScreenMessage<Self>> {
        let msg = ScreenMessage::ScreenMessage;
        let settings = &self.settings;

        let tones = Tone::ALL.into_iter().map(|tone| {
            let body = button(
                row![
                    text(tone.emoji()).size(24),
                    column![
                        text(tone.label()),
                        text(tone.description()).size(12).color(muted(theme)),
                    ]
                    .spacing(2),
                ]
                .spacing(12)
                .align_y(Center),
            )
            .width(Length::Fill)
            .style(button::text)
            .on_press(msg(ZennoAgentMessage::ToneSelected(tone)));
            if tone == settings.tone {
                highlighted_card(body)
            } else {
                card(body)
            }
        });

        let switches = column![
            toggler(settings.play_sounds)
                .label("Play sounds")
                .on_toggle(move |on| msg(ZennoAgentMessage::PlaySounds(on))),
            toggler(settings.limit_notifications)
                .label("Limit notifications")
                .on_toggle(move |on| msg(ZennoAgentMessage::LimitNotifications(on))),
            toggler(settings.shutdown)
                .label("Shut down agent")
                .on_toggle(move |on| msg(ZennoAgentMessage::Shutdown(on))),
            row![
                text("Notification volume").width(Length::Fill),
                text(format!("{}%", settings.volume)).color(muted(theme)),
            ],
            slider(0..=100u8, settings.volume, move |v| {
                msg(ZennoAgentMessage::Volume(v))
            }),
        ]
        .spacing(14);

        let status = if settings.shutdown { "Paused" } else { "Active" };

        scrollable(
            column![
                page_header(
                    "Zenno Agent",
                    "Tune how your productivity companion nudges you",
                    ScreenMessage::ParentMessage(NavRequest::Back),
                    theme,
                ),
                stat_row(vec![
                    stat("Status", status.to_string(), theme),
                    stat("Total nudges", AGENT_STATS.total_nudges.to_string(), theme),
                    stat("Nudges today", AGENT_STATS.nudges_today.to_string(), theme),
                    stat("Avg response", AGENT_STATS.avg_response.to_string(), theme),
                    stat("Success rate", format!("{}%", AGENT_STATS.success_rate), theme),
                ]),
                row![
                    column![section_title("Personality", theme), list(tones)]
                        .spacing(12)
                        .width(Length::Fill),
                    column![section_title("Preferences", theme), card(switches)]
                        .spacing(12)
                        .width(Length::Fill),
                ]
                .spacing(16),
            ]
            .spacing(20)
            .padding(24),
        )
        .into()
    }

    fn update(&mut self, message: Self::Message) -> Task<ScreenMessage<Self>> {
        debug!(?message, "agent settings");
        match message {
            ZennoAgentMessage::ToneSelected(tone) => self.settings.tone = tone,
            ZennoAgentMessage::PlaySounds(on) => self.settings.play_sounds = on,
            ZennoAgentMessage::LimitNotifications(on) => self.settings.limit_notifications = on,
            ZennoAgentMessage::Shutdown(on) => self.settings.shutdown = on,
            ZennoAgentMessage::Volume(volume) => self.settings.set_volume(volume),
        }
        Task::none()
    }
}
