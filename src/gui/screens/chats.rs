use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, row, scrollable, text, text_input},
};
use tracing::debug;

use crate::{
    core::{nav::NavRequest, prefs::Theme},
    data::chats::{Conversations, current_time_label, filter_contacts, recent_contacts},
    gui::{
        screens::{Screen, ScreenMessage},
        widgets::{accent, card, highlighted_card, list, muted, page_header},
    },
    models::{ContactId, ContactRecord},
};

#[derive(Debug, Clone)]
pub struct ChatsScreen {
    contacts: Vec<ContactRecord>,
    conversations: Conversations,
    selected: Option<ContactId>,
    search: String,
    draft: String,
    recording: bool,
}

#[derive(Debug, Clone)]
pub enum ChatsMessage {
    SearchChanged(String),
    Select(ContactId),
    DraftChanged(String),
    Send,
    ToggleRecording,
}

impl ChatsScreen {
    pub fn new(selected: Option<ContactId>) -> Self {
        Self {
            contacts: recent_contacts(),
            conversations: Conversations::default(),
            selected,
            search: String::new(),
            draft: String::new(),
            recording: false,
        }
    }

    fn selected_contact(&self) -> Option<&ContactRecord> {
        let id = self.selected?;
        self.contacts.iter().find(|c| c.id == id)
    }

    fn thread_view(&self, theme: Theme) -> Element<'_, ScreenMessage<Self>> {
        let msg = ScreenMessage::ScreenMessage;
        let Some(contact) = self.selected_contact() else {
            return card(
                container(text("Select a conversation to start chatting").color(muted(theme)))
                    .center_x(Length::Fill)
                    .center_y(Length::Fixed(320.0)),
            );
        };

        let bubbles = self.conversations.thread(contact.id).map(|message| {
            let bubble = column![
                text(&message.text),
                text(&message.time).size(11).color(muted(theme)),
            ]
            .spacing(2);
            let bubble = if message.is_sent {
                highlighted_card(bubble)
            } else {
                card(bubble)
            };
            let aligned = if message.is_sent {
                row![text("").width(Length::FillPortion(1)), container(bubble).width(Length::FillPortion(3))]
            } else {
                row![container(bubble).width(Length::FillPortion(3)), text("").width(Length::FillPortion(1))]
            };
            Element::from(aligned)
        });

        let presence = if contact.is_online { "Online" } else { "Offline" };
        let composer = row![
            text_input("Type a message...", &self.draft)
                .on_input(move |s| msg(ChatsMessage::DraftChanged(s)))
                .on_submit(msg(ChatsMessage::Send))
                .padding(10),
            button("Send").on_press(msg(ChatsMessage::Send)),
            button(if self.recording { "Stop" } else { "Mic" })
                .style(if self.recording {
                    button::danger
                } else {
                    button::secondary
                })
                .on_press(msg(ChatsMessage::ToggleRecording)),
        ]
        .spacing(8)
        .align_y(Center);

        card(
            column![
                row![
                    text(contact.full_name()).size(18).width(Length::Fill),
                    text(presence).size(12).color(muted(theme)),
                ]
                .align_y(Center),
                scrollable(list(bubbles)).height(Length::Fixed(360.0)),
                composer,
            ]
            .spacing(12),
        )
    }
}

impl Screen for ChatsScreen {
    type Message = ChatsMessage;
    type ParentMessage = NavRequest;

    fn view(&self, theme: Theme) -> Element<'_, ScreenMessage<Self>> {
        let msg = ScreenMessage::ScreenMessage;

        let entries = filter_contacts(&self.contacts, &self.search)
            .into_iter()
            .map(|contact| {
                let entry = button(
                    row![
                        text(contact.initials()).color(accent(theme)),
                        column![
                            text(contact.full_name()),
                            text(&contact.last_message).size(12).color(muted(theme)),
                        ]
                        .width(Length::Fill),
                        text(&contact.last_message_time).size(11).color(muted(theme)),
                    ]
                    .spacing(10)
                    .align_y(Center),
                )
                .width(Length::Fill)
                .style(button::text)
                .on_press(msg(ChatsMessage::Select(contact.id)));
                if Some(contact.id) == self.selected {
                    highlighted_card(entry)
                } else {
                    card(entry)
                }
            });

        let sidebar = column![
            text_input("Search contacts...", &self.search)
                .on_input(move |s| msg(ChatsMessage::SearchChanged(s)))
                .padding(10),
            scrollable(list(entries)),
        ]
        .spacing(12)
        .width(Length::FillPortion(1));

        column![
            page_header(
                "Chats",
                "Messages with your team",
                ScreenMessage::ParentMessage(NavRequest::Back),
                theme,
            ),
            row![
                sidebar,
                container(self.thread_view(theme)).width(Length::FillPortion(2)),
            ]
            .spacing(16),
        ]
        .spacing(20)
        .padding(24)
        .into()
    }

    fn update(&mut self, message: Self::Message) -> Task<ScreenMessage<Self>> {
        match message {
            ChatsMessage::SearchChanged(search) => self.search = search,
            ChatsMessage::Select(contact) => self.selected = Some(contact),
            ChatsMessage::DraftChanged(draft) => self.draft = draft,
            ChatsMessage::Send => {
                let text = self.draft.trim().to_string();
                if let Some(sent) = self
                    .conversations
                    .send(self.selected, &text, current_time_label())
                {
                    debug!(id = sent.id, contact = %sent.contact, "message sent");
                    self.draft.clear();
                }
            }
            ChatsMessage::ToggleRecording => self.recording = !self.recording,
        }
        Task::none()
    }
}
