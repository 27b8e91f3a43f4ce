use std::path::PathBuf;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, row, scrollable, stack, text, text_input, toggler},
};
use tracing::{error, info, warn};

use crate::{
    core::{
        nav::{Coordinator, NavRequest, NavigationState},
        prefs::{PreferenceChange, PreferenceStore, Theme},
    },
    data::{NOTIFICATIONS, chats::recent_contacts},
    gui::{
        AppState, Message,
        screens::{Screen, ScreenData, ScreenMessage, loading_page::LoadingPageScreen},
        state::TopMenu,
        widgets::{accent, card, list, muted, section_title},
    },
    models::ContactRecord,
};

pub struct ZennoApp {
    state: AppState,
    screen: ScreenData,
    contacts: Vec<ContactRecord>,
    notification_toggles: [bool; 3],
}

impl ZennoApp {
    pub fn new(data_dir: PathBuf) -> (Self, Task<Message>) {
        let app = Self {
            state: AppState::new(data_dir.clone()),
            screen: ScreenData::LoadingPage(LoadingPageScreen),
            contacts: recent_contacts(),
            notification_toggles: [true, true, false],
        };
        let open = Task::perform(
            async move {
                let store = PreferenceStore::open_in(&data_dir).await?;
                let preference = store.load().await;
                anyhow::Ok((store, preference))
            },
            |result| Message::StoreOpened(result.map_err(|e| format!("{e:#}"))),
        );
        (app, open)
    }

    pub fn title(&self) -> String {
        match self.screen {
            ScreenData::LoadingPage(_) => "Zenno".to_string(),
            _ => format!("Zenno - {}", self.state.coordinator.page().title()),
        }
    }

    pub fn theme(&self) -> iced::Theme {
        match self.state.coordinator.theme() {
            Theme::Light => iced::Theme::Light,
            Theme::Dark => iced::Theme::Dark,
        }
    }

    /// Swaps in a fresh screen when the coordinator's view differs from the one
    /// shown. Screens keep their private state across unrelated messages.
    fn sync_screen(&mut self, before: (NavigationState, bool)) {
        let coordinator = &self.state.coordinator;
        let loading = matches!(self.screen, ScreenData::LoadingPage(_));
        if loading
            || before.0 != *coordinator.navigation()
            || before.1 != coordinator.is_authenticated()
        {
            self.screen = ScreenData::for_view(coordinator.active_view());
        }
    }

    fn snapshot(&self) -> (NavigationState, bool) {
        (
            self.state.coordinator.navigation().clone(),
            self.state.coordinator.is_authenticated(),
        )
    }

    fn persist(&self, change: PreferenceChange) -> Task<Message> {
        let Some(store) = &self.state.store else {
            warn!(?change, "preference store unavailable; change kept in memory only");
            return Task::none();
        };
        Task::perform(store.apply(change), |result| {
            Message::Persisted(result.map_err(|e| format!("{e:#}")))
        })
    }

    fn navigate(&mut self, request: NavRequest) -> Task<Message> {
        let before = self.snapshot();
        if matches!(request, NavRequest::Logout) {
            self.state.chrome.settings_open = false;
        }
        self.state.chrome.open_menu = None;
        let change = self.state.coordinator.apply(request);
        self.sync_screen(before);
        change.map_or_else(Task::none, |change| self.persist(change))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StoreOpened(Ok((store, preference))) => {
                info!(
                    db_file = ?store.db_file(),
                    theme = %preference.theme,
                    authenticated = preference.authenticated,
                    "preferences loaded"
                );
                self.state.store = Some(store);
                self.state.coordinator = Coordinator::new(preference);
                self.screen = ScreenData::for_view(self.state.coordinator.active_view());
                Task::none()
            }
            Message::StoreOpened(Err(e)) => {
                error!(data_dir = ?self.state.data_dir, "could not open preference store: {e}");
                self.screen = ScreenData::for_view(self.state.coordinator.active_view());
                Task::none()
            }
            Message::Persisted(Ok(())) => Task::none(),
            Message::Persisted(Err(e)) => {
                error!("failed to persist preference: {e}");
                Task::none()
            }
            Message::Navigate(request) => self.navigate(request),
            Message::ThemeSelected(theme) => match self.state.coordinator.set_theme(theme) {
                Some(change) => self.persist(change),
                None => Task::none(),
            },
            Message::ToggleSettings => {
                self.state.chrome.settings_open = !self.state.chrome.settings_open;
                self.state.chrome.open_menu = None;
                Task::none()
            }
            Message::ToggleMenu(menu) => {
                self.state.chrome.toggle_menu(menu);
                Task::none()
            }
            Message::SearchChanged(search) => {
                self.state.chrome.search = search;
                Task::none()
            }
            Message::ToggleNotification(index, on) => {
                if let Some(toggle) = self.notification_toggles.get_mut(index) {
                    *toggle = on;
                }
                Task::none()
            }
            screen_message => self.screen.update(screen_message).map(|msg| match msg {
                ScreenMessage::ScreenMessage(msg) => msg,
                ScreenMessage::ParentMessage(never) => match never {},
            }),
        }
    }

    fn top_bar(&self, theme: Theme) -> Element<'_, Message> {
        let search = self.state.chrome.search.as_str();
        let menu_button = |label: &'static str, menu: TopMenu| {
            let open = self.state.chrome.open_menu == Some(menu);
            button(label)
                .style(if open {
                    button::primary
                } else {
                    button::secondary
                })
                .on_press(Message::ToggleMenu(menu))
        };
        card(
            row![
                text("Zenno").size(22).color(accent(theme)),
                text_input("Search...", search)
                    .on_input(Message::SearchChanged)
                    .padding(8)
                    .width(Length::Fill),
                menu_button("Messages", TopMenu::Messages),
                menu_button("Notifications", TopMenu::Notifications),
                menu_button("Account", TopMenu::Account),
            ]
            .spacing(12)
            .align_y(Center),
        )
    }

    fn menu(&self, menu: TopMenu, theme: Theme) -> Element<'_, Message> {
        let body: Element<'_, Message> = match menu {
            TopMenu::Messages => {
                let entries = self.contacts.iter().map(|contact| {
                    Element::from(
                        button(
                            column![
                                text(contact.full_name()),
                                text(&contact.last_message).size(12).color(muted(theme)),
                            ]
                            .spacing(2),
                        )
                        .width(Length::Fill)
                        .style(button::text)
                        .on_press(Message::Navigate(NavRequest::Chats(Some(contact.id)))),
                    )
                });
                column![
                    section_title("Messages", theme),
                    list(entries),
                    button("View all chats")
                        .style(button::secondary)
                        .on_press(Message::Navigate(NavRequest::Chats(None))),
                ]
                .spacing(10)
                .into()
            }
            TopMenu::Notifications => {
                let entries = NOTIFICATIONS.iter().map(|notification| {
                    Element::from(
                        column![
                            text(notification.title),
                            text(notification.detail).size(12).color(muted(theme)),
                            text(notification.time).size(11).color(muted(theme)),
                        ]
                        .spacing(2),
                    )
                });
                column![section_title("Notifications", theme), list(entries)]
                    .spacing(10)
                    .into()
            }
            TopMenu::Account => column![
                section_title("Account", theme),
                button("Profile")
                    .width(Length::Fill)
                    .style(button::text)
                    .on_press(Message::Navigate(NavRequest::Profile)),
                button("Settings")
                    .width(Length::Fill)
                    .style(button::text)
                    .on_press(Message::ToggleSettings),
                button("Log out")
                    .width(Length::Fill)
                    .style(button::danger)
                    .on_press(Message::Navigate(NavRequest::Logout)),
            ]
            .spacing(6)
            .into(),
        };
        row![
            text("").width(Length::FillPortion(2)),
            container(card(body)).width(Length::FillPortion(1)),
        ]
        .into()
    }

    fn settings_panel(&self, theme: Theme) -> Element<'_, Message> {
        let theme_button = |label: &'static str, value: Theme| {
            button(text(label).width(Length::Fill).align_x(Center))
                .width(Length::Fill)
                .style(if theme == value {
                    button::primary
                } else {
                    button::secondary
                })
                .on_press(Message::ThemeSelected(value))
        };
        let notification_labels = ["Productivity alerts", "Agent nudges", "Weekly summary"];
        let toggles = notification_labels
            .into_iter()
            .zip(self.notification_toggles)
            .enumerate()
            .map(|(index, (label, on))| {
                Element::from(
                    toggler(on)
                        .label(label)
                        .on_toggle(move |on| Message::ToggleNotification(index, on)),
                )
            });

        card(
            column![
                row![
                    section_title("Settings", theme),
                    text("").width(Length::Fill),
                    button("Close")
                        .style(button::secondary)
                        .on_press(Message::ToggleSettings),
                ]
                .align_y(Center),
                text("Appearance").size(14).color(muted(theme)),
                row![
                    theme_button("Light", Theme::Light),
                    theme_button("Dark", Theme::Dark),
                ]
                .spacing(8),
                text("Notifications").size(14).color(muted(theme)),
                list(toggles),
                button(text("Log out").width(Length::Fill).align_x(Center))
                    .width(Length::Fill)
                    .style(button::danger)
                    .on_press(Message::Navigate(NavRequest::Logout)),
            ]
            .spacing(14),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let theme = self.state.coordinator.theme();
        let content = self.screen.view(theme).map(|msg| match msg {
            ScreenMessage::ScreenMessage(msg) => msg,
            ScreenMessage::ParentMessage(never) => match never {},
        });

        if !self.screen.has_chrome() {
            return content;
        }

        let mut page = column![container(self.top_bar(theme)).padding([8, 24])];
        if let Some(menu) = self.state.chrome.open_menu {
            page = page.push(container(self.menu(menu, theme)).padding([0, 24]));
        }
        page = page.push(container(content).height(Length::Fill));

        if self.state.chrome.settings_open {
            stack![
                page,
                row![
                    text("").width(Length::FillPortion(2)),
                    container(scrollable(self.settings_panel(theme)))
                        .padding(24)
                        .width(Length::FillPortion(1)),
                ],
            ]
            .into()
        } else {
            page.into()
        }
    }
}
