use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, row, text, text_input},
};
use tracing::info;

use crate::{
    core::{nav::NavRequest, prefs::Theme},
    gui::{
        screens::{Screen, ScreenMessage},
        widgets::{accent, card, muted},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    GitHub,
}

impl SocialProvider {
    fn label(self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::GitHub => "GitHub",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignInScreen {
    signing_up: bool,
    show_password: bool,
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum SignInMessage {
    ShowLogin,
    ShowSignUp,
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    TogglePassword,
    Submit,
    Social(SocialProvider),
}

impl Screen for SignInScreen {
    type Message = SignInMessage;
    type ParentMessage = NavRequest;

    fn view(&self, theme: Theme) -> Element<'_, ScreenMessage<Self>> {
        let msg = ScreenMessage::ScreenMessage;

        let tab = |label: &'static str, active: bool, on_press: SignInMessage| {
            button(text(label).width(Length::Fill).align_x(Center))
                .width(Length::Fill)
                .style(if active {
                    button::primary
                } else {
                    button::secondary
                })
                .on_press(msg(on_press))
        };

        let mut form = column![
            row![
                tab("Login", !self.signing_up, SignInMessage::ShowLogin),
                tab("Sign Up", self.signing_up, SignInMessage::ShowSignUp),
            ]
            .spacing(8),
        ]
        .spacing(14);

        if self.signing_up {
            form = form.push(
                column![
                    text("Full Name").size(13),
                    text_input("John Doe", &self.name)
                        .on_input(move |s| msg(SignInMessage::NameChanged(s)))
                        .padding(10),
                ]
                .spacing(4),
            );
        }

        let submit_label = if self.signing_up {
            "Create Account"
        } else {
            "Sign In"
        };

        form = form
            .push(
                column![
                    text("Email").size(13),
                    text_input("you@example.com", &self.email)
                        .on_input(move |s| msg(SignInMessage::EmailChanged(s)))
                        .on_submit(msg(SignInMessage::Submit))
                        .padding(10),
                ]
                .spacing(4),
            )
            .push(
                column![
                    text("Password").size(13),
                    row![
                        text_input("••••••••", &self.password)
                            .secure(!self.show_password)
                            .on_input(move |s| msg(SignInMessage::PasswordChanged(s)))
                            .on_submit(msg(SignInMessage::Submit))
                            .padding(10),
                        button(if self.show_password { "Hide" } else { "Show" })
                            .style(button::text)
                            .on_press(msg(SignInMessage::TogglePassword)),
                    ]
                    .spacing(8)
                    .align_y(Center),
                ]
                .spacing(4),
            )
            .push(
                button(text(submit_label).width(Length::Fill).align_x(Center))
                    .width(Length::Fill)
                    .padding(12)
                    .on_press(msg(SignInMessage::Submit)),
            )
            .push(
                text("Or continue with")
                    .size(13)
                    .color(muted(theme))
                    .width(Length::Fill)
                    .align_x(Center),
            )
            .push(
                row([SocialProvider::Google, SocialProvider::GitHub].map(
                    |provider| {
                        Element::from(
                            button(text(provider.label()).width(Length::Fill).align_x(Center))
                                .width(Length::Fill)
                                .style(button::secondary)
                                .on_press(msg(SignInMessage::Social(provider))),
                        )
                    },
                ))
                .spacing(8),
            );

        let switch_hint = if self.signing_up {
            ("Already have an account?", "Sign in", SignInMessage::ShowLogin)
        } else {
            ("Don't have an account?", "Sign up", SignInMessage::ShowSignUp)
        };

        let content = column![
            text("Zenno").size(36).color(accent(theme)),
            text(if self.signing_up {
                "Create your account to start tracking"
            } else {
                "Welcome back! Sign in to continue"
            })
            .color(muted(theme)),
            card(form),
            row![
                text(switch_hint.0).size(13).color(muted(theme)),
                button(text(switch_hint.1).size(13))
                    .style(button::text)
                    .on_press(msg(switch_hint.2)),
            ]
            .align_y(Center),
        ]
        .spacing(16)
        .max_width(420)
        .align_x(Center);

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(24)
            .into()
    }

    fn update(&mut self, message: Self::Message) -> Task<ScreenMessage<Self>> {
        match message {
            SignInMessage::ShowLogin => self.signing_up = false,
            SignInMessage::ShowSignUp => self.signing_up = true,
            SignInMessage::NameChanged(name) => self.name = name,
            SignInMessage::EmailChanged(email) => self.email = email,
            SignInMessage::PasswordChanged(password) => self.password = password,
            SignInMessage::TogglePassword => self.show_password = !self.show_password,
            SignInMessage::Submit => {
                info!(sign_up = self.signing_up, "credentials submitted");
                return Task::done(ScreenMessage::ParentMessage(NavRequest::Login));
            }
            SignInMessage::Social(provider) => {
                info!(provider = provider.label(), "social login");
                return Task::done(ScreenMessage::ParentMessage(NavRequest::Login));
            }
        }
        Task::none()
    }
}
