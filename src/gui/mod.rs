mod app;
mod message;
mod screens;
mod state;
mod widgets;

use std::path::PathBuf;

pub use app::ZennoApp;
pub use message::Message;
pub use state::AppState;

/// Opens the dashboard window. Preferences live in `data_dir`.
pub fn run(data_dir: PathBuf) -> iced::Result {
    iced::application(
        move || ZennoApp::new(data_dir.clone()),
        ZennoApp::update,
        ZennoApp::view,
    )
    .title(ZennoApp::title)
    .theme(ZennoApp::theme)
    .window_size((1280.0, 860.0))
    .run()
}
