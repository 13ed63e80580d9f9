//! Flick - a swipe-to-review list demo
//! Rows accept with a rightward drag and decline with a leftward one

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

use iced::window;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Settings are loaded up front so the window opens at its saved size
    let settings = features::Settings::load();
    let window = window::Settings {
        size: iced::Size::new(settings.window.width, settings.window.height),
        min_size: Some(iced::Size::new(360.0, 480.0)),
        exit_on_close_request: false,
        ..Default::default()
    };

    iced::application(
        move || app::App::new(settings.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .theme(app::App::theme)
    .subscription(app::App::subscription)
    .window(window)
    .antialiasing(true)
    .run()
}
