//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
pub use message::Message;
pub use state::{App, CoreState, QueueState, ReviewItem};

impl App {
    /// Create new application instance with loaded settings
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let core = CoreState::new(settings);
        let queue = QueueState::seeded();
        let app = Self { core, queue };

        // Pick up user-provided queue entries if a queue file exists
        let init_task = Task::perform(helpers::load_queue(), |result| {
            Message::QueueLoaded(result.map_err(|e| e.to_string()))
        });

        (app, init_task)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title showing how much is left to review
    pub fn title(&self) -> String {
        match self.queue.pending() {
            0 => "Flick - Review".to_string(),
            n => format!("Flick - {} pending", n),
        }
    }

    /// Subscriptions for window lifecycle events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let close_sub = iced::window::close_requests().map(|_id| Message::CloseRequested);
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([close_sub, resize_sub])
    }
}
