// src/app/update/window.rs
//! Window lifecycle message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                self.core.settings.window.width = size.width;
                self.core.settings.window.height = size.height;
                Some(Task::none())
            }

            Message::CloseRequested => {
                let settings = self.core.settings.clone();
                Some(Task::perform(settings.save_async(), |result| {
                    Message::SettingsSaved(result.map_err(|e| e.to_string()))
                }))
            }

            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    tracing::warn!("Failed to save settings: {}", e);
                }
                Some(iced::exit())
            }

            _ => None,
        }
    }
}
