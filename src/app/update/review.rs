// src/app/update/review.rs
//! Review queue message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, QueueState};

impl App {
    /// Handle review queue messages
    pub fn handle_review(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Accepted(id) => {
                if self.queue.accept(*id) {
                    tracing::info!("Entry {} accepted", id);
                } else {
                    tracing::warn!("Accept for unknown or finished entry {}", id);
                }
                Some(Task::none())
            }

            Message::Declined(id) => {
                if self.queue.decline(*id) {
                    tracing::info!("Entry {} declined", id);
                } else {
                    tracing::warn!("Decline for unknown entry {}", id);
                }
                Some(Task::none())
            }

            Message::ResetQueue => {
                self.queue = QueueState::seeded();
                tracing::info!("Queue reset to built-in entries");
                Some(Task::none())
            }

            Message::QueueLoaded(Ok(entries)) => {
                tracing::info!("Loaded {} queue entries", entries.len());
                self.queue.replace(entries.clone());
                Some(Task::none())
            }

            Message::QueueLoaded(Err(e)) => {
                // Missing file is the common case; the built-in entries stay
                tracing::debug!("Using built-in queue entries: {}", e);
                Some(Task::none())
            }

            _ => None,
        }
    }
}
