// src/app/view.rs
//! Application view rendering

use iced::widget::{column, container, scrollable};
use iced::{Alignment, Color, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, theme};

/// Widest the queue column gets on large windows
const CONTENT_MAX_WIDTH: f32 = 560.0;

impl App {
    /// Build the application view
    pub fn view(&self) -> Element<'_, Message> {
        let accept = rgb8(self.core.settings.accept_color);
        let decline = rgb8(self.core.settings.decline_color);

        let list = components::review_list::view(&self.queue.items, accept, decline);

        let content = scrollable(
            container(column![list].max_width(CONTENT_MAX_WIDTH).padding(24))
                .width(Fill)
                .align_x(Alignment::Center),
        );

        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::main_content)
            .into()
    }
}

fn rgb8([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgb8(r, g, b)
}
