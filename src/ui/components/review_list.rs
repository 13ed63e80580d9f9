//! Review queue list component
//!
//! Pending entries render as swipeable rows: drag right to accept, drag
//! left to decline. Accepted entries stay in the list as static dimmed
//! rows; declined entries are removed by the update handler.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::app::{Message, ReviewItem};
use crate::ui::primitives::swipe_row::swipe_row;
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};

const ROW_HEIGHT: f32 = 64.0;
const ROW_SPACING: f32 = 4.0;

/// Build the review queue view
pub fn view<'a>(
    items: &'a [ReviewItem],
    accept_color: Color,
    decline_color: Color,
) -> Element<'a, Message> {
    let pending = items.iter().filter(|item| !item.finished).count();

    let header = row![
        text("Review queue")
            .size(20)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme))
            }),
        Space::new().width(Fill),
        text(format!("{} pending", pending))
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::dimmed_text(theme))
            }),
        button(text("Reset").size(14))
            .style(theme::text_button)
            .on_press(Message::ResetQueue),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .padding(Padding::new(0.0).bottom(16.0));

    if items.is_empty() {
        return column![
            header,
            container(
                text("All caught up")
                    .size(14)
                    .style(|theme| text::Style {
                        color: Some(theme::text_secondary(theme))
                    }),
            )
            .width(Fill)
            .height(200)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center),
        ]
        .into();
    }

    let rows: Vec<Element<'_, Message>> = items
        .iter()
        .map(|item| view_review_item(item, accept_color, decline_color))
        .collect();

    let hint = container(
        text("Swipe right to accept, swipe left to decline")
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::dimmed_text(theme)),
            }),
    )
    .width(Fill)
    .align_x(Alignment::Center)
    .padding(Padding::new(0.0).top(16.0));

    column![header, column(rows).spacing(ROW_SPACING), hint].into()
}

/// Build a single queue entry
fn view_review_item(
    item: &ReviewItem,
    accept_color: Color,
    decline_color: Color,
) -> Element<'_, Message> {
    if item.finished {
        return finished_row(item);
    }

    let content = container(row_body(item, |theme| theme::text_primary(theme)))
        .width(Fill)
        .height(ROW_HEIGHT)
        .align_y(Alignment::Center)
        .style(theme::review_row);

    swipe_row(content)
        .key(item.swipe_key())
        .height(ROW_HEIGHT)
        .accept_color(accept_color)
        .decline_color(decline_color)
        .on_accept(Message::Accepted(item.id))
        .on_decline(Message::Declined(item.id))
        .into()
}

/// Static row for an entry that has already been accepted
fn finished_row(item: &ReviewItem) -> Element<'_, Message> {
    let body = row![
        row_body(item, |theme| theme::text_muted(theme)),
        Space::new().width(Fill),
        text("Accepted").size(12).style(|theme| text::Style {
            color: Some(theme::dimmed_text(theme)),
        }),
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(0.0).right(16.0));

    container(body)
        .width(Fill)
        .height(ROW_HEIGHT)
        .align_y(Alignment::Center)
        .style(theme::finished_row)
        .into()
}

/// Title and detail lines shared by pending and finished rows
fn row_body(
    item: &ReviewItem,
    title_color: impl Fn(&iced::Theme) -> Color + 'static,
) -> Element<'_, Message> {
    let title = text(&item.primary)
        .size(14)
        .font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        })
        .style(move |theme| text::Style {
            color: Some(title_color(theme)),
        });

    let detail = text(&item.secondary).size(12).style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    });

    column![title, detail]
        .spacing(2)
        .padding(Padding::new(8.0).left(16.0))
        .into()
}
