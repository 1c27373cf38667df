use iced::widget::{Column, Container, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::messages::Message;
use crate::client::models::pad::PadStatus;
use crate::client::models::prediction::Sentiment;

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const ERROR_BG: Color = Color::from_rgb(0.45, 0.12, 0.16);
const HAPPY: Color = Color::from_rgb(0.2, 0.8, 0.4);
const WORRIED: Color = Color::from_rgb(1.0, 0.35, 0.45);
// Keeps the layout from jumping when the card appears
const CARD_MIN_HEIGHT: f32 = 80.0;

fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Happy => HAPPY,
        Sentiment::Worried => WORRIED,
    }
}

/// Result card under the buttons: pending indicator, digit with score, or error.
pub fn status_view(status: &PadStatus, width: f32) -> Element<'_, Message> {
    let Some(headline) = status.headline() else {
        return Space::new(Length::Fixed(width), Length::Fixed(CARD_MIN_HEIGHT)).into();
    };

    let mut content = Column::new()
        .spacing(4)
        .align_items(Alignment::Center)
        .push(Text::new(headline).font(EMOJI_FONT).size(28).style(Color::WHITE));

    if let (Some(line), Some(sentiment)) = (status.score_line(), status.sentiment()) {
        content = content.push(
            Text::new(line)
                .font(EMOJI_FONT)
                .size(14)
                .style(sentiment_color(sentiment)),
        );
    }

    let bg_color = match status {
        PadStatus::Rejected(_) | PadStatus::Failed(_) => ERROR_BG,
        _ => CARD_BG,
    };

    Container::new(content)
        .padding([12, 16])
        .width(Length::Fixed(width))
        .height(Length::Fixed(CARD_MIN_HEIGHT))
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
            iced::widget::container::Appearance {
                background: Some(iced::Background::Color(bg_color)),
                text_color: Some(Color::WHITE),
                border: iced::Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                shadow: iced::Shadow {
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 12.0,
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                },
            }
        })))
        .into()
}
