use iced::widget::canvas::Cache;
use iced::widget::{Button, Column, Container, Row, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views::status::status_view;
use crate::client::gui::widgets::pad_canvas;
use crate::client::models::messages::Message;
use crate::client::models::pad::DrawPad;

const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18);
const FRAME_BG: Color = Color::from_rgb(0.35, 0.36, 0.5);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");
const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

fn canvas_frame_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(FRAME_BG)),
        border: iced::Border {
            width: 1.0,
            color: FRAME_BG,
            radius: 8.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
        ..Default::default()
    }
}

// Icon + label button, same shape for both actions
fn action_button<'a>(icon: &'a str, label: &'a str, style: iced::theme::Button, action: Message) -> Element<'a, Message> {
    Button::new(
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new(icon).font(EMOJI_FONT).size(16))
            .push(Text::new(label).font(BOLD_FONT).size(14)),
    )
    .style(style)
    .on_press(action)
    .padding([10, 24])
    .into()
}

pub fn view<'a>(pad: &'a DrawPad, cache: &'a Cache, endpoint: &'a str) -> Element<'a, Message> {
    let raster = pad.raster();

    let title = Row::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(Text::new("🖌️").font(EMOJI_FONT).size(28))
        .push(Text::new("Digit Classifier").font(BOLD_FONT).size(30).style(TEXT_PRIMARY));

    let canvas = Container::new(pad_canvas::view(raster, pad.pen(), cache))
        .padding(2)
        .style(iced::theme::Container::Custom(Box::new(canvas_frame_appearance)));

    let buttons = Row::new()
        .spacing(16)
        .align_items(Alignment::Center)
        .push(action_button("🧹", "Clear", iced::theme::Button::Destructive, Message::Clear))
        .push(action_button("⚡", "What is this?", iced::theme::Button::Primary, Message::Submit));

    let footer = Text::new(format!("Predictor: {}", endpoint))
        .size(12)
        .style(TEXT_SECONDARY);

    let content = Column::new()
        .spacing(16)
        .padding(24)
        .align_items(Alignment::Center)
        .push(title)
        .push(canvas)
        .push(buttons)
        .push(status_view(pad.status(), raster.width() as f32))
        .push(footer);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
