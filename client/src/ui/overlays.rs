use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::messages::Msg;

use super::{plate, TEXT_DIM};

/// Blocking notice for transport failures; gameplay resumes on dismiss.
pub fn alert_view(message: &str) -> Element<'_, Msg> {
    let panel = container(
        column![
            text(message).size(20),
            Space::with_height(Length::Fixed(20.0)),
            button(text("OK").size(16))
                .on_press(Msg::DismissAlert)
                .padding([10.0, 28.0]),
        ]
        .align_x(Alignment::Center)
        .spacing(8),
    )
    .padding(30)
    .style(|_theme: &iced::Theme| plate());

    container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

pub fn confirm_quit_view(score: u32) -> Element<'static, Msg> {
    let panel = container(
        column![
            text("Are you sure you want to quit?").size(20),
            Space::with_height(Length::Fixed(8.0)),
            text(format!("Your streak ends at {score}."))
                .size(15)
                .style(|_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(TEXT_DIM),
                    ..Default::default()
                }),
            Space::with_height(Length::Fixed(20.0)),
            row![
                button(text("Quit").size(16))
                    .on_press(Msg::QuitConfirmed)
                    .padding([10.0, 24.0]),
                Space::with_width(Length::Fixed(16.0)),
                button(text("Keep playing").size(16))
                    .on_press(Msg::QuitDeclined)
                    .padding([10.0, 24.0]),
            ],
        ]
        .align_x(Alignment::Center)
        .spacing(8),
    )
    .padding(30)
    .style(|_theme: &iced::Theme| plate());

    container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
