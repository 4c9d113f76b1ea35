use iced::widget::{button, column, container, text, Space};
use iced::{Alignment, Element, Length};

use hoopstreak_protocol::StatChoice;

use crate::app::App;
use crate::messages::Msg;
use crate::ui::{ACCENT, TEXT_DIM};

fn blurb(choice: StatChoice) -> &'static str {
    match choice {
        StatChoice::Points => "Who scored more over their career?",
        StatChoice::Assists => "Who dished more dimes?",
        StatChoice::Rebounds => "Who cleaned more glass?",
    }
}

impl App {
    pub fn setup_view(&self) -> Element<'_, Msg> {
        let enabled = !self.starting;

        let mut choices = column![].spacing(15).align_x(Alignment::Center);
        for choice in StatChoice::ALL {
            choices = choices.push(
                button(
                    container(
                        column![
                            text(choice.to_string()).size(24),
                            Space::with_height(Length::Fixed(6.0)),
                            text(blurb(choice)).size(14).style(
                                |_theme: &iced::Theme| iced::widget::text::Style {
                                    color: Some(TEXT_DIM),
                                    ..Default::default()
                                }
                            ),
                        ]
                        .align_x(Alignment::Center)
                        .spacing(4),
                    )
                    .center_x(Length::Fill),
                )
                .on_press_maybe(enabled.then_some(Msg::StartGame(Some(choice))))
                .width(Length::Fixed(420.0))
                .padding(20)
                .style(|_theme: &iced::Theme, status| iced::widget::button::Style {
                    background: Some(iced::Background::Color(match status {
                        iced::widget::button::Status::Hovered => iced::Color::from_rgb(0.3, 0.3, 0.35),
                        _ => iced::Color::from_rgb(0.2, 0.2, 0.25),
                    })),
                    text_color: iced::Color::from_rgb(0.9, 0.9, 0.9),
                    border: iced::Border {
                        color: ACCENT,
                        width: 2.0,
                        radius: iced::border::Radius::from(12.0),
                    },
                    ..Default::default()
                }),
            );
        }

        let status: Element<'_, Msg> = if self.starting {
            text("Contacting backend…").size(14).into()
        } else {
            Space::with_height(Length::Fixed(0.0)).into()
        };

        container(
            column![
                Space::with_height(Length::Fixed(60.0)),
                text("Hoopstreak").size(44),
                Space::with_height(Length::Fixed(8.0)),
                text("Higher or lower? Pick a stat and ride the streak.").size(16),
                Space::with_height(Length::Fixed(40.0)),
                choices,
                Space::with_height(Length::Fixed(24.0)),
                button(text("Surprise me").size(15))
                    .on_press_maybe(enabled.then_some(Msg::StartGame(None)))
                    .padding([10.0, 24.0]),
                Space::with_height(Length::Fixed(16.0)),
                status,
            ]
            .align_x(Alignment::Center)
            .spacing(10),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}
