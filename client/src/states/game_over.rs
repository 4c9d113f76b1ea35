use iced::widget::{button, column, container, text, Space};
use iced::{Alignment, Element, Length};

use crate::app::App;
use crate::messages::Msg;
use crate::ui::{GOLD, TEXT_DIM};

impl App {
    pub fn game_over_view(&self) -> Element<'_, Msg> {
        let score = self.final_score.unwrap_or(0);

        let closing: Element<'_, Msg> = match &self.final_line {
            Some(line) => text(line.as_str()).size(16).style(
                |_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(TEXT_DIM),
                    ..Default::default()
                },
            )
            .into(),
            None => Space::with_height(Length::Fixed(0.0)).into(),
        };

        container(
            column![
                text("Game Over").size(44),
                Space::with_height(Length::Fixed(20.0)),
                text("final streak").size(16),
                text(score.to_string())
                    .size(64)
                    .style(|_theme: &iced::Theme| iced::widget::text::Style {
                        color: Some(GOLD),
                        ..Default::default()
                    }),
                Space::with_height(Length::Fixed(12.0)),
                closing,
                Space::with_height(Length::Fixed(32.0)),
                button(text("Play again").size(18))
                    .on_press(Msg::RestartPressed)
                    .padding([12.0, 30.0]),
            ]
            .align_x(Alignment::Center)
            .spacing(6),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}
