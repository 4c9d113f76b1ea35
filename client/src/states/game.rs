use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::app::App;
use crate::messages::Msg;
use crate::ui::{self, cards, GOLD, TEXT_DIM};

impl App {
    pub fn game_view(&self) -> Element<'_, Msg> {
        let Some(game) = &self.game else {
            // only reachable if a stale message lands after a restart
            return container(text("No game in progress").size(20))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        };

        let stat_label = format!("career {}", game.stat_label());

        let header = row![
            text("streak").size(16),
            Space::with_width(Length::Fixed(10.0)),
            text(game.score.to_string())
                .size(28)
                .style(|_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(GOLD),
                    ..Default::default()
                }),
            Space::with_width(Length::Fill),
            button(text("Quit").size(14))
                .on_press(Msg::QuitPressed)
                .padding([8.0, 18.0]),
            Space::with_width(Length::Fixed(8.0)),
            button(text("log").size(12))
                .on_press(Msg::ToggleLog)
                .padding([8.0, 12.0]),
        ]
        .align_y(Alignment::Center)
        .width(Length::Fill);

        let shown_stat: Element<'_, Msg> = column![
            text(ui::grouped(game.shown.stat_value)).size(32),
            text(stat_label.clone()).size(14).style(
                |_theme: &iced::Theme| iced::widget::text::Style {
                    color: Some(TEXT_DIM),
                    ..Default::default()
                }
            ),
        ]
        .align_x(Alignment::Center)
        .spacing(2)
        .into();

        // the hidden value stays a question mark until the backend reveals it
        let hidden_stat: Element<'_, Msg> = match self.revealed_stat {
            Some(value) => column![
                text(ui::grouped(value)).size(32),
                text(stat_label).size(14).style(
                    |_theme: &iced::Theme| iced::widget::text::Style {
                        color: Some(TEXT_DIM),
                        ..Default::default()
                    }
                ),
            ]
            .align_x(Alignment::Center)
            .spacing(2)
            .into(),
            None => column![
                text("?").size(32),
                text(stat_label).size(14).style(
                    |_theme: &iced::Theme| iced::widget::text::Style {
                        color: Some(TEXT_DIM),
                        ..Default::default()
                    }
                ),
            ]
            .align_x(Alignment::Center)
            .spacing(2)
            .into(),
        };

        let shown_card = cards::player_card(
            &game.shown.name,
            shown_stat,
            self.portraits.get(&game.shown.id),
            ui::shown_fallback(),
        );
        let hidden_card = cards::player_card(
            &game.hidden.name,
            hidden_stat,
            self.portraits.get(&game.hidden.id),
            ui::hidden_fallback(),
        );

        let board = row![
            shown_card,
            container(text("VS").size(22)).center_y(Length::Fixed(120.0)),
            hidden_card,
        ]
        .spacing(24)
        .align_y(Alignment::Center);

        let enabled = !self.guess_locked;
        let controls = row![
            button(text("Higher").size(18))
                .on_press_maybe(enabled.then_some(Msg::GuessHigher))
                .padding([12.0, 30.0]),
            Space::with_width(Length::Fixed(16.0)),
            button(text("Lower").size(18))
                .on_press_maybe(enabled.then_some(Msg::GuessLower))
                .padding([12.0, 30.0]),
        ]
        .align_y(Alignment::Center);

        let mut content = column![
            header,
            Space::with_height(Length::Fixed(24.0)),
            board,
            Space::with_height(Length::Fixed(28.0)),
            controls,
        ]
        .align_x(Alignment::Center)
        .spacing(10)
        .padding(24);

        if self.show_log {
            let mut panel = column![].spacing(2);
            for line in self.log.iter().rev().take(10) {
                panel = panel.push(text(line.as_str()).size(12));
            }
            content = content.push(Space::with_height(Length::Fixed(16.0)));
            content = content.push(panel);
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }
}
