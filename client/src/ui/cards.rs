use iced::widget::{column, container, image, text, Space};
use iced::{Alignment, Element, Gradient, Length};

use crate::messages::Msg;
use crate::portrait::PortraitFill;

use super::plate;

pub const CARD_WIDTH: f32 = 320.0;
const PORTRAIT_HEIGHT: f32 = 230.0;

/// One player card: headshot (or gradient) over a name plate and a stat line.
/// A card with no resolved portrait yet draws the same gradient as a settled
/// fallback, so late or failed loads never hold up the round.
pub fn player_card<'a>(
    name: &'a str,
    stat_line: Element<'a, Msg>,
    fill: Option<&PortraitFill>,
    fallback: Gradient,
) -> Element<'a, Msg> {
    let backdrop: Element<'a, Msg> = match fill {
        Some(PortraitFill::Image(handle)) => image(handle.clone())
            .width(Length::Fixed(CARD_WIDTH))
            .height(Length::Fixed(PORTRAIT_HEIGHT))
            .into(),
        _ => container(Space::with_height(Length::Fixed(PORTRAIT_HEIGHT)))
            .width(Length::Fixed(CARD_WIDTH))
            .height(Length::Fixed(PORTRAIT_HEIGHT))
            .style(move |_theme: &iced::Theme| iced::widget::container::Style {
                background: Some(iced::Background::Gradient(fallback)),
                ..Default::default()
            })
            .into(),
    };

    container(
        column![
            backdrop,
            Space::with_height(Length::Fixed(12.0)),
            text(name).size(24),
            Space::with_height(Length::Fixed(6.0)),
            stat_line,
            Space::with_height(Length::Fixed(12.0)),
        ]
        .align_x(Alignment::Center)
        .spacing(4),
    )
    .width(Length::Fixed(CARD_WIDTH))
    .style(|_theme: &iced::Theme| plate())
    .into()
}
