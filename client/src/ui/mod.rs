pub mod cards;
pub mod overlays;

use iced::border::Radius;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Border, Color, Gradient, Radians};

pub const INK_SOFT: Color = Color { r: 0.14, g: 0.14, b: 0.16, a: 1.0 };
pub const TEXT: Color = Color { r: 0.92, g: 0.92, b: 0.94, a: 1.0 };
pub const TEXT_DIM: Color = Color { r: 0.70, g: 0.70, b: 0.72, a: 1.0 };
pub const ACCENT: Color = Color { r: 0.36, g: 0.62, b: 0.98, a: 1.0 };
pub const GOLD: Color = Color { r: 0.980, g: 0.860, b: 0.220, a: 1.0 };

pub fn plate() -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(INK_SOFT)),
        border: Border {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.50),
            width: 1.0,
            radius: Radius::from(10.0),
        },
        text_color: Some(TEXT),
        ..Default::default()
    }
}

// 135° diagonal, like the card art direction
const DIAGONAL: Radians = Radians(2.3561945);

/// Gradient behind the revealed player's card when no headshot loads.
pub fn shown_fallback() -> Gradient {
    Gradient::Linear(
        Linear::new(DIAGONAL)
            .add_stop(0.0, Color::from_rgb8(0x1a, 0x1a, 0x2e))
            .add_stop(1.0, Color::from_rgb8(0x0f, 0x0f, 0x1e)),
    )
}

/// Gradient behind the hidden player's card when no headshot loads.
pub fn hidden_fallback() -> Gradient {
    Gradient::Linear(
        Linear::new(DIAGONAL)
            .add_stop(0.0, Color::from_rgb8(0x16, 0x21, 0x3e))
            .add_stop(1.0, Color::from_rgb8(0x0a, 0x16, 0x28)),
    )
}

/// Thousands-grouped rendering of a stat value, e.g. 38387 -> "38,387".
pub fn grouped(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
