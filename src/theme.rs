//! Colour palette and container styles for the portfolio.

use iced::widget::container;
use iced::{Background, Border, Color, Theme};

const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color { r, g, b, a }
}

pub const PAGE_BACKGROUND: Color = rgba(0.02, 0.02, 0.04, 1.0);
pub const SECTION_BACKGROUND: Color = Color::BLACK;
pub const TEXT_PRIMARY: Color = Color::WHITE;
pub const TEXT_MUTED: Color = rgba(0.62, 0.64, 0.68, 1.0);
pub const TEXT_SOFT: Color = rgba(0.82, 0.83, 0.86, 1.0);
pub const ACCENT: Color = rgba(0.15, 0.39, 0.92, 1.0);
pub const ERROR: Color = rgba(0.94, 0.27, 0.27, 1.0);
pub const SUCCESS: Color = rgba(0.29, 0.87, 0.5, 1.0);
pub const PENDING: Color = rgba(0.98, 0.8, 0.08, 1.0);
pub const CARD_BACKGROUND: Color = rgba(0.07, 0.09, 0.15, 0.8);
pub const CARD_BORDER: Color = rgba(0.22, 0.25, 0.32, 0.7);
pub const TRACK: Color = rgba(1.0, 1.0, 1.0, 0.15);

/// Parse `#RRGGBB` into a colour.
pub fn color_from_hex(hex: &str) -> Option<Color> {
    let digits = hex.trim().strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// `color` with its alpha scaled by `opacity`.
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

pub fn solid(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Rounded translucent card, faded by `opacity`.
pub fn card(opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(faded(CARD_BACKGROUND, opacity))),
        text_color: Some(faded(TEXT_PRIMARY, opacity)),
        border: Border {
            color: faded(CARD_BORDER, opacity),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Filled circle of the given colour.
pub fn dot(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub fn rounded_bar(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: 3.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
