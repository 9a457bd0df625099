use iced::theme::Theme;
use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color};

use super::colors::accent_color;

/// A custom theme for the search button, filled with the accent color
pub fn search_button_theme(theme: &Theme, status: Status) -> Style {
    let background = match status {
        Status::Hovered | Status::Pressed => Color {
            a: 0.8,
            ..accent_color()
        },
        Status::Active | Status::Disabled => accent_color(),
    };

    Style {
        background: Some(Background::Color(background)),
        text_color: theme.palette().background,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}
