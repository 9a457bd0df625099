use super::theme::ParodyTheme;
use iced::widget::container::Style;
use iced::{color, Color, Theme};
use iced::{Background, Border};

/// A custom theme for container respecting Light and Dark ParodyTheme
pub fn first_class_container_rounded_theme(theme: &Theme) -> Style {
    let (background, border_color) = if ParodyTheme::is_light(theme) {
        (Background::Color(color!(0xcccccc)), color!(0xbbbbbb))
    } else {
        (Background::Color(color!(0x1c1c1c)), Color::BLACK)
    };

    Style {
        text_color: Some(theme.palette().text),
        background: Some(background),
        border: Border {
            width: 1.0,
            radius: 10.0.into(),
            color: border_color,
        },
        ..Default::default()
    }
}

/// A custom theme for container respecting Light and Dark ParodyTheme
/// designed specifically for the empty poster frame
pub fn poster_frame_container_theme(theme: &Theme) -> Style {
    let background = if ParodyTheme::is_light(theme) {
        Background::Color(color!(0xbbbbbb))
    } else {
        Background::Color(color!(0x282828))
    };

    Style {
        background: Some(background),
        border: Border {
            width: 0.0,
            radius: 10.0.into(),
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}
