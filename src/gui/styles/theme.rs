use iced::theme::Palette;
use iced::{color, Color, Theme};

use crate::core::settings_config;

#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum ParodyTheme {
    #[default]
    Light,
    Dark,
}

impl ParodyTheme {
    pub fn palette(&self) -> Palette {
        match self {
            ParodyTheme::Light => Palette {
                background: color!(0xdddddd),
                text: Color::BLACK,
                primary: color!(0x8f6593),
                success: Color::from_rgb(0.0, 1.0, 0.0),
                danger: Color::from_rgb(1.0, 0.0, 0.0),
            },
            ParodyTheme::Dark => Palette {
                background: color!(0x161616),
                text: color!(0xcccccc),
                primary: color!(0x8f6593),
                success: Color::from_rgb(0.0, 1.0, 0.0),
                danger: Color::from_rgb(1.0, 0.0, 0.0),
            },
        }
    }

    pub fn get_theme(&self) -> Theme {
        let name = match self {
            ParodyTheme::Light => "Parody Finder Light",
            ParodyTheme::Dark => "Parody Finder Dark",
        };
        Theme::custom(name.to_owned(), self.palette())
    }

    /// Whether the given iced theme is the light variant
    pub fn is_light(theme: &Theme) -> bool {
        theme.palette().background == ParodyTheme::Light.palette().background
    }
}

impl From<&settings_config::Theme> for ParodyTheme {
    fn from(theme: &settings_config::Theme) -> Self {
        match theme {
            settings_config::Theme::Light => ParodyTheme::Light,
            settings_config::Theme::Dark => ParodyTheme::Dark,
        }
    }
}
