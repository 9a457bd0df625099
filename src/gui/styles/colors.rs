use iced::{color, Color};

/// The accent color for the program
pub fn accent_color() -> Color {
    purple()
}

pub fn red() -> Color {
    color!(0xd64545)
}

pub fn purple() -> Color {
    color!(0x8f6593)
}
