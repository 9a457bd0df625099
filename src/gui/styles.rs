pub mod button_styles;
pub mod colors;
pub mod container_styles;
pub mod scrollable_styles;
pub mod text_styles;
pub mod theme;
