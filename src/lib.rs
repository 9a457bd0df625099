pub mod core;
pub mod gui;
