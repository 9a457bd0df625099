pub mod api;
pub mod cli;
pub mod paths;
pub mod search;
pub mod settings_config;
