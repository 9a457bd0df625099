use thiserror::Error;

pub mod parody_lookup;
pub mod poster;

/// The message shown when the lookup service answers without a usable movie
pub const NOT_FOUND_MESSAGE: &str = "Could not find movie plot";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error during request: {0}")]
    Network(reqwest::Error),
    #[error("{message}")]
    Service { status: u16, message: String },
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,
}
