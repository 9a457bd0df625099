//! Client for the movie lookup service
//!
//! The service takes a movie title and answers with the details of the best
//! matching movie along with a generated parody of its plot.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::ApiError;
use crate::core::search::SearchQuery;
use crate::core::settings_config::LookupSettings;

#[derive(Debug, Serialize)]
struct MovieRequest<'a> {
    movie_name: &'a str,
}

/// Shown for error bodies that parse but say nothing useful
const SERVICE_FAILURE_MESSAGE: &str = "Failed to fetch movie data";

/// A movie as answered by the lookup service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieResult {
    pub title: String,
    pub year: Option<String>,
    pub genres: Option<String>,
    pub image_url: Option<String>,
    /// Only used to tell whether the service actually found the movie
    pub plot: String,
    pub parody: String,
}

impl MovieResult {
    /// Builds the movie out of a response body, `None` when the body carries no plot
    fn from_json(value: &Value) -> Option<Self> {
        let movie = value.as_object()?;
        let plot = movie.get("plot").and_then(present_text)?;

        Some(Self {
            title: movie.get("title").map(display_text).unwrap_or_default(),
            year: movie.get("year").and_then(truthy_text),
            genres: movie.get("genres").and_then(truthy_text),
            image_url: movie.get("imageUrl").and_then(truthy_text),
            plot,
            parody: movie.get("parody").map(display_text).unwrap_or_default(),
        })
    }

    /// The poster to show for this movie, falling back to the given placeholder
    pub fn poster_url<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.image_url.as_deref().unwrap_or(placeholder)
    }
}

/// Text of a scalar json value when it carries something to show
///
/// Empty strings, zero, `false` and `null` carry nothing.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Bool(true) => Some(true.to_string()),
        _ => None,
    }
}

/// Like `truthy_text`, but arrays and objects count as present too
fn present_text(value: &Value) -> Option<String> {
    match value {
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
        _ => truthy_text(value),
    }
}

fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(boolean) => boolean.to_string(),
        _ => String::new(),
    }
}

/// Turns the status and body of a lookup response into a movie
fn interpret_response(status: StatusCode, body: &str) -> Result<MovieResult, ApiError> {
    if !status.is_success() {
        let message = match serde_json::from_str::<Value>(body) {
            Ok(error_body) => error_body
                .get("detail")
                .and_then(truthy_text)
                .unwrap_or_else(|| SERVICE_FAILURE_MESSAGE.to_owned()),
            Err(_) => format!(
                "HTTP error {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or_default()
            ),
        };

        return Err(ApiError::Service {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(MovieResult::from_json)
        .ok_or(ApiError::NotFound)
}

/// Handle to the movie lookup service
///
/// Cloning is cheap, clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct ParodyLookup {
    client: Client,
    endpoint: String,
}

impl ParodyLookup {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Creates a lookup whose requests give up after the configured timeout
    pub fn from_settings(settings: &LookupSettings) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::Network)?;

        Ok(Self::new(client, settings.endpoint.clone()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The underlying http client, shared with poster downloads
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Asks the service for the movie matching the query
    ///
    /// Issues exactly one request, nothing is retried.
    pub async fn search(&self, query: &SearchQuery) -> Result<MovieResult, ApiError> {
        debug!("requesting '{}' from {}", query, self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&MovieRequest {
                movie_name: query.as_str(),
            })
            .send()
            .await
            .map_err(ApiError::Network)?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::Network)?;

        interpret_response(status, &body).map_err(|err| {
            match &err {
                ApiError::Service { status, message } => {
                    warn!("lookup service answered {}: {}", status, message)
                }
                ApiError::NotFound => warn!("lookup service found no plot for '{}'", query),
                ApiError::Network(_) => {}
            }
            err
        })
    }
}
