//! Program settings
//!
//! Settings live in a toml file inside the config directory. A missing file or
//! missing keys fall back to the defaults.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::PoisonError;
use std::time::Duration;
use std::{fmt, fs};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::paths::PATHS;

const SETTINGS_FILENAME: &str = "settings.toml";

pub const DEFAULT_LOOKUP_ADDRESS: &str = "http://localhost:8000/api/search";
pub const DEFAULT_PLACEHOLDER_POSTER: &str =
    "https://via.placeholder.com/300x450?text=No+Image+Available";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{}'", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("settings file '{}' is not valid", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write settings file '{}'", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Clone, Default, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

pub const ALL_THEMES: [Theme; 2] = [Theme::Light, Theme::Dark];

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        };

        write!(f, "{}", str)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct LookupSettings {
    /// Address of the movie lookup service
    pub endpoint: String,
    /// Poster shown for movies that come without one
    pub placeholder_poster_url: String,
    /// Zero disables the timeout
    pub request_timeout_secs: u64,
}

impl LookupSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_LOOKUP_ADDRESS.to_owned(),
            placeholder_poster_url: DEFAULT_PLACEHOLDER_POSTER.to_owned(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Default, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct AppearanceSettings {
    pub theme: Theme,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub lookup: LookupSettings,
    pub appearance: AppearanceSettings,
}

impl Settings {
    /// Location of the settings file in the current config directory
    pub fn settings_file_path() -> PathBuf {
        PATHS
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get_config_dir_path()
            .join(SETTINGS_FILENAME)
    }

    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&Self::settings_file_path())
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::settings_file_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "no settings file at '{}', using default settings",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_owned(),
                    source,
                })
            }
        };

        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(self)?;

        let write = |path: &Path| -> io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)
        };

        write(path).map_err(|source| SettingsError::Write {
            path: path.to_owned(),
            source,
        })?;

        info!("settings saved to '{}'", path.display());
        Ok(())
    }
}
