use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::RwLock;

use directories::ProjectDirs;
use lazy_static::lazy_static;
use tracing::warn;

lazy_static! {
    pub static ref PATHS: RwLock<Paths> = RwLock::new(Paths::default());
}

/// Data paths for the program
///
/// Stores a custom config path, while providing the platform specific path
/// when no custom one is provided
#[derive(Debug, Default, Clone)]
pub struct Paths {
    custom_config_dir_path: Option<PathBuf>,
}

impl Paths {
    fn project_dir() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
    }

    pub fn get_config_dir_path(&self) -> Cow<'_, PathBuf> {
        if let Some(config_path) = &self.custom_config_dir_path {
            Cow::Borrowed(config_path)
        } else if let Some(project_dir) = Self::project_dir() {
            Cow::Owned(PathBuf::from(project_dir.config_dir()))
        } else {
            warn!("could not get the platform config directory, using the current directory");
            Cow::Owned(PathBuf::from("."))
        }
    }

    pub fn set_config_dir_path(&mut self, config_dir_path: PathBuf) {
        self.custom_config_dir_path = Some(config_dir_path)
    }
}
