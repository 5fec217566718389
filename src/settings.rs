use std::path::Path;

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use config::FileFormat;
use serde::Deserialize;

const DEFAULT_SETTINGS: &str = include_str!("../settings-default.toml");

#[derive(Debug, Deserialize)]
pub struct GeneralSettings {
    pub log_file: String,
    pub debug: bool,
}

#[derive(Debug, Deserialize)]
pub struct WorldPopSettings {
    pub feed_url: String,
}

#[derive(Debug, Deserialize)]
pub struct DownloaderSettings {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Deserialize)]
pub struct OutputSettings {
    pub directory: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DebugSettings {
    pub record_start: Option<usize>,
    pub record_limit: Option<usize>,
}

/// This struct stores the program settings.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub worldpop: WorldPopSettings,
    pub downloader: DownloaderSettings,
    pub output: OutputSettings,
    #[serde(default)]
    pub debug: DebugSettings,
    pub general: GeneralSettings,
}

impl Settings {
    pub fn new(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut s = ConfigBuilder::<DefaultState>::default();
        s = s.add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));
        s = s.add_source(File::new("settings.toml", FileFormat::Toml).required(false));
        if let Some(path) = path {
            s = s.add_source(File::from(path));
        }

        let config = s.build()?;

        config.try_deserialize()
    }

    /// Number of feed records to skip, only honoured in debug mode.
    pub fn record_start(&self) -> usize {
        self.debug
            .record_start
            .filter(|_| self.general.debug)
            .unwrap_or(usize::MIN)
    }

    /// Maximum number of feed records to process, only honoured in debug mode.
    pub fn record_limit(&self) -> usize {
        self.debug
            .record_limit
            .filter(|_| self.general.debug)
            .unwrap_or(usize::MAX)
    }
}
