use crate::error::{Result, TrackerError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that points tracker at a specific data file.
pub const DATA_FILE_ENV: &str = "TRACKER_DATA_FILE";

const APP_DIR_NAME: &str = "tracker-cli";
const DATA_FILENAME: &str = "data.json";
const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LIST_WINDOW_DAYS: i64 = 3;

/// Configuration for tracker, stored in `config.json` next to the default data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackerConfig {
    /// How far back `list` reaches when no `--from` is given
    #[serde(default = "default_list_window_days")]
    pub list_window_days: i64,
}

fn default_list_window_days() -> i64 {
    DEFAULT_LIST_WINDOW_DAYS
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            list_window_days: DEFAULT_LIST_WINDOW_DAYS,
        }
    }
}

impl TrackerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TrackerError::Io)?;
        let config: TrackerConfig =
            serde_json::from_str(&content).map_err(TrackerError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TrackerError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TrackerError::Serialization)?;
        fs::write(config_path, content).map_err(TrackerError::Io)?;
        Ok(())
    }

    /// Window in seconds. Negative settings count as zero.
    pub fn list_window_secs(&self) -> i64 {
        self.list_window_days.max(0).saturating_mul(24 * 3600)
    }
}

/// Per-user directory holding `data.json` and `config.json` (`~/.config/tracker-cli` on Linux).
/// Not created here.
pub fn config_root() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_DIR_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TrackerError::Store("Could not determine config directory".to_string()))
}

/// The data file to use: `$TRACKER_DATA_FILE` when set, otherwise `data.json` in
/// [`config_root`].
pub fn data_file_path() -> Result<PathBuf> {
    data_file_from(std::env::var_os(DATA_FILE_ENV), config_root)
}

fn data_file_from<F>(env_value: Option<OsString>, default_root: F) -> Result<PathBuf>
where
    F: FnOnce() -> Result<PathBuf>,
{
    match env_value {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Ok(default_root()?.join(DATA_FILENAME)),
    }
}
