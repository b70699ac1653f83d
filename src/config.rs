use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for changelog-watch.
///
/// Contains watcher behavior (detection mode, settle delay) and formatting
/// options for synthesized entries.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub watcher: WatcherConfig,

    #[serde(default)]
    pub format: FormatConfig,
}

/// How the detector inspects an incoming change event.
///
/// The two modes are not equivalent: `ActiveLine` is robust to cursor
/// position, `InsertedText` is robust to edits outside the active line.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionMode {
    /// Match the full text of the line the event points at
    #[default]
    ActiveLine,
    /// Match the literal text the change event inserted
    InsertedText,
}

/// Returns the default settle delay between the insert and delete edits.
fn default_settle_delay_ms() -> u64 {
    50
}

/// Configuration for trigger detection behavior.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WatcherConfig {
    #[serde(default)]
    pub detection_mode: DetectionMode,

    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        WatcherConfig {
            detection_mode: DetectionMode::default(),
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

/// Returns the default top-level changelog header.
fn default_header() -> String {
    "# Changelog".to_string()
}

/// Returns the default editable body placeholder.
fn default_placeholder() -> String {
    "[Note user can add]".to_string()
}

/// Configuration for synthesized entry formatting.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FormatConfig {
    #[serde(default = "default_header")]
    pub header: String,

    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            header: default_header(),
            placeholder: default_placeholder(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog-watch.toml` in current directory
/// 3. `.changelog-watch.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./changelog-watch.toml").exists() {
        fs::read_to_string("./changelog-watch.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".changelog-watch.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
