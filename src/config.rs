use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::report::ReportFormat;

/// Config file picked up from the working directory when present
pub const CONFIG_FILENAME: &str = "hotelmenu.toml";

/// Hotelmenu configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelMenuConfig {
    /// Configuration file version
    pub version: String,

    /// Order log settings
    pub input: InputConfig,

    /// Report settings
    pub report: ReportConfig,
}

impl Default for HotelMenuConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            input: InputConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Order log to read when none is given on the command line
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("log.txt"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of ranked items to show
    pub top: usize,

    /// Output format
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top: 3,
            format: ReportFormat::Text,
        }
    }
}

impl HotelMenuConfig {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `hotelmenu.toml` from the current directory.
    /// Returns `Ok(None)` if the file does not exist, `Err` if malformed.
    pub fn load_optional() -> anyhow::Result<Option<Self>> {
        let path = Path::new(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.report.top == 0 {
            anyhow::bail!("report.top must be at least 1");
        }
        Ok(())
    }
}
