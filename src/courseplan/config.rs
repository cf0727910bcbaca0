use crate::error::{CourseplanError, Result};
use crate::store::repository::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_IMPORT_EXT: &str = ".xlsx";

pub const KEY_STORAGE_KEY: &str = "storage-key";
pub const KEY_IMPORT_EXTENSIONS: &str = "import-extensions";

/// Configuration for courseplan, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseplanConfig {
    /// Name of the storage slot holding the course list
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// File extensions accepted by `import` (e.g. ".xlsx")
    #[serde(default = "default_import_ext")]
    pub import_extensions: Vec<String>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_import_ext() -> Vec<String> {
    vec![DEFAULT_IMPORT_EXT.to_string()]
}

impl Default for CourseplanConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            import_extensions: default_import_ext(),
        }
    }
}

impl CourseplanConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CourseplanError::Io)?;
        let config: CourseplanConfig =
            serde_json::from_str(&content).map_err(CourseplanError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CourseplanError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CourseplanError::Serialization)?;
        fs::write(config_path, content).map_err(CourseplanError::Io)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_STORAGE_KEY, KEY_IMPORT_EXTENSIONS]
    }

    /// Display value for a config key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_STORAGE_KEY => Some(self.storage_key.clone()),
            KEY_IMPORT_EXTENSIONS => Some(self.import_extensions.join(",")),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_STORAGE_KEY => {
                let value = value.trim();
                if value.is_empty()
                    || !value
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
                {
                    return Err(CourseplanError::Config(format!(
                        "Invalid storage key '{}': use letters, digits, '_' or '-'",
                        value
                    )));
                }
                self.storage_key = value.to_string();
                Ok(())
            }
            KEY_IMPORT_EXTENSIONS => {
                let exts: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(normalize_ext)
                    .collect();
                if exts.is_empty() {
                    return Err(CourseplanError::Config(
                        "At least one import extension is required".to_string(),
                    ));
                }
                self.import_extensions = exts;
                Ok(())
            }
            other => Err(CourseplanError::Config(format!(
                "Unknown config key: {}",
                other
            ))),
        }
    }
}

fn normalize_ext(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_lowercase()
    } else {
        format!(".{}", ext.to_lowercase())
    }
}
