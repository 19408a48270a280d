//! Module configuration.
//!
//! Each module reads `<config dir>/<name>.toml` once at startup. A missing
//! file means "use the defaults"; an unreadable or malformed one is an error.
//!
//! ```toml
//! blacklist = ["#quiet", "#serious"]
//! disabled = false
//! reddit = true
//! timeout = 10
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::eligibility::Blacklist;
use crate::fetch::FetchConfig;
use crate::{LinkTitleError, Result};

/// Settings for the title module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Channels where links are never resolved.
    pub blacklist: Vec<String>,
    /// When set, the module registers no commands.
    pub disabled: bool,
    /// Enable the dedicated Reddit command.
    pub reddit: bool,
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent sent with every request.
    pub user_agent: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        let fetch = FetchConfig::default();
        Self {
            blacklist: Vec::new(),
            disabled: false,
            reddit: false,
            timeout: fetch.timeout,
            user_agent: fetch.user_agent,
        }
    }
}

impl ModuleConfig {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig { timeout: self.timeout, user_agent: self.user_agent.clone() }
    }

    pub fn blacklist(&self) -> Blacklist {
        Blacklist::with_channels(self.blacklist.iter().cloned())
    }
}

/// Locates and reads per-module configuration files.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    dir: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader reading from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: Some(dir.into()) }
    }

    /// Path of the configuration file for `name`.
    pub fn path_for(&self, name: &str) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(format!("{name}.toml")))
    }

    pub fn load_module_config(&self, name: &str) -> Result<ModuleConfig> {
        let Some(path) = self.path_for(name) else {
            return Ok(ModuleConfig::default());
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no module config, using defaults");
                return Ok(ModuleConfig::default());
            }
            Err(source) => return Err(LinkTitleError::ConfigRead { path, source }),
        };

        Ok(toml::from_str(&content)?)
    }
}

impl Default for ConfigLoader {
    /// Loader for the platform configuration directory, e.g.
    /// `~/.config/linktitle` on Linux.
    fn default() -> Self {
        Self { dir: dirs::config_dir().map(|dir| dir.join("linktitle")) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loader = ConfigLoader::new(temp_dir.path());
        assert_eq!(loader.load_module_config("title").unwrap(), ModuleConfig::default());
    }

    #[test]
    fn test_load_module_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("title.toml"),
            "blacklist = [\"#quiet\"]\nreddit = true\ntimeout = 3\n",
        )
        .unwrap();

        let config = ConfigLoader::new(temp_dir.path()).load_module_config("title").unwrap();
        assert_eq!(config.blacklist, vec!["#quiet".to_string()]);
        assert!(config.reddit);
        assert!(!config.disabled);
        assert_eq!(config.fetch_config().timeout, 3);
        assert!(config.user_agent.contains("linktitle"));
    }

    #[test]
    fn test_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("title.toml"), "disabled = \"nope\"").unwrap();

        let result = ConfigLoader::new(temp_dir.path()).load_module_config("title");
        assert!(matches!(result, Err(LinkTitleError::ConfigError(_))));
    }

    #[test]
    fn test_blacklist_from_config() {
        let config = ModuleConfig { blacklist: vec!["#quiet".to_string()], ..Default::default() };
        assert_eq!(config.blacklist().channels(), ["#quiet".to_string()]);
    }

    #[test]
    fn test_path_for() {
        let loader = ConfigLoader::new("/etc/linktitle");
        assert_eq!(loader.path_for("title"), Some(PathBuf::from("/etc/linktitle/title.toml")));
    }
}
