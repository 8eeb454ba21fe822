use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the per-project config file, looked up in the analysed root.
pub const PROJECT_CONFIG_FILE: &str = "region-lint.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid glob '{pattern}' in {config_path}: {message}")]
    InvalidPattern {
        config_path: PathBuf,
        pattern: String,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Globs of files to analyse, relative to the root
    pub include: Vec<String>,
    /// Globs of files to skip, relative to the root
    pub exclude: Vec<String>,
    /// Report regions with no matching `#endregion`
    pub report_unterminated: bool,
    /// Treat `// region` and `<editor-fold>` comments as regions
    pub comment_markers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include: vec!["*.cs".to_string()],
            exclude: Vec::new(),
            report_unterminated: true,
            comment_markers: true,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.validate(config_path)?;
        Ok(Some(config))
    }

    /// Config for analysing `root`: the project file in `root`, else the
    /// user config, else defaults.
    pub fn discover(root: &Path) -> Result<Self, ConfigError> {
        if let Some(config) = Self::load_from_path(root.join(PROJECT_CONFIG_FILE))? {
            return Ok(config);
        }
        Ok(Self::load_from_path(Self::config_path())?.unwrap_or_default())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Location of the user-wide config file.
    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/region-lint");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expand `~` and environment variables in a user-supplied path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    fn validate(&self, config_path: &Path) -> Result<(), ConfigError> {
        for pattern in self.include.iter().chain(&self.exclude) {
            if let Err(e) = glob::Pattern::new(pattern) {
                return Err(ConfigError::InvalidPattern {
                    config_path: config_path.to_path_buf(),
                    pattern: pattern.clone(),
                    message: e.msg.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/region-lint/config.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.include, vec!["*.cs".to_string()]);
        assert!(config.exclude.is_empty());
        assert!(config.report_unterminated);
        assert!(config.comment_markers);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: Config = toml::from_str("exclude = [\"obj/*\"]\n").unwrap();

        assert_eq!(config.include, vec!["*.cs".to_string()]);
        assert_eq!(config.exclude, vec!["obj/*".to_string()]);
        assert!(config.comment_markers);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            include: vec!["src/*.cs".to_string()],
            exclude: vec!["*.g.cs".to_string()],
            report_unterminated: false,
            comment_markers: false,
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("REGION_LINT_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$REGION_LINT_TEST_VAR/region-lint.toml");
        let expanded = Config::expand_path(&path);

        assert_eq!(
            expanded,
            Some(PathBuf::from("/test/env/path/region-lint.toml"))
        );

        unsafe {
            env::remove_var("REGION_LINT_TEST_VAR");
        }
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join(PROJECT_CONFIG_FILE);
        let test_config = Config {
            exclude: vec!["bin/*".to_string(), "obj/*".to_string()],
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_discover_prefers_project_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            "comment_markers = false\n",
        )
        .unwrap();

        let config = Config::discover(temp_dir.path()).unwrap();

        assert!(!config.comment_markers);
    }

    #[test]
    fn test_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(&config_file, "include = 3\n").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_invalid_glob_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join(PROJECT_CONFIG_FILE);
        std::fs::write(&config_file, "exclude = [\"[\"]\n").unwrap();

        let result = Config::load_from_path(&config_file);

        match result {
            Err(ConfigError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "["),
            other => panic!("expected InvalidPattern, got {other:?}"),
        }
    }
}
