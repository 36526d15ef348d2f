//! Configuration management for Folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `output.dir` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use std::path::{Path, PathBuf};

use folio_page::HtmlOptions;
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override strict mode.
    pub strict: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTML output configuration.
    pub html: HtmlConfig,
    /// Rendering configuration.
    pub render: RenderConfig,
    /// Output configuration (paths are relative strings from TOML).
    output: OutputConfigRaw,

    /// Resolved output configuration (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// HTML output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    /// Class of the page container.
    pub page_class: String,
    /// Class of the container wrapping each markup block.
    pub section_class: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        let HtmlOptions {
            page_class,
            section_class,
        } = HtmlOptions::default();
        Self {
            page_class,
            section_class,
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Fail when any page contains error nodes.
    pub strict: bool,
    /// Tags rendered as no output.
    pub ignore_tags: Vec<String>,
}

/// Raw output configuration as parsed from TOML (paths as strings).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
}

/// Resolved output configuration with absolute paths.
#[derive(Debug, Default)]
pub struct OutputConfig {
    /// Directory for rendered pages.
    pub dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`output.dir`").
        field: String,
        /// Error message (e.g., "${`OUT_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a class attribute value that cannot break out of its quotes.
fn require_class_name(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if value.contains('"') {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain '\"'"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// HTML serialization options from the `[html]` section.
    #[must_use]
    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            page_class: self.html.page_class.clone(),
            section_class: self.html.section_class.clone(),
        }
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(output_dir) = &settings.output_dir {
            self.output_resolved.dir.clone_from(output_dir);
        }
        if let Some(strict) = settings.strict {
            self.render.strict = strict;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(current)
    }

    fn discover_config_from(mut current: PathBuf) -> Option<PathBuf> {
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            html: HtmlConfig::default(),
            render: RenderConfig::default(),
            output: OutputConfigRaw::default(),
            output_resolved: OutputConfig {
                dir: base.join("build"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_class_name(&self.html.page_class, "html.page_class")?;
        require_class_name(&self.html.section_class, "html.section_class")?;
        for tag in &self.render.ignore_tags {
            require_non_empty(tag, "render.ignore_tags entry")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.output.dir {
            self.output.dir = Some(expand::expand_env(dir, "output.dir")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.output_resolved = OutputConfig {
            dir: config_dir.join(self.output.dir.as_deref().unwrap_or("build")),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.html.page_class, "docs-page");
        assert_eq!(config.html.section_class, "docs-section pt-running-text");
        assert!(!config.render.strict);
        assert!(config.render.ignore_tags.is_empty());
        assert_eq!(config.output_resolved.dir, PathBuf::from("/test/build"));
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.html_options(), HtmlOptions::default());
        assert!(!config.render.strict);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[html]
page_class = "page"
section_class = "prose"

[render]
strict = true
ignore_tags = ["method", "see"]

[output]
dir = "public"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.html_options(),
            HtmlOptions {
                page_class: "page".to_owned(),
                section_class: "prose".to_owned(),
            }
        );
        assert!(config.render.strict);
        assert_eq!(
            config.render.ignore_tags,
            vec!["method".to_owned(), "see".to_owned()]
        );
        assert_eq!(config.output_resolved.dir, PathBuf::from("/project/public"));
    }

    #[test]
    fn test_resolve_paths_default_dir() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(config.output_resolved.dir, PathBuf::from("/project/build"));
    }

    #[test]
    fn test_validate_empty_class() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.html.page_class = String::new();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("html.page_class"));
    }

    #[test]
    fn test_validate_quote_in_class() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.html.section_class = r#"a" onclick="x"#.to_owned();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("html.section_class"));
    }

    #[test]
    fn test_validate_empty_ignore_tag() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.render.ignore_tags = vec![String::new()];

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            output_dir: Some(PathBuf::from("/custom/out")),
            strict: Some(true),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.output_resolved.dir, PathBuf::from("/custom/out"));
        assert!(config.render.strict);
    }

    #[test]
    fn test_apply_empty_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.output_resolved.dir, PathBuf::from("/test/build"));
        assert!(!config.render.strict);
    }

    #[test]
    fn test_load_explicit_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.toml");
        std::fs::write(&path, "[render]\nstrict = true\n[output]\ndir = \"site\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert!(config.render.strict);
        assert_eq!(config.output_resolved.dir, temp_dir.path().join("site"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_path() {
        let err = Config::load(Some(Path::new("/nonexistent/folio.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.toml");
        std::fs::write(&path, "[render\nstrict = ").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.toml");
        std::fs::write(&path, "[html]\npage_class = \"\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_applies_cli_settings() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.toml");
        std::fs::write(&path, "[render]\nstrict = true\n").unwrap();

        let settings = CliSettings {
            strict: Some(false),
            ..CliSettings::default()
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert!(!config.render.strict);
    }

    #[test]
    fn test_discover_config_in_parent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILENAME), "").unwrap();

        let found = Config::discover_config_from(nested).unwrap();
        assert_eq!(found, temp_dir.path().join(CONFIG_FILENAME));
    }
}
