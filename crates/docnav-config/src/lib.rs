//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ```toml
//! base_path = "/just-go"
//! unlisted = "omit"
//!
//! [[sections]]
//! id = "basics"
//! root = "docs/basics"
//! title = "Basics"
//! ```
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `base_path` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use docnav_site::UnlistedPolicy;
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Section used when the configuration declares none.
const DEFAULT_SECTION_ID: &str = "docs";
const DEFAULT_SECTION_ROOT: &str = "/docs";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the directory content roots are resolved against.
    pub project_dir: Option<PathBuf>,
    /// Override the deployment base path.
    pub base_path: Option<String>,
    /// Override the unlisted document policy.
    pub unlisted: Option<UnlistedPolicy>,
}

/// A `[[sections]]` table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SectionConfig {
    /// Route prefix identifier.
    pub id: String,
    /// Content root relative to the project directory.
    pub root: String,
    /// Display title (defaults to the id).
    pub title: Option<String>,
    /// Display subtitle.
    pub subtitle: Option<String>,
    /// Landing link.
    pub href: Option<String>,
}

impl SectionConfig {
    fn new(id: &str, root: &str) -> Self {
        Self {
            id: id.to_owned(),
            root: root.to_owned(),
            title: None,
            subtitle: None,
            href: None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Deployment base path, without trailing slash.
    pub base_path: String,
    /// Unlisted document policy.
    pub unlisted: UnlistedPolicy,
    /// Configured sections; never empty after loading.
    pub sections: Vec<SectionConfig>,

    /// Directory content roots are relative to (set after loading).
    #[serde(skip)]
    pub project_dir: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
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
        /// Config field path (e.g., "`base_path`").
        field: String,
        /// Error message (e.g., "${`DOCS_PREFIX`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    /// Without a config file, defaults apply relative to the current directory.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the resulting configuration is invalid.
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
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(project_dir) = &settings.project_dir {
            self.project_dir.clone_from(project_dir);
        }
        if let Some(base_path) = &settings.base_path {
            self.base_path = normalize_base_path(base_path);
        }
        if let Some(unlisted) = settings.unlisted {
            self.unlisted = unlisted;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
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

    /// Create default config relative to the current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config relative to the given project directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            base_path: String::new(),
            unlisted: UnlistedPolicy::default(),
            sections: vec![SectionConfig::new(DEFAULT_SECTION_ID, DEFAULT_SECTION_ROOT)],
            project_dir: base.to_path_buf(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        config.resolve(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.base_path = expand::expand_env(&self.base_path, "base_path")?;
        Ok(())
    }

    /// Fill in derived values: project directory, base path and default section.
    fn resolve(&mut self, config_dir: &Path) {
        self.project_dir = config_dir.to_path_buf();
        self.base_path = normalize_base_path(&self.base_path);
        if self.sections.is_empty() {
            self.sections
                .push(SectionConfig::new(DEFAULT_SECTION_ID, DEFAULT_SECTION_ROOT));
        }
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_base_path()?;
        self.validate_sections()?;
        Ok(())
    }

    fn validate_base_path(&self) -> Result<(), ConfigError> {
        if !self.base_path.is_empty() && !self.base_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "base_path must start with '/', got \"{}\"",
                self.base_path
            )));
        }
        Ok(())
    }

    fn validate_sections(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (i, section) in self.sections.iter().enumerate() {
            require_non_empty(&section.id, &format!("sections[{i}].id"))?;
            require_non_empty(&section.root, &format!("sections[{i}].root"))?;

            if section.id.contains('/') {
                return Err(ConfigError::Validation(format!(
                    "sections[{i}].id cannot contain '/': \"{}\"",
                    section.id
                )));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate section id \"{}\"",
                    section.id
                )));
            }
        }
        Ok(())
    }
}

/// Strip trailing slashes, so `/` means "no prefix".
fn normalize_base_path(base_path: &str) -> String {
    base_path.trim_end_matches('/').to_owned()
}
