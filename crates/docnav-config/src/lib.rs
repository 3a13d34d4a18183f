//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `sidebar.file`
//! - `docs.source_dir`
//! - `docs.base_path`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override sidebar content file.
    pub sidebar_file: Option<PathBuf>,
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sidebar configuration (paths are relative strings from TOML).
    sidebar: SidebarConfigRaw,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,

    /// Resolved sidebar configuration (set after loading).
    #[serde(skip)]
    pub sidebar_resolved: SidebarConfig,
    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw sidebar configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct SidebarConfigRaw {
    file: Option<String>,
}

/// Resolved sidebar configuration.
#[derive(Debug, Default)]
pub struct SidebarConfig {
    /// YAML file holding the sidebar content tree.
    pub file: PathBuf,
}

/// Raw docs configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    base_path: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for documentation files.
    pub source_dir: PathBuf,
    /// URL prefix under which documentation pages are served.
    pub base_path: String,
}

impl DocsConfig {
    /// URL path of a source file under [`source_dir`](Self::source_dir).
    ///
    /// The extension is dropped and the path is joined to `base_path`.
    /// `index` files map to their directory. Relative paths on either
    /// side are taken from the current directory. Returns `None` for
    /// files outside the source directory.
    pub fn url_for(&self, file: &Path) -> Option<String> {
        let file = std::path::absolute(file).ok()?;
        let source_dir = std::path::absolute(&self.source_dir).ok()?;
        let relative = file.strip_prefix(&source_dir).ok()?;
        let stem = relative.with_extension("");

        let mut segments: Vec<String> = stem
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if segments.last().is_some_and(|s| s == "index") {
            segments.pop();
        }

        let base = self.base_path.trim_end_matches('/');
        if segments.is_empty() {
            Some(format!("{base}/"))
        } else {
            Some(format!("{base}/{}/", segments.join("/")))
        }
    }
}

/// Default URL prefix for documentation pages.
const DEFAULT_BASE_PATH: &str = "/docs/";

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
        /// Config field path (e.g., "`docs.source_dir`").
        field: String,
        /// Error message (e.g., "${`DOCS_DIR`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
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

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(file) = &settings.sidebar_file {
            self.sidebar_resolved.file.clone_from(file);
        }
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
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

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            sidebar: SidebarConfigRaw::default(),
            docs: DocsConfigRaw::default(),
            sidebar_resolved: SidebarConfig {
                file: base.join("sidebar.yaml"),
            },
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                base_path: DEFAULT_BASE_PATH.to_owned(),
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
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_path = &self.docs_resolved.base_path;
        if !base_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "docs.base_path must start with '/', got {base_path:?}"
            )));
        }
        if self.sidebar_resolved.file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "sidebar.file cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref file) = self.sidebar.file {
            self.sidebar.file = Some(expand::expand_env(file, "sidebar.file")?);
        }
        if let Some(ref source_dir) = self.docs.source_dir {
            self.docs.source_dir = Some(expand::expand_env(source_dir, "docs.source_dir")?);
        }
        if let Some(ref base_path) = self.docs.base_path {
            self.docs.base_path = Some(expand::expand_env(base_path, "docs.base_path")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.sidebar_resolved = SidebarConfig {
            file: resolve(self.sidebar.file.as_deref(), "sidebar.yaml"),
        };
        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            base_path: self
                .docs
                .base_path
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_PATH.to_owned()),
        };
    }
}
