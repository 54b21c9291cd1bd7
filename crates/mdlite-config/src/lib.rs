//! Configuration management for mdlite.
//!
//! Parses `mdlite.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## File format
//!
//! ```toml
//! escape = "\\"
//!
//! [[symbols]]
//! marker = "_"
//! open = "<em>"
//! close = "</em>"
//!
//! [[escapes]]
//! symbol = "_"
//! escaped = ["__"]
//!
//! [wrapper]
//! open = "<p>"
//! close = "</p>"
//!
//! [header]
//! enabled = true
//! marker = "#"
//! open = "<h1>"
//! close = "</h1>"
//! ```
//!
//! Every section is optional. A `[[symbols]]` list replaces the standard
//! table as a whole; symbol order in the file is the pass order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use mdlite_renderer::{EscapeRule, Header, RendererConfig, Symbol, TagPair};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override escape literal.
    pub escape: Option<String>,
    /// Override header detection.
    pub header_enabled: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdlite.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Escape literal.
    pub escape: String,
    /// Ordered symbol table.
    pub symbols: Vec<Symbol>,
    /// Ordered escape table.
    pub escapes: Vec<EscapeRule>,
    /// Default block wrapper.
    pub wrapper: TagPair,
    /// Header detection.
    pub header: HeaderConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let standard = RendererConfig::default();
        Self {
            escape: standard.escape,
            symbols: standard.symbols,
            escapes: standard.escape_rules,
            wrapper: standard.wrapper,
            header: HeaderConfig::default(),
            config_path: None,
        }
    }
}

/// Header detection configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Whether a leading header marker switches the block wrapper.
    pub enabled: bool,
    /// Header marker.
    pub marker: String,
    /// Opening header tag.
    pub open: String,
    /// Closing header tag.
    pub close: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            marker: "#".to_owned(),
            open: "<h1>".to_owned(),
            close: "</h1>".to_owned(),
        }
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
}

/// Require a marker-like field to be non-empty and free of spaces.
///
/// Text is split on spaces before matching, so a marker containing a space
/// could never match.
fn require_marker(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    if value.contains(' ') {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain spaces"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdlite.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
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
            tracing::debug!("No {CONFIG_FILENAME} found, using standard dialect");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(escape) = &settings.escape {
            self.escape.clone_from(escape);
        }
        if let Some(header_enabled) = settings.header_enabled {
            self.header.enabled = header_enabled;
        }
    }

    /// Build the renderer configuration.
    #[must_use]
    pub fn renderer_config(&self) -> RendererConfig {
        let header = self.header.enabled.then(|| Header {
            marker: self.header.marker.clone(),
            tags: TagPair::new(self.header.open.clone(), self.header.close.clone()),
        });

        RendererConfig {
            symbols: self.symbols.clone(),
            escape: self.escape.clone(),
            escape_rules: self.escapes.clone(),
            wrapper: self.wrapper.clone(),
            header,
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

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        tracing::debug!(
            path = %path.display(),
            symbols = config.symbols.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI settings
    /// are applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_marker(&self.escape, "escape")?;
        self.validate_symbols()?;
        self.validate_escapes()?;
        self.validate_header()?;
        Ok(())
    }

    /// Validate the symbol table.
    fn validate_symbols(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for symbol in &self.symbols {
            require_marker(&symbol.marker, "symbols.marker")?;
            if !seen.insert(symbol.marker.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate symbol marker '{}'",
                    symbol.marker
                )));
            }
        }
        Ok(())
    }

    /// Validate that escape rules only name configured markers.
    fn validate_escapes(&self) -> Result<(), ConfigError> {
        let known: HashSet<&str> = self.symbols.iter().map(|s| s.marker.as_str()).collect();
        let require_known = |marker: &str, field: &str| {
            if known.contains(marker) {
                Ok(())
            } else {
                Err(ConfigError::Validation(format!(
                    "{field} names unknown symbol '{marker}'"
                )))
            }
        };

        for rule in &self.escapes {
            require_known(&rule.symbol, "escapes.symbol")?;
            for escaped in &rule.escaped {
                require_known(escaped, "escapes.escaped")?;
            }
        }
        Ok(())
    }

    /// Validate header configuration.
    fn validate_header(&self) -> Result<(), ConfigError> {
        if self.header.enabled {
            require_marker(&self.header.marker, "header.marker")?;
        }
        Ok(())
    }
}
