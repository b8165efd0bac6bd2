//! TOML Configuration File Support
//!
//! Configuration for the showcase, read from
//! `~/.config/showcase/showcase.toml`.
//!
//! # Configuration Priority
//!
//! Configuration values are loaded with the following priority (highest first):
//! 1. CLI arguments (via [`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # XDG Base Directory Compliance
//!
//! The configuration file lives at `$XDG_CONFIG_HOME/showcase/showcase.toml`
//! (typically `~/.config/showcase/showcase.toml`).
//!
//! # Example Configuration
//!
//! ```toml
//! [delays]
//! title_type_ms = 30
//! problem_type_ms = 10
//! exit_label_type_ms = 15
//!
//! [transition]
//! settle_ms = 150
//!
//! [catalog]
//! path = "/srv/site/showcase.toml"
//!
//! [accessibility]
//! motion = "reduced"
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `SHOWCASE_SETTLE_MS` | Settle delay in milliseconds |
//! | `SHOWCASE_TYPE_DELAY_MS` | Every per-character delay at once |
//! | `SHOWCASE_CATALOG` | Catalog file path |
//! | `SHOWCASE_MOTION` | `full`, `reduced` or `none` |
//! | `REDUCE_MOTION` | Same values; `SHOWCASE_MOTION` wins if both are set |

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::{detect_motion_preference, MotionPreference, TypingDelays};
use crate::catalog::{Catalog, CatalogError};
use crate::coordinator::CoordinatorConfig;

/// Longest accepted per-character delay
pub const MAX_CHAR_DELAY: Duration = Duration::from_secs(1);

/// Longest accepted settle delay
pub const MAX_SETTLE: Duration = Duration::from_secs(10);

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// Delays section of the TOML configuration (all milliseconds)
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DelaysToml {
    /// Deleting the short label on enter
    pub title_delete_ms: Option<u64>,
    /// Typing the full title
    pub title_type_ms: Option<u64>,
    /// Typing the problem
    pub problem_type_ms: Option<u64>,
    /// Typing the solution
    pub solution_type_ms: Option<u64>,
    /// Typing the impact stat
    pub impact_type_ms: Option<u64>,
    /// Deleting the impact stat on exit
    pub exit_impact_delete_ms: Option<u64>,
    /// Deleting the solution on exit
    pub exit_solution_delete_ms: Option<u64>,
    /// Deleting the problem on exit
    pub exit_problem_delete_ms: Option<u64>,
    /// Deleting the title on exit
    pub exit_title_delete_ms: Option<u64>,
    /// Retyping the short label on exit
    pub exit_label_type_ms: Option<u64>,
}

/// Transition section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionToml {
    /// Pause between swapping cards and typing the new one
    pub settle_ms: Option<u64>,
}

/// Catalog section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogToml {
    /// Catalog file (TOML or JSON); the built-in catalog if unset
    pub path: Option<PathBuf>,
}

/// Accessibility section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityToml {
    /// `full`, `reduced` or `none`
    pub motion: Option<String>,
}

/// Root TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseToml {
    /// Per-character delays
    pub delays: DelaysToml,
    /// Transition timing
    pub transition: TransitionToml,
    /// Item catalog
    pub catalog: CatalogToml,
    /// Accessibility settings
    pub accessibility: AccessibilityToml,
}

// =============================================================================
// Unified Configuration
// =============================================================================

/// Resolved showcase configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowcaseConfig {
    /// Per-character delays (before motion scaling)
    pub delays: TypingDelays,

    /// Pause between Swapping and Entering
    pub settle: Duration,

    /// Motion preference
    pub motion: MotionPreference,

    /// Catalog file; `None` means the built-in catalog
    pub catalog_path: Option<PathBuf>,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        let coordinator = CoordinatorConfig::default();
        Self {
            delays: coordinator.delays,
            settle: coordinator.settle,
            motion: coordinator.motion,
            catalog_path: None,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl ShowcaseConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Timing for the coordinator
    #[must_use]
    pub fn coordinator_config(&self) -> CoordinatorConfig {
        CoordinatorConfig::default()
            .with_delays(self.delays)
            .with_settle(self.settle)
            .with_motion(self.motion)
    }

    /// Load the configured catalog, or the built-in one
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be read, parsed or
    /// validated.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::from_path(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first value out of
    /// range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.settle > MAX_SETTLE {
            return Err(ConfigError::ValidationError(format!(
                "settle delay {}ms exceeds {}ms",
                self.settle.as_millis(),
                MAX_SETTLE.as_millis()
            )));
        }

        let delays = [
            ("title_delete", self.delays.title_delete),
            ("title_type", self.delays.title_type),
            ("problem_type", self.delays.problem_type),
            ("solution_type", self.delays.solution_type),
            ("impact_type", self.delays.impact_type),
            ("exit_impact_delete", self.delays.exit_impact_delete),
            ("exit_solution_delete", self.delays.exit_solution_delete),
            ("exit_problem_delete", self.delays.exit_problem_delete),
            ("exit_title_delete", self.delays.exit_title_delete),
            ("exit_label_type", self.delays.exit_label_type),
        ];
        for (name, delay) in delays {
            if delay > MAX_CHAR_DELAY {
                return Err(ConfigError::ValidationError(format!(
                    "{name} delay {}ms exceeds {}ms",
                    delay.as_millis(),
                    MAX_CHAR_DELAY.as_millis()
                )));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/showcase/showcase.toml` or
/// `~/.config/showcase/showcase.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("showcase").join("showcase.toml"))
}

/// Load configuration from all sources with proper priority
///
/// CLI overrides are not handled here; apply [`ConfigOverrides`] after.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or a
/// value is out of range. A missing config file is not an error.
pub fn load_config() -> Result<ShowcaseConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path
///
/// # Arguments
///
/// * `path` - Optional path to the configuration file. If `None`, only defaults
///   and environment variables are used.
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed,
/// or a value is out of range.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<ShowcaseConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Load configuration, reading environment variables through `env`
///
/// # Errors
///
/// See [`load_config_from_path`].
pub fn load_config_with_env<F>(path: Option<PathBuf>, env: F) -> Result<ShowcaseConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ShowcaseConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: ShowcaseToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config)?;
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config, env);
    config.validate()?;

    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut ShowcaseConfig, toml: &ShowcaseToml) -> Result<(), ConfigError> {
    let ms = Duration::from_millis;
    let delays = &toml.delays;
    let target = &mut config.delays;

    if let Some(v) = delays.title_delete_ms {
        target.title_delete = ms(v);
    }
    if let Some(v) = delays.title_type_ms {
        target.title_type = ms(v);
    }
    if let Some(v) = delays.problem_type_ms {
        target.problem_type = ms(v);
    }
    if let Some(v) = delays.solution_type_ms {
        target.solution_type = ms(v);
    }
    if let Some(v) = delays.impact_type_ms {
        target.impact_type = ms(v);
    }
    if let Some(v) = delays.exit_impact_delete_ms {
        target.exit_impact_delete = ms(v);
    }
    if let Some(v) = delays.exit_solution_delete_ms {
        target.exit_solution_delete = ms(v);
    }
    if let Some(v) = delays.exit_problem_delete_ms {
        target.exit_problem_delete = ms(v);
    }
    if let Some(v) = delays.exit_title_delete_ms {
        target.exit_title_delete = ms(v);
    }
    if let Some(v) = delays.exit_label_type_ms {
        target.exit_label_type = ms(v);
    }

    if let Some(settle) = toml.transition.settle_ms {
        config.settle = ms(settle);
    }

    if toml.catalog.path.is_some() {
        config.catalog_path = toml.catalog.path.clone();
    }

    if let Some(ref motion) = toml.accessibility.motion {
        config.motion = MotionPreference::parse(motion).ok_or_else(|| {
            ConfigError::ValidationError(format!("unknown motion preference '{motion}'"))
        })?;
    }

    Ok(())
}

/// Apply environment variable overrides to the config
///
/// Unparseable values are logged and ignored.
fn apply_env_config<F>(config: &mut ShowcaseConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = env("SHOWCASE_TYPE_DELAY_MS") {
        match value.parse::<u64>() {
            Ok(ms) => {
                config.delays = TypingDelays::uniform(Duration::from_millis(ms));
                config.source = ConfigSource::Env;
            }
            Err(_) => tracing::warn!(%value, "Ignoring invalid SHOWCASE_TYPE_DELAY_MS"),
        }
    }

    if let Some(value) = env("SHOWCASE_SETTLE_MS") {
        match value.parse::<u64>() {
            Ok(ms) => {
                config.settle = Duration::from_millis(ms);
                config.source = ConfigSource::Env;
            }
            Err(_) => tracing::warn!(%value, "Ignoring invalid SHOWCASE_SETTLE_MS"),
        }
    }

    if let Some(path) = env("SHOWCASE_CATALOG") {
        if !path.is_empty() {
            config.catalog_path = Some(PathBuf::from(path));
            config.source = ConfigSource::Env;
        }
    }

    if let Some(motion) = detect_motion_preference(&env) {
        config.motion = motion;
        config.source = ConfigSource::Env;
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Builder for applying CLI overrides to configuration
///
/// Use this after [`load_config`] to apply command-line argument overrides.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Catalog path override
    pub catalog_path: Option<PathBuf>,

    /// Motion preference override
    pub motion: Option<MotionPreference>,

    /// Settle delay override (milliseconds)
    pub settle_ms: Option<u64>,
}

impl ConfigOverrides {
    /// Create a new empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set catalog path override
    #[must_use]
    pub fn with_catalog_path(mut self, path: PathBuf) -> Self {
        self.catalog_path = Some(path);
        self
    }

    /// Set motion preference override
    #[must_use]
    pub fn with_motion(mut self, motion: MotionPreference) -> Self {
        self.motion = Some(motion);
        self
    }

    /// Set settle delay override
    #[must_use]
    pub fn with_settle_ms(mut self, ms: u64) -> Self {
        self.settle_ms = Some(ms);
        self
    }

    /// Whether no override is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog_path.is_none() && self.motion.is_none() && self.settle_ms.is_none()
    }

    /// Apply overrides to a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an override puts a value out of range.
    pub fn apply(&self, config: &mut ShowcaseConfig) -> Result<(), ConfigError> {
        if self.is_empty() {
            return Ok(());
        }
        config.source = ConfigSource::Cli;

        if let Some(ref path) = self.catalog_path {
            config.catalog_path = Some(path.clone());
        }
        if let Some(motion) = self.motion {
            config.motion = motion;
        }
        if let Some(ms) = self.settle_ms {
            config.settle = Duration::from_millis(ms);
        }

        config.validate()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // =========================================================================
    // Default Configuration Tests
    // =========================================================================

    #[test]
    fn test_default_config() {
        let config = ShowcaseConfig::default();

        assert_eq!(config.delays, TypingDelays::default());
        assert_eq!(config.settle, Duration::from_millis(150));
        assert_eq!(config.motion, MotionPreference::Full);
        assert!(config.catalog_path.is_none());
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_path() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("showcase/showcase.toml"));
        }
    }

    // =========================================================================
    // TOML Parsing Tests
    // =========================================================================

    #[test]
    fn test_parse_valid_toml() {
        let file = write_config(
            r#"
[delays]
title_type_ms = 40
exit_label_type_ms = 20

[transition]
settle_ms = 300

[catalog]
path = "/srv/showcase.json"

[accessibility]
motion = "reduced"
"#,
        );

        let config = load_config_with_env(Some(file.path().to_path_buf()), no_env).unwrap();

        assert_eq!(config.delays.title_type, Duration::from_millis(40));
        assert_eq!(config.delays.exit_label_type, Duration::from_millis(20));
        assert_eq!(config.delays.problem_type, Duration::from_millis(10));
        assert_eq!(config.settle, Duration::from_millis(300));
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/showcase.json")));
        assert_eq!(config.motion, MotionPreference::Reduced);
        assert_eq!(config.source(), ConfigSource::File);
        assert_eq!(config.config_file_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_parse_empty_toml() {
        let file = write_config("");
        let config = load_config_with_env(Some(file.path().to_path_buf()), no_env).unwrap();

        assert_eq!(config.delays, TypingDelays::default());
        assert_eq!(config.source(), ConfigSource::File);
    }

    #[test]
    fn test_missing_file_graceful() {
        let path = PathBuf::from("/nonexistent/showcase/showcase.toml");
        let config = load_config_with_env(Some(path), no_env).unwrap();

        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.config_file_path.is_none());
    }

    #[test]
    fn test_malformed_toml_error() {
        let file = write_config("[transition\nsettle_ms = ");
        let result = load_config_with_env(Some(file.path().to_path_buf()), no_env);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_unknown_motion_is_validation_error() {
        let file = write_config("[accessibility]\nmotion = \"wobbly\"\n");
        let result = load_config_with_env(Some(file.path().to_path_buf()), no_env);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_settle_too_long_rejected() {
        let file = write_config("[transition]\nsettle_ms = 60000\n");
        let result = load_config_with_env(Some(file.path().to_path_buf()), no_env);

        match result {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("settle")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_char_delay_too_long_rejected() {
        let file = write_config("[delays]\nimpact_type_ms = 5000\n");
        let result = load_config_with_env(Some(file.path().to_path_buf()), no_env);

        match result {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("impact_type")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // =========================================================================
    // Environment Override Tests
    // =========================================================================

    #[test]
    fn test_env_overrides_file() {
        let file = write_config("[transition]\nsettle_ms = 300\n[accessibility]\nmotion = \"full\"\n");
        let env = env_from(&[("SHOWCASE_SETTLE_MS", "50"), ("REDUCE_MOTION", "1")]);

        let config = load_config_with_env(Some(file.path().to_path_buf()), env).unwrap();

        assert_eq!(config.settle, Duration::from_millis(50));
        assert_eq!(config.motion, MotionPreference::Reduced);
        assert_eq!(config.source(), ConfigSource::Env);
    }

    #[test]
    fn test_showcase_motion_beats_reduce_motion() {
        let env = env_from(&[("REDUCE_MOTION", "1"), ("SHOWCASE_MOTION", "none")]);
        let config = load_config_with_env(None, env).unwrap();
        assert_eq!(config.motion, MotionPreference::None);
    }

    #[test]
    fn test_invalid_env_values_ignored() {
        let env = env_from(&[("SHOWCASE_SETTLE_MS", "soon"), ("SHOWCASE_MOTION", "wobbly")]);
        let config = load_config_with_env(None, env).unwrap();

        assert_eq!(config.settle, Duration::from_millis(150));
        assert_eq!(config.motion, MotionPreference::Full);
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_uniform_delay_from_env() {
        let env = env_from(&[("SHOWCASE_TYPE_DELAY_MS", "7"), ("SHOWCASE_CATALOG", "cards.toml")]);
        let config = load_config_with_env(None, env).unwrap();

        assert_eq!(config.delays, TypingDelays::uniform(Duration::from_millis(7)));
        assert_eq!(config.catalog_path, Some(PathBuf::from("cards.toml")));
    }

    // =========================================================================
    // CLI Override Tests
    // =========================================================================

    #[test]
    fn test_cli_overrides_env() {
        let env = env_from(&[("SHOWCASE_MOTION", "reduced")]);
        let mut config = load_config_with_env(None, env).unwrap();

        ConfigOverrides::new()
            .with_motion(MotionPreference::None)
            .with_settle_ms(0)
            .apply(&mut config)
            .unwrap();

        assert_eq!(config.motion, MotionPreference::None);
        assert_eq!(config.settle, Duration::ZERO);
        assert_eq!(config.source(), ConfigSource::Cli);
    }

    #[test]
    fn test_config_overrides_empty_no_change() {
        let mut config = ShowcaseConfig::default();
        let overrides = ConfigOverrides::new();
        assert!(overrides.is_empty());

        overrides.apply(&mut config).unwrap();

        assert_eq!(config, ShowcaseConfig::default());
    }

    #[test]
    fn test_config_overrides_validated() {
        let mut config = ShowcaseConfig::default();
        let result = ConfigOverrides::new()
            .with_settle_ms(3_600_000)
            .apply(&mut config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    // =========================================================================
    // Derived Configuration Tests
    // =========================================================================

    #[test]
    fn test_coordinator_config_carries_values() {
        let mut config = ShowcaseConfig::default();
        config.settle = Duration::from_millis(80);
        config.motion = MotionPreference::Reduced;

        let coordinator = config.coordinator_config();

        assert_eq!(coordinator.settle, Duration::from_millis(80));
        assert_eq!(coordinator.effective_settle(), Duration::from_millis(20));
        assert_eq!(coordinator.delays, config.delays);
    }

    #[test]
    fn test_load_catalog_defaults_to_builtin() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.load_catalog().unwrap(), Catalog::builtin());

        let mut config = ShowcaseConfig::default();
        config.catalog_path = Some(PathBuf::from("/nonexistent/catalog.toml"));
        assert!(matches!(
            config.load_catalog(),
            Err(CatalogError::ReadError { .. })
        ));
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(ConfigSource::Cli.to_string(), "CLI");
        assert_eq!(ConfigSource::Env.to_string(), "environment");
        assert_eq!(ConfigSource::File.to_string(), "config file");
        assert_eq!(ConfigSource::Default.to_string(), "default");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::ValidationError("settle delay 60000ms exceeds 10000ms".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: settle delay 60000ms exceeds 10000ms"
        );
    }
}
