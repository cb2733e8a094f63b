//! Top-level mandel configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{NavigationConfig, RenderConfig, ViewConfig, WindowConfig};
use crate::constants::{MAX_DIMENSION, MAX_ITERATIONS_LIMIT, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;
use crate::types::{PaletteKind, Projection};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`MANDEL_*`)
/// 3. Project config (`mandel.toml` in the root, or an explicit `--config` file)
/// 4. User config (`~/.mandel/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MandelConfig {
    pub render: RenderConfig,
    pub view: ViewConfig,
    pub navigation: NavigationConfig,
    pub window: WindowConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Replaces the project config file. Must exist.
    pub config_file: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub max_iterations: Option<u32>,
    pub threads: Option<usize>,
    pub projection: Option<Projection>,
    pub palette: Option<PaletteKind>,
    pub zoom: Option<f64>,
    pub shift_x: Option<f64>,
    pub shift_y: Option<f64>,
}

impl MandelConfig {
    /// Load configuration with 4-layer resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config, or the explicit file given on the command line
        match cli_overrides.and_then(|cli| cli.config_file.as_deref()) {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: explicit.display().to_string(),
                    });
                }
                Self::merge_toml_file(&mut config, explicit)?;
            }
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &MandelConfig) -> Result<(), ConfigError> {
        let render = &config.render;
        for (field, value) in [("render.width", render.width), ("render.height", render.height)] {
            if let Some(v) = value {
                if v == 0 || v > MAX_DIMENSION {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: format!("must be between 1 and {MAX_DIMENSION}"),
                    });
                }
            }
        }
        if let Some(iterations) = render.max_iterations {
            if iterations == 0 || iterations > MAX_ITERATIONS_LIMIT {
                return Err(ConfigError::ValidationFailed {
                    field: "render.max_iterations".to_string(),
                    message: format!("must be between 1 and {MAX_ITERATIONS_LIMIT}"),
                });
            }
        }
        if render.threads == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "render.threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if let Some(zoom) = config.view.zoom {
            if !zoom.is_finite() || zoom <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "view.zoom".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        for (field, value) in [
            ("view.shift_x", config.view.shift_x),
            ("view.shift_y", config.view.shift_y),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be finite".to_string(),
                    });
                }
            }
        }

        let nav = &config.navigation;
        if let Some(factor) = nav.zoom_factor {
            if !factor.is_finite() || factor <= 1.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "navigation.zoom_factor".to_string(),
                    message: "must be greater than 1.0".to_string(),
                });
            }
        }
        if let Some(step) = nav.pan_step {
            if !step.is_finite() || step <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "navigation.pan_step".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(growth) = nav.iteration_growth {
            if !growth.is_finite() || growth < 1.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "navigation.iteration_growth".to_string(),
                    message: "must be at least 1.0".to_string(),
                });
            }
        }
        if nav.iteration_step == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "navigation.iteration_step".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.mandel/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut MandelConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MandelConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut MandelConfig, other: &MandelConfig) {
        // Render
        if other.render.width.is_some() {
            base.render.width = other.render.width;
        }
        if other.render.height.is_some() {
            base.render.height = other.render.height;
        }
        if other.render.max_iterations.is_some() {
            base.render.max_iterations = other.render.max_iterations;
        }
        if other.render.threads.is_some() {
            base.render.threads = other.render.threads;
        }
        if other.render.projection.is_some() {
            base.render.projection = other.render.projection;
        }
        if other.render.palette.is_some() {
            base.render.palette = other.render.palette;
        }

        // View
        if other.view.zoom.is_some() {
            base.view.zoom = other.view.zoom;
        }
        if other.view.shift_x.is_some() {
            base.view.shift_x = other.view.shift_x;
        }
        if other.view.shift_y.is_some() {
            base.view.shift_y = other.view.shift_y;
        }

        // Navigation
        if other.navigation.zoom_factor.is_some() {
            base.navigation.zoom_factor = other.navigation.zoom_factor;
        }
        if other.navigation.pan_step.is_some() {
            base.navigation.pan_step = other.navigation.pan_step;
        }
        if other.navigation.iteration_growth.is_some() {
            base.navigation.iteration_growth = other.navigation.iteration_growth;
        }
        if other.navigation.iteration_step.is_some() {
            base.navigation.iteration_step = other.navigation.iteration_step;
        }

        // Window
        if other.window.title.is_some() {
            base.window.title = other.window.title.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `MANDEL_WIDTH`, `MANDEL_MAX_ITERATIONS`, etc.
    /// Values that fail to parse are skipped with a warning.
    fn apply_env_overrides(config: &mut MandelConfig) {
        if let Some(v) = env_parse::<u32>("MANDEL_WIDTH") {
            config.render.width = Some(v);
        }
        if let Some(v) = env_parse::<u32>("MANDEL_HEIGHT") {
            config.render.height = Some(v);
        }
        if let Some(v) = env_parse::<u32>("MANDEL_MAX_ITERATIONS") {
            config.render.max_iterations = Some(v);
        }
        if let Some(v) = env_parse::<usize>("MANDEL_THREADS") {
            config.render.threads = Some(v);
        }
        if let Some(v) = env_parse::<Projection>("MANDEL_PROJECTION") {
            config.render.projection = Some(v);
        }
        if let Some(v) = env_parse::<PaletteKind>("MANDEL_PALETTE") {
            config.render.palette = Some(v);
        }
        if let Some(v) = env_parse::<f64>("MANDEL_ZOOM_FACTOR") {
            config.navigation.zoom_factor = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut MandelConfig, cli: &CliOverrides) {
        if let Some(v) = cli.width {
            config.render.width = Some(v);
        }
        if let Some(v) = cli.height {
            config.render.height = Some(v);
        }
        if let Some(v) = cli.max_iterations {
            config.render.max_iterations = Some(v);
        }
        if let Some(v) = cli.threads {
            config.render.threads = Some(v);
        }
        if let Some(v) = cli.projection {
            config.render.projection = Some(v);
        }
        if let Some(v) = cli.palette {
            config.render.palette = Some(v);
        }
        if let Some(v) = cli.zoom {
            config.view.zoom = Some(v);
        }
        if let Some(v) = cli.shift_x {
            config.view.shift_x = Some(v);
        }
        if let Some(v) = cli.shift_y {
            config.view.shift_y = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment override");
            None
        }
    }
}

/// Returns the user-level config directory: `~/.mandel/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".mandel"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
