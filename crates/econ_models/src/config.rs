//! Model configuration.
//!
//! Numeric-safety constants and grid resolutions for the dashboard pages,
//! loadable from TOML with environment variable overrides.

use econ_core::math::numeric::{DEFAULT_EPSILON, DEFAULT_TOLERANCE};
use std::fmt;

/// Environment variable overriding [`ModelConfig::epsilon`].
pub const ENV_EPSILON: &str = "ECON_EPSILON";
/// Environment variable overriding [`ModelConfig::returns_tolerance`].
pub const ENV_RETURNS_TOLERANCE: &str = "ECON_RETURNS_TOLERANCE";

/// Configuration shared by all page evaluators.
///
/// # Examples
/// ```
/// use econ_models::config::ModelConfig;
///
/// let config = ModelConfig::default();
/// assert_eq!(config.epsilon, 1e-9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelConfig {
    /// Floor applied to denominators of average and marginal cost
    pub epsilon: f64,
    /// Half-width of the constant-returns band around `a + b = 1`
    pub returns_tolerance: f64,
    /// Points on the labour and capital curves of the explorer page
    pub curve_points: usize,
    /// Points per axis of the production surface
    pub surface_points: usize,
    /// Points on each isoquant
    pub isoquant_points: usize,
    /// Number of isoquant levels
    pub isoquant_levels: usize,
    /// Points on the returns/profit page
    pub profit_points: usize,
    /// Points on the returns comparison page
    pub comparison_points: usize,
    /// Points on the textbook cost curves
    pub illustration_points: usize,
    /// Points on the textbook production and labour demand curves
    pub illustration_coarse_points: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            returns_tolerance: DEFAULT_TOLERANCE,
            curve_points: 100,
            surface_points: 40,
            isoquant_points: 50,
            isoquant_levels: 6,
            profit_points: 300,
            comparison_points: 200,
            illustration_points: 300,
            illustration_coarse_points: 200,
        }
    }
}

impl ModelConfig {
    /// Parse configuration from a TOML string. Missing keys take defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file.
    #[cfg(feature = "serde")]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Load, apply environment overrides and validate.
    #[cfg(feature = "serde")]
    pub fn load_with_env_and_validate(path: &std::path::Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides.
    ///
    /// Unparseable values are ignored.
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(epsilon) = lookup(ENV_EPSILON).and_then(|v| v.trim().parse().ok()) {
            self.epsilon = epsilon;
        }
        if let Some(tolerance) = lookup(ENV_RETURNS_TOLERANCE).and_then(|v| v.trim().parse().ok())
        {
            self.returns_tolerance = tolerance;
        }
        self
    }

    /// Validate the configuration, reporting every violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            errors.push(format!("epsilon must be positive and finite, got {}", self.epsilon));
        }
        if !(self.returns_tolerance.is_finite() && self.returns_tolerance >= 0.0) {
            errors.push(format!(
                "returns_tolerance must be non-negative and finite, got {}",
                self.returns_tolerance
            ));
        }

        let grids = [
            ("curve_points", self.curve_points),
            ("surface_points", self.surface_points),
            ("isoquant_points", self.isoquant_points),
            ("isoquant_levels", self.isoquant_levels),
            ("profit_points", self.profit_points),
            ("comparison_points", self.comparison_points),
            ("illustration_points", self.illustration_points),
            ("illustration_coarse_points", self.illustration_coarse_points),
        ];
        for (name, points) in grids {
            if points < 2 {
                errors.push(format!("{} must be at least 2, got {}", name, points));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }
}

/// Configuration error type.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// One or more values are out of range
    Invalid(Vec<String>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Invalid(errors) => write!(f, "Invalid configuration: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}
