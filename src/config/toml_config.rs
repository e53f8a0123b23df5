use crate::app::report::OutputFormat;
use crate::core::policy::CalculationPolicy;
use crate::core::{CeilingPolicy, PolicyProvider, UnitSystem};
use crate::utils::error::{MeadError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every section and key may be left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub validation: ValidationConfig,
    pub gravity: GravityConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub enforce_abv_range: Option<bool>,
    pub abv_min: Option<f64>,
    pub abv_max: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityConfig {
    pub og_ceiling: Option<f64>,
    pub on_implausible: Option<CeilingPolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub unit: Option<UnitSystem>,
}

impl TomlConfig {
    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Reading settings from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(MeadError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MeadError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Built-in defaults overlaid with whatever the file sets
    pub fn policy(&self) -> CalculationPolicy {
        let defaults = CalculationPolicy::default();
        CalculationPolicy {
            enforce_abv_range: self
                .validation
                .enforce_abv_range
                .unwrap_or(defaults.enforce_abv_range),
            abv_min: self.validation.abv_min.unwrap_or(defaults.abv_min),
            abv_max: self.validation.abv_max.unwrap_or(defaults.abv_max),
            og_ceiling: self.gravity.og_ceiling.unwrap_or(defaults.og_ceiling),
            on_implausible: self
                .gravity
                .on_implausible
                .unwrap_or(defaults.on_implausible),
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    pub fn default_unit(&self) -> Option<UnitSystem> {
        self.output.unit
    }
}

impl PolicyProvider for TomlConfig {
    fn abv_range(&self) -> Option<(f64, f64)> {
        self.policy().abv_range()
    }

    fn og_ceiling(&self) -> f64 {
        self.policy().og_ceiling()
    }

    fn ceiling_policy(&self) -> CeilingPolicy {
        self.policy().ceiling_policy()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.policy().validate()
    }
}
