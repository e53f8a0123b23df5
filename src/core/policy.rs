use crate::core::PolicyProvider;
use crate::domain::model::BrewRequest;
use crate::domain::ports::CeilingPolicy;
use crate::domain::units::{DEFAULT_ABV_MAX, DEFAULT_ABV_MIN, DEFAULT_OG_CEILING};
use crate::utils::error::{MeadError, Result};
use crate::utils::validation::{
    validate_finite, validate_positive_number, validate_range, Validate,
};
use serde::{Deserialize, Serialize};

/// Resolved validation and plausibility settings for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationPolicy {
    pub enforce_abv_range: bool,
    pub abv_min: f64,
    pub abv_max: f64,
    pub og_ceiling: f64,
    pub on_implausible: CeilingPolicy,
}

impl Default for CalculationPolicy {
    fn default() -> Self {
        Self {
            enforce_abv_range: true,
            abv_min: DEFAULT_ABV_MIN,
            abv_max: DEFAULT_ABV_MAX,
            og_ceiling: DEFAULT_OG_CEILING,
            on_implausible: CeilingPolicy::Abort,
        }
    }
}

impl CalculationPolicy {
    /// Warn-and-continue on an implausible gravity instead of aborting.
    pub fn warn_only(mut self) -> Self {
        self.on_implausible = CeilingPolicy::Warn;
        self
    }

    /// Accept any positive ABV.
    pub fn without_abv_range(mut self) -> Self {
        self.enforce_abv_range = false;
        self
    }
}

impl PolicyProvider for CalculationPolicy {
    fn abv_range(&self) -> Option<(f64, f64)> {
        self.enforce_abv_range.then_some((self.abv_min, self.abv_max))
    }

    fn og_ceiling(&self) -> f64 {
        self.og_ceiling
    }

    fn ceiling_policy(&self) -> CeilingPolicy {
        self.on_implausible
    }
}

impl Validate for CalculationPolicy {
    fn validate(&self) -> Result<()> {
        validate_finite("validation.abv_min", self.abv_min)?;
        validate_finite("validation.abv_max", self.abv_max)?;
        if self.abv_min > self.abv_max {
            return Err(MeadError::ConfigValidationError {
                field: "validation.abv_min".to_string(),
                message: format!(
                    "abv_min ({}) must not exceed abv_max ({})",
                    self.abv_min, self.abv_max
                ),
            });
        }
        validate_finite("gravity.og_ceiling", self.og_ceiling)?;
        if self.og_ceiling <= 1.0 {
            return Err(MeadError::ConfigValidationError {
                field: "gravity.og_ceiling".to_string(),
                message: format!("ceiling {} must be above 1.000", self.og_ceiling),
            });
        }
        Ok(())
    }
}

pub fn check_volume(volume: f64) -> Result<()> {
    validate_positive_number("volume", volume)
}

/// Positive, and inside the policy's range when one is enforced.
pub fn check_abv<P: PolicyProvider + ?Sized>(policy: &P, abv: f64) -> Result<()> {
    validate_positive_number("ABV", abv)?;
    if let Some((min, max)) = policy.abv_range() {
        validate_range("ABV", abv, min, max)?;
    }
    Ok(())
}

/// Input checks every adapter applies before the calculators run.
pub fn check_request<P: PolicyProvider + ?Sized>(policy: &P, request: &BrewRequest) -> Result<()> {
    check_volume(request.batch_volume)?;
    check_abv(policy, request.abv)
}
