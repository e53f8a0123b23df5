use serde::{Deserialize, Serialize};

/// What to do when the target original gravity is above the ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CeilingPolicy {
    /// Stop and report the error
    #[default]
    Abort,
    /// Log a warning, attach it to the plan and keep calculating
    Warn,
}

/// Caller-side rules applied around the calculators.
pub trait PolicyProvider: Send + Sync {
    /// Inclusive ABV bounds, or `None` to accept any positive ABV
    fn abv_range(&self) -> Option<(f64, f64)>;
    fn og_ceiling(&self) -> f64;
    fn ceiling_policy(&self) -> CeilingPolicy;
}
