use crate::domain::units::DRY_GRAVITY;
use crate::utils::error::MeadError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target sweetness of the finished mead, each with an assumed final gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SweetnessLevel {
    Dry,
    SemiSweet,
    Sweet,
    Dessert,
}

impl SweetnessLevel {
    pub const ALL: [SweetnessLevel; 4] = [
        SweetnessLevel::Dry,
        SweetnessLevel::SemiSweet,
        SweetnessLevel::Sweet,
        SweetnessLevel::Dessert,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SweetnessLevel::Dry => "Dry",
            SweetnessLevel::SemiSweet => "Semi-Sweet",
            SweetnessLevel::Sweet => "Sweet",
            SweetnessLevel::Dessert => "Dessert",
        }
    }

    pub fn final_gravity(&self) -> f64 {
        match self {
            SweetnessLevel::Dry => 1.000,
            SweetnessLevel::SemiSweet => 1.010,
            SweetnessLevel::Sweet => 1.020,
            SweetnessLevel::Dessert => 1.030,
        }
    }

    /// Case-insensitive lookup by label ("semi-sweet", "DRY", ...)
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(trimmed))
    }
}

impl FromStr for SweetnessLevel {
    type Err = MeadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| MeadError::InvalidSweetness {
            label: s.to_string(),
        })
    }
}

impl fmt::Display for SweetnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the yeast is expected to finish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum FermentationMode {
    #[default]
    Standard,
    /// Turbo yeast: ferments to bone dry whatever the sweetness target
    #[cfg_attr(feature = "cli", value(alias = "turbo"))]
    #[serde(alias = "turbo")]
    ForcedDry,
}

impl FermentationMode {
    /// Final gravity this mode forces, if any
    pub fn forced_final_gravity(&self) -> Option<f64> {
        match self {
            FermentationMode::Standard => None,
            FermentationMode::ForcedDry => Some(DRY_GRAVITY),
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "standard" => Some(FermentationMode::Standard),
            "2" | "forced-dry" | "forced_dry" | "turbo" => Some(FermentationMode::ForcedDry),
            _ => None,
        }
    }
}

impl FromStr for FermentationMode {
    type Err = MeadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_opt(s).ok_or_else(|| {
            MeadError::invalid_input(
                "yeast method",
                s.trim(),
                "expected 1 (Standard Yeast) or 2 (Turbo Yeast)",
            )
        })
    }
}

/// Unit system for batch volume input and ingredient output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum UnitSystem {
    /// Gallons and pounds
    #[default]
    #[cfg_attr(feature = "cli", value(alias = "us"))]
    #[serde(alias = "us")]
    UsImperial,
    /// Liters and kilograms
    Metric,
}

impl UnitSystem {
    pub fn volume_unit(&self) -> &'static str {
        match self {
            UnitSystem::UsImperial => "gallons",
            UnitSystem::Metric => "liters",
        }
    }

    pub fn mass_unit(&self) -> &'static str {
        match self {
            UnitSystem::UsImperial => "lbs",
            UnitSystem::Metric => "kg",
        }
    }

    pub fn mass_unit_long(&self) -> &'static str {
        match self {
            UnitSystem::UsImperial => "pounds",
            UnitSystem::Metric => "kilograms",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "us" | "us-imperial" | "imperial" | "gallons" => Some(UnitSystem::UsImperial),
            "2" | "metric" | "liters" | "litres" => Some(UnitSystem::Metric),
            _ => None,
        }
    }
}

impl FromStr for UnitSystem {
    type Err = MeadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_opt(s).ok_or_else(|| {
            MeadError::invalid_input(
                "unit system",
                s.trim(),
                "expected 1 (US Imperial) or 2 (Metric)",
            )
        })
    }
}

/// Starting gravity needed to reach a target ABV, and the final gravity it assumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravityTarget {
    pub original_gravity: f64,
    pub final_gravity: f64,
}

impl GravityTarget {
    /// Strict: a target sitting exactly on the ceiling is accepted.
    pub fn exceeds(&self, ceiling: f64) -> bool {
        self.original_gravity > ceiling
    }
}

impl fmt::Display for GravityTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.original_gravity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IngredientResult {
    pub unit: UnitSystem,
    /// Honey, in lbs or kg
    pub sweetener_amount: f64,
    /// Water to top off, in gallons or liters; never negative
    pub top_off_liquid_amount: f64,
    /// Always on a US gallon basis
    pub gravity_points_needed: f64,
    /// Volume the honey itself takes up, in gallons or liters
    pub sweetener_volume: f64,
    /// Honey alone meets or exceeds the batch volume
    pub top_off_clamped: bool,
}

/// Everything an adapter collected from the user for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewRequest {
    pub unit: UnitSystem,
    pub batch_volume: f64,
    pub abv: f64,
    pub sweetness: String,
    pub mode: FermentationMode,
}

impl BrewRequest {
    /// The request as calculated: forced-dry fermentation always targets Dry,
    /// whatever label was supplied.
    pub fn normalized(&self) -> BrewRequest {
        let mut request = self.clone();
        if self.mode == FermentationMode::ForcedDry {
            request.sweetness = SweetnessLevel::Dry.label().to_string();
        }
        request
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrewPlan {
    pub request: BrewRequest,
    pub gravity: GravityTarget,
    pub ingredients: IngredientResult,
    pub warnings: Vec<String>,
}
