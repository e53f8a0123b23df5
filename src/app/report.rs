use crate::core::{BrewPlan, FermentationMode, UnitSystem};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub const BANNER: &str = "\
======================================
      Mead Ingredients Calculator
======================================
This tool calculates the approximate amount of honey needed to reach a
target Original Gravity (OG) based on your desired ABV and sweetness.
Assumptions:
 - Honey contributes 35 gravity points per pound per gallon (PPG).
 - Sweetness level determines the assumed Final Gravity (FG).
 - TURBO YEAST MODE: Forces Final Gravity (FG) to 1.000 (Dry).
";

pub const CLOSING_NOTE: &str =
    "Calculation complete. Remember this is an ESTIMATE and specific yeast/flavorings are required.";

pub fn render(plan: &BrewPlan, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(plan)),
        OutputFormat::Json => render_json(plan),
    }
}

/// Human-readable report: gravity to three decimals, amounts to two.
pub struct TextReport<'a>(pub &'a BrewPlan);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        let ingredients = &plan.ingredients;
        let unit = ingredients.unit;

        if plan.request.mode == FermentationMode::ForcedDry {
            writeln!(f, "NOTE: Turbo Yeast selected. Final Gravity (FG) forced to 1.000.\n")?;
        }
        for warning in &plan.warnings {
            writeln!(f, "{}\n", warning)?;
        }

        writeln!(f, "--- Calculation Results ---")?;
        writeln!(f, "Target Original Gravity (OG): {}", plan.gravity)?;
        writeln!(f, "Target Final Gravity (FG):    {:.3}", plan.gravity.final_gravity)?;
        writeln!(
            f,
            "Required Honey:             {:.2} {} ({})",
            ingredients.sweetener_amount,
            unit.mass_unit(),
            unit.mass_unit_long()
        )?;

        if ingredients.top_off_clamped {
            writeln!(
                f,
                "Required Water (to top off):  0.00 {} (Honey volume meets or exceeds batch volume.)",
                unit.volume_unit()
            )?;
        } else {
            writeln!(
                f,
                "Required Water (to top off):  {:.2} {}",
                ingredients.top_off_liquid_amount,
                unit.volume_unit()
            )?;
        }

        let basis = match unit {
            UnitSystem::UsImperial => "",
            UnitSystem::Metric => " (Based on US Gal/Lbs)",
        };
        writeln!(
            f,
            "Total Gravity Points Needed:  {:.0}{}",
            ingredients.gravity_points_needed, basis
        )?;

        writeln!(f, "\n{}", CLOSING_NOTE)
    }
}

pub fn render_text(plan: &BrewPlan) -> String {
    TextReport(plan).to_string()
}

pub fn render_json(plan: &BrewPlan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}
