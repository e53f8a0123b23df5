use crate::domain::model::{IngredientResult, UnitSystem};
use crate::domain::units::{
    gravity_points, liters_to_gallons, pounds_to_kilograms, HONEY_GAL_PER_10_LBS,
    HONEY_L_PER_KG, HONEY_POINTS_PER_LB_PER_GAL,
};
use crate::utils::error::Result;
use crate::utils::validation::{validate_finite, validate_positive_number};

/// Honey and top-off water for a batch brewed to `og`.
///
/// The honey mass is always derived on a US gallon basis; metric batches are
/// converted to gallons first and the resulting pounds are converted to
/// kilograms afterwards. A gravity at or below 1.000 needs no honey.
pub fn calculate_ingredients(og: f64, batch_volume: f64, unit: UnitSystem) -> Result<IngredientResult> {
    validate_finite("original gravity", og)?;
    validate_positive_number("batch volume", batch_volume)?;

    let volume_gal = match unit {
        UnitSystem::UsImperial => batch_volume,
        UnitSystem::Metric => liters_to_gallons(batch_volume),
    };

    let points = (gravity_points(og) * volume_gal).max(0.0);
    let honey_lbs = points / HONEY_POINTS_PER_LB_PER_GAL;
    tracing::debug!(volume_gal, points, honey_lbs, "gallon-basis honey requirement");

    let result = match unit {
        UnitSystem::UsImperial => {
            let honey_volume_gal = honey_lbs / 10.0 * HONEY_GAL_PER_10_LBS;
            let water_gal = volume_gal - honey_volume_gal;
            IngredientResult {
                unit,
                sweetener_amount: honey_lbs,
                top_off_liquid_amount: water_gal.max(0.0),
                gravity_points_needed: points,
                sweetener_volume: honey_volume_gal,
                top_off_clamped: water_gal <= 0.0,
            }
        }
        UnitSystem::Metric => {
            let honey_kg = pounds_to_kilograms(honey_lbs);
            let honey_volume_l = honey_kg * HONEY_L_PER_KG;
            let water_l = batch_volume - honey_volume_l;
            IngredientResult {
                unit,
                sweetener_amount: honey_kg,
                top_off_liquid_amount: water_l.max(0.0),
                gravity_points_needed: points,
                sweetener_volume: honey_volume_l,
                top_off_clamped: water_l <= 0.0,
            }
        }
    };

    Ok(result)
}
