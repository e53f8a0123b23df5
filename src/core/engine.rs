use crate::core::gravity::target_gravity;
use crate::core::ingredients::calculate_ingredients;
use crate::core::policy::check_request;
use crate::core::PolicyProvider;
use crate::domain::model::{BrewPlan, BrewRequest};
use crate::domain::ports::CeilingPolicy;
use crate::utils::error::{MeadError, Result};

/// Runs one request through validation, gravity, the ceiling check and the
/// ingredient calculation, in that order.
pub struct RecipeEngine<P: PolicyProvider> {
    policy: P,
}

impl<P: PolicyProvider> RecipeEngine<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn run(&self, request: &BrewRequest) -> Result<BrewPlan> {
        let request = &request.normalized();
        tracing::info!(
            unit = ?request.unit,
            volume = request.batch_volume,
            abv = request.abv,
            sweetness = %request.sweetness,
            mode = ?request.mode,
            "Calculating batch"
        );

        check_request(&self.policy, request)?;

        let gravity = target_gravity(request.abv, &request.sweetness, request.mode)?;
        tracing::debug!(og = gravity.original_gravity, fg = gravity.final_gravity, "Target gravity");

        let mut warnings = Vec::new();
        let ceiling = self.policy.og_ceiling();
        if gravity.exceeds(ceiling) {
            let err = MeadError::ImplausibleGravityTarget {
                og: gravity.original_gravity,
                ceiling,
            };
            match self.policy.ceiling_policy() {
                CeilingPolicy::Abort => {
                    tracing::error!("{}", err);
                    return Err(err);
                }
                CeilingPolicy::Warn => {
                    tracing::warn!("{}", err);
                    warnings.push(err.user_friendly_message());
                }
            }
        }

        let ingredients =
            calculate_ingredients(gravity.original_gravity, request.batch_volume, request.unit)?;
        tracing::info!(
            honey = ingredients.sweetener_amount,
            water = ingredients.top_off_liquid_amount,
            "Calculation complete"
        );

        Ok(BrewPlan {
            request: request.clone(),
            gravity,
            ingredients,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::policy::CalculationPolicy;
    use crate::domain::model::{FermentationMode, UnitSystem};

    fn request(abv: f64, sweetness: &str) -> BrewRequest {
        BrewRequest {
            unit: UnitSystem::UsImperial,
            batch_volume: 5.0,
            abv,
            sweetness: sweetness.to_string(),
            mode: FermentationMode::Standard,
        }
    }

    #[test]
    fn test_run_semi_sweet() {
        let engine = RecipeEngine::new(CalculationPolicy::default());
        let plan = engine.run(&request(14.0, "Semi-Sweet")).unwrap();
        assert_eq!(plan.gravity.original_gravity, 1.117);
        assert!((plan.ingredients.gravity_points_needed - 585.0).abs() < 1e-6);
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_ceiling_boundary_is_accepted() {
        // Dessert: 1.030 + 25.59375 / 131.25 = 1.225 exactly
        let engine = RecipeEngine::new(CalculationPolicy::default().without_abv_range());
        let plan = engine.run(&request(25.59375, "Dessert")).unwrap();
        assert_eq!(plan.gravity.original_gravity, 1.225);
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_ceiling_abort() {
        let engine = RecipeEngine::new(CalculationPolicy::default().without_abv_range());
        let err = engine.run(&request(26.0, "Dessert")).unwrap_err();
        assert!(matches!(
            err,
            MeadError::ImplausibleGravityTarget { og, .. } if og == 1.228
        ));
    }

    #[test]
    fn test_ceiling_warn_continues() {
        let engine = RecipeEngine::new(
            CalculationPolicy::default()
                .without_abv_range()
                .warn_only(),
        );
        let plan = engine.run(&request(26.0, "Dessert")).unwrap();
        assert_eq!(plan.warnings.len(), 1);
        assert!(plan.warnings[0].contains("1.228"));
        assert!(plan.ingredients.sweetener_amount > 0.0);
    }

    #[test]
    fn test_forced_dry_plan_reports_dry() {
        let engine = RecipeEngine::new(CalculationPolicy::default());
        let mut turbo = request(14.0, "Dessert");
        turbo.mode = FermentationMode::ForcedDry;
        let plan = engine.run(&turbo).unwrap();
        assert_eq!(plan.request.sweetness, "Dry");
        assert_eq!(plan.gravity.final_gravity, 1.0);

        turbo.sweetness = String::new();
        assert_eq!(engine.run(&turbo).unwrap(), plan);
    }

    #[test]
    fn test_invalid_sweetness_stops_request() {
        let engine = RecipeEngine::new(CalculationPolicy::default());
        let err = engine.run(&request(14.0, "Medium")).unwrap_err();
        assert!(matches!(err, MeadError::InvalidSweetness { .. }));
    }

    #[test]
    fn test_out_of_range_abv_rejected_before_calculation() {
        let engine = RecipeEngine::new(CalculationPolicy::default());
        let err = engine.run(&request(30.0, "Dry")).unwrap_err();
        assert!(matches!(err, MeadError::InvalidInput { .. }));
    }
}
