use crate::domain::model::{FermentationMode, GravityTarget, SweetnessLevel};
use crate::domain::units::ABV_GRAVITY_FACTOR;
use crate::utils::error::Result;

/// Starting gravity for a target ABV, resolving the sweetness label only when
/// the fermentation mode needs it.
///
/// In forced-dry mode the label is never inspected, so an unknown label is not
/// an error there. In standard mode an unknown label yields
/// [`MeadError::InvalidSweetness`](crate::MeadError::InvalidSweetness).
pub fn target_gravity(abv: f64, sweetness: &str, mode: FermentationMode) -> Result<GravityTarget> {
    let final_gravity = match mode.forced_final_gravity() {
        Some(fg) => fg,
        None => sweetness.parse::<SweetnessLevel>()?.final_gravity(),
    };
    Ok(from_final_gravity(abv, final_gravity))
}

/// Typed variant of [`target_gravity`]; cannot fail.
pub fn target_gravity_for(
    abv: f64,
    sweetness: SweetnessLevel,
    mode: FermentationMode,
) -> GravityTarget {
    let final_gravity = mode
        .forced_final_gravity()
        .unwrap_or_else(|| sweetness.final_gravity());
    from_final_gravity(abv, final_gravity)
}

fn from_final_gravity(abv: f64, final_gravity: f64) -> GravityTarget {
    // ABV = (OG - FG) * 131.25, solved for OG
    let og = final_gravity + abv / ABV_GRAVITY_FACTOR;
    tracing::debug!(abv, final_gravity, og, "raw original gravity");

    GravityTarget {
        original_gravity: round_gravity(og),
        final_gravity,
    }
}

/// Round to three decimals, halves away from zero.
pub fn round_gravity(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
