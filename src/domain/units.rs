//! Brewing constants and conversion factors
//!
//! Every figure the calculators depend on lives here so both unit systems
//! read the same numbers.

// ============================================================================
// Gravity
// ============================================================================

/// Final gravity of a fully fermented (dry) must
pub const DRY_GRAVITY: f64 = 1.000;
/// ABV ≈ (OG - FG) × 131.25
pub const ABV_GRAVITY_FACTOR: f64 = 131.25;
/// Gravity points contributed by one pound of honey in one gallon (PPG)
pub const HONEY_POINTS_PER_LB_PER_GAL: f64 = 35.0;

// ============================================================================
// Honey displacement
// ============================================================================

/// Gallons displaced by ten pounds of honey
pub const HONEY_GAL_PER_10_LBS: f64 = 0.65;
/// Liters displaced by one kilogram of honey
pub const HONEY_L_PER_KG: f64 = 0.74;

// ============================================================================
// Unit conversion
// ============================================================================

/// Pounds per kilogram
pub const LBS_PER_KG: f64 = 2.20462;
/// US gallons per liter
pub const GAL_PER_LITER: f64 = 0.264172;

// ============================================================================
// Caller policy defaults
// ============================================================================

/// Highest original gravity accepted without a warning
pub const DEFAULT_OG_CEILING: f64 = 1.225;
/// Lowest target ABV accepted when range enforcement is on
pub const DEFAULT_ABV_MIN: f64 = 5.0;
/// Highest target ABV accepted when range enforcement is on (turbo yeast)
pub const DEFAULT_ABV_MAX: f64 = 25.0;

/// Convert liters to US gallons
pub fn liters_to_gallons(liters: f64) -> f64 {
    liters * GAL_PER_LITER
}

/// Convert pounds to kilograms
pub fn pounds_to_kilograms(lbs: f64) -> f64 {
    lbs / LBS_PER_KG
}

/// Gravity points of a specific gravity reading, e.g. 1.107 -> 107
pub fn gravity_points(specific_gravity: f64) -> f64 {
    (specific_gravity - DRY_GRAVITY) * 1000.0
}
