use anyhow::Result;
use mead_calc::{
    CalculationPolicy, ConsoleSession, FermentationMode, MeadError, OutputFormat, RecipeEngine,
    UnitSystem,
};
use std::io::Cursor;

fn run_session(
    input: &str,
    policy: CalculationPolicy,
) -> (mead_calc::Result<mead_calc::BrewPlan>, String) {
    let engine = RecipeEngine::new(policy);
    let mut console = ConsoleSession::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let result = console.run(&engine, OutputFormat::Text);
    let transcript = String::from_utf8(console.into_output()).expect("utf-8 transcript");
    (result, transcript)
}

#[test]
fn test_us_session_transcript() -> Result<()> {
    let (result, transcript) = run_session("1\n5\n14\nSemi-Sweet\n1\n", CalculationPolicy::default());
    let plan = result?;

    assert_eq!(plan.request.unit, UnitSystem::UsImperial);
    assert!(transcript.starts_with("======"));
    assert!(transcript.contains("Enter batch volume (in Gallons): "));
    assert!(transcript.contains("Target Original Gravity (OG): 1.117"));
    assert!(transcript.contains("Target Final Gravity (FG):    1.010"));
    assert!(transcript.contains("Required Honey:             16.71 lbs (pounds)"));
    assert!(transcript.contains("Required Water (to top off):  3.91 gallons"));
    assert!(transcript.contains("Total Gravity Points Needed:  585"));
    assert!(transcript.contains("ESTIMATE"));
    Ok(())
}

#[test]
fn test_metric_turbo_session() -> Result<()> {
    let (result, transcript) = run_session("2\n20\n14\nDessert\n2\n", CalculationPolicy::default());
    let plan = result?;

    assert_eq!(plan.request.mode, FermentationMode::ForcedDry);
    assert_eq!(plan.gravity.original_gravity, 1.107);
    assert_eq!(plan.request.sweetness, "Dry");
    assert!(transcript.contains("NOTE: Turbo Yeast selected."));
    assert!(transcript.contains("Target Final Gravity (FG):    1.000"));
    assert!(transcript.contains("7.33 kg (kilograms)"));
    assert!(transcript.contains("14.58 liters"));
    assert!(transcript.contains("(Based on US Gal/Lbs)"));
    Ok(())
}

#[test]
fn test_invalid_sweetness_ends_session() {
    let (result, transcript) = run_session("1\n5\n14\nMedium\n1\n", CalculationPolicy::default());
    assert!(matches!(result, Err(MeadError::InvalidSweetness { .. })));
    assert!(!transcript.contains("Calculation Results"));
}

#[test]
fn test_implausible_gravity_aborts_by_default() {
    let policy = CalculationPolicy::default().without_abv_range();
    let (result, transcript) = run_session("1\n5\n26\nDessert\n1\n", policy);
    assert!(matches!(
        result,
        Err(MeadError::ImplausibleGravityTarget { .. })
    ));
    assert!(!transcript.contains("Required Honey"));
}

#[test]
fn test_implausible_gravity_warns_when_configured() -> Result<()> {
    let policy = CalculationPolicy::default().without_abv_range().warn_only();
    let (result, transcript) = run_session("1\n5\n26\nDessert\n1\n", policy);
    let plan = result?;

    assert_eq!(plan.warnings.len(), 1);
    assert!(transcript.contains("WARNING: Calculated Original Gravity (OG=1.228)"));
    assert!(transcript.contains("Required Honey"));
    Ok(())
}

#[test]
fn test_zero_volume_rejected() {
    let (result, transcript) = run_session("1\n0\n", CalculationPolicy::default());
    assert!(matches!(result, Err(MeadError::InvalidInput { .. })));
    assert!(!transcript.contains("Enter target ABV"));
}
