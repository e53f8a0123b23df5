use anyhow::Result;
use mead_calc::{target_gravity, FermentationMode, MeadError, SweetnessLevel};

#[test]
fn test_standard_mode_matches_formula() -> Result<()> {
    for abv in 5..=25 {
        for level in SweetnessLevel::ALL {
            let abv = abv as f64;
            let expected =
                ((level.final_gravity() + abv / 131.25) * 1000.0).round() / 1000.0;
            let target = target_gravity(abv, level.label(), FermentationMode::Standard)?;
            assert_eq!(target.original_gravity, expected, "abv {} {}", abv, level);
            assert_eq!(target.final_gravity, level.final_gravity());
        }
    }
    Ok(())
}

#[test]
fn test_reference_values() -> Result<()> {
    assert_eq!(
        target_gravity(14.0, "Dry", FermentationMode::Standard)?.original_gravity,
        1.107
    );
    assert_eq!(
        target_gravity(14.0, "Semi-Sweet", FermentationMode::Standard)?.original_gravity,
        1.117
    );
    assert_eq!(
        target_gravity(25.0, "Dessert", FermentationMode::Standard)?.original_gravity,
        1.22
    );
    Ok(())
}

#[test]
fn test_forced_dry_is_independent_of_sweetness() -> Result<()> {
    let dessert = target_gravity(14.0, "Dessert", FermentationMode::ForcedDry)?;
    let dry = target_gravity(14.0, "Dry", FermentationMode::ForcedDry)?;
    assert_eq!(dessert, dry);
    assert_eq!(dry.final_gravity, 1.0);
    Ok(())
}

#[test]
fn test_sweetness_is_case_insensitive() -> Result<()> {
    for label in ["dry", "DRY", "Dry", "  dRy  "] {
        let target = target_gravity(10.0, label, FermentationMode::Standard)?;
        assert_eq!(target.final_gravity, 1.0, "label {:?}", label);
    }
    Ok(())
}

#[test]
fn test_unknown_sweetness_never_yields_a_number() {
    for label in ["", "Semi Sweet", "medium", "sweetish", "1"] {
        let result = target_gravity(14.0, label, FermentationMode::Standard);
        assert!(
            matches!(result, Err(MeadError::InvalidSweetness { .. })),
            "label {:?}",
            label
        );
    }
}
