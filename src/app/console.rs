use crate::app::report::{render, OutputFormat, BANNER};
use crate::core::engine::RecipeEngine;
use crate::core::policy::{check_abv, check_volume};
use crate::core::{BrewPlan, BrewRequest, FermentationMode, PolicyProvider, UnitSystem};
use crate::utils::error::{MeadError, Result};
use crate::utils::validation::validate_non_empty_string;
use std::io::{BufRead, Write};

/// Line-prompt front end. Asks for each value in turn and stops at the first
/// answer it cannot use.
pub struct ConsoleSession<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run<P: PolicyProvider>(
        &mut self,
        engine: &RecipeEngine<P>,
        format: OutputFormat,
    ) -> Result<BrewPlan> {
        write!(self.output, "{}", BANNER)?;
        let request = self.collect_request(engine.policy())?;
        let plan = engine.run(&request)?;

        writeln!(self.output)?;
        write!(self.output, "{}", render(&plan, format)?)?;
        self.output.flush()?;
        Ok(plan)
    }

    pub fn collect_request<P: PolicyProvider + ?Sized>(&mut self, policy: &P) -> Result<BrewRequest> {
        let unit: UnitSystem = self
            .prompt("\nSelect unit system (1 for US Imperial, 2 for Metric): ")?
            .parse()?;

        let label = match unit {
            UnitSystem::UsImperial => "Gallons",
            UnitSystem::Metric => "Liters",
        };
        let batch_volume =
            parse_number("volume", &self.prompt(&format!("Enter batch volume (in {}): ", label))?)?;
        check_volume(batch_volume)?;

        let abv = parse_number("ABV", &self.prompt("Enter target ABV (%, e.g., 14): ")?)?;
        check_abv(policy, abv)?;

        let sweetness = self.prompt("Enter sweetness level (Dry, Semi-Sweet, Sweet, Dessert): ")?;
        validate_non_empty_string("sweetness", &sweetness)?;

        let mode: FermentationMode = self
            .prompt(
                "Are you using Turbo Yeast Method? (1 for Standard Yeast, 2 for Turbo Yeast): ",
            )?
            .parse()?;

        tracing::debug!(?unit, batch_volume, abv, %sweetness, ?mode, "Console input collected");

        Ok(BrewRequest {
            unit,
            batch_volume,
            abv,
            sweetness,
            mode,
        })
    }

    fn prompt(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MeadError::invalid_input(
                question.trim().trim_end_matches(':'),
                "",
                "input ended before a value was entered",
            ));
        }
        Ok(line.trim().to_string())
    }
}

fn parse_number(field: &str, raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|_| MeadError::invalid_input(field, raw, "not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::policy::CalculationPolicy;
    use std::io::Cursor;

    fn session(input: &str) -> ConsoleSession<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleSession::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_collect_request() {
        let mut console = session("2\n20\n14\ndry\n1\n");
        let request = console
            .collect_request(&CalculationPolicy::default())
            .unwrap();
        assert_eq!(request.unit, UnitSystem::Metric);
        assert_eq!(request.batch_volume, 20.0);
        assert_eq!(request.sweetness, "dry");
        assert_eq!(request.mode, FermentationMode::Standard);

        let transcript = String::from_utf8(console.into_output()).unwrap();
        assert!(transcript.contains("Enter batch volume (in Liters): "));
    }

    #[test]
    fn test_invalid_unit_selection_stops() {
        let mut console = session("3\n");
        let err = console
            .collect_request(&CalculationPolicy::default())
            .unwrap_err();
        assert!(matches!(err, MeadError::InvalidInput { ref field, .. } if field == "unit system"));
    }

    #[test]
    fn test_abv_out_of_range_stops_before_sweetness() {
        let mut console = session("1\n5\n30\nDry\n1\n");
        assert!(console
            .collect_request(&CalculationPolicy::default())
            .is_err());
        let transcript = String::from_utf8(console.into_output()).unwrap();
        assert!(!transcript.contains("sweetness"));
    }

    #[test]
    fn test_negative_volume_stops_before_abv() {
        let mut console = session("1\n-5\n14\n");
        let err = console
            .collect_request(&CalculationPolicy::default())
            .unwrap_err();
        assert!(matches!(err, MeadError::InvalidInput { ref field, .. } if field == "volume"));
        let transcript = String::from_utf8(console.into_output()).unwrap();
        assert!(!transcript.contains("ABV"));
    }

    #[test]
    fn test_non_numeric_volume() {
        let mut console = session("1\nfive\n");
        let err = console
            .collect_request(&CalculationPolicy::default())
            .unwrap_err();
        assert!(matches!(err, MeadError::InvalidInput { .. }));
    }

    #[test]
    fn test_input_ends_early() {
        let mut console = session("1\n");
        assert!(console
            .collect_request(&CalculationPolicy::default())
            .is_err());
    }
}
