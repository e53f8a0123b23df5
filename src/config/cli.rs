use crate::app::report::OutputFormat;
use crate::core::policy::CalculationPolicy;
use crate::app::info::InfoTopic;
use crate::core::{BrewRequest, FermentationMode, UnitSystem};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "mead-calc")]
#[command(about = "Calculate the honey and water needed for a mead batch")]
pub struct CliConfig {
    /// Unit system for the batch volume and results
    #[arg(long, value_enum)]
    pub unit: Option<UnitSystem>,

    /// Batch volume, in gallons or liters
    #[arg(long)]
    pub volume: Option<f64>,

    /// Target ABV in percent
    #[arg(long)]
    pub abv: Option<f64>,

    /// Dry, Semi-Sweet, Sweet or Dessert
    #[arg(long)]
    pub sweetness: Option<String>,

    /// Yeast method
    #[arg(long, value_enum)]
    pub mode: Option<FermentationMode>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Warn about an implausible gravity instead of stopping
    #[arg(long)]
    pub warn_only: bool,

    /// Accept any positive ABV
    #[arg(long)]
    pub no_abv_range: bool,

    /// Override the original gravity ceiling
    #[arg(long)]
    pub og_ceiling: Option<f64>,

    /// Print brewing notes on water or honey and exit
    #[arg(long, value_enum)]
    pub info: Option<InfoTopic>,

    /// Prompt for every value on the terminal
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// Apply command line overrides on top of a base policy
    pub fn apply_overrides(&self, mut policy: CalculationPolicy) -> CalculationPolicy {
        if self.warn_only {
            policy = policy.warn_only();
        }
        if self.no_abv_range {
            policy = policy.without_abv_range();
        }
        if let Some(ceiling) = self.og_ceiling {
            policy.og_ceiling = ceiling;
        }
        policy
    }

    /// A complete request from flags alone, or `None` when the console
    /// session has to ask for the rest.
    pub fn request(&self, default_unit: Option<UnitSystem>) -> Option<BrewRequest> {
        if self.interactive {
            return None;
        }

        let mode = self.mode.unwrap_or_default();
        let sweetness = match mode {
            // not read when fermenting dry; the engine resets it
            FermentationMode::ForcedDry => self.sweetness.clone().unwrap_or_default(),
            FermentationMode::Standard => self.sweetness.clone()?,
        };

        Some(BrewRequest {
            unit: self.unit.or(default_unit).unwrap_or_default(),
            batch_volume: self.volume?,
            abv: self.abv?,
            sweetness,
            mode,
        })
    }
}
